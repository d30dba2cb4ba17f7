use crate::codec::filter::FilterConfig;
use crate::codec::record_model::{FormRecord, SavedValue};
use crate::dom::classifier::{ControlKind, control_kind};
use crate::dom::dom_model::Document;
use crate::resolve::resolver::resolve;

/// Convert a form's current control state into a flat record.
///
/// Walks every resolved control in document order and appends its
/// contribution to the list for its name. File and password inputs, unnamed
/// controls, and filtered names contribute nothing. Does not touch storage.
pub fn serialize(
    doc: &Document,
    form: usize,
    filter: &FilterConfig,
    skip_external: bool,
) -> FormRecord {
    let mut record = FormRecord::new();

    for idx in resolve(doc, form, None, skip_external) {
        let el = &doc.controls[idx];
        let Some(kind) = control_kind(el) else {
            continue;
        };
        if kind.is_never_persisted() {
            continue;
        }
        let Some(name) = el.name.as_deref().filter(|n| !n.is_empty()) else {
            continue;
        };
        if !filter.allows_control(el) {
            continue;
        }

        match kind {
            ControlKind::Checkbox => {
                record.push(name, SavedValue::Checked(el.checked));
            }
            ControlKind::Radio => {
                // Only the checked member of the group contributes
                if el.checked {
                    record.push(name, SavedValue::text(&el.value));
                }
            }
            ControlKind::SelectMultiple => {
                for opt in el.options.iter().filter(|o| o.selected) {
                    record.push(name, SavedValue::text(&opt.value));
                }
            }
            ControlKind::SelectOne => {
                record.push(name, SavedValue::Text(el.selected_option_value()));
            }
            ControlKind::Text | ControlKind::TextArea => {
                record.push(name, SavedValue::text(&el.value));
            }
            ControlKind::File | ControlKind::Password => {}
        }
    }

    record
}
