use std::collections::HashSet;

use crate::codec::filter::FilterConfig;
use crate::codec::handler::HandlerTable;
use crate::codec::record_model::{FormRecord, SavedValue};
use crate::dom::classifier::{ControlKind, control_kind};
use crate::dom::dom_model::Document;
use crate::resolve::resolver::resolve;

/// Apply a record back onto a form's controls.
///
/// Custom handlers run first, once per stored value, and claim their name so
/// the default path never touches it. Default restoration then resolves
/// controls fresh for each remaining name, so controls a handler created are
/// visible to it. Names with no matching live controls are ignored.
pub fn deserialize(
    doc: &mut Document,
    form: usize,
    record: &FormRecord,
    handlers: &HandlerTable,
    filter: &FilterConfig,
    skip_external: bool,
) {
    let mut handled: HashSet<&str> = HashSet::new();

    for (name, values) in &record.entries {
        if !filter.allows_name(name) {
            continue;
        }
        if let Some(handler) = handlers.get(name) {
            for value in values {
                handler(doc, form, value);
            }
            handled.insert(name.as_str());
        }
    }

    for (name, values) in &record.entries {
        if handled.contains(name.as_str()) || !filter.allows_name(name) {
            continue;
        }
        restore_name(doc, form, name, values, filter, skip_external);
    }
}

/// Default kind-based restoration for one name. Value-consuming kinds read
/// the list positionally: the i-th same-named control takes the i-th entry.
fn restore_name(
    doc: &mut Document,
    form: usize,
    name: &str,
    values: &[SavedValue],
    filter: &FilterConfig,
    skip_external: bool,
) {
    let mut cursor = 0usize;

    for idx in resolve(doc, form, Some(name), skip_external) {
        if !filter.allows_control(&doc.controls[idx]) {
            continue;
        }
        let Some(kind) = control_kind(&doc.controls[idx]) else {
            continue;
        };

        match kind {
            ControlKind::File | ControlKind::Password => {}

            ControlKind::Radio => {
                // The radio whose value equals the first stored entry becomes
                // checked; assigning every group member keeps the group
                // consistent without simulating clicks.
                let first = values.first().and_then(SavedValue::as_text);
                let el = &mut doc.controls[idx];
                el.checked = first == Some(el.value.as_str());
            }

            ControlKind::Checkbox => {
                // A list holding any text restores the whole group by value
                // membership; an all-boolean list (the serialized shape)
                // restores positionally, unchecked past the end. Assigning
                // checked on every box means stale state cannot survive a
                // restore.
                let membership = values.iter().any(|v| v.as_text().is_some());
                let state = if membership {
                    let el_value = doc.controls[idx].value.as_str();
                    values.iter().any(|v| v.as_text() == Some(el_value))
                } else {
                    let positional = matches!(values.get(cursor), Some(SavedValue::Checked(true)));
                    cursor += 1;
                    positional
                };
                doc.controls[idx].checked = state;
            }

            ControlKind::Text | ControlKind::TextArea => {
                if let Some(text) = values.get(cursor).and_then(SavedValue::as_text) {
                    doc.controls[idx].value = text.to_string();
                }
                cursor += 1;
            }

            ControlKind::SelectOne => {
                if let Some(text) = values.get(cursor).and_then(SavedValue::as_text) {
                    let el = &mut doc.controls[idx];
                    for opt in &mut el.options {
                        opt.selected = opt.value == text;
                    }
                }
                cursor += 1;
            }

            ControlKind::SelectMultiple => {
                // Consumes the whole list: selected iff the option's value
                // appears anywhere in it
                let el = &mut doc.controls[idx];
                for opt in &mut el.options {
                    opt.selected = values.iter().any(|v| v.as_text() == Some(opt.value.as_str()));
                }
            }
        }
    }
}
