use crate::dom::classifier::control_kind;
use crate::dom::dom_model::Document;

/// Find every recognized control belonging to a form, as indices into
/// `doc.controls`.
///
/// Controls nested in the form come first, in document order, followed by
/// controls elsewhere in the document whose external-association attribute
/// names the form's element id. A form without an element id cannot be
/// targeted by external association, so only its nested controls resolve.
/// `skip_external` drops the document-wide pass entirely.
pub fn resolve(
    doc: &Document,
    form: usize,
    control_name: Option<&str>,
    skip_external: bool,
) -> Vec<usize> {
    let Some(form_el) = doc.forms.get(form) else {
        return vec![];
    };

    let mut found = Vec::new();

    for (idx, el) in doc.controls.iter().enumerate() {
        if el.owner != Some(form) || control_kind(el).is_none() {
            continue;
        }
        if let Some(name) = control_name {
            if el.name.as_deref() != Some(name) {
                continue;
            }
        }
        found.push(idx);
    }

    if skip_external {
        return found;
    }
    let Some(form_id) = form_el.element_id.as_deref() else {
        return found;
    };

    for (idx, el) in doc.controls.iter().enumerate() {
        if el.owner == Some(form) || control_kind(el).is_none() {
            continue;
        }
        if el.form_attr.as_deref() != Some(form_id) {
            continue;
        }
        if let Some(name) = control_name {
            if el.name.as_deref() != Some(name) {
                continue;
            }
        }
        found.push(idx);
    }

    found
}
