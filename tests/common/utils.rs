#![allow(dead_code)]

use form_persistence::{ControlElement, Document, FormElement, FormRecord, SavedValue, SelectOption};

/// Document with a single form (index 0) and the given controls.
pub fn form_doc(form_id: Option<&str>, controls: Vec<ControlElement>) -> Document {
    Document {
        forms: vec![FormElement {
            element_id: form_id.map(str::to_string),
        }],
        controls,
    }
}

/// Mark a control as nested inside form 0.
pub fn nested(mut el: ControlElement) -> ControlElement {
    el.owner = Some(0);
    el
}

/// Mark a control as externally associated with the given form element id.
pub fn external(mut el: ControlElement, form_id: &str) -> ControlElement {
    el.form_attr = Some(form_id.to_string());
    el
}

pub fn text(name: &str, value: &str) -> ControlElement {
    let mut el = ControlElement::input("text", name);
    el.value = value.to_string();
    el
}

pub fn hidden(name: &str, value: &str) -> ControlElement {
    let mut el = ControlElement::input("hidden", name);
    el.value = value.to_string();
    el
}

pub fn checkbox(name: &str, value: &str, checked: bool) -> ControlElement {
    let mut el = ControlElement::input("checkbox", name);
    el.value = value.to_string();
    el.checked = checked;
    el
}

pub fn radio(name: &str, value: &str, checked: bool) -> ControlElement {
    let mut el = ControlElement::input("radio", name);
    el.value = value.to_string();
    el.checked = checked;
    el
}

pub fn textarea_with(name: &str, value: &str) -> ControlElement {
    let mut el = ControlElement::textarea(name);
    el.value = value.to_string();
    el
}

pub fn select_one(name: &str, options: &[(&str, bool)]) -> ControlElement {
    let mut el = ControlElement::select(name, false);
    el.options = to_options(options);
    el
}

pub fn select_multi(name: &str, options: &[(&str, bool)]) -> ControlElement {
    let mut el = ControlElement::select(name, true);
    el.options = to_options(options);
    el
}

pub fn file_input(name: &str) -> ControlElement {
    ControlElement::input("file", name)
}

pub fn password(name: &str, value: &str) -> ControlElement {
    let mut el = ControlElement::input("password", name);
    el.value = value.to_string();
    el
}

pub fn record(entries: &[(&str, Vec<SavedValue>)]) -> FormRecord {
    let mut rec = FormRecord::new();
    for (name, values) in entries {
        for value in values {
            rec.push(name, value.clone());
        }
    }
    rec
}

pub fn texts(values: &[&str]) -> Vec<SavedValue> {
    values.iter().map(|v| SavedValue::text(v)).collect()
}

fn to_options(options: &[(&str, bool)]) -> Vec<SelectOption> {
    options
        .iter()
        .map(|(value, selected)| SelectOption {
            value: value.to_string(),
            selected: *selected,
        })
        .collect()
}

/// Values currently selected in a select control, in option order.
pub fn selected_values(el: &ControlElement) -> Vec<String> {
    el.options
        .iter()
        .filter(|o| o.selected)
        .map(|o| o.value.clone())
        .collect()
}
