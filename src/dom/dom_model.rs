use serde::{Deserialize, Serialize};

/// One option inside a `<select>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    #[serde(default)]
    pub selected: bool,
}

/// A form-associated control as captured from the host page.
///
/// `value` carries the current text for inputs and textareas; selects keep
/// their state in `options` instead. `owner` is the index of the form the
/// control is nested in; `form_attr` is the external-association attribute
/// for controls living outside any form tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlElement {
    pub tag: String,
    #[serde(default)]
    pub r#type: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "id")]
    pub element_id: Option<String>,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default, rename = "ownerForm")]
    pub owner: Option<usize>,
    #[serde(default, rename = "formAttr")]
    pub form_attr: Option<String>,
}

impl ControlElement {
    pub fn input(input_type: &str, name: &str) -> Self {
        ControlElement {
            tag: "input".to_string(),
            r#type: Some(input_type.to_string()),
            name: Some(name.to_string()),
            element_id: None,
            value: String::new(),
            checked: false,
            multiple: false,
            options: vec![],
            owner: None,
            form_attr: None,
        }
    }

    pub fn textarea(name: &str) -> Self {
        ControlElement {
            tag: "textarea".to_string(),
            r#type: None,
            name: Some(name.to_string()),
            element_id: None,
            value: String::new(),
            checked: false,
            multiple: false,
            options: vec![],
            owner: None,
            form_attr: None,
        }
    }

    pub fn select(name: &str, multiple: bool) -> Self {
        ControlElement {
            tag: "select".to_string(),
            r#type: None,
            name: Some(name.to_string()),
            element_id: None,
            value: String::new(),
            checked: false,
            multiple,
            options: vec![],
            owner: None,
            form_attr: None,
        }
    }

    /// Value of the currently selected option of a single select, or the
    /// empty string when nothing is selected (an optionless select).
    pub fn selected_option_value(&self) -> String {
        self.options
            .iter()
            .find(|o| o.selected)
            .map(|o| o.value.clone())
            .unwrap_or_default()
    }
}

/// A `<form>` element. Only its element id matters here; the controls that
/// belong to it are found through ownership and external association.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormElement {
    #[serde(default, rename = "id")]
    pub element_id: Option<String>,
}

/// Snapshot of the host page: forms and controls in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub forms: Vec<FormElement>,
    #[serde(default)]
    pub controls: Vec<ControlElement>,
}

impl Document {
    pub fn from_snapshot(raw: &serde_json::Value) -> Result<Document, serde_json::Error> {
        serde_json::from_value(raw.clone())
    }

    /// Index of the form with the given element id.
    pub fn form_index(&self, element_id: &str) -> Option<usize> {
        self.forms
            .iter()
            .position(|f| f.element_id.as_deref() == Some(element_id))
    }

    /// Append a control, returning its index. Used by restore handlers that
    /// create controls on the fly.
    pub fn push_control(&mut self, control: ControlElement) -> usize {
        self.controls.push(control);
        self.controls.len() - 1
    }
}
