use crate::dom::dom_model::ControlElement;

/// The control kinds the codec understands. `File` and `Password` are
/// recognized so the resolver returns them, but they never contribute to or
/// receive values: file inputs cannot be restored by the platform and
/// passwords must never be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Text,
    Radio,
    Checkbox,
    TextArea,
    SelectOne,
    SelectMultiple,
    File,
    Password,
}

impl ControlKind {
    /// Kinds that are always excluded from serialization and restoration.
    pub fn is_never_persisted(self) -> bool {
        matches!(self, ControlKind::File | ControlKind::Password)
    }
}

/// Classify a control. `None` means the tag is not a recognized control and
/// is ignored everywhere.
pub fn control_kind(el: &ControlElement) -> Option<ControlKind> {
    match el.tag.as_str() {
        "textarea" => Some(ControlKind::TextArea),
        "select" => {
            if el.multiple {
                Some(ControlKind::SelectMultiple)
            } else {
                Some(ControlKind::SelectOne)
            }
        }
        "input" => match el.r#type.as_deref() {
            Some("radio") => Some(ControlKind::Radio),
            Some("checkbox") => Some(ControlKind::Checkbox),
            Some("file") => Some(ControlKind::File),
            Some("password") => Some(ControlKind::Password),

            // Buttons carry no restorable state
            Some("submit") | Some("button") | Some("reset") | Some("image") => None,

            // Textual inputs and hidden
            None
            | Some("text")
            | Some("hidden")
            | Some("email")
            | Some("search")
            | Some("number")
            | Some("tel")
            | Some("url")
            | Some("date")
            | Some("time")
            | Some("month")
            | Some("week")
            | Some("color")
            | Some("range") => Some(ControlKind::Text),

            // Unknown input types fall back to text, like the platform
            Some(_) => Some(ControlKind::Text),
        },
        _ => None,
    }
}
