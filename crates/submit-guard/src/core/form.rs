use serde::{Deserialize, Serialize};

/// A snapshot of one form's controls at submit time.
///
/// The host serializes exactly the form being submitted, so everything derived
/// from a snapshot (radio groups included) is scoped to that form and never to
/// the rest of the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(default)]
    pub controls: Vec<Control>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Control {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(flatten)]
    pub kind: ControlKind,
}

/// Control kinds, tagged the way hosts serialize them.
///
/// `text` stands in for every text-like input (text, hidden, password, number
/// and friends); they all submit exactly one parameter. `button` is a button
/// that is not of submit type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlKind {
    Text {
        #[serde(default)]
        value: String,
    },
    Textarea {
        #[serde(default)]
        value: String,
    },
    Submit {
        #[serde(default)]
        value: String,
    },
    Button,
    Checkbox {
        #[serde(default)]
        checked: bool,
        #[serde(default = "default_checkbox_value")]
        value: String,
    },
    Radio {
        #[serde(default)]
        checked: bool,
        #[serde(default)]
        value: String,
    },
    Select {
        #[serde(default)]
        multiple: bool,
        #[serde(default)]
        options: Vec<SelectOption>,
    },
    File,
    Reset,
}

// Browsers submit "on" for a checked box without an explicit value.
fn default_checkbox_value() -> String {
    "on".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub selected: bool,
}

impl Control {
    /// DOM-style type label, as reported by the diagnostic inspector.
    pub fn kind_label(&self) -> &'static str {
        match self.kind {
            ControlKind::Text { .. } => "text",
            ControlKind::Textarea { .. } => "textarea",
            ControlKind::Submit { .. } => "submit",
            ControlKind::Button => "button",
            ControlKind::Checkbox { .. } => "checkbox",
            ControlKind::Radio { .. } => "radio",
            ControlKind::Select { multiple: false, .. } => "select-one",
            ControlKind::Select { multiple: true, .. } => "select-multiple",
            ControlKind::File => "file",
            ControlKind::Reset => "reset",
        }
    }
}
