use crate::submission::FieldValue;
use crate::validate::UploadPolicy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Phone,
    Date,
    Number,
    TextArea,
    Choice(&'static [Choice]),
    Checkbox,
    Upload(UploadPolicy),
}

impl InputKind {
    /// The `type` attribute of the rendered `<input>`, if it is one.
    pub fn html_type(&self) -> Option<&'static str> {
        match self {
            InputKind::Text => Some("text"),
            InputKind::Email => Some("email"),
            InputKind::Phone => Some("tel"),
            InputKind::Date => Some("date"),
            InputKind::Number => Some("number"),
            InputKind::Checkbox => Some("checkbox"),
            InputKind::Upload(_) => Some("file"),
            InputKind::TextArea | InputKind::Choice(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rule {
    Optional,
    /// Must be filled in (or ticked); the message is shown otherwise.
    Required(&'static str),
    /// Required whole number within `min..=max`.
    Range {
        missing: &'static str,
        min: u32,
        max: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub rule: Rule,
}

impl FieldSpec {
    pub const fn new(id: &'static str, label: &'static str, input: InputKind, rule: Rule) -> Self {
        FieldSpec {
            id,
            label,
            input,
            rule,
        }
    }

    pub fn is_required(&self) -> bool {
        match self.input {
            InputKind::Upload(policy) => policy.required,
            _ => !matches!(self.rule, Rule::Optional),
        }
    }

    pub fn choices(&self) -> &'static [Choice] {
        match self.input {
            InputKind::Choice(choices) => choices,
            _ => &[],
        }
    }

    /// Display label of a coded choice value; unknown values are shown as typed.
    pub fn display_value<'a>(&self, value: &'a str) -> &'a str {
        self.choices()
            .iter()
            .find(|choice| choice.value == value)
            .map(|choice| choice.label)
            .unwrap_or(value)
    }

    /// Whether leaving the field removes its error annotation.
    pub fn clears_on_blur(&self, value: &FieldValue) -> bool {
        match self.input {
            InputKind::Checkbox | InputKind::Upload(_) => true,
            _ => !value.as_text().trim().is_empty(),
        }
    }
}
