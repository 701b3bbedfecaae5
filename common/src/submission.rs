use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::fields::InputKind;
use crate::kind::FormKind;

/// Metadata of a chosen file. The file contents never leave the browser.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
}

impl FileMeta {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        FileMeta {
            name: name.into(),
            size,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Files(Vec<FileMeta>),
}

impl FieldValue {
    pub fn empty_for(input: &InputKind) -> Self {
        match input {
            InputKind::Checkbox => FieldValue::Flag(false),
            InputKind::Upload(_) => FieldValue::Files(vec![]),
            _ => FieldValue::Text(String::new()),
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            _ => "",
        }
    }

    pub fn is_checked(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    pub fn files(&self) -> &[FileMeta] {
        match self {
            FieldValue::Files(files) => files,
            _ => &[],
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Flag(checked) => !checked,
            FieldValue::Files(files) => files.is_empty(),
        }
    }
}

/// Values of one form at the moment it is submitted, keyed by field id.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormSubmission {
    values: BTreeMap<String, FieldValue>,
}

impl FormSubmission {
    pub fn new() -> Self {
        Default::default()
    }

    /// A submission holding an empty value for every field of `kind`.
    pub fn blank(kind: FormKind) -> Self {
        let values = kind
            .fields()
            .iter()
            .map(|spec| (spec.id.to_owned(), FieldValue::empty_for(&spec.input)))
            .collect();
        FormSubmission { values }
    }

    pub fn set(&mut self, id: impl Into<String>, value: FieldValue) {
        self.values.insert(id.into(), value);
    }

    pub fn with(mut self, id: impl Into<String>, value: FieldValue) -> Self {
        self.set(id, value);
        self
    }

    pub fn with_text(self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.with(id, FieldValue::Text(text.into()))
    }

    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.values.get(id)
    }

    /// Trimmed text of a field, empty when absent or not a text field.
    pub fn text(&self, id: &str) -> &str {
        self.get(id).map(|v| v.as_text().trim()).unwrap_or_default()
    }

    pub fn is_checked(&self, id: &str) -> bool {
        self.get(id).map(FieldValue::is_checked).unwrap_or(false)
    }

    pub fn files(&self, id: &str) -> &[FileMeta] {
        self.get(id).map(FieldValue::files).unwrap_or(&[])
    }
}
