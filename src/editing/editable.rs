use std::collections::HashMap;

use ahtml::Tag;
use anyhow::Result;
use serde::Serialize;

use crate::editing::validation::ValidationResult;

/// Submitted form fields by name.
pub type FormData = HashMap<String, String>;

/// A module that can be edited through a form.
pub trait Editable {
    /// The form fields for the current state.
    fn build_edit_view(&self) -> Tag;

    /// Takes over the values present in `form` and rebuilds the
    /// module's content.
    fn apply_edits(&mut self, form: &FormData) -> Result<()>;

    fn validate(&self, _form: &FormData) -> ValidationResult {
        ValidationResult::valid()
    }

    /// Items inside the module with their own edit/delete actions.
    fn editable_children(&self) -> Vec<EditableChild> {
        Vec::new()
    }
}

/// Validates `form` and applies it only if valid.
pub fn apply_validated<E: Editable + ?Sized>(
    editable: &mut E, form: &FormData
) -> Result<ValidationResult> {
    let result = editable.validate(form);
    if result.is_valid() {
        editable.apply_edits(form)?;
    }
    Ok(result)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditableChild {
    pub id: String,
    pub label: String,
    pub summary: Option<String>,
}

impl EditableChild {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        EditableChild { id: id.into(), label: label.into(), summary: None }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }
}
