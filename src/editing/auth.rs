//! Permission checks are done elsewhere; this is only the contract
//! and what to show when a check fails.

use ahtml::Tag;
use anyhow::Result;

use crate::components::{alert, AlertKind, Modal};
use crate::editing::edit_mode::EditMode;

pub trait AuthorizationChecker {
    fn can_edit(&self, module_id: &str, user_id: &str) -> bool;
    fn can_delete(&self, module_id: &str, user_id: &str) -> bool;
    fn edit_mode(&self, module_id: &str, user_id: &str) -> EditMode;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedAction {
    Edit,
    Delete,
    Create,
}

impl GuardedAction {
    pub fn denial_message(self) -> &'static str {
        match self {
            GuardedAction::Edit => "Permission denied",
            GuardedAction::Delete => "You do not have permission to delete this content",
            GuardedAction::Create => "You do not have permission to create content",
        }
    }
}

pub fn unauthorized_modal(message: &str) -> Tag {
    Modal::new()
        .with_title("Unauthorized")
        .with_body(alert(AlertKind::Danger, message.to_string()))
        .into_tag()
}

/// Runs `action` if `authorized`, else returns the "Unauthorized"
/// modal for `what`.
pub fn require_authorized(
    authorized: bool,
    what: GuardedAction,
    action: impl FnOnce() -> Result<Tag>
) -> Result<Tag> {
    if authorized {
        action()
    } else {
        Ok(unauthorized_modal(what.denial_message()))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use ahtml::Component;

    use super::*;

    #[test]
    fn t_require_authorized() -> Result<()> {
        let ran = Cell::new(false);
        let mut out = require_authorized(false, GuardedAction::Delete, || {
            ran.set(true);
            Ok(Tag::new("form"))
        })?;
        assert!(!ran.get());
        let html = out.to_html_string()?;
        assert!(html.contains("Unauthorized"));
        assert!(html.contains(
            "<div class=\"alert alert-danger\">You do not have permission to delete this content</div>"));

        let mut out = require_authorized(true, GuardedAction::Edit, || Ok(Tag::new("form")))?;
        assert_eq!(out.to_html_string()?, "<form></form>");
        Ok(())
    }
}
