use serde::Serialize;
use strum_macros::{Display, EnumString, IntoStaticStr};

/// Whether edits apply immediately (owner) or need approval (user).
/// Sent to the server as the `editMode` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,
         Serialize, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EditMode {
    UserEdit,
    OwnerEdit,
}

impl EditMode {
    pub const QUERY_PARAM: &'static str = "editMode";

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_names() {
        assert_eq!(EditMode::UserEdit.as_str(), "USER_EDIT");
        assert_eq!(EditMode::OwnerEdit.to_string(), "OWNER_EDIT");
        assert_eq!("USER_EDIT".parse::<EditMode>().ok(), Some(EditMode::UserEdit));
        assert_eq!(serde_json::to_string(&EditMode::OwnerEdit).ok().as_deref(),
                   Some("\"OWNER_EDIT\""));
    }
}
