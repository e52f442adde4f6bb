//! Page-builder layer on top of `ahtml`: components, layout,
//! editable modules, and the edit overlay around modules, rows and
//! pages.

pub mod error;
pub mod overlay;
pub mod components;
pub mod layout;
pub mod modules {
    pub mod content;
    pub mod list;
}
pub mod editing {
    pub mod edit_mode;
    pub mod action;
    pub mod validation;
    pub mod editable;
    pub mod auth;
    pub mod form_fields;
    pub mod form_builder;
    pub mod edit_modal;
    pub mod editable_module;
    pub mod editable_row;
    pub mod editable_page;
}

pub use error::EditError;
pub use overlay::OverlayConfig;
pub use editing::{action::{ActionDescriptor, HttpVerb},
                  edit_mode::EditMode,
                  editable::{Editable, EditableChild, FormData},
                  validation::ValidationResult,
                  auth::AuthorizationChecker,
                  edit_modal::EditModalBuilder,
                  editable_module::EditableModule,
                  editable_row::EditableRow,
                  editable_page::EditablePage};
pub use modules::{content::{ContentBody, ContentModule},
                  list::{ListBody, ListItem, ListModule}};
