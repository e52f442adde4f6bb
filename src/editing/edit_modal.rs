//! The modal holding a module's edit form.

use ahtml::{ConfigError, Tag};
use ahtml::validate::check_dom_id;
use auri::url_encode;
use kstring::KString;

use crate::components::{button, header, ButtonStyle, Modal};
use crate::editing::action::ActionDescriptor;
use crate::editing::editable::{Editable, EditableChild};

pub const DELETE_MODULE_CONFIRM: &str =
    "Are you sure you want to delete this module? This cannot be undone.";
pub const DELETE_CHILD_CONFIRM: &str = "Delete this item?";
pub const SAVE_INCLUDE: &str = ".modal-body input, .modal-body textarea, .modal-body select";

/// Placeholder for the child id in child URLs.
pub const CHILD_ID_PLACEHOLDER: &str = "{id}";

pub struct EditModalBuilder {
    title: KString,
    module_id: Option<KString>,
    edit_view: Option<Tag>,
    children: Vec<EditableChild>,
    save_url: Option<String>,
    delete_url: Option<String>,
    child_edit_url: Option<String>,
    child_delete_url: Option<String>,
    show_delete: bool,
    page_container_id: KString,
    modal_container_id: KString,
}

impl Default for EditModalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EditModalBuilder {
    pub fn new() -> Self {
        EditModalBuilder {
            title: KString::from_static("Edit Module"),
            module_id: None,
            edit_view: None,
            children: Vec::new(),
            save_url: None,
            delete_url: None,
            child_edit_url: None,
            child_delete_url: None,
            show_delete: true,
            page_container_id: KString::from_static("page-content"),
            modal_container_id: KString::from_static("edit-modal-container"),
        }
    }

    pub fn with_title(mut self, title: impl Into<KString>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_module_id(mut self, module_id: &str) -> Self {
        self.module_id = Some(KString::from_ref(module_id));
        self
    }

    pub fn with_edit_view(mut self, view: Tag) -> Self {
        self.edit_view = Some(view);
        self
    }

    /// Takes the edit view (unless already set) and the child list
    /// from `editable`.
    pub fn with_editable(mut self, editable: &(impl Editable + ?Sized)) -> Self {
        if self.edit_view.is_none() {
            self.edit_view = Some(editable.build_edit_view());
        }
        self.children = editable.editable_children();
        self
    }

    pub fn with_save_url(mut self, url: impl Into<String>) -> Self {
        self.save_url = Some(url.into());
        self
    }

    pub fn with_delete_url(mut self, url: impl Into<String>) -> Self {
        self.delete_url = Some(url.into());
        self
    }

    /// `url` may contain `{id}`, replaced by each child's id.
    pub fn with_child_edit_url(mut self, url: impl Into<String>) -> Self {
        self.child_edit_url = Some(url.into());
        self
    }

    pub fn with_child_delete_url(mut self, url: impl Into<String>) -> Self {
        self.child_delete_url = Some(url.into());
        self
    }

    pub fn hide_delete(mut self) -> Self {
        self.show_delete = false;
        self
    }

    pub fn with_page_container_id(mut self, id: &str) -> Result<Self, ConfigError> {
        check_dom_id(id)?;
        self.page_container_id = KString::from_ref(id);
        Ok(self)
    }

    pub fn with_modal_container_id(mut self, id: &str) -> Result<Self, ConfigError> {
        check_dom_id(id)?;
        self.modal_container_id = KString::from_ref(id);
        Ok(self)
    }

    fn children_section(&self) -> Tag {
        let modal_target = format!("#{}", self.modal_container_id);
        let mut list = Tag::new("div").with_class("list-group");
        for child in &self.children {
            let mut info = Tag::new("div")
                .with_child(Tag::new("div").with_class("fw-bold").with_text(child.label.clone()));
            if let Some(summary) = &child.summary {
                info.push_child(Tag::new("div")
                                .with_class("text-muted small text-truncate")
                                .with_style("max-width", "200px")
                                .with_text(summary.clone()));
            }
            let id = url_encode(&child.id);
            let mut actions = Tag::new("div").with_class("btn-group btn-group-sm");
            if let Some(url) = &self.child_edit_url {
                actions.push_child(
                    ActionDescriptor::get(url.replace(CHILD_ID_PLACEHOLDER, &id))
                        .with_target(&modal_target)
                        .with_swap("innerHTML")
                        .applied_to(button("Edit", ButtonStyle::Secondary)));
            }
            if let Some(url) = &self.child_delete_url {
                actions.push_child(
                    ActionDescriptor::delete(url.replace(CHILD_ID_PLACEHOLDER, &id))
                        .with_confirm(DELETE_CHILD_CONFIRM)
                        .with_target(&modal_target)
                        .with_swap("innerHTML")
                        .applied_to(button("Delete", ButtonStyle::Danger)));
            }
            list.push_child(
                Tag::new("div")
                    .with_class("list-group-item d-flex justify-content-between \
                                 align-items-center p-2")
                    .with_child(info)
                    .with_child(actions));
        }
        Tag::new("div").with_class("edit-children-section mt-4")
            .with_child(header(4, "Content Items").with_class("mb-3"))
            .with_child(list)
    }

    fn footer(&self, save_url: &str) -> Tag {
        let mut left = Tag::new("div");
        if let (true, Some(url)) = (self.show_delete, &self.delete_url) {
            left.push_child(
                ActionDescriptor::delete(url.clone())
                    .with_confirm(DELETE_MODULE_CONFIRM)
                    .with_target(format!("#{}", self.page_container_id))
                    .with_swap("none")
                    .applied_to(button("Delete", ButtonStyle::Danger)));
        }
        let cancel = button("Cancel", ButtonStyle::Secondary)
            .with_attribute("data-modal-id", &self.modal_container_id)
            .with_attribute("onclick", "document.getElementById(this.dataset.modalId).innerHTML = ''");
        let save = ActionDescriptor::post(save_url)
            .with_swap("none")
            .with_include(SAVE_INCLUDE)
            .applied_to(button("Save Changes", ButtonStyle::Primary));
        Tag::new("div").with_class("d-flex justify-content-between w-100")
            .with_child(left)
            .with_child(Tag::new("div").with_class("d-flex gap-2")
                        .with_child(cancel)
                        .with_child(save))
    }

    /// Fails if the edit view or the save URL is missing.
    pub fn build(self) -> Result<Modal, ConfigError> {
        let save_url = self.save_url.as_deref().ok_or(ConfigError::MissingField("save URL"))?;
        let footer = self.footer(save_url);
        let children = if self.children.is_empty() {
            None
        } else {
            Some(self.children_section())
        };
        let edit_view = self.edit_view.ok_or(ConfigError::MissingField("edit view"))?;
        let mut body = Tag::new("div")
            .with_child(Tag::new("div").with_class("edit-properties-section").with_child(edit_view))
            .with_child(children);
        if let Some(module_id) = &self.module_id {
            body.set_attribute("data-module-id", module_id);
        }
        Ok(Modal::new()
           .with_title(self.title)
           .with_body(body)
           .with_footer(footer)
           .close_on_backdrop(false))
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use ahtml::Component;

    use super::*;
    use crate::editing::editable::FormData;

    struct TwoItems;

    impl Editable for TwoItems {
        fn build_edit_view(&self) -> Tag {
            Tag::new("div").with_text("view")
        }
        fn apply_edits(&mut self, _form: &FormData) -> Result<()> {
            Ok(())
        }
        fn editable_children(&self) -> Vec<EditableChild> {
            vec![EditableChild::new("a1", "Item 1").with_summary("first"),
                 EditableChild::new("a2", "Item 2")]
        }
    }

    #[test]
    fn t_required_fields() {
        assert_eq!(EditModalBuilder::new().with_save_url("/s").build().err(),
                   Some(ConfigError::MissingField("edit view")));
        assert_eq!(EditModalBuilder::new().with_edit_view(Tag::new("div")).build().err(),
                   Some(ConfigError::MissingField("save URL")));
        assert!(EditModalBuilder::new().with_page_container_id("9x").is_err());
        assert!(EditModalBuilder::new().with_modal_container_id("modal x").is_err());
    }

    #[test]
    fn t_footer() -> Result<()> {
        let html = EditModalBuilder::new()
            .with_edit_view(Tag::new("div"))
            .with_save_url("/save")
            .with_delete_url("/del")
            .build()?
            .into_tag()
            .to_html_string()?;
        assert!(html.contains("hx-delete=\"/del\" hx-target=\"#page-content\" hx-swap=\"none\" \
                               hx-confirm=\"Are you sure you want to delete this module? \
                               This cannot be undone.\">Delete</button>"));
        assert!(html.contains("hx-post=\"/save\" hx-swap=\"none\" hx-include=\".modal-body input, \
                               .modal-body textarea, .modal-body select\">Save Changes</button>"));
        assert!(html.contains(">Cancel</button>"));
        let backdrop_open = &html[..html.find('>').unwrap()];
        assert!(!backdrop_open.contains("onclick"), "{}", backdrop_open);

        let html = EditModalBuilder::new()
            .with_edit_view(Tag::new("div"))
            .with_save_url("/save")
            .with_delete_url("/del")
            .hide_delete()
            .build()?
            .into_tag()
            .to_html_string()?;
        assert!(!html.contains("hx-delete"));
        Ok(())
    }

    #[test]
    fn t_children() -> Result<()> {
        let html = EditModalBuilder::new()
            .with_editable(&TwoItems)
            .with_save_url("/save")
            .with_child_edit_url("/items/{id}/edit")
            .with_child_delete_url("/items/{id}")
            .build()?
            .into_tag()
            .to_html_string()?;
        assert!(html.contains("<div class=\"edit-properties-section\"><div>view</div></div>"));
        assert!(html.contains("<h4 class=\"mb-3\">Content Items</h4>"));
        assert!(html.contains("hx-get=\"/items/a1/edit\" hx-target=\"#edit-modal-container\""));
        assert!(html.contains("hx-delete=\"/items/a2\" hx-target=\"#edit-modal-container\" \
                               hx-swap=\"innerHTML\" hx-confirm=\"Delete this item?\""));
        assert!(html.contains(">first</div>"));
        assert_eq!(html.matches("list-group-item").count(), 2);
        Ok(())
    }

    struct OddId;

    impl Editable for OddId {
        fn build_edit_view(&self) -> Tag {
            Tag::new("div")
        }
        fn apply_edits(&mut self, _form: &FormData) -> Result<()> {
            Ok(())
        }
        fn editable_children(&self) -> Vec<EditableChild> {
            vec![EditableChild::new("a b&c/d", "Item 1")]
        }
    }

    #[test]
    fn t_child_ids_are_url_encoded() -> Result<()> {
        let html = EditModalBuilder::new()
            .with_editable(&OddId)
            .with_save_url("/save")
            .with_child_edit_url("/items/{id}/edit")
            .with_child_delete_url("/items/{id}")
            .build()?
            .into_tag()
            .to_html_string()?;
        assert!(html.contains("hx-get=\"/items/a%20b%26c%2Fd/edit\""));
        assert!(html.contains("hx-delete=\"/items/a%20b%26c%2Fd\""));
        Ok(())
    }
}
