use ahtml::{BuildContent, Module, ModuleHead, Node, Tag};
use anyhow::Result;
use kstring::KString;

use crate::components::{header, paragraph};
use crate::editing::editable::{Editable, EditableChild, FormData};
use crate::editing::form_fields::text_field;
use crate::editing::validation::ValidationResult;
use crate::modules::content::MAX_TITLE_CHARS;

pub type ListModule = Module<ListBody>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub id: KString,
    pub text: KString,
}

impl ListItem {
    pub fn new(id: &str, text: impl Into<KString>) -> Self {
        ListItem { id: KString::from_ref(id), text: text.into() }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ListBody {
    items: Vec<ListItem>,
}

impl ListBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, item: ListItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn add_item(&mut self, item: ListItem) {
        self.items.push(item);
    }

    pub fn remove_item(&mut self, id: &str) -> Option<ListItem> {
        let i = self.items.iter().position(|item| item.id.as_str() == id)?;
        Some(self.items.remove(i))
    }

    pub fn find_item(&self, id: &str) -> Option<&ListItem> {
        self.items.iter().find(|item| item.id.as_str() == id)
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn into_module(self) -> ListModule {
        Module::div(self).with_class("simple-list-module")
    }
}

impl BuildContent for ListBody {
    fn build_content(&mut self, head: &ModuleHead, body: &mut Vec<Node>) -> Result<()> {
        if let Some(title) = head.title().filter(|t| !t.is_empty()) {
            body.push(header(3, title.to_string()).with_class("module-title").into());
        }
        if self.items.is_empty() {
            body.push(paragraph("No items yet. Add items to see them here.")
                      .with_class("text-muted")
                      .into());
        } else {
            body.push(Tag::new("ul").with_class("list-group")
                      .with_children(self.items.iter().map(|item| {
                          Tag::new("li").with_class("list-group-item")
                              .with_attribute("data-item-id", &item.id)
                              .with_text(item.text.clone())
                      }))
                      .into());
        }
        Ok(())
    }
}

impl Editable for ListModule {
    fn build_edit_view(&self) -> Tag {
        Tag::new("div").with_child(text_field("List Title", "title", self.title()))
    }

    fn apply_edits(&mut self, form: &FormData) -> Result<()> {
        if let Some(title) = form.get("title") {
            self.set_title(if title.is_empty() { None } else { Some(KString::from_ref(title)) });
        }
        self.rebuild_content()
    }

    fn validate(&self, form: &FormData) -> ValidationResult {
        match form.get("title") {
            Some(title) if title.chars().count() > MAX_TITLE_CHARS =>
                ValidationResult::invalid(
                    format!("Title must be less than {} characters", MAX_TITLE_CHARS)),
            _ => ValidationResult::valid()
        }
    }

    fn editable_children(&self) -> Vec<EditableChild> {
        self.content().items().iter().enumerate().map(|(i, item)| {
            EditableChild::new(item.id.as_str(), format!("Item {}", i + 1))
                .with_summary(item.text.as_str())
        }).collect()
    }
}

#[cfg(test)]
mod tests {
    use ahtml::Component;

    use super::*;

    #[test]
    fn t_render_and_rebuild() -> Result<()> {
        let mut m = ListBody::new()
            .with_item(ListItem::new("i1", "one"))
            .into_module()
            .with_title("Todo");
        let html = m.to_html_string()?;
        assert!(html.contains("<h3 class=\"module-title\">Todo</h3>"));
        assert!(html.contains("<li class=\"list-group-item\" data-item-id=\"i1\">one</li>"));

        m.content_mut().add_item(ListItem::new("i2", "two"));
        assert_eq!(m.to_html_string()?, html);
        m.rebuild_content()?;
        let html = m.to_html_string()?;
        assert_eq!(html.matches("<li ").count(), 2);
        assert_eq!(html.matches("<ul ").count(), 1);
        Ok(())
    }

    #[test]
    fn t_empty() -> Result<()> {
        let mut m = ListBody::new().into_module();
        assert!(m.to_html_string()?.contains(
            "<p class=\"text-muted\">No items yet. Add items to see them here.</p>"));
        Ok(())
    }

    #[test]
    fn t_children() {
        let mut body = ListBody::new()
            .with_item(ListItem::new("a", "first"))
            .with_item(ListItem::new("b", "second"));
        assert_eq!(body.find_item("b").map(|i| i.text.as_str()), Some("second"));
        assert!(body.remove_item("zz").is_none());
        body.add_item(ListItem::new("c", "third"));
        let m = body.into_module();
        let children = m.editable_children();
        assert_eq!(children.len(), 3);
        assert_eq!(children[2], EditableChild::new("c", "Item 3").with_summary("third"));
    }
}
