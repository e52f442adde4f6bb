use ahtml::{BuildContent, Module, ModuleHead, Node, SlotValue, Tag};
use anyhow::Result;
use kstring::KString;

use crate::components::header;
use crate::editing::editable::{Editable, FormData};
use crate::editing::form_fields::{text_area_field, text_field};
use crate::editing::validation::ValidationResult;

pub const MAX_TITLE_CHARS: usize = 200;

/// A titled block of text, or of custom content.
pub type ContentModule = Module<ContentBody>;

#[derive(Debug, Clone, Default)]
pub struct ContentBody {
    text: Option<KString>,
    custom: Option<SlotValue>,
}

impl ContentBody {
    pub fn text(text: impl Into<KString>) -> Self {
        ContentBody { text: Some(text.into()), custom: None }
    }

    /// Rendered instead of the text.
    pub fn custom(content: impl Into<SlotValue>) -> Self {
        ContentBody { text: None, custom: Some(content.into()) }
    }

    pub fn get_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text(&mut self, text: Option<KString>) {
        self.text = text;
    }

    pub fn into_module(self) -> ContentModule {
        Module::div(self).with_class("content-module")
    }
}

impl BuildContent for ContentBody {
    fn build_content(&mut self, head: &ModuleHead, body: &mut Vec<Node>) -> Result<()> {
        if let Some(title) = head.title().filter(|t| !t.is_empty()) {
            body.push(header(2, title.to_string()).with_class("module-title").into());
        }
        let mut content = Tag::new("div").with_class("module-content");
        if let Some(custom) = &self.custom {
            content.push_child(Node::component(custom.clone()));
        } else if let Some(text) = &self.text {
            content.set_text(text.clone());
        }
        body.push(content.into());
        Ok(())
    }
}

fn non_empty(s: &str) -> Option<KString> {
    if s.is_empty() {
        None
    } else {
        Some(KString::from_ref(s))
    }
}

impl Editable for ContentModule {
    fn build_edit_view(&self) -> Tag {
        Tag::new("div")
            .with_child(text_field("Title", "title", self.title()))
            .with_child(text_area_field("Content", "content", self.content().get_text(), 15))
    }

    fn apply_edits(&mut self, form: &FormData) -> Result<()> {
        if let Some(title) = form.get("title") {
            self.set_title(non_empty(title));
        }
        if let Some(content) = form.get("content") {
            self.content_mut().set_text(Some(KString::from_ref(content)));
        }
        self.rebuild_content()
    }

    fn validate(&self, form: &FormData) -> ValidationResult {
        let mut errors = Vec::new();
        if let Some(title) = form.get("title") {
            if title.chars().count() > MAX_TITLE_CHARS {
                errors.push(format!("Title must be less than {} characters", MAX_TITLE_CHARS));
            }
        }
        if form.get("content").map(|c| c.trim().is_empty()).unwrap_or(true) {
            errors.push("Content cannot be empty".into());
        }
        ValidationResult::from_errors(errors)
    }
}
