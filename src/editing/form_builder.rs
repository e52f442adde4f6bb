use ahtml::{RenderContext, SlotKey, SlotValue, Tag};

use crate::editing::form_fields::{checkbox_field, text_area_field, text_field};

/// The kind of form field a slot's value type is edited with.
pub trait FormFieldType {
    fn form_field(label: &str, name: &str, value: Option<SlotValue>) -> Tag;
}

fn is_long_text(name: &str) -> bool {
    let name = name.to_lowercase();
    ["content", "description", "bio"].iter().any(|w| name.contains(w))
}

impl FormFieldType for String {
    fn form_field(label: &str, name: &str, value: Option<SlotValue>) -> Tag {
        let value = value.as_ref().and_then(|v| v.as_text());
        if is_long_text(name) {
            text_area_field(label, name, value, 10)
        } else {
            text_field(label, name, value)
        }
    }
}

impl FormFieldType for bool {
    fn form_field(label: &str, name: &str, value: Option<SlotValue>) -> Tag {
        let checked = value.as_ref().and_then(|v| v.as_text()) == Some("true");
        checkbox_field(label, name, checked)
    }
}

macro_rules! plain_text_field {
    { $($t:ty)* } => {
        $(
            impl FormFieldType for $t {
                fn form_field(label: &str, name: &str, value: Option<SlotValue>) -> Tag {
                    text_field(label, name, value.as_ref().and_then(|v| v.as_text()))
                }
            }
        )*
    }
}

plain_text_field! { i32 i64 u32 u64 usize f64 }

/// "pageTitle" -> "Page Title".
pub fn format_label(name: &str) -> String {
    let mut s = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i == 0 {
            s.extend(c.to_uppercase());
        } else {
            if c.is_uppercase() {
                s.push(' ');
            }
            s.push(c);
        }
    }
    s
}

/// Builds an edit form with one field per slot, pre-filled from a
/// context.
pub struct EditFormBuilder<'c> {
    values: &'c RenderContext,
    fields: Vec<Tag>,
}

impl<'c> EditFormBuilder<'c> {
    pub fn from_slots(values: &'c RenderContext) -> Self {
        EditFormBuilder { values, fields: Vec::new() }
    }

    pub fn field<T: FormFieldType>(mut self, key: &SlotKey<T>) -> Self {
        let name = key.name();
        self.fields.push(T::form_field(&format_label(name), name, self.values.get(key)));
        self
    }

    pub fn build(self) -> Tag {
        Tag::new("div").with_children(self.fields)
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use ahtml::Component;

    use super::*;

    #[test]
    fn t_format_label() {
        assert_eq!(format_label("title"), "Title");
        assert_eq!(format_label("pageTitle"), "Page Title");
        assert_eq!(format_label("showAuthorBio"), "Show Author Bio");
    }

    #[test]
    fn t_from_slots() -> Result<()> {
        let title: SlotKey<String> = SlotKey::new("title");
        let description: SlotKey<String> = SlotKey::new("shortDescription");
        let published: SlotKey<bool> = SlotKey::new("published").with_default(true);
        let count: SlotKey<i64> = SlotKey::new("count");
        let ctx = RenderContext::new()
            .with(&title, "Hello")
            .with(&count, 3);
        let mut form = EditFormBuilder::from_slots(&ctx)
            .field(&title)
            .field(&description)
            .field(&published)
            .field(&count)
            .build();
        let html = form.to_html_string()?;
        assert!(html.contains("<p class=\"form-label\">Title:</p>"));
        assert!(html.contains("name=\"title\" class=\"form-input\" value=\"Hello\""));
        assert!(html.contains("<p class=\"form-label\">Short Description:</p>\
                               <textarea name=\"shortDescription\""));
        assert!(html.contains("name=\"published\" value=\"true\" class=\"checkbox-input\" checked"));
        assert!(html.contains("name=\"count\" class=\"form-input\" value=\"3\""));
        Ok(())
    }
}
