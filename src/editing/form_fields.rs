//! Labelled form fields for edit views.

use ahtml::Tag;

use crate::components::{checkbox, paragraph, text_area, text_input};

fn field_group(label: &str) -> Tag {
    Tag::new("div").with_class("form-field")
        .with_child(paragraph(format!("{}:", label)).with_class("form-label"))
}

pub fn text_field(label: &str, name: &str, value: Option<&str>) -> Tag {
    field_group(label)
        .with_child(text_input(name)
                    .with_attribute("value", value.unwrap_or(""))
                    .with_style("max-width", "100%"))
}

pub fn text_area_field(label: &str, name: &str, value: Option<&str>, rows: u32) -> Tag {
    field_group(label)
        .with_child(text_area(name, rows, value.unwrap_or(""))
                    .with_style("max-width", "100%"))
}

pub fn checkbox_field(label: &str, name: &str, checked: bool) -> Tag {
    Tag::new("div").with_class("form-field")
        .with_child(checkbox(name, "true", label, checked))
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use ahtml::Component;

    use super::*;

    #[test]
    fn t_text_field() -> Result<()> {
        assert_eq!(text_field("Title", "title", Some("a\"b")).to_html_string()?,
                   "<div class=\"form-field\"><p class=\"form-label\">Title:</p>\
                    <input type=\"text\" name=\"title\" class=\"form-input\" value=\"a&quot;b\" \
                    style=\"max-width: 100%;\" /></div>");
        Ok(())
    }

    #[test]
    fn t_text_area_and_checkbox() -> Result<()> {
        let html = text_area_field("Content", "content", None, 15).to_html_string()?;
        assert!(html.contains("<textarea name=\"content\" class=\"form-textarea\" rows=\"15\" \
                               style=\"max-width: 100%;\"></textarea>"));
        let html = checkbox_field("Published", "published", false).to_html_string()?;
        assert!(html.starts_with("<div class=\"form-field\"><div class=\"form-checkbox\">"));
        assert!(!html.contains("checked"));
        Ok(())
    }
}
