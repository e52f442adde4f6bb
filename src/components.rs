//! Free-standing builders for the common elements of the page
//! builder.

use std::sync::atomic::{AtomicU64, Ordering};

use ahtml::{att, ConfigError, Node, Tag};
use ahtml::validate::check_dom_id;
use kstring::KString;
use strum_macros::{Display, EnumString, IntoStaticStr};

pub fn div<I>(attrs: impl IntoIterator<Item = Option<(KString, KString)>>, body: I) -> Tag
where I: IntoIterator, I::Item: Into<Node>
{
    ahtml::element("div", attrs, body)
}

pub fn span<I>(attrs: impl IntoIterator<Item = Option<(KString, KString)>>, body: I) -> Tag
where I: IntoIterator, I::Item: Into<Node>
{
    ahtml::element("span", attrs, body)
}

pub fn paragraph(text: impl Into<KString>) -> Tag {
    Tag::new("p").with_text(text)
}

/// `level` is clamped to 1..=6.
pub fn header(level: u8, text: impl Into<KString>) -> Tag {
    let name = match level.clamp(1, 6) {
        1 => "h1",
        2 => "h2",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        _ => "h6",
    };
    Tag::new(name).with_text(text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Link,
}

impl ButtonStyle {
    pub fn css_class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn-primary",
            ButtonStyle::Secondary => "btn-secondary",
            ButtonStyle::Success => "btn-success",
            ButtonStyle::Danger => "btn-danger",
            ButtonStyle::Warning => "btn-warning",
            ButtonStyle::Info => "btn-info",
            ButtonStyle::Link => "btn-link",
        }
    }
}

/// A `type="button"` button, so that it never submits a form.
pub fn button(label: impl Into<KString>, style: ButtonStyle) -> Tag {
    Tag::new("button")
        .with_attribute("type", "button")
        .with_class("btn")
        .with_class(style.css_class())
        .with_text(label)
}

pub fn text_input(name: &str) -> Tag {
    Tag::self_closing("input")
        .with_attributes([att("type", "text"), att("name", name), att("class", "form-input")])
}

pub fn text_area(name: &str, rows: u32, value: &str) -> Tag {
    Tag::new("textarea")
        .with_attributes([att("name", name), att("class", "form-textarea"), att("rows", rows)])
        .with_text(value.to_string())
}

pub fn checkbox(name: &str, value: &str, label: &str, checked: bool) -> Tag {
    let mut input = Tag::self_closing("input")
        .with_attributes([att("type", "checkbox"),
                          att("name", name),
                          att("value", value),
                          att("class", "checkbox-input")]);
    if checked {
        input = input.with_flag("checked");
    }
    Tag::new("div").with_class("form-checkbox")
        .with_child(input)
        .with_child(Tag::new("label").with_class("checkbox-label").with_text(label.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum AlertKind {
    Info,
    Success,
    Warning,
    Danger,
}

pub fn alert(kind: AlertKind, message: impl Into<KString>) -> Tag {
    let kind: &'static str = kind.into();
    Tag::new("div")
        .with_class("alert")
        .with_class(&format!("alert-{}", kind))
        .with_text(message)
}

static NEXT_MODAL_ID: AtomicU64 = AtomicU64::new(1);

/// A dialog: backdrop, container, header with title and close
/// button, body, and footer.
pub struct Modal {
    modal_id: KString,
    title: Option<KString>,
    body: Option<Node>,
    footer: Option<Node>,
    close_on_backdrop: bool,
    close_on_escape: bool,
    show_close_button: bool,
}

impl Default for Modal {
    fn default() -> Self {
        Self::new()
    }
}

impl Modal {
    pub fn new() -> Self {
        let n = NEXT_MODAL_ID.fetch_add(1, Ordering::Relaxed);
        Modal {
            modal_id: KString::from_string(format!("modal-{}", n)),
            title: None,
            body: None,
            footer: None,
            close_on_backdrop: true,
            close_on_escape: true,
            show_close_button: true,
        }
    }

    pub fn with_modal_id(mut self, id: &str) -> Result<Self, ConfigError> {
        check_dom_id(id)?;
        self.modal_id = KString::from_ref(id);
        Ok(self)
    }

    pub fn modal_id(&self) -> &str {
        &self.modal_id
    }

    pub fn with_title(mut self, title: impl Into<KString>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Node>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<Node>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn close_on_backdrop(mut self, on: bool) -> Self {
        self.close_on_backdrop = on;
        self
    }

    pub fn close_on_escape(mut self, on: bool) -> Self {
        self.close_on_escape = on;
        self
    }

    pub fn show_close_button(mut self, on: bool) -> Self {
        self.show_close_button = on;
        self
    }

    pub fn into_tag(self) -> Tag {
        let remove = format!("document.getElementById('{}').remove()", self.modal_id);
        let mut backdrop = Tag::new("div")
            .with_class("modal-backdrop")
            .with_attribute("id", &self.modal_id);
        if self.close_on_backdrop {
            backdrop.set_attribute("onclick", &remove);
        }
        if self.close_on_escape {
            backdrop.set_attribute("onkeydown", "if(event.key === 'Escape') this.remove()");
        }
        backdrop.set_attribute("tabindex", "0");

        let mut container = Tag::new("div")
            .with_class("modal-container")
            .with_attribute("onclick", "event.stopPropagation()");
        if self.title.is_some() || self.show_close_button {
            let mut header = Tag::new("div").with_class("modal-header");
            header.push_child(match self.title {
                Some(title) => Tag::new("h3").with_class("modal-title").with_text(title),
                None => Tag::new("div"),
            });
            if self.show_close_button {
                header.push_child(
                    Tag::new("button")
                        .with_attributes([att("type", "button"),
                                          att("class", "modal-close"),
                                          att("onclick", &remove),
                                          att("aria-label", "Close")])
                        .with_unsafe_html("&times;"));
            }
            container.push_child(header);
        }
        if let Some(body) = self.body {
            container.push_child(Tag::new("div").with_class("modal-body").with_child(body));
        }
        if let Some(footer) = self.footer {
            container.push_child(Tag::new("div").with_class("modal-footer").with_child(footer));
        }
        backdrop.with_child(container)
    }
}

impl From<Modal> for Tag {
    fn from(m: Modal) -> Self {
        m.into_tag()
    }
}

impl From<Modal> for Node {
    fn from(m: Modal) -> Self {
        Node::Element(m.into_tag())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use ahtml::Component;

    use super::*;

    #[test]
    fn t_button() -> Result<()> {
        assert_eq!(button("Go <now>", ButtonStyle::Danger).to_html_string()?,
                   "<button type=\"button\" class=\"btn btn-danger\">Go &lt;now&gt;</button>");
        assert_eq!("secondary".parse::<ButtonStyle>().ok(), Some(ButtonStyle::Secondary));
        Ok(())
    }

    #[test]
    fn t_form_elements() -> Result<()> {
        assert_eq!(text_input("title").to_html_string()?,
                   "<input type=\"text\" name=\"title\" class=\"form-input\" />");
        assert_eq!(text_area("content", 4, "a<b").to_html_string()?,
                   "<textarea name=\"content\" class=\"form-textarea\" rows=\"4\">a&lt;b</textarea>");
        assert_eq!(checkbox("pub", "true", "Published", true).to_html_string()?,
                   "<div class=\"form-checkbox\"><input type=\"checkbox\" name=\"pub\" \
                    value=\"true\" class=\"checkbox-input\" checked />\
                    <label class=\"checkbox-label\">Published</label></div>");
        Ok(())
    }

    #[test]
    fn t_alert_and_header() -> Result<()> {
        assert_eq!(alert(AlertKind::Danger, "No").to_html_string()?,
                   "<div class=\"alert alert-danger\">No</div>");
        assert_eq!(header(9, "x").name(), "h6");
        assert_eq!(header(0, "x").name(), "h1");
        Ok(())
    }

    #[test]
    fn t_modal() -> Result<()> {
        let html = Modal::new().with_modal_id("m1")?
            .with_title("T & U")
            .with_body(paragraph("body"))
            .close_on_backdrop(false)
            .into_tag()
            .to_html_string()?;
        assert!(html.starts_with("<div class=\"modal-backdrop\" id=\"m1\" onkeydown="));
        assert!(html.contains("<h3 class=\"modal-title\">T &amp; U</h3>"));
        assert!(html.contains("<div class=\"modal-body\"><p>body</p></div>"));
        assert!(!html.contains("modal-footer"));
        assert!(Modal::new().with_modal_id("bad id").is_err());
        Ok(())
    }
}
