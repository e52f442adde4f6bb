//! Action descriptors: what a control asks the client-side runtime
//! to do (request, where to put the response, how, after what
//! confirmation), emitted as `hx-*` attributes.

use ahtml::Tag;
use auri::append_query_param;
use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

use crate::editing::edit_mode::EditMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpVerb {
    pub const ALL: [HttpVerb; 5] =
        [HttpVerb::Get, HttpVerb::Post, HttpVerb::Put, HttpVerb::Patch, HttpVerb::Delete];

    pub fn attribute_name(self) -> &'static str {
        match self {
            HttpVerb::Get => "hx-get",
            HttpVerb::Post => "hx-post",
            HttpVerb::Put => "hx-put",
            HttpVerb::Patch => "hx-patch",
            HttpVerb::Delete => "hx-delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionDescriptor {
    pub verb: HttpVerb,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub swap: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<String>,
    /// Additional form elements to send along (`hx-include`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
}

impl ActionDescriptor {
    pub fn new(verb: HttpVerb, url: impl Into<String>) -> Self {
        ActionDescriptor {
            verb,
            url: url.into(),
            target: None,
            swap: None,
            confirm: None,
            include: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpVerb::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpVerb::Post, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(HttpVerb::Delete, url)
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    pub fn with_swap(mut self, swap: impl Into<String>) -> Self {
        self.swap = Some(swap.into());
        self
    }

    pub fn with_confirm(mut self, confirm: impl Into<String>) -> Self {
        self.confirm = Some(confirm.into());
        self
    }

    pub fn with_include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    /// Adds `editMode=<MODE>` to the URL's query.
    pub fn with_edit_mode(mut self, mode: Option<EditMode>) -> Self {
        if let Some(mode) = mode {
            self.url = append_query_param(&self.url, EditMode::QUERY_PARAM, mode.as_str());
        }
        self
    }

    /// Sets the `hx-*` attributes on `tag`.
    pub fn apply_to(&self, tag: &mut Tag) {
        tag.set_attribute(self.verb.attribute_name(), &self.url);
        if let Some(target) = &self.target {
            tag.set_attribute("hx-target", target);
        }
        if let Some(swap) = &self.swap {
            tag.set_attribute("hx-swap", swap);
        }
        if let Some(confirm) = &self.confirm {
            tag.set_attribute("hx-confirm", confirm);
        }
        if let Some(include) = &self.include {
            tag.set_attribute("hx-include", include);
        }
    }

    pub fn applied_to(&self, mut tag: Tag) -> Tag {
        self.apply_to(&mut tag);
        tag
    }

    /// The descriptor carried by `tag`, if any.
    pub fn from_tag(tag: &Tag) -> Option<Self> {
        let (verb, url) = HttpVerb::ALL.iter()
            .find_map(|v| tag.attribute(v.attribute_name()).map(|url| (*v, url)))?;
        let opt = |name: &str| tag.attribute(name).map(String::from);
        Some(ActionDescriptor {
            verb,
            url: url.into(),
            target: opt("hx-target"),
            swap: opt("hx-swap"),
            confirm: opt("hx-confirm"),
            include: opt("hx-include"),
        })
    }
}
