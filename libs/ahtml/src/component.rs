use std::fmt;

use anyhow::Result;
use kstring::KString;

use crate::context::RenderContext;
use crate::out::HtmlOut;
use crate::slot::Slot;
use crate::tag::Tag;

/// Anything that can write itself as HTML.
///
/// Rendering takes `&mut self` because composites build their
/// content lazily on first render.
pub trait Component {
    fn print_html(&mut self, out: &mut HtmlOut, ctx: &RenderContext) -> Result<()>;

    fn render(&mut self, ctx: &RenderContext) -> Result<String> {
        let mut out = HtmlOut::with_capacity(256);
        self.print_html(&mut out, ctx)?;
        Ok(out.into_string())
    }

    /// Render with an empty context; slots fall back to their
    /// defaults.
    fn to_html_string(&mut self) -> Result<String> {
        self.render(&RenderContext::new())
    }
}

impl<T: Component + ?Sized> Component for &mut T {
    fn print_html(&mut self, out: &mut HtmlOut, ctx: &RenderContext) -> Result<()> {
        (**self).print_html(out, ctx)
    }
}

impl<T: Component + ?Sized> Component for Box<T> {
    fn print_html(&mut self, out: &mut HtmlOut, ctx: &RenderContext) -> Result<()> {
        (**self).print_html(out, ctx)
    }
}

/// A child in a `Tag`'s body.
pub enum Node {
    Element(Tag),
    /// Escaped on output.
    Text(KString),
    /// Serialized HTML, output as is.
    Trusted(KString),
    Slot(Slot),
    Component(Box<dyn Component>),
    None,
}

impl Node {
    pub fn text(s: impl Into<KString>) -> Node {
        Node::Text(s.into())
    }

    /// Use only for HTML from a trusted source.
    pub fn trusted_html(s: impl Into<KString>) -> Node {
        Node::Trusted(s.into())
    }

    pub fn component(c: impl Component + 'static) -> Node {
        Node::Component(Box::new(c))
    }

    pub fn as_element(&self) -> Option<&Tag> {
        match self {
            Node::Element(e) => Some(e),
            _ => None
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Tag> {
        match self {
            Node::Element(e) => Some(e),
            _ => None
        }
    }
}

impl Component for Node {
    fn print_html(&mut self, out: &mut HtmlOut, ctx: &RenderContext) -> Result<()> {
        match self {
            Node::Element(e) => e.print_html(out, ctx)?,
            Node::Text(s) => out.push_escaped(s),
            Node::Trusted(s) => out.push_str(s),
            Node::Slot(slot) => slot.print_html(out, ctx)?,
            Node::Component(c) => c.print_html(out, ctx)?,
            Node::None => (),
        }
        Ok(())
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Element(e) => f.debug_tuple("Element").field(e).finish(),
            Node::Text(s) => f.debug_tuple("Text").field(s).finish(),
            Node::Trusted(s) => f.debug_tuple("Trusted").field(s).finish(),
            Node::Slot(s) => f.debug_tuple("Slot").field(s).finish(),
            Node::Component(_) => f.write_str("Component(..)"),
            Node::None => f.write_str("None"),
        }
    }
}

impl From<Tag> for Node {
    fn from(e: Tag) -> Self {
        Node::Element(e)
    }
}

impl From<Slot> for Node {
    fn from(s: Slot) -> Self {
        Node::Slot(s)
    }
}

impl From<Box<dyn Component>> for Node {
    fn from(c: Box<dyn Component>) -> Self {
        Node::Component(c)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(KString::from_ref(s))
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(KString::from_string(s))
    }
}

impl From<KString> for Node {
    fn from(s: KString) -> Self {
        Node::Text(s)
    }
}

impl<T: Into<Node>> From<Option<T>> for Node {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Node::None)
    }
}
