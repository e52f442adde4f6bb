//! HTML node tree with escaping, typed slots, and compile-once
//! templates.

pub mod myfrom;
pub mod escape;
pub mod error;
pub mod validate;
pub mod out;
pub mod component;
pub mod tag;
pub mod slot;
pub mod context;
pub mod template;
pub mod composite;

use anyhow::Result;
use kstring::KString;

pub use component::{Component, Node};
pub use composite::{BuildContent, BuildState, Module, ModuleHead, ModuleLike};
pub use context::{RenderContext, RenderPolicy};
pub use error::ConfigError;
pub use escape::{html_escape, html_escape_into};
pub use out::{HtmlOut, Segment};
pub use slot::{Slot, SlotKey, SlotRef, SlotValue};
pub use tag::{Attributes, Tag};
pub use template::{Template, TemplateCache, TemplateComponent};

use crate::myfrom::{ks, MyFrom};

pub const NBSP: &str = "\u{00A0}";

pub const DOCTYPE: &str = "<!DOCTYPE html>\n";

pub fn att<T, U>(key: T, val: U) -> Option<(KString, KString)>
    where KString: MyFrom<T> + MyFrom<U>
{
    Some((ks(key), ks(val)))
}

pub fn opt_att<T, U>(key: T, val: Option<U>) -> Option<(KString, KString)>
    where KString: MyFrom<T> + MyFrom<U>
{
    val.map(|val| (ks(key), ks(val)))
}

/// `<name attrs>body</name>`.
pub fn element<N, I>(
    name: N,
    attrs: impl IntoIterator<Item = Option<(KString, KString)>>,
    body: I
) -> Tag
    where KString: MyFrom<N>,
          I: IntoIterator, I::Item: Into<Node>
{
    Tag::new(name).with_attributes(attrs).with_children(body)
}

/// Render `root` as a complete document, with doctype.
pub fn print_html_document(
    root: &mut (impl Component + ?Sized),
    ctx: &RenderContext
) -> Result<String> {
    let mut out = HtmlOut::with_capacity(1024);
    out.push_str(DOCTYPE);
    root.print_html(&mut out, ctx)?;
    Ok(out.into_string())
}
