//! Named, typed placeholders whose values are supplied at render
//! time by a `RenderContext`.

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{bail, Result};
use chj_util::warn;
use kstring::KString;

use crate::component::Component;
use crate::context::RenderContext;
use crate::out::HtmlOut;
use crate::tag::Tag;

type DefaultFn = dyn Fn(&RenderContext) -> Option<SlotValue> + Send + Sync;

/// The untyped identity of a slot: its name and optional default.
/// Equality and hashing go by name only.
#[derive(Clone)]
pub struct SlotRef {
    name: KString,
    default: Option<Arc<DefaultFn>>,
}

impl SlotRef {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_kstring(&self) -> &KString {
        &self.name
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// The default value, computed against `ctx`.
    pub fn default_value(&self, ctx: &RenderContext) -> Option<SlotValue> {
        self.default.as_ref().and_then(|f| f(ctx))
    }

    /// How this slot appears in a template's source form.
    pub fn placeholder(&self) -> String {
        format!("{{{{SLOT:{}}}}}", self.name)
    }
}

impl PartialEq for SlotRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for SlotRef {}

impl Hash for SlotRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state)
    }
}

impl fmt::Debug for SlotRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotRef({:?}{})", self.name.as_str(),
               if self.has_default() { ", with default" } else { "" })
    }
}

/// A typed key for a slot. `T` is the type of value the key accepts
/// in `RenderContext::put`.
pub struct SlotKey<T> {
    slot: SlotRef,
    t: PhantomData<fn() -> T>,
}

// derive is broken when using PhantomData
impl<T> Clone for SlotKey<T> {
    fn clone(&self) -> Self {
        SlotKey { slot: self.slot.clone(), t: PhantomData }
    }
}

impl<T> fmt::Debug for SlotKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotKey({:?})", self.slot.name.as_str())
    }
}

impl<T, U> PartialEq<SlotKey<U>> for SlotKey<T> {
    fn eq(&self, other: &SlotKey<U>) -> bool {
        self.slot.name == other.slot.name
    }
}

impl<T> Eq for SlotKey<T> {}

impl<T> Hash for SlotKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.hash(state)
    }
}

impl<T> SlotKey<T> {
    pub fn new(name: &str) -> Self {
        SlotKey {
            slot: SlotRef { name: KString::from_ref(name), default: None },
            t: PhantomData
        }
    }

    /// Used when no value is present in the context.
    pub fn with_default(mut self, value: T) -> Self
    where T: Into<SlotValue> + Clone + Send + Sync + 'static
    {
        self.slot.default = Some(Arc::new(move |_| Some(value.clone().into())));
        self
    }

    /// A default computed from the context at each render, so it
    /// tracks the latest values of other slots.
    pub fn with_default_fn<F>(mut self, f: F) -> Self
    where F: Fn(&RenderContext) -> Option<T> + Send + Sync + 'static,
          T: Into<SlotValue>
    {
        self.slot.default = Some(Arc::new(move |ctx| f(ctx).map(Into::into)));
        self
    }

    pub fn name(&self) -> &str {
        self.slot.name()
    }

    pub fn slot_ref(&self) -> &SlotRef {
        &self.slot
    }

    pub fn default_value(&self, ctx: &RenderContext) -> Option<SlotValue> {
        self.slot.default_value(ctx)
    }

    /// A node rendering this slot.
    pub fn slot(&self) -> Slot {
        Slot::of(self)
    }
}

/// A value supplied for a slot.
#[derive(Clone)]
pub enum SlotValue {
    /// Escaped on output.
    Text(KString),
    /// Serialized HTML from a trusted source, output as is.
    Html(KString),
    Component(Rc<RefCell<dyn Component>>),
}

impl SlotValue {
    pub fn text(s: impl Into<KString>) -> Self {
        SlotValue::Text(s.into())
    }

    pub fn trusted_html(s: impl Into<KString>) -> Self {
        SlotValue::Html(s.into())
    }

    pub fn component(c: impl Component + 'static) -> Self {
        SlotValue::Component(Rc::new(RefCell::new(c)))
    }

    /// The raw string for text and HTML values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SlotValue::Text(s) => Some(s),
            SlotValue::Html(s) => Some(s),
            SlotValue::Component(_) => None,
        }
    }

    pub fn print_html(&self, out: &mut HtmlOut, ctx: &RenderContext) -> Result<()> {
        match self {
            SlotValue::Text(s) => out.push_escaped(s),
            SlotValue::Html(s) => out.push_str(s),
            SlotValue::Component(c) => {
                match c.try_borrow_mut() {
                    Ok(mut c) => c.print_html(out, ctx)?,
                    Err(_) => {
                        warn!("slot component is already being rendered (renders itself?)");
                        bail!("recursive rendering of slot component")
                    }
                }
            }
        }
        Ok(())
    }
}

impl Component for SlotValue {
    fn print_html(&mut self, out: &mut HtmlOut, ctx: &RenderContext) -> Result<()> {
        SlotValue::print_html(self, out, ctx)
    }
}

impl fmt::Debug for SlotValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotValue::Text(s) => f.debug_tuple("Text").field(s).finish(),
            SlotValue::Html(s) => f.debug_tuple("Html").field(s).finish(),
            SlotValue::Component(_) => f.write_str("Component(..)"),
        }
    }
}

impl From<&str> for SlotValue {
    fn from(s: &str) -> Self {
        SlotValue::Text(KString::from_ref(s))
    }
}

impl From<String> for SlotValue {
    fn from(s: String) -> Self {
        SlotValue::Text(KString::from_string(s))
    }
}

impl From<KString> for SlotValue {
    fn from(s: KString) -> Self {
        SlotValue::Text(s)
    }
}

macro_rules! slot_value_from_display {
    { $($t:ty)* } => {
        $(
            impl From<$t> for SlotValue {
                fn from(v: $t) -> Self {
                    SlotValue::Text(KString::from_string(v.to_string()))
                }
            }
        )*
    }
}

slot_value_from_display! { i32 i64 u32 u64 usize f64 bool char }

impl From<Tag> for SlotValue {
    fn from(t: Tag) -> Self {
        SlotValue::component(t)
    }
}

/// A node that renders the value its key maps to in the context.
#[derive(Clone, Debug)]
pub struct Slot(SlotRef);

impl Slot {
    pub fn of<T>(key: &SlotKey<T>) -> Self {
        Slot(key.slot.clone())
    }

    pub fn slot_ref(&self) -> &SlotRef {
        &self.0
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn placeholder(&self) -> String {
        self.0.placeholder()
    }
}

impl Component for Slot {
    fn print_html(&mut self, out: &mut HtmlOut, ctx: &RenderContext) -> Result<()> {
        out.print_slot(&self.0, ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_key_identity_is_name() {
        let a: SlotKey<String> = SlotKey::new("title");
        let b: SlotKey<i64> = SlotKey::new("title").with_default(3);
        let c: SlotKey<String> = SlotKey::new("body");
        assert!(a == b);
        assert!(a != c);
        assert_eq!(a.slot_ref(), b.slot_ref());
    }

    #[test]
    fn t_default_value() {
        let ctx = RenderContext::new();
        let k: SlotKey<String> = SlotKey::new("k").with_default("dflt".into());
        assert_eq!(k.default_value(&ctx).and_then(|v| v.as_text().map(String::from)),
                   Some("dflt".into()));
        let n: SlotKey<String> = SlotKey::new("n");
        assert!(n.default_value(&ctx).is_none());
        assert_eq!(k.slot().placeholder(), "{{SLOT:k}}");
    }

    #[test]
    fn t_value_escaping() -> Result<()> {
        let ctx = RenderContext::new();
        let mut out = HtmlOut::new();
        SlotValue::from("<i>").print_html(&mut out, &ctx)?;
        SlotValue::trusted_html("<i>").print_html(&mut out, &ctx)?;
        SlotValue::from(42).print_html(&mut out, &ctx)?;
        assert_eq!(out.as_str(), "&lt;i&gt;<i>42");
        Ok(())
    }
}
