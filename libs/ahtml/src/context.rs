//! Values for slots, supplied at render time.

use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::Result;
use kstring::KString;

use crate::out::HtmlOut;
use crate::slot::{SlotKey, SlotRef, SlotValue};

/// Whether a `RenderContext` memoizes the rendering of slot values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPolicy {
    /// Render slot values afresh every time.
    #[default]
    NeverCompile,
    /// Keep the HTML of a live slot value after its first render
    /// and reuse it until the value is replaced or removed.
    CompileOnFirstHit,
}

/// Maps slot keys to values. Confined to one thread (holds
/// `Rc`/`RefCell` state).
///
/// Lookup for a slot: compiled HTML if present, else the live value
/// (compiled on first hit under `RenderPolicy::CompileOnFirstHit`),
/// else the key's default (never compiled), else the empty string.
#[derive(Default)]
pub struct RenderContext {
    policy: RenderPolicy,
    values: HashMap<KString, SlotValue>,
    compiled: RefCell<HashMap<KString, KString>>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same as `new`.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: RenderPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> RenderPolicy {
        self.policy
    }

    /// Changing the policy keeps already compiled entries.
    pub fn set_policy(&mut self, policy: RenderPolicy) {
        self.policy = policy;
    }

    /// Builder form of `put`.
    pub fn with<T, V>(mut self, key: &SlotKey<T>, value: V) -> Self
    where V: Into<T>, T: Into<SlotValue>
    {
        self.put(key, value);
        self
    }

    /// Set the live value for `key`, discarding compiled HTML for it.
    pub fn put<T, V>(&mut self, key: &SlotKey<T>, value: V) -> &mut Self
    where V: Into<T>, T: Into<SlotValue>
    {
        let value: T = value.into();
        self.put_value(key.slot_ref(), value.into())
    }

    /// Untyped `put`.
    pub fn put_value(&mut self, slot: &SlotRef, value: SlotValue) -> &mut Self {
        let name = slot.name_kstring();
        self.compiled.get_mut().remove(name.as_str());
        self.values.insert(name.clone(), value);
        self
    }

    /// Remove the live value (lookups fall back to the default);
    /// discards compiled HTML for `key`.
    pub fn remove<T>(&mut self, key: &SlotKey<T>) -> Option<SlotValue> {
        self.compiled.get_mut().remove(key.name());
        self.values.remove(key.name())
    }

    /// Whether a live value is present (defaults don't count).
    pub fn contains<T>(&self, key: &SlotKey<T>) -> bool {
        self.values.contains_key(key.name())
    }

    /// The live value, else the key's default.
    pub fn get<T>(&self, key: &SlotKey<T>) -> Option<SlotValue> {
        match self.values.get(key.name()) {
            Some(v) => Some(v.clone()),
            None => key.default_value(self),
        }
    }

    /// The live value if it's text, else the default's text.
    pub fn get_text<T>(&self, key: &SlotKey<T>) -> Option<String> {
        self.get(key).and_then(|v| v.as_text().map(String::from))
    }

    pub fn put_compiled<T>(&mut self, key: &SlotKey<T>, html: impl Into<KString>) {
        self.compiled.get_mut().insert(key.slot_ref().name_kstring().clone(), html.into());
    }

    pub fn get_compiled<T>(&self, key: &SlotKey<T>) -> Option<KString> {
        self.compiled.borrow().get(key.name()).cloned()
    }

    pub fn is_compiled<T>(&self, key: &SlotKey<T>) -> bool {
        self.compiled.borrow().contains_key(key.name())
    }

    pub fn clear_compiled(&mut self) {
        self.compiled.get_mut().clear();
    }

    pub(crate) fn print_slot(&self, slot: &SlotRef, out: &mut HtmlOut) -> Result<()> {
        let compiled = self.compiled.borrow().get(slot.name()).cloned();
        if let Some(html) = compiled {
            out.push_str(&html);
            return Ok(())
        }
        match self.values.get(slot.name()) {
            Some(value) => match self.policy {
                RenderPolicy::NeverCompile => value.print_html(out, self),
                RenderPolicy::CompileOnFirstHit => {
                    let mut tmp = HtmlOut::new();
                    value.print_html(&mut tmp, self)?;
                    let html = tmp.into_string();
                    out.push_str(&html);
                    self.compiled.borrow_mut().insert(slot.name_kstring().clone(),
                                                      KString::from_string(html));
                    Ok(())
                }
            },
            None => match slot.default_value(self) {
                Some(value) => value.print_html(out, self),
                None => Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::component::Component;

    struct Counting(Rc<Cell<u32>>);

    impl Component for Counting {
        fn print_html(&mut self, out: &mut HtmlOut, _ctx: &RenderContext) -> Result<()> {
            self.0.set(self.0.get() + 1);
            out.push_str(&format!("<i>{}</i>", self.0.get()));
            Ok(())
        }
    }

    fn render_slot<T>(ctx: &RenderContext, key: &SlotKey<T>) -> Result<String> {
        key.slot().render(ctx)
    }

    #[test]
    fn t_put_get_remove() -> Result<()> {
        let k: SlotKey<String> = SlotKey::new("k").with_default("d".into());
        let mut ctx = RenderContext::new();
        assert!(!ctx.contains(&k));
        assert_eq!(ctx.get_text(&k).as_deref(), Some("d"));
        ctx.put(&k, "live");
        assert!(ctx.contains(&k));
        assert_eq!(ctx.get_text(&k).as_deref(), Some("live"));
        assert_eq!(render_slot(&ctx, &k)?, "live");
        ctx.remove(&k);
        assert_eq!(render_slot(&ctx, &k)?, "d");
        let n: SlotKey<String> = SlotKey::new("n");
        assert_eq!(render_slot(&ctx, &n)?, "");
        Ok(())
    }

    #[test]
    fn t_compile_on_first_hit() -> Result<()> {
        let k: SlotKey<SlotValue> = SlotKey::new("c");
        let count = Rc::new(Cell::new(0));
        let mut ctx = RenderContext::new().with_policy(RenderPolicy::CompileOnFirstHit);
        ctx.put(&k, SlotValue::component(Counting(count.clone())));
        assert!(!ctx.is_compiled(&k));
        assert_eq!(render_slot(&ctx, &k)?, "<i>1</i>");
        assert!(ctx.is_compiled(&k));
        assert_eq!(render_slot(&ctx, &k)?, "<i>1</i>");
        assert_eq!(count.get(), 1);

        ctx.put(&k, SlotValue::component(Counting(count.clone())));
        assert!(!ctx.is_compiled(&k));
        assert_eq!(render_slot(&ctx, &k)?, "<i>2</i>");
        assert_eq!(count.get(), 2);
        Ok(())
    }

    #[test]
    fn t_never_compile() -> Result<()> {
        let k: SlotKey<SlotValue> = SlotKey::new("c");
        let count = Rc::new(Cell::new(0));
        let ctx = RenderContext::new()
            .with(&k, SlotValue::component(Counting(count.clone())));
        render_slot(&ctx, &k)?;
        render_slot(&ctx, &k)?;
        assert_eq!(count.get(), 2);
        assert!(!ctx.is_compiled(&k));
        Ok(())
    }

    #[test]
    fn t_defaults_are_not_compiled_and_track_values() -> Result<()> {
        let name: SlotKey<String> = SlotKey::new("name");
        let greeting: SlotKey<String> = {
            let name = name.clone();
            SlotKey::new("greeting").with_default_fn(move |ctx| {
                ctx.get_text(&name).map(|n| format!("Hello, {}", n))
            })
        };
        let mut ctx = RenderContext::new().with_policy(RenderPolicy::CompileOnFirstHit);
        ctx.put(&name, "Ann");
        assert_eq!(render_slot(&ctx, &greeting)?, "Hello, Ann");
        assert!(!ctx.is_compiled(&greeting));
        ctx.put(&name, "Bob");
        assert_eq!(render_slot(&ctx, &greeting)?, "Hello, Bob");
        Ok(())
    }

    #[test]
    fn t_put_compiled_takes_precedence() -> Result<()> {
        let k: SlotKey<String> = SlotKey::new("k");
        let mut ctx = RenderContext::new().with(&k, "live");
        ctx.put_compiled(&k, "<b>pre</b>");
        assert_eq!(ctx.get_compiled(&k).as_deref(), Some("<b>pre</b>"));
        assert_eq!(render_slot(&ctx, &k)?, "<b>pre</b>");
        // get is about live values only
        assert_eq!(ctx.get_text(&k).as_deref(), Some("live"));
        ctx.clear_compiled();
        assert_eq!(render_slot(&ctx, &k)?, "live");
        Ok(())
    }
}
