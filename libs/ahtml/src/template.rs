//! Compile-once rendering: a component tree rendered a single time
//! into literal HTML with holes for its slots.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use chj_util::{nowarn, time_guard};
use kstring::KString;

use crate::component::Component;
use crate::context::RenderContext;
use crate::out::{HtmlOut, Segment};

/// Immutable after compilation, shareable across threads.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
    literal_len: usize,
}

impl Template {
    /// Renders `root` once, recording its slots instead of resolving
    /// them. Composites inside `root` get built as a side effect.
    pub fn of<C: Component + ?Sized>(root: &mut C) -> Result<Template> {
        time_guard!("Template::of");
        let mut out = HtmlOut::for_template();
        root.print_html(&mut out, &RenderContext::new())?;
        let segments = out.into_segments();
        let literal_len = segments.iter().map(|s| match s {
            Segment::Literal(l) => l.len(),
            Segment::Slot(_) => 0,
        }).sum();
        let template = Template { segments, literal_len };
        nowarn!("compiled template with slots {:?}", template.slot_names());
        Ok(template)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of the slots in order of appearance (with repetitions).
    pub fn slot_names(&self) -> Vec<&str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Slot(slot) => Some(slot.name()),
            Segment::Literal(_) => None,
        }).collect()
    }

    /// The compiled form, with slots shown as `{{SLOT:name}}`.
    pub fn source(&self) -> String {
        let mut s = String::with_capacity(self.literal_len + 16 * self.segments.len());
        for seg in &self.segments {
            match seg {
                Segment::Literal(l) => s.push_str(l),
                Segment::Slot(slot) => s.push_str(&slot.placeholder()),
            }
        }
        s
    }

    pub fn print_html(&self, out: &mut HtmlOut, ctx: &RenderContext) -> Result<()> {
        for seg in &self.segments {
            match seg {
                Segment::Literal(l) => out.push_str(l),
                Segment::Slot(slot) => out.print_slot(slot, ctx)?,
            }
        }
        Ok(())
    }

    pub fn render(&self, ctx: &RenderContext) -> Result<String> {
        let mut out = HtmlOut::with_capacity(self.literal_len + 64);
        self.print_html(&mut out, ctx)?;
        Ok(out.into_string())
    }
}

/// A template together with the context to render it with, usable as
/// a node in a larger tree.
pub struct TemplateComponent {
    template: Arc<Template>,
    context: RenderContext,
}

impl TemplateComponent {
    pub fn new(template: Arc<Template>, context: RenderContext) -> Self {
        TemplateComponent { template, context }
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut RenderContext {
        &mut self.context
    }
}

impl Component for TemplateComponent {
    // The surrounding context is ignored, and the output is literal
    // even while an enclosing tree is being compiled.
    fn print_html(&mut self, out: &mut HtmlOut, _ctx: &RenderContext) -> Result<()> {
        let html = self.template.render(&self.context)?;
        out.push_str(&html);
        Ok(())
    }
}

/// Templates by name, compiled on first request.
#[derive(Default)]
pub struct TemplateCache {
    templates: Mutex<HashMap<KString, Arc<Template>>>,
}

impl TemplateCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<HashMap<KString, Arc<Template>>>> {
        self.templates.lock().map_err(|_| anyhow!("template cache mutex poisoned"))
    }

    /// `build` is called outside the lock; should two threads race on
    /// the same name, the first stored template is the one kept.
    pub fn get_or_compile<C, F>(&self, name: &str, build: F) -> Result<Arc<Template>>
    where C: Component, F: FnOnce() -> Result<C>
    {
        if let Some(t) = self.lock()?.get(name) {
            return Ok(t.clone())
        }
        let mut root = build()?;
        let template = Arc::new(Template::of(&mut root)?);
        let mut templates = self.lock()?;
        Ok(templates.entry(KString::from_ref(name)).or_insert(template).clone())
    }

    pub fn get(&self, name: &str) -> Result<Option<Arc<Template>>> {
        Ok(self.lock()?.get(name).cloned())
    }

    pub fn invalidate(&self, name: &str) -> Result<bool> {
        Ok(self.lock()?.remove(name).is_some())
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::{SlotKey, SlotValue};
    use crate::tag::Tag;

    fn card(title: &SlotKey<String>, body: &SlotKey<SlotValue>) -> Tag {
        Tag::new("div").with_class("card")
            .with_child(Tag::new("h2").with_text_slot(title))
            .with_child(Tag::self_closing("hr"))
            .with_child(body.slot())
    }

    #[test]
    fn t_source_and_render() -> Result<()> {
        let title: SlotKey<String> = SlotKey::new("title");
        let body: SlotKey<SlotValue> = SlotKey::new("body");
        let t = Template::of(&mut card(&title, &body))?;
        assert_eq!(t.source(),
                   "<div class=\"card\"><h2>{{SLOT:title}}</h2><hr />{{SLOT:body}}</div>");
        assert_eq!(t.slot_names(), vec!["title", "body"]);

        let ctx = RenderContext::new()
            .with(&title, "A & B")
            .with(&body, SlotValue::trusted_html("<p>x</p>"));
        let live = card(&title, &body).render(&ctx)?;
        assert_eq!(t.render(&ctx)?, live);
        assert_eq!(live, "<div class=\"card\"><h2>A &amp; B</h2><hr /><p>x</p></div>");
        Ok(())
    }

    #[test]
    fn t_placeholder_text_is_not_a_slot() -> Result<()> {
        let mut tag = Tag::new("p").with_text("{{SLOT:title}}");
        let t = Template::of(&mut tag)?;
        assert!(t.slot_names().is_empty());
        let title: SlotKey<String> = SlotKey::new("title");
        assert_eq!(t.render(&RenderContext::new().with(&title, "no"))?,
                   "<p>{{SLOT:title}}</p>");
        Ok(())
    }

    #[test]
    fn t_template_component() -> Result<()> {
        let name: SlotKey<String> = SlotKey::new("name");
        let t = Arc::new(Template::of(&mut Tag::new("b").with_text_slot(&name))?);
        let mut outer = Tag::new("div")
            .with_child(crate::component::Node::component(
                TemplateComponent::new(t, RenderContext::new().with(&name, "inner"))))
            .with_child(name.slot());
        let outer_template = Template::of(&mut outer)?;
        assert_eq!(outer_template.source(), "<div><b>inner</b>{{SLOT:name}}</div>");
        Ok(())
    }

    #[test]
    fn t_cache_compiles_once() -> Result<()> {
        let cache = TemplateCache::new();
        let mut calls = 0;
        let a = cache.get_or_compile("x", || { calls += 1; Ok(Tag::new("i")) })?;
        let b = cache.get_or_compile("x", || { calls += 1; Ok(Tag::new("u")) })?;
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(calls, 1);
        assert_eq!(cache.len()?, 1);
        assert!(cache.invalidate("x")?);
        assert!(cache.get("x")?.is_none());
        Ok(())
    }
}
