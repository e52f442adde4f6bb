use std::fmt;

use anyhow::Result;
use kstring::KString;

use crate::component::{Component, Node};
use crate::composite::BuildState;
use crate::context::RenderContext;
use crate::error::ConfigError;
use crate::myfrom::{ks, MyFrom};
use crate::out::HtmlOut;
use crate::slot::{Slot, SlotKey};
use crate::validate::{check_attribute_name, check_css_unit, check_dom_id};

/// Attributes in insertion order, at most one per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(Vec<(KString, KString)>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the value of an existing attribute of the same name
    /// (keeping its position).
    pub fn set(&mut self, name: KString, value: KString) {
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == name) {
            slot.1 = value;
        } else {
            self.0.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| k.as_str() == name).map(|(_, v)| v.as_str())
    }

    pub fn remove(&mut self, name: &str) -> Option<KString> {
        let i = self.0.iter().position(|(k, _)| k.as_str() == name)?;
        Some(self.0.remove(i).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// An empty value prints as a boolean attribute (name only).
    pub fn print_html(&self, out: &mut HtmlOut) {
        for (k, v) in &self.0 {
            out.push_str(" ");
            out.push_str(k); // checked by try_set_attribute, or literal
            if !v.is_empty() {
                out.push_str("=\"");
                out.push_escaped(v);
                out.push_str("\"");
            }
        }
    }
}

enum Inner {
    Empty,
    Text(KString),
    Trusted(KString),
    Slot(Slot),
}

type BuildHook = Box<dyn FnMut(&mut Tag) -> Result<()>>;

/// An HTML element.
pub struct Tag {
    name: KString,
    attributes: Attributes,
    inner: Inner,
    body: Vec<Node>,
    self_closing: bool,
    state: BuildState,
    build_hook: Option<BuildHook>,
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tag")
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("body", &self.body)
            .field("self_closing", &self.self_closing)
            .field("state", &self.state)
            .finish()
    }
}

impl Tag {
    pub fn new<N>(name: N) -> Tag
    where KString: MyFrom<N>
    {
        Tag {
            name: ks(name),
            attributes: Attributes::new(),
            inner: Inner::Empty,
            body: Vec::new(),
            self_closing: false,
            state: BuildState::Unbuilt,
            build_hook: None,
        }
    }

    /// An element without closing tag, e.g. `<input ... />`. Text and
    /// children are ignored for these.
    pub fn self_closing<N>(name: N) -> Tag
    where KString: MyFrom<N>
    {
        let mut tag = Tag::new(name);
        tag.self_closing = true;
        tag
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    // ---- attributes ---------------------------------------------------------

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name)
    }

    /// The value is escaped on output, the name is not: `name` must
    /// be a literal. Use `try_set_attribute` for names from elsewhere.
    pub fn set_attribute<K, V>(&mut self, name: K, value: V)
    where KString: MyFrom<K> + MyFrom<V>
    {
        self.attributes.set(ks(name), ks(value));
    }

    pub fn with_attribute<K, V>(mut self, name: K, value: V) -> Self
    where KString: MyFrom<K> + MyFrom<V>
    {
        self.set_attribute(name, value);
        self
    }

    pub fn try_set_attribute<V>(&mut self, name: &str, value: V) -> Result<(), ConfigError>
    where KString: MyFrom<V>
    {
        check_attribute_name(name)?;
        self.attributes.set(KString::from_ref(name), ks(value));
        Ok(())
    }

    /// Takes the output of `att` and `opt_att`; `None` entries are
    /// skipped.
    pub fn with_attributes(
        mut self,
        attrs: impl IntoIterator<Item = Option<(KString, KString)>>
    ) -> Self {
        for (k, v) in attrs.into_iter().flatten() {
            self.attributes.set(k, v);
        }
        self
    }

    /// A boolean attribute like `disabled` or `checked`.
    pub fn with_flag<K>(mut self, name: K) -> Self
    where KString: MyFrom<K>
    {
        self.attributes.set(ks(name), KString::from_static(""));
        self
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<KString> {
        self.attributes.remove(name)
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub fn set_id(&mut self, id: &str) -> Result<(), ConfigError> {
        check_dom_id(id)?;
        self.set_attribute("id", id);
        Ok(())
    }

    pub fn with_id(mut self, id: &str) -> Result<Self, ConfigError> {
        self.set_id(id)?;
        Ok(self)
    }

    /// Adds to the `class` attribute unless already present.
    pub fn add_class(&mut self, class: &str) {
        let class = class.trim();
        if class.is_empty() {
            return;
        }
        match self.attributes.get("class") {
            None => self.set_attribute("class", class),
            Some(existing) => {
                let mut have: Vec<&str> = existing.split_whitespace().collect();
                let mut changed = false;
                for c in class.split_whitespace() {
                    if !have.contains(&c) {
                        have.push(c);
                        changed = true;
                    }
                }
                if changed {
                    let joined = have.join(" ");
                    self.set_attribute("class", joined);
                }
            }
        }
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attributes.get("class")
            .map(|cs| cs.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Sets `property` in the `style` attribute, replacing a previous
    /// value for the same property.
    pub fn add_style(&mut self, property: &str, value: &str) {
        let mut decls: Vec<(String, String)> = self.attributes.get("style")
            .map(|s| {
                s.split(';')
                    .filter_map(|d| {
                        let (k, v) = d.split_once(':')?;
                        Some((k.trim().to_string(), v.trim().to_string()))
                    })
                    .filter(|(k, _)| !k.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        if let Some(d) = decls.iter_mut().find(|(k, _)| k == property) {
            d.1 = value.to_string();
        } else {
            decls.push((property.to_string(), value.to_string()));
        }
        let style = decls.iter()
            .map(|(k, v)| format!("{}: {};", k, v))
            .collect::<Vec<_>>()
            .join(" ");
        self.set_attribute("style", style);
    }

    pub fn with_style(mut self, property: &str, value: &str) -> Self {
        self.add_style(property, value);
        self
    }

    pub fn set_width(&mut self, value: &str) -> Result<(), ConfigError> {
        check_css_unit("width", value)?;
        self.add_style("width", value);
        Ok(())
    }

    pub fn with_width(mut self, value: &str) -> Result<Self, ConfigError> {
        self.set_width(value)?;
        Ok(self)
    }

    pub fn with_max_width(mut self, value: &str) -> Result<Self, ConfigError> {
        check_css_unit("max-width", value)?;
        self.add_style("max-width", value);
        Ok(self)
    }

    pub fn with_min_width(mut self, value: &str) -> Result<Self, ConfigError> {
        check_css_unit("min-width", value)?;
        self.add_style("min-width", value);
        Ok(self)
    }

    // ---- content ------------------------------------------------------------

    /// Inner text, escaped on output. Rendered before the children.
    pub fn set_text(&mut self, text: impl Into<KString>) {
        self.inner = Inner::Text(text.into());
    }

    pub fn with_text(mut self, text: impl Into<KString>) -> Self {
        self.set_text(text);
        self
    }

    /// Inner HTML from a trusted source, output without escaping.
    pub fn set_unsafe_html(&mut self, html: impl Into<KString>) {
        self.inner = Inner::Trusted(html.into());
    }

    pub fn with_unsafe_html(mut self, html: impl Into<KString>) -> Self {
        self.set_unsafe_html(html);
        self
    }

    /// Inner content bound to a slot.
    pub fn set_text_slot<T>(&mut self, key: &SlotKey<T>) {
        self.inner = Inner::Slot(Slot::of(key));
    }

    pub fn with_text_slot<T>(mut self, key: &SlotKey<T>) -> Self {
        self.set_text_slot(key);
        self
    }

    pub fn text(&self) -> Option<&str> {
        match &self.inner {
            Inner::Text(s) | Inner::Trusted(s) => Some(s),
            Inner::Empty | Inner::Slot(_) => None,
        }
    }

    pub fn push_child(&mut self, child: impl Into<Node>) {
        self.body.push(child.into());
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.push_child(child);
        self
    }

    pub fn with_children<I>(mut self, children: I) -> Self
    where I: IntoIterator, I::Item: Into<Node>
    {
        self.body.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn children(&self) -> &[Node] {
        &self.body
    }

    pub fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.body
    }

    pub fn clear_children(&mut self) {
        self.body.clear();
    }

    /// `hook` runs right before the first render. If it fails, the
    /// children it added are discarded and it runs again on the next
    /// render.
    pub fn with_build_hook(
        mut self,
        hook: impl FnMut(&mut Tag) -> Result<()> + 'static
    ) -> Self {
        self.build_hook = Some(Box::new(hook));
        self
    }

    pub fn build(&mut self) -> Result<()> {
        if self.state == BuildState::Unbuilt {
            if let Some(mut hook) = self.build_hook.take() {
                if let Err(e) = hook(self) {
                    self.body.clear();
                    self.build_hook = Some(hook);
                    return Err(e)
                }
            }
            self.state = BuildState::Built;
        }
        Ok(())
    }

    // ---- output -------------------------------------------------------------

    /// Writes `<name attrs>`, or `<name attrs />` if self-closing.
    pub fn print_open(&self, out: &mut HtmlOut) {
        out.push_str("<");
        out.push_str(&self.name);
        self.attributes.print_html(out);
        if self.self_closing {
            out.push_str(" />");
        } else {
            out.push_str(">");
        }
    }

    pub fn print_close(&self, out: &mut HtmlOut) {
        if !self.self_closing {
            out.push_str("</");
            out.push_str(&self.name);
            out.push_str(">");
        }
    }
}

impl Component for Tag {
    fn print_html(&mut self, out: &mut HtmlOut, ctx: &RenderContext) -> Result<()> {
        self.build()?;
        self.print_open(out);
        if self.self_closing {
            return Ok(())
        }
        match &mut self.inner {
            Inner::Empty => (),
            Inner::Text(s) => out.push_escaped(s),
            Inner::Trusted(s) => out.push_str(s),
            Inner::Slot(slot) => slot.print_html(out, ctx)?,
        }
        for child in &mut self.body {
            child.print_html(out, ctx)?;
        }
        self.print_close(out);
        Ok(())
    }
}
