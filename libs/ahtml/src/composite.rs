//! Components that build their content once, lazily.

use anyhow::Result;
use chj_util::nowarn;
use kstring::KString;

use crate::component::{Component, Node};
use crate::context::RenderContext;
use crate::error::ConfigError;
use crate::myfrom::MyFrom;
use crate::out::HtmlOut;
use crate::tag::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Unbuilt,
    Built,
}

/// What a `Module` knows about itself when building its content.
#[derive(Debug, Clone, Default)]
pub struct ModuleHead {
    title: Option<KString>,
    module_id: Option<KString>,
}

impl ModuleHead {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn module_id(&self) -> Option<&str> {
        self.module_id.as_deref()
    }
}

/// The content of a `Module`. `build_content` is the only place
/// where children are added to the module's element.
pub trait BuildContent {
    fn build_content(&mut self, head: &ModuleHead, body: &mut Vec<Node>) -> Result<()>;
}

/// An element with the `module` class whose children are produced by
/// `C` on first render and kept until `rebuild_content`.
pub struct Module<C> {
    tag: Tag,
    head: ModuleHead,
    state: BuildState,
    content: C,
}

impl<C: BuildContent> Module<C> {
    pub fn new<N>(tag_name: N, content: C) -> Self
    where KString: MyFrom<N>
    {
        Module {
            tag: Tag::new(tag_name),
            head: ModuleHead::default(),
            state: BuildState::Unbuilt,
            content,
        }
    }

    pub fn div(content: C) -> Self {
        Self::new("div", content)
    }

    pub fn with_title(mut self, title: impl Into<KString>) -> Self {
        self.head.title = Some(title.into());
        self
    }

    pub fn set_title(&mut self, title: Option<KString>) {
        self.head.title = title;
    }

    pub fn title(&self) -> Option<&str> {
        self.head.title()
    }

    /// Also sets the element's `id`.
    pub fn set_module_id(&mut self, id: &str) -> Result<(), ConfigError> {
        self.tag.set_id(id)?;
        self.head.module_id = Some(KString::from_ref(id));
        Ok(())
    }

    pub fn with_module_id(mut self, id: &str) -> Result<Self, ConfigError> {
        self.set_module_id(id)?;
        Ok(self)
    }

    pub fn module_id(&self) -> Option<&str> {
        self.head.module_id()
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.tag.add_class(class);
        self
    }

    pub fn add_class(&mut self, class: &str) {
        self.tag.add_class(class);
    }

    pub fn with_attribute<K, V>(mut self, name: K, value: V) -> Self
    where KString: MyFrom<K> + MyFrom<V>
    {
        self.tag.set_attribute(name, value);
        self
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    /// Changes take effect on the next `rebuild_content`.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn is_built(&self) -> bool {
        self.state == BuildState::Built
    }

    /// Builds the content unless already built.
    pub fn build(&mut self) -> Result<()> {
        if self.state == BuildState::Built {
            return Ok(())
        }
        self.tag.add_class("module");
        let Module { tag, head, content, .. } = self;
        if let Err(e) = content.build_content(head, tag.children_mut()) {
            tag.clear_children();
            return Err(e)
        }
        self.state = BuildState::Built;
        Ok(())
    }

    /// Discards the children and builds again, e.g. after edits.
    pub fn rebuild_content(&mut self) -> Result<()> {
        nowarn!("rebuilding module {:?} (was {:?})", self.head.module_id, self.state);
        self.tag.clear_children();
        self.state = BuildState::Unbuilt;
        self.build()
    }
}

impl<C: BuildContent> Component for Module<C> {
    fn print_html(&mut self, out: &mut HtmlOut, ctx: &RenderContext) -> Result<()> {
        self.build()?;
        self.tag.print_html(out, ctx)
    }
}

/// The module operations needed by containers holding modules of
/// different content types.
pub trait ModuleLike: Component {
    fn title(&self) -> Option<&str>;
    fn set_title(&mut self, title: Option<KString>);
    fn module_id(&self) -> Option<&str>;
    fn set_module_id(&mut self, id: &str) -> Result<(), ConfigError>;
    fn rebuild(&mut self) -> Result<()>;
}

impl<C: BuildContent> ModuleLike for Module<C> {
    fn title(&self) -> Option<&str> {
        Module::title(self)
    }

    fn set_title(&mut self, title: Option<KString>) {
        Module::set_title(self, title)
    }

    fn module_id(&self) -> Option<&str> {
        Module::module_id(self)
    }

    fn set_module_id(&mut self, id: &str) -> Result<(), ConfigError> {
        Module::set_module_id(self, id)
    }

    fn rebuild(&mut self) -> Result<()> {
        self.rebuild_content()
    }
}

impl<T: ModuleLike + ?Sized> ModuleLike for &mut T {
    fn title(&self) -> Option<&str> {
        (**self).title()
    }

    fn set_title(&mut self, title: Option<KString>) {
        (**self).set_title(title)
    }

    fn module_id(&self) -> Option<&str> {
        (**self).module_id()
    }

    fn set_module_id(&mut self, id: &str) -> Result<(), ConfigError> {
        (**self).set_module_id(id)
    }

    fn rebuild(&mut self) -> Result<()> {
        (**self).rebuild()
    }
}

impl<T: ModuleLike + ?Sized> ModuleLike for Box<T> {
    fn title(&self) -> Option<&str> {
        (**self).title()
    }

    fn set_title(&mut self, title: Option<KString>) {
        (**self).set_title(title)
    }

    fn module_id(&self) -> Option<&str> {
        (**self).module_id()
    }

    fn set_module_id(&mut self, id: &str) -> Result<(), ConfigError> {
        (**self).set_module_id(id)
    }

    fn rebuild(&mut self) -> Result<()> {
        (**self).rebuild()
    }
}
