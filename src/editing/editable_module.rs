//! Edit and delete controls around a single module.

use std::sync::atomic::{AtomicU64, Ordering};

use ahtml::{BuildState, Component, ConfigError, HtmlOut, ModuleLike, RenderContext, Tag};
use anyhow::Result;
use kstring::KString;

use crate::components::{button, ButtonStyle};
use crate::editing::action::ActionDescriptor;
use crate::editing::auth::AuthorizationChecker;
use crate::editing::edit_mode::EditMode;
use crate::overlay::OverlayConfig;

static NEXT_WRAPPER_ID: AtomicU64 = AtomicU64::new(1);

/// Wraps `inner` in a `div.editable-module-wrapper` with controls in
/// front of it. The controls are built once, on first render;
/// changing settings afterwards has no effect on the output.
///
/// With a `ModuleLike` inner value, `with_title` and `with_module_id`
/// write through to the module, which stays the authority on both.
/// The wrapper's own id is separate (`editable-<module id>` once a
/// module id is set).
pub struct EditableModule<C> {
    inner: C,
    wrapper: Tag,
    edit_url: Option<String>,
    edit_label: KString,
    edit_title: KString,
    edit_target: KString,
    edit_swap: KString,
    delete_url: Option<String>,
    delete_label: KString,
    delete_title: KString,
    delete_target: Option<KString>,
    delete_swap: KString,
    delete_confirm: Option<KString>,
    can_edit: bool,
    can_delete: bool,
    edit_mode: Option<EditMode>,
    state: BuildState,
    controls: Vec<Tag>,
}

impl<C: Component> EditableModule<C> {
    pub fn wrap(inner: C) -> Self {
        Self::wrap_with(inner, &OverlayConfig::default())
    }

    pub fn wrap_with(inner: C, config: &OverlayConfig) -> Self {
        let n = NEXT_WRAPPER_ID.fetch_add(1, Ordering::Relaxed);
        EditableModule {
            inner,
            wrapper: Tag::new("div")
                .with_attribute("id", format!("editable-module-{}", n))
                .with_class("editable-module-wrapper"),
            edit_url: None,
            edit_label: config.edit_label.clone(),
            edit_title: config.edit_title.clone(),
            edit_target: config.modal_target.clone(),
            edit_swap: config.edit_swap.clone(),
            delete_url: None,
            delete_label: config.delete_label.clone(),
            delete_title: config.delete_title.clone(),
            delete_target: None,
            delete_swap: config.delete_swap.clone(),
            delete_confirm: None,
            can_edit: true,
            can_delete: true,
            edit_mode: None,
            state: BuildState::Unbuilt,
            controls: Vec::new(),
        }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    pub fn into_inner(self) -> C {
        self.inner
    }

    pub fn wrapper_id(&self) -> &str {
        self.wrapper.id().unwrap_or("")
    }

    pub fn with_wrapper_id(mut self, id: &str) -> Result<Self, ConfigError> {
        self.wrapper.set_id(id)?;
        Ok(self)
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.wrapper.add_class(class);
        self
    }

    pub fn with_edit_url(mut self, url: impl Into<String>) -> Self {
        self.edit_url = Some(url.into());
        self
    }

    pub fn with_edit_button(mut self, label: impl Into<KString>) -> Self {
        self.edit_label = label.into();
        self
    }

    pub fn with_edit_title(mut self, title: impl Into<KString>) -> Self {
        self.edit_title = title.into();
        self
    }

    pub fn with_edit_target(mut self, target: impl Into<KString>) -> Self {
        self.edit_target = target.into();
        self
    }

    pub fn with_edit_swap(mut self, swap: impl Into<KString>) -> Self {
        self.edit_swap = swap.into();
        self
    }

    pub fn with_delete_url(mut self, url: impl Into<String>) -> Self {
        self.delete_url = Some(url.into());
        self
    }

    pub fn with_delete_button(mut self, label: impl Into<KString>) -> Self {
        self.delete_label = label.into();
        self
    }

    pub fn with_delete_title(mut self, title: impl Into<KString>) -> Self {
        self.delete_title = title.into();
        self
    }

    /// Defaults to the wrapper itself.
    pub fn with_delete_target(mut self, target: impl Into<KString>) -> Self {
        self.delete_target = Some(target.into());
        self
    }

    pub fn with_delete_swap(mut self, swap: impl Into<KString>) -> Self {
        self.delete_swap = swap.into();
        self
    }

    pub fn with_delete_confirm(mut self, confirm: impl Into<KString>) -> Self {
        self.delete_confirm = Some(confirm.into());
        self
    }

    pub fn with_can_edit(mut self, can_edit: bool) -> Self {
        self.can_edit = can_edit;
        self
    }

    pub fn with_can_delete(mut self, can_delete: bool) -> Self {
        self.can_delete = can_delete;
        self
    }

    pub fn with_edit_mode(mut self, mode: EditMode) -> Self {
        self.edit_mode = Some(mode);
        self
    }

    pub fn edit_mode(&self) -> Option<EditMode> {
        self.edit_mode
    }

    pub fn with_permissions_from(
        self,
        checker: &(impl AuthorizationChecker + ?Sized),
        module_id: &str,
        user_id: &str,
    ) -> Self {
        let can_edit = checker.can_edit(module_id, user_id);
        let can_delete = checker.can_delete(module_id, user_id);
        let mode = checker.edit_mode(module_id, user_id);
        self.with_can_edit(can_edit)
            .with_can_delete(can_delete)
            .with_edit_mode(mode)
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    /// What the edit control will request, if shown.
    pub fn edit_action(&self) -> Option<ActionDescriptor> {
        let url = self.edit_url.as_ref().filter(|u| self.can_edit && !u.is_empty())?;
        Some(ActionDescriptor::get(url.clone())
             .with_edit_mode(self.edit_mode)
             .with_target(self.edit_target.as_str())
             .with_swap(self.edit_swap.as_str()))
    }

    pub fn delete_action(&self) -> Option<ActionDescriptor> {
        let url = self.delete_url.as_ref().filter(|u| self.can_delete && !u.is_empty())?;
        let target = match &self.delete_target {
            Some(t) => t.to_string(),
            None => format!("#{}", self.wrapper_id()),
        };
        let action = ActionDescriptor::delete(url.clone())
            .with_edit_mode(self.edit_mode)
            .with_target(target)
            .with_swap(self.delete_swap.as_str());
        Some(match &self.delete_confirm {
            Some(c) => action.with_confirm(c.as_str()),
            None => action,
        })
    }

    pub fn actions(&self) -> Vec<ActionDescriptor> {
        self.edit_action().into_iter().chain(self.delete_action()).collect()
    }

    fn build(&mut self) {
        if self.state == BuildState::Built {
            return;
        }
        if let Some(action) = self.edit_action() {
            self.controls.push(
                action.applied_to(button(self.edit_label.clone(), ButtonStyle::Link)
                                  .with_class("module-edit-btn")
                                  .with_attribute("title", &self.edit_title)));
        }
        if let Some(action) = self.delete_action() {
            self.controls.push(
                action.applied_to(button(self.delete_label.clone(), ButtonStyle::Link)
                                  .with_class("module-delete-btn")
                                  .with_attribute("title", &self.delete_title)));
        }
        self.state = BuildState::Built;
    }
}

impl<C: ModuleLike> EditableModule<C> {
    pub fn with_title(mut self, title: impl Into<KString>) -> Self {
        self.inner.set_title(Some(title.into()));
        self
    }

    /// Sets the module's id and derives the wrapper id from it.
    pub fn with_module_id(mut self, module_id: &str) -> Result<Self, ConfigError> {
        self.inner.set_module_id(module_id)?;
        self.wrapper.set_id(&format!("editable-{}", module_id))?;
        Ok(self)
    }
}

impl<C: Component> Component for EditableModule<C> {
    fn print_html(&mut self, out: &mut HtmlOut, ctx: &RenderContext) -> Result<()> {
        self.build();
        self.wrapper.print_open(out);
        for control in &mut self.controls {
            control.print_html(out, ctx)?;
        }
        self.inner.print_html(out, ctx)?;
        self.wrapper.print_close(out);
        Ok(())
    }
}

impl<C: ModuleLike> ModuleLike for EditableModule<C> {
    fn title(&self) -> Option<&str> {
        self.inner.title()
    }

    fn set_title(&mut self, title: Option<KString>) {
        self.inner.set_title(title)
    }

    fn module_id(&self) -> Option<&str> {
        self.inner.module_id()
    }

    fn set_module_id(&mut self, id: &str) -> Result<(), ConfigError> {
        self.inner.set_module_id(id)?;
        self.wrapper.set_id(&format!("editable-{}", id))
    }

    fn rebuild(&mut self) -> Result<()> {
        self.inner.rebuild()
    }
}
