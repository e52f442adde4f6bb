use ahtml::{Component, ConfigError, HtmlOut, ModuleLike, RenderContext, Tag};
use ahtml::validate::check_dom_id;
use anyhow::Result;
use kstring::KString;

use crate::components::{button, ButtonStyle};
use crate::editing::action::ActionDescriptor;
use crate::editing::edit_mode::EditMode;
use crate::editing::editable_module::EditableModule;
use crate::error::EditError;
use crate::layout::{column, row, ColumnWidth};
use crate::overlay::OverlayConfig;

pub const DEFAULT_MAX_MODULES: usize = 3;

/// A row of modules of equal width, each with edit and delete
/// controls, plus an "add module" control while there is room.
///
/// Rendered afresh every time, since modules come and go.
pub struct EditableRow {
    row_id: KString,
    page_id: KString,
    wrapper: Tag,
    modules: Vec<(Box<dyn ModuleLike>, KString)>,
    max_modules: usize,
    edit_mode: EditMode,
    can_add_module: bool,
    config: OverlayConfig,
}

impl EditableRow {
    pub fn new(row_id: &str, page_id: &str) -> Result<Self, ConfigError> {
        let wrapper = Tag::new("div")
            .with_id(&format!("row-{}", row_id))?
            .with_class("editable-row-wrapper");
        Ok(EditableRow {
            row_id: KString::from_ref(row_id),
            page_id: KString::from_ref(page_id),
            wrapper,
            modules: Vec::new(),
            max_modules: DEFAULT_MAX_MODULES,
            edit_mode: EditMode::OwnerEdit,
            can_add_module: true,
            config: OverlayConfig::default(),
        })
    }

    pub fn with_max_modules(mut self, max: usize) -> Result<Self, ConfigError> {
        if max < 1 {
            return Err(ConfigError::InvalidMaxModules(max));
        }
        self.max_modules = max;
        Ok(self)
    }

    pub fn with_edit_mode(mut self, mode: EditMode) -> Self {
        self.edit_mode = mode;
        self
    }

    pub fn with_can_add_module(mut self, can_add: bool) -> Self {
        self.can_add_module = can_add;
        self
    }

    pub fn with_config(mut self, config: OverlayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.wrapper.add_class(class);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.wrapper.set_attribute(name, value);
        self
    }

    pub fn row_id(&self) -> &str {
        &self.row_id
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn max_modules(&self) -> usize {
        self.max_modules
    }

    pub fn edit_mode(&self) -> EditMode {
        self.edit_mode
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    pub fn is_full(&self) -> bool {
        self.modules.len() >= self.max_modules
    }

    pub fn module_ids(&self) -> impl Iterator<Item = &str> {
        self.modules.iter().map(|(_, id)| id.as_str())
    }

    /// Sets `module_id` on the module. Fails if it is not a valid DOM
    /// id or the row is full.
    pub fn add_module(
        &mut self, mut module: impl ModuleLike + 'static, module_id: &str
    ) -> Result<(), EditError> {
        check_dom_id(module_id)?;
        if self.is_full() {
            return Err(EditError::RowFull { max: self.max_modules });
        }
        module.set_module_id(module_id)?;
        self.modules.push((Box::new(module), KString::from_ref(module_id)));
        Ok(())
    }

    pub fn with_module(
        mut self, module: impl ModuleLike + 'static, module_id: &str
    ) -> Result<Self, EditError> {
        self.add_module(module, module_id)?;
        Ok(self)
    }

    pub fn remove_module(&mut self, module_id: &str) -> Option<Box<dyn ModuleLike>> {
        let i = self.modules.iter().position(|(_, id)| id.as_str() == module_id)?;
        Some(self.modules.remove(i).0)
    }

    pub fn module_mut(&mut self, module_id: &str) -> Option<&mut (dyn ModuleLike + 'static)> {
        self.modules.iter_mut()
            .find(|(_, id)| id.as_str() == module_id)
            .map(|(m, _)| &mut **m)
    }

    pub fn column_width(&self) -> ColumnWidth {
        ColumnWidth::equal_share(self.modules.len())
    }

    fn module_actions(&self, module_id: &str) -> (ActionDescriptor, ActionDescriptor) {
        let c = &self.config;
        (ActionDescriptor::get(c.module_edit_url(&self.page_id, module_id))
             .with_edit_mode(Some(self.edit_mode))
             .with_target(c.modal_target.as_str())
             .with_swap(c.edit_swap.as_str()),
         ActionDescriptor::delete(c.module_delete_url(&self.page_id, module_id))
             .with_edit_mode(Some(self.edit_mode))
             .with_target(format!("#editable-{}", module_id))
             .with_swap(c.delete_swap.as_str()))
    }

    fn add_module_action(&self) -> Option<ActionDescriptor> {
        if self.can_add_module && !self.is_full() {
            let c = &self.config;
            Some(ActionDescriptor::get(c.add_module_form_url(&self.page_id, &self.row_id))
                 .with_target(c.modal_target.as_str())
                 .with_swap(c.edit_swap.as_str()))
        } else {
            None
        }
    }

    /// The actions of all controls a render would show.
    pub fn actions(&self) -> Vec<ActionDescriptor> {
        let mut actions = Vec::new();
        for (_, id) in &self.modules {
            let (edit, delete) = self.module_actions(id);
            actions.push(edit);
            actions.push(delete);
        }
        actions.extend(self.add_module_action());
        actions
    }
}

impl Component for EditableRow {
    fn print_html(&mut self, out: &mut HtmlOut, ctx: &RenderContext) -> Result<()> {
        let width = self.column_width();
        let add_module = self.add_module_action();
        let config = &self.config;
        let page_id = &self.page_id;
        let edit_mode = self.edit_mode;

        self.wrapper.print_open(out);
        let row = row();
        row.print_open(out);
        for (module, module_id) in &mut self.modules {
            let col = column(width);
            col.print_open(out);
            EditableModule::wrap_with(&mut **module, config)
                .with_wrapper_id(&format!("editable-{}", module_id))?
                .with_edit_url(config.module_edit_url(page_id, module_id))
                .with_delete_url(config.module_delete_url(page_id, module_id))
                .with_edit_mode(edit_mode)
                .print_html(out, ctx)?;
            col.print_close(out);
        }
        row.print_close(out);
        if let Some(action) = add_module {
            Tag::new("div").with_class("add-module-section")
                .with_child(action.applied_to(
                    button(config.add_module_label.clone(), ButtonStyle::Secondary)))
                .print_html(out, ctx)?;
        }
        self.wrapper.print_close(out);
        Ok(())
    }
}
