use ahtml::{Component, ConfigError, HtmlOut, RenderContext, Tag};
use anyhow::Result;
use kstring::KString;

use crate::components::{button, ButtonStyle};
use crate::editing::action::ActionDescriptor;
use crate::editing::editable_row::EditableRow;
use crate::overlay::OverlayConfig;

/// Rows of a page, with "insert row" controls after each row (or a
/// single one on an empty page). A control's position is the index
/// the new row gets.
pub struct EditablePage {
    page_id: KString,
    wrapper: Tag,
    rows: Vec<EditableRow>,
    can_insert_rows: bool,
    config: OverlayConfig,
}

impl EditablePage {
    pub fn new(page_id: &str) -> Result<Self, ConfigError> {
        let wrapper = Tag::new("div")
            .with_id(&format!("page-{}", page_id))?
            .with_class("editable-page-wrapper");
        Ok(EditablePage {
            page_id: KString::from_ref(page_id),
            wrapper,
            rows: Vec::new(),
            can_insert_rows: true,
            config: OverlayConfig::default(),
        })
    }

    /// Also used for rows created through `new_row`.
    pub fn with_config(mut self, config: OverlayConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_can_insert_rows(mut self, on: bool) -> Self {
        self.can_insert_rows = on;
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.wrapper.add_class(class);
        self
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    /// A row of this page (not yet added).
    pub fn new_row(&self, row_id: &str) -> Result<EditableRow, ConfigError> {
        Ok(EditableRow::new(row_id, &self.page_id)?.with_config(self.config.clone()))
    }

    pub fn add_row(&mut self, row: EditableRow) {
        self.rows.push(row);
    }

    pub fn with_row(mut self, row: EditableRow) -> Self {
        self.add_row(row);
        self
    }

    /// `position` beyond the end appends.
    pub fn insert_row(&mut self, position: usize, row: EditableRow) {
        let position = position.min(self.rows.len());
        self.rows.insert(position, row);
    }

    pub fn remove_row(&mut self, row_id: &str) -> Option<EditableRow> {
        let i = self.rows.iter().position(|r| r.row_id() == row_id)?;
        Some(self.rows.remove(i))
    }

    pub fn rows(&self) -> &[EditableRow] {
        &self.rows
    }

    pub fn row_mut(&mut self, row_id: &str) -> Option<&mut EditableRow> {
        self.rows.iter_mut().find(|r| r.row_id() == row_id)
    }

    pub fn insert_row_action(&self, position: usize) -> ActionDescriptor {
        let c = &self.config;
        ActionDescriptor::post(c.insert_row_url(&self.page_id, position))
            .with_target(c.insert_row_target.as_str())
            .with_swap(c.insert_row_swap.as_str())
    }

    /// The positions of the insert controls a render would show.
    pub fn insert_positions(&self) -> Vec<usize> {
        if !self.can_insert_rows {
            Vec::new()
        } else if self.rows.is_empty() {
            vec![0]
        } else {
            (1..=self.rows.len()).collect()
        }
    }

    pub fn actions(&self) -> Vec<ActionDescriptor> {
        let mut actions: Vec<ActionDescriptor> =
            self.rows.iter().flat_map(|r| r.actions()).collect();
        actions.extend(self.insert_positions().into_iter().map(|p| self.insert_row_action(p)));
        actions
    }

    fn insert_control(&self, position: usize) -> Tag {
        let c = &self.config;
        if position == 0 && self.rows.is_empty() {
            Tag::new("div").with_class("insert-row-section empty-page-insert")
                .with_child(self.insert_row_action(0).applied_to(
                    button(c.add_first_row_label.clone(), ButtonStyle::Secondary)))
        } else {
            Tag::new("div").with_class("insert-row-section")
                .with_child(self.insert_row_action(position).applied_to(
                    button(c.insert_row_label.clone(), ButtonStyle::Link)))
        }
    }
}

impl Component for EditablePage {
    fn print_html(&mut self, out: &mut HtmlOut, ctx: &RenderContext) -> Result<()> {
        let mut controls: Vec<Tag> = self.insert_positions().into_iter()
            .map(|p| self.insert_control(p))
            .collect();
        let inner = Tag::new("div").with_class("editable-page");
        self.wrapper.print_open(out);
        inner.print_open(out);
        if self.rows.is_empty() {
            for control in &mut controls {
                control.print_html(out, ctx)?;
            }
        } else {
            // one control after each row, if enabled
            let mut controls = controls.iter_mut();
            for row in &mut self.rows {
                row.print_html(out, ctx)?;
                if let Some(control) = controls.next() {
                    control.print_html(out, ctx)?;
                }
            }
        }
        inner.print_close(out);
        self.wrapper.print_close(out);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_empty_page() -> Result<()> {
        let mut p = EditablePage::new("home")?;
        let html = p.to_html_string()?;
        assert_eq!(html,
                   "<div id=\"page-home\" class=\"editable-page-wrapper\">\
                    <div class=\"editable-page\">\
                    <div class=\"insert-row-section empty-page-insert\">\
                    <button type=\"button\" class=\"btn btn-secondary\" \
                    hx-post=\"/api/pages/home/rows/insert?position=0\" \
                    hx-target=\"closest .insert-row-section\" hx-swap=\"beforebegin\">\
                    + Add First Row</button></div></div></div>");
        assert_eq!(p.insert_positions(), vec![0]);
        Ok(())
    }

    #[test]
    fn t_rows_and_positions() -> Result<()> {
        let mut p = EditablePage::new("home")?;
        let r1 = p.new_row("r1")?;
        let r2 = p.new_row("r2")?;
        p.add_row(r1);
        p.add_row(r2);
        let html = p.to_html_string()?;
        assert!(html.contains("rows/insert?position=1"));
        assert!(html.contains("rows/insert?position=2"));
        assert!(!html.contains("position=0"));
        assert!(!html.contains("empty-page-insert"));
        assert_eq!(html.matches("+ Insert Row Below").count(), 2);
        let r1_at = html.find("id=\"row-r1\"").unwrap();
        let pos1_at = html.find("position=1").unwrap();
        let r2_at = html.find("id=\"row-r2\"").unwrap();
        assert!(r1_at < pos1_at && pos1_at < r2_at);
        Ok(())
    }

    #[test]
    fn t_insert_and_remove_rows() -> Result<()> {
        let mut p = EditablePage::new("p")?;
        let a = p.new_row("a")?;
        let b = p.new_row("b")?;
        let c = p.new_row("c")?;
        p.add_row(a);
        p.insert_row(0, b);
        p.insert_row(99, c);
        let ids: Vec<&str> = p.rows().iter().map(|r| r.row_id()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert!(p.remove_row("a").is_some());
        assert!(p.remove_row("a").is_none());
        assert!(EditablePage::new("bad page").is_err());
        Ok(())
    }

    #[test]
    fn t_insert_disabled() -> Result<()> {
        let mut p = EditablePage::new("p")?.with_can_insert_rows(false);
        assert!(!p.to_html_string()?.contains("insert-row-section"));
        Ok(())
    }
}
