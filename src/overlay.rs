//! Defaults shared by the edit overlay: labels, swap strategies,
//! targets, and the layout of the page-builder URLs.

use auri::{append_query_param, url_encode};
use kstring::KString;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayConfig {
    /// Prefix of all page-builder endpoints, without trailing slash.
    pub url_prefix: KString,
    /// Selector of the element receiving edit forms.
    pub modal_target: KString,
    pub edit_swap: KString,
    pub delete_swap: KString,
    pub edit_label: KString,
    pub edit_title: KString,
    pub delete_label: KString,
    pub delete_title: KString,
    pub add_module_label: KString,
    pub insert_row_label: KString,
    pub add_first_row_label: KString,
    pub insert_row_target: KString,
    pub insert_row_swap: KString,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        OverlayConfig {
            url_prefix: KString::from_static("/api/pages"),
            modal_target: KString::from_static("#edit-modal-container"),
            edit_swap: KString::from_static("innerHTML"),
            delete_swap: KString::from_static("outerHTML"),
            edit_label: KString::from_static("✏"),
            edit_title: KString::from_static("Edit"),
            delete_label: KString::from_static("🗑"),
            delete_title: KString::from_static("Delete"),
            add_module_label: KString::from_static("+ Add Module"),
            insert_row_label: KString::from_static("+ Insert Row Below"),
            add_first_row_label: KString::from_static("+ Add First Row"),
            insert_row_target: KString::from_static("closest .insert-row-section"),
            insert_row_swap: KString::from_static("beforebegin"),
        }
    }
}

impl OverlayConfig {
    fn page_url(&self, page_id: &str) -> String {
        format!("{}/{}", self.url_prefix.trim_end_matches('/'), url_encode(page_id))
    }

    pub fn module_edit_url(&self, page_id: &str, module_id: &str) -> String {
        format!("{}/modules/{}/edit", self.page_url(page_id), url_encode(module_id))
    }

    pub fn module_delete_url(&self, page_id: &str, module_id: &str) -> String {
        format!("{}/modules/{}/delete", self.page_url(page_id), url_encode(module_id))
    }

    pub fn add_module_form_url(&self, page_id: &str, row_id: &str) -> String {
        format!("{}/rows/{}/add-module-form", self.page_url(page_id), url_encode(row_id))
    }

    /// `position` is the index the new row will get.
    pub fn insert_row_url(&self, page_id: &str, position: usize) -> String {
        append_query_param(&format!("{}/rows/insert", self.page_url(page_id)),
                           "position",
                           &position.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_urls() {
        let c = OverlayConfig::default();
        assert_eq!(c.module_edit_url("home", "m1"), "/api/pages/home/modules/m1/edit");
        assert_eq!(c.module_delete_url("home", "m1"), "/api/pages/home/modules/m1/delete");
        assert_eq!(c.add_module_form_url("home", "r2"),
                   "/api/pages/home/rows/r2/add-module-form");
        assert_eq!(c.insert_row_url("home", 0), "/api/pages/home/rows/insert?position=0");
        let c = OverlayConfig { url_prefix: "/admin/".into(), ..OverlayConfig::default() };
        assert_eq!(c.insert_row_url("p", 3), "/admin/p/rows/insert?position=3");
    }
}
