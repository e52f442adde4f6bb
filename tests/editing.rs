use anyhow::Result;
use ahtml::Component;
use pagebuilder::{ContentBody, ContentModule, EditModalBuilder, Editable, EditableModule,
                  EditablePage, EditableRow, FormData, layout::ColumnWidth,
                  editing::editable::apply_validated};

fn content(text: &str) -> ContentModule {
    ContentBody::text(text.to_string()).into_module()
}

fn widths(html: &str) -> Vec<u32> {
    html.match_indices("class=\"col col-")
        .filter_map(|(i, m)| {
            let rest = &html[i + m.len()..];
            rest[..rest.find('"')?].parse().ok()
        })
        .collect()
}

#[test]
fn t_row_partition() -> Result<()> {
    for n in [1usize, 2, 3, 4, 6, 12] {
        let mut row = EditableRow::new("r", "p")?.with_max_modules(12)?;
        for i in 0..n {
            row.add_module(content("x"), &format!("m{}", i))?;
        }
        let ws = widths(&row.to_html_string()?);
        assert_eq!(ws.len(), n);
        assert_eq!(ws.iter().sum::<u32>(), 12, "for {} modules", n);
    }
    // does not divide 12: two units stay empty
    assert_eq!(ColumnWidth::equal_share(5).get() * 5, 10);
    Ok(())
}

#[test]
fn t_two_modules_two_halves() -> Result<()> {
    let mut row = EditableRow::new("r1", "home")?
        .with_module(content("a"), "m1")?
        .with_module(content("b"), "m2")?;
    assert_eq!(widths(&row.to_html_string()?), vec![6, 6]);
    Ok(())
}

#[test]
fn t_page_insert_positions() -> Result<()> {
    let mut page = EditablePage::new("home")?;
    assert_eq!(page.insert_positions(), vec![0]);
    let html = page.to_html_string()?;
    assert_eq!(html.matches("class=\"insert-row-section").count(), 1);
    assert!(html.contains("/api/pages/home/rows/insert?position=0"));

    for id in ["a", "b"] {
        let row = page.new_row(id)?;
        page.add_row(row);
    }
    assert_eq!(page.insert_positions(), vec![1, 2]);
    let html = page.to_html_string()?;
    assert_eq!(html.matches("class=\"insert-row-section").count(), 2);
    assert!(html.contains("position=1"));
    assert!(html.contains("position=2"));
    assert!(!html.contains("position=0"));
    Ok(())
}

fn form(pairs: &[(&str, &str)]) -> FormData {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[test]
fn t_edit_then_redisplay() -> Result<()> {
    let mut module = content("Original text").with_title("Welcome");

    let modal = EditModalBuilder::new()
        .with_module_id("m1")
        .with_editable(&module)
        .with_save_url("/api/pages/home/modules/m1")
        .build()?;
    let modal_html = ahtml::Tag::from(modal).to_html_string()?;
    assert!(modal_html.contains("value=\"Welcome\""));
    assert!(modal_html.contains(">Original text</textarea>"));

    let rejected = apply_validated(&mut module, &form(&[("title", "x"), ("content", " ")]))?;
    assert_eq!(rejected.errors(), &["Content cannot be empty".to_string()]);

    let result = apply_validated(
        &mut module, &form(&[("title", "Hello"), ("content", "Fresh <text>")]))?;
    assert!(result.is_valid());
    assert_eq!(module.title(), Some("Hello"));

    let mut wrapped = EditableModule::wrap(module)
        .with_module_id("m1")?
        .with_edit_url("/api/pages/home/modules/m1/edit")
        .with_delete_url("/api/pages/home/modules/m1/delete");
    let html = wrapped.to_html_string()?;
    assert!(html.starts_with("<div id=\"editable-m1\" class=\"editable-module-wrapper\">"));
    assert!(html.contains("Fresh &lt;text&gt;"));
    assert!(!html.contains("Original text"));
    assert!(html.contains("hx-target=\"#editable-m1\""));
    assert_eq!(html.matches("module-title").count(), 1);
    assert_eq!(wrapped.to_html_string()?, html);
    Ok(())
}

#[test]
fn t_edit_view_of_wrapped_module() {
    let wrapped = EditableModule::wrap(content("x"));
    assert!(wrapped.inner().validate(&form(&[("content", "y")])).is_valid());
    assert!(wrapped.inner().editable_children().is_empty());
}
