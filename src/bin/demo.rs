use anyhow::{Result, bail};
use clap::Parser as ClapParser;
use chj_util::{warn, time_guard};
use ahtml::{Component, RenderContext, print_html_document};
use pagebuilder::{ContentBody, EditMode, EditablePage, EditableRow, ListBody, ListItem,
                  editing::editable_row::DEFAULT_MAX_MODULES};

#[derive(clap::Parser, Debug)]
/// Render an editable demo page to stdout.
struct Args {
    /// The page id, used in DOM ids and action URLs
    #[clap(long, default_value = "demo")]
    page: String,

    /// Number of rows
    #[clap(long, default_value = "2")]
    rows: usize,

    /// Number of modules per row; every third one is a list
    #[clap(long, default_value = "2")]
    modules: usize,

    /// Maximum number of modules per row
    #[clap(long)]
    max: Option<usize>,

    /// "USER_EDIT" or "OWNER_EDIT"
    #[clap(long, default_value = "OWNER_EDIT")]
    edit_mode: EditMode,

    /// Print the action descriptors as JSON instead of the HTML
    #[clap(long)]
    json: bool,

    /// Wrap the output in an HTML document
    #[clap(long)]
    doctype: bool,

    /// Report how long compilation and rendering take
    #[clap(long)]
    time: bool,
}

fn build_row(page: &EditablePage, args: &Args, r: usize) -> Result<EditableRow> {
    let mut row = page.new_row(&format!("r{}", r))?
        .with_max_modules(args.max.unwrap_or(DEFAULT_MAX_MODULES))?
        .with_edit_mode(args.edit_mode);
    for m in 0..args.modules {
        let id = format!("m{}-{}", r, m);
        if m % 3 == 2 {
            let list = ListBody::new()
                .with_item(ListItem::new("a", "First item"))
                .with_item(ListItem::new("b", "Second item"))
                .into_module()
                .with_title(format!("List {}", id));
            row.add_module(list, &id)?;
        } else {
            let content = ContentBody::text(format!("Content of <{}>", id))
                .into_module()
                .with_title(format!("Module {}", id));
            row.add_module(content, &id)?;
        }
    }
    Ok(row)
}

fn run(args: &Args) -> Result<()> {
    if args.time {
        time_guard::enabled_set(true);
    }
    let mut page = EditablePage::new(&args.page)?;
    for r in 0..args.rows {
        let row = build_row(&page, args, r)?;
        page.add_row(row);
    }
    time_guard!("render demo page");
    if args.json {
        println!("{}", serde_json::to_string_pretty(&page.actions())?);
    } else if args.doctype {
        print!("{}", print_html_document(&mut page, &RenderContext::empty())?);
    } else {
        println!("{}", page.render(&RenderContext::empty())?);
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        warn!("could not render the demo page: {:#}", e);
        bail!("demo failed")
    }
    Ok(())
}
