use serde::Serialize;

use prepdesk::document::{load_document, plain_text};
use prepdesk::model::{Editorial, EditorialId};

use super::*;

#[derive(Serialize)]
struct YearJson<'a> {
    year: i32,
    months: Vec<MonthJson<'a>>,
}

#[derive(Serialize)]
struct MonthJson<'a> {
    month: String,
    days: Vec<DayJson<'a>>,
}

#[derive(Serialize)]
struct DayJson<'a> {
    day: u8,
    editorials: Vec<&'a Editorial>,
}

fn tree(store: &DataStore, unread_only: bool) -> Vec<YearJson<'_>> {
    let docs = store.documents();
    let mut out = Vec::new();
    for y in store.index().years() {
        let mut months = Vec::new();
        for m in &y.months {
            let mut days = Vec::new();
            for d in &m.days {
                let editorials: Vec<&Editorial> = d
                    .entries
                    .iter()
                    .map(|&pos| &docs[pos])
                    .filter(|e| !unread_only || !e.is_read)
                    .collect();
                if !editorials.is_empty() {
                    days.push(DayJson { day: d.day, editorials });
                }
            }
            if !days.is_empty() {
                months.push(MonthJson {
                    month: m.month.to_string(),
                    days,
                });
            }
        }
        if !months.is_empty() {
            out.push(YearJson { year: y.year, months });
        }
    }
    out
}

pub(super) fn handle_editorials_command(config: &DeskConfig, unread: bool, json: bool) -> Result<()> {
    let client = connect(config)?;
    let store = load_store(&client)?;
    let years = tree(&store, unread);
    if json {
        return print_json(&years, "editorials");
    }

    if years.is_empty() {
        println!("No editorials");
        return Ok(());
    }
    for y in &years {
        println!("{}", y.year);
        for m in &y.months {
            println!("  {}", m.month);
            for d in &m.days {
                for (i, e) in d.editorials.iter().enumerate() {
                    let day = if i == 0 {
                        format!("{:02}", d.day)
                    } else {
                        "  ".to_string()
                    };
                    let mark = if e.is_read { "x" } else { " " };
                    println!("    {}  [{}] {}  ({})", day, mark, e.original_filename, e.id);
                }
            }
        }
    }
    Ok(())
}

pub(super) fn handle_show_command(config: &DeskConfig, id: &str, raw: bool) -> Result<()> {
    let client = connect(config)?;
    let id = EditorialId::from(id);

    if raw {
        let link = client.editorial_download_link(&id)?;
        print!("{}", client.fetch_document_text(&link.download_url)?);
        return Ok(());
    }

    let doc = load_document(&*client, &id).with_context(|| format!("show {}", id))?;
    if let Some(title) = &doc.front_matter.title {
        println!("{}", title);
        println!();
    }
    print!("{}", plain_text(&doc.render_lines()));
    Ok(())
}
