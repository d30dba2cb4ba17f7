use std::error::Error;

use crate::dom::dom_model::Document;
use crate::persist::options::PersistOptions;
use crate::persist::session::{clear_storage, load, save};
use crate::persist::store::FileStorage;

pub fn cmd_save(
    snapshot_path: &str,
    form_id: Option<&str>,
    store_path: &str,
    options: &PersistOptions,
) -> Result<(), Box<dyn Error>> {
    let doc = read_snapshot(snapshot_path)?;
    let form = pick_form(&doc, form_id)?;

    let mut store = FileStorage::open(store_path);
    save(&doc, form, options, &mut store)?;

    println!("Saved form state to '{}'", store_path);
    Ok(())
}

pub fn cmd_load(
    snapshot_path: &str,
    form_id: Option<&str>,
    store_path: &str,
    output: Option<&str>,
    options: &PersistOptions,
) -> Result<(), Box<dyn Error>> {
    let mut doc = read_snapshot(snapshot_path)?;
    let form = pick_form(&doc, form_id)?;

    let store = FileStorage::open(store_path);
    let applied = load(&mut doc, form, options, &store)?;
    if !applied {
        println!("No stored record for this form; document unchanged.");
    }

    let json = serde_json::to_string_pretty(&doc)?;
    match output {
        Some(path) => std::fs::write(path, json)?,
        None => println!("{}", json),
    }
    Ok(())
}

pub fn cmd_clear(
    snapshot_path: &str,
    form_id: Option<&str>,
    store_path: &str,
    options: &PersistOptions,
) -> Result<(), Box<dyn Error>> {
    let doc = read_snapshot(snapshot_path)?;
    let form = pick_form(&doc, form_id)?;

    let mut store = FileStorage::open(store_path);
    clear_storage(&doc, form, options, &mut store)?;

    println!("Cleared stored record.");
    Ok(())
}

fn read_snapshot(path: &str) -> Result<Document, Box<dyn Error>> {
    let content = std::fs::read_to_string(path)?;
    let raw: serde_json::Value = serde_json::from_str(&content)?;
    Ok(Document::from_snapshot(&raw)?)
}

fn pick_form(doc: &Document, form_id: Option<&str>) -> Result<usize, Box<dyn Error>> {
    match form_id {
        Some(id) => doc
            .form_index(id)
            .ok_or_else(|| format!("no form with id '{}' in snapshot", id).into()),
        None => {
            if doc.forms.is_empty() {
                Err("snapshot contains no forms".into())
            } else {
                Ok(0)
            }
        }
    }
}
