use std::path::{Path, PathBuf};

use super::{open_db, SearchArgs};
use crate::error::Result;
use crate::ledger::Ledger;
use crate::models::Record;
use crate::settings::get_data_dir;

fn default_path() -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    get_data_dir().join("exports").join(format!("records-{date}.csv"))
}

pub(crate) fn write_csv(records: &[&Record], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["id", "date", "text", "quickbooks_text", "paid", "invoiced"])?;
    for r in records {
        wtr.write_record([
            r.id.to_string(),
            r.date.clone(),
            r.text.clone(),
            r.quickbooks_text.clone(),
            r.paid.to_string(),
            r.invoiced.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn run(search: &SearchArgs, output: Option<String>) -> Result<()> {
    let conn = open_db()?;
    let ledger = Ledger::open(&conn);
    let records = ledger.search(&search.query());
    let path = output.map(PathBuf::from).unwrap_or_else(default_path);
    write_csv(&records, &path)?;
    println!("Wrote {} record(s) to {}", records.len(), path.display());
    Ok(())
}
