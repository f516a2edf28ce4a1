use colored::Colorize;
use comfy_table::{Cell, Table};

use super::{open_db, AddArgs, SearchArgs};
use crate::clipboard;
use crate::error::{BillingError, Result};
use crate::ledger::Ledger;
use crate::models::Record;

pub fn add(args: AddArgs) -> Result<()> {
    let conn = open_db()?;
    let mut ledger = Ledger::open(&conn);
    let record = ledger.submit(&args.into_form())?;
    println!("Added record #{}", record.id);
    println!("  {}", record.text);
    println!("  {}", record.quickbooks_text);
    Ok(())
}

fn status_cell(on: bool, label: &str) -> Cell {
    if on {
        Cell::new(label.green().bold())
    } else {
        Cell::new("\u{2014}".dimmed())
    }
}

pub(crate) fn records_table(records: &[&Record]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["ID", "Date", "Paid", "Invoiced", "Record"]);
    for r in records {
        table.add_row(vec![
            Cell::new(r.id),
            Cell::new(&r.date),
            status_cell(r.paid, "paid"),
            status_cell(r.invoiced, "invoiced"),
            Cell::new(&r.text),
        ]);
    }
    table
}

pub fn list(search: &SearchArgs) -> Result<()> {
    let conn = open_db()?;
    let ledger = Ledger::open(&conn);
    let query = search.query();
    let records = ledger.search(&query);

    if records.is_empty() {
        if query.is_empty() {
            println!("No records yet.");
        } else {
            println!("No records match {}.", query.describe());
        }
        return Ok(());
    }

    println!("Records\n{}", records_table(&records));
    println!("{} of {} record(s)", records.len(), ledger.records().len());
    Ok(())
}

pub fn toggle_paid(id: i64) -> Result<()> {
    let conn = open_db()?;
    let mut ledger = Ledger::open(&conn);
    let paid = ledger.toggle_paid(id)?;
    println!("Record #{id} marked {}", if paid { "paid" } else { "unpaid" });
    Ok(())
}

pub fn toggle_invoiced(id: i64) -> Result<()> {
    let conn = open_db()?;
    let mut ledger = Ledger::open(&conn);
    let invoiced = ledger.toggle_invoiced(id)?;
    println!(
        "Record #{id} marked {}",
        if invoiced { "invoiced" } else { "not invoiced" }
    );
    Ok(())
}

pub fn delete(id: i64) -> Result<()> {
    let conn = open_db()?;
    let mut ledger = Ledger::open(&conn);
    let removed = ledger.delete(id)?;
    println!("Deleted record #{id}: {}", removed.text);
    Ok(())
}

pub fn copy(id: i64, quickbooks: bool) -> Result<()> {
    let conn = open_db()?;
    let ledger = Ledger::open(&conn);
    let record = ledger.get(id).ok_or(BillingError::RecordNotFound(id))?;
    let text = if quickbooks {
        &record.quickbooks_text
    } else {
        &record.text
    };
    clipboard::copy_text(text)?;
    eprintln!("Copied record #{id} to clipboard");
    Ok(())
}
