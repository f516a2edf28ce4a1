use comfy_table::{Cell, Table};

use super::open_db;
use crate::error::Result;
use crate::ledger::Ledger;
use crate::models::OptionCategory;

pub fn list(category: Option<OptionCategory>) -> Result<()> {
    let conn = open_db()?;
    let ledger = Ledger::open(&conn);
    let categories: Vec<OptionCategory> = match category {
        Some(c) => vec![c],
        None => OptionCategory::ALL.to_vec(),
    };

    let mut table = Table::new();
    table.set_header(vec!["Category", "Suggestions"]);
    for c in categories {
        table.add_row(vec![
            Cell::new(c.as_str()),
            Cell::new(ledger.options().get(c).join("\n")),
        ]);
    }
    println!("Suggestions\n{table}");
    Ok(())
}

pub fn add(category: OptionCategory, value: &str) -> Result<()> {
    let conn = open_db()?;
    let mut ledger = Ledger::open(&conn);
    if ledger.add_option(category, value)? {
        println!("Added '{value}' to {category}");
    } else if value.is_empty() {
        println!("Nothing to add");
    } else {
        println!("'{value}' is already in {category}");
    }
    Ok(())
}

pub fn remove(category: OptionCategory, value: &str) -> Result<()> {
    let conn = open_db()?;
    let mut ledger = Ledger::open(&conn);
    if ledger.remove_option(category, value)? {
        println!("Removed '{value}' from {category}");
    } else {
        println!("'{value}' is not in {category}");
    }
    Ok(())
}

pub fn reset() -> Result<()> {
    let conn = open_db()?;
    let mut ledger = Ledger::open(&conn);
    ledger.reset_options()?;
    println!("Suggestions restored to defaults");
    Ok(())
}
