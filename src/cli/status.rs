use crate::db::{get_connection, DB_FILE};
use crate::error::Result;
use crate::fmt::format_bytes;
use crate::ledger::Ledger;
use crate::models::OptionCategory;
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let data_dir = std::path::PathBuf::from(&settings.data_dir);
    let db_path = data_dir.join(DB_FILE);

    println!("Data dir:   {}", data_dir.display());
    println!("Database:   {}", db_path.display());

    if !db_path.exists() {
        println!();
        println!("Database not found. Run `mqbill init` to set up.");
        return Ok(());
    }

    let size = std::fs::metadata(&db_path)?.len();
    println!("DB size:    {}", format_bytes(size));

    let conn = get_connection(&db_path)?;
    let ledger = Ledger::open(&conn);
    let records = ledger.records();
    let paid = records.iter().filter(|r| r.paid).count();
    let invoiced = records.iter().filter(|r| r.invoiced).count();
    let outstanding = records.iter().filter(|r| r.invoiced && !r.paid).count();
    let options: usize = OptionCategory::ALL
        .iter()
        .map(|c| ledger.options().get(*c).len())
        .sum();

    println!();
    println!("Records:      {}", records.len());
    println!("Paid:         {paid}");
    println!("Invoiced:     {invoiced}");
    println!("Outstanding:  {outstanding}");
    println!("Suggestions:  {options}");
    Ok(())
}
