use crate::entry::EntryForm;
use crate::error::Result;
use crate::ledger::Ledger;

pub fn run() -> Result<()> {
    let conn = super::open_db()?;
    let saved = EntryForm::new(Ledger::open(&conn)).run()?;
    if saved > 0 {
        println!("Saved {saved} record(s).");
    }
    Ok(())
}
