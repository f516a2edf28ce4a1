use super::SearchArgs;
use crate::browser::RecordBrowser;
use crate::error::Result;
use crate::ledger::Ledger;

pub fn run(search: &SearchArgs) -> Result<()> {
    let conn = super::open_db()?;
    let mut browser = RecordBrowser::new(Ledger::open(&conn), search.query());
    browser.run()
}
