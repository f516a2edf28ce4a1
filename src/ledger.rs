use rusqlite::Connection;

use crate::error::{BillingError, Result};
use crate::fmt::{quickbooks_text, summary_text};
use crate::models::{FormData, FormField, OptionCategory, Options, Record};
use crate::search::SearchQuery;
use crate::store::{self, OPTIONS_KEY, RECORDS_KEY};

/// Record store and option store, persisted to the key-value table on
/// every change.
pub struct Ledger<'c> {
    conn: &'c Connection,
    records: Vec<Record>,
    options: Options,
}

impl<'c> Ledger<'c> {
    pub fn open(conn: &'c Connection) -> Self {
        let records = store::load_or_default(conn, RECORDS_KEY, Vec::new);
        let options = store::load_or_default(conn, OPTIONS_KEY, Options::default);
        Self {
            conn,
            records,
            options,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn get(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn search(&self, query: &SearchQuery) -> Vec<&Record> {
        query.filter(&self.records)
    }

    /// Create a record from the form. Rejected without any change when the
    /// date is empty.
    pub fn submit(&mut self, form: &FormData) -> Result<Record> {
        if !form.can_submit() {
            return Err(BillingError::MissingDate);
        }
        let record = Record {
            id: self.next_id(),
            date: form.date.clone(),
            text: summary_text(form),
            quickbooks_text: quickbooks_text(form),
            paid: false,
            invoiced: false,
        };
        self.records.push(record.clone());
        self.save_records()?;
        self.learn_options(form)?;
        tracing::info!(id = record.id, date = %record.date, "record added");
        Ok(record)
    }

    pub fn toggle_paid(&mut self, id: i64) -> Result<bool> {
        let record = self.find_mut(id)?;
        record.paid = !record.paid;
        let state = record.paid;
        self.save_records()?;
        Ok(state)
    }

    pub fn toggle_invoiced(&mut self, id: i64) -> Result<bool> {
        let record = self.find_mut(id)?;
        record.invoiced = !record.invoiced;
        let state = record.invoiced;
        self.save_records()?;
        Ok(state)
    }

    pub fn delete(&mut self, id: i64) -> Result<Record> {
        let idx = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or(BillingError::RecordNotFound(id))?;
        let removed = self.records.remove(idx);
        self.save_records()?;
        tracing::info!(id, "record deleted");
        Ok(removed)
    }

    /// Append `value` to the category's suggestions unless it's empty or
    /// already known. Returns whether it was added.
    pub fn add_option(&mut self, category: OptionCategory, value: &str) -> Result<bool> {
        if !insert_option(&mut self.options, category, value) {
            return Ok(false);
        }
        self.save_options()?;
        tracing::debug!(%category, value, "option added");
        Ok(true)
    }

    /// Remember every new value typed into a suggestion-backed field.
    pub fn learn_options(&mut self, form: &FormData) -> Result<usize> {
        let mut added = 0;
        for field in FormField::ALL {
            if let Some(category) = field.category() {
                if insert_option(&mut self.options, category, form.field(field)) {
                    added += 1;
                }
            }
        }
        if added > 0 {
            self.save_options()?;
        }
        Ok(added)
    }

    pub fn remove_option(&mut self, category: OptionCategory, value: &str) -> Result<bool> {
        let list = self.options.get_mut(category);
        let before = list.len();
        list.retain(|v| v != value);
        if list.len() == before {
            return Ok(false);
        }
        self.save_options()?;
        Ok(true)
    }

    pub fn reset_options(&mut self) -> Result<()> {
        self.options = Options::default();
        self.save_options()
    }

    fn find_mut(&mut self, id: i64) -> Result<&mut Record> {
        self.records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(BillingError::RecordNotFound(id))
    }

    fn next_id(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        match self.records.iter().map(|r| r.id).max() {
            Some(last) if last >= now => last + 1,
            _ => now,
        }
    }

    fn save_records(&self) -> Result<()> {
        store::save(self.conn, RECORDS_KEY, &self.records)
    }

    fn save_options(&self) -> Result<()> {
        store::save(self.conn, OPTIONS_KEY, &self.options)
    }
}

fn insert_option(options: &mut Options, category: OptionCategory, value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    let list = options.get_mut(category);
    if list.iter().any(|v| v == value) {
        return false;
    }
    list.push(value.to_string());
    true
}
