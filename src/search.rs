use crate::models::Record;

/// Date + keyword filter over the record list. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub date: String,
    pub keyword: String,
}

impl SearchQuery {
    pub fn new(date: Option<&str>, keyword: Option<&str>) -> Self {
        Self {
            date: date.unwrap_or_default().to_string(),
            keyword: keyword.unwrap_or_default().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_empty() && self.keyword.is_empty()
    }

    pub fn clear(&mut self) {
        self.date.clear();
        self.keyword.clear();
    }

    pub fn matches(&self, record: &Record) -> bool {
        let date_ok = self.date.is_empty() || record.date == self.date;
        let keyword_ok = self.keyword.is_empty()
            || record
                .text
                .to_lowercase()
                .contains(&self.keyword.to_lowercase());
        date_ok && keyword_ok
    }

    pub fn filter<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// Human-readable summary of the active criteria.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.date.is_empty() {
            parts.push(format!("date: {}", self.date));
        }
        if !self.keyword.is_empty() {
            parts.push(format!("keyword: {}", self.keyword));
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: i64, date: &str, text: &str) -> Record {
        Record {
            id,
            date: date.to_string(),
            text: text.to_string(),
            quickbooks_text: String::new(),
            paid: false,
            invoiced: false,
        }
    }

    fn records() -> Vec<Record> {
        vec![
            rec(1, "2024-03-05", "$100 Prince \"Kiss\" Warner"),
            rec(2, "2024-03-05", "$200 Bowie \"Heroes\" RCA"),
            rec(3, "2024-04-01", "$300 Prince \"Purple Rain\" Warner"),
        ]
    }

    #[test]
    fn test_empty_query_returns_all() {
        let rs = records();
        assert_eq!(SearchQuery::default().filter(&rs).len(), 3);
    }

    #[test]
    fn test_date_exact_match() {
        let rs = records();
        let ids: Vec<i64> = SearchQuery::new(Some("2024-03-05"), None)
            .filter(&rs)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_keyword_is_case_insensitive() {
        let rs = records();
        let ids: Vec<i64> = SearchQuery::new(None, Some("PRINCE"))
            .filter(&rs)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_combined_filters_are_anded() {
        let rs = records();
        let ids: Vec<i64> = SearchQuery::new(Some("2024-03-05"), Some("prince"))
            .filter(&rs)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_keyword_ignores_quickbooks_text() {
        let mut r = rec(1, "2024-03-05", "summary");
        r.quickbooks_text = "only here".to_string();
        let query = SearchQuery::new(None, Some("only"));
        assert!(!query.matches(&r));
    }

    #[test]
    fn test_describe() {
        assert_eq!(SearchQuery::default().describe(), "");
        assert_eq!(
            SearchQuery::new(Some("2024-03-05"), Some("kiss")).describe(),
            "date: 2024-03-05, keyword: kiss"
        );
    }
}
