use serde::{Deserialize, Serialize};

/// One submitted billing entry. Field names match the persisted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: i64,
    pub date: String,
    pub text: String,
    #[serde(rename = "quickbooksText")]
    pub quickbooks_text: String,
    pub paid: bool,
    pub invoiced: bool,
}

/// Autocomplete suggestions, one ordered list per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    pub stations: Vec<String>,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
    pub artists: Vec<String>,
    pub songs: Vec<String>,
    pub labels: Vec<String>,
    pub contacts: Vec<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

impl Default for Options {
    fn default() -> Self {
        Self {
            stations: owned(&["Station 1", "Station 2"]),
            prefixes: owned(&["Mr.", "Mrs.", "Ms."]),
            suffixes: owned(&["Jr.", "Sr.", "III"]),
            artists: owned(&["Artist 1", "Artist 2"]),
            songs: owned(&["Song 1", "Song 2"]),
            labels: owned(&["Label 1", "Label 2"]),
            contacts: owned(&["Contact 1", "Contact 2"]),
        }
    }
}

impl Options {
    pub fn get(&self, category: OptionCategory) -> &[String] {
        match category {
            OptionCategory::Stations => &self.stations,
            OptionCategory::Prefixes => &self.prefixes,
            OptionCategory::Suffixes => &self.suffixes,
            OptionCategory::Artists => &self.artists,
            OptionCategory::Songs => &self.songs,
            OptionCategory::Labels => &self.labels,
            OptionCategory::Contacts => &self.contacts,
        }
    }

    pub fn get_mut(&mut self, category: OptionCategory) -> &mut Vec<String> {
        match category {
            OptionCategory::Stations => &mut self.stations,
            OptionCategory::Prefixes => &mut self.prefixes,
            OptionCategory::Suffixes => &mut self.suffixes,
            OptionCategory::Artists => &mut self.artists,
            OptionCategory::Songs => &mut self.songs,
            OptionCategory::Labels => &mut self.labels,
            OptionCategory::Contacts => &mut self.contacts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OptionCategory {
    Stations,
    Prefixes,
    Suffixes,
    Artists,
    Songs,
    Labels,
    Contacts,
}

impl OptionCategory {
    pub const ALL: [OptionCategory; 7] = [
        OptionCategory::Stations,
        OptionCategory::Prefixes,
        OptionCategory::Suffixes,
        OptionCategory::Artists,
        OptionCategory::Songs,
        OptionCategory::Labels,
        OptionCategory::Contacts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stations => "stations",
            Self::Prefixes => "prefixes",
            Self::Suffixes => "suffixes",
            Self::Artists => "artists",
            Self::Songs => "songs",
            Self::Labels => "labels",
            Self::Contacts => "contacts",
        }
    }
}

impl std::fmt::Display for OptionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields of the entry form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Station,
    Date,
    Amount,
    Prefix,
    Suffix,
    Artist,
    Song,
    Label1,
    Label2,
    Contact1,
    Contact2,
    SpecialInstructions,
}

impl FormField {
    pub const ALL: [FormField; 12] = [
        FormField::Station,
        FormField::Date,
        FormField::Amount,
        FormField::Prefix,
        FormField::Suffix,
        FormField::Artist,
        FormField::Song,
        FormField::Label1,
        FormField::Label2,
        FormField::Contact1,
        FormField::Contact2,
        FormField::SpecialInstructions,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Station => "Station",
            Self::Date => "Date",
            Self::Amount => "Amount",
            Self::Prefix => "Prefix",
            Self::Suffix => "Suffix",
            Self::Artist => "Artist",
            Self::Song => "Song",
            Self::Label1 => "Label 1",
            Self::Label2 => "Label 2",
            Self::Contact1 => "Contact 1",
            Self::Contact2 => "Contact 2",
            Self::SpecialInstructions => "Special Instructions",
        }
    }

    /// Suggestion list backing this field, if any.
    pub fn category(&self) -> Option<OptionCategory> {
        match self {
            Self::Station => Some(OptionCategory::Stations),
            Self::Prefix => Some(OptionCategory::Prefixes),
            Self::Suffix => Some(OptionCategory::Suffixes),
            Self::Artist => Some(OptionCategory::Artists),
            Self::Song => Some(OptionCategory::Songs),
            Self::Label1 | Self::Label2 => Some(OptionCategory::Labels),
            Self::Contact1 | Self::Contact2 => Some(OptionCategory::Contacts),
            Self::Date | Self::Amount | Self::SpecialInstructions => None,
        }
    }
}

/// In-progress entry. Reset to default after each submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub station: String,
    pub date: String,
    pub amount: String,
    pub prefix: String,
    pub suffix: String,
    pub artist: String,
    pub song: String,
    pub label1: String,
    pub label2: String,
    pub contact1: String,
    pub contact2: String,
    pub special_instructions: String,
}

impl FormData {
    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Station => &self.station,
            FormField::Date => &self.date,
            FormField::Amount => &self.amount,
            FormField::Prefix => &self.prefix,
            FormField::Suffix => &self.suffix,
            FormField::Artist => &self.artist,
            FormField::Song => &self.song,
            FormField::Label1 => &self.label1,
            FormField::Label2 => &self.label2,
            FormField::Contact1 => &self.contact1,
            FormField::Contact2 => &self.contact2,
            FormField::SpecialInstructions => &self.special_instructions,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Station => &mut self.station,
            FormField::Date => &mut self.date,
            FormField::Amount => &mut self.amount,
            FormField::Prefix => &mut self.prefix,
            FormField::Suffix => &mut self.suffix,
            FormField::Artist => &mut self.artist,
            FormField::Song => &mut self.song,
            FormField::Label1 => &mut self.label1,
            FormField::Label2 => &mut self.label2,
            FormField::Contact1 => &mut self.contact1,
            FormField::Contact2 => &mut self.contact2,
            FormField::SpecialInstructions => &mut self.special_instructions,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn can_submit(&self) -> bool {
        !self.date.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_json_field_names() {
        let record = Record {
            id: 1,
            date: "2024-03-05".to_string(),
            text: "t".to_string(),
            quickbooks_text: "q".to_string(),
            paid: false,
            invoiced: true,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"quickbooksText\":\"q\""));
        assert!(json.contains("\"invoiced\":true"));
    }

    #[test]
    fn test_default_options_seeded() {
        let opts = Options::default();
        assert_eq!(opts.prefixes, vec!["Mr.", "Mrs.", "Ms."]);
        assert_eq!(opts.get(OptionCategory::Suffixes), ["Jr.", "Sr.", "III"]);
    }

    #[test]
    fn test_form_field_categories() {
        assert_eq!(FormField::Label2.category(), Some(OptionCategory::Labels));
        assert_eq!(FormField::Contact1.category(), Some(OptionCategory::Contacts));
        assert_eq!(FormField::Date.category(), None);
        assert_eq!(FormField::SpecialInstructions.category(), None);
    }

    #[test]
    fn test_form_reset_and_can_submit() {
        let mut form = FormData::default();
        assert!(!form.can_submit());
        *form.field_mut(FormField::Date) = "2024-03-05".to_string();
        form.artist = "A".to_string();
        assert!(form.can_submit());
        form.reset();
        assert_eq!(form, FormData::default());
    }
}
