use crate::models::FormData;

/// Build the human-readable summary line for a record.
/// Optional trailing segments are appended only when non-empty.
pub fn summary_text(form: &FormData) -> String {
    let mut text = format!(
        "{}{}{} {} \"{}\" {}",
        form.prefix, form.amount, form.suffix, form.artist, form.song, form.label1
    );
    for segment in [
        &form.label2,
        &form.contact1,
        &form.contact2,
        &form.special_instructions,
    ] {
        if !segment.is_empty() {
            text.push_str(" / ");
            text.push_str(segment);
        }
    }
    text
}

/// Reformat an ISO date (YYYY-MM-DD) as MM/DD/YYYY.
/// Anything that doesn't split into three parts is returned as-is.
pub fn quickbooks_date(iso: &str) -> String {
    let parts: Vec<&str> = iso.split('-').collect();
    match parts.as_slice() {
        [year, month, day] => format!("{month}/{day}/{year}"),
        _ => iso.to_string(),
    }
}

/// Build the line pasted into the accounting tool.
pub fn quickbooks_text(form: &FormData) -> String {
    format!(
        "{} \"{}\" ({}) {}",
        form.artist,
        form.song,
        form.station,
        quickbooks_date(&form.date)
    )
}

/// Format a byte count for display: 512 B, 1.5 KB, 3.2 MB
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormData {
        FormData {
            station: "WXYZ".to_string(),
            date: "2024-03-05".to_string(),
            amount: "250".to_string(),
            prefix: "$".to_string(),
            suffix: ".00".to_string(),
            artist: "The Band".to_string(),
            song: "Hit Song".to_string(),
            label1: "Big Label".to_string(),
            ..FormData::default()
        }
    }

    #[test]
    fn test_summary_without_optional_segments() {
        assert_eq!(summary_text(&form()), "$250.00 The Band \"Hit Song\" Big Label");
    }

    #[test]
    fn test_summary_optional_segments_in_fixed_order() {
        let mut f = form();
        f.special_instructions = "Net 30".to_string();
        f.contact1 = "Jane".to_string();
        f.label2 = "Sub Label".to_string();
        assert_eq!(
            summary_text(&f),
            "$250.00 The Band \"Hit Song\" Big Label / Sub Label / Jane / Net 30"
        );
    }

    #[test]
    fn test_summary_skips_empty_middle_segment() {
        let mut f = form();
        f.contact2 = "Bob".to_string();
        assert_eq!(summary_text(&f), "$250.00 The Band \"Hit Song\" Big Label / Bob");
    }

    #[test]
    fn test_quickbooks_date() {
        assert_eq!(quickbooks_date("2024-03-05"), "03/05/2024");
        assert_eq!(quickbooks_date("1999-12-31"), "12/31/1999");
    }

    #[test]
    fn test_quickbooks_date_passes_through_odd_input() {
        assert_eq!(quickbooks_date("2024-03"), "2024-03");
        assert_eq!(quickbooks_date(""), "");
    }

    #[test]
    fn test_quickbooks_text() {
        assert_eq!(quickbooks_text(&form()), "The Band \"Hit Song\" (WXYZ) 03/05/2024");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(1536), "1.5 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024), "3.0 MB");
    }
}
