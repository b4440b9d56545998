// src/report.rs
//! Flattened CSV report.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{ReportError, Result};
use crate::extract::{appliances, bathrooms, rooms};
use crate::sort::DatedListing;

pub const HEADER: [&str; 10] = [
    "MlsId",
    "MlsName",
    "DateListed",
    "StreetAddress",
    "Price",
    "Bedrooms",
    "Bathrooms",
    "Appliances",
    "Rooms",
    "Description",
];

/// Descriptions are cut to this many characters, with no ellipsis.
pub const DESCRIPTION_MAX_CHARS: usize = 199;

/// How list-valued cells (Bathrooms, Appliances, Rooms) are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFormat {
    /// `'a', 'b'` and `('Full Bathrooms', '2'), ...`, the format existing
    /// consumers of the report read.
    #[default]
    Legacy,
    /// `a; b` and `Full Bathrooms: 2; ...`.
    Delimited,
}

impl std::str::FromStr for CellFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "delimited" => Ok(Self::Delimited),
            other => Err(format!("unknown cell format `{other}`")),
        }
    }
}

impl CellFormat {
    pub fn list(self, items: &[String]) -> String {
        match self {
            Self::Legacy => items
                .iter()
                .map(|s| quote_legacy(s))
                .collect::<Vec<_>>()
                .join(", "),
            Self::Delimited => items.join("; "),
        }
    }

    pub fn pairs(self, pairs: &[(&str, &str)]) -> String {
        match self {
            Self::Legacy => pairs
                .iter()
                .map(|(label, count)| format!("({}, {})", quote_legacy(label), quote_legacy(count)))
                .collect::<Vec<_>>()
                .join(", "),
            Self::Delimited => pairs
                .iter()
                .map(|(label, count)| format!("{label}: {count}"))
                .collect::<Vec<_>>()
                .join("; "),
        }
    }
}

/// Quote a string like Python's `repr(str)`: single quotes unless the text
/// has a `'` and no `"`. Control characters and every whitespace character
/// other than a plain space are escaped as `\xNN`, `\uNNNN` or `\UNNNNNNNN`.
/// Format characters (such as U+200B) and unassigned code points are kept as-is.
pub fn quote_legacy(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };
    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() || (c.is_whitespace() && c != ' ') => {
                let n = c as u32;
                let escaped = match n {
                    0..=0xff => format!("\\x{n:02x}"),
                    0x100..=0xffff => format!("\\u{n:04x}"),
                    _ => format!("\\U{n:08x}"),
                };
                out.push_str(&escaped);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// First `DESCRIPTION_MAX_CHARS` characters of a description.
pub fn truncate_description(s: &str) -> &str {
    match s.char_indices().nth(DESCRIPTION_MAX_CHARS) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// The ten cells of one report row.
pub fn row_cells(row: &DatedListing, format: CellFormat) -> [String; 10] {
    let l = &row.listing;
    [
        l.mls_id.clone(),
        l.mls_name.clone(),
        row.date_key.clone(),
        l.street_address.clone(),
        l.price.clone(),
        l.bedrooms.clone(),
        format.pairs(&bathrooms(l)),
        format.list(appliances(l)),
        format.list(rooms(l)),
        truncate_description(&l.description).to_string(),
    ]
}

/// Render the whole CSV document in memory.
pub fn render_report(rows: &[DatedListing], format: CellFormat) -> io::Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    wtr.write_record(HEADER)?;
    for row in rows {
        wtr.write_record(row_cells(row, format))?;
    }
    wtr.into_inner()
        .map_err(|e| io::Error::new(e.error().kind(), e.error().to_string()))
}

/// Render and write the report to `path`, creating parent directories and
/// overwriting any existing file.
pub fn write_report(path: &Path, rows: &[DatedListing], format: CellFormat) -> Result<usize> {
    let io_err = |source: io::Error| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let bytes = render_report(rows, format).map_err(io_err)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, bytes).map_err(io_err)?;

    info!(target: "report", path = %path.display(), rows = rows.len(), ?format, "report written");
    Ok(rows.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_quoting_matches_repr() {
        assert_eq!(quote_legacy("Room1"), "'Room1'");
        assert_eq!(quote_legacy("Bob's den"), "\"Bob's den\"");
        assert_eq!(quote_legacy(r#"it's "big""#), r#"'it\'s "big"'"#);
        assert_eq!(quote_legacy("a\\b\nc"), "'a\\\\b\\nc'");
        assert_eq!(quote_legacy("\u{1}"), "'\\x01'");
        assert_eq!(quote_legacy("café"), "'café'");
    }

    #[test]
    fn legacy_quoting_escapes_unprintable_unicode() {
        assert_eq!(quote_legacy("a\u{85}b"), "'a\\x85b'");
        assert_eq!(quote_legacy("4\u{a0}beds"), "'4\\xa0beds'");
        assert_eq!(quote_legacy("\u{9f}"), "'\\x9f'");
        assert_eq!(quote_legacy("x\u{2028}y"), "'x\\u2028y'");
        assert_eq!(quote_legacy("\u{3000}"), "'\\u3000'");
        assert_eq!(quote_legacy("a b"), "'a b'");
    }

    #[test]
    fn list_and_pair_cells() {
        let items = vec!["Appliance2".to_string(), "Appliance3".to_string()];
        assert_eq!(CellFormat::Legacy.list(&items), "'Appliance2', 'Appliance3'");
        assert_eq!(CellFormat::Delimited.list(&items), "Appliance2; Appliance3");
        assert_eq!(CellFormat::Legacy.list(&[]), "");

        let pairs = [("Full Bathrooms", "18"), ("Half Bathrooms", "19")];
        assert_eq!(
            CellFormat::Legacy.pairs(&pairs),
            "('Full Bathrooms', '18'), ('Half Bathrooms', '19')"
        );
        assert_eq!(
            CellFormat::Delimited.pairs(&pairs),
            "Full Bathrooms: 18; Half Bathrooms: 19"
        );
    }

    #[test]
    fn description_is_cut_by_characters() {
        let long = "é".repeat(250);
        let cut = truncate_description(&long);
        assert_eq!(cut.chars().count(), DESCRIPTION_MAX_CHARS);
        assert_eq!(truncate_description("short"), "short");
        let exact = "x".repeat(DESCRIPTION_MAX_CHARS);
        assert_eq!(truncate_description(&exact), exact);
    }

    #[test]
    fn cell_format_parses_case_insensitively() {
        assert_eq!("Legacy".parse::<CellFormat>(), Ok(CellFormat::Legacy));
        assert_eq!(" delimited ".parse::<CellFormat>(), Ok(CellFormat::Delimited));
        assert!("tsv".parse::<CellFormat>().is_err());
    }

    #[test]
    fn empty_report_is_header_only() {
        let bytes = render_report(&[], CellFormat::Legacy).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "MlsId,MlsName,DateListed,StreetAddress,Price,Bedrooms,Bathrooms,Appliances,Rooms,Description\r\n"
        );
    }
}
