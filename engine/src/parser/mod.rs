//! One Click LCA export reader with encoding and delimiter auto-detection.
//!
//! An export is laid out as:
//!
//! - line 1: metadata keys (`Entity users`, `Project name`, `Design name`,
//!   `Indicator name`)
//! - line 2: metadata values
//! - line 3: column headers, truncated at the first blank header
//! - line 4+: one row per material and life-cycle section
//!
//! Columns are addressed by header name only.

use std::path::Path;

use crate::error::{SourceError, SourceResult};
use crate::models::RawRow;

pub const ENTITY_USERS: &str = "Entity users";
pub const PROJECT_NAME: &str = "Project name";
pub const DESIGN_NAME: &str = "Design name";
pub const INDICATOR_NAME: &str = "Indicator name";

/// Metadata block of an export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportMetadata {
    pub entity_users: Vec<String>,
    pub project_name: String,
    pub design_name: String,
    pub indicator_name: String,
}

/// Result of parsing an export
#[derive(Debug, Clone)]
pub struct ExportTable {
    pub metadata: ExportMetadata,
    /// Column headers
    pub headers: Vec<String>,
    /// Content rows
    pub rows: Vec<RawRow>,
    /// Detected or used encoding
    pub encoding: String,
    /// Detected or used delimiter
    pub delimiter: char,
}

/// Detect the encoding of raw bytes.
///
/// Valid UTF-8 is taken as is; anything else goes through chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    if std::str::from_utf8(bytes).is_ok() {
        return "utf-8".to_string();
    }
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        "utf-16le" | "utf-16be" | "utf-16" => charset.to_lowercase(),
        _ => charset,
    }
}

/// Decode bytes to string using the specified encoding
pub fn decode_content(bytes: &[u8], encoding: &str) -> SourceResult<String> {
    let decoded = match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => String::from_utf8_lossy(bytes).to_string(),
        "iso-8859-1" | "latin-1" | "latin1" => {
            encoding_rs::ISO_8859_15.decode(bytes).0.to_string()
        }
        "windows-1252" | "cp1252" => encoding_rs::WINDOWS_1252.decode(bytes).0.to_string(),
        other => match encoding_rs::Encoding::for_label(other.as_bytes()) {
            Some(enc) => {
                let (text, _, had_errors) = enc.decode(bytes);
                if had_errors {
                    return Err(SourceError::EncodingError(format!(
                        "content is not valid {}",
                        enc.name()
                    )));
                }
                text.to_string()
            }
            None => String::from_utf8_lossy(bytes).to_string(),
        },
    };
    Ok(decoded.trim_start_matches('\u{feff}').to_string())
}

/// Detect the delimiter by counting occurrences in the metadata key line.
///
/// Content lines are not used: decimal commas would skew the count.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [';', ',', '\t', '|'];
    let mut best_sep = ';';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Split content into records (quoted fields may hold delimiters).
fn read_records(content: &str, delimiter: char) -> SourceResult<Vec<Vec<String>>> {
    let delimiter = u8::try_from(delimiter)
        .map_err(|_| SourceError::ParseError(format!("unsupported delimiter '{}'", delimiter)))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record?;
        records.push(record.iter().map(|c| c.trim().to_string()).collect());
    }
    Ok(records)
}

fn is_blank(record: &[String]) -> bool {
    record.iter().all(|c| c.is_empty())
}

fn parse_metadata(keys: &[String], values: &[String]) -> SourceResult<ExportMetadata> {
    let value_of = |key: &str| -> Option<String> {
        keys.iter()
            .position(|k| k == key)
            .map(|i| values.get(i).cloned().unwrap_or_default())
    };

    let known = [ENTITY_USERS, PROJECT_NAME, DESIGN_NAME, INDICATOR_NAME];
    if known.iter().all(|k| value_of(k).is_none()) {
        return Err(SourceError::NoMetadata);
    }

    Ok(ExportMetadata {
        entity_users: value_of(ENTITY_USERS)
            .unwrap_or_default()
            .split(',')
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .collect(),
        project_name: value_of(PROJECT_NAME).unwrap_or_default(),
        design_name: value_of(DESIGN_NAME).unwrap_or_default(),
        indicator_name: value_of(INDICATOR_NAME).unwrap_or_default(),
    })
}

/// Read only the metadata block of an export.
pub fn parse_export_metadata(content: &str, delimiter: char) -> SourceResult<ExportMetadata> {
    if content.trim().is_empty() {
        return Err(SourceError::EmptyFile);
    }
    let records = read_records(content, delimiter)?;
    match (records.first(), records.get(1)) {
        (Some(keys), Some(values)) => parse_metadata(keys, values),
        _ => Err(SourceError::NoMetadata),
    }
}

/// Parse a decoded export with an explicit delimiter.
pub fn parse_export(content: &str, delimiter: char, encoding: String) -> SourceResult<ExportTable> {
    if content.trim().is_empty() {
        return Err(SourceError::EmptyFile);
    }
    let records = read_records(content, delimiter)?;

    let metadata = match (records.first(), records.get(1)) {
        (Some(keys), Some(values)) => parse_metadata(keys, values)?,
        _ => return Err(SourceError::NoMetadata),
    };

    let headers: Vec<String> = records
        .get(2)
        .map(|line| line.iter().take_while(|h| !h.is_empty()).cloned().collect())
        .unwrap_or_default();
    if headers.is_empty() {
        return Err(SourceError::NoHeaders);
    }

    let rows: Vec<RawRow> = records
        .iter()
        .skip(3)
        .filter(|record| !is_blank(record))
        .map(|record| {
            RawRow::from_pairs(
                headers
                    .iter()
                    .zip(record.iter())
                    .map(|(h, c)| (h.clone(), c.clone())),
            )
        })
        .collect();
    if rows.is_empty() {
        return Err(SourceError::NoContent);
    }

    Ok(ExportTable {
        metadata,
        headers,
        rows,
        encoding,
        delimiter,
    })
}

/// Parse export bytes with auto-detection of encoding and (unless given)
/// delimiter.
pub fn parse_bytes_auto(bytes: &[u8], delimiter: Option<char>) -> SourceResult<ExportTable> {
    if bytes.is_empty() {
        return Err(SourceError::EmptyFile);
    }
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));

    parse_export(&content, delimiter, encoding)
}

/// Metadata only, from raw bytes.
pub fn parse_metadata_auto(bytes: &[u8], delimiter: Option<char>) -> SourceResult<ExportMetadata> {
    if bytes.is_empty() {
        return Err(SourceError::EmptyFile);
    }
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = delimiter.unwrap_or_else(|| detect_delimiter(&content));

    parse_export_metadata(&content, delimiter)
}

/// Parse an export file with auto-detection of encoding and delimiter.
pub fn parse_file_auto<P: AsRef<Path>>(path: P, delimiter: Option<char>) -> SourceResult<ExportTable> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "Entity users;Project name;Design name;Indicator name
\"alice@example.com, bob@example.com\";Office;Design 1;LCA for BREEAM UK
Section;Resource;RICS category;User input;Global warming kg CO₂e;;Ignored
A1-A3;Concrete;2.1 Frame;12,5;100;;x
A4;Concrete;2.1 Frame;12,5;3.5;;x
;;;;;;
";

    #[test]
    fn test_parse_export_layout() {
        let table = parse_export(EXPORT, ';', "utf-8".into()).unwrap();

        assert_eq!(table.metadata.entity_users, vec!["alice@example.com", "bob@example.com"]);
        assert_eq!(table.metadata.project_name, "Office");
        assert_eq!(table.metadata.design_name, "Design 1");
        assert_eq!(table.metadata.indicator_name, "LCA for BREEAM UK");
        assert_eq!(
            table.headers,
            vec!["Section", "Resource", "RICS category", "User input", "Global warming kg CO₂e"]
        );
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].text("Section"), "A1-A3");
        assert_eq!(table.rows[0].text("User input"), "12,5");
        assert_eq!(table.rows[1].text("Global warming kg CO₂e"), "3.5");
        assert!(!table.rows[0].has_column("Ignored"));
    }

    #[test]
    fn test_empty_export() {
        assert!(matches!(parse_export("", ';', "utf-8".into()), Err(SourceError::EmptyFile)));
        assert!(matches!(parse_bytes_auto(b"", None), Err(SourceError::EmptyFile)));
    }

    #[test]
    fn test_missing_parts() {
        let only_keys = "Entity users;Project name\n";
        assert!(matches!(
            parse_export(only_keys, ';', "utf-8".into()),
            Err(SourceError::NoMetadata)
        ));

        let unknown_keys = "Foo;Bar\n1;2\nSection;Resource\nA4;x\n";
        assert!(matches!(
            parse_export(unknown_keys, ';', "utf-8".into()),
            Err(SourceError::NoMetadata)
        ));

        let no_headers = "Project name;Indicator name\nP;DGNB\n;;\n";
        assert!(matches!(
            parse_export(no_headers, ';', "utf-8".into()),
            Err(SourceError::NoHeaders)
        ));

        let no_content = "Project name;Indicator name\nP;DGNB\nSection;Resource\n";
        assert!(matches!(
            parse_export(no_content, ';', "utf-8".into()),
            Err(SourceError::NoContent)
        ));
    }

    #[test]
    fn test_metadata_only() {
        let metadata = parse_metadata_auto(EXPORT.as_bytes(), None).unwrap();
        assert_eq!(metadata.project_name, "Office");
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1,2;3"), ';');
    }

    #[test]
    fn test_detect_delimiter_comma() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
    }

    #[test]
    fn test_detect_delimiter_tab() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), '\t');
    }

    #[test]
    fn test_auto_parse_comma_export() {
        let csv = "Project name,Indicator name\nP,DGNB\nSection,Resource\nA4,Steel\n";
        let table = parse_bytes_auto(csv.as_bytes(), None).unwrap();
        assert_eq!(table.delimiter, ',');
        assert_eq!(table.encoding, "utf-8");
        assert_eq!(table.rows[0].text("Resource"), "Steel");
    }

    #[test]
    fn test_bom_is_stripped() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"Project name;Indicator name\nP;DGNB\nSection;Resource\nA4;Steel\n");
        let table = parse_bytes_auto(&bytes, None).unwrap();
        assert_eq!(table.metadata.project_name, "P");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert_eq!(decoded, "Société");
    }
}
