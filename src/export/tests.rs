use ::csv::{Reader, StringRecord};

use super::*;
use crate::parser::{Contact, VcfParser};

fn contact(name: Option<&str>, phone: Option<&str>, email: Option<&str>) -> Contact {
    Contact {
        name: name.map(str::to_string),
        phone: phone.map(str::to_string),
        email: email.map(str::to_string),
    }
}

// ========================================================================
// CSV
// ========================================================================

#[test]
fn test_csv_header_and_rows() {
    let contacts = vec![
        contact(Some("Alice"), Some("555-1234"), Some("a@example.com")),
        contact(Some("Bob"), Some("555-5678"), None),
    ];
    let bytes = CsvExporter::new().export(&contacts).unwrap();

    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "Name,Phone,Email\nAlice,555-1234,a@example.com\nBob,555-5678,\n"
    );
}

#[test]
fn test_csv_empty_sequence_is_header_only() {
    let bytes = CsvExporter::new().export(&[]).unwrap();

    assert_eq!(String::from_utf8(bytes).unwrap(), "Name,Phone,Email\n");
}

#[test]
fn test_csv_defaults_for_missing_fields() {
    let bytes = CsvExporter::new()
        .export(&[contact(None, None, None)])
        .unwrap();

    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "Name,Phone,Email\nUnknown,,\n"
    );
}

#[test]
fn test_csv_quotes_commas_and_doubles_quotes() {
    let contacts = vec![contact(Some(r#"Doe, Jane "JJ""#), Some("555-0000"), None)];
    let bytes = CsvExporter::new().export(&contacts).unwrap();
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.contains(r#""Doe, Jane ""JJ""""#), "got: {}", text);
}

#[test]
fn test_csv_crlf_terminator() {
    let bytes = CsvExporter::crlf()
        .export(&[contact(Some("Alice"), None, None)])
        .unwrap();

    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "Name,Phone,Email\r\nAlice,,\r\n"
    );
}

#[test]
fn test_csv_round_trips_through_standard_reader() {
    let contacts = vec![
        contact(Some("Doe, Jane"), Some("555-0000"), Some("j@example.com")),
        contact(None, Some("sip:bob@pbx"), None),
        contact(Some("Line\nBreak"), None, None),
    ];
    let bytes = CsvExporter::new().export(&contacts).unwrap();

    let mut reader = Reader::from_reader(bytes.as_slice());
    assert_eq!(
        reader.headers().unwrap(),
        &StringRecord::from(vec!["Name", "Phone", "Email"])
    );

    let rows: Vec<StringRecord> = reader.records().map(|row| row.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][0], "Doe, Jane");
    assert_eq!(&rows[0][1], "555-0000");
    assert_eq!(&rows[0][2], "j@example.com");
    // Defaults applied at export survive the round trip.
    assert_eq!(&rows[1][0], "Unknown");
    assert_eq!(&rows[1][1], "sip:bob@pbx");
    assert_eq!(&rows[1][2], "");
    assert_eq!(&rows[2][0], "Line\nBreak");
}

// ========================================================================
// Text
// ========================================================================

#[test]
fn test_text_block_shape() {
    let contacts = vec![
        contact(Some("Alice"), Some("555-1234"), None),
        contact(None, None, None),
    ];
    let bytes = TextExporter.export(&contacts).unwrap();

    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "Name: Alice\nPhone: 555-1234\n\nName: Unknown\nPhone: \n\n"
    );
}

#[test]
fn test_text_empty_sequence_is_empty_output() {
    assert!(TextExporter.export(&[]).unwrap().is_empty());
}

// ========================================================================
// JSON
// ========================================================================

#[test]
fn test_json_array_of_objects_with_uniform_keys() {
    let contacts = vec![
        contact(Some("Alice"), None, Some("a@example.com")),
        contact(None, Some("555-1234"), None),
    ];
    let bytes = JsonExporter.export(&contacts).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        value,
        serde_json::json!([
            {"name": "Alice", "phone": "", "email": "a@example.com"},
            {"name": "Unknown", "phone": "555-1234", "email": ""},
        ])
    );
}

#[test]
fn test_json_empty_sequence_is_empty_array() {
    let bytes = JsonExporter.export(&[]).unwrap();

    assert_eq!(String::from_utf8(bytes).unwrap(), "[]");
}

// ========================================================================
// Format registry
// ========================================================================

#[test]
fn test_registry_default_formats() {
    let registry = FormatRegistry::with_defaults();

    assert_eq!(registry.format_count(), 3);
    let tags: Vec<&str> = registry
        .formats()
        .iter()
        .map(|info| info.tag.as_str())
        .collect();
    assert_eq!(tags, vec!["csv", "json", "txt"]);
}

#[test]
fn test_registry_info_metadata() {
    let registry = FormatRegistry::with_defaults();
    let info = registry.info("csv").unwrap();

    assert_eq!(info.label, "CSV File");
    assert_eq!(info.extension, "csv");
}

#[test]
fn test_registry_unsupported_format() {
    let registry = FormatRegistry::with_defaults();

    let err = registry.export(&[], "xml").unwrap_err();
    assert!(matches!(err, ExportError::UnsupportedFormat { ref tag } if tag == "xml"));

    let contacts = vec![contact(Some("Alice"), None, None)];
    assert!(matches!(
        registry.export(&contacts, "xml"),
        Err(ExportError::UnsupportedFormat { .. })
    ));
}

#[test]
fn test_registry_tags_are_case_insensitive() {
    let registry = FormatRegistry::with_defaults();

    assert!(registry.select("CSV").is_some());
    assert_eq!(registry.info("Json").unwrap().extension, "json");
    assert!(registry.export(&[], "TXT").is_ok());
}

#[test]
fn test_registry_register_custom_format() {
    struct TsvExporter;

    impl Exporter for TsvExporter {
        fn export(&self, contacts: &[Contact]) -> Result<Vec<u8>, ExportError> {
            let mut out = String::from("Name\tPhone\n");
            for contact in contacts {
                out.push_str(&format!(
                    "{}\t{}\n",
                    name_or_default(contact),
                    phone_or_default(contact)
                ));
            }
            Ok(out.into_bytes())
        }
    }

    let mut registry = FormatRegistry::with_defaults();
    registry.register(FormatInfo::new("tsv", "TSV File", "tsv"), TsvExporter);

    assert_eq!(registry.format_count(), 4);
    let bytes = registry
        .export(&[contact(Some("Alice"), Some("555-1234"), None)], "tsv")
        .unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "Name\tPhone\nAlice\t555-1234\n"
    );
}

#[test]
fn test_registry_register_replaces_existing_tag() {
    struct EmptyExporter;

    impl Exporter for EmptyExporter {
        fn export(&self, _contacts: &[Contact]) -> Result<Vec<u8>, ExportError> {
            Ok(Vec::new())
        }
    }

    let mut registry = FormatRegistry::with_defaults();
    registry.register(FormatInfo::new("csv", "Empty", "csv"), EmptyExporter);

    assert_eq!(registry.format_count(), 3);
    assert!(registry.export(&[], "csv").unwrap().is_empty());
}

// ========================================================================
// Parse-then-export pipeline
// ========================================================================

#[test]
fn test_full_pipeline_vcf_to_csv() {
    let input = "BEGIN:VCARD\nFN:Alice\nTEL:555-1234\nEMAIL:a@example.com\nEND:VCARD\n\
                 BEGIN:VCARD\nFN:Bob\nTEL;CELL:555-9999\nEND:VCARD\n";
    let contacts = VcfParser::new().parse(input);
    let bytes = FormatRegistry::with_defaults()
        .export(&contacts, "csv")
        .unwrap();

    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "Name,Phone,Email\nAlice,555-1234,a@example.com\nBob,555-9999,\n"
    );
}
