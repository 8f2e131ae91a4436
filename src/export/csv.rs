use csv::{Terminator, WriterBuilder};

use super::{email_or_default, name_or_default, phone_or_default, ExportError, Exporter};
use crate::parser::Contact;

/// RFC-4180-style CSV with a `Name,Phone,Email` header row.
///
/// Fields containing commas, quotes, or newlines are quoted with embedded
/// quotes doubled, so the output round-trips through any standard CSV
/// reader.
pub struct CsvExporter {
    terminator: Terminator,
}

impl CsvExporter {
    /// LF record terminators
    pub fn new() -> Self {
        Self {
            terminator: Terminator::Any(b'\n'),
        }
    }

    /// CRLF record terminators for strict RFC 4180 consumers
    pub fn crlf() -> Self {
        Self {
            terminator: Terminator::CRLF,
        }
    }
}

impl Exporter for CsvExporter {
    fn export(&self, contacts: &[Contact]) -> Result<Vec<u8>, ExportError> {
        let mut writer = WriterBuilder::new()
            .terminator(self.terminator)
            .from_writer(Vec::new());

        writer.write_record(["Name", "Phone", "Email"])?;
        for contact in contacts {
            writer.write_record([
                name_or_default(contact),
                phone_or_default(contact),
                email_or_default(contact),
            ])?;
        }

        writer
            .into_inner()
            .map_err(|err| ExportError::Csv(err.into_error().into()))
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}
