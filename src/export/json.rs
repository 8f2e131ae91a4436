use serde::Serialize;

use super::{email_or_default, name_or_default, phone_or_default, ExportError, Exporter};
use crate::parser::Contact;

/// Row shape for the JSON output. Defaults are substituted before
/// serialization so every object carries the same three keys regardless of
/// which fields the source record had.
#[derive(Serialize)]
struct JsonContact<'a> {
    name: &'a str,
    phone: &'a str,
    email: &'a str,
}

/// Pretty-printed JSON array of contact objects. The indentation is
/// cosmetic; consumers should not depend on it.
pub struct JsonExporter;

impl Exporter for JsonExporter {
    fn export(&self, contacts: &[Contact]) -> Result<Vec<u8>, ExportError> {
        let rows: Vec<JsonContact<'_>> = contacts
            .iter()
            .map(|contact| JsonContact {
                name: name_or_default(contact),
                phone: phone_or_default(contact),
                email: email_or_default(contact),
            })
            .collect();

        Ok(serde_json::to_vec_pretty(&rows)?)
    }
}
