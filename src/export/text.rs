use super::{name_or_default, phone_or_default, ExportError, Exporter};
use crate::parser::Contact;

/// Display-oriented plain text: one `Name:`/`Phone:` block per contact with
/// a blank line between blocks, no escaping. Matches the on-screen layout of
/// the contact viewer this format came from, which is why email is not part
/// of it.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export(&self, contacts: &[Contact]) -> Result<Vec<u8>, ExportError> {
        let mut out = String::new();
        for contact in contacts {
            out.push_str(&format!(
                "Name: {}\nPhone: {}\n\n",
                name_or_default(contact),
                phone_or_default(contact)
            ));
        }

        Ok(out.into_bytes())
    }
}
