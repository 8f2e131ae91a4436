mod csv;
mod error;
mod json;
mod registry;
mod text;

#[cfg(test)]
mod tests;

pub use self::csv::CsvExporter;
pub use error::ExportError;
pub use json::JsonExporter;
pub use registry::{FormatInfo, FormatRegistry};
pub use text::TextExporter;

use crate::parser::Contact;

/// Display default for a missing name
pub const DEFAULT_NAME: &str = "Unknown";
/// Display default for a missing phone number
pub const DEFAULT_PHONE: &str = "";
/// Display default for a missing email address
pub const DEFAULT_EMAIL: &str = "";

/// Core trait every output format implements.
///
/// Exporters are pure transformations from an in-memory contact sequence to
/// output bytes; they never touch the filesystem. Missing fields are
/// substituted with the same default table in every format, applied here at
/// the presentation boundary rather than during parsing. An empty sequence
/// is valid input for every format.
pub trait Exporter: Send + Sync {
    /// Serialize the full contact sequence, in order, into output bytes
    fn export(&self, contacts: &[Contact]) -> Result<Vec<u8>, ExportError>;
}

fn name_or_default(contact: &Contact) -> &str {
    contact.name.as_deref().unwrap_or(DEFAULT_NAME)
}

fn phone_or_default(contact: &Contact) -> &str {
    contact.phone.as_deref().unwrap_or(DEFAULT_PHONE)
}

fn email_or_default(contact: &Contact) -> &str {
    contact.email.as_deref().unwrap_or(DEFAULT_EMAIL)
}
