mod contact;
mod error;


pub use contact::Contact;
pub use error::ParseError;

/// Line prefixes recognized as telephone properties by default.
///
/// These are two independent exact prefixes, not a general `TEL;` parameter
/// match: plain `TEL:` lines plus the `TEL;CELL` form some phone exporters
/// emit.
pub const DEFAULT_TEL_PREFIXES: &[&str] = &["TEL:", "TEL;CELL"];

/// Record terminator line, compared after trimming
const END_OF_RECORD: &str = "END:VCARD";

const FN_PREFIX: &str = "FN:";
const EMAIL_PREFIX: &str = "EMAIL:";

/// Capability switches for [`VcfParser`].
///
/// The defaults enable the superset of the historical converter behaviors:
/// `EMAIL:` recognition on, and both default TEL prefixes.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Recognize `EMAIL:` lines; when off they are skipped like any other
    /// unknown property
    pub supports_email: bool,
    /// Exact line prefixes treated as telephone properties
    pub tel_prefixes: Vec<String>,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            supports_email: true,
            tel_prefixes: DEFAULT_TEL_PREFIXES
                .iter()
                .map(|prefix| (*prefix).to_string())
                .collect(),
        }
    }
}

/// Permissive line-oriented parser for vCard-like contact files.
///
/// Only a minimal subset of properties is supported (`FN`, `TEL`/`TEL;CELL`,
/// `EMAIL`); everything else is skipped, so structurally odd input never
/// fails. Each call is independent; the parser holds no session state.
pub struct VcfParser {
    options: ParserOptions,
}

impl VcfParser {
    /// Parser with the default capability set
    pub fn new() -> Self {
        Self {
            options: ParserOptions::default(),
        }
    }

    /// Parser with an explicit capability set
    pub fn with_options(options: ParserOptions) -> Self {
        Self { options }
    }

    /// Parse raw bytes, failing only when they are not valid UTF-8.
    ///
    /// A decode failure is all-or-nothing: no partial contacts are returned.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Contact>, ParseError> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.parse(text))
    }

    /// Parse text into contacts, preserving source order.
    ///
    /// Single left-to-right pass over the lines, each trimmed at both ends
    /// before inspection. A record is emitted at every `END:VCARD` line that
    /// closes a non-empty accumulator; a terminator with nothing accumulated
    /// yields no record. A partial record still open at end of input is
    /// discarded, never auto-flushed.
    pub fn parse(&self, text: &str) -> Vec<Contact> {
        let mut contacts = Vec::new();
        let mut current = Contact::default();

        for line in text.lines() {
            let line = line.trim();

            if line == END_OF_RECORD {
                if !current.is_empty() {
                    contacts.push(std::mem::take(&mut current));
                }
            } else if let Some(rest) = line.strip_prefix(FN_PREFIX) {
                current.name = Some(rest.to_string());
            } else if self.is_tel_line(line) {
                // The value is everything after the first colon, kept
                // verbatim, so `TEL:sip:alice@pbx` yields `sip:alice@pbx`.
                // A matching line with no colon leaves the phone unset.
                if let Some((_, value)) = line.split_once(':') {
                    current.phone = Some(value.to_string());
                }
            } else if self.options.supports_email {
                if let Some(rest) = line.strip_prefix(EMAIL_PREFIX) {
                    current.email = Some(rest.to_string());
                }
            }
            // Anything else (BEGIN:VCARD included) is ignored.
        }

        contacts
    }

    fn is_tel_line(&self, line: &str) -> bool {
        self.options
            .tel_prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix))
    }
}

impl Default for VcfParser {
    fn default() -> Self {
        Self::new()
    }
}
