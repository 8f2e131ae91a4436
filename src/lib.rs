// Public API exports
pub mod export;
pub mod parser;
pub mod shell;

// Re-export main types for convenience
pub use parser::{Contact, ParseError, ParserOptions, VcfParser, DEFAULT_TEL_PREFIXES};

pub use export::{
    CsvExporter, ExportError, Exporter, FormatInfo, FormatRegistry, JsonExporter, TextExporter,
};

pub use shell::{on_open, on_save, ShellError};
