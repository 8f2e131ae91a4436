use std::collections::HashMap;

use super::{CsvExporter, ExportError, Exporter, JsonExporter, TextExporter};
use crate::parser::Contact;

/// Metadata a shell needs to present a format choice: the lookup tag, a
/// save-dialog label, and the default file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatInfo {
    /// Lower-case lookup tag (e.g. "csv")
    pub tag: String,
    /// Human-readable label (e.g. "CSV File")
    pub label: String,
    /// Default file extension without the dot
    pub extension: String,
}

impl FormatInfo {
    pub fn new(tag: &str, label: &str, extension: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            label: label.to_string(),
            extension: extension.to_string(),
        }
    }
}

/// Dispatch table mapping format tags to exporters.
///
/// There is no plugin mechanism: adding a format means one [`register`]
/// call with one [`Exporter`] implementation.
///
/// [`register`]: FormatRegistry::register
pub struct FormatRegistry {
    map: HashMap<String, (FormatInfo, Box<dyn Exporter>)>,
}

impl FormatRegistry {
    /// Empty registry with no formats registered
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Registry with the three built-in formats (csv, txt, json)
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(FormatInfo::new("csv", "CSV File", "csv"), CsvExporter::new());
        registry.register(FormatInfo::new("txt", "Text File", "txt"), TextExporter);
        registry.register(FormatInfo::new("json", "JSON File", "json"), JsonExporter);
        registry
    }

    /// Register an exporter under its format tag, replacing any previous
    /// entry for the same tag
    pub fn register(&mut self, info: FormatInfo, exporter: impl Exporter + 'static) {
        self.map.insert(info.tag.clone(), (info, Box::new(exporter)));
    }

    /// Look up the exporter for a tag (case-insensitive)
    pub fn select(&self, tag: &str) -> Option<&dyn Exporter> {
        self.map
            .get(&tag.to_lowercase())
            .map(|(_, exporter)| &**exporter)
    }

    /// Metadata for a registered tag (case-insensitive)
    pub fn info(&self, tag: &str) -> Option<&FormatInfo> {
        self.map.get(&tag.to_lowercase()).map(|(info, _)| info)
    }

    /// Serialize contacts with the exporter registered for `tag`.
    ///
    /// Fails with [`ExportError::UnsupportedFormat`] when the tag is
    /// unknown; no partial output is produced.
    pub fn export(&self, contacts: &[Contact], tag: &str) -> Result<Vec<u8>, ExportError> {
        let exporter = self.select(tag).ok_or_else(|| ExportError::UnsupportedFormat {
            tag: tag.to_string(),
        })?;

        exporter.export(contacts)
    }

    /// All registered formats, sorted by tag for stable listings
    pub fn formats(&self) -> Vec<&FormatInfo> {
        let mut infos: Vec<&FormatInfo> = self.map.values().map(|(info, _)| info).collect();
        infos.sort_by(|a, b| a.tag.cmp(&b.tag));
        infos
    }

    /// Number of registered formats
    pub fn format_count(&self) -> usize {
        self.map.len()
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
