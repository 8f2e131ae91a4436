use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("unsupported output format: {tag:?}")]
    UnsupportedFormat { tag: String },

    #[error("failed to build CSV output")]
    Csv(#[from] ::csv::Error),

    #[error("failed to build JSON output")]
    Json(#[from] serde_json::Error),
}
