/// Errors that can occur while exporting a gift graph.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON writing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image directory not found: {0}")]
    ImagesDirNotFound(String),

    #[error("Default icon '{pattern}' matches no image in the image index")]
    DefaultIconMissing { pattern: String },

    #[error("Default icon '{pattern}' matches {count} images; it must match exactly one")]
    DefaultIconAmbiguous { pattern: String, count: usize },
}
