use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Reading the game dump failed
    #[error("{0}")]
    Source(#[from] giftgraph_db::SourceError),

    /// A loader stage failed
    #[error("Load failed: {0}")]
    Load(#[from] giftgraph_import::LoadError),

    /// Writing the export failed
    #[error("Export failed: {0}")]
    Export(#[from] giftgraph_export::ExportError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// A named NPC or prop does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
