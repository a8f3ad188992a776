use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to read {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    ParseInput {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },
}
