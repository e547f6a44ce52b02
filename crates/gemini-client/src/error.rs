use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("unexpected Gemini response: {reason}\n  raw: {raw}")]
    ResponseParse { reason: String, raw: String },

    #[error("model text is not a valid calendar: {source}\n  text: {text}")]
    Schema {
        text: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid calendar row: {0}")]
    InvalidRow(String),
}

pub type Result<T> = std::result::Result<T, GeminiError>;
