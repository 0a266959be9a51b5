/// Application-level errors
///
/// Every variant produced by the model-call and parse steps is caught at the
/// request handler and downgraded to the static fallback path, so none of
/// these surface to HTTP clients. They exist so the orchestrator can
/// pattern-match on explicit results instead of catch-all control flow, and
/// so the downgrade can be logged with a meaningful cause.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("model API key or model ID not configured")]
    Configuration,

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("model endpoint error: {0}")]
    ExternalApi(String),

    #[error("model call timed out")]
    Timeout,

    #[error("invalid model output: {0}")]
    Parse(String),
}

pub type AppResult<T> = Result<T, AppError>;
