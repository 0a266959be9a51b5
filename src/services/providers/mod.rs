/// Text-generation provider abstraction
///
/// The recommendation handler only needs "prompt in, text out", so the remote
/// model sits behind a trait object. This keeps the orchestration testable
/// against a mock and leaves room for other inference backends.
use crate::error::AppResult;

pub mod hugging_face;

pub use hugging_face::HuggingFaceProvider;

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait TextGenerationProvider: Send + Sync {
    /// Sends a prompt to the model and returns its raw text output.
    ///
    /// Fails with `Configuration` when credentials are missing, `Timeout`
    /// when the fixed request deadline elapses, and `HttpClient`/`ExternalApi`
    /// on transport or non-success responses.
    async fn generate(&self, prompt: &str) -> AppResult<String>;

    /// True when the provider has everything it needs to attempt a call.
    ///
    /// The handler checks this up front so an unconfigured deployment never
    /// pays for a doomed request attempt.
    fn is_configured(&self) -> bool;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
