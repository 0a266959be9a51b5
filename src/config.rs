use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Hugging Face Inference API key (bearer credential)
    ///
    /// Optional: when this or `hf_model` is unset the service runs in
    /// fallback-only mode and never contacts the remote model.
    pub hf_api_key: Option<String>,

    /// Hugging Face model identifier (e.g. "google/flan-t5-large")
    pub hf_model: Option<String>,

    /// Hugging Face Inference API base URL
    #[serde(default = "default_hf_api_url")]
    pub hf_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_hf_api_url() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// True when both the API key and model ID are present
    pub fn model_configured(&self) -> bool {
        self.hf_api_key.is_some() && self.hf_model.is_some()
    }
}
