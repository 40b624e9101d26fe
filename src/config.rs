use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Scoring engine base URL
    #[serde(default = "default_scoring_api_url")]
    pub scoring_api_url: String,

    /// Campaign identifier the scoring engine serves rankings from
    #[serde(default = "default_scoring_campaign")]
    pub scoring_campaign: String,

    /// Request timeout for scoring calls, in seconds
    #[serde(default = "default_scoring_timeout_secs")]
    pub scoring_timeout_secs: u64,

    /// Number of ranked items requested per retrieval cycle
    #[serde(default = "default_num_results")]
    pub num_results: usize,

    /// Path to the interaction dataset file
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_scoring_api_url() -> String {
    "http://localhost:8100".to_string()
}

fn default_scoring_campaign() -> String {
    "arn:demo:campaign/service-advisor".to_string()
}

fn default_scoring_timeout_secs() -> u64 {
    30
}

fn default_num_results() -> usize {
    10
}

fn default_dataset_path() -> String {
    "dataset/interactions.json".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
