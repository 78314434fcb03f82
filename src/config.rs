use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub fetch: FetchConfig,
    pub files: FileConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    pub request_timeout_seconds: u64,
    pub user_agent: String,
    pub renderer_wait_timeout_seconds: u64,
    pub renderer_settle_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileConfig {
    pub input_path: String,
    pub output_path: String,
    pub error_log_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fetch: FetchConfig {
                request_timeout_seconds: 15,
                user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                             (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                    .to_string(),
                renderer_wait_timeout_seconds: 15,
                renderer_settle_delay_ms: 2000,
            },
            files: FileConfig {
                input_path: "target_urls.csv".to_string(),
                output_path: "staff_directory.csv".to_string(),
                error_log_path: "scrape_errors.txt".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

pub async fn load_config(
    path: &str,
) -> std::result::Result<Config, Box<dyn std::error::Error + Send + Sync>> {
    let content = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&content)?;
    Ok(config)
}
