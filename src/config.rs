use dioxus::prelude::*;

const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com";

/// Application configuration
/// In debug builds: loads a .env file first, then reads the environment
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the product catalog service
    pub catalog_base_url: String,
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Self {
        #[cfg(debug_assertions)]
        if dotenvy::dotenv().is_ok() {
            println!("Config: Dev mode activated - loaded .env file");
        }

        Self::from_env()
    }

    /// Load configuration from environment variables
    fn from_env() -> Self {
        let catalog_base_url =
            std::env::var("VITRINE_CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());

        Self { catalog_base_url }
    }
}

/// Hook to access the app configuration provided at the root
pub fn use_config() -> Config {
    use_context::<Config>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_url() {
        let config = Config::from_env();
        assert!(config.catalog_base_url.starts_with("http"));
    }
}
