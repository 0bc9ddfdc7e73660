/// Dashboard configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DINERS_PATH | data/detailed_info.json | diner dataset |
/// | DISHES_PATH | data/dishes.json | kitchen party manifest |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | daily rolling log directory |
/// | ENVIRONMENT | development | development / production |
///
/// # Example
///
/// ```ignore
/// DINERS_PATH=/srv/laudure/detailed_info.json front-of-house priority
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the diner dataset (`detailed_info.json`)
    pub diners_path: String,
    /// Path of the kitchen manifest (`dishes.json`)
    pub dishes_path: String,
    /// Log level: trace | debug | info | warn | error
    pub log_level: String,
    /// Log directory; logs go to stderr when unset
    pub log_dir: Option<String>,
    /// Runtime environment: development | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            diners_path: std::env::var("DINERS_PATH")
                .unwrap_or_else(|_| "data/detailed_info.json".into()),
            dishes_path: std::env::var("DISHES_PATH").unwrap_or_else(|_| "data/dishes.json".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the dataset paths, keeping everything else
    ///
    /// Used by the CLI flags and by tests.
    pub fn with_paths(
        mut self,
        diners_path: Option<impl Into<String>>,
        dishes_path: Option<impl Into<String>>,
    ) -> Self {
        if let Some(p) = diners_path {
            self.diners_path = p.into();
        }
        if let Some(p) = dishes_path {
            self.dishes_path = p.into();
        }
        self
    }

    /// Whether running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether running in development
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
