//! Build-time application configuration.

/// Backend origin used when `ECOCLEAN_API_ORIGIN` is not set at build time.
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:5000";
pub const LOGIN_PATH: &str = "/api/personnel/login";
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Fixed backend origin, without a trailing slash.
    pub api_origin: String,
    pub login_path: String,
    pub page_size: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::with_origin(DEFAULT_API_ORIGIN)
    }
}

impl AppConfig {
    /// Resolve configuration from compile-time environment variables.
    pub fn from_env() -> Self {
        let mut config = match option_env!("ECOCLEAN_API_ORIGIN") {
            Some(origin) if !origin.trim().is_empty() => Self::with_origin(origin),
            _ => Self::default(),
        };
        if let Some(size) = option_env!("ECOCLEAN_PAGE_SIZE").and_then(|s| s.parse().ok()) {
            config.page_size = size;
        }
        config
    }

    pub fn with_origin(origin: &str) -> Self {
        Self {
            api_origin: origin.trim().trim_end_matches('/').to_string(),
            login_path: LOGIN_PATH.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
