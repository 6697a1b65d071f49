//! Configuration management for the chat proxy.
//!
//! All configuration is read from environment variables once at startup and
//! stays immutable for the process lifetime. Handlers receive it through the
//! shared application state rather than reading the environment ad hoc.

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Upstream Groq API configuration
    pub groq: GroqConfig,

    /// Server configuration (host, port)
    pub server: ServerConfig,
}

/// Configuration for the upstream Groq completions API.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// Bearer credential for upstream calls. `None` when `GROQ_API_KEY`
    /// is unset; the proxy then rejects chat requests with a config error.
    pub api_key: Option<String>,

    /// Full URL of the chat completions endpoint
    pub api_url: String,

    /// Model identifier sent with every upstream request
    pub model: String,

    /// Completion token cap sent with every upstream request
    pub max_tokens: u32,

    /// Sampling temperature sent with every upstream request
    pub temperature: f64,

    /// Upstream request timeout in seconds
    pub timeout_secs: u64,
}

/// Server-specific configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,
}

fn default_api_url() -> String {
    "https://api.groq.com/openai/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f64 {
    0.7
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: default_api_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl GroqConfig {
    /// Load the upstream configuration from environment variables.
    ///
    /// `GROQ_API_KEY` supplies the credential; `GROQ_MODEL` and
    /// `GROQ_API_URL` override the model identifier and endpoint URL.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }

        if let Ok(model) = std::env::var("GROQ_MODEL") {
            if !model.is_empty() {
                config.model = model;
            }
        }

        if let Ok(url) = std::env::var("GROQ_API_URL") {
            if !url.is_empty() {
                config.api_url = url;
            }
        }

        config
    }

    /// Whether a non-empty upstream credential is present.
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }
}

impl ServerConfig {
    /// Load the bind address from `HOST` / `PORT`, falling back to defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("HOST") {
            if !host.is_empty() {
                config.host = host;
            }
        }

        if let Ok(port_str) = std::env::var("PORT") {
            if let Ok(port) = port_str.parse::<u16>() {
                config.port = port;
            }
        }

        config
    }
}

impl AppConfig {
    /// Load the full application configuration from the environment.
    pub fn from_env() -> Self {
        Self {
            groq: GroqConfig::from_env(),
            server: ServerConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in ["GROQ_API_KEY", "GROQ_MODEL", "GROQ_API_URL", "HOST", "PORT"] {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_values() {
        let config = GroqConfig::default();
        assert_eq!(
            config.api_url,
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert_eq!(config.model, "llama-3.3-70b-versatile");
        assert_eq!(config.max_tokens, 500);
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_key.is_none());

        let server = ServerConfig::default();
        assert_eq!(server.host, "0.0.0.0");
        assert_eq!(server.port, 3000);
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_when_unset() {
        clear_env();

        let config = AppConfig::from_env();
        assert!(config.groq.api_key.is_none());
        assert!(!config.groq.is_configured());
        assert_eq!(config.groq.model, "llama-3.3-70b-versatile");
        assert_eq!(config.server.port, 3000);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("GROQ_API_KEY", "gsk_test");
        std::env::set_var("GROQ_MODEL", "llama-3.1-8b-instant");
        std::env::set_var("GROQ_API_URL", "http://localhost:9000/v1/chat/completions");
        std::env::set_var("HOST", "127.0.0.1");
        std::env::set_var("PORT", "4000");

        let config = AppConfig::from_env();
        assert_eq!(config.groq.api_key.as_deref(), Some("gsk_test"));
        assert!(config.groq.is_configured());
        assert_eq!(config.groq.model, "llama-3.1-8b-instant");
        assert_eq!(
            config.groq.api_url,
            "http://localhost:9000/v1/chat/completions"
        );
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 4000);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_empty_api_key_is_unconfigured() {
        clear_env();
        std::env::set_var("GROQ_API_KEY", "");

        let config = GroqConfig::from_env();
        assert!(config.api_key.is_none());
        assert!(!config.is_configured());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_falls_back_to_default() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let config = ServerConfig::from_env();
        assert_eq!(config.port, 3000);

        clear_env();
    }
}
