use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub artifacts: ArtifactsConfig,
    pub openrouter: OpenRouterConfig,
    pub prompts: PromptConfig,
    pub swagger: SwaggerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_request_body_size: usize,
}

/// Locations of the serialized classifier artifacts loaded at startup
#[derive(Debug, Clone)]
pub struct ArtifactsConfig {
    pub model_path: PathBuf,
    pub features_path: PathBuf,
    pub encoders_path: PathBuf,
}

/// OpenRouter chat-completion provider settings
#[derive(Debug, Clone)]
pub struct OpenRouterConfig {
    /// Bearer token. Requests fail with a provider error when absent.
    pub api_key: Option<String>,
    pub base_url: String,
    pub chat_model: String,
    pub suggest_model: String,
    /// `None` means the chat call waits on the provider indefinitely
    pub chat_timeout: Option<Duration>,
    pub suggest_timeout: Duration,
    /// Sent as `X-Title` so the provider dashboard can attribute traffic
    pub app_title: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PromptConfig {
    /// Directory scanned for `.jinja` files overriding the built-in prompts
    pub template_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SwaggerConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Config {
    /// Reads the process environment. `.env` is loaded once by `main`.
    pub fn from_env() -> Result<Self, String> {
        Ok(Config {
            app: AppConfig::from_env()?,
            artifacts: ArtifactsConfig::from_env()?,
            openrouter: OpenRouterConfig::from_env()?,
            prompts: PromptConfig::from_env()?,
            swagger: SwaggerConfig::from_env()?,
        })
    }
}

impl AppConfig {
    const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 1024 * 1024; // 1MB

    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|e| format!("Invalid PORT: {}", e))?;

        // Parse CORS allowed origins from comma-separated string
        let cors_allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_request_body_size = env::var("MAX_REQUEST_BODY_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_MAX_REQUEST_BODY_SIZE.to_string())
            .parse::<usize>()
            .map_err(|_| "MAX_REQUEST_BODY_SIZE must be a valid number".to_string())?;

        Ok(Self {
            host,
            port,
            cors_allowed_origins,
            max_request_body_size,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl ArtifactsConfig {
    const DEFAULT_MODEL_PATH: &'static str = "artifacts/stress_model.json";
    const DEFAULT_FEATURES_PATH: &'static str = "artifacts/top_features.json";
    const DEFAULT_ENCODERS_PATH: &'static str = "artifacts/top_feature_encoders.json";

    pub fn from_env() -> Result<Self, String> {
        let path_var = |key: &str, default: &str| {
            env::var(key)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(default))
        };

        Ok(Self {
            model_path: path_var("MODEL_PATH", Self::DEFAULT_MODEL_PATH),
            features_path: path_var("FEATURES_PATH", Self::DEFAULT_FEATURES_PATH),
            encoders_path: path_var("ENCODERS_PATH", Self::DEFAULT_ENCODERS_PATH),
        })
    }
}

impl OpenRouterConfig {
    const DEFAULT_BASE_URL: &'static str = "https://openrouter.ai/api/v1";
    const DEFAULT_CHAT_MODEL: &'static str = "mistralai/mistral-7b-instruct:free";
    const DEFAULT_SUGGEST_MODEL: &'static str = "deepseek/deepseek-chat-v3-0324:free";
    const DEFAULT_SUGGEST_TIMEOUT_SECS: u64 = 60;

    pub fn from_env() -> Result<Self, String> {
        let api_key = env::var("OPENROUTER_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty());

        let base_url = env::var("OPENROUTER_BASE_URL")
            .unwrap_or_else(|_| Self::DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let chat_model = env::var("OPENROUTER_CHAT_MODEL")
            .unwrap_or_else(|_| Self::DEFAULT_CHAT_MODEL.to_string());

        let suggest_model = env::var("OPENROUTER_SUGGEST_MODEL")
            .unwrap_or_else(|_| Self::DEFAULT_SUGGEST_MODEL.to_string());

        let chat_timeout = match env::var("OPENROUTER_CHAT_TIMEOUT_SECS") {
            Ok(raw) if !raw.trim().is_empty() => Some(Duration::from_secs(
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| "OPENROUTER_CHAT_TIMEOUT_SECS must be a valid number".to_string())?,
            )),
            _ => None,
        };

        let suggest_timeout_secs = env::var("OPENROUTER_SUGGEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| Self::DEFAULT_SUGGEST_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .map_err(|_| "OPENROUTER_SUGGEST_TIMEOUT_SECS must be a valid number".to_string())?;

        let app_title = env::var("OPENROUTER_APP_TITLE")
            .ok()
            .filter(|s| !s.is_empty());

        Ok(Self {
            api_key,
            base_url,
            chat_model,
            suggest_model,
            chat_timeout,
            suggest_timeout: Duration::from_secs(suggest_timeout_secs),
            app_title,
        })
    }

    /// Full URL of the chat-completions endpoint
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl PromptConfig {
    const DEFAULT_TEMPLATE_DIR: &'static str = "templates/prompts";

    pub fn from_env() -> Result<Self, String> {
        let template_dir = env::var("PROMPT_TEMPLATE_DIR")
            .unwrap_or_else(|_| Self::DEFAULT_TEMPLATE_DIR.to_string());

        Ok(Self {
            template_dir: PathBuf::from(template_dir),
        })
    }
}

impl SwaggerConfig {
    pub fn from_env() -> Result<Self, String> {
        // Only use credentials if they are non-empty
        let username = env::var("SWAGGER_USERNAME").ok().filter(|s| !s.is_empty());
        let password = env::var("SWAGGER_PASSWORD").ok().filter(|s| !s.is_empty());
        let title = env::var("SWAGGER_TITLE").unwrap_or_else(|_| "Stress Relief API".to_string());
        let version = env::var("SWAGGER_VERSION").unwrap_or_else(|_| "0.1.0".to_string());
        let description = env::var("SWAGGER_DESCRIPTION").unwrap_or_else(|_| {
            "Stress-level prediction, wellbeing chat and activity suggestions".to_string()
        });

        Ok(Self {
            username,
            password,
            title,
            version,
            description,
        })
    }

    /// Returns credentials in "username:password" format if auth is enabled
    pub fn credentials(&self) -> Option<String> {
        match (&self.username, &self.password) {
            (Some(user), Some(pass)) => Some(format!("{}:{}", user, pass)),
            _ => None,
        }
    }
}
