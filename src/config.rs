use std::net::IpAddr;
use std::time::Duration;

pub const DEFAULT_COMPLETION_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_COMPLETION_MODEL: &str = "llama-3.3-70b-versatile";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_size: usize,
    pub static_dir: String,
    pub log_level: String,
    pub completion: CompletionConfig,
    pub mail: MailConfig,
}

#[derive(Debug, Clone)]
pub struct CompletionConfig {
    pub url: String,
    pub model: String,
    /// Absent keys are reported when a prompt is submitted, not at startup.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct MailConfig {
    pub sender: Option<String>,
    pub sendgrid_api_key: Option<String>,
    pub smtp: Option<SmtpConfig>,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key/value source; `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = Env(lookup);
        let database_url = env.required("DATABASE_URL")?;

        let host: IpAddr = env
            .or("SURVEYSMITH_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid SURVEYSMITH_HOST: {e}"))?;

        let port: u16 = env
            .first(&["SURVEYSMITH_PORT", "PORT"])
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .map_err(|e| format!("Invalid SURVEYSMITH_PORT: {e}"))?;

        let max_body_size: usize = env
            .or("SURVEYSMITH_MAX_BODY_SIZE", "1048576")
            .parse()
            .map_err(|e| format!("Invalid SURVEYSMITH_MAX_BODY_SIZE: {e}"))?;

        let static_dir = env.or("SURVEYSMITH_STATIC_DIR", "static");
        let log_level = env.or("SURVEYSMITH_LOG_LEVEL", "info");

        let timeout_secs: u64 = env
            .or("SURVEYSMITH_COMPLETION_TIMEOUT_SECS", "120")
            .parse()
            .map_err(|e| format!("Invalid SURVEYSMITH_COMPLETION_TIMEOUT_SECS: {e}"))?;

        let completion = CompletionConfig {
            url: env.or("SURVEYSMITH_COMPLETION_URL", DEFAULT_COMPLETION_URL),
            model: env.or("SURVEYSMITH_COMPLETION_MODEL", DEFAULT_COMPLETION_MODEL),
            api_key: env.first(&["SURVEYSMITH_COMPLETION_API_KEY", "GROQ_API_KEY"]),
            timeout: Duration::from_secs(timeout_secs),
        };

        let smtp = match (
            env.get("SURVEYSMITH_SMTP_HOST"),
            env.get("SURVEYSMITH_SMTP_PORT"),
            env.get("SURVEYSMITH_SMTP_USER"),
            env.get("SURVEYSMITH_SMTP_PASS"),
        ) {
            (Some(host), Some(port), Some(user), Some(pass)) => Some(SmtpConfig {
                host,
                port: port
                    .parse()
                    .map_err(|e| format!("Invalid SURVEYSMITH_SMTP_PORT: {e}"))?,
                user,
                pass,
            }),
            _ => None,
        };

        let mail = MailConfig {
            sender: env.first(&["SURVEYSMITH_SENDER_EMAIL", "SENDER_EMAIL"]),
            sendgrid_api_key: env.first(&["SURVEYSMITH_SENDGRID_API_KEY", "SENDGRID_API_KEY"]),
            smtp,
        };

        Ok(Config {
            database_url,
            host,
            port,
            max_body_size,
            static_dir,
            log_level,
            completion,
            mail,
        })
    }
}

struct Env<F>(F);

impl<F> Env<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }

    fn required(&self, key: &str) -> Result<String, String> {
        self.get(key)
            .ok_or_else(|| format!("Missing required environment variable: {key}"))
    }

    fn or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// First non-empty value among `keys`.
    fn first(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .find(|value| !value.trim().is_empty())
    }
}
