use std::env;
use std::net::SocketAddr;
use std::num::NonZeroU32;

use nonzero_ext::nonzero;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
    #[error("{0} must be set when SMTP_HOST is set")]
    MissingSmtp(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpSettings {
    pub host: String,
    pub username: String,
    pub password: String,
    pub notify_to: String,
    pub notify_from: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub environment: Environment,
    pub bind_addr: SocketAddr,
    pub frontend_url: Option<String>,
    pub smtp: Option<SmtpSettings>,
    pub webhook_url: Option<String>,
    pub submissions_per_minute: NonZeroU32,
    /// Key the rate limiter on `X-Forwarded-For` / `X-Real-IP`. Only safe
    /// when a proxy in front of the service overwrites those headers.
    pub trust_proxy_headers: bool,
    pub sentry_dsn: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds settings from any variable source; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        // for dev its 'development' and for prod anything else
        let environment = match var("ENVIRONMENT").as_deref() {
            Some("development") | None => Environment::Development,
            Some(_) => Environment::Production,
        };

        let bind_addr: SocketAddr = match var("LEADS_BIND_ADDR") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "LEADS_BIND_ADDR",
                value,
            })?,
            None => DEFAULT_BIND_ADDR.parse().map_err(|_| ConfigError::Invalid {
                name: "LEADS_BIND_ADDR",
                value: DEFAULT_BIND_ADDR.to_string(),
            })?,
        };

        let submissions_per_minute = match var("LEAD_RATE_LIMIT_PER_MINUTE") {
            Some(value) => value
                .parse::<NonZeroU32>()
                .map_err(|_| ConfigError::Invalid {
                    name: "LEAD_RATE_LIMIT_PER_MINUTE",
                    value,
                })?,
            None => nonzero!(5u32),
        };

        let trust_proxy_headers = match var("TRUST_PROXY_HEADERS") {
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "TRUST_PROXY_HEADERS",
                        value,
                    })
                }
            },
            None => false,
        };

        let smtp = match var("SMTP_HOST") {
            Some(host) => {
                let required = |name: &'static str| var(name).ok_or(ConfigError::MissingSmtp(name));
                Some(SmtpSettings {
                    host,
                    username: required("SMTP_USERNAME")?,
                    password: required("SMTP_PASSWORD")?,
                    notify_to: required("LEAD_NOTIFY_TO")?,
                    notify_from: required("LEAD_NOTIFY_FROM")?,
                })
            }
            None => None,
        };

        Ok(Self {
            environment,
            bind_addr,
            frontend_url: var("FRONTEND_URL"),
            smtp,
            webhook_url: var("LEAD_WEBHOOK_URL"),
            submissions_per_minute,
            trust_proxy_headers,
            sentry_dsn: var("SENTRY_DSN"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let settings = settings(&[]).unwrap();
        assert_eq!(settings.environment, Environment::Development);
        assert_eq!(settings.bind_addr, "127.0.0.1:3001".parse().unwrap());
        assert_eq!(settings.submissions_per_minute.get(), 5);
        assert!(settings.smtp.is_none());
        assert!(settings.webhook_url.is_none());
        assert!(settings.frontend_url.is_none());
        assert!(!settings.trust_proxy_headers);
    }

    #[test]
    fn proxy_headers_are_opt_in() {
        assert!(settings(&[("TRUST_PROXY_HEADERS", "true")]).unwrap().trust_proxy_headers);
        assert!(!settings(&[("TRUST_PROXY_HEADERS", "0")]).unwrap().trust_proxy_headers);
        assert_eq!(
            settings(&[("TRUST_PROXY_HEADERS", "sometimes")]).unwrap_err(),
            ConfigError::Invalid {
                name: "TRUST_PROXY_HEADERS",
                value: "sometimes".into()
            }
        );
    }

    #[test]
    fn production_and_overrides() {
        let settings = settings(&[
            ("ENVIRONMENT", "production"),
            ("LEADS_BIND_ADDR", "0.0.0.0:8080"),
            ("LEAD_RATE_LIMIT_PER_MINUTE", "12"),
            ("FRONTEND_URL", "https://brightpathmarketing.com"),
            ("LEAD_WEBHOOK_URL", "https://hooks.example.com/leads"),
            ("SENTRY_DSN", "  "),
        ])
        .unwrap();
        assert_eq!(settings.environment, Environment::Production);
        assert_eq!(settings.bind_addr.port(), 8080);
        assert_eq!(settings.submissions_per_minute.get(), 12);
        assert_eq!(settings.webhook_url.as_deref(), Some("https://hooks.example.com/leads"));
        assert!(settings.sentry_dsn.is_none());
    }

    #[test]
    fn bad_numbers_are_reported() {
        assert_eq!(
            settings(&[("LEAD_RATE_LIMIT_PER_MINUTE", "0")]).unwrap_err(),
            ConfigError::Invalid {
                name: "LEAD_RATE_LIMIT_PER_MINUTE",
                value: "0".into()
            }
        );
        assert!(settings(&[("LEADS_BIND_ADDR", "localhost")]).is_err());
    }

    #[test]
    fn smtp_requires_the_full_set() {
        assert_eq!(
            settings(&[("SMTP_HOST", "smtp.example.com"), ("SMTP_USERNAME", "u")]).unwrap_err(),
            ConfigError::MissingSmtp("SMTP_PASSWORD")
        );

        let settings = settings(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "leads@example.com"),
            ("SMTP_PASSWORD", "secret"),
            ("LEAD_NOTIFY_TO", "sales@example.com"),
            ("LEAD_NOTIFY_FROM", "Website <leads@example.com>"),
        ])
        .unwrap();
        let smtp = settings.smtp.unwrap();
        assert_eq!(smtp.host, "smtp.example.com");
        assert_eq!(smtp.notify_to, "sales@example.com");
    }
}
