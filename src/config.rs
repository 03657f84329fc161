use serde::Deserialize;
use std::net::SocketAddr;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
}

/// Which backend the repositories talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    Postgres,
    Memory,
}

/// Language of the human readable error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ko,
}

impl Locale {
    pub fn article_not_found(self) -> &'static str {
        match self {
            Locale::En => "Article does not exist",
            Locale::Ko => "Article 이 존재하지 않습니다.",
        }
    }

    pub fn user_not_found(self) -> &'static str {
        match self {
            Locale::En => "User does not exist",
            Locale::Ko => "User 가 존재하지 않습니다.",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BannerProperties {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Blog-level metadata. Not served by any endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct BlogProperties {
    pub title: String,
    pub banner: BannerProperties,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub locale: Locale,
    pub seed_demo: bool,
    pub blog: BlogProperties,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            max_connections: 10,
            host: "0.0.0.0".into(),
            port: 8080,
            store: StoreKind::Memory,
            locale: Locale::En,
            seed_demo: false,
            blog: BlogProperties {
                title: "Blog".into(),
                banner: BannerProperties::default(),
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("BLOG_STORE").as_deref() {
            None | Some("postgres") => StoreKind::Postgres,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "BLOG_STORE",
                    value: other.into(),
                })
            }
        };

        let database_url = lookup("DATABASE_URL");
        if store == StoreKind::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let locale = match lookup("BLOG_LOCALE").as_deref() {
            None | Some("en") => Locale::En,
            Some("ko") => Locale::Ko,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "BLOG_LOCALE",
                    value: other.into(),
                })
            }
        };

        Ok(Self {
            database_url,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            host: lookup("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&lookup, "APP_PORT", 8080)?,
            store,
            locale,
            seed_demo: parse_or(&lookup, "BLOG_SEED_DEMO", false)?,
            blog: BlogProperties {
                title: lookup("BLOG_TITLE").unwrap_or_else(|| "Blog".into()),
                banner: BannerProperties {
                    title: lookup("BLOG_BANNER_TITLE"),
                    content: lookup("BLOG_BANNER_CONTENT"),
                },
            },
        })
    }

    pub fn listen_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::Invalid {
            var: "APP_HOST",
            value: raw,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}
