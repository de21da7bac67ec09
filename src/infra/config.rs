//! Конфигурация сервиса из переменных окружения (и `.env`, если есть).

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::vision::ScreenRegion;

pub const DEFAULT_MODEL: &str = "claude-3-sonnet-20240229";
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_CAPTURE_REGION: &str = "0,0,1920,1080";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Некорректное значение {key}={value:?}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Параметры запросов к языковой модели.
#[derive(Clone, Debug, PartialEq)]
pub struct AdvisorConfig {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub api_url: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1000,
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

/// Полная конфигурация сервиса.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Без ключа советник выключен, остальное работает.
    pub api_key: Option<String>,
    pub advisor: AdvisorConfig,
    pub capture_region: ScreenRegion,
    pub bind_addr: String,
}

impl AppConfig {
    /// Прочитать `.env` (если есть) и окружение процесса.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Сборка из произвольного источника "ключ -> значение" (удобно в тестах).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = AdvisorConfig::default();

        let api_key = lookup("CLAUDE_API_KEY").filter(|k| !k.trim().is_empty());

        let advisor = AdvisorConfig {
            model: lookup("AI_MODEL").unwrap_or(defaults.model),
            temperature: parse_or(&lookup, "AI_TEMPERATURE", defaults.temperature)?,
            max_tokens: parse_or(&lookup, "MAX_TOKENS", defaults.max_tokens)?,
            api_url: lookup("ANTHROPIC_API_URL").unwrap_or(defaults.api_url),
        };

        if !(0.0..=1.0).contains(&advisor.temperature) {
            return Err(ConfigError::InvalidValue {
                key: "AI_TEMPERATURE",
                value: advisor.temperature.to_string(),
                reason: "ожидается значение в [0, 1]".into(),
            });
        }

        let region_raw = lookup("SCREEN_CAPTURE_REGION").unwrap_or_else(|| DEFAULT_CAPTURE_REGION.to_string());
        let capture_region = region_raw
            .parse::<ScreenRegion>()
            .map_err(|e| ConfigError::InvalidValue {
                key: "SCREEN_CAPTURE_REGION",
                value: region_raw.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            api_key,
            advisor,
            capture_region,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }),
    }
}
