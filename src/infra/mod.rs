//! Инфраструктурный слой вокруг трекера:
//! - генерация ID;
//! - хранилище раздач, действий, советов и итогов;
//! - реестр сессий транспорта;
//! - конфигурация и логирование.

pub mod config;
pub mod ids;
pub mod logging;
pub mod persistence;
pub mod sessions;

pub use config::{AdvisorConfig, AppConfig, ConfigError};
pub use ids::*;
pub use logging::init_logging;
pub use persistence::*;
pub use sessions::{Session, SessionRegistry};
