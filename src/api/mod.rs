//! Внешний контракт трекера.
//!
//! Здесь описываются:
//! - команды (commands.rs) – обновления от источника распознавания;
//! - запросы (queries.rs) – сборка снэпшотов;
//! - DTO (dto.rs) – кадры для клиента;
//! - ошибки (errors.rs) – то, что видит клиент.

pub mod commands;
pub mod dto;
pub mod errors;
pub mod queries;

pub use commands::*;
pub use dto::*;
pub use errors::*;
pub use queries::*;
