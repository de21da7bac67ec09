//! Pokerit: помощник игрока в покер.
//!
//! Ядро – трекер раздачи (`engine::GameState`). Вокруг него:
//! распознавание стола (`vision`), советник на языковой модели (`advisor`),
//! хранилище раздач и сессий (`infra`), транспорт (`api` + `server`).

pub mod advisor;
pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod server;
pub mod vision;

pub use engine::GameState;
