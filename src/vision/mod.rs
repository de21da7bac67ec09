//! Захват экрана и распознавание карт как явная возможность.
//!
//! Реализаций пока нет: `UnavailableVision` отвечает `Unavailable`,
//! чтобы вызывающий код отличал "карт не найдено" от "распознавание недоступно".

pub mod recognizer;
pub mod region;

use thiserror::Error;

pub use recognizer::{capture_checked, CardRecognizer, Frame, RecognizedCard, ScreenSource, UnavailableVision};
pub use region::{CardRegions, ScreenRegion};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum VisionError {
    #[error("{0}: не реализовано")]
    Unavailable(&'static str),

    #[error("Область {0} выходит за пределы экрана")]
    RegionOffScreen(ScreenRegion),

    #[error("Некорректная область {0:?}, ожидается x,y,width,height")]
    InvalidRegion(String),
}
