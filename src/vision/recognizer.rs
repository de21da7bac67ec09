use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::vision::region::ScreenRegion;
use crate::vision::VisionError;

/// Снятый кадр (RGB, построчно).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Байт на пиксель (RGB).
const BYTES_PER_PIXEL: usize = 3;

impl Frame {
    /// Вырезать область кадра (координаты относительно кадра).
    pub fn crop(&self, region: ScreenRegion) -> Result<Frame, VisionError> {
        if !region.is_visible_on(self.width, self.height) {
            return Err(VisionError::RegionOffScreen(region));
        }

        let row_len = region.width as usize * BYTES_PER_PIXEL;
        let mut pixels = Vec::with_capacity(row_len * region.height as usize);
        for row in region.y..region.y + region.height {
            let start = (row as usize * self.width as usize + region.x as usize) * BYTES_PER_PIXEL;
            let line = self
                .pixels
                .get(start..start + row_len)
                .ok_or_else(|| VisionError::InvalidRegion(format!("кадр короче {region}")))?;
            pixels.extend_from_slice(line);
        }

        Ok(Frame {
            width: region.width,
            height: region.height,
            pixels,
        })
    }
}

/// Карта, найденная на кадре.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RecognizedCard {
    pub card: Card,
    pub confidence: f64,
    pub region: ScreenRegion,
}

/// Источник кадров с экрана.
pub trait ScreenSource: Send + Sync {
    /// Размер экрана (ширина, высота).
    fn screen_size(&self) -> Result<(u32, u32), VisionError>;

    fn capture(&self, region: ScreenRegion) -> Result<Frame, VisionError>;
}

/// Распознавание карт.
///
/// `Ok(vec![])` – карт на кадре нет; `Err(Unavailable)` – распознавать нечем.
pub trait CardRecognizer: Send + Sync {
    fn detect_cards(&self, frame: &Frame) -> Result<Vec<RecognizedCard>, VisionError>;
}

/// Захват области с проверкой, что она целиком на экране.
pub fn capture_checked(source: &dyn ScreenSource, region: ScreenRegion) -> Result<Frame, VisionError> {
    let (w, h) = source.screen_size()?;
    if !region.is_visible_on(w, h) {
        return Err(VisionError::RegionOffScreen(region));
    }
    source.capture(region)
}

/// Пока нет ни захвата, ни распознавания: честно говорим "недоступно".
#[derive(Clone, Copy, Debug, Default)]
pub struct UnavailableVision;

impl ScreenSource for UnavailableVision {
    fn screen_size(&self) -> Result<(u32, u32), VisionError> {
        Err(VisionError::Unavailable("screen capture"))
    }

    fn capture(&self, _region: ScreenRegion) -> Result<Frame, VisionError> {
        Err(VisionError::Unavailable("screen capture"))
    }
}

impl CardRecognizer for UnavailableVision {
    fn detect_cards(&self, _frame: &Frame) -> Result<Vec<RecognizedCard>, VisionError> {
        Err(VisionError::Unavailable("card recognition"))
    }
}
