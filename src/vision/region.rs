use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::vision::VisionError;

/// Прямоугольник на экране в пикселях.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ScreenRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl ScreenRegion {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Лежит ли область целиком на экране заданного размера.
    pub fn is_visible_on(&self, screen_width: u32, screen_height: u32) -> bool {
        let right = self.x as u64 + self.width as u64;
        let bottom = self.y as u64 + self.height as u64;

        self.x < screen_width
            && self.y < screen_height
            && right <= screen_width as u64
            && bottom <= screen_height as u64
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Та же область в координатах кадра, снятого с `origin`.
    /// `None`, если область начинается левее или выше кадра.
    pub fn relative_to(&self, origin: ScreenRegion) -> Option<ScreenRegion> {
        Some(ScreenRegion::new(
            self.x.checked_sub(origin.x)?,
            self.y.checked_sub(origin.y)?,
            self.width,
            self.height,
        ))
    }
}

impl fmt::Display for ScreenRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

/// Формат `x,y,width,height`, как в `SCREEN_CAPTURE_REGION`.
impl FromStr for ScreenRegion {
    type Err = VisionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|p| p.trim().parse::<u32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| VisionError::InvalidRegion(s.to_string()))?;

        match parts.as_slice() {
            [x, y, w, h] if *w > 0 && *h > 0 => Ok(ScreenRegion::new(*x, *y, *w, *h)),
            _ => Err(VisionError::InvalidRegion(s.to_string())),
        }
    }
}

/// Области карт на столе конкретного покерного клиента.
/// Координаты калибруются под клиент, значения по умолчанию – примерные.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardRegions {
    pub player_cards: Vec<ScreenRegion>,
    pub community_cards: Vec<ScreenRegion>,
}

impl Default for CardRegions {
    fn default() -> Self {
        Self {
            player_cards: vec![ScreenRegion::new(100, 500, 200, 300)],
            community_cards: vec![ScreenRegion::new(400, 300, 600, 200)],
        }
    }
}
