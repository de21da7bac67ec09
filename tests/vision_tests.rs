use pokerit::domain::{Card, Rank, Suit};
use pokerit::vision::*;

/// Фейковый экран фиксированного размера, отдаёт чёрный кадр.
struct FakeScreen {
    width: u32,
    height: u32,
}

impl ScreenSource for FakeScreen {
    fn screen_size(&self) -> Result<(u32, u32), VisionError> {
        Ok((self.width, self.height))
    }

    fn capture(&self, region: ScreenRegion) -> Result<Frame, VisionError> {
        Ok(Frame {
            width: region.width,
            height: region.height,
            pixels: vec![0; region.area() as usize * 3],
        })
    }
}

/// Распознаватель, который "видит" одну и ту же карту.
struct AlwaysAce;

impl CardRecognizer for AlwaysAce {
    fn detect_cards(&self, frame: &Frame) -> Result<Vec<RecognizedCard>, VisionError> {
        Ok(vec![RecognizedCard {
            card: Card::new(Rank::Ace, Suit::Spades),
            confidence: 0.9,
            region: ScreenRegion::new(0, 0, frame.width, frame.height),
        }])
    }
}

#[test]
fn region_parse_and_display() {
    let r: ScreenRegion = "0, 0, 1920, 1080".parse().unwrap();
    assert_eq!(r, ScreenRegion::new(0, 0, 1920, 1080));
    assert_eq!(r.to_string(), "0,0,1920,1080");
    assert_eq!(r.area(), 1920 * 1080);

    for bad in ["", "1,2,3", "1,2,3,4,5", "a,b,c,d", "0,0,0,10", "-1,0,10,10"] {
        assert!(
            matches!(bad.parse::<ScreenRegion>(), Err(VisionError::InvalidRegion(_))),
            "{bad:?}"
        );
    }
}

#[test]
fn region_visibility() {
    let screen = (1920, 1080);

    assert!(ScreenRegion::new(0, 0, 1920, 1080).is_visible_on(screen.0, screen.1));
    assert!(ScreenRegion::new(100, 500, 200, 300).is_visible_on(screen.0, screen.1));
    assert!(!ScreenRegion::new(1800, 0, 200, 100).is_visible_on(screen.0, screen.1));
    assert!(!ScreenRegion::new(1920, 0, 1, 1).is_visible_on(screen.0, screen.1));
    assert!(!ScreenRegion::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX).is_visible_on(screen.0, screen.1));
}

#[test]
fn default_card_regions_fit_full_hd() {
    let regions = CardRegions::default();

    assert_eq!(regions.player_cards.len(), 1);
    assert_eq!(regions.community_cards.len(), 1);
    assert!(regions
        .player_cards
        .iter()
        .chain(regions.community_cards.iter())
        .all(|r| r.is_visible_on(1920, 1080)));
}

#[test]
fn capture_checked_validates_region() {
    let screen = FakeScreen { width: 800, height: 600 };

    let frame = capture_checked(&screen, ScreenRegion::new(10, 10, 100, 50)).unwrap();
    assert_eq!((frame.width, frame.height), (100, 50));
    assert_eq!(frame.pixels.len(), 100 * 50 * 3);

    let off = ScreenRegion::new(700, 500, 200, 200);
    assert_eq!(capture_checked(&screen, off), Err(VisionError::RegionOffScreen(off)));

    let cards = AlwaysAce.detect_cards(&frame).unwrap();
    assert_eq!(cards[0].card.to_string(), "As");
}

/// "Недоступно" отличается от "карт не найдено".
#[test]
fn unavailable_vision_is_explicit() {
    let vision = UnavailableVision;

    assert!(matches!(
        capture_checked(&vision, ScreenRegion::new(0, 0, 10, 10)),
        Err(VisionError::Unavailable(_))
    ));

    let frame = Frame {
        width: 1,
        height: 1,
        pixels: vec![0, 0, 0],
    };
    assert!(matches!(vision.detect_cards(&frame), Err(VisionError::Unavailable(_))));
}

#[test]
fn region_relative_to_capture_origin() {
    let origin = ScreenRegion::new(100, 50, 800, 600);

    assert_eq!(
        ScreenRegion::new(150, 80, 20, 30).relative_to(origin),
        Some(ScreenRegion::new(50, 30, 20, 30))
    );
    assert_eq!(ScreenRegion::new(99, 80, 20, 30).relative_to(origin), None);
    assert_eq!(ScreenRegion::new(150, 10, 20, 30).relative_to(origin), None);
}

/// Кадр 4x2, пиксель (x, y) залит значением 10*y + x.
fn numbered_frame() -> Frame {
    let mut pixels = Vec::new();
    for y in 0..2u8 {
        for x in 0..4u8 {
            pixels.extend_from_slice(&[10 * y + x; 3]);
        }
    }
    Frame {
        width: 4,
        height: 2,
        pixels,
    }
}

#[test]
fn frame_crop_copies_rows() {
    let frame = numbered_frame();

    let crop = frame.crop(ScreenRegion::new(1, 0, 2, 2)).unwrap();

    assert_eq!((crop.width, crop.height), (2, 2));
    assert_eq!(crop.pixels, vec![1, 1, 1, 2, 2, 2, 11, 11, 11, 12, 12, 12]);
}

#[test]
fn frame_crop_rejects_bad_regions() {
    let frame = numbered_frame();

    let off = ScreenRegion::new(3, 0, 2, 1);
    assert_eq!(frame.crop(off), Err(VisionError::RegionOffScreen(off)));

    let truncated = Frame {
        width: 4,
        height: 2,
        pixels: vec![0; 5],
    };
    assert!(matches!(
        truncated.crop(ScreenRegion::new(0, 1, 2, 1)),
        Err(VisionError::InvalidRegion(_))
    ));
}
