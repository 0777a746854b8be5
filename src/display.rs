//! Rating colors as shown on AtCoder profiles

use serde::{Deserialize, Serialize};

/// Color band of a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingColor {
    Gray,
    Brown,
    Green,
    Cyan,
    Blue,
    Yellow,
    Orange,
    Red,
}

impl RatingColor {
    /// Band containing `rating`; each band spans 400 points, red is open-ended
    pub fn for_rating(rating: f64) -> Self {
        const BANDS: [(f64, RatingColor); 7] = [
            (400.0, RatingColor::Gray),
            (800.0, RatingColor::Brown),
            (1200.0, RatingColor::Green),
            (1600.0, RatingColor::Cyan),
            (2000.0, RatingColor::Blue),
            (2400.0, RatingColor::Yellow),
            (2800.0, RatingColor::Orange),
        ];

        BANDS
            .iter()
            .find(|(upper, _)| rating < *upper)
            .map(|(_, color)| *color)
            .unwrap_or(RatingColor::Red)
    }

    pub fn rgb(&self) -> [u8; 3] {
        match self {
            RatingColor::Gray => [128, 128, 128],
            RatingColor::Brown => [128, 64, 0],
            RatingColor::Green => [0, 128, 0],
            RatingColor::Cyan => [0, 192, 192],
            RatingColor::Blue => [0, 0, 255],
            RatingColor::Yellow => [192, 192, 0],
            RatingColor::Orange => [255, 128, 0],
            RatingColor::Red => [255, 0, 0],
        }
    }
}

impl std::fmt::Display for RatingColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RatingColor::Gray => "gray",
            RatingColor::Brown => "brown",
            RatingColor::Green => "green",
            RatingColor::Cyan => "cyan",
            RatingColor::Blue => "blue",
            RatingColor::Yellow => "yellow",
            RatingColor::Orange => "orange",
            RatingColor::Red => "red",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(RatingColor::for_rating(0.0), RatingColor::Gray);
        assert_eq!(RatingColor::for_rating(399.99), RatingColor::Gray);
        assert_eq!(RatingColor::for_rating(400.0), RatingColor::Brown);
        assert_eq!(RatingColor::for_rating(1199.0), RatingColor::Green);
        assert_eq!(RatingColor::for_rating(1200.0), RatingColor::Cyan);
        assert_eq!(RatingColor::for_rating(1999.0), RatingColor::Blue);
        assert_eq!(RatingColor::for_rating(2400.0), RatingColor::Orange);
        assert_eq!(RatingColor::for_rating(2800.0), RatingColor::Red);
        assert_eq!(RatingColor::for_rating(4021.0), RatingColor::Red);
    }

    #[test]
    fn test_rgb() {
        assert_eq!(RatingColor::for_rating(100.0).rgb(), [128, 128, 128]);
        assert_eq!(RatingColor::for_rating(2180.0).rgb(), [192, 192, 0]);
        assert_eq!(RatingColor::for_rating(3000.0).rgb(), [255, 0, 0]);
        assert_eq!(RatingColor::Cyan.to_string(), "cyan");
    }
}
