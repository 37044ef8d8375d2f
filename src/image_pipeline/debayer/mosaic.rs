//! RGGB mosaic classification
//!
//! The colour sampled at a site is never stored; it follows from the parity
//! of the coordinates:
//!
//! ```text
//!        x=0  x=1
//! y=0     R    G     <- red/green line
//! y=1     G    B     <- green/blue line
//! ```

use crate::image_pipeline::types::Channel;

/// Which pair of colours a sensor row alternates between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Even rows: R G R G ...
    RedGreen,
    /// Odd rows: G B G B ...
    GreenBlue,
}

impl LineKind {
    #[inline]
    pub fn of_row(y: usize) -> Self {
        if y % 2 == 0 {
            LineKind::RedGreen
        } else {
            LineKind::GreenBlue
        }
    }
}

/// Green sites form a quincunx: odd columns on even rows, even columns on odd rows.
#[inline]
pub fn is_green(x: usize, y: usize) -> bool {
    ((x % 2) + (y % 2)) % 2 == 1
}

/// The colour physically sampled at a pixel site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelIdentity {
    Red,
    /// Green on a red/green line; red neighbours are east/west.
    GreenRedLine,
    /// Green on a green/blue line; blue neighbours are east/west.
    GreenBlueLine,
    Blue,
}

impl PixelIdentity {
    #[inline]
    pub fn classify(x: usize, y: usize) -> Self {
        match (LineKind::of_row(y), is_green(x, y)) {
            (LineKind::RedGreen, false) => PixelIdentity::Red,
            (LineKind::RedGreen, true) => PixelIdentity::GreenRedLine,
            (LineKind::GreenBlue, true) => PixelIdentity::GreenBlueLine,
            (LineKind::GreenBlue, false) => PixelIdentity::Blue,
        }
    }

    /// Output channel that reproduces the sensor value unchanged.
    pub fn sampled_channel(self) -> Channel {
        match self {
            PixelIdentity::Red => Channel::Red,
            PixelIdentity::GreenRedLine | PixelIdentity::GreenBlueLine => Channel::Green,
            PixelIdentity::Blue => Channel::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_kind_alternates_by_row() {
        assert_eq!(LineKind::of_row(0), LineKind::RedGreen);
        assert_eq!(LineKind::of_row(1), LineKind::GreenBlue);
        assert_eq!(LineKind::of_row(6), LineKind::RedGreen);
        assert_eq!(LineKind::of_row(7), LineKind::GreenBlue);
    }

    #[test]
    fn test_green_quincunx() {
        assert!(!is_green(0, 0));
        assert!(is_green(1, 0));
        assert!(is_green(0, 1));
        assert!(!is_green(1, 1));
        assert!(is_green(5, 10));
    }

    #[test]
    fn test_classification_grid_4x4() {
        use PixelIdentity::*;
        let expected = [
            [Red, GreenRedLine, Red, GreenRedLine],
            [GreenBlueLine, Blue, GreenBlueLine, Blue],
            [Red, GreenRedLine, Red, GreenRedLine],
            [GreenBlueLine, Blue, GreenBlueLine, Blue],
        ];
        for (y, row) in expected.iter().enumerate() {
            for (x, identity) in row.iter().enumerate() {
                assert_eq!(PixelIdentity::classify(x, y), *identity, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_sampled_channel() {
        assert_eq!(PixelIdentity::Red.sampled_channel(), Channel::Red);
        assert_eq!(PixelIdentity::GreenRedLine.sampled_channel(), Channel::Green);
        assert_eq!(PixelIdentity::GreenBlueLine.sampled_channel(), Channel::Green);
        assert_eq!(PixelIdentity::Blue.sampled_channel(), Channel::Blue);
    }
}
