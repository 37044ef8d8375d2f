//! Neighbourhood sampling and the four interpolation kernels

use crate::image_pipeline::debayer::mosaic::PixelIdentity;
use crate::image_pipeline::types::PixelBuffer;

/// Value read for any neighbour outside `[0, width) x [0, height)`.
///
/// The exterior is a constant fill, not a replication of the nearest edge
/// pixel, so border pixels interpolate against zeros.
pub const EXTERIOR_SAMPLE: u8 = 0;

/// Upper bound applied to every neighbour read. A no-op for 8-bit samples.
const SAMPLE_CEILING: u16 = 255;

/// Channel-0 values of the 3x3 window centred on a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighborhood {
    pub identity: u8,
    pub n: u16,
    pub s: u16,
    pub e: u16,
    pub w: u16,
    pub ne: u16,
    pub nw: u16,
    pub se: u16,
    pub sw: u16,
}

impl Neighborhood {
    pub fn gather(input: &PixelBuffer, x: usize, y: usize) -> Self {
        let (x, y) = (x as isize, y as isize);
        let at = |dx: isize, dy: isize| exterior_sample(input, x + dx, y + dy).min(SAMPLE_CEILING);

        Self {
            identity: input.sample(x as usize, y as usize, 0),
            n: at(0, -1),
            s: at(0, 1),
            e: at(1, 0),
            w: at(-1, 0),
            ne: at(1, -1),
            nw: at(-1, -1),
            se: at(1, 1),
            sw: at(-1, 1),
        }
    }
}

#[inline]
fn exterior_sample(input: &PixelBuffer, x: isize, y: isize) -> u16 {
    if x < 0 || y < 0 || x as usize >= input.width() || y as usize >= input.height() {
        return EXTERIOR_SAMPLE as u16;
    }
    input.sample(x as usize, y as usize, 0) as u16
}

/// Candidate values for a missing channel. Averages truncate toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interpolants {
    /// Diagonal average; crosses between red and blue sites.
    pub checker: u8,
    /// Orthogonal average; green at a red or blue site.
    pub cross: u8,
    /// East/west average.
    pub horizontal: u8,
    /// North/south average.
    pub vertical: u8,
}

impl Interpolants {
    /// Neighbours are clamped to `SAMPLE_CEILING` before averaging.
    pub fn from_neighborhood(n: &Neighborhood) -> Self {
        let c = |v: u16| v.min(SAMPLE_CEILING);
        Self {
            checker: ((c(n.ne) + c(n.nw) + c(n.se) + c(n.sw)) / 4) as u8,
            cross: ((c(n.n) + c(n.s) + c(n.e) + c(n.w)) / 4) as u8,
            horizontal: ((c(n.e) + c(n.w)) / 2) as u8,
            vertical: ((c(n.n) + c(n.s)) / 2) as u8,
        }
    }

    /// Picks `[red, green, blue]` for a pixel whose sensor value is `sampled`.
    ///
    /// On a red/green line red lies east/west of a green site and blue
    /// north/south; a green/blue line swaps the two axes.
    #[inline]
    pub fn select(&self, identity: PixelIdentity, sampled: u8) -> [u8; 3] {
        match identity {
            PixelIdentity::Red => [sampled, self.cross, self.checker],
            PixelIdentity::GreenRedLine => [self.horizontal, sampled, self.vertical],
            PixelIdentity::GreenBlueLine => [self.vertical, sampled, self.horizontal],
            PixelIdentity::Blue => [self.checker, self.cross, sampled],
        }
    }
}

/// Full per-pixel evaluation: gather, average, classify, select.
#[inline]
pub fn demosaic_pixel(input: &PixelBuffer, x: usize, y: usize) -> [u8; 3] {
    let neighborhood = Neighborhood::gather(input, x, y);
    let interpolants = Interpolants::from_neighborhood(&neighborhood);
    interpolants.select(PixelIdentity::classify(x, y), neighborhood.identity)
}
