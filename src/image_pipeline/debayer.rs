//! Debayering module for converting RGGB mosaics to RGB

pub mod cpu_debayer;
pub mod kernels;
pub mod mosaic;


pub use cpu_debayer::{CpuDebayer, debayer};
pub use kernels::{EXTERIOR_SAMPLE, Interpolants, Neighborhood};
pub use mosaic::{LineKind, PixelIdentity, is_green};
