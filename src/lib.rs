//! RGGB Bayer demosaicing.
//!
//! Turns a mosaicked sensor image (one sampled channel per pixel) into a
//! full RGB image by interpolating the two missing channels from neighbors.

pub mod image_pipeline;
pub mod logger;
