//! Displace the layer interface of a 2D media-property model.
//!
//! A model is a headerless file of native-endian `f32` samples, row-major,
//! with a near-horizontal interface between two materials. The interface is
//! located per column and then either shifted as a staircase of bands
//! ([`curve::discrete`]) or redrawn along a sum of three sinusoids
//! ([`curve::smooth`]).

pub mod color;
pub mod config;
pub mod curve;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod preview;
pub mod report;

pub use error::{CurvyError, Result};
