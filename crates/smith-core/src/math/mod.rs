//! Transform engine
//!
//! Pure conversions among Γ, Z, Y and their normalized forms, VSWR and loss
//! figures, plus the circle geometry of the Smith chart loci.

pub mod conversions;
pub mod geometry;

pub use conversions::*;
pub use geometry::*;
