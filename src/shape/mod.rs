//! Geometric entities manipulated by the collision queries.

pub use self::obb::Obb;
pub use self::segment::{Segment, SegmentPointLocation};

mod obb;
mod segment;
