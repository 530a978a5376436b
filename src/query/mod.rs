//! Non-persistent geometric queries.
//!
//! The two entry points of this module are:
//!
//! * [`query::contact_obb_obb()`](contact_obb_obb) to compute the contact
//!   between two oriented boxes, including the penetration depth, the
//!   contact normal and an estimated contact point.
//! * [`query::intersection_test_obb_obb()`](intersection_test_obb_obb) to
//!   determine if two oriented boxes are intersecting or not.
//!
//! The building blocks of those queries (the Separating Axis Theorem
//! machinery and the segment-segment closest-point computation) are
//! exposed by the [`sat`] and [`closest_points`] submodules.

pub use self::closest_points::{
    closest_points_segment_segment_with_locations, squared_distance_segment_segment,
};
pub use self::contact::{contact_obb_obb, ContactKind, ObbContact};
pub use self::intersection_test::intersection_test_obb_obb;

pub mod closest_points;
pub mod contact;
mod intersection_test;
pub mod sat;
