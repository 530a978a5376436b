//! Computation of the closest points between two shapes.

pub use self::closest_points_segment_segment::{
    closest_points_segment_segment_with_locations, squared_distance_segment_segment,
};

mod closest_points_segment_segment;
