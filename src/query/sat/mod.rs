//! Application of the Separating Axis Theorem to pairs of oriented boxes.

pub use self::sat_obb_obb::{
    candidate_axes, find_min_overlap_axis, project_onto_axis, AxisSource, CandidateAxis,
};

mod sat_obb_obb;
