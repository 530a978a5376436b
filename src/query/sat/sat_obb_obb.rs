use crate::math::{Real, UnitVector, Vector, DEFAULT_TOLERANCE, DIM};
use crate::shape::Obb;
use arrayvec::ArrayVec;

/// Identifies the feature pair that generated a candidate separating axis.
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum AxisSource {
    /// The `i`-th face normal of the first box.
    FaceA(usize),
    /// The `i`-th face normal of the second box.
    FaceB(usize),
    /// The cross product of the `i`-th axis of the first box with the
    /// `j`-th axis of the second box.
    EdgeCross(usize, usize),
}

impl AxisSource {
    /// Whether this axis belongs to the face-normal group.
    #[inline]
    pub fn is_face(self) -> bool {
        matches!(self, AxisSource::FaceA(_) | AxisSource::FaceB(_))
    }
}

/// A candidate separating axis, together with its provenance.
#[derive(Debug, Copy, Clone)]
pub struct CandidateAxis {
    /// The unit direction to test.
    pub axis: UnitVector<Real>,
    /// The feature pair this axis was built from.
    pub source: AxisSource,
}

/// Projects `obb` onto `axis`, returning the interval `(min, max)` covered
/// by the projection.
///
/// The interval is computed analytically from the half-extents rather than
/// by enumerating the 8 corners. `axis` is assumed to be a unit vector;
/// the interval is scaled by its norm otherwise.
#[inline]
pub fn project_onto_axis(obb: &Obb, axis: &Vector<Real>) -> (Real, Real) {
    let center = obb.center.coords.dot(axis);
    let mut extent = 0.0;

    for i in 0..DIM {
        extent += obb.half_extents[i] * obb.axes[i].dot(axis).abs();
    }

    (center - extent, center + extent)
}

/// Builds the ordered sequence of candidate separating axes for a pair of
/// oriented boxes.
///
/// The sequence starts with the 3 face normals of `obb1` and the 3 face
/// normals of `obb2`, followed by the normalized pairwise cross products of
/// their axes. A cross product whose squared length does not exceed
/// [`DEFAULT_TOLERANCE`](crate::math::DEFAULT_TOLERANCE) comes from two
/// (near-)parallel axes; it is excluded from the sequence altogether, so
/// the result holds between 12 and 15 axes (each axis of the first box
/// can be parallel to at most one axis of the second).
pub fn candidate_axes(obb1: &Obb, obb2: &Obb) -> ArrayVec<CandidateAxis, 15> {
    let mut axes = ArrayVec::new();

    for i in 0..DIM {
        axes.push(CandidateAxis {
            axis: obb1.axes[i],
            source: AxisSource::FaceA(i),
        });
    }

    for i in 0..DIM {
        axes.push(CandidateAxis {
            axis: obb2.axes[i],
            source: AxisSource::FaceB(i),
        });
    }

    for i in 0..DIM {
        for j in 0..DIM {
            let cross = obb1.axes[i].cross(&obb2.axes[j]);

            if cross.norm_squared() > DEFAULT_TOLERANCE {
                axes.push(CandidateAxis {
                    axis: UnitVector::new_normalize(cross),
                    source: AxisSource::EdgeCross(i, j),
                });
            }
        }
    }

    axes
}

/// Runs the Separating Axis Theorem over every candidate axis of the pair.
///
/// Returns `None` as soon as one axis yields disjoint projection intervals
/// (the boxes are certainly separated). Otherwise returns the candidate
/// axis realizing the smallest projection overlap, together with that
/// overlap (the penetration depth along the axis). Ties are broken in
/// favor of the first axis tested, so results on exact ties depend on the
/// enumeration order of [`candidate_axes`].
///
/// The returned axis direction is not guaranteed to point from `obb1`
/// toward `obb2`.
pub fn find_min_overlap_axis(obb1: &Obb, obb2: &Obb) -> Option<(CandidateAxis, Real)> {
    let mut best: Option<(CandidateAxis, Real)> = None;

    for candidate in candidate_axes(obb1, obb2) {
        let (min1, max1) = project_onto_axis(obb1, &candidate.axis);
        let (min2, max2) = project_onto_axis(obb2, &candidate.axis);

        if max1 < min2 || max2 < min1 {
            // Separating axis found.
            return None;
        }

        let overlap = max1.min(max2) - min1.max(min2);

        match best {
            Some((_, smallest)) if overlap >= smallest => {}
            _ => best = Some((candidate, overlap)),
        }
    }

    best
}
