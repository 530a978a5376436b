use crate::query::sat;
use crate::shape::Obb;

/// Intersection test between two oriented boxes.
///
/// Same verdict as [`contact_obb_obb`](crate::query::contact_obb_obb)
/// without computing the penetration depth or the contact point; the test
/// stops at the first separating axis found.
#[inline]
pub fn intersection_test_obb_obb(obb1: &Obb, obb2: &Obb) -> bool {
    for candidate in sat::candidate_axes(obb1, obb2) {
        let (min1, max1) = sat::project_onto_axis(obb1, &candidate.axis);
        let (min2, max2) = sat::project_onto_axis(obb2, &candidate.axis);

        if max1 < min2 || max2 < min1 {
            return false;
        }
    }

    true
}
