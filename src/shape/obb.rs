//! Definition of the oriented bounding box shape.

use crate::math::{Isometry, Matrix, Point, Real, UnitVector, Vector, DIM};
use crate::shape::Segment;

/// A rectangular solid with an arbitrary orientation in 3D space.
///
/// An `Obb` is described in world space by its center, its three local
/// axes, and its half-extent along each of those axes. The axes must form
/// an orthonormal frame; this invariant is the caller's responsibility
/// and is never checked by the queries consuming the box.
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Obb {
    /// The center of the box.
    pub center: Point<Real>,
    /// The half-extents of the box along each of its local axes. Each
    /// half-extent must be non-negative.
    pub half_extents: Vector<Real>,
    /// The local axes of the box, a mutually orthogonal unit frame.
    pub axes: [UnitVector<Real>; 3],
}

// NOTE: format of the vertex and edge indices:
//
// Vertex `vid`: the k-th bit of `vid` is set to 1 iff. the vertex lies on
// the negative side of the box along `axes[k]` (so vertex 0 is the
// +++ corner).
// Edge: the 12 edges are emitted 4 per axis (axis 0 first). The edge of
// axis `k` starting at vertex `vid` (bit `k` clear) joins `vid` and
// `vid | (1 << k)`, so its endpoints differ in exactly that sign bit.
impl Obb {
    /// Creates a new oriented box from its center, half-extents and local
    /// frame. The axes must be mutually orthogonal unit vectors.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>, axes: [UnitVector<Real>; 3]) -> Obb {
        Obb {
            center,
            half_extents,
            axes,
        }
    }

    /// Creates a box aligned with the world coordinate axes.
    #[inline]
    pub fn axis_aligned(center: Point<Real>, half_extents: Vector<Real>) -> Obb {
        Obb::new(
            center,
            half_extents,
            [Vector::x_axis(), Vector::y_axis(), Vector::z_axis()],
        )
    }

    /// Creates the box obtained by placing a box of the given half-extents,
    /// initially centered at the origin and axis-aligned, at the isometry
    /// `pos`.
    pub fn from_isometry(pos: &Isometry<Real>, half_extents: Vector<Real>) -> Obb {
        let rot = pos.rotation;
        Obb::new(
            Point::from(pos.translation.vector),
            half_extents,
            [
                rot * Vector::x_axis(),
                rot * Vector::y_axis(),
                rot * Vector::z_axis(),
            ],
        )
    }

    /// Applies an affine transformation to this box in-place.
    ///
    /// The center is transformed as a position and each axis as a
    /// direction, re-normalized afterwards. `m` must not contain shear or
    /// non-uniform scale, otherwise the axes lose their orthogonality;
    /// this contract is not verified.
    pub fn transform(&mut self, m: &Matrix<Real>) {
        self.center = m.transform_point(&self.center);

        for axis in &mut self.axes {
            *axis = UnitVector::new_normalize(m.transform_vector(axis));
        }
    }

    /// Returns the box obtained by applying `m` to `self`.
    ///
    /// See [`Obb::transform`] for the contract on `m`.
    #[must_use]
    pub fn transformed(&self, m: &Matrix<Real>) -> Obb {
        let mut res = *self;
        res.transform(m);
        res
    }

    /// The 8 corners of this box, in the fixed vertex-index order
    /// described above.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let half_axes = [
            *self.axes[0] * self.half_extents.x,
            *self.axes[1] * self.half_extents.y,
            *self.axes[2] * self.half_extents.z,
        ];

        let mut vtx = [self.center; 8];

        for (vid, vtx) in vtx.iter_mut().enumerate() {
            for (k, half_axis) in half_axes.iter().enumerate() {
                if vid & (1 << k) != 0 {
                    *vtx -= *half_axis;
                } else {
                    *vtx += *half_axis;
                }
            }
        }

        vtx
    }

    /// The 12 edges of this box, 4 per local axis, each joining two
    /// vertices differing in exactly one sign bit.
    pub fn edges(&self) -> [Segment; 12] {
        let vtx = self.vertices();
        let mut edges = [Segment::new(vtx[0], vtx[0]); 12];
        let mut curr = 0;

        for k in 0..DIM {
            for vid in 0..8 {
                if vid & (1 << k) == 0 {
                    edges[curr] = Segment::new(vtx[vid], vtx[vid | (1 << k)]);
                    curr += 1;
                }
            }
        }

        edges
    }
}

#[cfg(test)]
mod test {
    use super::Obb;
    use crate::math::{Matrix, Point, Vector};

    #[test]
    fn edges_pair_vertices_differing_in_one_axis_sign() {
        let obb = Obb::axis_aligned(Point::new(1.0, 2.0, 3.0), Vector::new(1.0, 2.0, 0.5));

        for (eid, edge) in obb.edges().iter().enumerate() {
            let dir = edge.scaled_direction();
            let expected_len = 2.0 * obb.half_extents[eid / 4];
            assert_relative_eq!(edge.length(), expected_len);

            // The edge must be parallel to the axis of its group.
            let axis = obb.axes[eid / 4];
            assert_relative_eq!(dir.dot(&axis).abs(), expected_len, epsilon = 1.0e-5);
        }
    }

    #[test]
    fn transform_preserves_the_frame_under_rigid_motion() {
        let mut obb = Obb::axis_aligned(Point::origin(), Vector::new(1.0, 1.0, 1.0));
        let m = Matrix::new_rotation(Vector::new(0.3, -1.2, 0.7))
            .append_translation(&Vector::new(5.0, -2.0, 0.25));
        obb.transform(&m);

        for i in 0..3 {
            assert_relative_eq!(obb.axes[i].norm(), 1.0, epsilon = 1.0e-5);
            assert_relative_eq!(obb.axes[i].dot(&obb.axes[(i + 1) % 3]), 0.0, epsilon = 1.0e-5);
        }
    }
}
