/*!
obb3d
========

**obb3d** is a 3-dimensional collision-detection library for oriented
bounding boxes (OBBs), written with the rust programming language.

It answers a single narrow-phase question: do two arbitrarily oriented
boxes intersect, and if so along which axis, how deep, and roughly where?
The test is the Separating Axis Theorem over the 15 candidate axes of a
box pair; on overlap a contact point is estimated by either a
penetrating-vertex search or a closest-edge-pair search, depending on
which axis realized the minimal penetration.

# Example

```rust
use obb3d::na::{Point3, Vector3};
use obb3d::query::contact_obb_obb;
use obb3d::shape::Obb;

let a = Obb::axis_aligned(Point3::origin(), Vector3::new(1.0, 1.0, 1.0));
let b = Obb::axis_aligned(Point3::new(1.5, 0.0, 0.0), Vector3::new(1.0, 1.0, 1.0));

let contact = contact_obb_obb(&a, &b).expect("the boxes overlap");
assert!(contact.depth > 0.0);
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)]

#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod query;
pub mod shape;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Isometry3, Matrix4, Point3, Translation3, UnitVector3, Vector3};

    /// The scalar type used throughout this crate.
    pub use f32 as Real;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The tolerance applied to squared lengths when deciding that a
    /// vector or segment is degenerate.
    pub const DEFAULT_TOLERANCE: Real = 1.0e-6;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The affine transformation matrix type.
    pub use Matrix4 as Matrix;

    /// The isometry (rotation + translation) type.
    pub use Isometry3 as Isometry;
}
