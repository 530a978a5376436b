//! Boolean intersection tests.

pub use self::intersection_test_obb_obb::intersection_test_obb_obb;

mod intersection_test_obb_obb;
