//! Computation of a contact between two penetrating shapes.

pub use self::contact::{ContactKind, ObbContact};
pub use self::contact_obb_obb::contact_obb_obb;

mod contact;
mod contact_obb_obb;
