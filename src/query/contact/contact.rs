use crate::math::{Point, Real, UnitVector};

/// Geometric description of a contact between two oriented boxes.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct ObbContact {
    /// The separating-resolving direction: the candidate axis along which
    /// the projections of the two boxes overlap the least.
    ///
    /// This direction is **not** guaranteed to point from the first box
    /// toward the second one. Callers needing a consistently oriented
    /// normal must canonicalize its sign themselves, e.g. using
    /// `normal.dot(&(obb2.center - obb1.center))`.
    pub normal: UnitVector<Real>,

    /// The penetration depth along `normal`: the minimal translation
    /// distance along that axis needed to separate the boxes. Always
    /// non-negative.
    pub depth: Real,

    /// The classification of the contact, carrying the estimated contact
    /// point.
    pub kind: ContactKind,
}

/// Classification of an [`ObbContact`], decided by the group the
/// minimal-penetration axis came from.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum ContactKind {
    /// The minimal-penetration axis was a face normal of one of the boxes.
    VertexFace {
        /// The estimated contact location: the penetrating vertex closest
        /// to the face it penetrates, in world space.
        point: Point<Real>,
    },
    /// The minimal-penetration axis came from the cross product of two
    /// box axes.
    EdgeEdge {
        /// The estimated contact location: a closest point of the closest
        /// edge pair, in world space.
        point: Point<Real>,
    },
}

impl ObbContact {
    /// Creates a new contact.
    #[inline]
    pub fn new(normal: UnitVector<Real>, depth: Real, kind: ContactKind) -> Self {
        ObbContact {
            normal,
            depth,
            kind,
        }
    }

    /// The estimated contact location, regardless of the contact
    /// classification.
    #[inline]
    pub fn point(&self) -> Point<Real> {
        match self.kind {
            ContactKind::VertexFace { point } | ContactKind::EdgeEdge { point } => point,
        }
    }
}
