use obb3d::math::Real;
use obb3d::na::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};
use obb3d::query::{contact_obb_obb, intersection_test_obb_obb, ContactKind};
use obb3d::shape::Obb;
use oorandom::Rand32;

fn gen_range(rng: &mut Rand32, lo: Real, hi: Real) -> Real {
    lo + (hi - lo) * rng.rand_float()
}

fn gen_obb(rng: &mut Rand32) -> Obb {
    let translation = Translation3::new(
        gen_range(rng, -2.5, 2.5),
        gen_range(rng, -2.5, 2.5),
        gen_range(rng, -2.5, 2.5),
    );
    let rotation = UnitQuaternion::from_euler_angles(
        gen_range(rng, 0.0, std::f32::consts::TAU),
        gen_range(rng, 0.0, std::f32::consts::TAU),
        gen_range(rng, 0.0, std::f32::consts::TAU),
    );
    let half_extents = Vector3::new(
        gen_range(rng, 0.2, 1.5),
        gen_range(rng, 0.2, 1.5),
        gen_range(rng, 0.2, 1.5),
    );

    Obb::from_isometry(&Isometry3::from_parts(translation, rotation), half_extents)
}

// The axis-aligned bounds of the 16 vertices of both boxes, inflated by a
// small margin. Every contact point estimate must fall inside: vertex-face
// points are vertices, edge-edge points lie on an edge of one of the boxes.
fn union_bounds(obb1: &Obb, obb2: &Obb) -> (Point3<Real>, Point3<Real>) {
    let mut mins = Point3::new(Real::MAX, Real::MAX, Real::MAX);
    let mut maxs = Point3::new(-Real::MAX, -Real::MAX, -Real::MAX);

    for vtx in obb1.vertices().iter().chain(obb2.vertices().iter()) {
        mins = mins.inf(vtx);
        maxs = maxs.sup(vtx);
    }

    let margin = Vector3::repeat(1.0e-3);
    (mins - margin, maxs + margin)
}

fn contains(mins: &Point3<Real>, maxs: &Point3<Real>, pt: &Point3<Real>) -> bool {
    (0..3).all(|i| pt[i] >= mins[i] && pt[i] <= maxs[i])
}

#[test]
fn random_box_pairs_uphold_the_query_invariants() {
    let mut rng = Rand32::new(42);

    for _ in 0..200 {
        let obb1 = gen_obb(&mut rng);
        let obb2 = gen_obb(&mut rng);

        let contact12 = contact_obb_obb(&obb1, &obb2);
        let contact21 = contact_obb_obb(&obb2, &obb1);

        // The detection verdict is symmetric and agrees with the boolean
        // test, and the query is a pure function of its inputs.
        assert_eq!(contact12.is_some(), contact21.is_some());
        assert_eq!(contact12.is_some(), intersection_test_obb_obb(&obb1, &obb2));
        assert_eq!(contact12, contact_obb_obb(&obb1, &obb2));

        if let Some(contact) = contact12 {
            assert!(contact.depth >= 0.0);
            assert!((contact.normal.norm() - 1.0).abs() < 1.0e-5);

            let (mins, maxs) = union_bounds(&obb1, &obb2);
            assert!(contains(&mins, &maxs, &contact.point()));

            if let ContactKind::VertexFace { point } = contact.kind {
                // The reported point is a corner of one of the two boxes.
                let nearest = obb1
                    .vertices()
                    .iter()
                    .chain(obb2.vertices().iter())
                    .map(|vtx| (vtx - point).norm())
                    .fold(Real::MAX, Real::min);
                assert!(nearest < 1.0e-4);
            }
        }
    }
}
