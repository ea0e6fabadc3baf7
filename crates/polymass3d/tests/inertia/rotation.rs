use polymass3d::mass_properties::{InertiaTensor, MassPropertiesError, ORIENTATION_NORM_TOLERANCE};
use polymass3d::math::{Orientation, Real, Rotation, Vector};
use polymass3d::transformation::to_polyhedral_mesh;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn asymmetric_body() -> InertiaTensor {
    let mesh = to_polyhedral_mesh::cone(1.0, 0.5, 24);
    let mut inertia = InertiaTensor::new();
    let _ = inertia
        .set_body(&mesh, Vector::new(1.0, 1.5, 0.7), 2.0)
        .unwrap();
    inertia
}

fn random_rotation(rng: &mut StdRng) -> Rotation {
    let pi = core::f64::consts::PI as Real;
    Rotation::from_euler_angles(
        rng.gen_range(-pi..pi),
        rng.gen_range(-pi..pi),
        rng.gen_range(-pi..pi),
    )
}

#[test]
fn rotate_by_identity() {
    let mut inertia = asymmetric_body();
    let spatial = inertia.rotate(&Orientation::identity()).unwrap();
    assert_relative_eq!(spatial, *inertia.body_inertia_tensor(), epsilon = 1.0e-6);
}

#[test]
fn rotation_round_trip() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut inertia = asymmetric_body();
    let body = *inertia.body_inertia_tensor();

    for _ in 0..20 {
        let rot = random_rotation(&mut rng);
        let spatial = inertia.rotate(rot.quaternion()).unwrap();
        let r = rot.to_rotation_matrix().into_inner();

        // Undoing the rotation of the spatial tensor gives back the body tensor.
        assert_relative_eq!(r.transpose() * spatial * r, body, epsilon = 1.0e-4);
        assert_relative_eq!(spatial.trace(), body.trace(), max_relative = 1.0e-4);
        assert_relative_eq!(spatial, spatial.transpose(), epsilon = 1.0e-5);

        // Both quaternions of the same rotation give the same tensor.
        let negated = inertia.rotate(&-*rot.quaternion()).unwrap();
        assert_relative_eq!(negated, spatial, epsilon = 1.0e-5);

        // Rotations are never accumulated.
        assert_eq!(*inertia.body_inertia_tensor(), body);
    }

    let _ = inertia.rotate(&Orientation::identity()).unwrap();
    assert_relative_eq!(*inertia.spatial_inertia_tensor(), body, epsilon = 1.0e-6);
}

#[test]
fn principal_moments_are_rotation_invariant() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut inertia = asymmetric_body();
    let mut expected: Vec<Real> = inertia
        .body_inertia_tensor()
        .symmetric_eigenvalues()
        .iter()
        .copied()
        .collect();
    expected.sort_by(|a, b| a.total_cmp(b));

    for _ in 0..10 {
        let spatial = inertia.rotate_unit(&random_rotation(&mut rng));
        let mut moments: Vec<Real> = spatial.symmetric_eigenvalues().iter().copied().collect();
        moments.sort_by(|a, b| a.total_cmp(b));

        for (m, e) in moments.iter().zip(expected.iter()) {
            assert!(*m >= 0.0);
            assert_relative_eq!(*m, *e, max_relative = 1.0e-3);
        }
    }
}

#[test]
fn orientation_tolerance() {
    let mut inertia = asymmetric_body();
    let rot = Rotation::from_euler_angles(0.4, -0.3, 1.2);
    let expected = inertia.rotate_unit(&rot);

    let within = rot.into_inner() * (1.0 + ORIENTATION_NORM_TOLERANCE / 2.0);
    assert_relative_eq!(inertia.rotate(&within).unwrap(), expected, epsilon = 1.0e-4);

    let beyond = rot.into_inner() * (1.0 + ORIENTATION_NORM_TOLERANCE * 10.0);
    assert!(matches!(
        inertia.rotate(&beyond),
        Err(MassPropertiesError::InvalidOrientation(norm)) if norm > 1.0
    ));
    assert!(matches!(
        inertia.rotate(&Orientation::new(0.0, 0.0, 0.0, 0.0)),
        Err(MassPropertiesError::InvalidOrientation(_))
    ));
    assert_relative_eq!(*inertia.spatial_inertia_tensor(), expected, epsilon = 1.0e-4);
}
