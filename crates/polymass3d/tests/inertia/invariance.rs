use polymass3d::mass_properties::{InertiaTensor, MassPropertiesError, VolumeIntegrals};
use polymass3d::math::{Isometry, Real, Vector};
use polymass3d::shape::PolyhedralMesh;
use polymass3d::transformation::to_polyhedral_mesh;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn test_meshes() -> Vec<PolyhedralMesh> {
    let mut offset_cone = to_polyhedral_mesh::cone(0.8, 0.4, 20);
    offset_cone.transform_vertices(&Isometry::new(
        Vector::new(0.5, -1.0, 2.0),
        Vector::new(0.1, 0.2, 0.3),
    ));

    vec![
        to_polyhedral_mesh::cuboid(&Vector::new(0.5, 1.0, 2.0)),
        to_polyhedral_mesh::cylinder(1.0, 0.3, 16),
        to_polyhedral_mesh::ball(1.0, 20, 10),
        offset_cone,
    ]
}

fn shuffled(mesh: &PolyhedralMesh, rng: &mut StdRng) -> PolyhedralMesh {
    let mut indices = mesh.indices().to_vec();
    indices.shuffle(rng);

    // Cycling the vertices of a triangle keeps its winding.
    for idx in &mut indices {
        idx.rotate_left(rng.gen_range(0..3));
    }

    PolyhedralMesh::new(mesh.vertices().to_vec(), indices).unwrap()
}

#[test]
fn face_order_does_not_matter() {
    let mut rng = StdRng::seed_from_u64(0);
    let scale = Vector::new(1.0, 0.5, 2.0);

    for mesh in test_meshes() {
        let mut reference = InertiaTensor::new();
        let (com, mass) = reference.set_body(&mesh, scale, 3.0).unwrap();

        for _ in 0..5 {
            let mut inertia = InertiaTensor::new();
            let (com2, mass2) = inertia
                .set_body(&shuffled(&mesh, &mut rng), scale, 3.0)
                .unwrap();

            assert_relative_eq!(mass2, mass, max_relative = 1.0e-5);
            assert_relative_eq!(com2, com, epsilon = 1.0e-4);
            assert_relative_eq!(
                *inertia.body_inertia_tensor(),
                *reference.body_inertia_tensor(),
                epsilon = 1.0e-4,
                max_relative = 1.0e-4
            );
        }
    }
}

#[test]
fn inverted_winding_is_rejected() {
    for mut mesh in test_meshes() {
        let volume = VolumeIntegrals::of_mesh(&mesh, &Vector::repeat(1.0))
            .unwrap()
            .t0;
        mesh.reverse();

        let mut inertia = InertiaTensor::new();
        match inertia.set_body(&mesh, Vector::repeat(1.0), 1.0) {
            Err(MassPropertiesError::InvertedVolume(inverted)) => {
                assert_relative_eq!(inverted, -volume, max_relative = 1.0e-5)
            }
            other => panic!("expected an inverted volume, got {:?}", other),
        }
        assert_eq!(inertia, InertiaTensor::new());
    }
}

#[test]
fn uniform_scale_law() {
    let mut rng = StdRng::seed_from_u64(42);

    for mesh in test_meshes() {
        let mut reference = InertiaTensor::new();
        let (com, mass) = reference.set_body(&mesh, Vector::repeat(1.0), 1.0).unwrap();

        let s: Real = rng.gen_range(0.5..3.0);
        let mut scaled = InertiaTensor::new();
        let (scaled_com, scaled_mass) = scaled.set_body(&mesh, Vector::repeat(s), 1.0).unwrap();

        assert_relative_eq!(scaled_mass, mass * s.powi(3), max_relative = 1.0e-4);
        assert_relative_eq!(scaled_com, com * s, epsilon = 1.0e-3);
        assert_relative_eq!(
            *scaled.body_inertia_tensor(),
            *reference.body_inertia_tensor() * s.powi(5),
            epsilon = 1.0e-3,
            max_relative = 1.0e-3
        );
    }
}

#[test]
fn scaling_the_mesh_or_the_body_is_equivalent() {
    let scale = Vector::new(2.0, 0.5, 1.5);

    for mesh in test_meshes() {
        let mut by_body = InertiaTensor::new();
        let _ = by_body.set_body(&mesh, scale, 1.0).unwrap();

        let mut by_mesh = InertiaTensor::new();
        let _ = by_mesh
            .set_body(&mesh.clone().scaled(&scale), Vector::repeat(1.0), 1.0)
            .unwrap();

        assert_relative_eq!(by_body, by_mesh, epsilon = 1.0e-5);
    }
}
