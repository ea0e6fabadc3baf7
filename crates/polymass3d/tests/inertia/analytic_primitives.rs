use polymass3d::mass_properties::InertiaTensor;
use polymass3d::math::{Isometry, Matrix, Point, Real, Vector};
use polymass3d::transformation::to_polyhedral_mesh;

const PI: Real = core::f64::consts::PI as Real;

fn assert_diagonal(tensor: &Matrix, expected: Vector, max_relative: Real) {
    assert_relative_eq!(tensor.diagonal(), expected, max_relative = max_relative);

    let scale = expected.amax();
    for (i, j) in [(0, 1), (1, 2), (2, 0)] {
        assert!(tensor[(i, j)].abs() < 1.0e-3 * scale, "{}", tensor);
        assert_eq!(tensor[(i, j)], tensor[(j, i)]);
    }
}

#[test]
fn unit_cube() {
    let mesh = to_polyhedral_mesh::cuboid(&Vector::repeat(0.5));
    let mut inertia = InertiaTensor::new();
    let (com, mass) = inertia.set_body(&mesh, Vector::repeat(1.0), 1.0).unwrap();

    assert_relative_eq!(mass, 1.0, max_relative = 1.0e-6);
    assert_relative_eq!(com, Point::origin(), epsilon = 1.0e-6);
    assert_relative_eq!(
        *inertia.body_inertia_tensor(),
        Matrix::from_diagonal_element(1.0 / 6.0),
        epsilon = 1.0e-6
    );
}

#[test]
fn cuboid_with_random_pose() {
    let half_extents = Vector::new(0.3, 1.1, 0.7);
    let density = 2.5;
    let pos = Isometry::new(Vector::new(-4.0, 0.5, 2.0), Vector::new(0.2, 1.3, -0.4));
    let mut mesh = to_polyhedral_mesh::cuboid(&half_extents);
    mesh.transform_vertices(&pos);

    let mut inertia = InertiaTensor::new();
    let (com, mass) = inertia.set_body(&mesh, Vector::repeat(1.0), density).unwrap();

    let extents = half_extents * 2.0;
    let expected_mass = density * extents.x * extents.y * extents.z;
    let sq = extents.component_mul(&extents);
    let local = Matrix::from_diagonal(&Vector::new(sq.y + sq.z, sq.z + sq.x, sq.x + sq.y))
        * (expected_mass / 12.0);
    let r = pos.rotation.to_rotation_matrix().into_inner();

    assert_relative_eq!(mass, expected_mass, max_relative = 1.0e-4);
    assert_relative_eq!(com, Point::from(pos.translation.vector), epsilon = 1.0e-4);
    assert_relative_eq!(
        *inertia.body_inertia_tensor(),
        r * local * r.transpose(),
        epsilon = 1.0e-3
    );
}

#[test]
fn ball() {
    let radius = 1.5;
    let density = 2.0;
    let mesh = to_polyhedral_mesh::ball(radius, 64, 32);
    let mut inertia = InertiaTensor::new();
    let (com, mass) = inertia.set_body(&mesh, Vector::repeat(1.0), density).unwrap();

    let expected_mass = density * 4.0 / 3.0 * PI * radius * radius * radius;
    assert_relative_eq!(mass, expected_mass, max_relative = 1.0e-2);
    assert_relative_eq!(com, Point::origin(), epsilon = 1.0e-3);

    let moment = 2.0 / 5.0 * mass * radius * radius;
    assert_diagonal(inertia.body_inertia_tensor(), Vector::repeat(moment), 2.0e-2);
}

#[test]
fn cylinder() {
    let (half_height, radius) = (1.0, 0.5);
    let height = half_height * 2.0;
    let mesh = to_polyhedral_mesh::cylinder(half_height, radius, 64);
    let mut inertia = InertiaTensor::new();
    let (com, mass) = inertia.set_body(&mesh, Vector::repeat(1.0), 1.0).unwrap();

    assert_relative_eq!(mass, PI * radius * radius * height, max_relative = 1.0e-2);
    assert_relative_eq!(com, Point::origin(), epsilon = 1.0e-4);

    let ix = mass * (3.0 * radius * radius + height * height) / 12.0;
    let iy = mass * radius * radius / 2.0;
    assert_diagonal(inertia.body_inertia_tensor(), Vector::new(ix, iy, ix), 1.0e-2);
}

#[test]
fn cone() {
    let (half_height, radius) = (1.0, 0.5);
    let height = half_height * 2.0;
    let mesh = to_polyhedral_mesh::cone(half_height, radius, 64);
    let mut inertia = InertiaTensor::new();
    let (com, mass) = inertia.set_body(&mesh, Vector::repeat(1.0), 1.0).unwrap();

    assert_relative_eq!(mass, PI * radius * radius * height / 3.0, max_relative = 1.0e-2);
    // The center of mass is at a quarter of the height above the base.
    assert_relative_eq!(com, Point::new(0.0, -height / 4.0, 0.0), epsilon = 1.0e-4);

    let ix = 3.0 / 20.0 * mass * radius * radius + 3.0 / 80.0 * mass * height * height;
    let iy = 3.0 / 10.0 * mass * radius * radius;
    assert_diagonal(inertia.body_inertia_tensor(), Vector::new(ix, iy, ix), 1.0e-2);
}

#[test]
fn anisotropic_scale_of_a_ball_is_an_ellipsoid() {
    let semi_axes = Vector::new(1.0, 2.0, 3.0);
    let mesh = to_polyhedral_mesh::ball(1.0, 64, 32);
    let mut inertia = InertiaTensor::new();
    let (_, mass) = inertia.set_body(&mesh, semi_axes, 1.0).unwrap();

    let expected_mass = 4.0 / 3.0 * PI * semi_axes.x * semi_axes.y * semi_axes.z;
    assert_relative_eq!(mass, expected_mass, max_relative = 1.0e-2);

    let sq = semi_axes.component_mul(&semi_axes);
    let expected = Vector::new(sq.y + sq.z, sq.z + sq.x, sq.x + sq.y) * (mass / 5.0);
    assert_diagonal(inertia.body_inertia_tensor(), expected, 2.0e-2);
}
