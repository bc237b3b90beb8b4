use glam::Vec3;
use orbit_core::transform::{rotate_point, rotate_translate, Rotation};
use std::f32::consts::FRAC_PI_2;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn zero_rotation_is_identity() {
    let p = Vec3::new(1.5, -2.0, 3.25);
    assert_eq!(rotate_point(p, Rotation::default()), p);
}

#[test]
fn quarter_turns_about_each_axis() {
    let half_pi = FRAC_PI_2;
    // X: y goes to z
    assert!(close(
        rotate_point(Vec3::Y, Rotation::new(half_pi, 0.0, 0.0)),
        Vec3::Z
    ));
    // Y: z goes to x
    assert!(close(
        rotate_point(Vec3::Z, Rotation::new(0.0, half_pi, 0.0)),
        Vec3::X
    ));
    // Z: x goes to y
    assert!(close(
        rotate_point(Vec3::X, Rotation::new(0.0, 0.0, half_pi)),
        Vec3::Y
    ));
}

#[test]
fn axes_are_applied_x_then_y_then_z() {
    let r = Rotation::new(FRAC_PI_2, FRAC_PI_2, 0.0);
    // X takes +Y to +Z, then Y takes +Z to +X.
    assert!(close(rotate_point(Vec3::Y, r), Vec3::X));
}

#[test]
fn rotation_preserves_length() {
    let r = Rotation::new(0.3, -1.2, 2.7);
    for p in [Vec3::new(1.0, 2.0, 3.0), Vec3::new(-120.0, 0.0, 5.0)] {
        assert!((rotate_point(p, r).length() - p.length()).abs() < 1e-3);
    }
}

#[test]
fn same_inputs_give_bit_identical_outputs() {
    let r = Rotation::new(0.123, 4.56, -7.89);
    let p = Vec3::new(17.0, -3.0, 42.0);
    let a = rotate_point(p, r);
    let b = rotate_point(p, r);
    assert_eq!(a.x.to_bits(), b.x.to_bits());
    assert_eq!(a.y.to_bits(), b.y.to_bits());
    assert_eq!(a.z.to_bits(), b.z.to_bits());
}

#[test]
fn rotate_translate_offsets_by_center_and_reuses_buffer() {
    let points = [Vec3::X, Vec3::Y];
    let center = Vec3::new(10.0, 20.0, 30.0);
    let mut out = vec![Vec3::ZERO; 8];
    rotate_translate(&points, Rotation::default(), center, &mut out);
    assert_eq!(out, vec![center + Vec3::X, center + Vec3::Y]);
}

#[test]
fn accumulated_angles_are_not_wrapped() {
    let mut r = Rotation::default();
    for _ in 0..1000 {
        r.accumulate(0.01, 0.02, 0.03);
    }
    assert!(r.z > std::f32::consts::TAU);
}
