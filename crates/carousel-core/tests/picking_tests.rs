// Host-side tests for ray picking.

use carousel_core::{layout_row, pick_item, ray_sphere, Camera, SPACING_WIDE};
use glam::Vec3;

#[test]
fn ray_sphere_hit_and_miss() {
    let origin = Vec3::ZERO;
    let center = Vec3::new(0.0, 0.0, 5.0);
    let hit = ray_sphere(origin, Vec3::Z, center, 2.0);
    assert!((hit.unwrap() - 3.0).abs() < 1e-5);
    assert!(ray_sphere(origin, Vec3::X, center, 2.0).is_none());
}

#[test]
fn centre_ray_picks_focused_item() {
    let cam = Camera::scene(16.0 / 9.0);
    let row = layout_row(5, 2, SPACING_WIDE);
    let (o, d) = cam.ray_through_ndc(0.0, 0.0);
    assert_eq!(pick_item(o, d, &row), Some(2));
}

#[test]
fn ray_towards_neighbour_picks_it() {
    let cam = Camera::scene(1.0);
    let row = layout_row(5, 2, SPACING_WIDE);
    let o = cam.eye;
    let d = (Vec3::new(SPACING_WIDE, 0.0, 0.0) - o).normalize();
    assert_eq!(pick_item(o, d, &row), Some(3));
}

#[test]
fn zero_scale_items_are_never_picked() {
    let cam = Camera::scene(1.0);
    // Item 0 is far away from focus and shrunk to nothing
    let row = layout_row(10, 9, SPACING_WIDE);
    assert_eq!(row[0].scale, 0.0);
    let d = (row[0].position - cam.eye).normalize();
    assert_eq!(pick_item(cam.eye, d, &row), None);
}
