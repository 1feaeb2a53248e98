use glam::Vec3;

use crate::constants::PICK_RADIUS_PER_SCALE;
use crate::layout::ItemTransform;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Index of the nearest item hit by the ray, using a bounding sphere that grows with item scale.
pub fn pick_item(ray_origin: Vec3, ray_dir: Vec3, transforms: &[ItemTransform]) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, t) in transforms.iter().enumerate() {
        if t.scale <= 0.0 {
            continue;
        }
        let radius = t.scale * PICK_RADIUS_PER_SCALE;
        if let Some(hit) = ray_sphere(ray_origin, ray_dir, t.position, radius) {
            match best {
                Some((_, bt)) if hit >= bt => {}
                _ => best = Some((i, hit)),
            }
        }
    }
    best.map(|(i, _)| i)
}
