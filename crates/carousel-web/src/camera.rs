use carousel_core::Camera;
use glam::Vec3;
use web_sys as web;

#[inline]
/// Compute a world-space ray from a client-space (CSS pixel) position over the canvas.
///
/// Returns `(ray_origin, ray_direction)` in world space, or `None` while the
/// canvas has no layout size.
pub fn client_to_world_ray(
    canvas: &web::HtmlCanvasElement,
    client_x: f32,
    client_y: f32,
) -> Option<(Vec3, Vec3)> {
    let rect = canvas.get_bounding_client_rect();
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return None;
    }
    let x_css = client_x - rect.left() as f32;
    let y_css = client_y - rect.top() as f32;
    let ndc_x = (2.0 * x_css / w) - 1.0;
    let ndc_y = 1.0 - (2.0 * y_css / h);
    Some(Camera::scene(w / h).ray_through_ndc(ndc_x, ndc_y))
}
