use glam::{Mat4, Vec2, Vec3, Vec4};

#[inline]
/// Compute a world-space ray from screen-space canvas coordinates.
///
/// - `view_proj`: combined projection * view of the frame's camera
/// - `eye`: camera position, used as the ray origin
/// - `width`, `height`: canvas backing store size in pixels
/// - `sx`, `sy`: pixel coordinates in the canvas' backing store space
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    view_proj: Mat4,
    eye: Vec3,
    width: f32,
    height: f32,
    sx: f32,
    sy: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    let inv = view_proj.inverse();
    let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
    let p1: Vec3 = p_far.truncate() / p_far.w;
    let rd = (p1 - eye).normalize_or_zero();
    (eye, rd)
}

/// Project a world point to canvas pixels; `None` when behind the camera.
pub fn world_to_screen(view_proj: Mat4, width: f32, height: f32, world: Vec3) -> Option<Vec2> {
    let clip = view_proj * world.extend(1.0);
    if clip.w <= 1e-5 {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * width,
        (1.0 - ndc.y) * 0.5 * height,
    ))
}
