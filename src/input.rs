use glam::{Vec2, Vec3};
use web_sys as web;

/// Press in progress on the canvas. `travel` accumulates CSS px so a slightly
/// shaky click still counts as a click.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub pan: bool,
    pub last: Vec2,
    pub travel: f32,
}

impl DragState {
    pub fn begin(&mut self, at: Vec2, pan: bool) {
        self.active = true;
        self.pan = pan;
        self.last = at;
        self.travel = 0.0;
    }

    /// Record a move; returns the delta since the previous position.
    pub fn advance(&mut self, at: Vec2) -> Vec2 {
        let delta = at - self.last;
        self.last = at;
        self.travel += delta.length();
        delta
    }

    /// End the press; true when it never moved far enough to be a drag.
    pub fn finish(&mut self, max_click_travel: f32) -> bool {
        let was_click = self.active && self.travel <= max_click_travel;
        self.active = false;
        was_click
    }
}

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

/// Closest sphere hit along the ray, if any.
pub fn pick_nearest<K: Copy>(
    spheres: &[(K, Vec3, f32)],
    ray_origin: Vec3,
    ray_dir: Vec3,
) -> Option<K> {
    let mut best = None::<(K, f32)>;
    for &(key, center, radius) in spheres {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((key, t)),
            }
        }
    }
    best.map(|(k, _)| k)
}

// ---------------- Pointer helpers ----------------
/// Pointer position in the canvas backing store (device px).
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}

/// Pointer position relative to the canvas' CSS box.
#[inline]
pub fn pointer_css_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
