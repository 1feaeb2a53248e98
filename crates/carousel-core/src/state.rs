//! Navigation state shared by every input handler and the frame loop.
//!
//! The store owns the two pieces of mutable UI state (current index and item
//! count) and only exposes clamped mutations, so the index is always a valid
//! item. A `revision` counter lets the frame loop detect changes without
//! diffing the whole state.

use glam::{Mat4, Vec3};

use crate::constants::{
    CAMERA_EYE, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, DEFAULT_ITEM_COUNT, MIN_ITEM_COUNT,
};

/// A discrete navigation request produced by keyboard, wheel, touch or click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Advance,
    Retreat,
    JumpTo(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    count: usize,
    revision: u64,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(DEFAULT_ITEM_COUNT)
    }
}

impl Carousel {
    pub fn new(count: usize) -> Self {
        Self {
            index: 0,
            count: count.max(MIN_ITEM_COUNT),
            revision: 0,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Bumped on every mutation that actually changed the index or count.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn last_index(&self) -> usize {
        self.count - 1
    }

    pub fn advance(&mut self) {
        let next = (self.index + 1).min(self.last_index());
        self.set_index(next);
    }

    pub fn retreat(&mut self) {
        let next = self.index.saturating_sub(1);
        self.set_index(next);
    }

    pub fn jump_to(&mut self, index: usize) {
        let next = index.min(self.last_index());
        self.set_index(next);
    }

    /// Change the number of items; the index is pulled back inside the new range.
    pub fn set_count(&mut self, count: usize) {
        let count = count.max(MIN_ITEM_COUNT);
        if count == self.count {
            return;
        }
        self.count = count;
        self.index = self.index.min(self.last_index());
        self.revision += 1;
        log::debug!("[nav] count={} index={}", self.count, self.index);
    }

    pub fn apply(&mut self, command: NavCommand) {
        match command {
            NavCommand::Advance => self.advance(),
            NavCommand::Retreat => self.retreat(),
            NavCommand::JumpTo(i) => self.jump_to(i),
        }
    }

    fn set_index(&mut self, index: usize) {
        if index == self.index {
            return;
        }
        self.index = index;
        self.revision += 1;
        log::debug!("[nav] index={} count={}", self.index, self.count);
    }
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The fixed scene camera for a viewport of the given aspect ratio.
    pub fn scene(aspect: f32) -> Self {
        Self {
            eye: CAMERA_EYE,
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray through a point given in normalized device coordinates.
    pub fn ray_through_ndc(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let inv = self.view_proj().inverse();
        let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
        let dir = (far - self.eye).normalize();
        (self.eye, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_op_mutations_keep_revision() {
        let mut c = Carousel::new(3);
        c.retreat();
        assert_eq!(c.revision(), 0);
        c.jump_to(2);
        assert_eq!(c.revision(), 1);
        c.advance();
        assert_eq!(c.revision(), 1);
        c.set_count(3);
        assert_eq!(c.revision(), 1);
    }

    #[test]
    fn zero_count_is_treated_as_one() {
        let mut c = Carousel::new(0);
        assert_eq!(c.count(), 1);
        c.advance();
        assert_eq!(c.index(), 0);
        c.set_count(0);
        assert_eq!(c.count(), 1);
    }

    #[test]
    fn centre_ray_points_down_negative_z() {
        let cam = Camera::scene(16.0 / 9.0);
        let (origin, dir) = cam.ray_through_ndc(0.0, 0.0);
        assert_eq!(origin, CAMERA_EYE);
        assert!((dir - Vec3::NEG_Z).length() < 1e-4);
    }
}
