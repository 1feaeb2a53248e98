use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::PI;

use crate::constants::{
    CENTER_SCALE, NARROW_BREAKPOINT_PX, ROTATION_PER_OFFSET, SCALE_FALLOFF, SPACING_NARROW,
    SPACING_WIDE,
};

/// Target placement of one TV relative to the focused item.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemTransform {
    pub position: Vec3,
    pub scale: f32,
    /// Euler angles (XYZ); the carousel always uses the same angle on every axis.
    pub rotation: Vec3,
}

impl ItemTransform {
    pub fn offset(&self) -> f32 {
        self.position.x
    }

    /// Translation * rotation * uniform scale, as a scene-graph group node would compose it.
    pub fn matrix(&self) -> Mat4 {
        let rot = Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        );
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), rot, self.position)
    }
}

/// Map an item index to its target transform for the current navigation index.
pub fn item_transform(item: usize, current: usize, spacing: f32) -> ItemTransform {
    let offset = (item as f32 - current as f32) * spacing;
    let scale = (CENTER_SCALE - offset.abs() * SCALE_FALLOFF).max(0.0);
    let rot = PI * offset * ROTATION_PER_OFFSET;
    ItemTransform {
        position: Vec3::new(offset, 0.0, 0.0),
        scale,
        rotation: Vec3::splat(rot),
    }
}

/// Targets for every item in `0..count`.
pub fn layout_row(count: usize, current: usize, spacing: f32) -> Vec<ItemTransform> {
    (0..count)
        .map(|i| item_transform(i, current, spacing))
        .collect()
}

#[inline]
pub fn is_narrow_viewport(width_px: f64) -> bool {
    width_px < NARROW_BREAKPOINT_PX
}

#[inline]
pub fn spacing_for_viewport(width_px: f64) -> f32 {
    if is_narrow_viewport(width_px) {
        SPACING_NARROW
    } else {
        SPACING_WIDE
    }
}

/// Navigation hint copy shown in the page header.
pub fn hint_for_viewport(width_px: f64) -> &'static str {
    if is_narrow_viewport(width_px) {
        "Swipe left or right to browse, tap a TV to jump to it"
    } else {
        "Use the arrow keys or scroll to browse, click a TV to jump to it"
    }
}
