//! The retro TV, described as named box primitives.
//!
//! Every item reuses the same part geometry and offsets; only the material
//! colour changes with the item index.

use glam::{Mat4, Vec3};

use crate::color::{hsl_to_rgb, srgb_to_linear_vec3};
use crate::constants::{HUE_STEP_DEG, MODEL_INNER_SCALE};
use crate::layout::ItemTransform;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TvPart {
    Body,
    Screen,
    Dial01,
    Dial02,
    Dial03,
    Knob01,
    Knob02,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartShade {
    Solid,
    Screen,
}

impl TvPart {
    pub const ALL: [TvPart; 7] = [
        TvPart::Body,
        TvPart::Screen,
        TvPart::Dial01,
        TvPart::Dial02,
        TvPart::Dial03,
        TvPart::Knob01,
        TvPart::Knob02,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TvPart::Body => "retro_tv_body",
            TvPart::Screen => "screen",
            TvPart::Dial01 => "dial_01",
            TvPart::Dial02 => "dial_02",
            TvPart::Dial03 => "dial_03",
            TvPart::Knob01 => "knob_01",
            TvPart::Knob02 => "knob_02",
        }
    }

    /// Centre of the part in model space.
    pub fn offset(self) -> Vec3 {
        match self {
            TvPart::Body => Vec3::ZERO,
            TvPart::Screen => Vec3::new(-0.14, 0.04, 0.36),
            TvPart::Dial01 => Vec3::new(0.36, 0.2, 0.36),
            TvPart::Dial02 => Vec3::new(0.36, 0.04, 0.36),
            TvPart::Dial03 => Vec3::new(0.36, -0.12, 0.36),
            TvPart::Knob01 => Vec3::new(-0.3, -0.44, 0.1),
            TvPart::Knob02 => Vec3::new(0.3, -0.44, 0.1),
        }
    }

    /// Full box size of the part in model space.
    pub fn extent(self) -> Vec3 {
        match self {
            TvPart::Body => Vec3::new(1.0, 0.76, 0.7),
            TvPart::Screen => Vec3::new(0.62, 0.5, 0.04),
            TvPart::Dial01 | TvPart::Dial02 | TvPart::Dial03 => Vec3::new(0.1, 0.1, 0.06),
            TvPart::Knob01 | TvPart::Knob02 => Vec3::new(0.12, 0.12, 0.12),
        }
    }

    pub fn shade(self) -> PartShade {
        match self {
            TvPart::Screen => PartShade::Screen,
            _ => PartShade::Solid,
        }
    }

    /// Model-space matrix mapping the unit cube onto this part.
    pub fn local_matrix(self) -> Mat4 {
        Mat4::from_translation(self.offset()) * Mat4::from_scale(self.extent())
    }
}

/// Base and emissive colour of a part, sRGB in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub emissive: Vec3,
}

pub fn item_hue(item: usize) -> f32 {
    (item as i64 * HUE_STEP_DEG as i64) as f32
}

pub fn material_for(item: usize, shade: PartShade) -> Material {
    let hue = item_hue(item);
    match shade {
        PartShade::Solid => Material {
            color: hsl_to_rgb(hue, 1.0, 0.5),
            emissive: Vec3::ZERO,
        },
        PartShade::Screen => Material {
            color: hsl_to_rgb(hue, 1.0, 0.8),
            emissive: hsl_to_rgb(hue, 1.0, 0.2),
        },
    }
}

/// Per-instance data uploaded to the GPU: one unit cube per TV part.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PartInstance {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub emissive: [f32; 4],
}

/// World matrices of every part for an item placed at `transform`.
pub fn part_matrices(transform: &ItemTransform) -> [(TvPart, Mat4); 7] {
    let group = transform.matrix() * Mat4::from_scale(Vec3::splat(MODEL_INNER_SCALE));
    TvPart::ALL.map(|p| (p, group * p.local_matrix()))
}

/// Flatten every visible item into GPU instances. Items shrunk to zero are skipped.
pub fn build_instances(transforms: &[ItemTransform]) -> Vec<PartInstance> {
    let mut out = Vec::with_capacity(transforms.len() * TvPart::ALL.len());
    for (i, t) in transforms.iter().enumerate() {
        if t.scale <= 0.0 {
            continue;
        }
        for (part, m) in part_matrices(t) {
            let mat = material_for(i, part.shade());
            out.push(PartInstance {
                model: m.to_cols_array_2d(),
                color: srgb_to_linear_vec3(mat.color).extend(1.0).to_array(),
                emissive: srgb_to_linear_vec3(mat.emissive).extend(0.0).to_array(),
            });
        }
    }
    out
}
