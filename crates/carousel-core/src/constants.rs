use glam::Vec3;

// Shared layout/animation tuning constants used by the web frontend.

// Item count bounds (the count input hints at the same range)
pub const MIN_ITEM_COUNT: usize = 1;
pub const MAX_ITEM_COUNT: usize = 100;
pub const DEFAULT_ITEM_COUNT: usize = 10;

// Layout
pub const SPACING_WIDE: f32 = 3.0; // world units between neighbouring TVs
pub const SPACING_NARROW: f32 = 2.1; // used below the breakpoint
pub const NARROW_BREAKPOINT_PX: f64 = 768.0;

// Transform law: scale = max(CENTER_SCALE - |offset| * SCALE_FALLOFF, 0)
pub const CENTER_SCALE: f32 = 10.0;
pub const SCALE_FALLOFF: f32 = 1.5;
pub const ROTATION_PER_OFFSET: f32 = 0.1; // multiplied by PI * offset

// Model
pub const MODEL_INNER_SCALE: f32 = 0.3; // inner group scale wrapping the TV parts

// Colour
pub const HUE_STEP_DEG: i32 = 30;

// Timing
pub const TWEEN_DURATION_MS: u32 = 500;
pub const WHEEL_DEBOUNCE_MS: f64 = 50.0;

// Camera (matches a default perspective rig looking down -Z)
pub const CAMERA_EYE: Vec3 = Vec3::new(0.0, 0.0, 5.0);
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Lighting
pub const AMBIENT_INTENSITY: f32 = 0.5;
pub const KEY_LIGHT_POSITIONS: [[f32; 3]; 2] = [[2.0, 2.0, 5.0], [-2.0, 2.0, 5.0]];

// Picking: bounding-sphere radius per unit of item scale
pub const PICK_RADIUS_PER_SCALE: f32 = 0.16;
