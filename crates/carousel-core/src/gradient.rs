use crate::color::css_number;
use crate::constants::HUE_STEP_DEG;

/// Hue stops (degrees) of the two-layer page background.
///
/// `primary` drives the translucent vertical layer and wraps every 12 steps;
/// the horizontal layer uses `left`/`centre`/`right` without wrapping, so
/// those hues keep growing with the index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStops {
    pub primary: f32,
    pub left: f32,
    pub centre: f32,
    pub right: f32,
}

impl GradientStops {
    pub fn for_index(index: usize) -> Self {
        let i = index as i64;
        let step = HUE_STEP_DEG as i64;
        Self {
            primary: ((i * step) % 360) as f32,
            left: ((i - 2) * step) as f32,
            centre: (i * step) as f32,
            right: ((i + 2) * step) as f32,
        }
    }

    pub fn to_css(&self) -> String {
        let p = css_number(self.primary);
        let l = css_number(self.left);
        let c = css_number(self.centre);
        let r = css_number(self.right);
        format!(
            "linear-gradient(0deg, hsla({p}, 100%, 85%, 0.5) 0%, hsla({p}, 100%, 90%, 0.5) 50%, \
             hsla({p}, 100%, 85%, 0.5) 100%), linear-gradient(90deg, hsl({l}, 100%, 85%) 0%, \
             hsl({c}, 100%, 90%) 50%, hsl({r}, 100%, 85%) 100%)"
        )
    }
}

/// CSS background for a navigation index.
pub fn background_css(index: usize) -> String {
    GradientStops::for_index(index).to_css()
}
