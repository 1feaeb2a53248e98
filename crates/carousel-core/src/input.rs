//! Pure classification of raw browser input into navigation commands.

use glam::Vec2;

use crate::constants::{MAX_ITEM_COUNT, MIN_ITEM_COUNT};
use crate::error::CarouselError;
use crate::state::NavCommand;

/// How a finished touch gesture is turned into a direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SwipeMode {
    /// Only horizontal travel counts: finger moving left advances.
    #[default]
    Horizontal,
    /// The axis with the larger travel decides; moving right/down retreats.
    DominantAxis,
}

impl SwipeMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "h" => Some(SwipeMode::Horizontal),
            "dominant" | "dominant-axis" | "axis" => Some(SwipeMode::DominantAxis),
            _ => None,
        }
    }
}

#[inline]
pub fn command_for_key(key: &str) -> Option<NavCommand> {
    match key {
        "ArrowRight" => Some(NavCommand::Advance),
        "ArrowLeft" => Some(NavCommand::Retreat),
        _ => None,
    }
}

/// Vertical delta wins; horizontal delta only counts when there is no vertical motion.
#[inline]
pub fn wheel_command(delta_x: f64, delta_y: f64) -> Option<NavCommand> {
    let delta = if delta_y != 0.0 { delta_y } else { delta_x };
    if delta > 0.0 {
        Some(NavCommand::Advance)
    } else if delta < 0.0 {
        Some(NavCommand::Retreat)
    } else {
        None
    }
}

pub fn swipe_command(start: Vec2, end: Vec2, mode: SwipeMode) -> Option<NavCommand> {
    let delta = end - start;
    match mode {
        SwipeMode::Horizontal => {
            if end.x < start.x {
                Some(NavCommand::Advance)
            } else if end.x > start.x {
                Some(NavCommand::Retreat)
            } else {
                None
            }
        }
        SwipeMode::DominantAxis => {
            if delta == Vec2::ZERO {
                return None;
            }
            let d = if delta.x.abs() > delta.y.abs() {
                delta.x
            } else {
                delta.y
            };
            if d > 0.0 {
                Some(NavCommand::Retreat)
            } else {
                Some(NavCommand::Advance)
            }
        }
    }
}

/// Tracks the start point of the current touch gesture.
#[derive(Clone, Copy, Debug, Default)]
pub struct TouchTracker {
    start: Option<Vec2>,
}

impl TouchTracker {
    pub fn begin(&mut self, at: Vec2) {
        self.start = Some(at);
    }

    /// `touchmove` only seeds the start when `touchstart` was missed.
    pub fn moved(&mut self, at: Vec2) {
        if self.start.is_none() {
            self.start = Some(at);
        }
    }

    pub fn end(&mut self, at: Vec2, mode: SwipeMode) -> Option<NavCommand> {
        let start = self.start.take()?;
        swipe_command(start, at, mode)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}

/// Parse the count input. Anything that is not a whole number in range is rejected.
pub fn parse_count(raw: &str) -> Result<usize, CarouselError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| CarouselError::InvalidCount(raw.to_string()))?;
    if value < MIN_ITEM_COUNT as i64 || value > MAX_ITEM_COUNT as i64 {
        return Err(CarouselError::CountOutOfRange(value));
    }
    Ok(value as usize)
}
