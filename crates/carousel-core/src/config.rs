use std::time::Duration;

use crate::constants::{DEFAULT_ITEM_COUNT, TWEEN_DURATION_MS, WHEEL_DEBOUNCE_MS};
use crate::error::CarouselError;
use crate::input::{parse_count, SwipeMode};

/// Runtime settings; defaults come from `constants`, overrides from the page.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub initial_count: usize,
    pub swipe_mode: SwipeMode,
    pub debounce_ms: f64,
    pub tween_duration: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            initial_count: DEFAULT_ITEM_COUNT,
            swipe_mode: SwipeMode::default(),
            debounce_ms: WHEEL_DEBOUNCE_MS,
            tween_duration: Duration::from_millis(TWEEN_DURATION_MS as u64),
        }
    }
}

impl CarouselConfig {
    /// Apply a single `key=value` override (keys match the `data-*` attribute names).
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), CarouselError> {
        let invalid = || CarouselError::InvalidOption {
            key: key.to_string(),
            value: value.to_string(),
        };
        match key {
            "count" => {
                self.initial_count = parse_count(value)?;
            }
            "swipe" => {
                self.swipe_mode = SwipeMode::parse(value).ok_or_else(invalid)?;
            }
            "debounce-ms" => {
                let ms: f64 = value.trim().parse().map_err(|_| invalid())?;
                if !ms.is_finite() || ms < 0.0 {
                    return Err(invalid());
                }
                self.debounce_ms = ms;
            }
            "duration-ms" => {
                let ms: u64 = value.trim().parse().map_err(|_| invalid())?;
                self.tween_duration = Duration::from_millis(ms);
            }
            _ => return Err(CarouselError::UnknownOption(key.to_string())),
        }
        Ok(())
    }

    /// Apply every override, collecting the ones that failed instead of stopping.
    pub fn apply_overrides<'a, I>(&mut self, pairs: I) -> Vec<CarouselError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .filter_map(|(k, v)| self.apply_override(k, v).err())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_apply() {
        let mut cfg = CarouselConfig::default();
        cfg.apply_override("count", "4").unwrap();
        cfg.apply_override("swipe", "dominant").unwrap();
        cfg.apply_override("debounce-ms", "80").unwrap();
        cfg.apply_override("duration-ms", "250").unwrap();
        assert_eq!(cfg.initial_count, 4);
        assert_eq!(cfg.swipe_mode, SwipeMode::DominantAxis);
        assert_eq!(cfg.debounce_ms, 80.0);
        assert_eq!(cfg.tween_duration, Duration::from_millis(250));
    }

    #[test]
    fn bad_overrides_are_reported_and_skipped() {
        let mut cfg = CarouselConfig::default();
        let errs = cfg.apply_overrides([("count", "0"), ("colour", "red"), ("swipe", "h")]);
        assert_eq!(errs.len(), 2);
        assert_eq!(errs[1], CarouselError::UnknownOption("colour".into()));
        assert_eq!(cfg.initial_count, DEFAULT_ITEM_COUNT);
        assert_eq!(cfg.swipe_mode, SwipeMode::Horizontal);
    }
}
