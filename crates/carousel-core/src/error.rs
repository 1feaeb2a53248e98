use thiserror::Error;

use crate::constants::{MAX_ITEM_COUNT, MIN_ITEM_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("item count {0:?} is not a whole number")]
    InvalidCount(String),
    #[error("item count {0} is outside {min}..={max}", min = MIN_ITEM_COUNT, max = MAX_ITEM_COUNT)]
    CountOutOfRange(i64),
    #[error("unknown option {0:?}")]
    UnknownOption(String),
    #[error("invalid value {value:?} for option {key:?}")]
    InvalidOption { key: String, value: String },
}
