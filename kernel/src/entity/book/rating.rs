use std::ops::RangeInclusive;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Fromln, AsRefln)]
pub struct BookRating(i32);

impl BookRating {
    pub const RANGE: RangeInclusive<i32> = 1..=3;

    pub fn new(rating: impl Into<i32>) -> Self {
        Self(rating.into())
    }

    pub fn is_in_range(&self) -> bool {
        Self::RANGE.contains(&self.0)
    }
}
