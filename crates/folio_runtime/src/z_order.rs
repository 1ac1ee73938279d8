//! Stacking-value allocation for desktop windows.

use thiserror::Error;

use crate::model::INITIAL_Z_INDEX;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("stacking values exhausted at {0}")]
/// The allocator reached the top of the integer range.
pub struct ZOrderExhausted(pub u32);

/// Single source of stacking values.
///
/// Every value handed out is strictly greater than all previous ones, so raising one window never
/// reorders the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZOrderAllocator {
    current: u32,
}

impl ZOrderAllocator {
    pub const fn new(baseline: u32) -> Self {
        Self { current: baseline }
    }

    /// Last value handed out (the baseline before the first allocation).
    pub const fn current(&self) -> u32 {
        self.current
    }

    /// Allocates the next stacking value.
    ///
    /// # Errors
    ///
    /// Returns [`ZOrderExhausted`] instead of wrapping once `u32::MAX` has been issued.
    pub fn next(&mut self) -> Result<u32, ZOrderExhausted> {
        let next = self
            .current
            .checked_add(1)
            .ok_or(ZOrderExhausted(self.current))?;
        self.current = next;
        Ok(next)
    }
}

impl Default for ZOrderAllocator {
    fn default() -> Self {
        Self::new(INITIAL_Z_INDEX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocations_start_above_baseline_and_strictly_increase() {
        let mut allocator = ZOrderAllocator::default();
        assert_eq!(allocator.current(), 1000);
        assert_eq!(allocator.next(), Ok(1001));
        assert_eq!(allocator.next(), Ok(1002));
        assert_eq!(allocator.current(), 1002);
    }

    #[test]
    fn exhaustion_is_reported_without_wrapping() {
        let mut allocator = ZOrderAllocator::new(u32::MAX - 1);
        assert_eq!(allocator.next(), Ok(u32::MAX));
        assert_eq!(allocator.next(), Err(ZOrderExhausted(u32::MAX)));
        assert_eq!(allocator.current(), u32::MAX);
    }
}
