//! Miscellaneous utility structs and functions.

use std::fmt::Debug;

/// A closed interval on the number line.
#[derive(Copy, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval<T> {
    pub min: T,
    pub max: T,
}

impl<T> Interval<T> {
    /// Creates a new interval.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: PartialOrd> Interval<T> {
    /// Returns true if this interval contains the value.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Returns true if the interval contains no values.
    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

impl Interval<i32> {
    /// Shrinks the interval by `margin` at both ends, saturating at the
    /// integer limits.
    pub fn shrink(&self, margin: i32) -> Self {
        Self {
            min: self.min.saturating_add(margin),
            max: self.max.saturating_sub(margin),
        }
    }
}

impl<T: Debug> Debug for Interval<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interval({:?}, {:?})", &self.min, &self.max)
    }
}

#[cfg(test)]
mod test {
    use super::Interval;

    #[test]
    fn shrink_interval() {
        let range = Interval::new(1, 10).shrink(3);
        assert_eq!(range, Interval::new(4, 7));
        assert!(!range.contains(3));
        assert!(range.contains(4));
        assert!(range.contains(7));
        assert!(!range.contains(8));
    }

    #[test]
    fn empty_after_shrink() {
        let range = Interval::new(1, 4).shrink(3);
        assert!(range.is_empty());
        assert!(!range.contains(2));
        assert!(!range.contains(4));
    }

    #[test]
    fn shrink_saturates() {
        let range = Interval::new(1, 10).shrink(i32::MAX);
        assert_eq!(range, Interval::new(i32::MAX, 10 - i32::MAX));
        assert!(range.is_empty());
    }
}
