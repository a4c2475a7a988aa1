/// Power-of-two growable array used as the storage primitive for scene lists
use std::ops::Index;

use log::debug;

use crate::error::{ArrayError, ArrayResult};

/// Capacity of a freshly created array
pub const INITIAL_CAPACITY: usize = 2;

/// How the array grows when an access lands at or beyond its capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrowthPolicy {
    /// Keep doubling until the requested index fits
    #[default]
    Doubling,
    /// Double exactly once; an index still out of range after that is an error
    SingleStep,
}

/// A contiguous array with a tracked power-of-two capacity and a separate
/// logical length.
///
/// Slots in `[len, capacity)` are reserved but never initialised. Touching an
/// index past the current length fills the gap with `T::default()`, so indexed
/// access needs `T: Default` while `append` works for any `T`.
///
/// The backing buffer is released when the array is dropped.
#[derive(Debug)]
pub struct GrowableArray<T> {
    capacity: usize,
    items: Vec<T>,
    policy: GrowthPolicy,
}

impl<T> GrowableArray<T> {
    pub fn new() -> Self {
        Self::with_policy(GrowthPolicy::default())
    }

    pub fn with_policy(policy: GrowthPolicy) -> Self {
        Self {
            capacity: INITIAL_CAPACITY,
            items: Vec::with_capacity(INITIAL_CAPACITY),
            policy,
        }
    }

    /// Current size of the backing buffer, always a power of two
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// High-water mark of touched slots
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn policy(&self) -> GrowthPolicy {
        self.policy
    }

    /// Read a slot without growing
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Write `value` at the current length, growing if needed
    pub fn append(&mut self, value: T) -> ArrayResult<()> {
        self.ensure_capacity(self.items.len())?;
        self.items.push(value);
        Ok(())
    }

    /// Forget every element and return how many there were.
    /// Capacity is kept.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    /// Consume the array and free its buffer
    pub fn release(self) {
        debug!(
            "releasing array buffer (capacity {}, length {})",
            self.capacity,
            self.items.len()
        );
    }

    fn ensure_capacity(&mut self, index: usize) -> ArrayResult<()> {
        if index < self.capacity {
            return Ok(());
        }

        let target = match self.policy {
            GrowthPolicy::Doubling => {
                let mut next = self.capacity;
                while next <= index {
                    next = next_capacity(next)?;
                }
                next
            }
            GrowthPolicy::SingleStep => next_capacity(self.capacity)?,
        };

        self.items
            .try_reserve_exact(target - self.items.len())
            .map_err(|_| ArrayError::AllocationFailed { requested: target })?;
        debug!("growing array capacity {} -> {}", self.capacity, target);
        self.capacity = target;

        if index >= self.capacity {
            return Err(ArrayError::BeyondGrowth {
                index,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl<T: Default> GrowableArray<T> {
    /// Mutable access to slot `index`, growing the buffer and extending the
    /// length as needed
    pub fn slot(&mut self, index: usize) -> ArrayResult<&mut T> {
        self.ensure_capacity(index)?;
        if index >= self.items.len() {
            self.items.resize_with(index + 1, T::default);
        }
        Ok(&mut self.items[index])
    }

    pub fn set(&mut self, index: usize, value: T) -> ArrayResult<()> {
        *self.slot(index)? = value;
        Ok(())
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for GrowableArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Validate a signed index coming from the host
pub fn checked_index(index: i32) -> ArrayResult<usize> {
    usize::try_from(index).map_err(|_| ArrayError::NegativeIndex(index))
}

/// `2 << floor(log2(capacity))`: the next power of two above `capacity`
fn next_capacity(capacity: usize) -> ArrayResult<usize> {
    1usize
        .checked_shl(capacity.ilog2() + 1)
        .ok_or(ArrayError::CapacityOverflow { capacity })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_array() {
        let array: GrowableArray<i32> = GrowableArray::new();
        assert_eq!(array.capacity(), INITIAL_CAPACITY);
        assert_eq!(array.len(), 0);
        assert!(array.is_empty());
        assert_eq!(array.policy(), GrowthPolicy::Doubling);
    }

    #[test]
    fn test_append_keeps_order_and_count() {
        let mut array = GrowableArray::new();
        let mut last_capacity = array.capacity();

        for value in 0..37 {
            array.append(value * 3).unwrap();
            assert!(array.capacity().is_power_of_two());
            assert!(array.capacity() >= last_capacity);
            assert!(array.capacity() >= array.len());
            last_capacity = array.capacity();
        }

        assert_eq!(array.len(), 37);
        assert_eq!(array.capacity(), 64);
        for (i, value) in array.iter().enumerate() {
            assert_eq!(*value, i as i32 * 3);
        }
    }

    #[test]
    fn test_write_read_across_growth() {
        let mut array = GrowableArray::new();
        array.set(1, 11).unwrap();
        assert_eq!(array.capacity(), 2);
        assert_eq!(array.len(), 2);

        array.set(5, 55).unwrap();
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.len(), 6);

        assert_eq!(array.get(1), Some(&11));
        assert_eq!(array[5], 55);
        // gap filled with defaults
        assert_eq!(array.get(3), Some(&0));
        assert_eq!(array.get(6), None);
    }

    #[test]
    fn test_index_at_capacity_grows() {
        let mut array = GrowableArray::new();
        *array.slot(2).unwrap() = 7;
        assert_eq!(array.capacity(), 4);
        assert_eq!(array[2], 7);
    }

    #[test]
    fn test_far_jump_doubling() {
        let mut array: GrowableArray<u8> = GrowableArray::new();
        array.set(100, 1).unwrap();
        assert_eq!(array.capacity(), 128);
        assert_eq!(array.len(), 101);
    }

    #[test]
    fn test_single_step_growth() {
        let mut array: GrowableArray<u8> = GrowableArray::with_policy(GrowthPolicy::SingleStep);
        array.set(3, 1).unwrap();
        assert_eq!(array.capacity(), 4);

        let err = array.set(100, 1).unwrap_err();
        assert_eq!(
            err,
            ArrayError::BeyondGrowth {
                index: 100,
                capacity: 8
            }
        );
        // the one step still happened
        assert_eq!(array.capacity(), 8);
        assert_eq!(array.len(), 4);
    }

    #[test]
    fn test_checked_index() {
        assert_eq!(checked_index(5), Ok(5));
        assert_eq!(checked_index(0), Ok(0));
        assert_eq!(checked_index(-1), Err(ArrayError::NegativeIndex(-1)));
    }

    #[test]
    fn test_next_capacity_overflow() {
        let top = 1usize << (usize::BITS - 1);
        assert_eq!(
            next_capacity(top),
            Err(ArrayError::CapacityOverflow { capacity: top })
        );
        assert_eq!(next_capacity(2), Ok(4));
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut array = GrowableArray::new();
        for value in 0..5 {
            array.append(value).unwrap();
        }
        assert_eq!(array.clear(), 5);
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 8);

        array.append(9).unwrap();
        assert_eq!(array.as_slice(), &[9]);
    }

    #[test]
    fn test_append_without_default() {
        struct Handle(u32);

        let mut array = GrowableArray::new();
        array.append(Handle(1)).unwrap();
        array.append(Handle(2)).unwrap();
        array.append(Handle(3)).unwrap();
        let ids: Vec<u32> = array.iter().map(|h| h.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        array.release();
    }
}
