//! A [`Heap`] with capacity control, a pluggable growth policy and optional lazy heapification.
//!
//! With lazy heapification on, inserts only append. The heap property is restored by a single
//! bottom-up pass right before the next extraction, which is O(n) instead of the O(n log n) that
//! `n` separate sift-ups would cost.

use std::fmt;

use crate::comparator::{Ascending, Comparator, Descending};
use crate::error::HeapError;
use crate::heap::Heap;

/// Maps the current capacity to the next one. Must be pure.
pub type GrowthFn = Box<dyn Fn(usize) -> usize>;

pub const DEFAULT_CAPACITY: usize = 16;

/// Below this capacity the default policy doubles, above it grows by a quarter.
pub const GROWTH_THRESHOLD: usize = 1024;

pub fn default_growth(capacity: usize) -> usize {
    if capacity < GROWTH_THRESHOLD {
        capacity.saturating_mul(2)
    } else {
        capacity.saturating_add(capacity / 4)
    }
}

/// A single configuration step. Options are applied in order, later ones overwrite earlier ones.
pub enum HeapOption {
    Capacity { capacity: isize, can_grow: bool },
    GrowthFunction(GrowthFn),
    Lazy,
}

impl fmt::Debug for HeapOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapOption::Capacity { capacity, can_grow } => f
                .debug_struct("Capacity")
                .field("capacity", capacity)
                .field("can_grow", can_grow)
                .finish(),
            HeapOption::GrowthFunction(_) => f.write_str("GrowthFunction(..)"),
            HeapOption::Lazy => f.write_str("Lazy"),
        }
    }
}

#[inline]
pub fn with_capacity(capacity: isize, can_grow: bool) -> HeapOption {
    HeapOption::Capacity { capacity, can_grow }
}

#[inline]
pub fn with_growth_function<F: Fn(usize) -> usize + 'static>(growth: F) -> HeapOption {
    HeapOption::GrowthFunction(Box::new(growth))
}

#[inline]
pub fn use_lazy_heapification() -> HeapOption {
    HeapOption::Lazy
}

struct Config {
    capacity: isize,
    can_grow: bool,
    growth: GrowthFn,
    lazy: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY as isize,
            can_grow: true,
            growth: Box::new(default_growth),
            lazy: false,
        }
    }
}

impl Config {
    fn apply(&mut self, option: HeapOption) {
        match option {
            HeapOption::Capacity { capacity, can_grow } => {
                self.capacity = capacity;
                self.can_grow = can_grow;
            }
            HeapOption::GrowthFunction(growth) => self.growth = growth,
            HeapOption::Lazy => self.lazy = true,
        }
    }

    fn validated_capacity(&self) -> Result<usize, HeapError> {
        match self.capacity {
            c if c < 0 => Err(HeapError::NegativeCapacity),
            0 => Err(HeapError::ZeroCapacity),
            c => Ok(c as usize),
        }
    }
}

pub struct OptimizedHeap<T, C> {
    heap: Heap<T, C>,
    capacity: usize,
    can_grow: bool,
    lazy: bool,
    growth: GrowthFn,
    // False while lazily appended elements may violate the heap property.
    heapified: bool,
}

impl<T: Ord> OptimizedHeap<T, Ascending> {
    pub fn min<I: IntoIterator<Item = HeapOption>>(options: I) -> Result<Self, HeapError> {
        Self::new(Ascending, options)
    }
}

impl<T: Ord> OptimizedHeap<T, Descending> {
    pub fn max<I: IntoIterator<Item = HeapOption>>(options: I) -> Result<Self, HeapError> {
        Self::new(Descending, options)
    }
}

impl<T, C: Comparator<T>> OptimizedHeap<T, C> {
    pub fn new<I: IntoIterator<Item = HeapOption>>(
        comparator: C,
        options: I,
    ) -> Result<Self, HeapError> {
        let mut config = Config::default();
        for option in options {
            config.apply(option);
        }
        let capacity = config.validated_capacity()?;

        Ok(Self {
            heap: Heap::with_capacity(comparator, capacity),
            capacity,
            can_grow: config.can_grow,
            lazy: config.lazy,
            growth: config.growth,
            heapified: true,
        })
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The capacity as tracked by the growth policy. The allocation may be larger.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn can_grow(&self) -> bool {
        self.can_grow
    }

    #[inline]
    pub fn is_lazy(&self) -> bool {
        self.lazy
    }

    /// Fails with [`HeapError::CapacityReached`] if the heap is full and not allowed to grow, in
    /// which case nothing changes.
    ///
    /// Eager: O(log n) amortized. Lazy: O(1) amortized.
    pub fn insert(&mut self, value: T) -> Result<(), HeapError> {
        if self.heap.len() >= self.capacity {
            if !self.can_grow {
                trace!("insert rejected, heap is full at {}", self.capacity);
                return Err(HeapError::CapacityReached);
            }
            self.grow();
        }

        if self.lazy {
            self.heap.push_unordered(value);
            self.heapified = false;
        } else {
            self.heap.insert(value);
        }

        Ok(())
    }

    /// Removes the highest priority element, first rebuilding the heap if lazy inserts are
    /// pending.
    ///
    /// O(log n), plus O(n) once after a run of lazy inserts.
    pub fn extract(&mut self) -> Option<T> {
        self.heapify_pending();
        self.heap.extract()
    }

    /// Takes `&mut self` because pending lazy inserts are heapified first.
    pub fn peek(&mut self) -> Option<&T> {
        self.heapify_pending();
        self.heap.peek()
    }

    fn heapify_pending(&mut self) {
        if self.lazy && !self.heapified && !self.heap.is_empty() {
            debug!("heapifying {} lazily inserted elements", self.heap.len());
            self.heap.rebuild();
            self.heapified = true;
        }
    }

    /// O(n)
    fn grow(&mut self) {
        let mut new_capacity = (self.growth)(self.capacity);
        if new_capacity <= self.capacity {
            debug!(
                "growth function returned {} for capacity {}, growing by one",
                new_capacity, self.capacity
            );
            new_capacity = self.capacity + 1;
        }

        trace!("growing heap capacity {} -> {}", self.capacity, new_capacity);
        self.heap.reserve_total(new_capacity);
        self.capacity = new_capacity;
    }
}

impl<T: fmt::Debug, C: fmt::Debug> fmt::Debug for OptimizedHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptimizedHeap")
            .field("heap", &self.heap)
            .field("capacity", &self.capacity)
            .field("can_grow", &self.can_grow)
            .field("lazy", &self.lazy)
            .field("heapified", &self.heapified)
            .finish()
    }
}
