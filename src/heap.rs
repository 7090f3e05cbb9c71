use crate::comparator::{Ascending, Comparator, Descending};

/// Array backed binary heap ordered by a [`Comparator`].
///
/// The element for which the comparator reports the highest priority sits at index 0, the
/// children of `i` are at `2i + 1` and `2i + 2`.
#[derive(Clone, Debug)]
pub struct Heap<T, C> {
    pub(crate) data: Vec<T>,
    comparator: C,
}

pub type MinHeap<T> = Heap<T, Ascending>;
pub type MaxHeap<T> = Heap<T, Descending>;

impl<T: Ord> Heap<T, Ascending> {
    /// O(1)
    #[inline]
    pub fn min() -> Self {
        Self::new(Ascending)
    }
}

impl<T: Ord> Heap<T, Descending> {
    /// O(1)
    #[inline]
    pub fn max() -> Self {
        Self::new(Descending)
    }
}

impl<T, C: Comparator<T>> Heap<T, C> {
    /// O(1)
    #[inline]
    pub fn new(comparator: C) -> Self {
        Self {
            data: Vec::new(),
            comparator,
        }
    }

    /// O(1)
    #[inline]
    pub fn with_capacity(comparator: C, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            comparator,
        }
    }

    /// O(1)
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// O(1)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// O(1)
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// O(1)
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The highest priority element. O(1)
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The raw breadth-first layout of the tree.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Backing storage in heap order, not sorted order.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// O(n)
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// O(log n)
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.len() - 1);
    }

    /// Removes the highest priority element. An empty heap yields `None` and stays as is.
    ///
    /// O(log n)
    pub fn extract(&mut self) -> Option<T> {
        use std::mem;

        let mut res = self.data.pop()?;
        if let Some(root) = self.data.first_mut() {
            res = mem::replace(root, res);
            self.sift_down(0);
        }

        Some(res)
    }

    /// Appends without restoring the heap property. A `rebuild` has to follow before the
    /// structure is read as a heap again.
    #[inline]
    pub(crate) fn push_unordered(&mut self, value: T) {
        self.data.push(value);
    }

    /// Makes room for exactly `capacity` elements in total.
    pub(crate) fn reserve_total(&mut self, capacity: usize) {
        let len = self.len();
        if capacity > len {
            self.data.reserve_exact(capacity - len);
        }
    }

    /// Bottom-up heap construction over whatever order `data` is in.
    ///
    /// O(n)
    pub(crate) fn rebuild(&mut self) {
        for i in (0..self.len() / 2).rev() {
            self.sift_down(i);
        }
    }

    #[inline]
    fn higher(&self, i: usize, j: usize) -> bool {
        self.comparator.higher_priority(&self.data[i], &self.data[j])
    }

    /// O(log n)
    fn sift_up(&mut self, mut node: usize) {
        while node != 0 {
            let parent = (node - 1) / 2;

            if self.higher(node, parent) {
                self.data.swap(parent, node);
                node = parent;
            } else {
                break;
            }
        }
    }

    /// Promotes the single best of {node, left, right} until `node` wins or is a leaf.
    ///
    /// O(log n)
    fn sift_down(&mut self, mut node: usize) {
        let len = self.len();
        loop {
            let left = 2 * node + 1;
            let right = left + 1;

            let mut best = node;
            if left < len && self.higher(left, best) {
                best = left;
            }
            if right < len && self.higher(right, best) {
                best = right;
            }

            if best == node {
                break;
            }
            self.data.swap(node, best);
            node = best;
        }
    }

    #[cfg(test)]
    pub(crate) fn is_heap(&self) -> bool {
        (1..self.len()).all(|i| !self.higher(i, (i - 1) / 2))
    }
}

impl<T, C: Comparator<T> + Default> Default for Heap<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T, C: Comparator<T> + Default> std::iter::FromIterator<T> for Heap<T, C> {
    /// O(n)
    fn from_iter<Iter: IntoIterator<Item = T>>(iter: Iter) -> Self {
        let mut heap = Self {
            data: iter.into_iter().collect(),
            comparator: C::default(),
        };
        heap.rebuild();

        heap
    }
}

impl<T, C: Comparator<T>> Extend<T> for Heap<T, C> {
    fn extend<Iter: IntoIterator<Item = T>>(&mut self, iter: Iter) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);

        for x in iter {
            self.insert(x);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;
    use rand::prelude::*;

    fn drain<T, C: Comparator<T>>(heap: &mut Heap<T, C>) -> Vec<T> {
        let mut out = Vec::with_capacity(heap.len());
        while let Some(x) = heap.extract() {
            assert!(heap.is_heap());
            out.push(x);
        }
        out
    }

    #[test]
    fn min_basic() {
        let mut heap = MinHeap::min();
        for &x in [5, 3, 8, 1, 2].iter() {
            heap.insert(x);
        }
        assert_eq!(drain(&mut heap), vec![1, 2, 3, 5, 8]);
        assert_eq!(heap.extract(), None);
    }

    #[test]
    fn max_basic() {
        let mut heap = MaxHeap::max();
        for &x in [5, 3, 8, 1, 2].iter() {
            heap.insert(x);
        }
        assert_eq!(drain(&mut heap), vec![8, 5, 3, 2, 1]);
        assert_eq!(heap.extract(), None);
    }

    #[test]
    fn empty_extract() {
        let mut heap = MinHeap::<i32>::min();
        assert_eq!(heap.extract(), None);
        assert_eq!(heap.peek(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn single_element() {
        let mut heap = MinHeap::min();
        heap.insert(42);
        assert_eq!(heap.peek(), Some(&42));
        assert_eq!(heap.extract(), Some(42));
        assert_eq!(heap.extract(), None);
    }

    #[test]
    fn duplicates() {
        let mut heap = MinHeap::min();
        for _ in 0..4 {
            heap.insert(7);
        }
        assert_eq!(drain(&mut heap), vec![7; 4]);
    }

    #[test]
    fn negative_numbers() {
        let mut heap = MinHeap::min();
        for &x in [-1, -5, 3, 0, -2].iter() {
            heap.insert(x);
        }
        assert_eq!(drain(&mut heap), vec![-5, -2, -1, 0, 3]);
    }

    #[test]
    fn sorted_inputs() {
        let mut heap = MinHeap::min();
        heap.extend(0..100);
        assert_eq!(drain(&mut heap), (0..100).collect::<Vec<_>>());

        let mut heap = MinHeap::min();
        heap.extend((0..100).rev());
        assert_eq!(drain(&mut heap), (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn sift_down_promotes_best_of_three() {
        let mut heap = MinHeap::min();
        for &x in [0, 2, 1, 5, 6].iter() {
            heap.insert(x);
        }
        assert_eq!(heap.as_slice(), &[0, 2, 1, 5, 6]);

        // 6 lands on the root, both children beat it, the right one (1) is the best.
        assert_eq!(heap.extract(), Some(0));
        assert_eq!(heap.as_slice(), &[1, 2, 6, 5]);
    }

    #[test]
    fn from_iter_builds_heap() {
        let heap: MaxHeap<_> = vec![4, 9, 1, 7, 3, 8].into_iter().collect();
        assert!(heap.is_heap());
        assert_eq!(heap.peek(), Some(&9));
        assert_eq!(heap.len(), 6);
    }

    #[test]
    fn float_priorities() {
        let mut heap = MaxHeap::max();
        for &x in [0.5, -1.25, 3.75, 2.0].iter() {
            heap.insert(OrderedFloat(x));
        }
        let out: Vec<f64> = drain(&mut heap).into_iter().map(|x| x.0).collect();
        assert_eq!(out, vec![3.75, 2.0, 0.5, -1.25]);
    }

    #[test]
    fn closure_comparator_by_key() {
        let mut heap = Heap::new(|a: &(u32, &str), b: &(u32, &str)| a.0 < b.0);
        heap.insert((3, "c"));
        heap.insert((1, "a"));
        heap.insert((2, "b"));
        let names: Vec<_> = drain(&mut heap).into_iter().map(|(_, n)| n).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn randomized_against_sort() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);

        for _ in 0..32 {
            let n = rng.gen_range(0..512);
            let values: Vec<i32> = (0..n).map(|_| rng.gen_range(-1000..1000)).collect();

            let mut min = MinHeap::min();
            let mut max = MaxHeap::max();
            for &x in values.iter() {
                min.insert(x);
                max.insert(x);
                assert!(min.is_heap());
                assert!(max.is_heap());
            }

            let mut sorted = values.clone();
            sorted.sort_unstable();
            assert_eq!(drain(&mut min), sorted);
            sorted.reverse();
            assert_eq!(drain(&mut max), sorted);
        }
    }

    #[test]
    fn interleaved_ops_keep_invariant() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut heap = MinHeap::min();
        let (mut inserted, mut extracted) = (0, 0);

        for _ in 0..4096 {
            if rng.gen_bool(0.6) {
                heap.insert(rng.gen_range(0..100u8));
                inserted += 1;
            } else if heap.extract().is_some() {
                extracted += 1;
            }
            assert!(heap.is_heap());
        }
        extracted += drain(&mut heap).len();

        assert_eq!(inserted, extracted);
        assert_eq!(heap.extract(), None);
    }
}
