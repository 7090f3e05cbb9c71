/// Decides relative priority between two elements of a heap.
///
/// `higher_priority(a, b)` must be a strict weak order: it returns `true` only if `a` has to be
/// extracted before `b`. Equal-priority elements return `false` both ways.
pub trait Comparator<T: ?Sized> {
    fn higher_priority(&self, a: &T, b: &T) -> bool;
}

/// Smallest element first.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Ascending;

/// Largest element first.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Descending;

impl<T: ?Sized + Ord> Comparator<T> for Ascending {
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: ?Sized + Ord> Comparator<T> for Descending {
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Comparator<T> for F {
    #[inline]
    fn higher_priority(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}
