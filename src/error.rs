use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapError {
    /// The requested initial capacity was below zero.
    NegativeCapacity,
    /// The requested initial capacity was zero.
    ZeroCapacity,
    /// A fixed-capacity heap is full. The rejected insert left it untouched.
    CapacityReached,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::NegativeCapacity => write!(f, "heap: capacity cannot be negative"),
            HeapError::ZeroCapacity => write!(f, "heap: capacity cannot be zero"),
            HeapError::CapacityReached => write!(f, "heap: capacity reached and cannot grow"),
        }
    }
}

impl std::error::Error for HeapError {}
