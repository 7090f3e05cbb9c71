#[macro_use]
extern crate log;

mod comparator;
mod error;
mod heap;
pub mod optimized;

pub use comparator::{Ascending, Comparator, Descending};
pub use error::HeapError;
pub use heap::{Heap, MaxHeap, MinHeap};
pub use optimized::{
    use_lazy_heapification, with_capacity, with_growth_function, GrowthFn, HeapOption,
    OptimizedHeap,
};

#[cfg(test)]
use rand::prelude::*;

#[cfg(test)]
fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

#[cfg(test)]
fn bench_bulk_load() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 1 << 18;

    let values: Vec<u32> = (0..N).map(|_| rng.gen_range(0..1000_000)).collect();

    let mut std_heap = std::collections::BinaryHeap::new();
    bench("std::collections::BinaryHeap::push", 1, || {
        for &x in values.iter() {
            std_heap.push(std::cmp::Reverse(x));
        }
    });
    bench("std::collections::BinaryHeap::pop", 2, || {
        while std_heap.pop().is_some() {}
    });
    println!();

    let mut heap = MinHeap::min();
    bench("Heap::insert", 4, || {
        for &x in values.iter() {
            heap.insert(x);
        }
    });
    let mut plain = Vec::with_capacity(N);
    bench("Heap::extract", 4, || {
        while let Some(x) = heap.extract() {
            plain.push(x);
        }
    });
    println!();

    let mut eager = OptimizedHeap::min(None).unwrap();
    bench("OptimizedHeap::insert (eager)", 2, || {
        for &x in values.iter() {
            eager.insert(x).unwrap();
        }
    });
    let mut eager_out = Vec::with_capacity(N);
    bench("OptimizedHeap::extract (eager)", 2, || {
        while let Some(x) = eager.extract() {
            eager_out.push(x);
        }
    });
    println!();

    let mut prealloc = OptimizedHeap::min(vec![with_capacity(N as isize, false)]).unwrap();
    bench("OptimizedHeap::insert (prealloc)", 1, || {
        for &x in values.iter() {
            prealloc.insert(x).unwrap();
        }
    });
    assert_eq!(prealloc.insert(0), Err(HeapError::CapacityReached));
    println!();

    let mut lazy = OptimizedHeap::min(vec![use_lazy_heapification()]).unwrap();
    bench("OptimizedHeap::insert (lazy)", 2, || {
        for &x in values.iter() {
            lazy.insert(x).unwrap();
        }
    });
    let mut lazy_out = Vec::with_capacity(N);
    bench("OptimizedHeap::extract (lazy)", 2, || {
        while let Some(x) = lazy.extract() {
            lazy_out.push(x);
        }
    });
    println!();

    assert_eq!(plain.len(), N);
    assert!(plain.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(plain, eager_out);
    assert_eq!(plain, lazy_out);
}

#[cfg(test)]
fn bench_mixed_workload() {
    let mut rng = SmallRng::from_entropy();

    const N: usize = 1 << 16;

    // bursts of inserts followed by a single extraction
    let values: Vec<u32> = (0..N).map(|_| rng.gen()).collect();

    let mut eager = OptimizedHeap::max(None).unwrap();
    let mut lazy = OptimizedHeap::max(vec![use_lazy_heapification()]).unwrap();
    let mut eager_out = Vec::new();
    let mut lazy_out = Vec::new();

    bench("mixed workload (eager)", 3, || {
        for chunk in values.chunks(64) {
            for &x in chunk {
                eager.insert(x).unwrap();
            }
            eager_out.extend(eager.extract());
        }
    });
    bench("mixed workload (lazy)", 3, || {
        for chunk in values.chunks(64) {
            for &x in chunk {
                lazy.insert(x).unwrap();
            }
            lazy_out.extend(lazy.extract());
        }
    });

    assert_eq!(eager_out, lazy_out);
    assert_eq!(eager.len(), lazy.len());
}

#[test]
pub fn main() {
    bench_bulk_load();
    println!();
    bench_mixed_workload();
}
