//! IAI-Callgrind benchmark for SequenceList operations.
//!
//! Measures instruction counts for end insertion, front removal, the O(n)
//! `pop_last` walk and indexed editing.
//!
//! # Data Sizes
//!
//! - **append / prepend**: 1000
//! - **pop_last / insert_after_middle**: 100, 1000 (walk length grows with size)
//! - **collect**: 1000, 10000

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use sequence_list::SequenceList;
use std::hint::black_box;

fn setup_list_100() -> SequenceList<i32> {
    (0..100).collect()
}

fn setup_list_1000() -> SequenceList<i32> {
    (0..1000).collect()
}

#[library_benchmark]
fn append_1000() -> SequenceList<i32> {
    let mut list = SequenceList::new();
    for index in 0..1000 {
        list.append(black_box(index));
    }
    black_box(list)
}

#[library_benchmark]
fn prepend_1000() -> SequenceList<i32> {
    let mut list = SequenceList::new();
    for index in 0..1000 {
        list.prepend(black_box(index));
    }
    black_box(list)
}

#[library_benchmark]
#[bench::with_setup(setup_list_100())]
fn pop_last_100(mut list: SequenceList<i32>) -> i32 {
    black_box(list.pop_last().unwrap_or_default())
}

#[library_benchmark]
#[bench::with_setup(setup_list_1000())]
fn pop_last_1000(mut list: SequenceList<i32>) -> i32 {
    black_box(list.pop_last().unwrap_or_default())
}

#[library_benchmark]
#[bench::with_setup(setup_list_100())]
fn insert_after_middle_100(mut list: SequenceList<i32>) -> SequenceList<i32> {
    let _ = list.insert_after(black_box(50), black_box(-1));
    black_box(list)
}

#[library_benchmark]
#[bench::with_setup(setup_list_1000())]
fn insert_after_middle_1000(mut list: SequenceList<i32>) -> SequenceList<i32> {
    let _ = list.insert_after(black_box(500), black_box(-1));
    black_box(list)
}

#[library_benchmark]
fn collect_1000() -> SequenceList<i32> {
    black_box(black_box(0..1000).collect::<SequenceList<i32>>())
}

#[library_benchmark]
fn collect_10000() -> SequenceList<i32> {
    black_box(black_box(0..10000).collect::<SequenceList<i32>>())
}

library_benchmark_group!(
    name = sequence_list_group;
    benchmarks =
        append_1000, prepend_1000,
        pop_last_100, pop_last_1000,
        insert_after_middle_100, insert_after_middle_1000,
        collect_1000, collect_10000
);

main!(library_benchmark_groups = sequence_list_group);
