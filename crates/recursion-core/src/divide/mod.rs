//! Divide-and-conquer engine: binary search and merge sort.
//!
//! Both halve an index range per level instead of building sub-collections.

mod merge_sort;
mod search;

pub use merge_sort::{
    merge_sort, merge_sort_by, merge_sort_in_place, merge_sort_with_stats, SortStats,
};
pub use search::{find, find_by, SearchOutcome};
