//! Array problems: two pointers, prefix sums, sweeps and sliding windows.

pub mod find_duplicate;
pub mod majority_element;
pub mod max_area;
pub mod max_sliding_window;
pub mod max_subarray;
pub mod merge_intervals;
pub mod move_zeroes;
pub mod product_except_self;
pub mod remove_duplicates;
pub mod subarray_sum;
pub mod three_sum;
pub mod trap;
pub mod two_sum;
