//! Sliding-window techniques side by side.
//!
//! Run with:
//! `cargo run --example sliding_window`

use hot100::problems::arrays::max_sliding_window::{self, MaxSlidingWindow};
use hot100::problems::strings::{longest_substring, min_window};
use hot100::RunnerBuilder;

fn main() {
    let nums = vec![1, 3, -1, -3, 5, 3, 6, 7];
    let k = 3;
    println!("nums = {nums:?}, k = {k}");
    println!("  window maxima: {:?}", max_sliding_window::monotonic_deque(&nums, k));
    println!("  window minima: {:?}", max_sliding_window::window_minimums(&nums, k));

    for s in ["abcabcbb", "bbbbb", "pwwkew"] {
        println!(
            "longest run without repeats in {s:?}: {}",
            longest_substring::sliding_window_map(s)
        );
    }
    println!(
        "minimum window of \"ADOBECODEBANC\" covering \"ABC\": {:?}",
        min_window::sliding_window("ADOBECODEBANC", "ABC")
    );

    let runner = RunnerBuilder::new().repeats(5).build();
    match runner.run::<MaxSlidingWindow>() {
        Ok(report) => {
            println!("\n#{} {}", report.id, report.title);
            for case in &report.cases {
                println!("  {}", case.input);
                for o in &case.outcomes {
                    println!("    {:<16} {:>10}  {}", o.variant, format!("{:?}", o.elapsed()), o.output);
                }
            }
            if let Some(fastest) = report.fastest_variant() {
                println!("  fastest overall: {fastest}");
            }
        }
        Err(e) => eprintln!("run failed: {e}"),
    }
}
