//! Longest palindromic substrings found four ways.
//!
//! Run with:
//! `cargo run --example palindromes -- [TEXT]...`

use hot100::problems::strings::longest_palindrome::{self, LongestPalindrome};
use hot100::Runner;

fn main() {
    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        inputs = ["babad", "cbbd", "forgeeksskeegfor", "上海自来水来自海上"]
            .map(String::from)
            .to_vec();
    }

    let runner = Runner::with_options(3, false);
    for s in &inputs {
        println!("{s:?}");
        println!("  manacher:             {:?}", longest_palindrome::manacher(s));
        println!("  expand_around_center: {:?}", longest_palindrome::expand_around_center(s));

        match runner.run_case::<LongestPalindrome>(s) {
            Ok(case) => {
                for o in &case.outcomes {
                    let mark = if o.agrees { "ok" } else { "MISMATCH" };
                    println!("  {:<22} {:>10}  {}", o.variant, format!("{:?}", o.elapsed()), mark);
                }
            }
            Err(e) => eprintln!("  error: {e}"),
        }
    }
}
