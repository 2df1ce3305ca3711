//! Classic interview problems, each solved several ways.
//!
//! Every problem lives in its own module under [`problems`] and exposes one
//! plain function per solution strategy (brute force, hashing, two pointers,
//! dynamic programming, ...). On top of those functions the crate provides a
//! small harness that runs all strategies of a problem side by side.
//!
//! ## Core idea
//! 1. Describe a problem by implementing [`Problem`]: its identity, its
//!    solution [`Variant`]s (reference first) and a few demonstration inputs.
//! 2. Let [`Runner`] execute every variant on every input, time it, and check
//!    that each output [agrees](Problem::agree) with the reference.
//! 3. Inspect the resulting [`report::ProblemReport`], or go through
//!    [`catalog`] to drive every registered problem without naming its type.
//!
//! ## Quick start
//! ```
//! use hot100::{Runner, problems::strings::longest_palindrome::{self, LongestPalindrome}};
//!
//! assert_eq!(longest_palindrome::manacher("cbbd"), "bb");
//!
//! let report = Runner::new().run::<LongestPalindrome>().unwrap();
//! assert!(report.is_consistent());
//! ```
//!
//! ## Problem groups
//! - [`problems::arrays`]: two pointers, prefix sums, sweeps, windows
//! - [`problems::strings`]: substring windows, palindromes, parsing
//! - [`problems::search`]: binary search variants
//! - [`problems::matrix`]: spiral walks and in-place transforms
//! - [`problems::trees`]: traversals and construction over owned trees
//! - [`problems::backtracking`]: combinations, permutations, grid search
//! - [`problems::linked_list`]: relinking owned lists
//! - [`problems::dp`]: one-dimensional dynamic programming
//!
//! ## Features
//! - `parallel`: run the variants of one input concurrently on rayon.
//! - `tracing`: spans per problem, case and variant; warnings on disagreement.
//! - `cli` (default): the `hot100` console binary.

pub mod builder;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod problems;
pub mod report;
pub mod traits;
pub mod utils;

pub use crate::builder::RunnerBuilder;
pub use crate::engine::Runner;
pub use crate::error::{Error, Result};
pub use crate::traits::{Problem, Variant};
