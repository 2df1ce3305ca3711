//! Core trait definitions for problems with interchangeable solutions.
//!
//! To register a problem with the [`Runner`](crate::engine::Runner), implement
//! [`Problem`] for a unit struct describing it:
//! - Identity: the LeetCode number, slug and title.
//! - Variants: every alternative solution as a named pure function.
//! - Demo cases: the inputs printed by the console demonstration.
//! - Agreement: how two outputs are compared when several answers are valid.
//!
//! The runner only ever talks to problems through these primitives, so a new
//! problem needs no changes anywhere else apart from a catalog entry.

use std::fmt;

/// A named solution strategy for a problem input `I` producing `O`.
///
/// Solutions that rewrite their input in place (e.g. remove-duplicates) are
/// wrapped so that `solve` clones first; the runner never hands out a shared
/// mutable input.
pub struct Variant<I, O> {
    pub name: &'static str,
    pub solve: fn(&I) -> O,
}

impl<I, O> Variant<I, O> {
    pub const fn new(name: &'static str, solve: fn(&I) -> O) -> Self {
        Self { name, solve }
    }

    #[inline]
    pub fn call(&self, input: &I) -> O {
        (self.solve)(input)
    }
}

impl<I, O> Clone for Variant<I, O> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I, O> Copy for Variant<I, O> {}

impl<I, O> fmt::Debug for Variant<I, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Variant").field("name", &self.name).finish()
    }
}

/// Trait for a problem with several independent solutions.
///
/// Semantics:
/// - `variants()[0]` is the reference; every other variant is checked
///   against it with [`Problem::agree`].
/// - `demo_cases()` are small, well-formed inputs (they satisfy the problem
///   constraints), used by the console binary and the catalog tests.
pub trait Problem {
    /// Input handed to every variant.
    type Input: Clone + fmt::Debug + Send + Sync;

    /// Output produced by every variant.
    type Output: fmt::Debug + PartialEq + Send;

    /// LeetCode problem number.
    const ID: u32;

    /// URL slug, used as a stable lookup key.
    const SLUG: &'static str;

    /// Human-readable title.
    const TITLE: &'static str;

    /// All solution variants, reference first.
    fn variants() -> Vec<Variant<Self::Input, Self::Output>>;

    /// Inputs exercised by the console demonstration.
    fn demo_cases() -> Vec<Self::Input>;

    /// Whether `actual` is an acceptable answer given the reference answer
    /// `expected` for `input`.
    ///
    /// Defaults to equality. Problems admitting several correct answers
    /// (any longest palindrome, any ordering of a result set) override this.
    fn agree(input: &Self::Input, expected: &Self::Output, actual: &Self::Output) -> bool {
        let _ = input;
        expected == actual
    }
}

/// Order-insensitive comparison of two collections.
///
/// Shared helper for problems whose answer is a set (subsets, triplets,
/// anagram groups, found words).
pub fn same_elements<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort();
    b.sort();
    a == b
}
