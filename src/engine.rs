//! Generic runner over implementations of [`Problem`].
//!
//! For every input the runner:
//! 1. executes each variant `repeats` times, keeping the median wall-clock
//!    time and the output of the first execution, and
//! 2. compares every output against the reference variant (`variants()[0]`)
//!    with [`Problem::agree`].
//!
//! With the `parallel` feature the variants of one input run concurrently on
//! the rayon pool; timings are then indicative only.

use crate::error::{Error, Result};
use crate::report::{CaseReport, ProblemReport, VariantOutcome};
use crate::traits::{Problem, Variant};
use crate::utils::{median_ns, render_debug, DEFAULT_RENDER_LIMIT};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::hint::black_box;
use std::time::Instant;

/// Cross-checking runner.
///
/// Typical usage:
/// ```
/// use hot100::{Runner, problems::arrays::max_area::MaxArea};
///
/// let runner = Runner::new();
/// let best = runner.verify::<MaxArea>(&vec![1, 8, 6, 2, 5, 4, 8, 3, 7]).unwrap();
/// assert_eq!(best, 49);
/// ```
#[derive(Debug, Clone)]
pub struct Runner {
    repeats: usize,
    strict: bool,
    render_limit: usize,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new()
    }
}

impl Runner {
    /// Single execution per variant, disagreements recorded but not fatal.
    pub fn new() -> Self {
        Self::with_options(1, false)
    }

    /// Runner with explicit repeat count (0 is treated as 1) and strictness.
    pub fn with_options(repeats: usize, strict: bool) -> Self {
        Self {
            repeats: repeats.max(1),
            strict,
            render_limit: DEFAULT_RENDER_LIMIT,
        }
    }

    pub fn repeats(&self) -> usize {
        self.repeats
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn render_limit(&self) -> usize {
        self.render_limit
    }

    pub(crate) fn set_render_limit(&mut self, limit: usize) {
        self.render_limit = limit;
    }

    /// Run every demo case of `P`.
    pub fn run<P: Problem>(&self) -> Result<ProblemReport> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("problem", id = P::ID, slug = P::SLUG);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let cases = P::demo_cases()
            .iter()
            .map(|input| self.run_case::<P>(input))
            .collect::<Result<Vec<_>>>()?;

        #[cfg(feature = "tracing")]
        tracing::debug!(cases = cases.len(), "problem finished");

        Ok(ProblemReport {
            id: P::ID,
            slug: P::SLUG,
            title: P::TITLE,
            cases,
        })
    }

    /// Run all variants of `P` on one input.
    ///
    /// # Errors
    /// In strict mode, [`Error::Inconsistent`] for the first variant that
    /// disagrees with the reference.
    pub fn run_case<P: Problem>(&self, input: &P::Input) -> Result<CaseReport> {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!("case", slug = P::SLUG);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let variants = P::variants();
        let timed = execute_variants(&variants, input, self.repeats);
        let (outcomes, consistent) = self.compare::<P>(&variants, input, &timed, self.strict)?;
        Ok(CaseReport {
            input: render_debug(input, self.render_limit),
            outcomes,
            consistent,
        })
    }

    /// Run all variants of `P` on one input and return the reference output.
    ///
    /// Always strict, regardless of the runner's configuration.
    pub fn verify<P: Problem>(&self, input: &P::Input) -> Result<P::Output> {
        let variants = P::variants();
        let timed = execute_variants(&variants, input, 1);
        self.compare::<P>(&variants, input, &timed, true)?;
        timed
            .into_iter()
            .next()
            .map(|(output, _)| output)
            .ok_or_else(|| Error::invalid(P::SLUG, "no solution variants registered"))
    }

    fn compare<P: Problem>(
        &self,
        variants: &[Variant<P::Input, P::Output>],
        input: &P::Input,
        timed: &[(P::Output, u64)],
        strict: bool,
    ) -> Result<(Vec<VariantOutcome>, bool)> {
        let reference = timed.first().map(|(output, _)| output);
        let mut outcomes = Vec::with_capacity(timed.len());
        let mut consistent = true;

        for (variant, (output, elapsed_ns)) in variants.iter().zip(timed) {
            let agrees = reference.map_or(true, |expected| P::agree(input, expected, output));
            if !agrees {
                consistent = false;
                let expected = reference
                    .map(|e| render_debug(e, self.render_limit))
                    .unwrap_or_default();
                let actual = render_debug(output, self.render_limit);
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    slug = P::SLUG,
                    variant = variant.name,
                    %expected,
                    %actual,
                    "variant disagrees with reference"
                );
                if strict {
                    return Err(Error::Inconsistent {
                        problem: P::SLUG,
                        variant: variant.name,
                        input: render_debug(input, self.render_limit),
                        expected,
                        actual,
                    });
                }
            }
            outcomes.push(VariantOutcome {
                variant: variant.name,
                output: render_debug(output, self.render_limit),
                elapsed_ns: *elapsed_ns,
                agrees,
            });
        }

        Ok((outcomes, consistent))
    }
}

#[cfg(feature = "parallel")]
fn execute_variants<I: Sync, O: Send>(
    variants: &[Variant<I, O>],
    input: &I,
    repeats: usize,
) -> Vec<(O, u64)> {
    variants
        .par_iter()
        .map(|variant| time_variant(variant, input, repeats))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn execute_variants<I, O>(variants: &[Variant<I, O>], input: &I, repeats: usize) -> Vec<(O, u64)> {
    variants
        .iter()
        .map(|variant| time_variant(variant, input, repeats))
        .collect()
}

fn time_variant<I, O>(variant: &Variant<I, O>, input: &I, repeats: usize) -> (O, u64) {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("variant", name = variant.name, repeats).entered();

    let mut samples = Vec::with_capacity(repeats.max(1));
    let start = Instant::now();
    let output = variant.call(input);
    samples.push(elapsed_ns(start));
    for _ in 1..repeats {
        let start = Instant::now();
        black_box(variant.call(black_box(input)));
        samples.push(elapsed_ns(start));
    }
    (output, median_ns(&samples))
}

#[inline]
fn elapsed_ns(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Square;

    impl Problem for Square {
        type Input = i64;
        type Output = i64;
        const ID: u32 = 9000;
        const SLUG: &'static str = "square";
        const TITLE: &'static str = "Square";

        fn variants() -> Vec<Variant<i64, i64>> {
            vec![
                Variant::new("multiply", |x: &i64| x * x),
                Variant::new("pow", |x: &i64| x.pow(2)),
            ]
        }

        fn demo_cases() -> Vec<i64> {
            vec![0, 3, -4]
        }
    }

    struct Broken;

    impl Problem for Broken {
        type Input = i64;
        type Output = i64;
        const ID: u32 = 9001;
        const SLUG: &'static str = "broken";
        const TITLE: &'static str = "Broken";

        fn variants() -> Vec<Variant<i64, i64>> {
            vec![
                Variant::new("identity", |x: &i64| *x),
                Variant::new("off_by_one", |x: &i64| if *x > 1 { x + 1 } else { *x }),
            ]
        }

        fn demo_cases() -> Vec<i64> {
            vec![1, 2]
        }
    }

    struct Empty;

    impl Problem for Empty {
        type Input = ();
        type Output = ();
        const ID: u32 = 9002;
        const SLUG: &'static str = "empty";
        const TITLE: &'static str = "Empty";

        fn variants() -> Vec<Variant<(), ()>> {
            Vec::new()
        }

        fn demo_cases() -> Vec<()> {
            vec![()]
        }
    }

    #[test]
    fn consistent_problem_reports_all_cases() {
        let report = Runner::with_options(3, true).run::<Square>().unwrap();
        assert_eq!(report.id, 9000);
        assert_eq!(report.cases.len(), 3);
        assert!(report.is_consistent());
        assert_eq!(report.cases[2].outcomes[1].output, "16");
        assert_eq!(report.cases[2].input, "-4");
    }

    #[test]
    fn lenient_mode_records_disagreement() {
        let report = Runner::new().run::<Broken>().unwrap();
        assert!(report.cases[0].consistent);
        assert!(!report.cases[1].consistent);
        let bad: Vec<_> = report.cases[1].disagreements().map(|o| o.variant).collect();
        assert_eq!(bad, vec!["off_by_one"]);
    }

    #[test]
    fn strict_mode_fails_fast() {
        let err = Runner::with_options(1, true).run::<Broken>().unwrap_err();
        match err {
            Error::Inconsistent {
                problem,
                variant,
                expected,
                actual,
                ..
            } => {
                assert_eq!(problem, "broken");
                assert_eq!(variant, "off_by_one");
                assert_eq!(expected, "2");
                assert_eq!(actual, "3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn verify_returns_reference_output() {
        assert_eq!(Runner::new().verify::<Square>(&7).unwrap(), 49);
        assert!(Runner::new().verify::<Broken>(&5).is_err());
    }

    #[test]
    fn verify_without_variants_is_an_error() {
        let err = Runner::new().verify::<Empty>(&()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { problem: "empty", .. }));
        let report = Runner::new().run::<Empty>().unwrap();
        assert!(report.cases[0].outcomes.is_empty());
        assert!(report.is_consistent());
    }
}
