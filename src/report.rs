//! Result records produced by the runner.
//!
//! A `ProblemReport` groups one `CaseReport` per demo input; each case holds
//! one `VariantOutcome` per solution variant, reference first.

use serde::Serialize;
use std::time::Duration;

/// Outcome of a single variant on a single input.
#[derive(Debug, Clone, Serialize)]
pub struct VariantOutcome {
    pub variant: &'static str,
    /// `Debug` rendering of the output, possibly truncated.
    pub output: String,
    /// Median wall-clock time over the configured repeats, in nanoseconds.
    pub elapsed_ns: u64,
    /// Whether the output agrees with the reference variant.
    pub agrees: bool,
}

impl VariantOutcome {
    #[inline]
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns)
    }
}

/// All variant outcomes for one input.
#[derive(Debug, Clone, Serialize)]
pub struct CaseReport {
    /// `Debug` rendering of the input, possibly truncated.
    pub input: String,
    pub outcomes: Vec<VariantOutcome>,
    pub consistent: bool,
}

impl CaseReport {
    /// The reference variant's outcome, if any variant ran.
    pub fn reference(&self) -> Option<&VariantOutcome> {
        self.outcomes.first()
    }

    /// Variants that disagreed with the reference.
    pub fn disagreements(&self) -> impl Iterator<Item = &VariantOutcome> {
        self.outcomes.iter().filter(|o| !o.agrees)
    }
}

/// Demonstration run of one problem over all of its demo cases.
#[derive(Debug, Clone, Serialize)]
pub struct ProblemReport {
    pub id: u32,
    pub slug: &'static str,
    pub title: &'static str,
    pub cases: Vec<CaseReport>,
}

impl ProblemReport {
    pub fn is_consistent(&self) -> bool {
        self.cases.iter().all(|c| c.consistent)
    }

    /// Summed median times of every variant over every case.
    pub fn total_elapsed(&self) -> Duration {
        self.cases
            .iter()
            .flat_map(|c| c.outcomes.iter())
            .map(VariantOutcome::elapsed)
            .sum()
    }

    /// Variant with the smallest summed time across cases.
    ///
    /// Ties resolve to the variant listed first.
    pub fn fastest_variant(&self) -> Option<&'static str> {
        let first = self.cases.first()?;
        let mut totals: Vec<(&'static str, u64)> =
            first.outcomes.iter().map(|o| (o.variant, 0u64)).collect();
        for case in &self.cases {
            for (slot, outcome) in totals.iter_mut().zip(&case.outcomes) {
                slot.1 = slot.1.saturating_add(outcome.elapsed_ns);
            }
        }
        totals
            .iter()
            .enumerate()
            .min_by_key(|(idx, (_, ns))| (*ns, *idx))
            .map(|(_, (name, _))| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(variant: &'static str, elapsed_ns: u64, agrees: bool) -> VariantOutcome {
        VariantOutcome {
            variant,
            output: "1".into(),
            elapsed_ns,
            agrees,
        }
    }

    fn report() -> ProblemReport {
        ProblemReport {
            id: 1,
            slug: "two-sum",
            title: "Two Sum",
            cases: vec![
                CaseReport {
                    input: "a".into(),
                    outcomes: vec![outcome("slow", 50, true), outcome("fast", 10, true)],
                    consistent: true,
                },
                CaseReport {
                    input: "b".into(),
                    outcomes: vec![outcome("slow", 30, true), outcome("fast", 40, false)],
                    consistent: false,
                },
            ],
        }
    }

    #[test]
    fn consistency_requires_every_case() {
        let r = report();
        assert!(!r.is_consistent());
        assert_eq!(r.cases[1].disagreements().count(), 1);
        assert_eq!(r.cases[0].reference().map(|o| o.variant), Some("slow"));
    }

    #[test]
    fn totals_and_fastest() {
        let r = report();
        assert_eq!(r.total_elapsed(), Duration::from_nanos(130));
        assert_eq!(r.fastest_variant(), Some("fast"));
    }

    #[test]
    fn empty_report_has_no_fastest() {
        let r = ProblemReport {
            id: 0,
            slug: "x",
            title: "x",
            cases: Vec::new(),
        };
        assert!(r.is_consistent());
        assert_eq!(r.fastest_variant(), None);
    }
}
