use crate::engine::Runner;

/// Fluent configuration for [`Runner`].
#[derive(Debug, Clone, Default)]
pub struct RunnerBuilder {
    repeats: Option<usize>,
    strict: bool,
    render_limit: Option<usize>,
}

impl RunnerBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    /// Number of timed executions per variant; 0 is treated as 1.
    pub fn repeats(mut self, repeats: usize) -> Self {
        self.repeats = Some(repeats);
        self
    }
    /// Fail on the first variant that disagrees with the reference.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
    pub fn render_limit(mut self, limit: usize) -> Self {
        self.render_limit = Some(limit);
        self
    }
    pub fn build(self) -> Runner {
        let mut runner = Runner::with_options(self.repeats.unwrap_or(1), self.strict);
        if let Some(limit) = self.render_limit {
            runner.set_render_limit(limit);
        }
        runner
    }
}
