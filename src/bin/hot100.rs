//! Console front end: list the catalog, run demonstrations, time variants.

use std::io::{self, Write};
use std::process;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use hot100::catalog::{self, Exercise};
use hot100::report::ProblemReport;
use hot100::utils::DEFAULT_RENDER_LIMIT;
use hot100::RunnerBuilder;
use serde::Serialize;
use sysinfo::{get_current_pid, ProcessRefreshKind, System};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Classic interview problems, each solved several ways and cross-checked
#[derive(Parser, Debug)]
#[command(name = "hot100")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Log verbosity: -d info, -dd debug, -ddd trace (RUST_LOG overrides)
    #[arg(short = 'd', long = "verbose", action = ArgAction::Count, global = true)]
    debug: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every problem with its solution variants
    List {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, env = "HOT100_FORMAT")]
        format: OutputFormat,
    },
    /// Run the demonstrations of the given problems (all when none given)
    Run(RunArgs),
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Problem numbers, slugs or categories (e.g. `5`, `two-sum`, `trees`)
    problems: Vec<String>,

    /// Timed executions per variant; the median is reported
    #[arg(short, long, default_value_t = 5, env = "HOT100_REPEAT")]
    repeat: usize,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, env = "HOT100_FORMAT")]
    format: OutputFormat,

    /// Abort on the first variant that disagrees with the reference
    #[arg(long)]
    strict: bool,

    /// Truncate rendered inputs and outputs to this many characters
    #[arg(long, default_value_t = DEFAULT_RENDER_LIMIT)]
    width: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let outcome = match &cli.command {
        Commands::List { format } => list(*format),
        Commands::Run(args) => run(args),
    };
    if let Err(e) = outcome {
        eprintln!("hot100: {e:#}");
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
    tracing::debug!(verbosity, "logging initialised");
}

#[derive(Serialize)]
struct ListRow {
    id: u32,
    slug: &'static str,
    title: &'static str,
    category: &'static str,
    variants: Vec<&'static str>,
    demo_cases: usize,
}

fn list(format: OutputFormat) -> Result<()> {
    let rows: Vec<ListRow> = catalog::all()
        .iter()
        .map(|e| ListRow {
            id: e.id(),
            slug: e.slug(),
            title: e.title(),
            category: e.category(),
            variants: e.variant_names(),
            demo_cases: e.demo_count(),
        })
        .collect();

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &rows).context("writing JSON")?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            writeln!(out, "id,slug,category,variants")?;
            for r in &rows {
                writeln!(out, "{},{},{},{}", r.id, r.slug, r.category, r.variants.join(";"))?;
            }
        }
        OutputFormat::Table => {
            let slug_w = rows.iter().map(|r| r.slug.len()).max().unwrap_or(4).max(4);
            writeln!(out, "{:>4}  {:<slug_w$}  {:<12}  variants", "id", "slug", "category")?;
            writeln!(out, "{:-<4}  {:-<slug_w$}  {:-<12}  {:-<8}", "", "", "", "")?;
            for r in &rows {
                writeln!(
                    out,
                    "{:>4}  {:<slug_w$}  {:<12}  {}",
                    r.id,
                    r.slug,
                    r.category,
                    r.variants.join(", ")
                )?;
            }
        }
    }
    Ok(())
}

/// One problem's report plus what was measured around it.
#[derive(Serialize)]
struct ProblemRun {
    #[serde(flatten)]
    report: ProblemReport,
    fastest_variant: Option<&'static str>,
    wall_ns: u64,
    rss_delta_kib: u64,
}

fn run(args: &RunArgs) -> Result<()> {
    let exercises = catalog::select(&args.problems).context("selecting problems")?;
    let runner = RunnerBuilder::new()
        .repeats(args.repeat)
        .strict(args.strict)
        .render_limit(args.width)
        .build();
    tracing::info!(
        problems = exercises.len(),
        repeats = runner.repeats(),
        strict = runner.is_strict(),
        "starting run"
    );

    let mut sys = System::new();
    let mut runs = Vec::with_capacity(exercises.len());
    for (idx, exercise) in exercises.iter().enumerate() {
        eprint!(
            "[{}/{}] #{} {}... ",
            idx + 1,
            exercises.len(),
            exercise.id(),
            exercise.slug()
        );
        let run = measure(exercise.as_ref(), &runner, &mut sys)
            .with_context(|| format!("running problem #{}", exercise.id()))?;
        eprintln!(
            "{} {} case(s) in {:?}",
            if run.report.is_consistent() { "✓" } else { "✗" },
            run.report.cases.len(),
            Duration::from_nanos(run.wall_ns)
        );
        runs.push(run);
    }

    let mut out = io::stdout().lock();
    match args.format {
        OutputFormat::Table => write_table(&mut out, &runs)?,
        OutputFormat::Csv => write_csv(&mut out, &runs)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &runs).context("writing JSON")?;
            writeln!(out)?;
        }
    }
    drop(out);

    print_summary(&runs);
    let inconsistent = runs.iter().filter(|r| !r.report.is_consistent()).count();
    if inconsistent > 0 {
        bail!("{inconsistent} problem(s) had variants disagreeing with their reference");
    }
    Ok(())
}

fn measure(exercise: &dyn Exercise, runner: &hot100::Runner, sys: &mut System) -> Result<ProblemRun> {
    let before = rss_kib(sys);
    let start = std::time::Instant::now();
    let report = exercise.run(runner)?;
    let wall_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
    let after = rss_kib(sys);

    Ok(ProblemRun {
        fastest_variant: report.fastest_variant(),
        report,
        wall_ns,
        rss_delta_kib: after.saturating_sub(before),
    })
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or(0, |process| process.memory() / 1024)
}

fn write_table(out: &mut impl Write, runs: &[ProblemRun]) -> Result<()> {
    for run in runs {
        let report = &run.report;
        writeln!(out, "#{} {} [{}]", report.id, report.title, report.slug)?;
        let name_w = report
            .cases
            .first()
            .map(|c| c.outcomes.iter().map(|o| o.variant.len()).max().unwrap_or(0))
            .unwrap_or(0);
        for (i, case) in report.cases.iter().enumerate() {
            writeln!(out, "  case {}: {}", i + 1, case.input)?;
            for o in &case.outcomes {
                writeln!(
                    out,
                    "    {} {:<name_w$}  {:>12}  {}",
                    if o.agrees { "✓" } else { "✗" },
                    o.variant,
                    format!("{:?}", o.elapsed()),
                    o.output
                )?;
            }
        }
        if let Some(fastest) = run.fastest_variant {
            writeln!(out, "  fastest: {fastest}")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn write_csv(out: &mut impl Write, runs: &[ProblemRun]) -> Result<()> {
    writeln!(out, "id,slug,case,variant,elapsed_ns,agrees,output")?;
    for run in runs {
        let report = &run.report;
        for (i, case) in report.cases.iter().enumerate() {
            for o in &case.outcomes {
                writeln!(
                    out,
                    "{},{},{},{},{},{},\"{}\"",
                    report.id,
                    report.slug,
                    i + 1,
                    o.variant,
                    o.elapsed_ns,
                    o.agrees,
                    o.output.replace('"', "\"\"")
                )?;
            }
        }
    }
    Ok(())
}

fn print_summary(runs: &[ProblemRun]) {
    let cases: usize = runs.iter().map(|r| r.report.cases.len()).sum();
    let failed: Vec<&ProblemRun> = runs.iter().filter(|r| !r.report.is_consistent()).collect();
    let wall: Duration = runs.iter().map(|r| Duration::from_nanos(r.wall_ns)).sum();
    let peak_rss = runs.iter().map(|r| r.rss_delta_kib).max().unwrap_or(0);

    eprintln!();
    eprintln!("{}", "=".repeat(60));
    eprintln!("problems: {}, cases: {}, wall: {:?}", runs.len(), cases, wall);
    eprintln!("largest rss delta: {peak_rss} KiB");
    if failed.is_empty() {
        eprintln!("✓ every variant agreed with its reference");
    } else {
        for run in failed {
            for case in run.report.cases.iter().filter(|c| !c.consistent) {
                let names: Vec<&str> = case.disagreements().map(|o| o.variant).collect();
                eprintln!(
                    "✗ #{} {} on {}: {}",
                    run.report.id,
                    run.report.slug,
                    case.input,
                    names.join(", ")
                );
            }
        }
    }
    eprintln!("{}", "=".repeat(60));
}
