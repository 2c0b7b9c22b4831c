//! Command-line entry point.
//!
//! This module is the thin integration layer between the Algoscope library and
//! a terminal. It translates command-line arguments into library events, runs
//! the resulting actions through the [`RunWorker`], and presents each step in
//! one of three output formats.
//!
//! # Output Formats
//!
//! - `animate`: Redraws the full visualizer frame after every step, paced by
//!   the configured delays
//! - `log`: Prints the thought log, one line per step, without pacing
//! - `json`: Prints one `RunUpdate` per line, then the `RunReport`, without
//!   pacing
//!
//! `--delay-ms` forces pacing in every format.
//!
//! # Event Mapping
//!
//! - `sort` → `ShowSorting`, `SelectSort`, `LoadValues`/`Randomize`, `Run`
//! - `search` → `ShowSearching`, `SelectSearch`, `LoadValues`/`Randomize`,
//!   `SetTarget`, `SortArray` (with `--sort-first`), `Run`

#![allow(clippy::multiple_crate_versions)]

use std::io::Write;
use std::num::NonZeroUsize;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use algoscope::algorithms::{first_descent, SearchAlgorithm, SortAlgorithm};
use algoscope::domain::Sequence;
use algoscope::infrastructure::expand_tilde;
use algoscope::worker::{drive, RunWorker};
use algoscope::{handle_event, observability, ui, Action, AlgoscopeError, AppState, Config, Event};

const CLEAR_SCREEN: &str = "\u{1b}[H\u{1b}[2J";

#[derive(Parser)]
#[command(
    name = "algoscope",
    about = "Step-by-step sorting and searching visualizer",
    version
)]
struct Cli {
    /// Configuration file. Defaults to $XDG_CONFIG_HOME/algoscope/config.toml.
    #[arg(long, global = true, env = "ALGOSCOPE_CONFIG")]
    config: Option<String>,

    /// Pause after each step, overriding the configured delays.
    #[arg(long = "delay-ms", global = true)]
    delay_ms: Option<u64>,

    #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Animate)]
    output: OutputFormat,

    /// Cancel the run after this many steps. Must be at least 1.
    #[arg(long = "max-steps", global = true)]
    max_steps: Option<NonZeroUsize>,

    /// Frame width in columns.
    #[arg(long, global = true, default_value_t = 80)]
    width: usize,

    /// Frame height in rows.
    #[arg(long, global = true, default_value_t = 40)]
    height: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Visualize a sorting algorithm.
    Sort {
        /// bubble, insertion or selection.
        #[arg(long, default_value = "bubble")]
        algorithm: SortAlgorithm,

        /// Values separated by commas or spaces. Defaults to a sample sequence.
        #[arg(long, conflicts_with = "random", allow_hyphen_values = true)]
        values: Option<String>,

        /// Draw a random sequence instead.
        #[arg(long)]
        random: bool,

        /// Stop Bubble Sort after a pass without swaps.
        #[arg(long = "early-exit")]
        early_exit: bool,
    },

    /// Visualize a searching algorithm.
    Search {
        /// linear, binary or jump.
        #[arg(long, default_value = "linear")]
        algorithm: SearchAlgorithm,

        /// Values separated by commas or spaces. Defaults to a sample sequence.
        #[arg(long, conflicts_with = "random", allow_hyphen_values = true)]
        values: Option<String>,

        /// Draw a random sequence instead.
        #[arg(long)]
        random: bool,

        /// Value to look for. Defaults to the sample target.
        #[arg(long, allow_hyphen_values = true)]
        target: Option<i64>,

        /// Sort the sequence before a Binary or Jump search.
        #[arg(long = "sort-first")]
        sort_first: bool,
    },

    /// List the available algorithms.
    List,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Animate,
    Log,
    Json,
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> algoscope::Result<()> {
    let config_path = cli.config.as_deref().map(expand_tilde);
    let mut config = Config::load(config_path.as_deref())?;
    if let Command::Sort { early_exit: true, .. } = cli.command {
        config.bubble_early_exit = true;
    }
    observability::init_tracing(&config);

    let _span = tracing::debug_span!("cli", output = ?cli.output).entered();

    let mut state = algoscope::initialize(&config);
    let events = match &cli.command {
        Command::List => {
            print_catalog();
            return Ok(());
        }
        Command::Sort {
            algorithm,
            values,
            random,
            ..
        } => {
            let mut events = vec![Event::ShowSorting, Event::SelectSort(*algorithm)];
            events.extend(input_event(values.as_deref(), *random, config.sort_max_len)?);
            events
        }
        Command::Search {
            algorithm,
            values,
            random,
            target,
            ..
        } => {
            let mut events = vec![Event::ShowSearching, Event::SelectSearch(*algorithm)];
            events.extend(input_event(values.as_deref(), *random, config.search_max_len)?);
            events.extend(target.map(Event::SetTarget));
            events
        }
    };

    for event in &events {
        handle_event(&mut state, event)?;
    }

    if let Command::Search { sort_first, .. } = cli.command {
        prepare_search(&mut state, sort_first)?;
    }

    let (_, actions) = handle_event(&mut state, &Event::Run)?;

    let mut worker = RunWorker::new(&config);
    worker = match (cli.delay_ms, cli.output) {
        (Some(delay), _) => worker.with_delays(delay, delay),
        (None, OutputFormat::Animate) => worker,
        (None, _) => worker.with_delays(0, 0),
    };

    match cli.output {
        OutputFormat::Json => run_json(&actions, &worker, cli.max_steps),
        OutputFormat::Log => run_log(&mut state, actions, &worker, cli.max_steps),
        OutputFormat::Animate => {
            run_animated(&mut state, actions, &worker, cli.max_steps, cli.height, cli.width)
        }
    }
}

/// Event that loads the requested sequence, if any.
fn input_event(values: Option<&str>, random: bool, max_len: usize) -> algoscope::Result<Option<Event>> {
    if random {
        return Ok(Some(Event::Randomize));
    }
    values
        .map(|text| Sequence::parse(text, max_len).map(Event::LoadValues))
        .transpose()
}

/// Sorts the search input when asked to, or refuses unsorted input for
/// algorithms that need ascending values.
fn prepare_search(state: &mut AppState, sort_first: bool) -> algoscope::Result<()> {
    if !state.search.needs_sorting {
        return Ok(());
    }
    if sort_first {
        handle_event(state, &Event::SortArray)?;
        return Ok(());
    }
    match first_descent(&state.search.values) {
        Some(index) => Err(AlgoscopeError::Unsorted { index }),
        None => Ok(()),
    }
}

fn run_json(actions: &[Action], worker: &RunWorker, max_steps: Option<NonZeroUsize>) -> algoscope::Result<()> {
    let token = worker.cancel_token();
    let mut stdout = std::io::stdout().lock();

    for Action::StartRun(request) in actions {
        let mut steps = 0;
        let mut write_error = None;
        let report = worker.execute(request, &mut |update| {
            steps += 1;
            if max_steps.is_some_and(|max| steps >= max.get()) {
                token.cancel();
            }
            if write_error.is_none() {
                if let Err(e) = serde_json::to_writer(&mut stdout, &update) {
                    write_error = Some(AlgoscopeError::from(e));
                } else if let Err(e) = writeln!(stdout) {
                    write_error = Some(AlgoscopeError::from(e));
                }
            }
        })?;
        if let Some(e) = write_error {
            return Err(e);
        }
        serde_json::to_writer(&mut stdout, &report)?;
        writeln!(stdout)?;
    }
    Ok(())
}

fn run_log(
    state: &mut AppState,
    actions: Vec<Action>,
    worker: &RunWorker,
    max_steps: Option<NonZeroUsize>,
) -> algoscope::Result<()> {
    let token = worker.cancel_token();
    let mut printed = 0;
    print_new_lines(state, &mut printed);

    drive(state, actions, worker, &mut |state| {
        if max_steps.is_some_and(|max| state.steps_applied >= max.get()) {
            token.cancel();
        }
        print_new_lines(state, &mut printed);
    })?;
    Ok(())
}

fn print_new_lines(state: &AppState, printed: &mut usize) {
    let log = state.active_log();
    for line in log.iter().skip(*printed) {
        println!("{line}");
    }
    *printed = log.len();
}

fn run_animated(
    state: &mut AppState,
    actions: Vec<Action>,
    worker: &RunWorker,
    max_steps: Option<NonZeroUsize>,
    rows: usize,
    cols: usize,
) -> algoscope::Result<()> {
    let token = worker.cancel_token();
    let mut stdout = std::io::stdout();
    write!(stdout, "{CLEAR_SCREEN}{}", ui::render(state, rows, cols))?;
    stdout.flush()?;

    let mut frame_error = None;
    drive(state, actions, worker, &mut |state| {
        if max_steps.is_some_and(|max| state.steps_applied >= max.get()) {
            token.cancel();
        }
        let frame = ui::render(state, rows, cols);
        if let Err(e) = write!(stdout, "{CLEAR_SCREEN}{frame}").and_then(|()| stdout.flush()) {
            tracing::warn!(error = %e, "failed to draw frame");
            token.cancel();
            if frame_error.is_none() {
                frame_error = Some(e);
            }
        }
    })?;

    if let Some(e) = frame_error {
        return Err(e.into());
    }
    writeln!(stdout)?;
    Ok(())
}

fn print_catalog() {
    println!("Sorting:");
    for algorithm in SortAlgorithm::ALL {
        println!(
            "  {:<10} {:<16} time {:<12} space {:<6} {}",
            algorithm.key(),
            algorithm.name(),
            algorithm.time_complexity(),
            algorithm.space_complexity(),
            algorithm.description()
        );
    }
    println!("Searching:");
    for algorithm in SearchAlgorithm::ALL {
        let note = if algorithm.requires_sorted() {
            " (sorted input)"
        } else {
            ""
        };
        println!(
            "  {:<10} {:<16} time {:<12} space {:<6} {}{note}",
            algorithm.key(),
            algorithm.name(),
            algorithm.time_complexity(),
            algorithm.space_complexity(),
            algorithm.description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_steps_must_be_positive() {
        assert!(Cli::try_parse_from(["algoscope", "--max-steps", "0", "sort"]).is_err());

        let cli = Cli::try_parse_from(["algoscope", "--max-steps", "3", "sort"]).unwrap();
        assert_eq!(cli.max_steps.map(NonZeroUsize::get), Some(3));
    }

    #[test]
    fn search_flags_parse() {
        let cli = Cli::try_parse_from([
            "algoscope", "search", "--algorithm", "binary", "--values", "-3 1 9", "--target", "-3",
            "--sort-first",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Search {
                algorithm: SearchAlgorithm::Binary,
                target: Some(-3),
                sort_first: true,
                ..
            }
        ));
    }
}
