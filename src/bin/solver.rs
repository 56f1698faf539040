use clap::Parser;
use mazesearch::{
    config::SolverConfig,
    render::{clear_frames, render_grid, FrameRecorder, RenderOptions},
    search::{
        validate, AstarCost, Grid, SearchOutcome, SearchResult, Solution, Strategy, Verbosity,
    },
};
use serde::Serialize;
use std::{path::PathBuf, process::ExitCode, time::Duration};
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(version)]
/// Solve a text maze with a choice of search strategies.
struct Cli {
    #[arg(
        help = "The maze file",
        short = 'f',
        long = "file",
        id = "FILE",
        default_value = "maze.txt"
    )]
    maze: PathBuf,
    #[arg(
        value_enum,
        help = "The search strategy to use [default: dfs]",
        short = 's',
        long = "search",
        id = "STRATEGY"
    )]
    strategy: Option<Strategy>,
    #[arg(help = "Seed for the neighbour shuffle, random if not set", long = "seed")]
    seed: Option<u64>,
    #[arg(
        value_enum,
        help = "How A* measures the cost to reach a node [default: start-distance]",
        long = "astar-cost",
        id = "COST"
    )]
    astar_cost: Option<AstarCost>,
    #[arg(help = "Stop after this many expansions", long = "expansion-limit")]
    expansion_limit: Option<usize>,
    #[arg(
        help = "Stop after this long, e.g. 30s or 1m",
        long = "time-limit",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(help = "Stop when memory use exceeds this many MB", long = "memory-limit")]
    memory_limit_mb: Option<usize>,
    #[arg(help = "Write one frame per expansion", long = "animate")]
    animate: bool,
    #[arg(
        help = "Directory for animation frames",
        long = "frames-dir",
        id = "DIR",
        default_value = "tmp"
    )]
    frames_dir: PathBuf,
    #[arg(help = "Mark explored cells in the rendered maze", long = "show-explored")]
    show_explored: bool,
    #[arg(help = "Write a JSON report to this file", short = 'o', long = "output")]
    report: Option<PathBuf>,
    #[arg(help = "A TOML config file, flags take priority", long = "config")]
    config: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

impl Cli {
    /// Fold the command line flags into `config`.
    fn merge_into(&self, mut config: SolverConfig) -> SolverConfig {
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(astar_cost) = self.astar_cost {
            config.astar_cost = astar_cost;
        }
        config.seed = self.seed.or(config.seed);
        config.expansion_limit = self.expansion_limit.or(config.expansion_limit);
        if let Some(time_limit) = self.time_limit {
            config.time_limit = Some(humantime::format_duration(time_limit).to_string());
        }
        config.memory_limit_mb = self.memory_limit_mb.or(config.memory_limit_mb);
        config.show_explored |= self.show_explored;
        config
    }
}

#[derive(Serialize)]
struct Report<'a> {
    maze: &'a PathBuf,
    strategy: Strategy,
    seed: u64,
    outcome: &'static str,
    solution: Option<&'a Solution>,
    solution_length: Option<usize>,
    explored_count: usize,
    expanded_nodes: usize,
    generated_nodes: usize,
    pruned_nodes: usize,
    peak_frontier_size: usize,
    search_time_secs: f64,
}

fn outcome_name(outcome: &SearchOutcome) -> &'static str {
    match outcome {
        SearchOutcome::Solved(_) => "solved",
        SearchOutcome::Unsolvable => "unsolvable",
        SearchOutcome::ExpansionLimitReached => "expansion-limit-reached",
        SearchOutcome::TimeLimitExceeded => "time-limit-exceeded",
        SearchOutcome::MemoryLimitExceeded => "memory-limit-exceeded",
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => SolverConfig::from_path(path)?,
        None => SolverConfig::default(),
    };
    let config = cli.merge_into(config);

    let grid = Grid::from_path(&cli.maze)?;
    info!(
        height = grid.height(),
        width = grid.width(),
        open_cells = grid.open_cells(),
        "loaded maze"
    );

    let engine = config.create_engine()?;
    info!(seed = engine.seed(), "rerun with --seed to reproduce");

    let render_options = RenderOptions {
        show_explored: config.show_explored,
        colour: cli.colour,
    };
    let result = if cli.animate {
        clear_frames(&cli.frames_dir)?;
        let frame_options = RenderOptions {
            show_explored: true,
            ..render_options
        };
        let mut recorder = FrameRecorder::new(&grid, &cli.frames_dir, frame_options);
        let result = engine.solve_with_observer(&grid, &mut recorder);
        match recorder.finish() {
            Ok(frames) => info!(frames, dir = %cli.frames_dir.display(), "wrote animation frames"),
            Err(e) => warn!("animation incomplete: {}", e),
        }
        result
    } else {
        engine.solve(&grid)
    };

    print_result(&grid, &result, &render_options);

    if let Some(path) = &cli.report {
        let report = Report {
            maze: &cli.maze,
            strategy: engine.strategy(),
            seed: engine.seed(),
            outcome: outcome_name(&result.outcome),
            solution: result.solution(),
            solution_length: result.solution().map(|solution| solution.len()),
            explored_count: result.explored_count,
            expanded_nodes: result.statistics.expanded_nodes(),
            generated_nodes: result.statistics.generated_nodes(),
            pruned_nodes: result.statistics.pruned_nodes(),
            peak_frontier_size: result.statistics.peak_frontier_size(),
            search_time_secs: result.statistics.search_duration().as_secs_f64(),
        };
        std::fs::write(path, serde_json::to_string_pretty(&report)?)?;
        info!(path = %path.display(), "wrote report");
    }
    Ok(())
}

fn print_result(grid: &Grid, result: &SearchResult, options: &RenderOptions) {
    let solution = result.solution();
    if let Some(solution) = solution {
        info!("validating solution");
        match validate(solution, grid) {
            Ok(()) => info!("solution is valid"),
            Err(e) => warn!("solution is invalid: {}", e),
        }
    }

    print!(
        "{}",
        render_grid(grid, options, solution, &result.explored, None)
    );
    println!();
    match solution {
        Some(solution) => {
            println!("Solution is {} steps", solution.len());
            println!(
                "Time to solve: {}",
                humantime::format_duration(result.statistics.search_duration())
            );
        }
        None => {
            info!(outcome = outcome_name(&result.outcome));
            println!("No solution.");
        }
    }
    println!("Explored {} nodes.", result.explored_count);
}
