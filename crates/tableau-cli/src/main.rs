use clap::Parser;
use log::{info, LevelFilter};
use std::path::PathBuf;
use std::process::exit;

use tableau_format::{format_solution, format_tableau, read_tableau, Report};
use tableau_solver::{SimplexError, Solution, Solver, SolverState};

#[derive(Parser)]
#[command(name = "tableau")]
#[command(about = "Maximize a linear program given as a canonical-form simplex tableau", long_about = None)]
struct Cli {
    /// Tableau file: one row per line, objective row first
    file: PathBuf,
    /// Maximum number of pivots
    #[arg(long, default_value_t = 10000)]
    max_iterations: usize,
    /// Tolerance for floating point comparisons
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,
    /// Pivot even when the constraint columns hold no identity basis
    #[arg(long)]
    skip_canonical_check: bool,
    /// Print the tableau before and after optimizing
    #[arg(long)]
    show_tableau: bool,
    /// Output format (pretty, json)
    #[arg(short, long, default_value = "pretty")]
    format: String,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logger(log_level: LevelFilter) -> Result<(), log::SetLoggerError> {
    use fern::colors::{Color, ColoredLevelConfig};
    let colors = ColoredLevelConfig::new()
        .debug(Color::White)
        .info(Color::Green)
        .warn(Color::BrightYellow)
        .error(Color::BrightRed);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} | {:5} | {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.6f"),
                colors.color(record.level()),
                message
            ))
        })
        .level(log_level)
        .chain(std::io::stderr())
        .apply()
}

fn exit_code(error: &SimplexError) -> i32 {
    match error.state() {
        SolverState::Rejected => 2,
        SolverState::Failed => 3,
        _ => 1,
    }
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = setup_logger(level) {
        eprintln!("Error initializing logger: {}", e);
    }

    let source = match std::fs::read_to_string(&cli.file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            exit(1);
        }
    };

    let mut tableau = match read_tableau(&source) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error reading tableau: {}", e);
            exit(1);
        }
    };
    info!(
        "loaded {} with {} constraints and {} variables",
        cli.file.display(),
        tableau.num_constraints(),
        tableau.num_variables()
    );

    let solver = Solver::new()
        .with_max_iterations(cli.max_iterations)
        .with_tolerance(cli.tolerance)
        .with_canonical_check(!cli.skip_canonical_check);
    info!("canonical form: {}", solver.is_canonical(&tableau));

    if cli.show_tableau {
        println!("Initial tableau:");
        print!("{}", format_tableau(&tableau, 4));
        println!();
    }

    let result: Result<Solution, SimplexError> = solver
        .optimize(&mut tableau)
        .map(|stats| Solution::extract(&tableau, stats.pivots, solver.tolerance()));

    if cli.show_tableau && result.is_ok() {
        println!("Final tableau:");
        print!("{}", format_tableau(&tableau, 4));
        println!();
    }

    if cli.format == "json" {
        let report = Report::from_result(&result);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                exit(1);
            }
        }
    }

    match result {
        Ok(solution) => {
            info!("optimal after {} pivots", solution.iterations);
            if cli.format != "json" {
                print!("{}", format_solution(&solution));
            }
        }
        Err(e) => {
            info!("solve ended {:?}", e.state());
            if cli.format != "json" {
                eprintln!("Error: {}", e);
            }
            exit(exit_code(&e));
        }
    }
}
