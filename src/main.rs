use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use mazeworks::{Generator, generate, levels::Level, solve_maze};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Generate a perfect maze and optionally solve it
#[derive(Parser, Debug)]
#[command(name = "mazeworks", version, about, long_about = None)]
struct Cli {
    /// Maze generation algorithm
    #[arg(short, long, value_enum, default_value_t = Generator::RecurBacktrack)]
    algorithm: Generator,

    /// Number of cell rows
    #[arg(short, long, default_value_t = 10)]
    rows: usize,

    /// Number of cell columns
    #[arg(short, long, default_value_t = 10)]
    cols: usize,

    /// Random seed; OS entropy when omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Use a preset level (0-4) instead of algorithm/rows/cols
    #[arg(short, long)]
    level: Option<usize>,

    /// Overlay the shortest path from entry to exit
    #[arg(long)]
    solve: bool,

    /// Print every intermediate snapshot
    #[arg(long)]
    steps: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

/// Installs the global subscriber. The returned guard must outlive all logging.
fn init_tracing(log_file: Option<&Path>) -> mazeworks::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    match log_file {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(std::fs::File::create(path)?);
            builder.with_writer(writer).with_ansi(false).compact().init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(std::io::stderr).compact().init();
            Ok(None)
        }
    }
}

fn main() -> mazeworks::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_file.as_deref())?;

    let (generator, rows, cols) = match cli.level {
        Some(index) => {
            let level = Level::get(index)?;
            tracing::info!("Selected level {}: {}", index, level);
            (level.generator, level.rows, level.cols)
        }
        None => (cli.algorithm, cli.rows, cli.cols),
    };

    let mut stdout = std::io::stdout().lock();
    run(&mut stdout, &cli, generator, rows, cols)
}

/// Generates the maze and writes the requested snapshots, final maze and path to `out`.
fn run<W: Write>(
    out: &mut W,
    cli: &Cli,
    generator: Generator,
    rows: usize,
    cols: usize,
) -> mazeworks::Result<()> {
    let mut generation = generate(generator, rows, cols, cli.seed)?;
    if cli.steps {
        for (step, snapshot) in generation.by_ref().enumerate() {
            writeln!(out, "Step {}:\n{}", step + 1, snapshot)?;
        }
    }
    let steps = generation.steps();
    let maze = generation.finish();
    tracing::info!(
        "Generated a {}x{} maze with {} ({} steps)",
        rows,
        cols,
        generator,
        steps
    );

    if !cli.solve {
        // The last step already showed the finished maze
        if !cli.steps {
            write!(out, "{}", maze)?;
        }
        return Ok(());
    }

    let path = solve_maze(&maze);
    write!(out, "{}", maze.render_with_path(&path))?;
    if path.is_empty() {
        writeln!(out, "No path found to the goal.")?;
    } else {
        writeln!(out, "Path found! {} cells from entry to exit.", path.len())?;
    }
    Ok(())
}
