use std::time::{Duration, Instant};

use mazeworks::{Generator, generate, solve_maze};
use tracing_subscriber::EnvFilter;

const SIZE: usize = 64;

fn main() -> mazeworks::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    let mut args = std::env::args();
    args.next(); // Skip executable name
    let num_iters = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(1);

    for generator in Generator::ALL {
        let mut generating = Duration::ZERO;
        let mut animating = Duration::ZERO;
        let mut solving = Duration::ZERO;
        let mut snapshots = 0;
        for seed in 0..num_iters {
            let started = Instant::now();
            let maze = generate(generator, SIZE, SIZE, Some(seed))?.finish();
            generating += started.elapsed();

            // Same maze again, this time paying for every snapshot
            let started = Instant::now();
            snapshots += generate(generator, SIZE, SIZE, Some(seed))?.count();
            animating += started.elapsed();

            let started = Instant::now();
            let path = solve_maze(&maze);
            solving += started.elapsed();
            tracing::debug!("[profile] seed {} path length {}", seed, path.len());
        }
        tracing::info!(
            "{}: {} runs on {}x{}, generate {:?}, {} snapshots in {:?}, solve {:?}",
            generator,
            num_iters,
            SIZE,
            SIZE,
            generating,
            snapshots,
            animating,
            solving
        );
    }
    Ok(())
}
