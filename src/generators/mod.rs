use std::iter::FusedIterator;

use rand::{Rng, SeedableRng, rngs::StdRng};

mod aldous_broder;
mod binary_tree;
mod hunt_and_kill;
mod prim;
mod recur_backtrack;
mod recur_div;
mod sidewinder;
mod wilson;

use aldous_broder::AldousBroder;
use binary_tree::BinaryTree;
use hunt_and_kill::HuntAndKill;
use prim::Prim;
use recur_backtrack::RecurBacktrack;
use recur_div::RecurDiv;
use sidewinder::Sidewinder;
use wilson::Wilson;

use crate::error::{Result, check_dimensions};
use crate::maze::Maze;

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Picks one element uniformly at random. `items` must not be empty.
fn pick<T: Copy, R: Rng>(rng: &mut R, items: &[T]) -> T {
    items[rng.random_range(0..items.len())]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Generator {
    #[value(name = "dfs")]
    RecurBacktrack,
    Prim,
    HuntAndKill,
    BinaryTree,
    Sidewinder,
    Wilson,
    AldousBroder,
    #[value(name = "recursive-division")]
    RecurDiv,
}

impl Generator {
    pub const ALL: [Generator; 8] = [
        Generator::RecurBacktrack,
        Generator::Prim,
        Generator::HuntAndKill,
        Generator::BinaryTree,
        Generator::Sidewinder,
        Generator::Wilson,
        Generator::AldousBroder,
        Generator::RecurDiv,
    ];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracker (DFS)"),
            Generator::Prim => write!(f, "Randomized Prim's Algorithm"),
            Generator::HuntAndKill => write!(f, "Hunt-and-Kill"),
            Generator::BinaryTree => write!(f, "Binary Tree"),
            Generator::Sidewinder => write!(f, "Sidewinder"),
            Generator::Wilson => write!(f, "Wilson's Algorithm"),
            Generator::AldousBroder => write!(f, "Aldous-Broder"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
        }
    }
}

/// Outcome of advancing a generator by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Progress {
    /// The grid changed in a way worth showing.
    Stepped,
    /// The spanning tree is complete; nothing was changed.
    Done,
}

/// A maze generation algorithm expressed as a resumable state machine.
trait Carver {
    fn step<R: Rng>(&mut self, maze: &mut Maze, rng: &mut R) -> Progress;
}

enum State {
    RecurBacktrack(RecurBacktrack),
    Prim(Prim),
    HuntAndKill(HuntAndKill),
    BinaryTree(BinaryTree),
    Sidewinder(Sidewinder),
    Wilson(Wilson),
    AldousBroder(AldousBroder),
    RecurDiv(RecurDiv),
}

impl State {
    fn new<R: Rng>(generator: Generator, maze: &mut Maze, rng: &mut R) -> Self {
        match generator {
            Generator::RecurBacktrack => State::RecurBacktrack(RecurBacktrack::new(maze)),
            Generator::Prim => State::Prim(Prim::new(maze, rng)),
            Generator::HuntAndKill => State::HuntAndKill(HuntAndKill::new(maze)),
            Generator::BinaryTree => State::BinaryTree(BinaryTree::new()),
            Generator::Sidewinder => State::Sidewinder(Sidewinder::new()),
            Generator::Wilson => State::Wilson(Wilson::new(maze, rng)),
            Generator::AldousBroder => State::AldousBroder(AldousBroder::new(maze, rng)),
            Generator::RecurDiv => State::RecurDiv(RecurDiv::new(maze)),
        }
    }

    fn step<R: Rng>(&mut self, maze: &mut Maze, rng: &mut R) -> Progress {
        match self {
            State::RecurBacktrack(carver) => carver.step(maze, rng),
            State::Prim(carver) => carver.step(maze, rng),
            State::HuntAndKill(carver) => carver.step(maze, rng),
            State::BinaryTree(carver) => carver.step(maze, rng),
            State::Sidewinder(carver) => carver.step(maze, rng),
            State::Wilson(carver) => carver.step(maze, rng),
            State::AldousBroder(carver) => carver.step(maze, rng),
            State::RecurDiv(carver) => carver.step(maze, rng),
        }
    }
}

/// A running maze generation.
///
/// Iterating yields an owned snapshot of the maze after every visible step,
/// then one last snapshot of the finished maze with its entry and exit opened,
/// then `None`. Snapshots are independent copies, so they can be kept around
/// while generation continues. The random source is consumed identically
/// whether the caller looks at every snapshot or jumps to the end with
/// [`Generation::finish`].
pub struct Generation<R> {
    generator: Generator,
    maze: Maze,
    rng: R,
    state: State,
    steps: usize,
    finished: bool,
    exhausted: bool,
}

impl<R: Rng> Generation<R> {
    fn new(generator: Generator, rows: usize, cols: usize, mut rng: R) -> Result<Self> {
        check_dimensions(rows, cols)?;
        let mut maze = Maze::new(rows, cols);
        let state = State::new(generator, &mut maze, &mut rng);
        tracing::debug!("[generate] {} on a {}x{} grid", generator, rows, cols);
        Ok(Generation {
            generator,
            maze,
            rng,
            state,
            steps: 0,
            finished: false,
            exhausted: false,
        })
    }

    /// The algorithm driving this generation.
    pub fn generator(&self) -> Generator {
        self.generator
    }

    /// The live maze. Incomplete until [`Generation::is_finished`] is true.
    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    /// Number of intermediate steps taken so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether the spanning tree is complete and entry/exit have been opened.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn advance(&mut self) -> bool {
        match self.state.step(&mut self.maze, &mut self.rng) {
            Progress::Stepped => {
                self.steps += 1;
                true
            }
            Progress::Done => {
                self.maze.setup_entry_exit();
                self.finished = true;
                tracing::debug!(
                    "[generate] {} finished after {} steps",
                    self.generator,
                    self.steps
                );
                false
            }
        }
    }

    /// Runs the remaining steps without taking snapshots and returns the finished maze.
    pub fn finish(mut self) -> Maze {
        while !self.finished {
            self.advance();
        }
        self.maze
    }
}

impl<R: Rng> Iterator for Generation<R> {
    type Item = Maze;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if !self.finished && self.advance() {
            return Some(self.maze.clone());
        }
        self.exhausted = true;
        Some(self.maze.clone())
    }
}

impl<R: Rng> FusedIterator for Generation<R> {}

/// Starts generating a `rows x cols` maze, seeded for reproducibility or from OS entropy.
///
/// # Errors
/// [`crate::MazeError::InvalidDimensions`] if either dimension is zero.
pub fn generate(
    generator: Generator,
    rows: usize,
    cols: usize,
    seed: Option<u64>,
) -> Result<Generation<StdRng>> {
    Generation::new(generator, rows, cols, get_rng(seed))
}

/// Starts generating a maze drawing randomness from `rng`.
///
/// # Errors
/// [`crate::MazeError::InvalidDimensions`] if either dimension is zero.
pub fn generate_with_rng<R: Rng>(
    generator: Generator,
    rows: usize,
    cols: usize,
    rng: R,
) -> Result<Generation<R>> {
    Generation::new(generator, rows, cols, rng)
}

/// Generates a finished maze in one go.
///
/// # Errors
/// [`crate::MazeError::InvalidDimensions`] if either dimension is zero.
pub fn generate_maze(
    generator: Generator,
    rows: usize,
    cols: usize,
    seed: Option<u64>,
) -> Result<Maze> {
    Ok(generate(generator, rows, cols, seed)?.finish())
}

#[cfg(test)]
pub(crate) mod test_utils {
    use rand::RngCore;

    /// Random source that only ever produces zero bits, so every uniform
    /// pick lands on the first candidate and every coin flip succeeds.
    pub struct ZeroRng;

    impl RngCore for ZeroRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            dst.fill(0);
        }
    }
}
