use std::rc::Rc;

mod bfs;
mod dfs;

use crate::maze::{Coord, Maze};
use bfs::solve_bfs;
use dfs::solve_dfs;

struct TrackedCell {
    /// Coordinates of the cell in the maze
    coord: Coord,
    /// The parent cell from which this cell was reached
    parent: Option<Rc<TrackedCell>>,
}

impl TrackedCell {
    fn root(coord: Coord) -> Rc<Self> {
        Rc::new(TrackedCell {
            coord,
            parent: None,
        })
    }

    fn child(parent: &Rc<TrackedCell>, coord: Coord) -> Rc<Self> {
        Rc::new(TrackedCell {
            coord,
            parent: Some(Rc::clone(parent)),
        })
    }

    /// Walks the parent chain back to the root and returns it root first.
    fn path(&self) -> Vec<Coord> {
        let mut path = vec![self.coord];
        let mut child = self;
        while let Some(parent) = child.parent.as_ref() {
            path.push(parent.coord);
            child = parent.as_ref();
        }
        path.reverse();
        path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Solver {
    #[default]
    Bfs,
    Dfs,
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// Shortest path from the entry to the exit, both included.
/// Empty when the exit cannot be reached. The maze is not modified.
pub fn solve_maze(maze: &Maze) -> Vec<Coord> {
    solve_maze_with(maze, Solver::Bfs)
}

/// Path from the entry to the exit using the given search.
/// On a perfect maze every solver returns the same, unique path.
pub fn solve_maze_with(maze: &Maze, solver: Solver) -> Vec<Coord> {
    let start = maze.entry();
    let goal = maze.exit();
    let path = match solver {
        Solver::Bfs => solve_bfs(maze, start, goal),
        Solver::Dfs => solve_dfs(maze, start, goal),
    };
    if path.is_empty() {
        tracing::debug!("[solve] {} found no path to {:?}", solver, goal);
    } else {
        tracing::debug!("[solve] {} found a path of {} cells", solver, path.len());
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::test_utils::ZeroRng;
    use crate::generators::{Generator, generate, generate_maze, generate_with_rng};

    #[test]
    fn test_golden_dfs_3x3() {
        let maze = generate_with_rng(Generator::RecurBacktrack, 3, 3, ZeroRng)
            .unwrap()
            .finish();
        let path = solve_maze(&maze);
        assert_eq!(path.len(), 9);
        assert_eq!(
            path,
            vec![
                (0, 0),
                (1, 0),
                (2, 0),
                (2, 1),
                (1, 1),
                (0, 1),
                (0, 2),
                (1, 2),
                (2, 2)
            ]
        );
        assert!(path.windows(2).all(|w| maze.is_open_between(w[0], w[1])));
    }

    #[test]
    fn test_golden_seeded_dfs_3x3() {
        let maze = generate(Generator::RecurBacktrack, 3, 3, Some(1))
            .unwrap()
            .finish();
        let path = solve_maze(&maze);
        assert_eq!(path.len(), 7);
        assert_eq!(
            path,
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (1, 1), (2, 1), (2, 2)]
        );
        assert!(path.windows(2).all(|w| maze.is_open_between(w[0], w[1])));
    }

    #[test]
    fn test_solvers_agree_on_perfect_mazes() {
        for generator in Generator::ALL {
            let maze = generate_maze(generator, 9, 12, Some(5)).unwrap();
            let bfs = solve_maze_with(&maze, Solver::Bfs);
            let dfs = solve_maze_with(&maze, Solver::Dfs);
            assert!(!bfs.is_empty(), "{generator}");
            assert_eq!(bfs, dfs, "{generator}");
        }
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let maze = generate_maze(Generator::Wilson, 7, 7, Some(21)).unwrap();
        let before = maze.clone();
        assert_eq!(solve_maze(&maze), solve_maze(&maze));
        assert_eq!(maze, before);
    }

    #[test]
    fn test_unreachable_exit() {
        let mut maze = Maze::new(3, 3);
        maze.setup_entry_exit();
        assert!(solve_maze(&maze).is_empty());
        assert!(solve_maze_with(&maze, Solver::Dfs).is_empty());
    }

    #[test]
    fn test_single_cell() {
        let mut maze = Maze::new(1, 1);
        maze.setup_entry_exit();
        assert_eq!(solve_maze(&maze), vec![(0, 0)]);
        assert_eq!(solve_maze_with(&maze, Solver::Dfs), vec![(0, 0)]);
    }

    #[test]
    fn test_tracked_cell_path() {
        let root = TrackedCell::root((0, 0));
        let mid = TrackedCell::child(&root, (0, 1));
        let leaf = TrackedCell::child(&mid, (1, 1));
        assert_eq!(leaf.path(), vec![(0, 0), (0, 1), (1, 1)]);
        assert_eq!(root.path(), vec![(0, 0)]);
    }
}
