use std::collections::VecDeque;

use mazeworks::{Direction, Generator, Maze, generate, generate_maze, solve_maze};
use rand::{SeedableRng, rngs::StdRng};

const SIZES: [(usize, usize); 7] = [(1, 1), (1, 7), (7, 1), (2, 2), (3, 3), (5, 8), (40, 40)];

/// Number of cells reachable from the entry through open walls.
fn flood_fill(maze: &Maze) -> usize {
    let mut seen = vec![false; maze.len()];
    let mut queue = VecDeque::from([maze.entry()]);
    seen[0] = true;
    let mut reached = 0;
    while let Some(coord) = queue.pop_front() {
        reached += 1;
        for next in maze.open_neighbors(coord) {
            let idx = next.0 * maze.cols() + next.1;
            if !seen[idx] {
                seen[idx] = true;
                queue.push_back(next);
            }
        }
    }
    reached
}

fn assert_walls_symmetric(maze: &Maze) {
    for cell in maze.cells() {
        for side in Direction::ALL {
            let Some(next) = side.step(cell.coord()).filter(|&c| maze.is_in_bounds(c)) else {
                continue;
            };
            assert_eq!(
                maze.has_wall(cell.coord(), side),
                maze.has_wall(next, side.opposite()),
                "one-sided wall between {:?} and {:?}",
                cell.coord(),
                next
            );
        }
    }
}

#[test]
fn every_algorithm_builds_a_spanning_tree() {
    for generator in Generator::ALL {
        for (rows, cols) in SIZES {
            let maze = generate_maze(generator, rows, cols, Some(42)).unwrap();
            assert_eq!(
                maze.open_passages(),
                rows * cols - 1,
                "{generator} on {rows}x{cols}"
            );
            assert_eq!(flood_fill(&maze), rows * cols, "{generator} on {rows}x{cols}");
            assert_walls_symmetric(&maze);
        }
    }
}

#[test]
fn intermediate_snapshots_keep_walls_paired() {
    for generator in Generator::ALL {
        let snapshots = generate(generator, 6, 5, Some(7)).unwrap().collect::<Vec<_>>();
        assert!(snapshots.len() >= 2, "{generator}");
        for snapshot in &snapshots {
            assert_walls_symmetric(snapshot);
        }
        // Only the final snapshot has its entry and exit opened.
        let (last, rest) = snapshots.split_last().unwrap();
        assert!(last[(0, 0)].is_entry && last[(5, 4)].is_exit, "{generator}");
        assert!(rest.iter().all(|m| m.cells().all(|c| !c.is_entry && !c.is_exit)));
    }
}

#[test]
fn carving_algorithms_never_exceed_a_tree() {
    for generator in Generator::ALL
        .into_iter()
        .filter(|&g| g != Generator::RecurDiv)
    {
        let mut previous = 0;
        for snapshot in generate(generator, 5, 5, Some(3)).unwrap() {
            let open = snapshot.open_passages();
            assert!(open >= previous && open <= 24, "{generator}");
            previous = open;
        }
    }
}

#[test]
fn stepping_and_skipping_reach_the_same_maze() {
    for generator in Generator::ALL {
        let skipped = generate(generator, 12, 9, Some(2024)).unwrap().finish();
        let stepped = generate(generator, 12, 9, Some(2024))
            .unwrap()
            .last()
            .unwrap();
        assert_eq!(skipped, stepped, "{generator}");

        let rng = StdRng::seed_from_u64(99);
        let a = mazeworks::generate_with_rng(generator, 12, 9, rng.clone())
            .unwrap()
            .finish();
        let b = mazeworks::generate_with_rng(generator, 12, 9, rng)
            .unwrap()
            .finish();
        assert_eq!(a, b, "{generator}");
    }
}

#[test]
fn entry_and_exit_are_unique() {
    for generator in Generator::ALL {
        let maze = generate_maze(generator, 4, 6, Some(1)).unwrap();
        let entries = maze.cells().filter(|c| c.is_entry).collect::<Vec<_>>();
        let exits = maze.cells().filter(|c| c.is_exit).collect::<Vec<_>>();
        assert_eq!(entries.len(), 1);
        assert_eq!(exits.len(), 1);
        assert_eq!(entries[0].coord(), (0, 0));
        assert_eq!(exits[0].coord(), (3, 5));
        assert!(!entries[0].walls.left);
        assert!(!exits[0].walls.right);
    }
}

#[test]
fn binary_tree_carves_north_or_west() {
    let snapshots = generate(Generator::BinaryTree, 3, 3, Some(17))
        .unwrap()
        .collect::<Vec<_>>();
    assert_eq!(snapshots.len(), 10);
    // Last state before entry and exit are opened
    let maze = &snapshots[8];
    assert!(maze[(0, 0)].walls.top && maze[(0, 0)].walls.left);
    for cell in maze.cells().skip(1) {
        let carved = usize::from(!cell.walls.top) + usize::from(!cell.walls.left);
        assert_eq!(carved, 1, "{:?}", cell.coord());
    }
}

#[test]
fn solution_connects_entry_to_exit() {
    for generator in Generator::ALL {
        let maze = generate_maze(generator, 10, 14, Some(8)).unwrap();
        let path = solve_maze(&maze);
        assert_eq!(path.first(), Some(&(0, 0)), "{generator}");
        assert_eq!(path.last(), Some(&(9, 13)), "{generator}");
        assert!(path.windows(2).all(|w| maze.is_open_between(w[0], w[1])));
        assert_eq!(solve_maze(&maze), path);
    }
}

#[test]
fn invalid_dimensions_are_rejected() {
    for generator in Generator::ALL {
        assert!(generate(generator, 0, 3, None).is_err());
        assert!(generate(generator, 3, 0, None).is_err());
    }
}
