use super::TrackedCell;
use crate::maze::{Coord, Maze};

pub fn solve_dfs(maze: &Maze, start: Coord, goal: Coord) -> Vec<Coord> {
    let mut visited = vec![false; maze.len()];
    let index = |(row, col): Coord| row * maze.cols() + col;

    let mut stack = vec![TrackedCell::root(start)];
    visited[index(start)] = true;

    while let Some(current) = stack.pop() {
        if current.coord == goal {
            return current.path();
        }
        // Reversed so neighbours are explored in up, down, left, right order
        let neighbors = maze.open_neighbors(current.coord).collect::<Vec<_>>();
        for next in neighbors.into_iter().rev() {
            if !visited[index(next)] {
                visited[index(next)] = true;
                stack.push(TrackedCell::child(&current, next));
            }
        }
    }

    Vec::new()
}
