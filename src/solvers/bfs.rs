use std::collections::VecDeque;

use super::TrackedCell;
use crate::maze::{Coord, Maze};

pub fn solve_bfs(maze: &Maze, start: Coord, goal: Coord) -> Vec<Coord> {
    let mut visited = vec![false; maze.len()];
    let index = |(row, col): Coord| row * maze.cols() + col;

    let mut queue = VecDeque::from([TrackedCell::root(start)]);
    visited[index(start)] = true;

    while let Some(current) = queue.pop_front() {
        if current.coord == goal {
            return current.path();
        }
        // Only through open walls
        for next in maze.open_neighbors(current.coord) {
            if !visited[index(next)] {
                visited[index(next)] = true;
                queue.push_back(TrackedCell::child(&current, next));
            }
        }
    }

    Vec::new()
}
