//! Collision-free movement: 8-directional breadth-first search over the
//! occupancy grid, reduced to the single next step toward a target.
//!
//! No route is not an error; the caller leaves the player where it stands
//! for the tick. An axis-by-axis greedy step covers congested regions
//! where no full route exists but a partial approach is still possible.

use pathfinding::prelude::bfs;

use super::grid::OccupancyGrid;
use super::pitch::GridPos;

const NEIGHBORS_8: [(i32, i32); 8] =
    [(-1, 0), (0, -1), (1, 0), (0, 1), (-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Next single step from `start` toward `goal`, or `None` to stand still.
pub fn next_step_toward(grid: &OccupancyGrid, start: GridPos, goal: GridPos) -> Option<GridPos> {
    if start == goal {
        return None;
    }
    // A goal cell someone already stands on can never terminate the
    // search; approach greedily instead of flooding the grid.
    if !grid.passable(goal) {
        return greedy_step(grid, start, goal);
    }
    let route = bfs(&start, |&p| successors(grid, p), |&p| p == goal);
    match route {
        Some(steps) if steps.len() > 1 => Some(steps[1]),
        _ => greedy_step(grid, start, goal),
    }
}

fn successors(grid: &OccupancyGrid, p: GridPos) -> Vec<GridPos> {
    NEIGHBORS_8
        .iter()
        .map(|&(dx, dy)| GridPos::new(p.x + dx, p.y + dy))
        .filter(|&n| grid.passable(n))
        .collect()
}

/// One axis-by-axis step toward the goal, skipping blocked cells.
fn greedy_step(grid: &OccupancyGrid, start: GridPos, goal: GridPos) -> Option<GridPos> {
    let mut next = start;
    if goal.x > next.x && grid.passable(GridPos::new(next.x + 1, next.y)) {
        next.x += 1;
    } else if goal.x < next.x && grid.passable(GridPos::new(next.x - 1, next.y)) {
        next.x -= 1;
    }
    if goal.y > next.y && grid.passable(GridPos::new(next.x, next.y + 1)) {
        next.y += 1;
    } else if goal.y < next.y && grid.passable(GridPos::new(next.x, next.y - 1)) {
        next.y -= 1;
    }
    (next != start).then_some(next)
}
