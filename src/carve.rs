use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{CellState, Grid, Pos, Surround};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarveOutcome {
    /// Walk steps taken; this is what the budget limits.
    pub steps: usize,
    /// Cells that went from unvisited to path.
    pub opened: usize,
    /// Jumps back to a random earlier path cell.
    pub restarts: usize,
    /// The walk stopped before the budget because nothing could be carved.
    pub exhausted: bool,
}

/// Random walk from the start cell that turns cells into path without ever
/// closing a loop. When the walk gets stuck it resumes from a random cell it
/// carved earlier.
pub fn carve_path(grid: &mut Grid, rng: &mut impl Rng, budget: usize) -> CarveOutcome {
    let mut outcome = CarveOutcome::default();
    let Some(start) = grid.start() else {
        outcome.exhausted = budget > 0;
        return outcome;
    };

    let mut history: Vec<Pos> = Vec::new();
    let mut prev = start;
    let mut curr = start;

    while outcome.steps < budget {
        let candidates: Vec<Pos> = grid
            .neighbors(curr)
            .into_iter()
            .filter(|&(pos, s)| pos != prev && s != Surround::Blocked)
            .map(|(pos, _)| pos)
            .filter(|&pos| grid.is_suitable(pos))
            .collect();

        if let Some(&chosen) = candidates.choose(rng) {
            if grid.open(chosen) {
                history.push(chosen);
                outcome.opened += 1;
            }
            prev = curr;
            curr = chosen;
            outcome.steps += 1;
        } else if let Some(&resume) = history.choose(rng) {
            debug!("walk stuck at ({}, {}), resuming at ({}, {})", curr.x, curr.y, resume.x, resume.y);
            prev = curr;
            curr = resume;
            outcome.restarts += 1;
        } else {
            warn!("no carvable cell next to the start, stopping after {} steps", outcome.steps);
            outcome.exhausted = true;
            break;
        }
    }

    info!(
        "carved {} cells in {} steps ({} restarts, budget {})",
        outcome.opened, outcome.steps, outcome.restarts, budget
    );
    outcome
}

/// Extends the lowest path cell (leftmost on ties) straight down to the bottom
/// row so the maze always has an exit. Blocked flags are left untouched.
pub fn link_goal(grid: &mut Grid) -> Option<Pos> {
    let side = grid.side();
    let anchor = (0..side)
        .rev()
        .flat_map(|y| (0..side).map(move |x| Pos::new(x, y)))
        .find(|&pos| grid.state(pos) == CellState::Path)?;

    for y in anchor.y..side {
        grid.open(Pos::new(anchor.x, y));
    }
    info!("goal linked down column {} from row {}", anchor.x, anchor.y);
    Some(anchor)
}
