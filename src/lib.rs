//! Procedural square maze generation.
//!
//! A grid is initialized with a blocked border (and optionally a lattice of
//! pillars), an entrance is opened on the top row, a loop-free random walk
//! carves the corridors and a final pass links the lowest corridor to the
//! bottom edge so the maze can always be crossed top to bottom.

pub mod carve;
pub mod config;
pub mod grid;
pub mod render;

use log::info;
use rand::Rng;

pub use carve::{carve_path, link_goal, CarveOutcome};
pub use config::{ConfigError, MazeConfig};
pub use grid::{Cell, CellState, Dir, Grid, Pos, Surround};

/// Runs the whole pipeline on a fresh grid.
pub fn generate(config: &MazeConfig, rng: &mut impl Rng) -> Result<Grid, ConfigError> {
    config.validate()?;
    let mut grid = Grid::new(config.side_length, config.strict_lines);
    let start = grid.pick_start(rng);
    info!("start at column {}", start.x);
    carve_path(&mut grid, rng, config.carve_budget());
    link_goal(&mut grid);
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn same_seed_same_maze() {
        let config = MazeConfig {
            side_length: 21,
            ..MazeConfig::default()
        };
        let a = generate(&config, &mut StdRng::seed_from_u64(99)).unwrap();
        let b = generate(&config, &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(render::render(&a, false), render::render(&b, false));
    }

    #[test]
    fn bad_config_fails_fast() {
        let config = MazeConfig {
            side_length: 2,
            ..MazeConfig::default()
        };
        let err = generate(&config, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert_eq!(err, ConfigError::SideTooSmall(2));
    }
}
