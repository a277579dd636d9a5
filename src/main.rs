use log::info;
use maze_gen::config::{seed_from_env, MazeConfig};
use maze_gen::grid::Grid;
use maze_gen::{carve_path, link_goal, render};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::error::Error;
use std::io;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = MazeConfig::from_env();
    config.validate()?;
    let seed = seed_from_env().unwrap_or_else(|| rand::thread_rng().gen());
    info!("{:?}, seed {}", config, seed);

    let mut stdout = io::stdout();
    let mut rng = StdRng::seed_from_u64(seed);

    let started = Instant::now();
    let mut grid = Grid::new(config.side_length, config.strict_lines);
    if config.debug_mode {
        render::draw(&mut stdout, &grid, true)?;
    }
    grid.pick_start(&mut rng);
    let outcome = carve_path(&mut grid, &mut rng, config.carve_budget());
    link_goal(&mut grid);
    let elapsed = started.elapsed();

    if outcome.exhausted {
        info!("maze is sparser than requested");
    }
    render::draw(&mut stdout, &grid, config.debug_mode)?;
    println!("Time taken to generate the maze: {} ms", elapsed.as_millis());
    Ok(())
}
