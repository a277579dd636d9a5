use log::warn;
use thiserror::Error;

pub const DEFAULT_SIDE: usize = 40;
pub const DEFAULT_STRICT_LINES: bool = true;
pub const DEFAULT_DEBUG: bool = false;
pub const DEFAULT_DENSITY: u32 = 100;
pub const MIN_SIDE: usize = 3;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("side length {0} is too small, need at least 3")]
    SideTooSmall(usize),
    #[error("density {0}% is outside 1..=100")]
    DensityOutOfRange(u32),
}

/// Generation settings, fixed for the lifetime of one maze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    pub side_length: usize,
    /// Pre-block every cell whose coordinates are both even.
    pub strict_lines: bool,
    /// Draw blocked cells with their own glyph and show the grid before carving.
    pub debug_mode: bool,
    /// Percentage of the open interior the carver tries to turn into path.
    pub density: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            side_length: DEFAULT_SIDE,
            strict_lines: DEFAULT_STRICT_LINES,
            debug_mode: DEFAULT_DEBUG,
            density: DEFAULT_DENSITY,
        }
    }
}

impl MazeConfig {
    pub fn from_env() -> Self {
        Self {
            side_length: read_var("MAZE_SIZE", parse_number).unwrap_or(DEFAULT_SIDE),
            strict_lines: read_var("MAZE_STRICT_LINES", parse_flag).unwrap_or(DEFAULT_STRICT_LINES),
            debug_mode: read_var("MAZE_DEBUG", parse_flag).unwrap_or(DEFAULT_DEBUG),
            density: read_var("MAZE_DENSITY", parse_number).unwrap_or(DEFAULT_DENSITY),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side_length < MIN_SIDE {
            return Err(ConfigError::SideTooSmall(self.side_length));
        }
        if !(1..=100).contains(&self.density) {
            return Err(ConfigError::DensityOutOfRange(self.density));
        }
        Ok(())
    }

    /// Number of cells the carver should open. Border cells never count, and in
    /// strict mode a quarter of the interior is pillars.
    pub fn carve_budget(&self) -> usize {
        let inner = self.side_length.saturating_sub(2);
        let mut cells = inner * inner;
        if self.strict_lines {
            cells = cells * 3 / 4;
        }
        cells * self.density as usize / 100
    }
}

pub fn seed_from_env() -> Option<u64> {
    read_var("MAZE_SEED", parse_number)
}

fn read_var<T>(name: &str, parse: fn(&str) -> Option<T>) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    let value = parse(raw.trim());
    if value.is_none() {
        warn!("ignoring {}={:?}: not a valid value", name, raw);
    }
    value
}

fn parse_number<T: std::str::FromStr>(raw: &str) -> Option<T> {
    raw.parse::<T>().ok()
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
