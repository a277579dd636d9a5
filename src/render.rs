use crossterm::style::Print;
use crossterm::QueueableCommand;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

use crate::grid::{CellState, Grid, Pos};

/// Terminal columns reserved per cell.
pub const CELL_W: usize = 3;
const SEPARATOR: &str = "\n\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Goal,
    Start,
    Open,
    Wall,
    DebugWall,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Goal => "🟨",
            Glyph::Start => "🟦",
            Glyph::Open => "⬜",
            Glyph::Wall => "⬛",
            Glyph::DebugWall => "❎",
        }
    }
}

/// Path wins over the blocked flag, so a goal link through the border shows up.
/// Unvisited interior looks the same as a wall.
pub fn glyph_for(grid: &Grid, pos: Pos, debug: bool) -> Glyph {
    let cell = grid.cell(pos);
    match cell.state {
        CellState::Path if pos.y + 1 == grid.side() => Glyph::Goal,
        CellState::Path if pos.y == 0 => Glyph::Start,
        CellState::Path => Glyph::Open,
        CellState::Unvisited if cell.blocked && debug => Glyph::DebugWall,
        CellState::Unvisited => Glyph::Wall,
    }
}

pub fn render(grid: &Grid, debug: bool) -> String {
    let mut out = String::new();
    for y in 0..grid.side() {
        for x in 0..grid.side() {
            let text = glyph_for(grid, Pos::new(x, y), debug).symbol();
            out.push_str(text);
            let w = UnicodeWidthStr::width(text);
            for _ in w..CELL_W {
                out.push(' ');
            }
        }
        out.push('\n');
    }
    out.push_str(SEPARATOR);
    out
}

pub fn draw(out: &mut impl Write, grid: &Grid, debug: bool) -> io::Result<()> {
    out.queue(Print(render(grid, debug)))?;
    out.flush()?;
    Ok(())
}
