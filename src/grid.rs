use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// Neighbor order used everywhere: north, east, south, west.
    pub const CLOCKWISE: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Right => (1, 0),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellState {
    Unvisited,
    Path,
}

/// What a neighbor looks like to the carver. `Blocked` wins over the stored state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Surround {
    Unvisited,
    Path,
    Blocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub state: CellState,
    pub blocked: bool,
}

impl Cell {
    pub fn surround(self) -> Surround {
        if self.blocked {
            return Surround::Blocked;
        }
        match self.state {
            CellState::Unvisited => Surround::Unvisited,
            CellState::Path => Surround::Path,
        }
    }
}

/// Square lattice stored row-major in a single buffer.
#[derive(Clone, Debug)]
pub struct Grid {
    side: usize,
    cells: Vec<Cell>,
    start: Option<Pos>,
}

impl Grid {
    /// Border cells are blocked, and with `strict_lines` so is every cell whose
    /// coordinates are both even. Nothing is random here.
    pub fn new(side: usize, strict_lines: bool) -> Self {
        let mut cells = Vec::with_capacity(side * side);
        for y in 0..side {
            for x in 0..side {
                let border = x == 0 || y == 0 || x + 1 == side || y + 1 == side;
                let pillar = strict_lines && x % 2 == 0 && y % 2 == 0;
                cells.push(Cell {
                    state: CellState::Unvisited,
                    blocked: border || pillar,
                });
            }
        }
        Self {
            side,
            cells,
            start: None,
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    fn idx(&self, pos: Pos) -> usize {
        pos.y * self.side + pos.x
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.side && pos.y < self.side
    }

    pub fn cell(&self, pos: Pos) -> Cell {
        self.cells[self.idx(pos)]
    }

    pub fn state(&self, pos: Pos) -> CellState {
        self.cell(pos).state
    }

    pub fn is_blocked(&self, pos: Pos) -> bool {
        self.cell(pos).blocked
    }

    /// Marks a cell as path. Returns true when the cell was not path before.
    pub fn open(&mut self, pos: Pos) -> bool {
        let idx = self.idx(pos);
        let fresh = self.cells[idx].state == CellState::Unvisited;
        self.cells[idx].state = CellState::Path;
        fresh
    }

    /// Opens the entrance on the top row. Column 0 is the permanently blocked corner
    /// and is never chosen.
    pub fn pick_start(&mut self, rng: &mut impl Rng) -> Pos {
        let pos = Pos::new(rng.gen_range(1..self.side), 0);
        let idx = self.idx(pos);
        self.cells[idx].blocked = false;
        self.cells[idx].state = CellState::Path;
        self.start = Some(pos);
        pos
    }

    pub fn step(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        let (dx, dy) = dir.delta();
        let nx = pos.x as isize + dx;
        let ny = pos.y as isize + dy;
        if nx < 0 || ny < 0 {
            return None;
        }
        let next = Pos::new(nx as usize, ny as usize);
        self.contains(next).then_some(next)
    }

    /// In-bounds neighbors of `pos` in `Dir::CLOCKWISE` order, with their carve state.
    pub fn neighbors(&self, pos: Pos) -> Vec<(Pos, Surround)> {
        let mut report = Vec::with_capacity(4);
        for dir in Dir::CLOCKWISE {
            if let Some(next) = self.step(pos, dir) {
                report.push((next, self.cell(next).surround()));
            }
        }
        report
    }

    /// A cell may be carved only if at most one of its neighbors is already path;
    /// two or more would close a loop.
    pub fn is_suitable(&self, pos: Pos) -> bool {
        let paths = self
            .neighbors(pos)
            .iter()
            .filter(|(_, s)| *s == Surround::Path)
            .count();
        paths <= 1
    }

    pub fn path_cells(&self) -> Vec<Pos> {
        let mut cells = Vec::new();
        for y in 0..self.side {
            for x in 0..self.side {
                let pos = Pos::new(x, y);
                if self.state(pos) == CellState::Path {
                    cells.push(pos);
                }
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn borders_are_blocked() {
        let grid = Grid::new(6, false);
        for y in 0..6 {
            for x in 0..6 {
                let border = x == 0 || y == 0 || x == 5 || y == 5;
                assert_eq!(grid.is_blocked(Pos::new(x, y)), border, "({}, {})", x, y);
                assert_eq!(grid.state(Pos::new(x, y)), CellState::Unvisited);
            }
        }
    }

    #[test]
    fn strict_lines_add_pillars() {
        let grid = Grid::new(7, true);
        assert!(grid.is_blocked(Pos::new(2, 2)));
        assert!(grid.is_blocked(Pos::new(4, 2)));
        assert!(!grid.is_blocked(Pos::new(1, 1)));
        assert!(!grid.is_blocked(Pos::new(2, 3)));
        assert!(!grid.is_blocked(Pos::new(3, 4)));
    }

    #[test]
    fn start_is_on_top_row_and_never_the_corner() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::new(3, false);
            let start = grid.pick_start(&mut rng);
            assert_eq!(start.y, 0);
            assert_ne!(start.x, 0);
            assert!(!grid.is_blocked(start));
            assert_eq!(grid.state(start), CellState::Path);
            assert!(grid.is_blocked(Pos::new(0, 0)));
        }
    }

    #[test]
    fn neighbors_follow_clockwise_order() {
        let grid = Grid::new(5, false);
        let report = grid.neighbors(Pos::new(2, 2));
        let positions: Vec<Pos> = report.iter().map(|(p, _)| *p).collect();
        assert_eq!(
            positions,
            vec![Pos::new(2, 1), Pos::new(3, 2), Pos::new(2, 3), Pos::new(1, 2)]
        );
        assert!(report.iter().all(|(_, s)| *s == Surround::Unvisited));
    }

    #[test]
    fn corner_has_two_neighbors() {
        let grid = Grid::new(5, false);
        let report = grid.neighbors(Pos::new(0, 0));
        assert_eq!(
            report,
            vec![
                (Pos::new(1, 0), Surround::Blocked),
                (Pos::new(0, 1), Surround::Blocked),
            ]
        );
        assert_eq!(grid.neighbors(Pos::new(4, 2)).len(), 3);
    }

    #[test]
    fn blocked_overrides_path_state() {
        let mut grid = Grid::new(5, false);
        grid.open(Pos::new(2, 4));
        let south = grid.neighbors(Pos::new(2, 3))[2];
        assert_eq!(south, (Pos::new(2, 4), Surround::Blocked));
    }

    #[test]
    fn suitability_counts_path_neighbors() {
        let mut grid = Grid::new(6, false);
        let target = Pos::new(2, 2);
        assert!(grid.is_suitable(target));
        grid.open(Pos::new(2, 1));
        assert!(grid.is_suitable(target));
        grid.open(Pos::new(3, 2));
        assert!(!grid.is_suitable(target));
    }

    #[test]
    fn open_reports_fresh_cells_once() {
        let mut grid = Grid::new(4, false);
        assert!(grid.open(Pos::new(1, 1)));
        assert!(!grid.open(Pos::new(1, 1)));
        assert_eq!(grid.path_cells(), vec![Pos::new(1, 1)]);
    }
}
