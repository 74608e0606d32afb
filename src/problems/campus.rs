//! A campus of walkable cells and multi-story buildings.
//!
//! States are `(x, y, floor)`. Moving between neighbouring cells costs 1;
//! changing floors costs 3 with an elevator, otherwise 7 going up and 5 going
//! down.

use derive_more::Display;
use log::warn;
use thiserror::Error;

use crate::float_cost::FloatCost;
use crate::problem::Problem;
use crate::problem::ProblemHeuristic;
use crate::space::Action;
use crate::space::Neighbours;
use crate::space::Path;
use crate::space::Space;
use crate::space::State;

const MAX_ELEMENTS_DISPLAYED: usize = 40;

/// Symbol for impassable cells.
pub const WALL: &str = "#";
/// Symbol for open ground in the text format.
pub const FREE: &str = ".";

pub type Coord = u32;
pub type Floor = u32;

pub type CampusCost = FloatCost<f64>;

const HORIZONTAL_COST: f64 = 1.0;
const ELEVATOR_COST: f64 = 3.0;
const STAIRS_UP_COST: f64 = 7.0;
const STAIRS_DOWN_COST: f64 = 5.0;

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq, Hash)]
#[display("({x},{y},{floor})")]
pub struct CampusState {
    pub x: Coord,
    pub y: Coord,
    pub floor: Floor,
}

impl CampusState {
    pub const fn new(x: Coord, y: Coord, floor: Floor) -> Self {
        Self { x, y, floor }
    }
}
impl State for CampusState {}

#[derive(Copy, Clone, Debug, Display, PartialEq, Eq)]
pub enum CampusAction {
    #[display("↓")]
    South, // y++
    #[display("→")]
    East, // x++
    #[display("↑")]
    North, // y--
    #[display("←")]
    West, // x--
    #[display("⇑")]
    Up, // floor++
    #[display("⇓")]
    Down, // floor--
}
impl Action for CampusAction {}

impl CampusAction {
    /// Expansion order.
    pub const ALL: [CampusAction; 6] = [
        CampusAction::South,
        CampusAction::East,
        CampusAction::North,
        CampusAction::West,
        CampusAction::Up,
        CampusAction::Down,
    ];

    pub fn is_vertical(&self) -> bool {
        matches!(self, CampusAction::Up | CampusAction::Down)
    }
}

/// One entry of an input map, before normalisation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellSpec {
    Bare(String),
    /// A building. Any `extra` value, whatever it says, adds an elevator.
    Tower {
        symbol: String,
        floors: i64,
        extra: Option<String>,
    },
}

impl CellSpec {
    pub fn bare(symbol: &str) -> Self {
        CellSpec::Bare(symbol.to_string())
    }
    pub fn stairs(symbol: &str, floors: i64) -> Self {
        CellSpec::Tower {
            symbol: symbol.to_string(),
            floors,
            extra: None,
        }
    }
    pub fn elevator(symbol: &str, floors: i64) -> Self {
        CellSpec::Tower {
            symbol: symbol.to_string(),
            floors,
            extra: Some("E".to_string()),
        }
    }

    pub fn symbol(&self) -> &str {
        match self {
            CellSpec::Bare(symbol) | CellSpec::Tower { symbol, .. } => symbol,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CellSpecParseError {
    #[error("Missing symbol in '{0}'")]
    EmptySymbol(String),
    #[error("Invalid floor count '{floors}' in '{token}'")]
    InvalidFloorCount { token: String, floors: String },
}

/// Parses `SYMBOL`, `SYMBOL:FLOORS` or `SYMBOL:FLOORS:EXTRA`.
impl std::convert::TryFrom<&str> for CellSpec {
    type Error = CellSpecParseError;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        let mut parts = token.splitn(3, ':');
        let symbol = parts.next().unwrap_or_default();
        if symbol.is_empty() {
            return Err(CellSpecParseError::EmptySymbol(token.to_string()));
        }

        let Some(floors) = parts.next() else {
            return Ok(CellSpec::bare(symbol));
        };
        let floors = floors
            .parse::<i64>()
            .map_err(|_| CellSpecParseError::InvalidFloorCount {
                token: token.to_string(),
                floors: floors.to_string(),
            })?;

        Ok(CellSpec::Tower {
            symbol: symbol.to_string(),
            floors,
            extra: parts.next().map(str::to_string),
        })
    }
}

#[derive(Debug, Error)]
pub enum CampusMapParseError {
    #[error("Empty input")]
    EmptyInput,
    #[error("Row {y} has {found} cells, expected {expected}")]
    RaggedRow {
        y: usize,
        expected: usize,
        found: usize,
    },
    #[error("Invalid cell {e} found at ({x},{y})")]
    InvalidCell {
        e: CellSpecParseError,
        x: usize,
        y: usize,
    },
    #[error("I/O error when loading '{p}': {e}")]
    IOError {
        p: std::path::PathBuf,
        e: std::io::Error,
    },
}

/// A rectangular grid of cell specifications, indexed `[y][x]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CampusMap {
    rows: Vec<Vec<CellSpec>>,
}

impl CampusMap {
    pub fn new(rows: Vec<Vec<CellSpec>>) -> Result<Self, CampusMapParseError> {
        let expected = match rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(CampusMapParseError::EmptyInput),
        };
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(CampusMapParseError::RaggedRow {
                y,
                expected,
                found: row.len(),
            });
        }
        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[Vec<CellSpec>] {
        &self.rows
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows[0].len(), self.rows.len())
    }
}

/// Whitespace separated cells, one row per line.
///
/// Blank lines and lines starting with `;` are skipped.
impl std::convert::TryFrom<&str> for CampusMap {
    type Error = CampusMapParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut rows = vec![];
        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            let y = rows.len();
            let row = line
                .split_whitespace()
                .enumerate()
                .map(|(x, token)| {
                    CellSpec::try_from(token)
                        .map_err(|e| CampusMapParseError::InvalidCell { e, x, y })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        CampusMap::new(rows)
    }
}

impl std::convert::TryFrom<&std::path::Path> for CampusMap {
    type Error = CampusMapParseError;

    fn try_from(p: &std::path::Path) -> Result<Self, Self::Error> {
        let s = std::fs::read_to_string(p).map_err(|e| CampusMapParseError::IOError {
            p: p.to_path_buf(),
            e,
        })?;
        CampusMap::try_from(s.as_str())
    }
}

/// The normalised properties of a grid position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: String,
    /// Highest reachable floor. Floors `0..=floors` exist.
    pub floors: Floor,
    pub elevator: bool,
    pub coordinates: (Coord, Coord),
}

impl Cell {
    fn from_spec(spec: &CellSpec, x: Coord, y: Coord) -> Self {
        let (floors, elevator) = match spec {
            CellSpec::Bare(_) => (0, false),
            CellSpec::Tower { floors, extra, .. } => (
                Floor::try_from((*floors).max(0)).unwrap_or(Floor::MAX),
                extra.is_some(),
            ),
        };
        Self {
            symbol: spec.symbol().to_string(),
            floors,
            elevator,
            coordinates: (x, y),
        }
    }

    #[inline(always)]
    pub fn is_wall(&self) -> bool {
        self.symbol == WALL
    }

    #[inline(always)]
    pub fn has_floor(&self, floor: Floor) -> bool {
        floor <= self.floors
    }

    fn glyph(&self) -> char {
        if self.is_wall() {
            '█'
        } else if self.floors > 0 {
            if self.elevator { 'E' } else { 'T' }
        } else if self.symbol == FREE || self.symbol.trim().is_empty() {
            '░'
        } else {
            '•'
        }
    }
}

#[derive(Clone)]
pub struct CampusSpace {
    cells: Vec<Vec<Cell>>,
}

impl CampusSpace {
    pub fn new_from_map(map: &CampusMap) -> Self {
        let cells = map
            .rows()
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, spec)| Cell::from_spec(spec, x as Coord, y as Coord))
                    .collect()
            })
            .collect();
        Self { cells }
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (usize, usize) {
        match self.cells.first() {
            Some(row) => (row.len(), self.cells.len()),
            None => (0, 0),
        }
    }

    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        let (max_x, max_y) = self.dimensions();
        0 <= x && 0 <= y && (x as u64) < max_x as u64 && (y as u64) < max_y as u64
    }

    pub fn cell(&self, x: Coord, y: Coord) -> Option<&Cell> {
        self.cells.get(y as usize)?.get(x as usize)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Number of `(x, y, floor)` states outside walls.
    pub fn state_count(&self) -> usize {
        self.cells()
            .filter(|c| !c.is_wall())
            .map(|c| c.floors as usize + 1)
            .sum()
    }

    fn step(state: &CampusState, action: &CampusAction) -> Option<CampusState> {
        let CampusState { x, y, floor } = *state;
        #[rustfmt::skip]
        let (x, y, floor) = match action {
            CampusAction::South => (x,                 y.checked_add(1)?, floor),
            CampusAction::East  => (x.checked_add(1)?, y,                 floor),
            CampusAction::North => (x,                 y.checked_sub(1)?, floor),
            CampusAction::West  => (x.checked_sub(1)?, y,                 floor),
            CampusAction::Up    => (x,                 y,                 floor.checked_add(1)?),
            CampusAction::Down  => (x,                 y,                 floor.checked_sub(1)?),
        };
        Some(CampusState { x, y, floor })
    }
}

impl Space<CampusState, CampusAction, CampusCost> for CampusSpace {
    #[inline(always)]
    fn apply(&self, state: &CampusState, action: &CampusAction) -> Option<CampusState> {
        let next = Self::step(state, action)?;
        self.valid(&next).then_some(next)
    }

    /// Vertical moves are priced by the cell being moved within.
    #[inline(always)]
    fn cost(&self, state: &CampusState, action: &CampusAction) -> CampusCost {
        let elevator = self
            .cell(state.x, state.y)
            .is_some_and(|cell| cell.elevator);
        let c = match action {
            CampusAction::South | CampusAction::East | CampusAction::North | CampusAction::West => {
                HORIZONTAL_COST
            }
            CampusAction::Up | CampusAction::Down if elevator => ELEVATOR_COST,
            CampusAction::Up => STAIRS_UP_COST,
            CampusAction::Down => STAIRS_DOWN_COST,
        };
        CampusCost::new(c)
    }

    fn neighbours(&self, state: &CampusState) -> Neighbours<CampusState, CampusAction> {
        CampusAction::ALL
            .iter()
            .filter_map(|a| self.apply(state, a).map(|s| (s, *a)))
            .collect()
    }

    #[inline(always)]
    fn valid(&self, state: &CampusState) -> bool {
        self.cell(state.x, state.y)
            .is_some_and(|cell| !cell.is_wall() && cell.has_floor(state.floor))
    }
}

impl std::fmt::Display for CampusSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = self.dimensions();
        writeln!(f, "Campus({}x{}):", d.0, d.1)?;
        for row in self.cells.iter().take(MAX_ELEMENTS_DISPLAYED) {
            for cell in row.iter().take(MAX_ELEMENTS_DISPLAYED) {
                write!(f, "{}", cell.glyph())?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for CampusSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Campus{:?}", self.dimensions())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CampusError {
    #[error("Start symbol '{0}' is not on the map")]
    StartNotFound(String),
    #[error("Goal symbol '{0}' is not on the map")]
    GoalNotFound(String),
}

/// A campus with a start and a goal, both found by symbol.
#[derive(Clone, Debug)]
pub struct CampusProblem {
    space: CampusSpace,
    start: CampusState,
    goal: CampusState,
}

/// Finds the last cell (in row-major order) labelled `symbol` and clamps the
/// requested floor into what that cell has.
fn resolve(space: &CampusSpace, symbol: &str, floor: i64) -> Option<CampusState> {
    let mut found: Option<CampusState> = None;
    for cell in space.cells().filter(|c| c.symbol == symbol) {
        if let Some(previous) = found {
            warn!(
                "Symbol '{symbol}' appears more than once, using {:?} over {previous}",
                cell.coordinates
            );
        }
        let (x, y) = cell.coordinates;
        let floor = floor.clamp(0, i64::from(cell.floors)) as Floor;
        found = Some(CampusState { x, y, floor });
    }
    found
}

impl CampusProblem {
    pub fn new(
        map: &CampusMap,
        start: (&str, i64),
        goal: (&str, i64),
    ) -> Result<Self, CampusError> {
        let space = CampusSpace::new_from_map(map);
        let start = resolve(&space, start.0, start.1)
            .ok_or_else(|| CampusError::StartNotFound(start.0.to_string()))?;
        let goal = resolve(&space, goal.0, goal.1)
            .ok_or_else(|| CampusError::GoalNotFound(goal.0.to_string()))?;

        Ok(Self { space, start, goal })
    }

    /// Straight-line distance to the goal on the ground plan.
    ///
    /// Floors are ignored. This never overestimates the horizontal moves
    /// left (each costs 1) but says nothing about floor changes, which cost
    /// at least 3 each.
    #[inline(always)]
    pub fn heuristic(&self, s: &CampusState) -> CampusCost {
        let dx = f64::from(s.x) - f64::from(self.goal.x);
        let dy = f64::from(s.y) - f64::from(self.goal.y);
        CampusCost::new(dx.hypot(dy))
    }

    /// The map with the cells a path goes through marked with `*`.
    pub fn render_path(&self, path: &Path<CampusState, CampusAction, CampusCost>) -> String {
        let mut out = String::new();
        for (y, row) in self.space.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let on_path = path
                    .states()
                    .iter()
                    .any(|s| s.x as usize == x && s.y as usize == y);
                out.push(match self.marker(x, y) {
                    Some(m) => m,
                    None if on_path => '*',
                    None => cell.glyph(),
                });
            }
            out.push('\n');
        }
        out
    }

    fn marker(&self, x: usize, y: usize) -> Option<char> {
        let is_start = self.start.x as usize == x && self.start.y as usize == y;
        let is_goal = self.goal.x as usize == x && self.goal.y as usize == y;
        match (is_start, is_goal) {
            (true, true) => Some('!'),
            (true, false) => Some('S'),
            (false, true) => Some('G'),
            (false, false) => None,
        }
    }
}

impl Problem<CampusSpace, CampusState, CampusAction, CampusCost> for CampusProblem {
    fn space(&self) -> &CampusSpace {
        &self.space
    }
    fn start(&self) -> CampusState {
        self.start
    }
    fn goal(&self) -> CampusState {
        self.goal
    }
}

impl std::fmt::Display for CampusProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let d = self.space.dimensions();
        writeln!(
            f,
            "CampusProblem({}x{}) (s:{}, g:{}):",
            d.0, d.1, self.start, self.goal
        )?;
        for (y, row) in self
            .space
            .cells
            .iter()
            .enumerate()
            .take(MAX_ELEMENTS_DISPLAYED)
        {
            for (x, cell) in row.iter().enumerate().take(MAX_ELEMENTS_DISPLAYED) {
                write!(f, "{}", self.marker(x, y).unwrap_or_else(|| cell.glyph()))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[derive(Debug)]
pub struct CampusHeuristicPlanar;

impl ProblemHeuristic<CampusProblem, CampusSpace, CampusState, CampusAction, CampusCost>
    for CampusHeuristicPlanar
{
    #[inline(always)]
    fn h(p: &CampusProblem, s: &CampusState) -> CampusCost {
        p.heuristic(s)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const DEMO: &str = include_str!("../../data/campus/demo.txt");

    fn problem(map: &str, start: (&str, i64), goal: (&str, i64)) -> CampusProblem {
        CampusProblem::new(&CampusMap::try_from(map).unwrap(), start, goal).unwrap()
    }

    #[test]
    fn parse_cell_specs() {
        assert_eq!(CellSpec::try_from("."), Ok(CellSpec::bare(".")));
        assert_eq!(CellSpec::try_from("B31"), Ok(CellSpec::bare("B31")));
        assert_eq!(CellSpec::try_from("T:3"), Ok(CellSpec::stairs("T", 3)));
        assert_eq!(CellSpec::try_from("T:3:E"), Ok(CellSpec::elevator("T", 3)));
        assert_eq!(
            CellSpec::try_from("T:3:no"),
            Ok(CellSpec::Tower {
                symbol: "T".to_string(),
                floors: 3,
                extra: Some("no".to_string()),
            })
        );
        assert_eq!(
            CellSpec::try_from(":3"),
            Err(CellSpecParseError::EmptySymbol(":3".to_string()))
        );
        assert!(matches!(
            CellSpec::try_from("T:three"),
            Err(CellSpecParseError::InvalidFloorCount { .. })
        ));
    }

    #[test]
    fn parse_map() {
        let map = CampusMap::try_from(indoc! {"
            ; comment
            A . #

            . T:2:E B
        "})
        .unwrap();
        assert_eq!(map.dimensions(), (3, 2));
        assert_eq!(map.rows()[1][1], CellSpec::elevator("T", 2));
    }

    #[test]
    fn parse_map_errors() {
        assert!(matches!(
            CampusMap::try_from(""),
            Err(CampusMapParseError::EmptyInput)
        ));
        assert!(matches!(
            CampusMap::try_from("; only a comment\n"),
            Err(CampusMapParseError::EmptyInput)
        ));
        assert!(matches!(
            CampusMap::try_from("A . .\n. B"),
            Err(CampusMapParseError::RaggedRow {
                y: 1,
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            CampusMap::try_from("A .\n. T:x"),
            Err(CampusMapParseError::InvalidCell { x: 1, y: 1, .. })
        ));
        assert!(matches!(
            CampusMap::try_from(std::path::Path::new("/nonexistent/campus.txt")),
            Err(CampusMapParseError::IOError { .. })
        ));
    }

    #[test]
    fn cells_are_normalised() {
        let map = CampusMap::new(vec![vec![
            CellSpec::bare("A"),
            CellSpec::stairs("N", -4),
            CellSpec::elevator("E", 2),
        ]])
        .unwrap();
        let space = CampusSpace::new_from_map(&map);

        let a = space.cell(0, 0).unwrap();
        assert_eq!((a.floors, a.elevator), (0, false));
        let n = space.cell(1, 0).unwrap();
        assert_eq!((n.floors, n.elevator), (0, false));
        let e = space.cell(2, 0).unwrap();
        assert_eq!((e.floors, e.elevator), (2, true));
        assert_eq!(e.coordinates, (2, 0));
        assert_eq!(space.state_count(), 1 + 1 + 3);
    }

    #[test]
    fn bounds() {
        let p = problem("A . B\n. . .", ("A", 0), ("B", 0));
        let space = p.space();
        assert_eq!(space.dimensions(), (3, 2));
        assert!(space.in_bounds(0, 0));
        assert!(space.in_bounds(2, 1));
        assert!(!space.in_bounds(3, 0));
        assert!(!space.in_bounds(0, 2));
        assert!(!space.in_bounds(-1, 0));
        assert!(!space.in_bounds(0, -1));
    }

    #[test]
    fn floors_are_clamped() {
        let p = problem("A:2 B:3:E", ("A", 9), ("B", -1));
        assert_eq!(p.start(), CampusState::new(0, 0, 2));
        assert_eq!(p.goal(), CampusState::new(1, 0, 0));

        // Single-level cells always resolve to the ground floor.
        let p = problem("A B", ("A", 3), ("B", 1));
        assert_eq!(p.start().floor, 0);
        assert_eq!(p.goal().floor, 0);

        let p = problem("A:2 B:3:E", ("A", 1), ("B", 3));
        assert_eq!(p.start(), CampusState::new(0, 0, 1));
        assert_eq!(p.goal(), CampusState::new(1, 0, 3));
    }

    #[test]
    fn missing_symbols() {
        let map = CampusMap::try_from("A . B").unwrap();
        assert_eq!(
            CampusProblem::new(&map, ("A", 0), ("Z", 0)).unwrap_err(),
            CampusError::GoalNotFound("Z".to_string())
        );
        assert_eq!(
            CampusProblem::new(&map, ("Z", 0), ("B", 0)).unwrap_err(),
            CampusError::StartNotFound("Z".to_string())
        );
    }

    #[test]
    fn last_duplicate_wins() {
        let p = problem("A . A\nB . .", ("A", 0), ("B", 0));
        assert_eq!(p.start(), CampusState::new(2, 0, 0));
    }

    #[test]
    fn goal_check_needs_the_floor() {
        let p = problem("A T:2", ("A", 0), ("T", 1));
        assert!(p.is_goal(&CampusState::new(1, 0, 1)));
        assert!(!p.is_goal(&CampusState::new(1, 0, 0)));
        assert!(!p.is_goal(&CampusState::new(1, 0, 2)));
    }

    #[test]
    fn heuristic_ignores_floors() {
        let p = problem("A . . .\n. . . T:3", ("A", 0), ("T", 2));
        assert_eq!(p.heuristic(&CampusState::new(3, 1, 0)), CampusCost::new(0.0));
        assert_eq!(p.heuristic(&CampusState::new(3, 1, 3)), CampusCost::new(0.0));
        assert_eq!(p.heuristic(&CampusState::new(0, 1, 0)), CampusCost::new(3.0));
        let diagonal = p.heuristic(&CampusState::new(0, 0, 0)).get();
        assert!((diagonal - 10f64.sqrt()).abs() < 1e-12);
        for cell in p.space().cells() {
            let (x, y) = cell.coordinates;
            let h = p.heuristic(&CampusState::new(x, y, 0));
            assert!(h >= CampusCost::new(0.0));
            assert_eq!(h == CampusCost::new(0.0), (x, y) == (3, 1));
        }
    }

    #[test]
    fn moves_are_filtered() {
        let p = problem(
            indoc! {"
                . # .
                . A:1 T:2
                . . .
            "},
            ("A", 0),
            ("T", 0),
        );
        let space = p.space();
        let from = CampusState::new(1, 1, 0);
        let moves: Vec<CampusAction> = space.neighbours(&from).iter().map(|(_, a)| *a).collect();
        assert_eq!(
            moves,
            vec![
                CampusAction::South,
                CampusAction::East,
                CampusAction::West,
                CampusAction::Up,
            ]
        );

        // Floor 1 of A leads onto floor 1 of T only.
        let upstairs = CampusState::new(1, 1, 1);
        let moves: Vec<CampusState> = space.neighbours(&upstairs).iter().map(|(s, _)| *s).collect();
        assert_eq!(
            moves,
            vec![CampusState::new(2, 1, 1), CampusState::new(1, 1, 0)]
        );

        assert_eq!(space.apply(&CampusState::new(0, 0, 0), &CampusAction::North), None);
        assert_eq!(space.apply(&CampusState::new(0, 0, 0), &CampusAction::West), None);
        assert_eq!(space.apply(&CampusState::new(2, 1, 2), &CampusAction::Up), None);
    }

    #[test]
    fn step_costs() {
        let p = problem("A:2 E:2:E", ("A", 0), ("E", 0));
        let space = p.space();
        let stairs = CampusState::new(0, 0, 1);
        let lift = CampusState::new(1, 0, 1);

        assert_eq!(space.cost(&stairs, &CampusAction::East), CampusCost::new(1.0));
        assert_eq!(space.cost(&stairs, &CampusAction::Up), CampusCost::new(7.0));
        assert_eq!(space.cost(&stairs, &CampusAction::Down), CampusCost::new(5.0));
        assert_eq!(space.cost(&lift, &CampusAction::Up), CampusCost::new(3.0));
        assert_eq!(space.cost(&lift, &CampusAction::Down), CampusCost::new(3.0));
    }

    #[test]
    fn demo_step_costs_are_tabulated() {
        let map = CampusMap::try_from(DEMO).unwrap();
        let p = CampusProblem::new(&map, ("B30", 0), ("B37", 2)).unwrap();
        let space = p.space();
        assert_eq!(space.dimensions(), (17, 16));
        assert_eq!(p.start(), CampusState::new(2, 2, 0));
        assert_eq!(p.goal(), CampusState::new(12, 6, 2));

        let horizontal = CampusCost::new(1.0);
        let vertical = [3.0, 5.0, 7.0].map(CampusCost::new);
        for cell in space.cells().filter(|c| !c.is_wall()) {
            let (x, y) = cell.coordinates;
            for floor in 0..=cell.floors {
                let s = CampusState::new(x, y, floor);
                assert!(space.valid(&s));
                for (n, a) in space.neighbours(&s) {
                    assert!(space.valid(&n));
                    let c = space.cost(&s, &a);
                    assert_eq!(a.is_vertical(), vertical.contains(&c));
                    assert_eq!(!a.is_vertical(), c == horizontal);
                }
            }
        }
    }

    #[test]
    fn display() {
        let p = problem("A # T:2\n. T:1:E B", ("A", 0), ("B", 0));
        assert_eq!(
            p.to_string(),
            "CampusProblem(3x2) (s:(0,0,0), g:(2,1,0)):\nS█T\n░EG\n"
        );
        assert_eq!(p.space().to_string(), "Campus(3x2):\n•█T\n░E•\n");
        assert_eq!(format!("{:?}", p.space()), "Campus(3, 2)");
    }

    #[test]
    fn render_path() {
        let p = problem("A . .\n# # B", ("A", 0), ("B", 0));
        let mut path = Path::new_from_start(p.start());
        path.append(CampusAction::East, CampusState::new(1, 0, 0));
        path.append(CampusAction::East, CampusState::new(2, 0, 0));
        path.append(CampusAction::South, CampusState::new(2, 1, 0));
        assert!(p.space().valid_path(&path));
        assert_eq!(p.space().path_cost(&path), CampusCost::new(3.0));
        assert_eq!(p.render_path(&path), "S**\n██G\n");
    }
}
