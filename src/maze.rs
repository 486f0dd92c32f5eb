//! The maze world: an immutable tile grid plus the robot that walks it.
//!
//! Cells are addressed as [`IVec2`] with `x` holding the column and `y` holding the row, so
//! "up" is `-y`. Use [`cell`] to build one from `(row, column)`.

use crate::error::{LayoutError, LayoutResult};
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Builds a grid coordinate from `(row, column)`.
pub const fn cell(row: i32, column: i32) -> IVec2 {
    IVec2::new(column, row)
}

const REFERENCE_ROWS: [&str; 16] = [
    "######### ######",
    "#   ###   #### #",
    "#       ##  #  #",
    "######  #     ##",
    "#       #  # ###",
    "### ##### ######",
    "#     ##    ## #",
    "#### #### ## # #",
    "#              #",
    "############## #",
    "#           ## #",
    "## #######     #",
    "#  ##  ##  ##  #",
    "# ### ####     #",
    "#      #   ### #",
    "################",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Free,
}

impl Tile {
    /// Parses a layout character: `#` is a wall, a space is free floor.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '#' => Some(Tile::Wall),
            ' ' => Some(Tile::Free),
            _ => None,
        }
    }
}

/// The direction the robot is facing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    /// Grid offset of one step in this direction.
    pub fn delta(self) -> IVec2 {
        match self {
            Orientation::Up => IVec2::NEG_Y,
            Orientation::Down => IVec2::Y,
            Orientation::Left => IVec2::NEG_X,
            Orientation::Right => IVec2::X,
        }
    }

    /// Quarter turn counter-clockwise: Left -> Down -> Right -> Up -> Left.
    pub fn turned_left(self) -> Self {
        match self {
            Orientation::Left => Orientation::Down,
            Orientation::Down => Orientation::Right,
            Orientation::Right => Orientation::Up,
            Orientation::Up => Orientation::Left,
        }
    }
}

/// What happened when the robot tried to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepResult {
    Normal,
    WallHit,
    GoalReached,
}

/// Position and heading of the robot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Robot {
    pub position: IVec2,
    pub orientation: Orientation,
}

impl Robot {
    /// Creates a robot standing on `position`, facing `orientation`.
    pub fn new(position: IVec2, orientation: Orientation) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Grid row of the robot.
    pub fn row(&self) -> i32 {
        self.position.y
    }

    /// Grid column of the robot.
    pub fn column(&self) -> i32 {
        self.position.x
    }

    /// The cell directly in front of the robot.
    pub fn ahead(&self) -> IVec2 {
        self.position + self.orientation.delta()
    }
}

/// A static maze: tiles, where the robot starts, and where it must get to.
///
/// Layouts are read-only once built. Every evaluation gets its own [`Maze`] borrowing the
/// layout, so one layout can serve any number of runs.
///
/// Deserializing goes through the same checks as [`MazeLayout::parse`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct MazeLayout {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    start: Robot,
    goal: IVec2,
}

impl MazeLayout {
    /// Parses a layout from text rows (`#` wall, space free).
    ///
    /// All rows must share one width. Start and goal must be free cells inside the grid.
    /// The goal may sit on the border; walking onto it ends the run before the robot could
    /// step off the grid.
    pub fn parse<S: AsRef<str>>(rows: &[S], start: Robot, goal: IVec2) -> LayoutResult<Self> {
        let height = rows.len();
        let width = rows
            .first()
            .map(|r| r.as_ref().chars().count())
            .filter(|&w| w > 0)
            .ok_or(LayoutError::Empty)?;

        let mut tiles = Vec::with_capacity(width * height);
        for (row, text) in rows.iter().enumerate() {
            let text = text.as_ref();
            let found = text.chars().count();
            if found != width {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (column, c) in text.chars().enumerate() {
                let tile = Tile::from_char(c).ok_or(LayoutError::UnknownTile {
                    tile: c,
                    row,
                    column,
                })?;
                tiles.push(tile);
            }
        }

        Self::try_from(RawLayout {
            width,
            height,
            tiles,
            start,
            goal,
        })
    }

    /// The fixed 16x16 puzzle maze. The robot starts at row 14, column 3 facing up; the
    /// exit is the gap in the top wall at row 0, column 9.
    pub fn reference() -> Self {
        let tiles = REFERENCE_ROWS
            .iter()
            .flat_map(|row| row.chars())
            .map(|c| if c == '#' { Tile::Wall } else { Tile::Free })
            .collect();
        Self {
            width: REFERENCE_ROWS[0].len(),
            height: REFERENCE_ROWS.len(),
            tiles,
            start: Robot::new(cell(14, 3), Orientation::Up),
            goal: cell(0, 9),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Where the robot begins, and which way it faces.
    pub fn start(&self) -> Robot {
        self.start
    }

    /// The exit cell.
    pub fn goal(&self) -> IVec2 {
        self.goal
    }

    /// Tile at `at`, or `None` outside the grid.
    pub fn tile(&self, at: IVec2) -> Option<Tile> {
        let column = usize::try_from(at.x).ok().filter(|&c| c < self.width)?;
        let row = usize::try_from(at.y).ok().filter(|&r| r < self.height)?;
        self.tiles.get(row * self.width + column).copied()
    }

    /// Anything outside the grid counts as wall.
    pub fn is_wall(&self, at: IVec2) -> bool {
        self.tile(at).is_none_or(|t| t == Tile::Wall)
    }

    fn check_free(&self, what: &'static str, at: IVec2) -> LayoutResult<()> {
        match self.tile(at) {
            None => Err(LayoutError::OutOfBounds { what, cell: at }),
            Some(Tile::Wall) => Err(LayoutError::Walled { what, cell: at }),
            Some(Tile::Free) => Ok(()),
        }
    }
}

/// Unchecked layout fields, as they appear on the wire.
#[derive(Deserialize)]
struct RawLayout {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    start: Robot,
    goal: IVec2,
}

impl TryFrom<RawLayout> for MazeLayout {
    type Error = LayoutError;

    fn try_from(raw: RawLayout) -> LayoutResult<Self> {
        let expected = raw.width.saturating_mul(raw.height);
        if expected == 0 {
            return Err(LayoutError::Empty);
        }
        if raw.tiles.len() != expected {
            return Err(LayoutError::TileCount {
                expected,
                found: raw.tiles.len(),
            });
        }

        let layout = Self {
            width: raw.width,
            height: raw.height,
            tiles: raw.tiles,
            start: raw.start,
            goal: raw.goal,
        };
        layout.check_free("start", layout.start.position)?;
        layout.check_free("goal", layout.goal)?;
        Ok(layout)
    }
}

impl Default for MazeLayout {
    fn default() -> Self {
        Self::reference()
    }
}

/// One run's worth of maze state: a borrowed layout and the robot moving through it.
///
/// Only the robot changes; the grid is never touched.
#[derive(Clone, Debug)]
pub struct Maze<'a> {
    layout: &'a MazeLayout,
    robot: Robot,
}

impl<'a> Maze<'a> {
    /// Places the robot at the layout's start.
    pub fn new(layout: &'a MazeLayout) -> Self {
        Self {
            layout,
            robot: layout.start(),
        }
    }

    /// Current position and heading.
    pub fn robot(&self) -> Robot {
        self.robot
    }

    /// The layout this maze was created from.
    pub fn layout(&self) -> &'a MazeLayout {
        self.layout
    }

    /// Whether the cell in front of the robot is a wall. Never moves the robot.
    pub fn is_wall_ahead(&self) -> bool {
        self.layout.is_wall(self.robot.ahead())
    }

    /// Quarter turn counter-clockwise.
    pub fn turn_left(&mut self) {
        self.robot.orientation = self.robot.orientation.turned_left();
    }

    /// Three left turns.
    pub fn turn_right(&mut self) {
        self.turn_left();
        self.turn_left();
        self.turn_left();
    }

    /// Moves one cell ahead unless a wall is in the way; walls leave the robot untouched.
    pub fn step_forward(&mut self) -> StepResult {
        if self.is_wall_ahead() {
            return StepResult::WallHit;
        }
        self.robot.position = self.robot.ahead();
        if self.robot.position == self.layout.goal() {
            StepResult::GoalReached
        } else {
            StepResult::Normal
        }
    }

    /// Turns around, steps, and turns back, whatever the step's result. The heading on return
    /// is always the heading before the call.
    pub fn step_backward(&mut self) -> StepResult {
        self.turn_left();
        self.turn_left();
        let result = self.step_forward();
        self.turn_left();
        self.turn_left();
        result
    }
}
