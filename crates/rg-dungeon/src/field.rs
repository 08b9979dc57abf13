//! Dungeon grid: coordinates, directions and cells

use bitflags::bitflags;
use rg_core::Tile;
use strum::{EnumIter, IntoEnumIterator};

/// Grid coordinate, `x` is the column and `y` the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub const fn step(self, dir: Direction, scale: i32) -> Coord {
        let (dx, dy) = dir.delta();
        Coord::new(self.x + dx * scale, self.y + dy * scale)
    }

    /// The eight surrounding coordinates
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        Direction::iter().map(move |dir| self.step(dir, 1))
    }
}

/// Movement direction. The first four are the cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// Classic roguelike movement keys
    pub const fn from_key(key: char) -> Option<Direction> {
        match key {
            'h' => Some(Direction::Left),
            'j' => Some(Direction::Down),
            'k' => Some(Direction::Up),
            'l' => Some(Direction::Right),
            'y' => Some(Direction::UpLeft),
            'u' => Some(Direction::UpRight),
            'b' => Some(Direction::DownLeft),
            'n' => Some(Direction::DownRight),
            _ => None,
        }
    }

    pub fn cardinal() -> impl Iterator<Item = Direction> {
        Direction::iter().take(4)
    }
}

bitflags! {
    /// Per-cell flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellAttr: u8 {
        /// The player has seen this cell
        const SEEN   = 0b0000_0001;
        /// The cell is concealed until the player searches next to it
        const HIDDEN = 0b0000_0010;
    }
}

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub surface: Tile,
    pub attr: CellAttr,
}

impl Cell {
    pub fn new(surface: Tile) -> Self {
        Self {
            surface,
            attr: CellAttr::empty(),
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.attr.contains(CellAttr::HIDDEN)
    }

    /// Whether the cell is drawn on the screen
    pub fn is_drawn(&self) -> bool {
        self.attr.contains(CellAttr::SEEN) && !self.is_hidden()
    }

    /// Whether the player can stand on this cell
    pub fn is_passable(&self) -> bool {
        !self.is_hidden()
            && matches!(
                self.surface,
                Tile::Passage | Tile::Floor | Tile::Door | Tile::Stair | Tile::Trap
            )
    }
}

/// Rectangular grid of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Field {
    /// A field of solid rock
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, cd: Coord) -> bool {
        cd.x >= 0 && cd.y >= 0 && (cd.x as usize) < self.width && (cd.y as usize) < self.height
    }

    fn offset(&self, cd: Coord) -> Option<usize> {
        self.contains(cd)
            .then(|| cd.y as usize * self.width + cd.x as usize)
    }

    pub fn get(&self, cd: Coord) -> Option<&Cell> {
        self.offset(cd).map(|i| &self.cells[i])
    }

    pub fn get_mut(&mut self, cd: Coord) -> Option<&mut Cell> {
        self.offset(cd).map(move |i| &mut self.cells[i])
    }

    /// Coordinates of every cell with the given surface, in row-major order
    pub fn coords_of(&self, surface: Tile) -> Vec<Coord> {
        self.coords()
            .filter(|cd| self.get(*cd).is_some_and(|c| c.surface == surface))
            .collect()
    }

    /// Every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..height).flat_map(move |y| (0..width).map(move |x| Coord::new(x, y)))
    }

    /// Mark every cell as seen
    pub fn reveal_all(&mut self) {
        for cell in &mut self.cells {
            cell.attr.insert(CellAttr::SEEN);
        }
    }
}
