use crate::error::Error;
use grid_2d::{Coord, Grid, Size};

#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    Blocked,
}

impl Cell {
    pub fn is_open(self) -> bool {
        self == Cell::Open
    }
}

/// Read-only view of a map that the search may walk over.
///
/// `cell` returns `None` for coordinates outside the map. Every bounds and
/// obstacle check made by the search goes through `is_open`.
pub trait OccupancyGrid {
    fn cell(&self, coord: Coord) -> Option<Cell>;
    fn is_open(&self, coord: Coord) -> bool {
        self.cell(coord).map_or(false, Cell::is_open)
    }
    fn contains(&self, coord: Coord) -> bool {
        self.cell(coord).is_some()
    }
}

impl OccupancyGrid for Grid<Cell> {
    fn cell(&self, coord: Coord) -> Option<Cell> {
        self.get(coord).cloned()
    }
}

/// `true` marks a blocked cell.
impl OccupancyGrid for Grid<bool> {
    fn cell(&self, coord: Coord) -> Option<Cell> {
        self.get(coord)
            .map(|&blocked| if blocked { Cell::Blocked } else { Cell::Open })
    }
}

pub const AVAILABLE: u8 = 0;
pub const OBSTACLE: u8 = 1;

/// Immutable occupancy map.
///
/// Rows shorter than the widest row are padded with blocked cells, so a
/// coordinate past the end of its own row is never open.
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct OccupancyMap {
    cells: Grid<Cell>,
}

impl OccupancyMap {
    pub fn from_fn<F>(size: Size, f: F) -> Self
    where
        F: FnMut(Coord) -> Cell,
    {
        Self {
            cells: Grid::new_fn(size, f),
        }
    }

    pub fn from_cells<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, Error> {
        let width = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
        if width == 0 {
            return Err(Error::EmptyGrid);
        }
        let size = Size::new(width as u32, rows.len() as u32);
        Ok(Self::from_fn(size, |coord| {
            rows[coord.y as usize]
                .as_ref()
                .get(coord.x as usize)
                .cloned()
                .unwrap_or(Cell::Blocked)
        }))
    }

    /// Builds a map from rows of `AVAILABLE` / `OBSTACLE` flags.
    pub fn from_flags<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, Error> {
        let cells = rows
            .iter()
            .enumerate()
            .map(|(row, flags)| {
                flags
                    .as_ref()
                    .iter()
                    .enumerate()
                    .map(|(column, &value)| match value {
                        AVAILABLE => Ok(Cell::Open),
                        OBSTACLE => Ok(Cell::Blocked),
                        _ => Err(Error::UnknownCellValue { value, row, column }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(&cells)
    }

    /// Builds a map from rows drawn with `.` (open) and `#` (blocked).
    pub fn from_strings<S: AsRef<str>>(rows: &[S]) -> Result<Self, Error> {
        let cells = rows
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.as_ref()
                    .chars()
                    .enumerate()
                    .map(|(column, symbol)| match symbol {
                        '.' => Ok(Cell::Open),
                        '#' => Ok(Cell::Blocked),
                        _ => Err(Error::UnknownCellSymbol {
                            symbol,
                            row,
                            column,
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_cells(&cells)
    }

    pub fn size(&self) -> Size {
        self.cells.size()
    }

    pub fn width(&self) -> u32 {
        self.cells.width()
    }

    pub fn height(&self) -> u32 {
        self.cells.height()
    }

    pub fn num_open(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_open()).count()
    }
}

impl OccupancyGrid for OccupancyMap {
    fn cell(&self, coord: Coord) -> Option<Cell> {
        self.cells.get(coord).cloned()
    }
}
