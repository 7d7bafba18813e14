// This file is part of WordGrid.
//
// WordGrid is free software: you can redistribute it and/or modify it under the terms of the
// GNU General Public License as published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// WordGrid is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See
// the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with WordGrid. If
// not, see <https://www.gnu.org/licenses/>.

use std::fmt;

use itertools::Itertools;

// Zero-based inside the grid; one_based() for anything shown to a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        return Self { row, col };
    }

    pub fn one_based(self) -> Self {
        return Self { row: self.row + 1, col: self.col + 1 };
    }

    // Only the lower bound is checked here; the grid knows its own size.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (drow, dcol) = direction.delta();
        let row = self.row.checked_add_signed(drow)?;
        let col = self.col.checked_add_signed(dcol)?;
        return Some(Self { row, col });
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "({},{})", self.row, self.col);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
}

impl Direction {
    // Search order from each cell.
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
    ];

    // (row, col)
    pub fn delta(self) -> (isize, isize) {
        return match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
        };
    }
}

// The loaders reject ragged grids. Reads are checked against each row's own length anyway.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    pub fn new(cells: Vec<Vec<char>>) -> Self {
        return Self { cells };
    }

    // Whitespace is dropped, so "C A T" and "CAT" are the same row.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cells = lines
            .into_iter()
            .map(|line| {
                line.as_ref()
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| c.to_ascii_uppercase())
                    .collect::<Vec<char>>()
            })
            .filter(|row| !row.is_empty())
            .collect();
        return Self { cells };
    }

    pub fn rows(&self) -> usize {
        return self.cells.len();
    }

    pub fn cols(&self) -> usize {
        return self.cells.first().map_or(0, Vec::len);
    }

    pub fn is_empty(&self) -> bool {
        return self.rows() == 0 || self.cols() == 0;
    }

    pub fn get(&self, coord: Coord) -> Option<char> {
        return self.cells.get(coord.row)?.get(coord.col).copied();
    }

    pub fn row_coords(&self, row: usize) -> impl Iterator<Item = Coord> {
        let width = self.cells.get(row).map_or(0, Vec::len);
        return (0..width).map(move |col| Coord::new(row, col));
    }

    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        return (0..self.rows()).flat_map(move |row| self.row_coords(row));
    }

    pub fn display(&self) -> String {
        return self.cells.iter()
            .map(|row| row.iter().join(" "))
            .join("\n");
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.display());
    }
}

// reset() unmarks only the cells marked since the last reset.
#[derive(Debug, Clone)]
pub struct VisitedMask {
    marks: Vec<Vec<bool>>,
    path: Vec<Coord>,
}

impl VisitedMask {
    pub fn for_grid(grid: &Grid) -> Self {
        let marks = grid.cells.iter().map(|row| vec![false; row.len()]).collect();
        return Self { marks, path: Vec::new() };
    }

    // Off-grid cells count as visited.
    pub fn is_marked(&self, coord: Coord) -> bool {
        return match self.marks.get(coord.row).and_then(|row| row.get(coord.col)) {
            Some(&marked) => marked,
            None => true,
        };
    }

    pub fn mark(&mut self, coord: Coord) {
        if let Some(cell) = self.marks.get_mut(coord.row).and_then(|row| row.get_mut(coord.col)) {
            *cell = true;
            self.path.push(coord);
        }
    }

    pub fn reset(&mut self) {
        while let Some(coord) = self.path.pop() {
            self.marks[coord.row][coord.col] = false;
        }
    }
}
