use crate::{Error, Position};

pub mod path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Blocked,
    Entry,
    Exit,
}

impl Cell {
    pub fn can_pass(&self) -> bool {
        *self != Cell::Blocked
    }

    fn from_symbol(c: char) -> Result<Self, Error> {
        match c {
            '.' => Ok(Cell::Open),
            '#' => Ok(Cell::Blocked),
            'S' => Ok(Cell::Entry),
            'E' => Ok(Cell::Exit),
            other => Err(Error::InvalidSymbol(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: usize,
}

impl Grid {
    pub fn from_text(text: &str) -> Result<Self, Error> {
        let trimmed = text.trim_end_matches(['\n', '\r']);
        if trimmed.is_empty() {
            return Err(Error::EmptyFile);
        }

        let mut cells = Vec::new();
        let mut row_n = 0;
        let mut col_n = None;
        for line in trimmed.lines() {
            if line.is_empty() {
                return Err(Error::InvalidRowCount);
            }

            let this_col_n = line.chars().count();
            if *col_n.get_or_insert(this_col_n) != this_col_n {
                return Err(Error::InvalidColumnCount(col_n.unwrap(), this_col_n));
            }

            for c in line.chars() {
                cells.push(Cell::from_symbol(c)?);
            }

            row_n += 1;
        }

        Ok(Self {
            cells,
            row_n,
            col_n: col_n.unwrap_or(0),
        })
    }

    pub fn endpoints(&self) -> Result<(Position, Position), Error> {
        let entries = self.positions_of(Cell::Entry);
        if entries.len() != 1 {
            return Err(Error::NotValidStartPoint(entries.len()));
        }

        let exits = self.positions_of(Cell::Exit);
        if exits.len() != 1 {
            return Err(Error::NotValidEndPoint(exits.len()));
        }

        Ok((entries[0].clone(), exits[0].clone()))
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn cell(&self, pos: &Position) -> Option<&Cell> {
        self.pos_to_ind(pos).and_then(|ind| self.cells.get(ind))
    }

    fn positions_of(&self, kind: Cell) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == kind)
            .map(|(ind, _)| Position::new(ind / self.col_n, ind % self.col_n))
            .collect()
    }

    fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.is_inside(pos) {
            Some(pos.r() * self.col_n + pos.c())
        } else {
            None
        }
    }

    fn is_inside(&self, pos: &Position) -> bool {
        pos.r() < self.row_n && pos.c() < self.col_n
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMaze {
    text: String,
    grid: Grid,
    entry: Position,
    exit: Position,
    path_len: usize,
}

impl ParsedMaze {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn entry(&self) -> &Position {
        &self.entry
    }

    pub fn exit(&self) -> &Position {
        &self.exit
    }

    pub fn path_len(&self) -> usize {
        self.path_len
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub steps: String,
    pub difficulty: u8,
}

pub trait Parser {
    fn parse(&self, text: &str) -> Result<ParsedMaze, Error>;
}

pub trait Solver {
    fn solve(&self, maze: &ParsedMaze) -> Solution;
}

#[derive(Debug, Default)]
pub struct MazeParser {
    min_path_len: usize,
}

impl MazeParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_path_len(min_path_len: usize) -> Self {
        Self { min_path_len }
    }
}

impl Parser for MazeParser {
    fn parse(&self, text: &str) -> Result<ParsedMaze, Error> {
        let grid = Grid::from_text(text)?;
        let (entry, exit) = grid.endpoints()?;
        let path = path::shortest_path(&grid, &entry, &exit).ok_or(Error::NoPossibleSolution)?;
        if path.len() < self.min_path_len {
            return Err(Error::PathTooShort(path.len(), self.min_path_len));
        }

        Ok(ParsedMaze {
            text: text.to_string(),
            grid,
            entry,
            exit,
            path_len: path.len(),
        })
    }
}

#[derive(Debug, Default)]
pub struct MazeSolver;

impl Solver for MazeSolver {
    fn solve(&self, maze: &ParsedMaze) -> Solution {
        // A ParsedMaze is only built after a route was found, so the search
        // can't come back empty here.
        let path = path::shortest_path(maze.grid(), maze.entry(), maze.exit()).unwrap();
        let reachable_n = path::reachable_cell_count(maze.grid(), maze.entry());
        let branching = reachable_n - (path.len() + 1);

        Solution {
            steps: path.encode(),
            difficulty: difficulty(maze.grid(), path.len(), branching),
        }
    }
}

pub fn difficulty(grid: &Grid, path_len: usize, branching: usize) -> u8 {
    let area = grid.row_n() * grid.col_n();
    let raw = 1 + (path_len * 6 + branching * 3) / area.max(1);

    raw.min(10) as u8
}
