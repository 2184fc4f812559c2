use std::{
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod maze;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptyFile,
    InvalidSymbol(char),
    InvalidRowCount,
    InvalidColumnCount(usize, usize),
    NoPossibleSolution,
    PathTooShort(usize, usize),
    NotValidStartPoint(usize),
    NotValidEndPoint(usize),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyFile => write!(f, "The maze file is empty."),
            Error::InvalidSymbol(c) => write!(
                f,
                "Invalid symbol({}) in maze, allowed symbols are '.', '#', 'S' and 'E'.",
                c
            ),
            Error::InvalidRowCount => {
                write!(f, "Expect every row of the maze to have at least one cell.")
            }
            Error::InvalidColumnCount(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::NoPossibleSolution => {
                write!(f, "No path exists from the start point to the end point.")
            }
            Error::PathTooShort(steps_n, min_steps_n) => write!(
                f,
                "The shortest path({} step(s)) does not meet the required minimum({} step(s)).",
                steps_n, min_steps_n
            ),
            Error::NotValidStartPoint(count) => write!(
                f,
                "Expect exactly one start point not on a blocked cell, given {}.",
                count
            ),
            Error::NotValidEndPoint(count) => write!(
                f,
                "Expect exactly one end point not on a blocked cell, given {}.",
                count
            ),
        }
    }
}

impl error::Error for Error {}

impl Error {
    pub fn kind(&self) -> &'static str {
        match self {
            Error::EmptyFile => "EmptyFile",
            Error::InvalidSymbol(_) => "InvalidSymbol",
            Error::InvalidRowCount => "InvalidRowCount",
            Error::InvalidColumnCount(_, _) => "InvalidColumnCount",
            Error::NoPossibleSolution => "NoPossibleSolution",
            Error::PathTooShort(_, _) => "PathTooShort",
            Error::NotValidStartPoint(_) => "NotValidStartPoint",
            Error::NotValidEndPoint(_) => "NotValidEndPoint",
        }
    }
}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    #[arg(long, default_value_t = 0)]
    pub min_path_len: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::Up if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::Down => Some(Self::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            Direction::Right => Some(Self::new(self.r, self.c + 1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    // The order here is the search priority, it fixes which one of several
    // equally short paths gets reported.
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];

        &ALL_DIRECTIONS
    }

    pub fn step_char(&self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

pub fn read_maze_text<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))
}
