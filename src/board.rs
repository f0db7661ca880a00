use std::cell::Cell;
use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use fnv::FnvHashSet;

/// The blank symbol every board must contain exactly once.
pub const BLANK: char = ' ';

/// Why a requested board could not be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadBoard {
    ZeroSize,
    WrongLength { expected: usize, actual: usize },
    NoBlank,
    DuplicateTile(char),
}

impl Display for BadBoard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            BadBoard::ZeroSize => write!(f, "Board size must be positive"),
            BadBoard::WrongLength { expected, actual } => write!(
                f,
                "An n x n board must specify n^2 tiles (expected {}, got {})",
                expected, actual
            ),
            BadBoard::NoBlank => write!(f, "A board must include a blank space"),
            BadBoard::DuplicateTile(tile) => {
                write!(f, "A board must have no duplicate tiles ({:?} repeats)", tile)
            }
        }
    }
}

impl Error for BadBoard {}

/// One puzzle configuration reached during search.
///
/// Immutable after construction except for the one-time heuristic cache.
/// Equality and hashing consider only `tiles`, so a set of boards detects
/// duplicates regardless of where in the tree they were generated.
pub struct Board {
    tiles: Vec<char>,
    n: usize,
    blank_ind: usize,
    depth: i32,
    parent: Option<Rc<Board>>,
    heuristic: Cell<Option<i32>>,
}

impl Board {
    /// The only validating constructor - all untrusted input goes through
    /// here. Successor generation bypasses it because a swap on a valid
    /// board yields a valid board.
    pub fn create(tiles: &str, n: usize) -> Result<Board, BadBoard> {
        if n == 0 {
            return Err(BadBoard::ZeroSize);
        }
        let tiles: Vec<char> = tiles.chars().collect();
        if tiles.len() != n * n {
            return Err(BadBoard::WrongLength {
                expected: n * n,
                actual: tiles.len(),
            });
        }
        let blank_ind = tiles
            .iter()
            .position(|&tile| tile == BLANK)
            .ok_or(BadBoard::NoBlank)?;
        let mut seen = FnvHashSet::default();
        for &tile in &tiles {
            if !seen.insert(tile) {
                return Err(BadBoard::DuplicateTile(tile));
            }
        }
        Ok(Board {
            tiles,
            n,
            blank_ind,
            depth: 0,
            parent: None,
            heuristic: Cell::new(None),
        })
    }

    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Moves from the start state. Every move costs 1, so this doubles as
    /// the path cost g(n).
    pub fn depth(&self) -> i32 {
        self.depth
    }

    pub fn parent(&self) -> Option<&Rc<Board>> {
        self.parent.as_ref()
    }

    /// `None` until `generate_heuristic` has been called.
    pub fn heuristic(&self) -> Option<i32> {
        self.heuristic.get()
    }

    /// Computes and caches the Manhattan distance to `goal`. Never computed
    /// automatically so uninformed searches don't pay for it.
    pub fn generate_heuristic(&self, goal: &Board) -> i32 {
        if let Some(h) = self.heuristic.get() {
            return h;
        }
        let h = manhattan_distance(self, goal);
        self.heuristic.set(Some(h));
        h
    }
}

// In row-major order a tile's coordinates are recoverable from its linear
// index: row = i / n, col = i % n.
fn manhattan_distance(first: &Board, second: &Board) -> i32 {
    let n = first.n;
    let mut total = 0;
    for (ind, &tile) in first.tiles.iter().enumerate() {
        if tile == BLANK {
            continue; // the blank is not counted
        }
        let other_ind = match second.tiles.iter().position(|&t| t == tile) {
            Some(i) => i,
            None => continue, // a tile absent from the goal contributes nothing
        };
        let dr = (ind / n) as i32 - (other_ind / n) as i32;
        let dc = (ind % n) as i32 - (other_ind % n) as i32;
        total += dr.abs() + dc.abs();
    }
    total
}

/// Successor generation on shared handles. A child keeps a handle to its
/// parent so a solution path can be reconstructed by walking upward; an
/// illegal move (blank on the edge) is absence, not an error.
pub trait Slide: Sized {
    fn move_up(&self) -> Option<Self>;
    fn move_down(&self) -> Option<Self>;
    fn move_left(&self) -> Option<Self>;
    fn move_right(&self) -> Option<Self>;
}

impl Slide for Rc<Board> {
    fn move_up(&self) -> Option<Rc<Board>> {
        // the first row has indices 0 to n-1
        if self.blank_ind < self.n {
            None
        } else {
            Some(child(self, self.blank_ind - self.n))
        }
    }

    fn move_down(&self) -> Option<Rc<Board>> {
        // the last row has indices n^2-n to n^2-1
        if self.blank_ind >= self.n * self.n - self.n {
            None
        } else {
            Some(child(self, self.blank_ind + self.n))
        }
    }

    fn move_left(&self) -> Option<Rc<Board>> {
        // the first column has indices 0, n, 2n, ...
        if self.blank_ind % self.n == 0 {
            None
        } else {
            Some(child(self, self.blank_ind - 1))
        }
    }

    fn move_right(&self) -> Option<Rc<Board>> {
        // the last column has indices n-1, 2n-1, 3n-1, ...
        if self.blank_ind % self.n == self.n - 1 {
            None
        } else {
            Some(child(self, self.blank_ind + 1))
        }
    }
}

fn child(parent: &Rc<Board>, new_ind: usize) -> Rc<Board> {
    let mut tiles = parent.tiles.clone();
    tiles.swap(parent.blank_ind, new_ind);
    Rc::new(Board {
        tiles,
        n: parent.n,
        blank_ind: new_ind,
        depth: parent.depth + 1,
        parent: Some(Rc::clone(parent)),
        heuristic: Cell::new(None),
    })
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tiles.hash(state);
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for &tile in &self.tiles {
            write!(f, "{}", tile)?;
        }
        Ok(())
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{ tiles: {:?}, n: {}, depth: {} }}", self.to_string(), self.n, self.depth)
    }
}
