// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod board;
pub mod config;
pub mod fringe;
pub mod report;
pub mod solver;

pub use crate::board::{BadBoard, Board, Slide, BLANK};
pub use crate::config::{GoalTable, Method};
pub use crate::solver::{solve, SolverOk, Stats};
