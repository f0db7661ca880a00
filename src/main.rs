use std::fmt::Display;
use std::process;
use std::rc::Rc;

use clap::{App, Arg};
use fnv::FnvHashSet;

use slide_solver::board::Board;
use slide_solver::config::{GoalTable, Method, MAX_SIZE, MIN_SIZE};
use slide_solver::report::{self, Record};
use slide_solver::solver;

fn main() {
    env_logger::init();

    let matches = App::new("slide-solver")
        .about("Solves generalized n x n sliding-tile puzzles")
        .arg(Arg::with_name("size")
            .required(true)
            .help("board side length (2-9)"))
        .arg(Arg::with_name("initial")
            .required(true)
            .help("initial configuration in row-major order"))
        .arg(Arg::with_name("method")
            .required(true)
            .help("one of BFS, DFS, GBFS, AStar"))
        .arg(Arg::with_name("report")
            .short("-r")
            .long("--report")
            .takes_value(true)
            .default_value("results.txt")
            .help("statistics report file (appended to)"))
        .get_matches();

    let goals = GoalTable::builtin();

    let size_arg = matches.value_of("size").unwrap();
    let size: usize = size_arg
        .parse()
        .unwrap_or_else(|_| invalid_input(format!("{:?} is not a valid integer.", size_arg)));
    if size < MIN_SIZE || size > MAX_SIZE {
        invalid_input(format!(
            "The size must be in the range [{}, {}].",
            MIN_SIZE, MAX_SIZE
        ));
    }
    // the range check makes this infallible
    let goal_tiles = goals
        .goal(size)
        .unwrap_or_else(|| invalid_input(format!("No goal configuration for size {}.", size)));

    let initial_tiles = matches.value_of("initial").unwrap();
    if !uses_exact_alphabet(initial_tiles, goal_tiles) {
        invalid_input(format!(
            "A board of size {} must include exactly one of each of the following characters: {:?}.",
            size, goal_tiles
        ));
    }

    let method: Method = matches
        .value_of("method")
        .unwrap()
        .parse()
        .unwrap_or_else(|err| invalid_input(err));

    // the alphabet check should already reject anything create() would,
    // but the board has the final say
    let start = Board::create(initial_tiles, size).unwrap_or_else(|err| invalid_input(err));

    let goal = Board::create(goal_tiles, size).unwrap_or_else(|err| {
        println!("Program error: the goal state could not be created: {}", err);
        process::exit(1);
    });

    let outcome = solver::solve(method, Rc::new(start), &goal);

    match outcome.path() {
        Some(path) => {
            for board in &path {
                println!("{:?}", board.to_string());
            }
        }
        None => println!("No solution found."),
    }

    let report_path = matches.value_of("report").unwrap();
    let record = Record {
        size,
        initial: initial_tiles,
        goal: goal_tiles,
        method,
        stats: outcome.stats,
    };
    if let Err(err) = report::append(report_path, &record) {
        eprintln!(
            "The results could not be written to {:?}: {}. \
             Make sure the program is run with sufficient permissions.",
            report_path, err
        );
    }
}

fn invalid_input(reason: impl Display) -> ! {
    println!("Invalid input: {}", reason);
    process::exit(1);
}

/// The initial string must contain exactly one of each character of the
/// size's alphabet, which is the goal string itself.
fn uses_exact_alphabet(initial: &str, alphabet: &str) -> bool {
    let distinct: FnvHashSet<char> = initial.chars().collect();
    distinct.len() == initial.chars().count()
        && distinct.len() == alphabet.chars().count()
        && initial.chars().all(|c| alphabet.contains(c))
}
