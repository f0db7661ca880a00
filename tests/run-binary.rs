use std::env;
use std::process::Command;

use assert_cmd::prelude::*;

fn solver() -> Command {
    let mut cmd = Command::cargo_bin("slide-solver").unwrap();
    // keep the report file out of the source tree
    cmd.current_dir(env::temp_dir());
    cmd
}

#[test]
fn run_one_move_bfs() {
    solver()
        .args(&["2", "21 3", "BFS"])
        .assert()
        .success()
        .stdout("\"21 3\"\n\"213 \"\n")
        .stderr("");
}

#[test]
fn run_solved_start() {
    solver()
        .args(&["2", "213 ", "AStar"])
        .assert()
        .success()
        .stdout("\"213 \"\n")
        .stderr("");
}

#[test]
fn run_unsolvable_start() {
    solver()
        .args(&["2", "123 ", "DFS"])
        .assert()
        .success()
        .stdout("No solution found.\n")
        .stderr("");
}

#[test]
fn run_rejects_unknown_method() {
    solver()
        .args(&["2", "21 3", "IDDFS"])
        .assert()
        .failure()
        .stdout(
            "Invalid input: \"IDDFS\" is not a supported algorithm. \
             Choose one of the following: BFS DFS GBFS AStar\n",
        );
}

#[test]
fn run_rejects_bad_alphabet() {
    solver()
        .args(&["2", "2134", "BFS"])
        .assert()
        .failure()
        .stdout(
            "Invalid input: A board of size 2 must include exactly one of each \
             of the following characters: \"213 \".\n",
        );
}

#[test]
fn run_rejects_out_of_range_size() {
    solver()
        .args(&["1", " ", "BFS"])
        .assert()
        .failure()
        .stdout("Invalid input: The size must be in the range [2, 9].\n");
}
