use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn solve_valid_maze_outputs_steps_and_difficulty() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.arg("maze.txt");

    cmd.assert()
        .success()
        .stdout(str::contains("DDRRDR"))
        .stdout(str::contains("difficulty 4"));
}

#[test]
fn solve_sealed_maze_fails_with_no_possible_solution() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.arg("maze_sealed.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("NoPossibleSolution"));
}
