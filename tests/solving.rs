use maze_solver::{
    maze::{difficulty, MazeParser, MazeSolver, ParsedMaze, Parser, Solver},
    Direction, Position,
};

fn replay(parsed: &ParsedMaze, steps: &str) -> Position {
    let mut cur_pos = parsed.entry().clone();
    for step in steps.chars() {
        let dir = match step {
            'U' => Direction::Up,
            'D' => Direction::Down,
            'L' => Direction::Left,
            'R' => Direction::Right,
            other => panic!("Unexpected step character({}).", other),
        };
        cur_pos = cur_pos.neighbor(dir).unwrap();
        assert!(parsed
            .grid()
            .cell(&cur_pos)
            .is_some_and(|cell| cell.can_pass()));
    }

    cur_pos
}

#[test]
fn solve_replays_from_entry_to_exit() {
    let parsed = MazeParser::new()
        .parse("S.#.\n.#..\n....\n##.E")
        .unwrap();

    let solution = MazeSolver.solve(&parsed);

    assert_eq!(solution.steps.len(), parsed.path_len());
    assert_eq!(replay(&parsed, &solution.steps), *parsed.exit());
}

#[test]
fn solve_single_corridor_yields_forced_steps() {
    let parsed = MazeParser::new().parse("S#\n..\n#E").unwrap();

    let solution = MazeSolver.solve(&parsed);

    assert_eq!(solution.steps, "DRD");
}

#[test]
fn solve_prefers_fixed_direction_order_between_equal_paths() {
    // Fully open grid, every shortest route has the same length; the
    // Up/Down/Left/Right priority pins which one is reported.
    let parsed = MazeParser::new().parse("S..\n...\n..E").unwrap();

    let solution = MazeSolver.solve(&parsed);

    assert_eq!(solution.steps.len(), 4);
    assert_eq!(replay(&parsed, &solution.steps), *parsed.exit());
    let repeat = MazeSolver.solve(&parsed);
    assert_eq!(solution.steps, repeat.steps);
}

#[test]
fn solve_same_maze_twice_yields_identical_solutions() {
    let parsed = MazeParser::new()
        .parse("S.#.\n.#..\n....\n##.E")
        .unwrap();

    assert_eq!(MazeSolver.solve(&parsed), MazeSolver.solve(&parsed));
}

#[test]
fn solve_reports_difficulty_within_bounds() {
    for text in ["SE", "S#\n..\n#E", "S.#.\n.#..\n....\n##.E", "S..\n...\n..E"] {
        let parsed = MazeParser::new().parse(text).unwrap();

        let solution = MazeSolver.solve(&parsed);

        assert!((1..=10).contains(&solution.difficulty));
    }
}

#[test]
fn solve_minimal_one_step_maze() {
    let parsed = MazeParser::new().parse("SE").unwrap();

    let solution = MazeSolver.solve(&parsed);

    assert_eq!(solution.steps, "R");
    assert!((1..=10).contains(&solution.difficulty));
}

#[test]
fn difficulty_is_monotonic_in_path_length() {
    let parsed = MazeParser::new().parse("S..\n...\n..E").unwrap();
    let grid = parsed.grid();

    for path_len in 0..20 {
        assert!(difficulty(grid, path_len, 0) <= difficulty(grid, path_len + 1, 0));
        assert!(difficulty(grid, path_len, 3) <= difficulty(grid, path_len + 1, 3));
    }
}

#[test]
fn difficulty_is_monotonic_in_branching() {
    let parsed = MazeParser::new().parse("S..\n...\n..E").unwrap();
    let grid = parsed.grid();

    for branching in 0..20 {
        assert!(difficulty(grid, 4, branching) <= difficulty(grid, 4, branching + 1));
    }
}

#[test]
fn difficulty_is_clamped_to_ten() {
    let parsed = MazeParser::new().parse("SE").unwrap();

    assert_eq!(difficulty(parsed.grid(), 1000, 1000), 10);
}
