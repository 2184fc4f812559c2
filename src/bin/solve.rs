use anyhow::{anyhow, Context, Result};
use clap::Parser;
use maze_solver::{
    maze::{MazeParser, MazeSolver, Parser as _, Solver as _},
    CLIArgs,
};

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let text = maze_solver::read_maze_text(&args.input_path)?;
    let parser = MazeParser::with_min_path_len(args.min_path_len);
    let parsed = parser
        .parse(&text)
        .map_err(|error| anyhow!("{}: {}", error.kind(), error))
        .with_context(|| {
            format!(
                "Maze in given file({}) is not valid.",
                args.input_path.display()
            )
        })?;
    let solution = MazeSolver.solve(&parsed);
    println!(
        "Solved maze from {} to {} in {} step(s) with difficulty {}: {}",
        parsed.entry(),
        parsed.exit(),
        solution.steps.len(),
        solution.difficulty,
        solution.steps
    );

    Ok(())
}
