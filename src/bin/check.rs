use anyhow::{anyhow, Context, Result};
use clap::Parser;
use maze_solver::{
    maze::{MazeParser, Parser as _},
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
    println!(
        "Maze of {} row(s) and {} column(s) is valid, its shortest path from {} to {} takes {} step(s).",
        parsed.grid().row_n(),
        parsed.grid().col_n(),
        parsed.entry(),
        parsed.exit(),
        parsed.path_len()
    );

    Ok(())
}
