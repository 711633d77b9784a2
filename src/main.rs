//! CLI for maze generation

use clap::{Parser, ValueEnum};
use log::info;
use maze_carver::{Glyphs, Maze};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Style {
    /// `#` walls, blank floor, `S` start and `F` finish
    Ascii,
    /// Brick walls on grass
    Emoji,
}

impl Style {
    fn glyphs(self) -> &'static Glyphs {
        match self {
            Style::Ascii => &Glyphs::ASCII,
            Style::Emoji => &Glyphs::EMOJI,
        }
    }
}

/// Perfect maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maze width in cells, between 2 and 20
    #[arg(long, default_value_t = 10)]
    width: usize,

    /// Maze height in cells, between 2 and 20
    #[arg(long, default_value_t = 10)]
    height: usize,

    /// Random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Number of mazes to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Drawing style
    #[arg(long, value_enum, default_value = "ascii")]
    style: Style,
}

/// Generate mazes, print them separated by blank lines
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut maze = match args.seed {
        Some(seed) => Maze::from_seed(args.width, args.height, seed)?,
        None => Maze::create(args.width, args.height)?,
    };
    info!(
        "Generating {} maze(s) of {}x{}",
        args.count,
        maze.width(),
        maze.height()
    );

    for n in 0..args.count {
        if n > 0 {
            maze.regenerate(None, None)?;
            println!();
        }
        println!("{}", maze.render_with(args.style.glyphs()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::{Args, Style};

    #[test]
    fn defaults_to_single_ascii_maze() {
        let args = Args::try_parse_from(["generate-maze"]).unwrap();

        assert_eq!((args.width, args.height, args.count), (10, 10, 1));
        assert_eq!(args.seed, None);
        assert!(matches!(args.style, Style::Ascii));
    }

    #[test]
    fn parses_all_options() {
        let args = Args::try_parse_from([
            "generate-maze",
            "--width",
            "20",
            "--height",
            "2",
            "--seed",
            "99",
            "-c",
            "3",
            "--style",
            "emoji",
        ])
        .unwrap();

        assert_eq!((args.width, args.height, args.count), (20, 2, 3));
        assert_eq!(args.seed, Some(99));
        assert!(matches!(args.style, Style::Emoji));
    }

    #[test]
    fn negative_dimensions_are_rejected() {
        assert!(Args::try_parse_from(["generate-maze", "--width", "-1"]).is_err());
        assert!(Args::try_parse_from(["generate-maze", "--height=-1"]).is_err());
    }
}
