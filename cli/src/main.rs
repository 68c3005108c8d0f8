mod samples;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wall::Block;
use wall::block::composite::CompositeBlock;

use crate::samples::Sample;

#[derive(Parser)]
#[command(name = "wall", version, about = "Query a wall of blocks")]
struct Cli {
    /// Log query details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Built-in wall to query
    #[arg(short, long, global = true, value_enum, default_value = "nested")]
    sample: Sample,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the total number of blocks, composites included
    Count,

    /// Print the first block with this color (exit 1 if none)
    Color { color: String },

    /// Print every atomic block made of this material
    Material { material: String },

    /// Print the wall, one block per line
    Show,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let wall = cli.sample.build();

    match cli.command {
        Command::Count => println!("{}", wall.count()),
        Command::Color { color } => match wall.find_by_color(&color) {
            Some(block) => println!("{}", block),
            None => {
                eprintln!("no block with color '{}'", color);
                process::exit(1);
            }
        },
        Command::Material { material } => {
            for block in wall.find_by_material(&material) {
                println!("{}", block);
            }
        }
        Command::Show => print_blocks(wall.blocks(), 0),
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn print_blocks(blocks: &[Block], indent: usize) {
    let pad = "  ".repeat(indent);
    for block in blocks {
        match block {
            Block::Atomic(_) => println!("{}- {}", pad, block),
            Block::Composite(composite) => {
                println!("{}- composite{}", pad, empty_marker(composite));
                print_blocks(composite.children(), indent + 1);
            }
        }
    }
}

fn empty_marker(composite: &CompositeBlock) -> &'static str {
    if composite.is_empty() { " (empty)" } else { "" }
}
