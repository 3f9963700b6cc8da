//! Damage number CLI
//!
//! Evaluates the cops-and-robbers damage game on a literal edge list:
//! the damage number itself, a fixed-start value, or every optimal cop
//! starting vertex. Exits non-zero on malformed edges or absent starts.

use clap::Parser;
use damage::arena::Arena;
use damage::arena::Vertex;
use damage::sweep;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
enum Command {
    #[command(
        about = "Damage number over all starting configurations, or the given ones",
        alias = "num"
    )]
    Number {
        /// Comma-separated edge list, e.g. 0-1,1-2,2-0
        #[arg(required = true)]
        edges: String,
        /// Pin the cop to this starting vertex
        #[arg(long)]
        cop: Option<u32>,
        /// Pin the robber to this starting vertex
        #[arg(long)]
        robber: Option<u32>,
        /// Add a self-loop at every vertex so both players may stay put
        #[arg(long)]
        loops: bool,
    },
    #[command(about = "Every cop starting vertex achieving the damage number")]
    Starts {
        /// Comma-separated edge list, e.g. 0-1,1-2,2-0
        #[arg(required = true)]
        edges: String,
        /// Add a self-loop at every vertex so both players may stay put
        #[arg(long)]
        loops: bool,
    },
}

fn main() -> anyhow::Result<()> {
    damage::log();
    match Command::parse() {
        Command::Number {
            edges,
            cop,
            robber,
            loops,
        } => {
            let arena = build(&edges, loops)?;
            let cop = cop.map(Vertex::from);
            let robber = robber.map(Vertex::from);
            let number = sweep::damage_number(&arena, cop, robber)?;
            println!("{}", number);
            match (cop, robber) {
                (Some(c), Some(r)) => println!(
                    "optimal play from cop {} and robber {} damages {} of {} vertices",
                    c,
                    r,
                    number,
                    arena.order()
                ),
                _ => println!(
                    "the damage number of this {}-vertex graph is {}",
                    arena.order(),
                    number
                ),
            }
        }
        Command::Starts { edges, loops } => {
            let arena = build(&edges, loops)?;
            let starts = sweep::optimal_starts(&arena)?;
            let labels = starts
                .iter()
                .map(Vertex::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            println!("{}", labels);
            println!(
                "{} of {} starting vertices are optimal for the cop",
                starts.len(),
                arena.order()
            );
        }
    }
    Ok(())
}

fn build(edges: &str, loops: bool) -> anyhow::Result<Arena> {
    let mut arena = edges.parse::<Arena>()?;
    if loops {
        arena.loopback();
    }
    log::info!("evaluating a graph on {} vertices", arena.order());
    Ok(arena)
}
