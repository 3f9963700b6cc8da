//! Damage number of the cops-and-robbers pursuit game.
//!
//! One cop and one robber alternate moves along the edges of an undirected
//! graph. Every vertex the robber occupies at the moment it resolves a turn
//! is damaged; the cop plays to minimize the number of damaged vertices
//! before capture, the robber to maximize it. The damage number of a graph
//! is the min over cop starts of the max over robber starts of this
//! optimal-play outcome.

pub mod arena;
pub mod error;
pub mod game;
pub mod search;
pub mod sweep;

/// Count of damaged vertices. Doubles as the minimax value.
pub type Damage = usize;

/// Default node budget for a single adversarial search.
/// The visited-set guard bounds correctness, not depth, so searches that
/// blow past this fail with `Error::Exhausted` instead of the call stack.
pub const SEARCH_CEILING: usize = 0x4000000;

/// Random instance generation for property tests and benchmarks.
pub trait Arbitrary {
    fn random() -> Self;
}

/// Initialize terminal logging on stderr.
/// Stdout is reserved for the derived integer the binary prints.
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
