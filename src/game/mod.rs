pub mod state;
pub use state::*;

pub mod turn;
pub use turn::*;
