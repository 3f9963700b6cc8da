pub mod arena;
pub use arena::*;

pub mod vertex;
pub use vertex::*;
