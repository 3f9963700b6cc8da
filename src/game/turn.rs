/// Whose decision point it is. The cop moves first from the initial state.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Turn {
    #[default]
    Cop,
    Robber,
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Turn::Cop => write!(f, "cop"),
            Turn::Robber => write!(f, "robber"),
        }
    }
}
