/// Opaque vertex label chosen by the caller.
/// The search assumes nothing about its structure beyond hashability;
/// the [`Arena`](crate::arena::Arena) maps labels to graph indices internally.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct Vertex(u32);

/// u32 isomorphism
impl From<u32> for Vertex {
    fn from(n: u32) -> Self {
        Self(n)
    }
}
impl From<Vertex> for u32 {
    fn from(v: Vertex) -> Self {
        v.0
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
