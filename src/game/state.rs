use super::turn::Turn;
use crate::Damage;
use crate::arena::vertex::Vertex;
use std::collections::BTreeSet;

/// An immutable snapshot of the pursuit: both positions, the set of vertices
/// the robber has damaged so far, and whose turn it is.
///
/// The damaged set is append-only along any play sequence and is cloned on
/// each robber resolution, so sibling branches of the search tree never
/// observe each other's mutations. The robber's current vertex joins the set
/// only when the robber resolves a turn there, never by mere occupancy, so
/// at the root the robber's start is not yet damaged.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
pub struct GameState {
    cop: Vertex,
    robber: Vertex,
    damaged: BTreeSet<Vertex>,
    turn: Turn,
}

impl GameState {
    /// Initial state. No damage yet; the cop is to move.
    pub fn root(cop: Vertex, robber: Vertex) -> Self {
        Self {
            cop,
            robber,
            damaged: BTreeSet::new(),
            turn: Turn::Cop,
        }
    }

    /// The cop steps to a neighboring vertex, handing the turn over.
    pub fn cop_to(&self, v: Vertex) -> Self {
        Self {
            cop: v,
            robber: self.robber,
            damaged: self.damaged.clone(),
            turn: Turn::Robber,
        }
    }

    /// The robber resolves its turn: its current vertex is scored as damaged
    /// and it steps to a neighboring vertex (possibly staying via self-loop).
    pub fn robber_to(&self, v: Vertex) -> Self {
        let mut damaged = self.damaged.clone();
        damaged.insert(self.robber);
        Self {
            cop: self.cop,
            robber: v,
            damaged,
            turn: Turn::Cop,
        }
    }

    pub fn cop(&self) -> Vertex {
        self.cop
    }
    pub fn robber(&self) -> Vertex {
        self.robber
    }
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Vertices damaged so far.
    pub fn damage(&self) -> Damage {
        self.damaged.len()
    }

    /// Damage counting the robber's current vertex, the terminal value when
    /// the robber is trapped with no legal move.
    pub fn surrender(&self) -> Damage {
        self.damage() + !self.damaged.contains(&self.robber) as Damage
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "cop {} robber {} damage {} ({} to move)",
            self.cop,
            self.robber,
            self.damage(),
            self.turn
        )
    }
}
