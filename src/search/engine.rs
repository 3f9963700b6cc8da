use crate::Damage;
use crate::SEARCH_CEILING;
use crate::arena::arena::Arena;
use crate::arena::vertex::Vertex;
use crate::error::Error;
use crate::game::state::GameState;
use crate::game::turn::Turn;
use std::collections::HashMap;
use std::collections::HashSet;

/// A subtree value plus whether it was context-free.
/// A value derived from a path-local repeat depends on the DFS path that
/// produced it and must never enter the transposition table.
#[derive(Debug, Clone, Copy)]
struct Eval {
    value: Damage,
    pure: bool,
}

impl Eval {
    fn pure(value: Damage) -> Self {
        Self { value, pure: true }
    }
    fn taint(value: Damage) -> Self {
        Self { value, pure: false }
    }
}

/// Adversarial search over one cop start.
///
/// Runs depth-first minimax with alpha-beta pruning over integer windows in
/// `[0, order]`. The cop minimizes eventual damage, the robber maximizes it.
/// Three devices keep the search finite and fast:
///
/// - an upper bound `order - (degree(cop) - 1)` derived from the cop's
///   starting degree, treated as a terminal cutoff once damage reaches it;
/// - a path-local visited set: a state reappearing on the current DFS path
///   is terminal at its current damage, which rules out infinite play;
/// - on forests only, the cop descends into the single neighbor closest to
///   the robber, since a tree admits a unique value-optimal reply.
///
/// States fully resolved without touching a path repeat are cached in a
/// transposition table; states merely on the stack never are.
pub struct Engine<'a> {
    arena: &'a Arena,
    cop: Vertex,
    bound: Damage,
    forest: bool,
    ceiling: usize,
    nodes: usize,
    visited: HashSet<GameState>,
    table: HashMap<GameState, Damage>,
}

impl<'a> Engine<'a> {
    /// The bound is cop-specific, so one engine serves exactly one cop start.
    pub fn new(arena: &'a Arena, cop: Vertex) -> Result<Self, Error> {
        if arena.order() == 0 {
            return Err(Error::EmptyGraph);
        }
        if !arena.contains(cop) {
            return Err(Error::InvalidVertex(cop));
        }
        let bound = (arena.order() + 1).saturating_sub(arena.degree(cop));
        let forest = arena.forest();
        log::debug!("engine for cop {}: bound {} forest {}", cop, bound, forest);
        Ok(Self {
            arena,
            cop,
            bound,
            forest,
            ceiling: SEARCH_CEILING,
            nodes: 0,
            visited: HashSet::new(),
            table: HashMap::new(),
        })
    }

    /// Cap the node budget of subsequent evaluations.
    pub fn with_ceiling(mut self, ceiling: usize) -> Self {
        self.ceiling = ceiling;
        self
    }

    pub fn cop(&self) -> Vertex {
        self.cop
    }

    /// Optimal-play damage from this engine's cop start against the given
    /// robber start. Deterministic and repeatable: fresh evaluations of the
    /// same configuration always agree.
    pub fn evaluate(&mut self, robber: Vertex) -> Result<Damage, Error> {
        if !self.arena.contains(robber) {
            return Err(Error::InvalidVertex(robber));
        }
        self.visited.clear();
        self.nodes = 0;
        let root = GameState::root(self.cop, robber);
        let best = self.minimax(root, 0, self.arena.order())?;
        Ok(best.value)
    }

    fn minimax(&mut self, state: GameState, alpha: Damage, beta: Damage) -> Result<Eval, Error> {
        self.nodes += 1;
        if self.nodes > self.ceiling {
            return Err(Error::Exhausted(self.ceiling));
        }
        if state.cop() == state.robber() || state.damage() == self.bound {
            return Ok(Eval::pure(state.damage()));
        }
        if self.visited.contains(&state) {
            return Ok(Eval::taint(state.damage()));
        }
        if let Some(&value) = self.table.get(&state) {
            return Ok(Eval::pure(value));
        }
        self.visited.insert(state.clone());
        let best = match state.turn() {
            Turn::Cop => self.minimize(&state, alpha, beta),
            Turn::Robber => self.maximize(&state, alpha, beta),
        };
        self.visited.remove(&state);
        let best = best?;
        if best.pure && alpha < best.value && best.value < beta {
            self.table.insert(state, best.value);
        }
        Ok(best)
    }

    /// Cop ply. Captures adjacent robbers without branching; otherwise
    /// MIN-reduces over candidate cop positions, tightening beta.
    fn minimize(&mut self, state: &GameState, alpha: Damage, mut beta: Damage) -> Result<Eval, Error> {
        if self.arena.adjacent(state.cop(), state.robber()) {
            return Ok(Eval::pure(state.damage()));
        }
        let moves = self.arena.neighbors(state.cop());
        if moves.is_empty() {
            return Ok(Eval::pure(state.damage()));
        }
        let moves = match self.forest {
            true => vec![self.chase(&moves, state.robber())],
            false => moves,
        };
        let mut best = Eval::pure(self.arena.order());
        for v in moves {
            let child = self.minimax(state.cop_to(v), alpha, beta)?;
            best.value = best.value.min(child.value);
            best.pure &= child.pure;
            beta = beta.min(child.value);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    }

    /// Robber ply. Scores the robber's current vertex, then MAX-reduces over
    /// neighbors not guarded by the cop, tightening alpha. A robber with no
    /// legal move surrenders at its accumulated damage.
    fn maximize(&mut self, state: &GameState, mut alpha: Damage, beta: Damage) -> Result<Eval, Error> {
        let moves = self
            .arena
            .neighbors(state.robber())
            .into_iter()
            .filter(|&v| !self.arena.adjacent(state.cop(), v))
            .collect::<Vec<_>>();
        if moves.is_empty() {
            return Ok(Eval::pure(state.surrender()));
        }
        let mut best = Eval::pure(0);
        for v in moves {
            let child = self.minimax(state.robber_to(v), alpha, beta)?;
            best.value = best.value.max(child.value);
            best.pure &= child.pure;
            alpha = alpha.max(child.value);
            if beta <= alpha {
                break;
            }
        }
        Ok(best)
    }

    /// The unique value-optimal cop reply on a forest: the neighbor nearest
    /// to the robber, first in adapter order on ties. Unreachable robbers
    /// sort last.
    fn chase(&self, moves: &[Vertex], robber: Vertex) -> Vertex {
        moves
            .iter()
            .copied()
            .min_by_key(|&v| self.arena.distance(v, robber).unwrap_or(usize::MAX))
            .expect("cop has at least one move")
    }
}
