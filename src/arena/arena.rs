use super::vertex::Vertex;
use crate::Arbitrary;
use crate::error::Error;
use petgraph::graph::NodeIndex;
use petgraph::graph::UnGraph;
use petgraph::unionfind::UnionFind;
use std::collections::HashMap;

/// The playing field: a finite undirected graph over caller-chosen labels.
///
/// Self-loops are meaningful, they model the option to stay put on a turn,
/// and are only ever added by the caller (see [`Arena::loopback`]).
/// Duplicate edges are idempotent. The graph is never mutated during search.
#[derive(Debug, Default, Clone)]
pub struct Arena {
    graph: UnGraph<Vertex, ()>,
    index: HashMap<Vertex, NodeIndex>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an edge, creating endpoints as needed. Idempotent.
    pub fn join(&mut self, a: Vertex, b: Vertex) {
        let i = self.intern(a);
        let j = self.intern(b);
        self.graph.update_edge(i, j, ());
    }

    /// Add a self-loop at every vertex, enabling "stay" moves for both players.
    pub fn loopback(&mut self) {
        for i in self.graph.node_indices().collect::<Vec<_>>() {
            self.graph.update_edge(i, i, ());
        }
    }

    pub fn order(&self) -> usize {
        self.graph.node_count()
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.index.contains_key(&v)
    }

    /// Vertices in insertion order. Sweeps and tie-breaks iterate this order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.graph.node_weights().copied()
    }

    /// Adjacent vertices in a fixed, insertion-derived order.
    /// A self-loop yields the vertex itself exactly once.
    pub fn neighbors(&self, v: Vertex) -> Vec<Vertex> {
        self.graph
            .neighbors(self.at(v))
            .map(|i| self.graph[i])
            .collect()
    }

    pub fn adjacent(&self, a: Vertex, b: Vertex) -> bool {
        self.graph.find_edge(self.at(a), self.at(b)).is_some()
    }

    /// Incident edge endpoints, so a self-loop contributes two.
    pub fn degree(&self, v: Vertex) -> usize {
        let i = self.at(v);
        let looped = self.graph.find_edge(i, i).is_some() as usize;
        self.graph.neighbors(i).count() + looped
    }

    /// Unweighted shortest-path length, None across components.
    pub fn distance(&self, a: Vertex, b: Vertex) -> Option<usize> {
        let goal = self.at(b);
        petgraph::algo::dijkstra(&self.graph, self.at(a), Some(goal), |_| 1usize)
            .get(&goal)
            .copied()
    }

    /// True iff the graph has no simple cycle of length > 1.
    /// Self-loops never count as cycles here.
    pub fn forest(&self) -> bool {
        let mut sets = UnionFind::<usize>::new(self.graph.node_count());
        self.graph
            .edge_indices()
            .filter_map(|e| self.graph.edge_endpoints(e))
            .filter(|(i, j)| i != j)
            .all(|(i, j)| sets.union(i.index(), j.index()))
    }

    fn intern(&mut self, v: Vertex) -> NodeIndex {
        match self.index.get(&v) {
            Some(&i) => i,
            None => {
                let i = self.graph.add_node(v);
                self.index.insert(v, i);
                i
            }
        }
    }

    fn at(&self, v: Vertex) -> NodeIndex {
        self.index.get(&v).copied().expect("vertex in graph")
    }
}

/// edge-list isomorphism
impl From<Vec<(u32, u32)>> for Arena {
    fn from(edges: Vec<(u32, u32)>) -> Self {
        let mut arena = Self::new();
        for (a, b) in edges {
            arena.join(Vertex::from(a), Vertex::from(b));
        }
        arena
    }
}

/// Parse a comma-separated edge list like `0-1,1-2,2-0`.
impl std::str::FromStr for Arena {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut arena = Self::new();
        for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let (a, b) = token
                .split_once('-')
                .ok_or_else(|| Error::Input(token.to_string()))?;
            let a = a.trim().parse::<u32>();
            let b = b.trim().parse::<u32>();
            match (a, b) {
                (Ok(a), Ok(b)) => arena.join(Vertex::from(a), Vertex::from(b)),
                _ => return Err(Error::Input(token.to_string())),
            }
        }
        Ok(arena)
    }
}

/// Random looped graph: a ring with a few chords, every vertex able to stay.
impl Arbitrary for Arena {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let n = rng.random_range(3..8u32);
        let mut arena = Self::from((0..n).map(|i| (i, (i + 1) % n)).collect::<Vec<_>>());
        for _ in 0..rng.random_range(0..n) {
            let a = rng.random_range(0..n);
            let b = rng.random_range(0..n);
            if a != b {
                arena.join(Vertex::from(a), Vertex::from(b));
            }
        }
        arena.loopback();
        arena
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn path3() -> Arena {
        Arena::from(vec![(0, 1), (1, 2)])
    }

    #[test]
    fn joins_are_idempotent() {
        let mut arena = path3();
        arena.join(Vertex::from(0), Vertex::from(1));
        arena.join(Vertex::from(1), Vertex::from(0));
        assert_eq!(arena.order(), 3);
        assert_eq!(arena.degree(Vertex::from(0)), 1);
    }

    #[test]
    fn loops_double_degree_contribution() {
        let mut arena = path3();
        assert_eq!(arena.degree(Vertex::from(1)), 2);
        arena.loopback();
        assert_eq!(arena.degree(Vertex::from(1)), 4);
        assert_eq!(arena.degree(Vertex::from(0)), 3);
    }

    #[test]
    fn loops_appear_once_among_neighbors() {
        let mut arena = path3();
        arena.loopback();
        let hood = arena.neighbors(Vertex::from(0));
        assert_eq!(hood.iter().filter(|&&v| v == Vertex::from(0)).count(), 1);
        assert!(arena.adjacent(Vertex::from(0), Vertex::from(0)));
    }

    #[test]
    fn forests_ignore_self_loops() {
        let mut path = path3();
        path.loopback();
        assert!(path.forest());
        let mut cycle = Arena::from(vec![(0, 1), (1, 2), (2, 0)]);
        assert!(!cycle.forest());
        cycle.loopback();
        assert!(!cycle.forest());
    }

    #[test]
    fn distances_follow_shortest_paths() {
        let arena = Arena::from(vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(arena.distance(Vertex::from(0), Vertex::from(3)), Some(3));
        assert_eq!(arena.distance(Vertex::from(2), Vertex::from(2)), Some(0));
        let split = Arena::from(vec![(0, 1), (2, 3)]);
        assert_eq!(split.distance(Vertex::from(0), Vertex::from(3)), None);
    }

    #[test]
    fn parses_edge_lists() {
        let arena = Arena::from_str("0-1, 1-2 ,2-0").expect("well formed");
        assert_eq!(arena.order(), 3);
        assert!(arena.adjacent(Vertex::from(2), Vertex::from(0)));
        assert!(Arena::from_str("0-1,x-2").is_err());
        assert!(Arena::from_str("0:1").is_err());
    }

    #[test]
    fn vertices_iterate_in_insertion_order() {
        let arena = Arena::from(vec![(5, 3), (3, 9)]);
        let order = arena.vertices().map(u32::from).collect::<Vec<_>>();
        assert_eq!(order, vec![5, 3, 9]);
    }
}
