use crate::Damage;
use crate::arena::arena::Arena;
use crate::arena::vertex::Vertex;
use crate::error::Error;
use crate::search::engine::Engine;
use rayon::prelude::*;

/// Damage number: the min over cop starts of the max over robber starts of
/// the optimal-play outcome. Either side of the sweep can be pinned to a
/// single vertex. The running minimum is seeded with `order - 1`, the
/// trivial worst case of a cop that never captures.
///
/// Cop candidates are independent and read the graph only, so they fan out
/// across threads, one engine and one scratch visited set per worker.
pub fn damage_number(
    arena: &Arena,
    cop: Option<Vertex>,
    robber: Option<Vertex>,
) -> Result<Damage, Error> {
    if arena.order() == 0 {
        return Err(Error::EmptyGraph);
    }
    let cops = candidates(arena, cop)?;
    let robbers = candidates(arena, robber)?;
    let seed = arena.order() - 1;
    cops.par_iter()
        .map(|&cop| worst_case(arena, cop, &robbers))
        .try_reduce(|| seed, |a, b| Ok(a.min(b)))
}

/// Every cop start achieving the graph's damage number, in vertex-iteration
/// order, ties all included. Non-empty for any graph with a vertex.
pub fn optimal_starts(arena: &Arena) -> Result<Vec<Vertex>, Error> {
    if arena.order() == 0 {
        return Err(Error::EmptyGraph);
    }
    let cops = candidates(arena, None)?;
    let worst = cops
        .par_iter()
        .map(|&cop| worst_case(arena, cop, &cops))
        .collect::<Result<Vec<_>, _>>()?;
    let best = worst.iter().copied().min().expect("at least one vertex");
    Ok(cops
        .into_iter()
        .zip(worst)
        .filter(|&(_, w)| w == best)
        .map(|(cop, _)| cop)
        .collect())
}

/// Max over robber starts for one cop start. The engine carries a
/// cop-specific bound, so each cop candidate gets a fresh one.
fn worst_case(arena: &Arena, cop: Vertex, robbers: &[Vertex]) -> Result<Damage, Error> {
    let mut engine = Engine::new(arena, cop)?;
    let mut worst = 0;
    for &robber in robbers {
        worst = worst.max(engine.evaluate(robber)?);
    }
    log::debug!("cop {} concedes {} at worst", cop, worst);
    Ok(worst)
}

fn candidates(arena: &Arena, pick: Option<Vertex>) -> Result<Vec<Vertex>, Error> {
    match pick {
        Some(v) if arena.contains(v) => Ok(vec![v]),
        Some(v) => Err(Error::InvalidVertex(v)),
        None => Ok(arena.vertices().collect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn looped(edges: Vec<(u32, u32)>) -> Arena {
        let mut arena = Arena::from(edges);
        arena.loopback();
        arena
    }

    #[test]
    fn centers_win_paths() {
        let p3 = looped(vec![(0, 1), (1, 2)]);
        assert_eq!(damage_number(&p3, None, None), Ok(0));
        let starts = optimal_starts(&p3).expect("non-empty graph");
        assert_eq!(starts, vec![Vertex::from(1)]);
    }

    #[test]
    fn pinned_starts_narrow_the_sweep() {
        let p3 = looped(vec![(0, 1), (1, 2)]);
        let leaf = Some(Vertex::from(0));
        let far = Some(Vertex::from(2));
        assert_eq!(damage_number(&p3, leaf, far), Ok(1));
        assert_eq!(damage_number(&p3, leaf, None), Ok(1));
        assert_eq!(damage_number(&p3, Some(Vertex::from(1)), None), Ok(0));
    }

    #[test]
    fn optimal_starts_achieve_the_damage_number() {
        for _ in 0..4 {
            let arena = Arena::random();
            let number = damage_number(&arena, None, None).expect("non-empty graph");
            let starts = optimal_starts(&arena).expect("non-empty graph");
            assert!(!starts.is_empty());
            for &cop in starts.iter() {
                assert!(arena.contains(cop));
                assert_eq!(damage_number(&arena, Some(cop), None), Ok(number));
            }
        }
    }

    #[test]
    fn single_vertex_graphs_are_harmless() {
        let mut arena = Arena::new();
        arena.join(Vertex::from(0), Vertex::from(0));
        assert_eq!(damage_number(&arena, None, None), Ok(0));
        assert_eq!(optimal_starts(&arena), Ok(vec![Vertex::from(0)]));
    }

    #[test]
    fn empty_and_absent_inputs_are_rejected() {
        let empty = Arena::new();
        assert_eq!(damage_number(&empty, None, None), Err(Error::EmptyGraph));
        assert_eq!(optimal_starts(&empty), Err(Error::EmptyGraph));
        let p3 = looped(vec![(0, 1), (1, 2)]);
        let absent = Vertex::from(7);
        assert_eq!(
            damage_number(&p3, Some(absent), None),
            Err(Error::InvalidVertex(absent))
        );
        assert_eq!(
            damage_number(&p3, None, Some(absent)),
            Err(Error::InvalidVertex(absent))
        );
    }
}
