//! src/construct.rs
//!
//! Gerandomiseerde greedy constructie van één maximale onafhankelijke set.
//! 1. Verzamel alle knopen en schud ze uniform (Fisher-Yates via `SliceRandom`).
//! 2. Loop de geschudde volgorde af met een 'covered'-bitset: een knoop die nog
//!    niet bedekt is gaat de set in en bedekt zichzelf en al zijn buren.
//!
//! Het resultaat is altijd onafhankelijk én maximaal, ongeacht de volgorde:
//! de volgorde bepaalt alleen *welke* maximale set gevonden wordt.
use crate::{candidate::Candidate, graph::Graph};
use bitvec::prelude::*;
use rand::seq::SliceRandom;
use rand::Rng;

/// Construeert één willekeurige maximale onafhankelijke set.
///
/// Elke aanroep verbruikt randomness uit `rng`; onafhankelijke trials vragen
/// dus om een generator per worker (zie [`crate::rng::worker_rng`]).
/// Een lege graaf geeft een lege set.
pub fn one_maximal_independent_set<'g, R>(graph: &'g Graph, rng: &mut R) -> Candidate<'g>
where
    R: Rng + ?Sized,
{
    let n = graph.n();
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);

    let mut covered = bitvec![0; n];
    let mut set = Candidate::new(graph);

    for v in order {
        if covered[v] {
            continue;
        }
        set.push_index(v);
        covered.set(v, true);
        for &w in graph.neighbour_indices(v) {
            covered.set(w, true);
        }
    }

    debug_assert!(set.is_maximal_independent());
    set
}
