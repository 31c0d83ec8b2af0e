//! src/candidate.rs
//!
//! Representeert één kandidaat-onafhankelijke-set `I`: de knopen in volgorde
//! van toevoegen, plus een lidmaatschaps-bitset over de dichte indices van de
//! graaf. De bitset maakt duplicaten onmogelijk en geeft O(1) `contains`.
//! Een kandidaat wordt door de constructor opgebouwd en daarna niet meer
//! gewijzigd; de aanroeper die hem ontvangt is de enige eigenaar.

use crate::graph::{Graph, Vertex};
use bitvec::prelude::*;

/// Een onafhankelijke-set kandidaat, gebonden aan een specifieke `Graph`.
#[derive(Clone, Debug)]
pub struct Candidate<'g> {
    graph: &'g Graph,
    /// Dichte indices in volgorde van toevoegen.
    order: Vec<usize>,
    members: BitVec,
}

impl<'g> Candidate<'g> {
    /*────────── Constructors ──────────*/

    /// Creëert een lege kandidaat (kardinaliteit 0) voor de gegeven graaf.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            order: Vec::new(),
            members: bitvec![0; graph.n()],
        }
    }

    /*────────── Queries ──────────*/

    /// Kardinaliteit `|I|`.
    #[inline]
    pub fn size(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Controleert of knoop `v` in de set zit.
    pub fn contains(&self, v: Vertex) -> bool {
        self.graph
            .index_of(v)
            .is_some_and(|i| self.members[i])
    }

    /// Knopen van de set in volgorde van toevoegen.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.order.iter().map(|&i| self.graph.vertex_at(i)).collect()
    }

    /// Zet de kandidaat om in een knopenreeks zonder duplicaten.
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices()
    }

    /// Strikte verbetering: alleen een echt grotere set vervangt de huidige
    /// beste. Bij gelijke grootte wint de eerst gevonden set.
    #[inline]
    pub fn improves_on(&self, other: &Candidate<'_>) -> bool {
        self.size() > other.size()
    }

    /*────────── Verificatie ──────────*/

    /// Geen twee knopen in de set zijn buren.
    pub fn is_independent(&self) -> bool {
        self.order.iter().all(|&i| {
            self.graph
                .neighbour_indices(i)
                .iter()
                .all(|&j| !self.members[j])
        })
    }

    /// Elke knoop buiten de set heeft minstens één buur in de set.
    pub fn is_maximal(&self) -> bool {
        (0..self.graph.n()).filter(|&i| !self.members[i]).all(|i| {
            self.graph
                .neighbour_indices(i)
                .iter()
                .any(|&j| self.members[j])
        })
    }

    pub fn is_maximal_independent(&self) -> bool {
        self.is_independent() && self.is_maximal()
    }

    /*────────── Mutators ──────────*/

    /// Voegt de knoop met dichte index `i` toe. Negeert de operatie als hij al
    /// aanwezig is. Alleen de constructor bouwt kandidaten op.
    pub(crate) fn push_index(&mut self, i: usize) {
        if self.members[i] {
            return;
        }
        self.members.set(i, true);
        self.order.push(i);
    }
}
