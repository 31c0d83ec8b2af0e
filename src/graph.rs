//! src/graph.rs
//!
//! Representeert een ongerichte graaf als adjacency-relatie over gehele
//! knoop-identifiers. Intern krijgt elke knoop een dichte index (oplopend in
//! identifier), zodat de constructor met een `BitVec` als 'covered'-markering
//! kan werken. De graaf is na constructie onveranderlijk en kan dus zonder
//! synchronisatie tussen workers gedeeld worden.
//!
//! Ondersteunt het regel-georiënteerde formaat waarin een regel `v` een knoop
//! declareert en een regel `u v` een kant.

use crate::error::GraphError;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::io::{BufRead, BufReader, Read};

/// Identifier van een knoop. Heeft geen attributen buiten zijn identiteit.
pub type Vertex = usize;

/// Een ongerichte graaf met symmetrische burenlijsten.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    /// Knoop-identifiers in oplopende volgorde; positie = dichte index.
    ids: Vec<Vertex>,
    /// Omgekeerde afbeelding identifier → dichte index.
    index: HashMap<Vertex, usize>,
    /// Gesorteerde burenlijsten in dichte indices.
    adj: Vec<Vec<usize>>,
}

impl Graph {
    /*────────── Constructors ──────────*/

    /// Bouwt een graaf uit een adjacency-relatie en controleert de invarianten:
    /// de relatie moet symmetrisch zijn en mag geen zelf-lussen bevatten.
    /// Dubbele buren worden samengevoegd; geïsoleerde knopen moeten als sleutel
    /// met een lege burenlijst aanwezig zijn.
    pub fn from_adjacency<I, N>(adjacency: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (Vertex, N)>,
        N: IntoIterator<Item = Vertex>,
    {
        let mut sets: BTreeMap<Vertex, BTreeSet<Vertex>> = BTreeMap::new();
        for (v, neighbours) in adjacency {
            sets.entry(v).or_default().extend(neighbours);
        }

        for (&v, neighbours) in &sets {
            for &w in neighbours {
                if w == v {
                    return Err(GraphError::SelfLoop { vertex: v });
                }
                let mirrored = sets.get(&w).is_some_and(|back| back.contains(&v));
                if !mirrored {
                    return Err(GraphError::Asymmetric { from: v, to: w });
                }
            }
        }

        Ok(Self::from_sets(sets))
    }

    /// Bouwt een graaf uit een lijst van kanten plus expliciet geïsoleerde
    /// knopen. De relatie is per constructie symmetrisch.
    pub fn from_edges<I>(isolated: I, edges: &[(Vertex, Vertex)]) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Vertex>,
    {
        let mut sets: BTreeMap<Vertex, BTreeSet<Vertex>> = BTreeMap::new();
        for v in isolated {
            sets.entry(v).or_default();
        }
        for &(u, v) in edges {
            if u == v {
                return Err(GraphError::SelfLoop { vertex: u });
            }
            sets.entry(u).or_default().insert(v);
            sets.entry(v).or_default().insert(u);
        }
        Ok(Self::from_sets(sets))
    }

    /// Parset het regel-georiënteerde edge-list formaat.
    ///
    /// - `v`   : knoop `v` bestaat (geïsoleerd tenzij hij ook in een kant voorkomt)
    /// - `u v` : ongerichte kant tussen `u` en `v`
    ///
    /// Lege regels en regels die met `#` beginnen worden overgeslagen; elke
    /// andere regel geeft een [`GraphError::Parse`].
    pub fn parse_edge_list<R: Read>(reader: R) -> Result<Self, GraphError> {
        let mut isolated: Vec<Vertex> = Vec::new();
        let mut edges: Vec<(Vertex, Vertex)> = Vec::new();

        for (line_idx, line_result) in BufReader::new(reader).lines().enumerate() {
            let line = line_result?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parse_err = || GraphError::Parse {
                line: line_idx + 1,
                content: line.to_owned(),
            };
            let parts: Vec<&str> = line.split_whitespace().collect();
            match parts.as_slice() {
                [v] => isolated.push(parse_vertex(v).ok_or_else(parse_err)?),
                [u, v] => {
                    let u = parse_vertex(u).ok_or_else(parse_err)?;
                    let v = parse_vertex(v).ok_or_else(parse_err)?;
                    edges.push((u, v));
                }
                _ => return Err(parse_err()),
            }
        }

        Self::from_edges(isolated, &edges)
    }

    fn from_sets(sets: BTreeMap<Vertex, BTreeSet<Vertex>>) -> Self {
        let ids: Vec<Vertex> = sets.keys().copied().collect();
        let index: HashMap<Vertex, usize> = ids.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        // BTreeSet itereert oplopend en `index` is monotoon, dus de rijen zijn gesorteerd.
        let adj = sets
            .values()
            .map(|neighbours| neighbours.iter().map(|w| index[w]).collect())
            .collect();
        Self { ids, index, adj }
    }

    /*────────── Getters ──────────*/

    /// Aantal knopen in de graaf.
    #[inline]
    pub fn n(&self) -> usize {
        self.ids.len()
    }

    /// Aantal kanten (elke kant eenmaal geteld).
    pub fn m(&self) -> usize {
        self.adj.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Alle knoop-identifiers, oplopend gesorteerd.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.ids
    }

    #[inline]
    pub fn contains(&self, v: Vertex) -> bool {
        self.index.contains_key(&v)
    }

    /// Graad van knoop `v`, of `None` als `v` niet in de graaf zit.
    pub fn degree(&self, v: Vertex) -> Option<usize> {
        self.index_of(v).map(|i| self.adj[i].len())
    }

    /// Buren van knoop `v` (oplopend), of `None` als `v` niet in de graaf zit.
    pub fn neighbours(&self, v: Vertex) -> Option<impl Iterator<Item = Vertex> + '_> {
        self.index_of(v)
            .map(|i| self.adj[i].iter().map(move |&j| self.ids[j]))
    }

    /// Controleert of `u` en `v` door een kant verbonden zijn.
    pub fn are_adjacent(&self, u: Vertex, v: Vertex) -> bool {
        match (self.index_of(u), self.index_of(v)) {
            (Some(i), Some(j)) => self.adj[i].binary_search(&j).is_ok(),
            _ => false,
        }
    }

    /*────────── Dichte indices ──────────*/

    /// Dichte index van knoop `v`.
    #[inline]
    pub fn index_of(&self, v: Vertex) -> Option<usize> {
        self.index.get(&v).copied()
    }

    /// Identifier bij dichte index `i`. Panics als `i >= n()`.
    #[inline]
    pub fn vertex_at(&self, i: usize) -> Vertex {
        self.ids[i]
    }

    /// Burenlijst in dichte indices voor index `i`. Panics als `i >= n()`.
    #[inline]
    pub fn neighbour_indices(&self, i: usize) -> &[usize] {
        &self.adj[i]
    }
}

/// Eén knoop-token: uitsluitend ASCII-cijfers (geen teken, geen `+`).
fn parse_vertex(token: &str) -> Option<Vertex> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}
