//! src/error.rs
//!
//! Fouttypes voor de sampler. Alle validatie gebeurt aan de API-grens; zodra
//! de invoer geldig is kan het algoritme zelf niet meer falen.

use crate::graph::Vertex;
use std::io;
use thiserror::Error;

/// Fouten bij het opbouwen of inlezen van een graaf.
#[derive(Debug, Error)]
pub enum GraphError {
    /// `to` staat in de burenlijst van `from`, maar niet andersom.
    #[error("asymmetric adjacency: {to} is a neighbour of {from}, but {from} is not a neighbour of {to}")]
    Asymmetric { from: Vertex, to: Vertex },

    /// Een knoop die naar zichzelf wijst kan nooit in een onafhankelijke set.
    #[error("self-loop on vertex {vertex}")]
    SelfLoop { vertex: Vertex },

    /// Regel in het edge-list formaat die geen `v` of `u v` is.
    #[error("line {line}: cannot parse `{content}` as a vertex or an edge")]
    Parse { line: usize, content: String },

    /// Lezen van de invoer mislukte.
    #[error("failed to read graph: {0}")]
    Io(#[from] io::Error),
}

/// Fouten bij het starten of afronden van een sampling-run.
#[derive(Debug, Error)]
pub enum SampleError {
    #[error("trial count must be at least 1, got {trials}")]
    InvalidTrials { trials: usize },

    #[error("worker count must be at least 1, got {workers}")]
    InvalidWorkers { workers: usize },

    /// De OS-entropiebron kon geen seed leveren.
    #[error("failed to seed random generator: {0}")]
    Entropy(#[from] rand::Error),

    #[error("sampling worker panicked")]
    WorkerPanicked,

    /// Het resultaatkanaal sloot voordat alle trials binnen waren.
    #[error("expected {expected} trial results, received {received}")]
    MissingResults { expected: usize, received: usize },
}

/// Overkoepelende fout voor aanroepers die zowel inlezen als samplen.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Sample(#[from] SampleError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
