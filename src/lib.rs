// src/lib.rs

// Publieke modules voor gebruik binnen de Rust-crate
pub mod candidate;
pub mod construct;
pub mod error;
pub mod graph;
pub mod logging;
pub mod params;
pub mod pool;
pub mod rng;
pub mod sample;

// Her-exporteer de belangrijkste types en entry points voor Rust-gebruikers
pub use candidate::Candidate;
pub use construct::one_maximal_independent_set;
pub use error::{Error, GraphError, Result, SampleError};
pub use graph::{Graph, Vertex};
pub use params::Params;
pub use pool::{sample_parallel_mis, sample_parallel_with_params};
pub use sample::{sample_mis, sample_with_params};

#[cfg(feature = "rayon")]
pub use pool::sample_rayon_mis;

#[cfg(feature = "python")]
mod python {
    use crate::{pool, Graph, Params};
    use pyo3::prelude::*;
    use std::fs::File;

    fn load_graph(path: &str) -> PyResult<Graph> {
        let file = File::open(path)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyIOError, _>(e.to_string()))?;
        Graph::parse_edge_list(file)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))
    }

    /// Python-binding voor de parallelle sampler. Geeft de gevonden set terug.
    #[pyfunction]
    #[pyo3(signature = (instance_path, py_params))]
    fn sample_mis_py(instance_path: String, py_params: Py<Params>) -> PyResult<Vec<usize>> {
        let graph = load_graph(&instance_path)?;
        let p = Python::with_gil(|py| py_params.borrow(py).copy());

        let best = pool::sample_parallel_with_params(&graph, &p)
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string()))?;
        Ok(best.into_vertices())
    }

    /// Helperfunctie om een edge-list bestand te parsen en (n, m) terug te geven.
    #[pyfunction]
    fn parse_graph_py(instance_path: String) -> PyResult<(usize, usize)> {
        let graph = load_graph(&instance_path)?;
        Ok((graph.n(), graph.m()))
    }

    /// Definieert de Python-module `_native`.
    #[pymodule]
    fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_class::<Params>()?;
        m.add_function(wrap_pyfunction!(sample_mis_py, m)?)?;
        m.add_function(wrap_pyfunction!(parse_graph_py, m)?)?;
        Ok(())
    }
}
