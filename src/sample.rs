//! src/sample.rs
//!
//! Sequentiële best-of-N sampler: roept de constructor `trials` keer aan en
//! houdt de grootste set bij. Alleen een strikt grotere set vervangt de
//! huidige beste, dus bij gelijke stand wint de eerst gevonden set.
use crate::{
    candidate::Candidate,
    construct::one_maximal_independent_set,
    error::SampleError,
    graph::Graph,
    params::{validate_trials, Params},
    rng::worker_rng,
};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Draait `trials` onafhankelijke trials en geeft de grootste kandidaat terug.
///
/// Faalt met [`SampleError::InvalidTrials`] als `trials == 0`.
#[instrument(
    name = "sample.sequential",
    err,
    skip(graph, rng),
    fields(vertices = graph.n(), edges = graph.m()),
)]
pub fn sample_mis<'g, R>(
    graph: &'g Graph,
    trials: usize,
    rng: &mut R,
) -> Result<Candidate<'g>, SampleError>
where
    R: Rng + ?Sized,
{
    validate_trials(trials)?;

    let mut best = Candidate::new(graph);
    for _ in 0..trials {
        keep_larger(&mut best, one_maximal_independent_set(graph, rng));
    }

    info!(size = best.size(), "sequential sampling finished");
    Ok(best)
}

/// Sequentiële run met de generator afgeleid uit `p.seed` (stream 0).
/// `p.workers` wordt genegeerd.
pub fn sample_with_params<'g>(graph: &'g Graph, p: &Params) -> Result<Candidate<'g>, SampleError> {
    let mut rng = worker_rng(p.seed, 0)?;
    sample_mis(graph, p.trials, &mut rng)
}

/// Reductiestap die door alle samplers gedeeld wordt. Geeft `true` als
/// `candidate` de nieuwe beste is.
pub(crate) fn keep_larger<'g>(best: &mut Candidate<'g>, candidate: Candidate<'g>) -> bool {
    if !candidate.improves_on(best) {
        return false;
    }
    debug!(
        size = candidate.size(),
        previous = best.size(),
        "new best candidate"
    );
    *best = candidate;
    true
}
