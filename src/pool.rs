//! src/pool.rs
//!
//! Parallelle best-of-N sampler met een vaste pool van `W` workers.
//!
//! Protocol:
//! 1. Een begrensde werkwachtrij (capaciteit `N`) wordt gevuld met precies `N`
//!    tokens en daarna gesloten.
//! 2. Elke worker pakt een token, draait één trial op de gedeelde (read-only)
//!    graaf en stuurt het resultaat naar het resultaatkanaal (capaciteit `N`).
//!    Een worker stopt zodra de wachtrij leeg én gesloten is.
//! 3. De orchestrator leest precies `N` resultaten en reduceert ze met dezelfde
//!    strikte regel als de sequentiële sampler. Alleen de orchestrator raakt de
//!    beste kandidaat aan, dus er is geen lock nodig.
//!
//! De volgorde waarin resultaten binnenkomen is niet gedefinieerd; de grootte
//! van het eindresultaat hangt daar niet van af.
use crate::{
    candidate::Candidate,
    construct::one_maximal_independent_set,
    error::SampleError,
    graph::Graph,
    params::{validate_trials, validate_workers, Params},
    rng::worker_rng,
    sample::keep_larger,
};
use crossbeam_channel::{bounded, Receiver, Sender};
use rand::Rng;
use std::thread;
use tracing::{info, instrument, trace, warn};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Draait `trials` trials verdeeld over `workers` threads en geeft de grootste
/// kandidaat terug.
///
/// Elke worker krijgt een eigen generator uit [`worker_rng`] met zijn index als
/// stream. Ook met een vaste seed is het resultaat niet volledig
/// reproduceerbaar: welke worker welk token pakt hangt af van de scheduler.
#[instrument(
    name = "sample.parallel",
    err,
    skip(graph),
    fields(vertices = graph.n(), edges = graph.m()),
)]
pub fn sample_parallel_mis<'g>(
    graph: &'g Graph,
    trials: usize,
    workers: usize,
    seed: Option<u64>,
) -> Result<Candidate<'g>, SampleError> {
    validate_trials(trials)?;
    validate_workers(workers)?;

    // Alle generators vooraf: een entropiefout stopt de run voordat er werk is.
    let rngs = (0..workers)
        .map(|w| worker_rng(seed, w as u64))
        .collect::<Result<Vec<_>, _>>()?;

    let (job_tx, job_rx) = bounded::<()>(trials);
    let (result_tx, result_rx) = bounded::<Candidate<'g>>(trials);

    for _ in 0..trials {
        // Kan niet blokkeren (capaciteit == trials) en `job_rx` leeft nog.
        if job_tx.send(()).is_err() {
            break;
        }
    }
    drop(job_tx);

    thread::scope(|s| {
        let handles: Vec<_> = rngs
            .into_iter()
            .enumerate()
            .map(|(id, mut rng)| {
                let jobs = job_rx.clone();
                let results = result_tx.clone();
                s.spawn(move || run_worker(id, graph, &jobs, &results, &mut rng))
            })
            .collect();
        // Het resultaatkanaal sluit pas als de laatste worker zijn sender dropt.
        drop(result_tx);
        drop(job_rx);

        let drained = drain_best(graph, &result_rx, trials);

        let mut panicked = false;
        let mut executed = 0usize;
        for handle in handles {
            match handle.join() {
                Ok(done) => executed += done,
                Err(_) => panicked = true,
            }
        }
        if panicked {
            warn!(executed, "sampling worker panicked");
            return Err(SampleError::WorkerPanicked);
        }
        let best = drained?;
        if executed != trials {
            return Err(SampleError::MissingResults {
                expected: trials,
                received: executed,
            });
        }

        info!(size = best.size(), "parallel sampling finished");
        Ok(best)
    })
}

/// Leest precies `trials` resultaten uit `results` en reduceert ze tot de
/// grootste kandidaat. Sluit het kanaal eerder (alle senders weg), dan volgt
/// [`SampleError::MissingResults`] in plaats van eeuwig wachten.
pub fn drain_best<'g>(
    graph: &'g Graph,
    results: &Receiver<Candidate<'g>>,
    trials: usize,
) -> Result<Candidate<'g>, SampleError> {
    let mut best = Candidate::new(graph);
    let mut received = 0usize;
    while received < trials {
        match results.recv() {
            Ok(candidate) => {
                received += 1;
                keep_larger(&mut best, candidate);
            }
            Err(_) => {
                return Err(SampleError::MissingResults {
                    expected: trials,
                    received,
                })
            }
        }
    }
    Ok(best)
}

/// Parallelle run met `p.trials`, `p.workers` en `p.seed`.
pub fn sample_parallel_with_params<'g>(
    graph: &'g Graph,
    p: &Params,
) -> Result<Candidate<'g>, SampleError> {
    p.validate()?;
    sample_parallel_mis(graph, p.trials, p.workers, p.seed)
}

/// Worker-lus: één trial per token, tot de wachtrij leeg en gesloten is.
/// Geeft het aantal uitgevoerde trials terug.
fn run_worker<'g, R>(
    id: usize,
    graph: &'g Graph,
    jobs: &Receiver<()>,
    results: &Sender<Candidate<'g>>,
    rng: &mut R,
) -> usize
where
    R: Rng + ?Sized,
{
    let mut done = 0usize;
    for _token in jobs.iter() {
        if results.send(one_maximal_independent_set(graph, rng)).is_err() {
            break;
        }
        done += 1;
    }
    trace!(worker = id, trials = done, "worker drained queue");
    done
}

/// Best-of-N via rayon, voor aanroepers die al in een rayon-pool draaien.
///
/// De trials worden in vaste blokken verdeeld, één per rayon-thread, elk met
/// een eigen stream. Met een vaste seed is het resultaat daardoor volledig
/// reproduceerbaar (zolang het aantal threads gelijk blijft).
#[cfg(feature = "rayon")]
#[instrument(
    name = "sample.rayon",
    err,
    skip(graph),
    fields(vertices = graph.n(), threads = rayon::current_num_threads()),
)]
pub fn sample_rayon_mis<'g>(
    graph: &'g Graph,
    trials: usize,
    seed: Option<u64>,
) -> Result<Candidate<'g>, SampleError> {
    validate_trials(trials)?;

    let chunks = rayon::current_num_threads().clamp(1, trials);
    let base = trials / chunks;
    let extra = trials % chunks;

    let partials = (0..chunks)
        .into_par_iter()
        .map(|chunk| -> Result<Candidate<'g>, SampleError> {
            let mut rng = worker_rng(seed, chunk as u64)?;
            let len = base + usize::from(chunk < extra);
            let mut best = Candidate::new(graph);
            for _ in 0..len {
                keep_larger(&mut best, one_maximal_independent_set(graph, &mut rng));
            }
            Ok(best)
        })
        .collect::<Result<Vec<_>, SampleError>>()?;

    // In blokvolgorde reduceren: gelijke grootte → laagste blok wint.
    let mut best = Candidate::new(graph);
    for partial in partials {
        keep_larger(&mut best, partial);
    }

    info!(size = best.size(), "rayon sampling finished");
    Ok(best)
}
