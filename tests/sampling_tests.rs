// tests/sampling_tests.rs
//! Tests voor de constructor, de sequentiële sampler en de worker pool.

extern crate mis_sampler;
use mis_sampler::construct::one_maximal_independent_set;
use mis_sampler::graph::Graph;
use mis_sampler::params::Params;
use mis_sampler::pool::{drain_best, sample_parallel_mis, sample_parallel_with_params};
use mis_sampler::rng::worker_rng;
use mis_sampler::sample::{sample_mis, sample_with_params};
use mis_sampler::SampleError;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use rstest::rstest;

/// Knoop 0 met graad 4, knopen 1 en 2 ook onderling verbonden.
fn small_graph() -> Graph {
    Graph::from_edges([], &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 2)]).unwrap()
}

#[test]
fn test_constructor_small_graph_is_valid() {
    let graph = small_graph();
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let set = one_maximal_independent_set(&graph, &mut rng);
        assert!(set.is_maximal_independent());
        assert!(!(set.contains(0) && set.contains(1)));
        assert!(!(set.contains(1) && set.contains(2)));
        // De enige maximale sets zijn {0}, {1,3,4} en {2,3,4}.
        assert!(set.size() == 1 || set.size() == 3);
    }
}

#[test]
fn test_constructor_single_isolated_vertex() {
    let graph = Graph::from_adjacency(vec![(5, vec![])]).unwrap();
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..10 {
        let set = one_maximal_independent_set(&graph, &mut rng);
        assert_eq!(set.into_vertices(), vec![5]);
    }
}

#[test]
fn test_constructor_empty_graph() {
    let graph = Graph::default();
    let set = one_maximal_independent_set(&graph, &mut StdRng::seed_from_u64(0));
    assert!(set.is_empty());
    assert_eq!(set.size(), 0);
}

#[test]
fn test_constructor_has_no_duplicates() {
    let graph = small_graph();
    let set = one_maximal_independent_set(&graph, &mut StdRng::seed_from_u64(3));
    let mut vertices = set.vertices();
    let before = vertices.len();
    vertices.sort_unstable();
    vertices.dedup();
    assert_eq!(vertices.len(), before);
}

#[test]
fn test_sample_mis_finds_maximum() {
    let graph = small_graph();
    let best = sample_mis(&graph, 1_000, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(best.size(), 3);
    assert!(best.contains(3) && best.contains(4));
    assert!(best.is_maximal_independent());
}

#[test]
fn test_sample_mis_isolated_and_empty() {
    let graph = Graph::from_adjacency(vec![(5, vec![])]).unwrap();
    let best = sample_mis(&graph, 5, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(best.into_vertices(), vec![5]);

    let empty = Graph::default();
    let best = sample_mis(&empty, 5, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(best.size(), 0);
}

#[test]
fn test_sample_mis_rejects_zero_trials() {
    let graph = small_graph();
    let err = sample_mis(&graph, 0, &mut StdRng::seed_from_u64(0)).unwrap_err();
    assert!(matches!(err, SampleError::InvalidTrials { trials: 0 }));
}

#[test]
fn test_sample_mis_monotone_in_trials() {
    // Met dezelfde seed is de run met N-1 trials een prefix van de run met N.
    let graph = Graph::from_edges(
        [],
        &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 3), (6, 7), (7, 8)],
    )
    .unwrap();
    let mut previous = 0;
    for n in 1..40 {
        let best = sample_mis(&graph, n, &mut StdRng::seed_from_u64(11)).unwrap();
        assert!(best.size() >= previous);
        previous = best.size();
    }
}

#[test]
fn test_sample_with_params_is_reproducible() {
    let graph = small_graph();
    let p = Params::new(25, 1, Some(99));
    let a = sample_with_params(&graph, &p).unwrap().into_vertices();
    let b = sample_with_params(&graph, &p).unwrap().into_vertices();
    assert_eq!(a, b);
}

#[test]
fn test_improves_on_is_strict() {
    let graph = small_graph();
    let mut rng = StdRng::seed_from_u64(5);
    let set = one_maximal_independent_set(&graph, &mut rng);
    let same = set.clone();
    assert!(!same.improves_on(&set));
    assert!(set.improves_on(&mis_sampler::Candidate::new(&graph)));
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(4)]
#[case(8)]
fn test_parallel_finds_maximum(#[case] workers: usize) {
    let graph = small_graph();
    let best = sample_parallel_mis(&graph, 1_000, workers, Some(42)).unwrap();
    assert_eq!(best.size(), 3);
    assert!(best.is_maximal_independent());
}

#[rstest]
#[case(1, 1)]
#[case(1, 4)]
#[case(3, 8)]
#[case(50, 3)]
fn test_parallel_more_workers_than_trials(#[case] trials: usize, #[case] workers: usize) {
    let graph = small_graph();
    let best = sample_parallel_mis(&graph, trials, workers, None).unwrap();
    assert!(best.is_maximal_independent());
}

#[test]
fn test_parallel_isolated_and_empty() {
    let graph = Graph::from_adjacency(vec![(5, vec![])]).unwrap();
    let best = sample_parallel_mis(&graph, 10, 4, None).unwrap();
    assert_eq!(best.into_vertices(), vec![5]);

    let empty = Graph::default();
    let best = sample_parallel_mis(&empty, 10, 4, None).unwrap();
    assert!(best.is_empty());
}

#[test]
fn test_parallel_rejects_invalid_counts() {
    let graph = small_graph();
    let err = sample_parallel_mis(&graph, 0, 4, None).unwrap_err();
    assert!(matches!(err, SampleError::InvalidTrials { trials: 0 }));

    let err = sample_parallel_mis(&graph, 10, 0, None).unwrap_err();
    assert!(matches!(err, SampleError::InvalidWorkers { workers: 0 }));

    let err = sample_parallel_with_params(&graph, &Params::new(10, 0, None)).unwrap_err();
    assert!(matches!(err, SampleError::InvalidWorkers { workers: 0 }));
}

#[cfg(feature = "rayon")]
#[test]
fn test_rayon_sampler() {
    use mis_sampler::sample_rayon_mis;

    let graph = small_graph();
    let a = sample_rayon_mis(&graph, 500, Some(8)).unwrap();
    let b = sample_rayon_mis(&graph, 500, Some(8)).unwrap();
    assert_eq!(a.size(), 3);
    assert_eq!(a.into_vertices(), b.into_vertices());

    let err = sample_rayon_mis(&graph, 0, None).unwrap_err();
    assert!(matches!(err, SampleError::InvalidTrials { trials: 0 }));
}

#[test]
fn test_worker_rng_streams() {
    let mut a = worker_rng(Some(1), 0).unwrap();
    let mut b = worker_rng(Some(1), 0).unwrap();
    let mut c = worker_rng(Some(1), 1).unwrap();
    let first = a.next_u64();
    assert_eq!(first, b.next_u64());
    assert_ne!(first, c.next_u64());

    // Zonder seed: OS-entropie, dus (vrijwel zeker) verschillend.
    let mut d = worker_rng(None, 0).unwrap();
    let mut e = worker_rng(None, 0).unwrap();
    assert_ne!(d.next_u64(), e.next_u64());
}

#[test]
fn test_params_defaults_and_validate() {
    let p = Params::default();
    assert_eq!(p.trials, 10_000);
    assert_eq!(p.workers, 4);
    assert_eq!(p.seed, None);
    assert!(p.validate().is_ok());
    assert_eq!(p.clone().with_seed(3).seed, Some(3));
    assert!(matches!(
        Params::new(0, 1, None).validate(),
        Err(SampleError::InvalidTrials { trials: 0 })
    ));
}

/// Vult een resultaatkanaal met `count` trials van de kleine graaf.
fn send_trials<'g>(
    graph: &'g Graph,
    tx: &crossbeam_channel::Sender<mis_sampler::Candidate<'g>>,
    count: usize,
    seed: u64,
) -> usize {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut largest = 0;
    for _ in 0..count {
        let set = one_maximal_independent_set(graph, &mut rng);
        largest = largest.max(set.size());
        tx.send(set).unwrap();
    }
    largest
}

#[test]
fn test_drain_best_exactly_n_results() {
    let graph = small_graph();
    let (tx, rx) = crossbeam_channel::bounded(51);
    let largest = send_trials(&graph, &tx, 50, 13);
    // Een extra resultaat na de N-de mag niet geconsumeerd worden.
    send_trials(&graph, &tx, 1, 14);
    drop(tx);

    let best = drain_best(&graph, &rx, 50).unwrap();
    assert_eq!(best.size(), largest);
    assert!(best.is_maximal_independent());
    assert_eq!(rx.len(), 1);
}

#[test]
fn test_drain_best_reports_missing_results() {
    let graph = small_graph();
    let (tx, rx) = crossbeam_channel::bounded(10);
    send_trials(&graph, &tx, 3, 1);
    drop(tx);

    let err = drain_best(&graph, &rx, 5).unwrap_err();
    assert!(matches!(
        err,
        SampleError::MissingResults {
            expected: 5,
            received: 3
        }
    ));
}

#[test]
fn test_drain_best_does_not_hang_on_dropped_sender() {
    let graph = small_graph();
    let (tx, rx) = crossbeam_channel::bounded(4);
    let idle = tx.clone();
    // Een sender verdwijnt zonder iets te sturen; de andere levert alles.
    drop(idle);
    send_trials(&graph, &tx, 4, 2);
    drop(tx);
    assert!(drain_best(&graph, &rx, 4).unwrap().size() > 0);

    // Alle senders weg zonder resultaat: fout, geen blokkade.
    let (tx, rx) = crossbeam_channel::bounded(4);
    drop(tx);
    let err = drain_best(&graph, &rx, 4).unwrap_err();
    assert!(matches!(
        err,
        SampleError::MissingResults {
            expected: 4,
            received: 0
        }
    ));
}

#[test]
fn test_parallel_consumes_exactly_n_trials() {
    // Elke run moet precies N trials uitvoeren en ontvangen, voor elke W.
    let graph = small_graph();
    for workers in [1, 2, 3, 7] {
        for trials in [1, 2, 5, 13] {
            let best = sample_parallel_mis(&graph, trials, workers, Some(4)).unwrap();
            assert!(best.is_maximal_independent());
        }
    }
}
