//! Cancellation of runs observed from another thread.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;
use u_tsp::models::{random_points, Point, Tour};
use u_tsp::search::{CancellationToken, SearchEngine, SearchHandle, SearchStatus};

/// 14 cities: 13! ≈ 6.2e9 tours, far beyond any test budget.
fn unfinishable_cities() -> Vec<Point> {
    random_points(14, 800.0, 600.0, &mut StdRng::seed_from_u64(2024))
}

fn wait_for_progress(engine: &SearchEngine, at_least: u64) {
    let deadline = Instant::now() + Duration::from_secs(30);
    while engine.tried_count() < at_least {
        assert!(Instant::now() < deadline, "search made no progress");
        thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn cancel_mid_run_keeps_valid_best() {
    let cities = unfinishable_cities();
    let handle = SearchHandle::spawn(SearchEngine::new(&cities)).expect("spawn");
    let engine = Arc::clone(handle.engine());

    wait_for_progress(&engine, 500);
    let during = handle.snapshot();
    assert_eq!(during.status, SearchStatus::Running);
    assert!(during.improvements <= during.tried);
    assert!(Tour::new(during.last_tried.stops().to_vec(), cities.len()).is_ok());

    handle.cancel();
    let best = handle.join();

    let done = engine.snapshot();
    assert_eq!(done.status, SearchStatus::Cancelled);
    assert!(done.tried >= 500);
    assert!(done.tried < engine.permutation_count());
    assert!(done.improvements >= 1);
    assert!(Tour::new(best.stops().to_vec(), cities.len()).is_ok());
    assert_eq!(best, *done.best_tour);
    assert!((best.length(engine.distances()) - done.best_length).abs() < 1e-9);
}

#[test]
fn counters_only_grow_while_running() {
    let engine = Arc::new(SearchEngine::new(&unfinishable_cities()));
    let cancel = CancellationToken::new();

    let worker = {
        let engine = Arc::clone(&engine);
        let cancel = cancel.clone();
        thread::spawn(move || engine.run(&cancel))
    };

    wait_for_progress(&engine, 1);
    let mut last = engine.snapshot();
    for _ in 0..20 {
        thread::sleep(Duration::from_millis(2));
        let now = engine.snapshot();
        assert!(now.tried >= last.tried);
        assert!(now.improvements >= last.improvements);
        assert!(now.best_length <= last.best_length);
        assert!(now.elapsed >= last.elapsed);
        last = now;
    }

    cancel.cancel();
    let best = worker.join().expect("search thread panicked");
    assert_eq!(engine.status(), SearchStatus::Cancelled);
    assert!(!best.is_empty());
}

#[test]
fn cancel_before_start() {
    let engine = SearchEngine::new(&unfinishable_cities());
    let cancel = CancellationToken::new();
    cancel.cancel();

    let best = engine.run(&cancel);
    assert!(best.is_empty());
    assert_eq!(engine.tried_count(), 0);
    assert_eq!(engine.status(), SearchStatus::Cancelled);
}

#[test]
fn superseding_run_gets_its_own_token() {
    let first = SearchHandle::spawn(SearchEngine::new(&unfinishable_cities())).expect("spawn");
    let second = SearchHandle::spawn(SearchEngine::new(&[
        Point::new(0.0, 0.0),
        Point::new(0.0, 3.0),
        Point::new(4.0, 0.0),
    ]))
    .expect("spawn");

    first.cancel();
    assert!(!second.cancellation_token().is_cancelled());

    let best = second.join();
    assert_eq!(best.len(), 4);
    let first_engine = Arc::clone(first.engine());
    first.join();
    assert_eq!(first_engine.status(), SearchStatus::Cancelled);
}
