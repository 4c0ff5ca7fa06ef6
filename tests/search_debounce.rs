//! Debounce timing and stale-response handling, on tokio's paused clock.

mod common;

use common::MockApi;
use haven_ui::{SearchController, SearchSettings};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn controller(api: &Arc<MockApi>) -> SearchController {
    SearchController::new(api.clone(), SearchSettings::default())
}

#[tokio::test(start_paused = true)]
async fn rapid_typing_fires_one_search_after_quiet_period() {
    let api = Arc::new(MockApi::new());
    let mut search = controller(&api);

    search.set_query("a");
    sleep(ms(100)).await;
    search.set_query("ab");
    sleep(ms(50)).await;
    search.set_query("abc");

    assert_eq!(search.state().raw_query, "abc");
    assert_eq!(search.state().debounced_query, "");

    // t = 449ms
    sleep(ms(299)).await;
    assert!(api.search_calls().is_empty());

    // t = 451ms
    sleep(ms(2)).await;
    assert_eq!(api.search_calls(), vec!["abc"]);

    let state = search.state();
    assert_eq!(state.debounced_query, "abc");
    assert_eq!(state.results[0].name, "abc");
    assert!(!state.is_searching);
}

#[tokio::test(start_paused = true)]
async fn clearing_empties_results_immediately() {
    let api = Arc::new(MockApi::new());
    let mut search = controller(&api);

    search.set_query("euclid");
    sleep(ms(400)).await;
    assert_eq!(search.state().results.len(), 1);

    search.set_query("   ");
    let state = search.state();
    assert!(state.results.is_empty());
    assert_eq!(state.debounced_query, "");
    assert!(!state.is_searching);

    sleep(ms(1000)).await;
    assert_eq!(api.search_calls(), vec!["euclid"]);
}

#[tokio::test(start_paused = true)]
async fn late_response_does_not_overwrite_newer_results() {
    let api = Arc::new(MockApi::new().with_delay("slow", ms(1000)));
    let mut search = controller(&api);

    search.set_query("slow");
    sleep(ms(350)).await;
    assert!(search.state().is_searching);

    search.set_query("fast");
    // "fast" fires at 650ms and answers at once.
    sleep(ms(350)).await;
    assert_eq!(search.state().results[0].name, "fast");
    assert!(!search.state().is_searching);

    // "slow" answers at 1300ms and must be dropped.
    sleep(ms(700)).await;
    assert_eq!(api.search_calls(), vec!["slow", "fast"]);
    let state = search.state();
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].name, "fast");
    assert_eq!(state.debounced_query, "fast");
}

#[tokio::test(start_paused = true)]
async fn clearing_discards_in_flight_response() {
    let api = Arc::new(MockApi::new().with_delay("slow", ms(500)));
    let mut search = controller(&api);

    search.set_query("slow");
    sleep(ms(400)).await;
    search.set_query("");

    sleep(ms(1000)).await;
    assert_eq!(api.search_calls(), vec!["slow"]);
    assert!(search.state().results.is_empty());
    assert!(!search.state().is_searching);
}

#[tokio::test(start_paused = true)]
async fn failure_shows_empty_results() {
    let api = Arc::new(MockApi::new().with_failure("boom"));
    let mut search = controller(&api);

    search.set_query("ok");
    sleep(ms(400)).await;
    assert_eq!(search.state().results.len(), 1);

    search.set_query("boom");
    sleep(ms(400)).await;
    let state = search.state();
    assert!(state.results.is_empty());
    assert!(!state.is_searching);
    assert_eq!(state.debounced_query, "boom");
}

#[tokio::test(start_paused = true)]
async fn returning_to_same_debounced_value_skips_request() {
    let api = Arc::new(MockApi::new());
    let mut search = controller(&api);

    search.set_query("abc");
    sleep(ms(400)).await;
    search.set_query("abcd");
    sleep(ms(100)).await;
    search.set_query("abc");
    sleep(ms(400)).await;

    assert_eq!(api.search_calls(), vec!["abc"]);
}

#[tokio::test(start_paused = true)]
async fn query_is_trimmed_for_request() {
    let api = Arc::new(MockApi::new());
    let mut search = controller(&api);

    search.set_query("  Hub  ");
    search.flush().await;

    assert_eq!(api.search_calls(), vec!["Hub"]);
    assert_eq!(search.state().raw_query, "  Hub  ");
}

#[tokio::test(start_paused = true)]
async fn subscribers_see_results() {
    let api = Arc::new(MockApi::new());
    let mut search = controller(&api);
    let mut rx = search.subscribe();

    search.set_query("watch");
    search.flush().await;

    assert!(rx.has_changed().unwrap());
    let seen = rx.borrow_and_update().clone();
    assert_eq!(seen.results[0].name, "watch");
}

// Worker-thread runtime, as under `#[tokio::main]`. Real clock.

fn settings(debounce_ms: u64) -> SearchSettings {
    SearchSettings {
        debounce: ms(debounce_ms),
        ..SearchSettings::default()
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn clearing_while_timer_fires_leaves_nothing_behind() {
    let api = Arc::new(MockApi::new());
    let mut search = SearchController::new(api.clone(), settings(0));

    for i in 0..1_000 {
        search.set_query(format!("q{}", i));
        for _ in 0..(i % 64) {
            std::hint::spin_loop();
        }
        search.set_query("");

        let state = search.state();
        assert_eq!(state.debounced_query, "", "iteration {}", i);
        assert!(state.results.is_empty(), "iteration {}", i);
        assert!(!state.is_searching, "iteration {}", i);

        sleep(ms(1)).await;
        let state = search.state();
        assert_eq!(
            (state.raw_query.as_str(), state.debounced_query.as_str(), state.results.len()),
            ("", "", 0),
            "late write after clear at iteration {}",
            i
        );
        assert!(!state.is_searching, "iteration {}", i);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn late_response_is_dropped_on_worker_threads() {
    let api = Arc::new(MockApi::new().with_delay("slow", ms(300)));
    let mut search = SearchController::new(api.clone(), settings(10));

    search.set_query("slow");
    sleep(ms(100)).await;
    assert!(search.state().is_searching);

    search.set_query("fast");
    search.flush().await;
    assert_eq!(search.state().results[0].name, "fast");

    // "slow" answers around 310ms.
    sleep(ms(400)).await;
    assert_eq!(api.search_calls(), vec!["slow", "fast"]);
    let state = search.state();
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].name, "fast");
    assert!(!state.is_searching);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn clearing_drops_in_flight_response_on_worker_threads() {
    let api = Arc::new(MockApi::new().with_delay("slow", ms(200)));
    let mut search = SearchController::new(api.clone(), settings(10));

    search.set_query("slow");
    sleep(ms(100)).await;
    search.set_query("");

    sleep(ms(300)).await;
    assert_eq!(api.search_calls(), vec!["slow"]);
    let state = search.state();
    assert!(state.results.is_empty());
    assert!(state.debounced_query.is_empty());
    assert!(!state.is_searching);
}
