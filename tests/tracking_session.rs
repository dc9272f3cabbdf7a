use approx::assert_abs_diff_eq;
use bgloc_core::{
    ChannelSink, FilterConfig, FilterWorker, LocationFilter, LocationProvider, ManualClock,
    RawFix, SinkEvent, StateTracker, FRESHNESS_WINDOW_MS,
};
use crossbeam::channel::unbounded;
use std::sync::Arc;

const T0: i64 = 1_700_000_000_000;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_walk_with_gap_and_noise() {
    init_logging();

    let clock = Arc::new(ManualClock::new(T0));
    let tracker = Arc::new(StateTracker::new());
    let config = FilterConfig::from_json_str(r#"{"providerId": 2}"#).unwrap();
    let filter = LocationFilter::with_parts(config, Arc::clone(&tracker), clock.clone());

    // First fix: no baseline
    let first = filter.process(RawFix::new(0.0, 0.0, 6.0, T0, 1)).unwrap();
    assert!(first.delta.is_none());

    // Noisy fix is dropped and does not disturb the baseline
    clock.advance(5_000);
    assert!(filter.process(RawFix::new(0.5, 0.5, 65.0, T0 + 5_000, 1)).is_none());
    assert_eq!(tracker.current().unwrap().time, T0);

    // Walk 1 degree of longitude along the equator
    clock.advance(5_000);
    let second = filter.process(RawFix::new(0.0, 1.0, 6.0, T0 + 10_000, 1)).unwrap();
    assert_eq!(second.delta_time(), Some(10_000));
    assert_abs_diff_eq!(second.delta_distance().unwrap(), 111_195.0, epsilon = 50.0);

    // Gap beyond the freshness window loses the baseline
    clock.advance(FRESHNESS_WINDOW_MS);
    let third = filter
        .process(RawFix::new(0.0, 1.0, 6.0, T0 + 10_000 + FRESHNESS_WINDOW_MS, 1))
        .unwrap();
    assert_eq!(third.delta_distance(), None);
    assert_eq!(third.delta_time(), None);

    let stats = filter.stats();
    assert_eq!(stats.accepted_count, 3);
    assert_eq!(stats.rejected_count, 1);
    assert_eq!(stats.delta_count, 1);
}

#[test]
fn test_worker_feeds_sink_json() {
    init_logging();

    let (tx, rx) = unbounded();
    let clock = Arc::new(ManualClock::new(T0 + 2_000));
    let filter = Arc::new(LocationFilter::with_clock(FilterConfig::new(5), clock));
    let provider = Arc::new(LocationProvider::new(filter, Arc::new(ChannelSink::new(tx))));
    let worker = FilterWorker::spawn(Arc::clone(&provider)).unwrap();

    worker.submit_fix(RawFix::new(10.0, 10.0, 3.0, T0, 1).with_provider("gps")).unwrap();
    worker.submit_fix(RawFix::new(10.0, 10.0, 3.0, T0 + 2_000, 1).with_speed(0.0)).unwrap();
    worker.submit_stationary(RawFix::new(10.0, 10.0, 30.0, T0 + 2_000, 1), None).unwrap();
    worker.shutdown().unwrap();
    provider.handle_security_exception("revoked");

    let json: Vec<String> = rx
        .try_iter()
        .map(|event| match event {
            SinkEvent::Fix(fix) => fix.to_json().unwrap(),
            SinkEvent::Stationary(obs) => obs.to_json().unwrap(),
            SinkEvent::Error(err) => err.to_json().unwrap(),
        })
        .collect();

    assert_eq!(json.len(), 4);
    assert!(json[0].contains("\"provider\":\"gps\""));
    assert!(!json[0].contains("deltaTime"));
    assert!(json[1].contains("\"deltaTime\":2000"));
    assert!(json[1].contains("\"deltaDistance\":0.0"));
    assert!(json[2].contains("\"providerId\":5"));
    assert!(!json[2].contains("radius"));
    assert_eq!(json[3], r#"{"code":2,"message":"revoked"}"#);
}
