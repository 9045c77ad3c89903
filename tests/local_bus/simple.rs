use local_event_bus::{BusConfig, BusError, LocalEventBus};
use serde_json::json;

use crate::support::Recorder;

#[test]
fn publish_topic_dispatches_newest_first() {
    let bus = LocalEventBus::simple();
    let recorder = Recorder::new();

    bus.subscribe("resize", recorder.handler("first")).unwrap();
    bus.subscribe("resize", recorder.handler("second")).unwrap();

    assert!(bus.publish_topic("resize", &[]).unwrap());
    assert_eq!(recorder.calls(), ["second", "first"]);
}

#[test]
fn handlers_see_topic_then_args() {
    let bus = LocalEventBus::simple();
    let recorder = Recorder::new();
    let log = recorder.clone();

    bus.subscribe("resize", move |event, args| {
        log.push(format!("{} {}", event.topic(), args[0]));
        Ok(())
    })
    .unwrap();

    bus.publish_topic("resize", &[json!({"w": 10})]).unwrap();
    assert_eq!(recorder.calls(), [r#"resize {"w":10}"#]);
}

#[test]
fn missing_topic_returns_false() {
    let bus = LocalEventBus::simple();
    assert!(!bus.publish_topic("resize", &[]).unwrap());
}

#[test]
fn no_global_listeners() {
    let bus = LocalEventBus::simple();
    let recorder = Recorder::new();
    assert!(matches!(
        bus.subscribe_to_all(recorder.handler("g")),
        Err(BusError::Unsupported(_))
    ));
}

#[test]
fn config_from_json_builds_a_simple_bus() {
    let config =
        BusConfig::from_json(r#"{"reentrancy_guard": false, "global_listeners": false}"#).unwrap();
    assert_eq!(config, BusConfig::simple());

    let bus = LocalEventBus::with_config(config.with_first_token(100));
    let recorder = Recorder::new();
    let token = bus.subscribe("x", recorder.handler("x")).unwrap();
    assert_eq!(token.value(), 100);
}
