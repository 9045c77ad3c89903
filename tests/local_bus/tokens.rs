use local_event_bus::{Event, LocalEventBus, Token};

use crate::support::Recorder;

#[test]
fn unsubscribed_handler_never_fires() {
    let bus = LocalEventBus::new();
    let recorder = Recorder::new();

    let token = bus.subscribe("saved", recorder.handler("gone")).unwrap();
    assert_eq!(bus.unsubscribe(token), Some(token));

    bus.publish_event(&Event::new("saved")).unwrap();
    assert!(recorder.is_empty());
}

#[test]
fn tokens_increase_and_are_never_reused() {
    let bus = LocalEventBus::new();
    let recorder = Recorder::new();
    let mut issued = Vec::new();

    for round in 0..3 {
        let a = bus.subscribe("a", recorder.handler("a")).unwrap();
        let b = bus.subscribe("b", recorder.handler("b")).unwrap();
        issued.push(a);
        issued.push(b);
        if round % 2 == 0 {
            bus.unsubscribe(a);
            bus.unsubscribe(b);
        }
    }

    assert!(issued.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(issued.first(), Some(&Token::new(0)));
    assert_eq!(issued.last(), Some(&Token::new(5)));
}

#[test]
fn unknown_token_leaves_subscriptions_alone() {
    let bus = LocalEventBus::new();
    let recorder = Recorder::new();
    bus.subscribe("saved", recorder.handler("kept")).unwrap();

    assert_eq!(bus.unsubscribe(Token::new(42)), None);
    assert_eq!(bus.subscriber_count("saved"), 1);

    bus.publish_event(&Event::new("saved")).unwrap();
    assert_eq!(recorder.calls(), ["kept"]);
}

#[test]
fn token_from_another_bus_is_unknown() {
    let a = LocalEventBus::new();
    let b = LocalEventBus::new();
    let recorder = Recorder::new();

    a.subscribe("x", recorder.handler("a0")).unwrap();
    let token = a.subscribe("x", recorder.handler("a1")).unwrap();

    assert_eq!(b.unsubscribe(token), None);
    assert_eq!(a.subscriber_count("x"), 2);
}

#[test]
fn unsubscribe_removes_exactly_one() {
    let bus = LocalEventBus::new();
    let recorder = Recorder::new();

    bus.subscribe("saved", recorder.handler("first")).unwrap();
    let middle = bus.subscribe("saved", recorder.handler("middle")).unwrap();
    bus.subscribe("saved", recorder.handler("last")).unwrap();

    assert_eq!(bus.unsubscribe(middle), Some(middle));
    assert_eq!(bus.unsubscribe(middle), None);

    bus.publish_event(&Event::new("saved")).unwrap();
    assert_eq!(recorder.calls(), ["last", "first"]);
}
