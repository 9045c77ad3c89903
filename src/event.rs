//! The event object handed to `publish`.

use std::cell::RefCell;
use std::collections::BTreeSet;

use crate::identity::BusId;

/// An event to be published on one or more buses.
///
/// Topic, payload and metadata are fixed at construction. The only thing
/// that changes afterwards is the set of buses that have already processed
/// the event, which `publish` stamps so a bus never handles the same event
/// object twice. A clone is a new event: it starts with no stamps.
#[derive(Debug, Default)]
pub struct Event {
    topic: String,
    payload: Vec<u8>,
    metadata: Vec<(String, String)>,
    publishers: RefCell<BTreeSet<BusId>>,
}

impl Clone for Event {
    fn clone(&self) -> Self {
        Event {
            topic: self.topic.clone(),
            payload: self.payload.clone(),
            metadata: self.metadata.clone(),
            publishers: RefCell::default(),
        }
    }
}

impl Event {
    /// Event on `topic` carrying no payload.
    pub fn new(topic: impl Into<String>) -> Self {
        Self::with_payload(topic, Vec::new())
    }

    pub fn with_payload(topic: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            topic: topic.into(),
            payload,
            metadata: Vec::new(),
            publishers: RefCell::new(BTreeSet::new()),
        }
    }

    /// Event whose payload is the UTF-8 bytes of `text`.
    pub fn with_string_payload(topic: impl Into<String>, text: impl Into<String>) -> Self {
        let text: String = text.into();
        Self::with_payload(topic, text.into())
    }

    /// Event whose payload is `value` packed with bitcode. Handlers unpack
    /// it with [`Event::decode`].
    pub fn encode<T: serde::Serialize>(
        topic: impl Into<String>,
        value: &T,
    ) -> Result<Self, bitcode::Error> {
        bitcode::serialize(value).map(|packed| Self::with_payload(topic, packed))
    }

    /// Unpack a payload written by [`Event::encode`].
    pub fn decode<T: serde::de::DeserializeOwned>(&self) -> Result<T, bitcode::Error> {
        bitcode::deserialize(self.payload())
    }

    /// Like [`Event::encode`] but readable on the wire: `value` as JSON text.
    pub fn json<T: serde::Serialize>(
        topic: impl Into<String>,
        value: &T,
    ) -> Result<Self, serde_json::Error> {
        serde_json::to_vec(value).map(|text| Self::with_payload(topic, text))
    }

    /// Unpack a payload written by [`Event::json`].
    pub fn decode_json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.payload)
    }

    /// Attach a header such as a correlation id. Handlers read it back with
    /// [`Event::metadata`]; repeated keys keep their first value.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let entry = (key.into(), value.into());
        self.metadata.push(entry);
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// The payload as text, or `None` when it is binary.
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(self.payload()).ok()
    }

    /// First metadata value stored under `key`.
    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the bus with this id has already published the event.
    pub fn has_passed_through(&self, bus: &BusId) -> bool {
        self.publishers.borrow().contains(bus)
    }

    /// Ids of every bus that has published the event, sorted.
    pub fn seen_by(&self) -> Vec<BusId> {
        self.publishers.borrow().iter().cloned().collect()
    }

    /// Record that `bus` is processing this event. Returns `false` when it
    /// already had.
    pub(crate) fn stamp(&self, bus: &BusId) -> bool {
        self.publishers.borrow_mut().insert(bus.clone())
    }
}
