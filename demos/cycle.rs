//! Two buses forwarding to each other without looping.
//!
//! Run with `RUST_LOG=local_event_bus=trace cargo run --example cycle` to see
//! the guard kick in.

use std::rc::Rc;

use local_event_bus::{BusError, Event, LocalEventBus};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize, Deserialize)]
struct DocumentSaved {
    id: String,
    bytes: u64,
}

fn main() -> Result<(), BusError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let editor = Rc::new(LocalEventBus::new());
    let preview = Rc::new(LocalEventBus::new());

    editor.subscribe_to_all(|event, _| {
        println!("[editor] saw {}", event.topic());
        Ok(())
    })?;

    let to_preview = Rc::downgrade(&preview);
    editor.subscribe("DocumentSaved", move |event, args| {
        let saved: DocumentSaved = event.decode()?;
        println!("[editor] {} saved ({} bytes)", saved.id, saved.bytes);
        if let Some(preview) = to_preview.upgrade() {
            preview.publish(event, args)?;
        }
        Ok(())
    })?;

    let to_editor = Rc::downgrade(&editor);
    preview.subscribe("DocumentSaved", move |event, args| {
        println!("[preview] refreshing");
        if let Some(editor) = to_editor.upgrade() {
            let again = editor.publish(event, args)?;
            println!("[preview] forwarded back to editor: delivered = {}", again);
        }
        Ok(())
    })?;

    let event = Event::encode(
        "DocumentSaved",
        &DocumentSaved {
            id: "doc-1".into(),
            bytes: 2048,
        },
    )
    .map_err(|e| BusError::InvalidArgument(e.to_string()))?;

    let delivered = editor.publish_event(&event)?;
    println!("delivered = {}, seen by {} buses", delivered, event.seen_by().len());
    Ok(())
}
