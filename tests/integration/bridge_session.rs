//! Integration tests for a devtool bridge session
//!
//! Tests the flow: inbound bridge commands -> capture store -> outbound
//! acknowledgments and staged downloads.

use std::sync::Arc;

use serde_json::json;

use hooktape::{CaptureAction, CaptureStore, DevtoolBridge, DevtoolReply, ProducerId};

use super::common::{counter_reducer, raw_command, RecordingSink};

fn session() -> (DevtoolBridge, Arc<RecordingSink>, CaptureStore) {
    let store = CaptureStore::new();
    let sink = RecordingSink::new();
    let bridge = DevtoolBridge::new(store.clone(), sink.clone());
    (bridge, sink, store)
}

/// Test the connect round-trip: one inbound connect, one moduleConnected
/// out, one observer-attached transition.
#[test]
fn test_connect_round_trip() {
    let (bridge, sink, _store) = session();
    let listener = bridge.attach();

    assert!(listener.deliver(&raw_command("connectChromogen")));

    assert!(bridge.observer_attached());
    assert_eq!(sink.replies(), vec![DevtoolReply::ModuleConnected]);
}

/// Test that an observer-driven session records, pauses, and downloads.
#[test]
fn test_observer_controlled_capture_session() {
    let (bridge, sink, store) = session();
    let listener = bridge.attach();

    listener.deliver(&raw_command("connect"));
    store.register("counter", counter_reducer, json!(0)).unwrap();
    store.dispatch(CaptureAction::Update {
        producer: ProducerId::from("counter"),
        payload: json!({ "amount": 5 }),
    });

    // Observer pauses recording, then requests the capture.
    listener.deliver(&raw_command("toggleRecord"));
    assert!(!store.is_recording());

    listener.deliver(&raw_command("downloadFile"));
    let staged = bridge.take_staged().expect("capture should be staged");
    assert!(staged.file_name.ends_with(".test.rs"));
    assert!(staged.contents.contains("fn counter_state_transitions()"));
    assert!(staged.contents.contains("assert_eq!(hook.value(), json!(5));"));

    assert_eq!(
        sink.replies(),
        vec![DevtoolReply::ModuleConnected, DevtoolReply::SetStatus]
    );
}

/// Test that each toggleRecord command flips the gate exactly once, with one
/// acknowledgment per flip.
#[test]
fn test_toggle_record_flips_once_per_command() {
    let (bridge, sink, store) = session();
    let listener = bridge.attach();

    listener.deliver(&raw_command("toggleRecord"));
    listener.deliver(&raw_command("toggleRecord"));
    listener.deliver(&raw_command("toggleRecord"));

    assert!(!store.is_recording());
    assert_eq!(sink.replies().len(), 3);
}

/// Test that local and bridge togglers observe the same flag.
#[test]
fn test_local_and_bridge_toggles_share_one_flag() {
    let (bridge, _sink, store) = session();
    let listener = bridge.attach();

    store.toggle_recording();
    assert!(!store.is_recording());

    listener.deliver(&raw_command("toggleRecord"));
    assert!(store.is_recording());
}

/// Test that unrecognized and malformed messages are ignored without
/// disturbing the session.
#[test]
fn test_noise_on_the_wire_is_ignored() {
    let (bridge, sink, store) = session();
    let listener = bridge.attach();

    listener.deliver(&raw_command("restartEverything"));
    listener.deliver(&json!({ "payload": "missing action" }));
    listener.deliver(&json!("not even an object"));

    assert!(!bridge.observer_attached());
    assert!(store.is_recording());
    assert!(sink.replies().is_empty());
    assert!(bridge.take_staged().is_none());
}

/// Test that a remount swaps listeners without double delivery.
#[test]
fn test_remount_swaps_listener_without_double_delivery() {
    let (bridge, sink, _store) = session();

    let stale = bridge.attach();
    let current = bridge.attach();

    // The same inbound message reaches both listeners; only one handles it.
    assert!(!stale.deliver(&raw_command("connect")));
    assert!(current.deliver(&raw_command("connect")));

    assert_eq!(sink.replies(), vec![DevtoolReply::ModuleConnected]);
}

/// Test that downloading with no producers stages a valid empty suite.
#[test]
fn test_download_with_empty_snapshot() {
    let (bridge, _sink, _store) = session();
    let listener = bridge.attach();

    listener.deliver(&raw_command("downloadFile"));

    let staged = bridge.take_staged().expect("empty capture should stage");
    assert!(staged.contents.contains("// Suite:"));
    assert!(!staged.contents.contains("#[test]"));
}
