//! End-to-end checks of the public binding API against browser-shaped
//! payloads (array-like `FileList` objects, as a DOM-to-JSON bridge
//! produces them).

use filedrop::{
    decode_file_list, decode_one, input, split_or_sentinel, DecodeError, DropEvent, DropTarget,
    EmptyList, EventKind, FileHandle,
};
use serde_json::{json, Value};

fn native_file(name: &str, mime: &str, size: u64, last_modified: i64) -> Value {
    json!({
        "name": name,
        "type": mime,
        "size": size,
        "lastModified": last_modified,
        // Extra host properties must survive the round trip untouched.
        "webkitRelativePath": "",
    })
}

fn file_list(files: &[Value]) -> Value {
    let mut list = json!({ "length": files.len() });
    for (i, file) in files.iter().enumerate() {
        list[i.to_string()] = file.clone();
    }
    list
}

#[test]
fn decode_then_encode_is_identity_on_the_native_value() {
    let native = native_file("photo.jpg", "image/jpeg", 2_048_000, 1_650_000_000_000);
    let file = decode_one(&native).unwrap();
    assert_eq!(file.encode(), &native);
    assert_eq!(serde_json::to_value(&file).unwrap(), native);
}

#[test]
fn decoded_fields_equal_inputs() {
    let cases = [
        ("a.txt", "text/plain", 0u64, 0i64),
        ("", "", 1, 1),
        ("dir/with/slashes.bin", "application/octet-stream", u32::MAX as u64, 4_102_444_800_000),
    ];
    for (name, mime, size, ms) in cases {
        let file = decode_one(&native_file(name, mime, size, ms)).unwrap();
        assert_eq!(file.name(), name);
        assert_eq!(file.mime(), mime);
        assert_eq!(file.size(), size);
        assert_eq!(file.last_modified().timestamp_millis(), ms);
    }
}

#[test]
fn list_of_n_files_decodes_in_index_order() {
    let natives: Vec<Value> = (0..5)
        .map(|i| native_file(&format!("f{}.txt", i), "text/plain", i, 0))
        .collect();
    let files = decode_file_list(&file_list(&natives)).unwrap();
    assert_eq!(files.len(), 5);
    for (i, file) in files.iter().enumerate() {
        assert_eq!(file.name(), format!("f{}.txt", i));
        assert_eq!(file.encode(), &natives[i]);
    }
}

#[test]
fn zero_length_list_split_yields_sentinel() {
    let files: Vec<FileHandle> = decode_file_list(&json!({ "length": 0 })).unwrap();
    let (first, rest) = split_or_sentinel(files);
    assert!(first.name().contains("please report an error"));
    assert_eq!(first.mime(), "text/plain");
    assert_eq!(first.size(), 0);
    assert_eq!(first.last_modified().timestamp(), 0);
    assert!(rest.is_empty());
}

#[test]
fn drop_zone_full_cycle() {
    let bindings = DropTarget::<DropEvent>::messages(Some("Zone".to_string())).bind();
    let files = file_list(&[
        native_file("one.png", "image/png", 10, 0),
        native_file("two.png", "image/png", 20, 0),
    ]);
    let drag = json!({ "dataTransfer": { "files": files }, "target": { "id": "Zone" } });

    let over = bindings.dispatch(EventKind::DragOver, &drag).unwrap();
    assert!(over.prevent_default && over.stop_propagation);
    assert!(matches!(over.outcome, Ok(DropEvent::Over { .. })));

    let child_leave = bindings
        .dispatch(EventKind::DragLeave, &json!({ "target": { "id": "ChildElement" } }))
        .unwrap();
    assert!(child_leave.prevent_default && child_leave.stop_propagation);
    assert_eq!(child_leave.message(), None);

    let leave = bindings
        .dispatch(EventKind::DragLeave, &json!({ "target": { "id": "Zone" } }))
        .unwrap();
    assert_eq!(leave.message(), Some(DropEvent::Leave));

    let dropped = bindings.dispatch(EventKind::Drop, &drag).unwrap().message().unwrap();
    let names: Vec<String> = dropped.files().iter().map(|f| f.name().to_string()).collect();
    assert_eq!(names, ["one.png", "two.png"]);
}

#[test]
fn drop_zone_without_leave_binds_two_listeners() {
    let spec = DropTarget::<DropEvent>::messages(None).bind().describe();
    assert_eq!(spec.listeners, [EventKind::DragOver, EventKind::Drop]);
    assert!(spec.attributes.is_empty());
}

#[test]
fn inputs_decode_change_events() {
    let accept = vec!["image/*".to_string()];
    let files = file_list(&[
        native_file("x.gif", "image/gif", 1, 0),
        native_file("y.gif", "image/gif", 2, 0),
    ]);
    let change = json!({ "target": { "files": files } });

    let single = input::single("pick-one", &accept, |file: FileHandle| file.name().to_string());
    let picked = single.dispatch(EventKind::Change, &change).unwrap();
    assert_eq!(picked.outcome, Ok("x.gif".to_string()));

    let multiple = input::multiple(
        "pick-many",
        &accept,
        EmptyList::Reject,
        |first: FileHandle, rest: Vec<FileHandle>| (first.name().to_string(), rest.len()),
    );
    let picked = multiple.dispatch(EventKind::Change, &change).unwrap();
    assert_eq!(picked.outcome, Ok(("x.gif".to_string(), 1)));

    let empty = json!({ "target": { "files": { "length": 0 } } });
    let picked = multiple.dispatch(EventKind::Change, &empty).unwrap();
    assert_eq!(picked.outcome, Err(DecodeError::NoFiles));
    assert!(picked.prevent_default && picked.stop_propagation);
}
