use pocketbook_core::{Contact, ContactDraft, Note, NoteDraft, RecordStore, StoreError};
use std::collections::HashSet;

#[test]
fn open_creates_missing_file_with_empty_collection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");

    let store = RecordStore::<Note>::open(&path).unwrap();
    assert!(store.is_empty());
    assert_eq!(store.next_id(), 1);

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["notes"], serde_json::json!([]));
}

#[test]
fn open_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = RecordStore::<Note>::open(&path).err().unwrap();
    assert!(matches!(err, StoreError::Format { .. }));
}

#[test]
fn add_assigns_strictly_increasing_unique_ids() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecordStore::<Contact>::open(dir.path().join("contacts.json")).unwrap();

    let mut seen = HashSet::new();
    let mut last = 0;
    for index in 0..20 {
        let contact = store
            .add(ContactDraft::new(format!("c{index}"), "", ""))
            .unwrap();
        assert!(contact.id > last);
        assert!(seen.insert(contact.id));
        last = contact.id;
    }
    assert_eq!(store.records().first().unwrap().id, 1);
}

#[test]
fn reload_preserves_every_field_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");

    let created = {
        let mut store = RecordStore::<Note>::open(&path).unwrap();
        vec![
            store.add(NoteDraft::new("Ünïcödé", "日本語のメモ 🚀")).unwrap(),
            store
                .add(NoteDraft::new("line breaks", "a\nb\n\"quoted\""))
                .unwrap(),
        ]
    };

    let reloaded = RecordStore::<Note>::open(&path).unwrap();
    assert_eq!(reloaded.records(), created.as_slice());

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("日本語のメモ"));
}

#[test]
fn delete_then_find_yields_none() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecordStore::<Contact>::open(dir.path().join("contacts.json")).unwrap();
    let first = store.add(ContactDraft::new("a", "1", "")).unwrap();
    let second = store.add(ContactDraft::new("b", "2", "")).unwrap();

    let removed = store.delete(first.id).unwrap();
    assert_eq!(removed, first);
    assert!(store.find_by_id(first.id).is_none());
    assert_eq!(store.find_by_id(second.id), Some(&second));
}

#[test]
fn deleted_max_id_is_not_reused() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    {
        let mut store = RecordStore::<Contact>::open(&path).unwrap();
        store.add(ContactDraft::new("a", "", "")).unwrap();
        let top = store.add(ContactDraft::new("b", "", "")).unwrap();
        store.delete(top.id).unwrap();
    }

    let mut store = RecordStore::<Contact>::open(&path).unwrap();
    let next = store.add(ContactDraft::new("c", "", "")).unwrap();
    assert_eq!(next.id, 3);
}

#[test]
fn missing_id_is_not_found_and_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    let mut store = RecordStore::<Contact>::open(&path).unwrap();
    store.add(ContactDraft::new("a", "1", "")).unwrap();
    let before = std::fs::read(&path).unwrap();

    let update_err = store.update(42, |contact| contact.name.clear()).unwrap_err();
    assert!(matches!(update_err, StoreError::NotFound(42)));
    let delete_err = store.delete(42).unwrap_err();
    assert!(matches!(delete_err, StoreError::NotFound(42)));

    assert_eq!(std::fs::read(&path).unwrap(), before);
    assert_eq!(store.len(), 1);
}

#[test]
fn update_changes_record_in_place_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    let mut store = RecordStore::<Contact>::open(&path).unwrap();
    store.add(ContactDraft::new("a", "1", "")).unwrap();
    let target = store.add(ContactDraft::new("b", "2", "")).unwrap();
    store.add(ContactDraft::new("c", "3", "")).unwrap();

    let updated = store
        .update(target.id, |contact| contact.mail = "b@example.com".to_string())
        .unwrap();
    assert_eq!(updated.mail, "b@example.com");

    let reloaded = RecordStore::<Contact>::open(&path).unwrap();
    let names: Vec<_> = reloaded.records().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
    assert_eq!(reloaded.records()[1].mail, "b@example.com");
}

#[test]
fn filter_keeps_insertion_order_without_mutating() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = RecordStore::<Contact>::open(dir.path().join("contacts.json")).unwrap();
    for name in ["x1", "y", "x2", "x3"] {
        store.add(ContactDraft::new(name, "", "")).unwrap();
    }

    let matched: Vec<_> = store
        .filter(|contact| contact.name.starts_with('x'))
        .into_iter()
        .map(|contact| contact.name.clone())
        .collect();
    assert_eq!(matched, ["x1", "x2", "x3"]);
    assert_eq!(store.len(), 4);
}

#[cfg(unix)]
#[test]
fn failed_write_leaves_backing_file_byte_identical() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.json");
    let mut store = RecordStore::<Note>::open(&path).unwrap();
    store.add(NoteDraft::new("Grüße", "first line")).unwrap();
    let before = std::fs::read(&path).unwrap();

    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o555)).unwrap();
    // Privileged users ignore directory permissions; nothing to check then.
    let writable = std::fs::File::create(dir.path().join("write_check")).is_ok();
    if !writable {
        let err = store
            .add(NoteDraft::new("second", "never stored"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        let err = store
            .update(1, |note| note.title = "changed".to_string())
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert_eq!(std::fs::read(&path).unwrap(), before);
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].title, "Grüße");
    }
    std::fs::set_permissions(dir.path(), std::fs::Permissions::from_mode(0o755)).unwrap();
}
