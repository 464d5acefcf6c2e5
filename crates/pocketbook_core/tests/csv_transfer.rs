use pocketbook_core::{
    ContactService, ExportOutcome, NoteService, Priority, StoreError, TaskFilter, TaskService,
};

#[test]
fn export_of_empty_collection_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let notes = NoteService::open(dir.path().join("notes.json")).unwrap();
    let target = dir.path().join("notes.csv");

    assert_eq!(notes.export_csv(&target).unwrap(), ExportOutcome::Empty);
    assert!(!target.exists());
}

#[test]
fn import_of_missing_file_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let mut contacts = ContactService::open(dir.path().join("contacts.json")).unwrap();

    let err = contacts
        .import_csv(dir.path().join("absent.csv"))
        .unwrap_err();
    assert!(matches!(err, StoreError::FileNotFound(_)));
    assert!(contacts.list_contacts().is_empty());
}

#[test]
fn task_export_then_import_reassigns_ids_and_keeps_fields() {
    let source_dir = tempfile::tempdir().unwrap();
    let mut source = TaskService::open(source_dir.path().join("tasks.json")).unwrap();
    source
        .add_task("first", "with, comma", Priority::High, Some("01-01-2025".to_string()))
        .unwrap();
    let second = source
        .add_task("second", "ünïcode", Priority::Other("Someday".to_string()), None)
        .unwrap();
    source.delete_task(1).unwrap();
    source.add_task("third", "", Priority::Low, None).unwrap();
    source.mark_done(second.id).unwrap();

    let csv_path = source_dir.path().join("tasks.csv");
    assert_eq!(
        source.export_csv(&csv_path).unwrap(),
        ExportOutcome::Written(2)
    );

    let target_dir = tempfile::tempdir().unwrap();
    let mut target = TaskService::open(target_dir.path().join("tasks.json")).unwrap();
    assert_eq!(target.import_csv(&csv_path).unwrap(), 2);

    let exported = source.list_tasks(TaskFilter::All);
    let imported = target.list_tasks(TaskFilter::All);
    assert_eq!(imported.len(), exported.len());
    for (index, (before, after)) in exported.iter().zip(imported.iter()).enumerate() {
        assert_eq!(after.id, index as u64 + 1);
        assert_eq!(after.title, before.title);
        assert_eq!(after.description, before.description);
        assert_eq!(after.done, before.done);
        assert_eq!(after.priority, before.priority);
        assert_eq!(after.due_date, before.due_date);
    }
}

#[test]
fn task_import_without_status_column_defaults_to_not_done() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("tasks.csv");
    std::fs::write(
        &csv_path,
        "ID,Name,Description,Priority\n1,Water plants,,Low\n2,Call mom,weekly,High\n",
    )
    .unwrap();

    let mut tasks = TaskService::open(dir.path().join("tasks.json")).unwrap();
    assert_eq!(tasks.import_csv(&csv_path).unwrap(), 2);

    let all = tasks.list_tasks(TaskFilter::All);
    assert!(all.iter().all(|task| !task.done));
    assert!(all.iter().all(|task| task.due_date.is_none()));
    assert_eq!(all[1].priority, Priority::High);
}

#[test]
fn import_appends_after_existing_records_without_dedup() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("contacts.csv");
    std::fs::write(
        &csv_path,
        "ID,Name,Phone,E-mail\n1,Ann Lee,555,ann@example.com\n",
    )
    .unwrap();

    let mut contacts = ContactService::open(dir.path().join("contacts.json")).unwrap();
    contacts.add_contact("Ann Lee", "555", "ann@example.com").unwrap();
    assert_eq!(contacts.import_csv(&csv_path).unwrap(), 1);

    let ids: Vec<_> = contacts.list_contacts().iter().map(|c| c.id).collect();
    assert_eq!(ids, [1, 2]);
    assert_eq!(contacts.list_contacts()[1].name, "Ann Lee");
}

#[test]
fn note_import_keeps_exported_date() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("notes.csv");
    std::fs::write(
        &csv_path,
        "ID,Title,Content,Date\n7,Old note,\"multi\nline\",05-05-2020 12:30:00\n",
    )
    .unwrap();

    let mut notes = NoteService::open(dir.path().join("notes.json")).unwrap();
    notes.import_csv(&csv_path).unwrap();

    let note = notes.get_note(1).unwrap();
    assert_eq!(note.title, "Old note");
    assert_eq!(note.content, "multi\nline");
    assert_eq!(note.timestamp, "05-05-2020 12:30:00");
}

#[test]
fn note_export_then_import_keeps_text_and_dates() {
    let source_dir = tempfile::tempdir().unwrap();
    let mut source = NoteService::open(source_dir.path().join("notes.json")).unwrap();
    source.add_note("Café ☕", "línea uno\n\"quoted\", línea dos").unwrap();
    source.add_note("日本語", "メモ").unwrap();

    let csv_path = source_dir.path().join("notes.csv");
    assert_eq!(
        source.export_csv(&csv_path).unwrap(),
        ExportOutcome::Written(2)
    );

    let target_dir = tempfile::tempdir().unwrap();
    let mut target = NoteService::open(target_dir.path().join("notes.json")).unwrap();
    assert_eq!(target.import_csv(&csv_path).unwrap(), 2);

    assert_eq!(target.list_notes(), source.list_notes());
}

#[test]
fn contact_export_then_import_keeps_fields() {
    let source_dir = tempfile::tempdir().unwrap();
    let mut source = ContactService::open(source_dir.path().join("contacts.json")).unwrap();
    source.add_contact("Zoë Ångström", "+46 555", "zoe@example.se").unwrap();
    source.add_contact("Ann, Lee", "", "").unwrap();
    source.delete_contact(1).unwrap();
    source.add_contact("Иван", "555-0101", "ivan@example.ru").unwrap();

    let csv_path = source_dir.path().join("contacts.csv");
    source.export_csv(&csv_path).unwrap();

    let target_dir = tempfile::tempdir().unwrap();
    let mut target = ContactService::open(target_dir.path().join("contacts.json")).unwrap();
    assert_eq!(target.import_csv(&csv_path).unwrap(), 2);

    let imported = target.list_contacts();
    assert_eq!(imported[0].id, 1);
    assert_eq!(imported[0].name, "Ann, Lee");
    assert_eq!(imported[1].id, 2);
    assert_eq!(imported[1].name, "Иван");
    assert_eq!(imported[1].phone, "555-0101");
    assert_eq!(imported[1].mail, "ivan@example.ru");

    let reloaded = ContactService::open(target_dir.path().join("contacts.json")).unwrap();
    assert_eq!(reloaded.list_contacts(), imported);
}
