use form_persistence::{
    FileStorage, LifecycleSignal, MemoryStorage, PersistError, PersistOptions, STORAGE_PREFIX,
    ScopedStores, StorageBackend, StorageScope, clear_storage, load, register, save,
};

mod common;
use crate::common::utils::{checkbox, form_doc, nested, text};

#[test]
fn save_writes_under_the_prefixed_form_id_key() {
    let doc = form_doc(Some("checkout"), vec![nested(text("name", "Ada"))]);
    let mut storage = MemoryStorage::new();

    save(&doc, 0, &PersistOptions::new(), &mut storage).unwrap();

    let body = storage
        .get(&format!("{STORAGE_PREFIX}checkout"))
        .expect("record stored under prefix + element id");
    assert_eq!(body, r#"{"name":["Ada"]}"#);
}

#[test]
fn identifier_override_takes_precedence_over_element_id() {
    let doc = form_doc(Some("checkout"), vec![nested(text("name", "Ada"))]);
    let mut storage = MemoryStorage::new();
    let options = PersistOptions::new().with_uuid("my-form");

    save(&doc, 0, &options, &mut storage).unwrap();

    assert!(storage.get(&format!("{STORAGE_PREFIX}my-form")).is_some());
    assert!(storage.get(&format!("{STORAGE_PREFIX}checkout")).is_none());
}

#[test]
fn missing_identity_fails_before_any_storage_access() {
    let doc = form_doc(None, vec![nested(text("name", "Ada"))]);
    let mut storage = MemoryStorage::new();

    let err = save(&doc, 0, &PersistOptions::new(), &mut storage).unwrap_err();
    assert!(matches!(err, PersistError::MissingIdentity));
    assert!(storage.is_empty(), "Nothing was written");

    let mut doc = form_doc(None, vec![nested(text("name", ""))]);
    let err = load(&mut doc, 0, &PersistOptions::new(), &storage).unwrap_err();
    assert!(matches!(err, PersistError::MissingIdentity));

    let doc = form_doc(None, vec![]);
    let err = clear_storage(&doc, 0, &PersistOptions::new(), &mut storage).unwrap_err();
    assert!(matches!(err, PersistError::MissingIdentity));
}

#[test]
fn load_with_no_stored_record_is_a_noop() {
    let mut doc = form_doc(Some("checkout"), vec![nested(text("name", "typed"))]);
    let storage = MemoryStorage::new();

    let applied = load(&mut doc, 0, &PersistOptions::new(), &storage).unwrap();
    assert!(!applied);
    assert_eq!(doc.controls[0].value, "typed", "Document unchanged");
}

#[test]
fn load_applies_a_previously_saved_record() {
    let filled = form_doc(
        Some("checkout"),
        vec![nested(text("name", "Ada")), nested(checkbox("news", "y", true))],
    );
    let mut storage = MemoryStorage::new();
    save(&filled, 0, &PersistOptions::new(), &mut storage).unwrap();

    let mut fresh = form_doc(
        Some("checkout"),
        vec![nested(text("name", "")), nested(checkbox("news", "y", false))],
    );
    let applied = load(&mut fresh, 0, &PersistOptions::new(), &storage).unwrap();

    assert!(applied);
    assert_eq!(fresh.controls[0].value, "Ada");
    assert!(fresh.controls[1].checked);
}

#[test]
fn malformed_stored_record_surfaces_a_decode_error() {
    let mut doc = form_doc(Some("checkout"), vec![nested(text("name", ""))]);
    let mut storage = MemoryStorage::new();
    storage.set(&format!("{STORAGE_PREFIX}checkout"), "not json");

    let err = load(&mut doc, 0, &PersistOptions::new(), &storage).unwrap_err();
    assert!(matches!(err, PersistError::Decode { .. }));
}

#[test]
fn clear_removes_the_stored_record() {
    let doc = form_doc(Some("checkout"), vec![nested(text("name", "Ada"))]);
    let mut storage = MemoryStorage::new();
    save(&doc, 0, &PersistOptions::new(), &mut storage).unwrap();

    clear_storage(&doc, 0, &PersistOptions::new(), &mut storage).unwrap();
    assert!(storage.is_empty());
}

#[test]
fn register_loads_existing_state_immediately() {
    let filled = form_doc(Some("checkout"), vec![nested(text("name", "Ada"))]);
    let mut storage = MemoryStorage::new();
    save(&filled, 0, &PersistOptions::new(), &mut storage).unwrap();

    let mut fresh = form_doc(Some("checkout"), vec![nested(text("name", ""))]);
    let armed = register(&mut fresh, 0, &PersistOptions::new(), &mut storage).unwrap();
    assert_eq!(armed.form(), 0, "Armed form remembers which form it guards");
    assert_eq!(fresh.controls[0].value, "Ada");
}

#[test]
fn exit_save_fires_exactly_once_across_redundant_signals() {
    let mut doc = form_doc(Some("checkout"), vec![nested(text("name", "first"))]);
    let mut storage = MemoryStorage::new();
    let options = PersistOptions::new();

    let mut armed = register(&mut doc, 0, &options, &mut storage).unwrap();

    armed
        .signal(LifecycleSignal::Unload, &doc, &options, &mut storage)
        .unwrap();
    let after_first = storage.get(&format!("{STORAGE_PREFIX}checkout")).unwrap();

    // A redundant unload-family notification must not save again
    doc.controls[0].value = "second".to_string();
    armed
        .signal(LifecycleSignal::PageHide, &doc, &options, &mut storage)
        .unwrap();

    let after_second = storage.get(&format!("{STORAGE_PREFIX}checkout")).unwrap();
    assert_eq!(after_first, after_second, "Exit save deduplicated");
}

#[test]
fn submit_clears_storage_by_default() {
    let mut doc = form_doc(Some("checkout"), vec![nested(text("name", "Ada"))]);
    let mut storage = MemoryStorage::new();
    let options = PersistOptions::new();

    let mut armed = register(&mut doc, 0, &options, &mut storage).unwrap();
    save(&doc, 0, &options, &mut storage).unwrap();

    armed
        .signal(LifecycleSignal::Submit, &doc, &options, &mut storage)
        .unwrap();
    assert!(storage.is_empty(), "Default submit behavior clears");
}

#[test]
fn submit_saves_when_configured() {
    let mut doc = form_doc(Some("checkout"), vec![nested(text("name", "Ada"))]);
    let mut storage = MemoryStorage::new();
    let options = PersistOptions {
        save_on_submit: true,
        ..PersistOptions::default()
    };

    let mut armed = register(&mut doc, 0, &options, &mut storage).unwrap();
    armed
        .signal(LifecycleSignal::Submit, &doc, &options, &mut storage)
        .unwrap();

    assert!(storage.get(&format!("{STORAGE_PREFIX}checkout")).is_some());
}

#[test]
fn scope_selects_the_backing_store() {
    let doc = form_doc(Some("checkout"), vec![nested(text("name", "Ada"))]);
    let mut stores: ScopedStores<MemoryStorage, MemoryStorage> = ScopedStores::default();
    let options = PersistOptions {
        scope: StorageScope::Session,
        ..PersistOptions::default()
    };

    save(&doc, 0, &options, stores.select(options.scope)).unwrap();

    assert!(stores.durable.is_empty(), "Durable store untouched");
    assert!(!stores.session.is_empty(), "Session store holds the record");
}

#[test]
fn file_storage_round_trips_across_reopen() {
    let path = std::env::temp_dir().join(format!(
        "form-persistence-test-{}.json",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    let doc = form_doc(Some("checkout"), vec![nested(text("name", "Ada"))]);
    {
        let mut store = FileStorage::open(&path);
        save(&doc, 0, &PersistOptions::new(), &mut store).unwrap();
    }

    let store = FileStorage::open(&path);
    let mut fresh = form_doc(Some("checkout"), vec![nested(text("name", ""))]);
    let applied = load(&mut fresh, 0, &PersistOptions::new(), &store).unwrap();

    assert!(applied, "Record survived the reopen");
    assert_eq!(fresh.controls[0].value, "Ada");

    let _ = std::fs::remove_file(&path);
}
