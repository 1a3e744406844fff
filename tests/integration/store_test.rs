//! Integration tests for on-disk storage and configuration.

use std::path::PathBuf;

use classlog::catalog::builtin_classes;
use classlog::storage::config::{load_config, save_config};
use classlog::storage::schema::keys;
use classlog::storage::{AppConfig, ClassStore, Database, LogStore, StoreError, UnlockStore};
use classlog::UnlockMap;

#[test]
fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("classlog.db");

    let (log_id, class_id) = {
        let db = Database::open(&path).unwrap();
        let classes = ClassStore::new(&db, builtin_classes().unwrap());
        let class = classes.add_class("Wrestling").unwrap();
        let lesson = classes.add_lesson(&class.id, "Single Leg").unwrap();

        let record = LogStore::new(&db)
            .create(&class.id, &lesson.id, Some("2024-05-04".into()), None, Some("good session".into()))
            .unwrap();
        UnlockStore::new(&db).save(&UnlockMap::from([(1, 1)])).unwrap();
        (record.id, class.id)
    };

    let db = Database::open(&path).unwrap();
    let classes = ClassStore::new(&db, builtin_classes().unwrap());
    let merged = classes.merged().unwrap();
    assert_eq!(merged.class_name(&class_id), "Wrestling");

    let record = LogStore::new(&db).get(&log_id).unwrap().unwrap();
    assert_eq!(record.note.as_deref(), Some("good session"));
    assert_eq!(UnlockStore::new(&db).load().unwrap(), UnlockMap::from([(1, 1)]));

    let mut stored_keys = db.keys().unwrap();
    stored_keys.sort();
    assert_eq!(
        stored_keys,
        vec![
            keys::ACHIEVEMENT_UNLOCKS.to_string(),
            keys::CLASS_LOGS.to_string(),
            keys::CUSTOM_CLASSES.to_string()
        ]
    );
}

#[test]
fn test_persisted_custom_class_shape() {
    let db = Database::open_in_memory().unwrap();
    let classes = ClassStore::new(&db, builtin_classes().unwrap());
    classes.add_lesson("gracie-combatives", "Side Control Escape").unwrap();

    let raw = db.get_item(keys::CUSTOM_CLASSES).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["id"], "gracie-combatives");
    assert_eq!(value[0]["class"], "Gracie Combatives");
    assert_eq!(value[0]["data"][0]["name"], "Side Control Escape");
}

#[test]
fn test_builtin_classes_are_read_only() {
    let db = Database::open_in_memory().unwrap();
    let classes = ClassStore::new(&db, builtin_classes().unwrap());

    assert!(matches!(
        classes.edit_class("open-mat", "Free Roll"),
        Err(StoreError::Validation(_))
    ));
    assert!(matches!(
        classes.delete_lesson("gracie-combatives", "gc-01"),
        Err(StoreError::Validation(_))
    ));
    assert!(matches!(
        classes.add_class("  gracie combatives "),
        Err(StoreError::Duplicate(_))
    ));
}

#[test]
fn test_corrupt_blobs_do_not_block_startup() {
    let db = Database::open_in_memory().unwrap();
    db.set_item(keys::CLASS_LOGS, "definitely not json").unwrap();
    db.set_item(keys::CUSTOM_CLASSES, "{\"wrong\":\"shape\"}").unwrap();

    assert!(LogStore::new(&db).list().unwrap().is_empty());
    let merged = ClassStore::new(&db, builtin_classes().unwrap()).merged().unwrap();
    assert_eq!(merged.len(), builtin_classes().unwrap().len());

    // Writing replaces the corrupt blob
    LogStore::new(&db).create("open-mat", "x", None, None, None).unwrap();
    assert_eq!(LogStore::new(&db).list().unwrap().len(), 1);
}

#[test]
fn test_config_points_at_database() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let db_path = dir.path().join("data").join("journal.db");

    let mut config = AppConfig::default();
    config.storage.database_file = db_path.clone();
    config.progression.rules.per_log = 7;
    config.time.utc_offset_minutes = Some(60);
    save_config(&config, &config_path).unwrap();

    let loaded = load_config(Some(&config_path)).unwrap();
    assert_eq!(loaded.database_path(), db_path);
    assert_eq!(loaded.progression.rules.per_log, 7);
    assert_eq!(loaded.time.offset().local_minus_utc(), 3600);

    Database::open(&loaded.database_path()).unwrap();
    assert!(db_path.exists());
    assert_ne!(loaded.database_path(), PathBuf::from("classlog.db"));
}
