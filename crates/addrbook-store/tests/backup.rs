use addrbook_core::{AddressBook, ContactName, Phone, Record};
use addrbook_store::error::StoreError;
use addrbook_store::Store;
use tempfile::TempDir;

fn seeded_store(temp: &TempDir) -> (Store, std::path::PathBuf) {
    let db_path = temp.path().join("addrbook.sqlite3");
    let store = Store::open(&db_path).expect("open store");
    store.migrate().expect("migrate");

    let mut book = AddressBook::new();
    book.add(Record::new(ContactName::new("ada lovelace").expect("name")));
    book.add_phone("Ada Lovelace", Phone::new("0987654321").expect("phone"))
        .expect("phone");
    store.book().save(&book).expect("save");
    (store, db_path)
}

#[test]
fn backup_creates_readable_snapshot() {
    let temp = TempDir::new().expect("temp dir");
    let (store, _) = seeded_store(&temp);
    let backup_path = temp.path().join("backups").join("snapshot.sqlite3");

    store.backup_to(&backup_path).expect("backup");
    assert!(backup_path.exists());

    let backup = Store::open(&backup_path).expect("open backup");
    let book = backup.book().load().expect("load backup");
    assert_eq!(book.len(), 1);
    assert!(book.find("ada lovelace").is_some());
}

#[test]
fn backup_rejects_database_path() {
    let temp = TempDir::new().expect("temp dir");
    let (store, db_path) = seeded_store(&temp);

    let err = store.backup_to(&db_path).expect_err("backup should fail");
    assert!(matches!(err, StoreError::InvalidBackupPath(_)));
}

#[test]
fn backup_rejects_sidecar_paths() {
    let temp = TempDir::new().expect("temp dir");
    let (store, db_path) = seeded_store(&temp);

    for suffix in ["-wal", "-shm"] {
        let mut sidecar = db_path.clone().into_os_string();
        sidecar.push(suffix);
        let err = store
            .backup_to(std::path::Path::new(&sidecar))
            .expect_err("backup should fail");
        assert!(matches!(err, StoreError::InvalidBackupPath(_)));
    }
}
