use space_dodger::logging;

#[test]
fn init_with_log_file_creates_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("space_dodger.log");
    logging::init(Some(path.as_path())).unwrap();
    assert!(path.exists());
    // A second init in the same process is harmless.
    logging::init(None).unwrap();
}
