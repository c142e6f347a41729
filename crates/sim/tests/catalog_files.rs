//! Loading creature catalogs from RON files.

use std::fs;

use prowl_core::{CreatureOracle, Gait};
use prowl_sim::CreatureCatalog;

#[test]
fn catalog_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("creatures.ron");
    fs::write(
        &path,
        r#"{
            "lurker": (speed: 95, gait: Shambling),
            "courier": (speed: 140, gait: Direct),
        }"#,
    )
    .unwrap();

    let catalog = CreatureCatalog::from_path(&path).unwrap();
    assert_eq!(catalog.len(), 2);

    let lurker = catalog.template("lurker").unwrap();
    assert_eq!(lurker.speed, 95);
    assert_eq!(lurker.gait, Gait::Shambling);
}

#[test]
fn missing_files_surface_io_errors() {
    let dir = tempfile::tempdir().unwrap();
    let result = CreatureCatalog::from_path(dir.path().join("absent.ron"));
    assert!(result.is_err());
}
