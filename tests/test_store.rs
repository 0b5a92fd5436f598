use std::fs;

use alien_siege::store::{
    load_game, load_high_score, save_game, save_high_score, LoadError, SaveData,
};

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    let data = SaveData { level: 3, score: 40_500, lives: 5 };

    save_game(&path, &data).unwrap();
    assert_eq!(load_game(&path).unwrap(), data);
}

#[test]
fn extreme_values_survive_the_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");

    for data in [
        SaveData { level: 1, score: 0, lives: 0 },
        SaveData { level: u32::MAX, score: u32::MAX, lives: u32::MAX },
    ] {
        save_game(&path, &data).unwrap();
        assert_eq!(load_game(&path).unwrap(), data);
    }
}

#[test]
fn loading_from_an_empty_slot_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such_save.json");
    assert!(matches!(load_game(&path), Err(LoadError::NotFound)));
}

#[test]
fn garbage_in_the_file_reports_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    fs::write(&path, "config=true").unwrap();
    assert!(matches!(load_game(&path), Err(LoadError::Corrupt(_))));
}

#[test]
fn a_truncated_record_reports_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("save.json");
    fs::write(&path, r#"{"level": 3, "sco"#).unwrap();
    assert!(matches!(load_game(&path), Err(LoadError::Corrupt(_))));
}

#[test]
fn high_score_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score");
    save_high_score(&path, 4242);
    assert_eq!(load_high_score(&path), 4242);
}

#[test]
fn a_missing_high_score_reads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    assert_eq!(load_high_score(&dir.path().join("score")), 0);
}

#[test]
fn an_unparseable_high_score_reads_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score");
    fs::write(&path, "over nine thousand").unwrap();
    assert_eq!(load_high_score(&path), 0);
}

#[test]
fn saving_again_overwrites_the_old_score() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("score");
    save_high_score(&path, 10);
    save_high_score(&path, 99);
    assert_eq!(load_high_score(&path), 99);
}
