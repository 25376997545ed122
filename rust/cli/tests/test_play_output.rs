use std::fs;

use deckplay_cli::run;
use deckplay_engine::logger::TraceRecord;

#[test]
fn play_writes_one_jsonl_record_per_game() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("traces.jsonl");
    let path_str = path.to_str().unwrap();

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["deckplay", "play", "--seed", "40", "--games", "3", "--output", path_str],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0, "stderr: {}", String::from_utf8_lossy(&err));
    assert!(String::from_utf8_lossy(&out).contains("Wrote 3 game(s)"));

    let text = fs::read_to_string(&path).unwrap();
    let records: Vec<TraceRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 3);
    for (i, rec) in records.iter().enumerate() {
        assert_eq!(rec.seed, Some(40 + i as u64));
        assert_eq!(rec.rounds.len(), 14);
        assert!(rec.ts.is_some());
        assert!(rec.game_id.ends_with(&format!("-{:06}", i + 1)));
    }
}

#[test]
fn same_seed_same_record_contents() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.jsonl");
    let b = dir.path().join("b.jsonl");
    for p in [&a, &b] {
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let code = run(
            ["deckplay", "play", "--seed", "8", "--output", p.to_str().unwrap()],
            &mut out,
            &mut err,
        );
        assert_eq!(code, 0);
    }
    let ra: TraceRecord = serde_json::from_str(fs::read_to_string(&a).unwrap().trim()).unwrap();
    let rb: TraceRecord = serde_json::from_str(fs::read_to_string(&b).unwrap().trim()).unwrap();
    assert_eq!(ra.rounds, rb.rounds);
    assert_eq!(ra.discards, rb.discards);
}

#[test]
fn appending_to_an_existing_file_warns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.jsonl");
    let path_str = path.to_str().unwrap();
    for expect_warning in [false, true] {
        let mut out: Vec<u8> = Vec::new();
        let mut err: Vec<u8> = Vec::new();
        let code = run(
            ["deckplay", "play", "--seed", "1", "--output", path_str],
            &mut out,
            &mut err,
        );
        assert_eq!(code, 0);
        let stderr = String::from_utf8_lossy(&err);
        assert_eq!(stderr.contains("WARNING: appending"), expect_warning);
    }
    let ids: Vec<String> = fs::read_to_string(&path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str::<TraceRecord>(l).unwrap().game_id)
        .collect();
    assert_eq!(ids.len(), 2);
    assert_ne!(ids[0], ids[1], "appended games must keep unique ids");
}
