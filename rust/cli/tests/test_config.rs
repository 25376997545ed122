use std::fs;

use deckplay_cli::run;
use serial_test::serial;

struct TempEnvVar {
    key: &'static str,
    previous: Option<String>,
}

impl TempEnvVar {
    fn set(key: &'static str, value: &str) -> Self {
        let previous = std::env::var(key).ok();
        unsafe { std::env::set_var(key, value) };
        Self { key, previous }
    }
}

impl Drop for TempEnvVar {
    fn drop(&mut self) {
        match &self.previous {
            Some(prev) => unsafe { std::env::set_var(self.key, prev) },
            None => unsafe { std::env::remove_var(self.key) },
        }
    }
}

fn cfg_json() -> (i32, serde_json::Value, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["deckplay", "cfg"], &mut out, &mut err);
    let value = serde_json::from_slice(&out).unwrap_or(serde_json::Value::Null);
    (code, value, String::from_utf8_lossy(&err).into_owned())
}

#[test]
#[serial]
fn defaults_are_reported_with_their_source() {
    let (code, v, err) = cfg_json();
    assert_eq!(code, 0, "stderr: {}", err);
    assert_eq!(v["shuffle"]["value"].as_str(), Some("random-key"));
    assert_eq!(v["shuffle"]["source"].as_str(), Some("default"));
    assert_eq!(v["games"]["value"].as_u64(), Some(1));
    assert!(v["seed"]["value"].is_null());
}

#[test]
#[serial]
fn env_overrides_file_and_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deckplay.toml");
    fs::write(&path, "seed = 456\nshuffle = \"fisher-yates\"\ngames = 3\n").unwrap();

    let _cfg = TempEnvVar::set("DECKPLAY_CONFIG", path.to_str().unwrap());
    let _seed = TempEnvVar::set("DECKPLAY_SEED", "123");

    let (code, v, err) = cfg_json();
    assert_eq!(code, 0, "stderr: {}", err);
    assert_eq!(v["seed"]["value"].as_u64(), Some(123));
    assert_eq!(v["seed"]["source"].as_str(), Some("env"));
    assert_eq!(v["shuffle"]["value"].as_str(), Some("fisher-yates"));
    assert_eq!(v["shuffle"]["source"].as_str(), Some("file"));
    assert_eq!(v["games"]["value"].as_u64(), Some(3));
    assert_eq!(v["games"]["source"].as_str(), Some("file"));
}

#[test]
#[serial]
fn invalid_env_values_are_rejected() {
    let _games = TempEnvVar::set("DECKPLAY_GAMES", "0");
    let (code, _, err) = cfg_json();
    assert_eq!(code, 2);
    assert!(err.contains("Invalid configuration"));

    drop(_games);
    let _shuffle = TempEnvVar::set("DECKPLAY_SHUFFLE", "overhand");
    let (code, _, err) = cfg_json();
    assert_eq!(code, 2);
    assert!(err.contains("overhand"));
}

#[test]
#[serial]
fn configured_seed_drives_play_and_flags_win() {
    let _seed = TempEnvVar::set("DECKPLAY_SEED", "77");
    let _games = TempEnvVar::set("DECKPLAY_GAMES", "2");

    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    assert_eq!(run(["deckplay", "play"], &mut out, &mut err), 0);
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Game 1/2 seed=77 "));
    assert!(text.contains("Game 2/2 seed=78 "));

    let mut out: Vec<u8> = Vec::new();
    assert_eq!(
        run(["deckplay", "play", "--seed", "5", "--games", "1"], &mut out, &mut err),
        0
    );
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Game 1/1 seed=5 "));
}
