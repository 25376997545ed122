use serde::{Deserialize, Serialize};

use crate::deck::ShuffleMethod;
use crate::names::ToName;
use crate::simulator::GameTrace;

/// One simulation run as stored in a JSONL trace file.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Unique identifier for this run (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// RNG seed the run was produced from
    pub seed: Option<u64>,
    pub shuffle: ShuffleMethod,
    /// `rounds[r][h]` lists the card names held by hand `h` after round `r`
    pub rounds: Vec<Vec<Vec<String>>>,
    /// Per discard round, the card each hand gave up
    #[serde(default)]
    pub discards: Vec<Vec<String>>,
    /// Timestamp when the run was recorded (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl TraceRecord {
    pub fn from_trace(
        game_id: String,
        seed: Option<u64>,
        shuffle: ShuffleMethod,
        trace: &GameTrace,
    ) -> Self {
        let discards = trace
            .rounds()
            .iter()
            .filter_map(|r| r.discarded.as_ref().map(|d| d.to_name()))
            .collect();
        Self {
            game_id,
            seed,
            shuffle,
            rounds: trace.to_name(),
            discards,
            ts: None,
        }
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, read_to_string, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct TraceLogger {
    writer: Option<BufWriter<std::fs::File>>,
    date: String,
    seq: u32,
}

impl TraceLogger {
    /// Opens `path` for appending, creating parent directories as needed.
    /// Ids continue after the highest same-day id already in the file.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        let date = Utc::now().format("%Y%m%d").to_string();
        Self::create_for_date(path, &date)
    }

    pub fn create_for_date<P: AsRef<Path>>(path: P, date: &str) -> std::io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let seq = if path.exists() {
            last_seq(&read_to_string(path)?, date)
        } else {
            0
        };
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: date.to_string(),
            seq,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &TraceRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        tracing::debug!(game_id = %rec.game_id, "trace record written");
        Ok(())
    }
}

/// Highest sequence number among `date`'s ids in existing JSONL contents.
/// Lines that do not parse are skipped.
fn last_seq(contents: &str, date: &str) -> u32 {
    let prefix = format!("{}-", date);
    contents
        .lines()
        .filter(|l| !l.trim().is_empty())
        .filter_map(|line| {
            let v = serde_json::from_str::<serde_json::Value>(line).ok()?;
            let id = v.get("game_id")?.as_str()?;
            id.strip_prefix(&prefix)?.parse::<u32>().ok()
        })
        .max()
        .unwrap_or(0)
}
