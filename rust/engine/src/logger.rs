use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::engine::HandSummary;
use crate::events::HandEvent;
use crate::game::Stage;
use crate::hand::Category;
use crate::player::ActionKind;

/// One applied action as it appears in hand history.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub seat: usize,
    pub stage: Stage,
    pub action: ActionKind,
    /// Chips the action put in.
    pub amount: u32,
    #[serde(default)]
    pub all_in: bool,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShownHand {
    pub seat: usize,
    pub category: Category,
    pub tiebreak: Vec<u8>,
}

/// Hands revealed at showdown and who took the pot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ShowdownInfo {
    pub winners: Vec<usize>,
    pub hands: Vec<ShownHand>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One hand of history, written as a single JSON line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HandRecord {
    /// `YYYYMMDD-NNNNNN`
    pub hand_id: String,
    /// Master seed of the session that produced this hand.
    pub seed: Option<u64>,
    pub deck_seed: u64,
    pub button: usize,
    pub blinds: [u32; 2],
    pub actions: Vec<ActionRecord>,
    pub board: Vec<Card>,
    pub pot: u32,
    pub payouts: Vec<(usize, u32)>,
    pub result: Option<String>,
    /// RFC3339, filled in by [`HandLogger::write`] when missing.
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub showdown: Option<ShowdownInfo>,
}

impl HandRecord {
    pub fn from_summary(
        hand_id: String,
        seed: Option<u64>,
        blinds: [u32; 2],
        summary: &HandSummary,
    ) -> Self {
        let actions = summary
            .events
            .iter()
            .filter_map(|e| match e {
                HandEvent::ActionTaken {
                    seat,
                    stage,
                    action,
                    amount,
                    all_in,
                    ..
                } => Some(ActionRecord {
                    seat: *seat,
                    stage: *stage,
                    action: *action,
                    amount: *amount,
                    all_in: *all_in,
                }),
                _ => None,
            })
            .collect();

        let showdown = if summary.showdown.is_empty() {
            None
        } else {
            let winners = summary.winners();
            Some(ShowdownInfo {
                notes: (winners.len() > 1).then(|| "split pot".to_string()),
                winners,
                hands: summary
                    .showdown
                    .iter()
                    .map(|(seat, s)| ShownHand {
                        seat: *seat,
                        category: s.category,
                        tiebreak: s.tiebreak.clone(),
                    })
                    .collect(),
            })
        };

        Self {
            hand_id,
            seed,
            deck_seed: summary.deck_seed,
            button: summary.button,
            blinds,
            actions,
            board: summary.board.clone(),
            pot: summary.pot,
            payouts: summary.payouts.clone(),
            result: Some(describe_result(summary)),
            ts: None,
            showdown,
        }
    }
}

fn describe_result(summary: &HandSummary) -> String {
    let parts: Vec<String> = summary
        .payouts
        .iter()
        .map(|(seat, amount)| format!("seat {} wins {}", seat, amount))
        .collect();
    if summary.default_win {
        format!("{} uncontested", parts.join(", "))
    } else {
        parts.join(", ")
    }
}

pub fn format_hand_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends [`HandRecord`]s to a JSONL file and hands out sequential hand ids.
pub struct HandLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl HandLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that writes nowhere and stamps ids with a fixed date.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_hand_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &HandRecord) -> std::io::Result<()> {
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
        Ok(())
    }

    /// Builds the record for `summary` under the next id and writes it.
    pub fn log_summary(
        &mut self,
        seed: Option<u64>,
        blinds: [u32; 2],
        summary: &HandSummary,
    ) -> std::io::Result<HandRecord> {
        let id = self.next_id();
        let record = HandRecord::from_summary(id, seed, blinds, summary);
        self.write(&record)?;
        Ok(record)
    }
}

/// Reads every record of a JSONL hand history, skipping blank lines.
pub fn read_hand_records<P: AsRef<Path>>(path: P) -> std::io::Result<Vec<HandRecord>> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line).map_err(std::io::Error::other)?);
    }
    Ok(records)
}
