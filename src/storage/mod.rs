// SQLite persistence. A dedicated worker thread owns the connection and
// async callers hand it closures over an mpsc channel, so the poll loop
// never blocks on disk.

use std::{
    path::{Path, PathBuf},
    sync::{mpsc, Arc, Mutex},
    thread::{self, JoinHandle},
};

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use tokio::sync::oneshot;
use tracing::{error, info};

mod migrations;

use migrations::run_migrations;

use crate::poker_types::{Observation, Position, PreflopDecision};

type DbTask = Box<dyn FnOnce(&mut Connection) + Send + 'static>;

enum DbCommand {
    Execute(DbTask),
    Shutdown,
}

struct DatabaseInner {
    sender: mpsc::Sender<DbCommand>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl Drop for DatabaseInner {
    fn drop(&mut self) {
        let mut guard = match self.worker.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        if let Some(handle) = guard.take() {
            if let Err(err) = self.sender.send(DbCommand::Shutdown) {
                error!("failed to send shutdown to DB thread: {err}");
            }
            if let Err(join_err) = handle.join() {
                error!("failed to join DB thread: {join_err:?}");
            }
        }
    }
}

fn parse_datetime(value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|err| anyhow!("invalid datetime '{value}': {err}"))
}

/// Row counts per table, for the `stats` subcommand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStats {
    pub sessions: i64,
    pub windows: i64,
    pub observations: i64,
    pub events: i64,
    pub decisions: i64,
}

/// A persisted decision row, as returned by the recent-decisions query.
#[derive(Debug, Clone)]
pub struct DecisionRow {
    pub window_id: String,
    pub ts: DateTime<Utc>,
    pub hero_position: Option<String>,
    pub recommended_action: String,
    pub sizing_bb: Option<f64>,
    pub confidence: f64,
    pub reasoning: String,
}

#[derive(Clone)]
pub struct Database {
    inner: Arc<DatabaseInner>,
    db_path: Arc<PathBuf>,
}

impl Database {
    pub fn new(db_path: PathBuf) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create database directory {}", parent.display())
            })?;
        }

        let (command_tx, command_rx) = mpsc::channel::<DbCommand>();
        let (ready_tx, ready_rx) = mpsc::channel();
        let path_for_thread = db_path.clone();

        let worker = thread::Builder::new()
            .name("plutos-db".into())
            .spawn(move || {
                let mut conn = match Connection::open(&path_for_thread) {
                    Ok(connection) => connection,
                    Err(err) => {
                        let _ = ready_tx.send(Err(anyhow::Error::new(err)
                            .context("failed to open SQLite database")));
                        return;
                    }
                };

                if let Err(err) = conn.pragma_update(None, "journal_mode", "WAL") {
                    error!("failed to enable WAL mode: {err}");
                }
                if let Err(err) = conn.pragma_update(None, "foreign_keys", "ON") {
                    error!("failed to enable foreign keys: {err}");
                }

                let init_result =
                    run_migrations(&mut conn).context("failed to run database migrations");
                if ready_tx.send(init_result).is_err() {
                    error!("DB initialization receiver dropped before ready signal");
                    return;
                }

                while let Ok(command) = command_rx.recv() {
                    match command {
                        DbCommand::Execute(task) => {
                            task(&mut conn);
                        }
                        DbCommand::Shutdown => break,
                    }
                }

                info!("database thread shutting down");
            })
            .context("failed to spawn database worker thread")?;

        ready_rx
            .recv()
            .context("database worker exited before signaling readiness")??;

        info!("database initialized at {}", db_path.as_path().display());

        Ok(Self {
            inner: Arc::new(DatabaseInner {
                sender: command_tx,
                worker: Mutex::new(Some(worker)),
            }),
            db_path: Arc::new(db_path),
        })
    }

    pub fn path(&self) -> &Path {
        self.db_path.as_path()
    }

    pub async fn execute<F, T>(&self, task: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sender = self.inner.sender.clone();
        let (reply_tx, reply_rx) = oneshot::channel();

        let command = DbCommand::Execute(Box::new(move |conn| {
            let result = task(conn);
            if reply_tx.send(result).is_err() {
                error!("DB caller dropped before receiving result");
            }
        }));

        sender
            .send(command)
            .map_err(|err| anyhow!("failed to send command to DB thread: {err}"))?;

        reply_rx
            .await
            .map_err(|_| anyhow!("database thread terminated unexpectedly"))?
    }

    /// Opens a new session row and returns its id.
    pub async fn create_session(
        &self,
        run_id: &str,
        app_version: &str,
        started_at: DateTime<Utc>,
    ) -> Result<i64> {
        let run_id = run_id.to_string();
        let app_version = app_version.to_string();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO sessions (run_id, app_version, started_at)
                 VALUES (?1, ?2, ?3)",
                params![run_id, app_version, started_at.to_rfc3339()],
            )
            .context("failed to insert session")?;
            Ok(conn.last_insert_rowid())
        })
        .await
    }

    pub async fn end_session(&self, session_id: i64, ended_at: DateTime<Utc>) -> Result<()> {
        self.execute(move |conn| {
            conn.execute(
                "UPDATE sessions SET ended_at = ?1 WHERE id = ?2",
                params![ended_at.to_rfc3339(), session_id],
            )
            .context("failed to end session")?;
            Ok(())
        })
        .await
    }

    pub async fn register_window(
        &self,
        session_id: i64,
        window_id: &str,
        title: &str,
        native_handle: u32,
    ) -> Result<()> {
        let window_id = window_id.to_string();
        let title = title.to_string();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO windows (session_id, window_id, title, native_handle, first_seen_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    session_id,
                    window_id,
                    title,
                    native_handle as i64,
                    Utc::now().to_rfc3339(),
                ],
            )
            .context("failed to register window")?;
            Ok(())
        })
        .await
    }

    pub async fn insert_observation(
        &self,
        session_id: i64,
        observation: &Observation,
    ) -> Result<()> {
        let record = observation.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO observations (
                     session_id, window_id, ts, stage, dealer_seat, hero_position,
                     active_players_count, active_positions_json, hero_cards_json,
                     board_cards_json, pot_bb, hero_stack_bb, raw_confidence_json
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
                params![
                    session_id,
                    record.window_id,
                    record.timestamp.to_rfc3339(),
                    record.stage.as_str(),
                    record.dealer_seat.map(|s| s as i64),
                    record.hero_position.map(Position::as_str),
                    record.active_positions.len() as i64,
                    serde_json::to_string(&record.active_positions)?,
                    record
                        .hero_cards
                        .map(|cards| serde_json::to_string(&cards))
                        .transpose()?,
                    serde_json::to_string(&record.board_cards)?,
                    record.pot_bb,
                    record.hero_stack_bb,
                    serde_json::to_string(&record.confidence)?,
                ],
            )
            .context("failed to insert observation")?;
            Ok(())
        })
        .await
    }

    pub async fn insert_event<P: serde::Serialize>(
        &self,
        session_id: i64,
        event_type: &str,
        payload: &P,
    ) -> Result<()> {
        let event_type = event_type.to_string();
        let payload_json = serde_json::to_string(payload).context("failed to serialize event")?;
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO events (session_id, ts, event_type, payload_json)
                 VALUES (?1, ?2, ?3, ?4)",
                params![session_id, Utc::now().to_rfc3339(), event_type, payload_json],
            )
            .context("failed to insert event")?;
            Ok(())
        })
        .await
    }

    pub async fn insert_decision(
        &self,
        session_id: i64,
        window_id: &str,
        observation: &Observation,
        decision: &PreflopDecision,
    ) -> Result<()> {
        let window_id = window_id.to_string();
        let stage = observation.stage;
        let hero_position = observation.hero_position;
        let ts = observation.timestamp;
        let record = decision.clone();
        self.execute(move |conn| {
            conn.execute(
                "INSERT INTO decisions (
                     session_id, window_id, ts, stage, hero_position,
                     recommended_action, sizing_bb, source, confidence, reasoning
                 ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
                params![
                    session_id,
                    window_id,
                    ts.to_rfc3339(),
                    stage.as_str(),
                    hero_position.map(Position::as_str),
                    record.action.as_str(),
                    record.sizing_bb,
                    record.source,
                    record.confidence,
                    record.reasoning,
                ],
            )
            .context("failed to insert decision")?;
            Ok(())
        })
        .await
    }

    /// Latest decisions, optionally limited to one session.
    pub async fn recent_decisions(
        &self,
        session_id: Option<i64>,
        limit: i64,
    ) -> Result<Vec<DecisionRow>> {
        self.execute(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT window_id, ts, hero_position, recommended_action,
                        sizing_bb, confidence, reasoning
                 FROM decisions
                 WHERE (?1 IS NULL OR session_id = ?1)
                 ORDER BY ts DESC
                 LIMIT ?2",
            )?;

            let mut rows = stmt.query(params![session_id, limit])?;
            let mut decisions = Vec::new();
            while let Some(row) = rows.next()? {
                decisions.push(DecisionRow {
                    window_id: row.get(0)?,
                    ts: parse_datetime(&row.get::<_, String>(1)?)?,
                    hero_position: row.get(2)?,
                    recommended_action: row.get(3)?,
                    sizing_bb: row.get(4)?,
                    confidence: row.get(5)?,
                    reasoning: row.get(6)?,
                });
            }
            Ok(decisions)
        })
        .await
    }

    pub async fn stats(&self) -> Result<StorageStats> {
        self.execute(|conn| {
            let count = |table: &str| -> Result<i64> {
                conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                    row.get(0)
                })
                .with_context(|| format!("failed to count {table}"))
            };
            Ok(StorageStats {
                sessions: count("sessions")?,
                windows: count("windows")?,
                observations: count("observations")?,
                events: count("events")?,
                decisions: count("decisions")?,
            })
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poker_types::{
        Action, BoardCards, Card, HoleCards, RecognitionConfidence, Stage,
    };

    fn sample_observation(window_id: &str) -> Observation {
        let first = Card::parse("Ah").unwrap();
        let second = Card::parse("Kd").unwrap();
        Observation {
            window_id: window_id.to_string(),
            timestamp: Utc::now(),
            stage: Stage::Preflop,
            dealer_seat: Some(2),
            hero_position: Some(Position::Button),
            active_positions: vec![Position::Button, Position::BigBlind],
            hero_cards: HoleCards::new(first, second),
            board_cards: BoardCards::default(),
            pot_bb: Some(1.5),
            hero_stack_bb: Some(100.0),
            hero_turn: true,
            confidence: RecognitionConfidence::default(),
        }
    }

    #[tokio::test]
    async fn test_session_lifecycle() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("test.db")).unwrap();

        let session_id = db
            .create_session("run-1", "0.3.0", Utc::now())
            .await
            .unwrap();
        assert!(session_id > 0);
        db.end_session(session_id, Utc::now()).await.unwrap();

        let stats = db.stats().await.unwrap();
        assert_eq!(stats.sessions, 1);
        assert_eq!(stats.observations, 0);
    }

    #[tokio::test]
    async fn test_observation_and_decision_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("test.db")).unwrap();
        let session_id = db
            .create_session("run-1", "0.3.0", Utc::now())
            .await
            .unwrap();

        db.register_window(session_id, "table_1", "NL Hold'em", 42)
            .await
            .unwrap();

        let observation = sample_observation("table_1");
        db.insert_observation(session_id, &observation).await.unwrap();

        let decision = PreflopDecision {
            action: Action::Raise,
            sizing_bb: Some(2.5),
            confidence: 1.0,
            source: "ranges_rfi".into(),
            reasoning: "OPEN BTN: AKo".into(),
        };
        db.insert_decision(session_id, "table_1", &observation, &decision)
            .await
            .unwrap();

        let rows = db.recent_decisions(None, 10).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].window_id, "table_1");
        assert_eq!(rows[0].recommended_action, "raise");
        assert_eq!(rows[0].sizing_bb, Some(2.5));

        let rows = db.recent_decisions(Some(session_id), 10).await.unwrap();
        assert_eq!(rows.len(), 1);
        let rows = db.recent_decisions(Some(session_id + 1), 10).await.unwrap();
        assert!(rows.is_empty());

        let stats = db.stats().await.unwrap();
        assert_eq!(stats.windows, 1);
        assert_eq!(stats.observations, 1);
        assert_eq!(stats.decisions, 1);
    }

    #[tokio::test]
    async fn test_event_insert() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::new(dir.path().join("test.db")).unwrap();
        let session_id = db
            .create_session("run-1", "0.3.0", Utc::now())
            .await
            .unwrap();

        db.insert_event(session_id, "hero_turn", &serde_json::json!({"hand": "AKs"}))
            .await
            .unwrap();

        let stats = db.stats().await.unwrap();
        assert_eq!(stats.events, 1);
    }

    #[tokio::test]
    async fn test_reopen_keeps_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        {
            let db = Database::new(path.clone()).unwrap();
            db.create_session("run-1", "0.3.0", Utc::now()).await.unwrap();
        }
        let db = Database::new(path).unwrap();
        let stats = db.stats().await.unwrap();
        assert_eq!(stats.sessions, 1);
    }
}
