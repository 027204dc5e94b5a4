use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::sync::Mutex;

use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use uuid::Uuid;

use crate::models::enums::{Gender, MessageKind, MessageRole, Phase, UrgencyLevel};
use crate::models::{Message, Session};

use super::{SessionStore, StoreError};

/// SQLite-backed session store. Session columns are overwritten with each
/// snapshot; messages are append-only (existing rows are never touched).
pub struct SqliteSessionStore {
    conn: Mutex<Connection>,
}

impl SqliteSessionStore {
    /// Open a store at the given path and run migrations.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        configure_pragmas(&conn)?;
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        configure_pragmas(&conn)?;
        run_migrations(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Number of persisted sessions.
    pub fn session_count(&self) -> Result<i64, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockFailed)?;
        let count = conn.query_row("SELECT COUNT(*) FROM sessions", [], |row| row.get(0))?;
        Ok(count)
    }
}

fn configure_pragmas(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "PRAGMA journal_mode=DELETE;
         PRAGMA foreign_keys=ON;",
    )?;
    Ok(())
}

/// Run all pending migrations
fn run_migrations(conn: &Connection) -> Result<(), StoreError> {
    let current_version = get_current_version(conn);

    let migrations: Vec<(i64, &str)> = vec![(
        1,
        include_str!("../../resources/migrations/001_initial.sql"),
    )];

    for (version, sql) in migrations {
        if version > current_version {
            tracing::info!("Running migration v{version}");
            conn.execute_batch(sql)
                .map_err(|e| StoreError::MigrationFailed {
                    version,
                    reason: e.to_string(),
                })?;
        }
    }

    Ok(())
}

/// Get the current schema version (0 if no schema exists yet)
fn get_current_version(conn: &Connection) -> i64 {
    conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
        row.get::<_, i64>(0)
    })
    .unwrap_or(0)
}

impl SessionStore for SqliteSessionStore {
    fn get(&self, id: Uuid) -> Result<Option<Session>, StoreError> {
        let conn = self.conn.lock().map_err(|_| StoreError::LockFailed)?;

        let row = conn.query_row(
            "SELECT id, started_at, phase, has_consented, age, gender, main_symptom,
                    urgency_level, specialty, detected_symptoms, dynamic_questions,
                    current_question_index, collected_answers
             FROM sessions WHERE id = ?1",
            params![id.to_string()],
            |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, NaiveDateTime>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, bool>(3)?,
                    row.get::<_, Option<u32>>(4)?,
                    row.get::<_, Option<String>>(5)?,
                    row.get::<_, Option<String>>(6)?,
                    row.get::<_, String>(7)?,
                    row.get::<_, Option<String>>(8)?,
                    row.get::<_, String>(9)?,
                    row.get::<_, String>(10)?,
                    row.get::<_, i64>(11)?,
                    row.get::<_, String>(12)?,
                ))
            },
        );

        let raw = match row {
            Ok(raw) => raw,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let (
            raw_id,
            started_at,
            phase,
            has_consented,
            age,
            gender,
            main_symptom,
            urgency,
            specialty,
            symptoms_json,
            questions_json,
            question_index,
            answers_json,
        ) = raw;

        let session_id = Uuid::parse_str(&raw_id).unwrap_or(id);
        let messages = load_messages(&conn, session_id)?;

        let gender = match gender {
            Some(g) => Some(Gender::from_str(&g)?),
            None => None,
        };

        Ok(Some(Session {
            id: session_id,
            started_at,
            phase: Phase::from_str(&phase)?,
            messages,
            collected_answers: serde_json::from_str::<HashMap<String, String>>(&answers_json)?,
            main_symptom,
            detected_symptoms: serde_json::from_str(&symptoms_json)?,
            urgency_level: UrgencyLevel::from_str(&urgency)?,
            specialty_recommendation: specialty,
            dynamic_questions: serde_json::from_str(&questions_json)?,
            current_question_index: question_index as usize,
            has_consented,
            age,
            gender,
        }))
    }

    fn put(&self, session: &Session) -> Result<(), StoreError> {
        let mut conn = self.conn.lock().map_err(|_| StoreError::LockFailed)?;
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO sessions (id, started_at, phase, has_consented, age, gender,
                                   main_symptom, urgency_level, specialty, detected_symptoms,
                                   dynamic_questions, current_question_index, collected_answers)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
             ON CONFLICT(id) DO UPDATE SET
                phase = excluded.phase,
                has_consented = excluded.has_consented,
                age = excluded.age,
                gender = excluded.gender,
                main_symptom = excluded.main_symptom,
                urgency_level = excluded.urgency_level,
                specialty = excluded.specialty,
                detected_symptoms = excluded.detected_symptoms,
                dynamic_questions = excluded.dynamic_questions,
                current_question_index = excluded.current_question_index,
                collected_answers = excluded.collected_answers",
            params![
                session.id.to_string(),
                session.started_at,
                session.phase.as_str(),
                session.has_consented,
                session.age,
                session.gender.as_ref().map(|g| g.as_str()),
                session.main_symptom,
                session.urgency_level.as_str(),
                session.specialty_recommendation,
                serde_json::to_string(&session.detected_symptoms)?,
                serde_json::to_string(&session.dynamic_questions)?,
                session.current_question_index as i64,
                serde_json::to_string(&session.collected_answers)?,
            ],
        )?;

        for msg in &session.messages {
            tx.execute(
                "INSERT OR IGNORE INTO messages (id, session_id, role, kind, content, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    msg.id.to_string(),
                    msg.session_id.to_string(),
                    msg.role.as_str(),
                    msg.kind.as_str(),
                    msg.content,
                    msg.timestamp,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }
}

/// Messages in insertion order (rowid preserves the append order).
fn load_messages(conn: &Connection, session_id: Uuid) -> Result<Vec<Message>, StoreError> {
    let mut stmt = conn.prepare(
        "SELECT id, session_id, role, kind, content, timestamp
         FROM messages WHERE session_id = ?1 ORDER BY rowid",
    )?;

    let rows = stmt.query_map(params![session_id.to_string()], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, String>(3)?,
            row.get::<_, String>(4)?,
            row.get::<_, NaiveDateTime>(5)?,
        ))
    })?;

    let mut messages = Vec::new();
    for row in rows {
        let (id, sid, role, kind, content, timestamp) = row?;
        messages.push(Message {
            id: Uuid::parse_str(&id).unwrap_or_default(),
            session_id: Uuid::parse_str(&sid).unwrap_or(session_id),
            role: MessageRole::from_str(&role)?,
            kind: MessageKind::from_str(&kind)?,
            content,
            timestamp,
        });
    }
    Ok(messages)
}
