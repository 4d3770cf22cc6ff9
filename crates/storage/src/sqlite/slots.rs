use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::{Row, Sqlite, SqlitePool};

use lecture_core::model::{
    Flashcard, LectureSession, QuizItem, Reference, SessionSnapshot, Transcript,
};

use super::SqliteSessionStore;
use crate::repository::{SessionRepository, StorageError};

// Slot keys are part of the stored format; renaming one orphans the data
// already saved under it.
const SLOT_QUIZ: &str = "quizContent";
const SLOT_FLASHCARDS: &str = "flashcardsData";
const SLOT_REFERENCES: &str = "referencesData";
const SLOT_PDF_CONTENT: &str = "pdfContent";
const SLOT_LECTURE_CONTENT: &str = "lectureContent";
const SLOT_VIDEO_URL: &str = "videoUrl";
const SLOT_CHAT: &str = "chat";
const SLOT_UPDATED_AT: &str = "updatedAt";

fn encode<T: Serialize>(value: &T) -> Result<String, StorageError> {
    serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// Decode one slot, substituting the default when the slot is missing or its
/// JSON no longer parses. A corrupted slot must not take the whole store down.
fn decode_or_default<T: DeserializeOwned + Default>(
    slots: &HashMap<String, String>,
    key: &str,
) -> T {
    match slots.get(key) {
        None => T::default(),
        Some(raw) => match serde_json::from_str(raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(slot = key, error = %err, "discarding corrupt session slot");
                T::default()
            }
        },
    }
}

async fn upsert_slot<'e, E>(executor: E, key: &str, value: &str) -> Result<(), sqlx::Error>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        r"
            INSERT INTO session_slots (key, value) VALUES (?1, ?2)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value;
        ",
    )
    .bind(key)
    .bind(value)
    .execute(executor)
    .await?;
    Ok(())
}

async fn load_slots(pool: &SqlitePool) -> Result<HashMap<String, String>, StorageError> {
    let rows = sqlx::query("SELECT key, value FROM session_slots")
        .fetch_all(pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

    Ok(rows
        .into_iter()
        .map(|row| (row.get::<String, _>("key"), row.get::<String, _>("value")))
        .collect())
}

#[async_trait]
impl SessionRepository for SqliteSessionStore {
    async fn load_snapshot(&self) -> Result<Option<SessionSnapshot>, StorageError> {
        let slots = load_slots(self.pool()).await?;
        if slots.is_empty() {
            return Ok(None);
        }

        let session = LectureSession {
            summary_text: decode_or_default(&slots, SLOT_LECTURE_CONTENT),
            raw_document_text: decode_or_default(&slots, SLOT_PDF_CONTENT),
            media_url: decode_or_default(&slots, SLOT_VIDEO_URL),
        };

        Ok(Some(SessionSnapshot {
            session,
            quiz: decode_or_default::<Vec<QuizItem>>(&slots, SLOT_QUIZ),
            flashcards: decode_or_default::<Vec<Flashcard>>(&slots, SLOT_FLASHCARDS),
            references: decode_or_default::<Vec<Reference>>(&slots, SLOT_REFERENCES),
            transcript: decode_or_default::<Transcript>(&slots, SLOT_CHAT),
            updated_at: decode_or_default::<Option<DateTime<Utc>>>(&slots, SLOT_UPDATED_AT),
        }))
    }

    async fn replace_snapshot(&self, snapshot: &SessionSnapshot) -> Result<(), StorageError> {
        let entries = [
            (SLOT_QUIZ, encode(&snapshot.quiz)?),
            (SLOT_FLASHCARDS, encode(&snapshot.flashcards)?),
            (SLOT_REFERENCES, encode(&snapshot.references)?),
            (SLOT_PDF_CONTENT, encode(&snapshot.session.raw_document_text)?),
            (SLOT_LECTURE_CONTENT, encode(&snapshot.session.summary_text)?),
            (SLOT_VIDEO_URL, encode(&snapshot.session.media_url)?),
            (SLOT_CHAT, encode(&snapshot.transcript)?),
            (SLOT_UPDATED_AT, encode(&snapshot.updated_at)?),
        ];

        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        for (key, value) in &entries {
            upsert_slot(&mut *tx, key, value)
                .await
                .map_err(|e| StorageError::Connection(e.to_string()))?;
        }
        tx.commit()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(())
    }

    async fn save_quiz(&self, items: &[QuizItem]) -> Result<(), StorageError> {
        let value = encode(&items)?;
        upsert_slot(self.pool(), SLOT_QUIZ, &value)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))
    }

    async fn save_transcript(&self, transcript: &Transcript) -> Result<(), StorageError> {
        let value = encode(transcript)?;
        upsert_slot(self.pool(), SLOT_CHAT, &value)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))
    }

    async fn save_media_url(&self, url: &str) -> Result<(), StorageError> {
        let value = encode(&Some(url))?;
        upsert_slot(self.pool(), SLOT_VIDEO_URL, &value)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}
