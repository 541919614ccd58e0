//! Schema migrations, applied on every startup
//!
//! Every statement is `IF NOT EXISTS`, so running this against an already
//! migrated database is a no-op.

use sqlx::PgPool;

use super::DbError;

const CREATE_NOTES: &str = r#"
    CREATE TABLE IF NOT EXISTS notes (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        content TEXT NOT NULL,
        content_type TEXT NOT NULL DEFAULT 'markdown',
        tags TEXT NOT NULL DEFAULT '[]',
        is_pinned BOOLEAN NOT NULL DEFAULT FALSE,
        is_archived BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_TAGS: &str = r#"
    CREATE TABLE IF NOT EXISTS tags (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL UNIQUE,
        color TEXT NOT NULL DEFAULT '#3b82f6',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const CREATE_TIMELINES: &str = r#"
    CREATE TABLE IF NOT EXISTS timelines (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        milestones TEXT NOT NULL DEFAULT '[]',
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
"#;

const INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS notes_created_at_idx ON notes (created_at DESC)",
    "CREATE INDEX IF NOT EXISTS timelines_created_at_idx ON timelines (created_at DESC)",
];

/// Create the notes, tags and timelines tables if missing.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running schema migrations...");

    for statement in [CREATE_NOTES, CREATE_TAGS, CREATE_TIMELINES]
        .into_iter()
        .chain(INDEXES.iter().copied())
    {
        sqlx::query(statement).execute(pool).await?;
    }

    tracing::info!("Schema migrations complete");
    Ok(())
}
