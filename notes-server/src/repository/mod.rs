mod embedded;

use async_trait::async_trait;
use embedded::migrations;

use tokio_postgres::{Client, NoTls, Row};

use crate::{
    models::Note,
    store::{NoteStore, StoreError},
};

/// PostgreSQL backed note store.
pub struct Repository {
    client: Client,
}

impl Repository {
    pub async fn new(database_dsn: &str) -> Result<Self, tokio_postgres::Error> {
        let (client, con) = tokio_postgres::connect(database_dsn, NoTls).await?;

        tokio::spawn(async move {
            if let Err(e) = con.await {
                tracing::error!("connection error: {}", e);
            }
        });

        Ok(Self { client })
    }

    pub async fn migrate(&mut self) -> Result<(), refinery::Error> {
        let migrations_report = migrations::runner().run_async(&mut self.client).await?;

        for migration in migrations_report.applied_migrations() {
            tracing::info!(
                "Migration Applied -  Name: {}, Version: {}",
                migration.name(),
                migration.version()
            );
        }

        tracing::info!("DB migrations finished!");

        Ok(())
    }
}

fn note_from_row(row: &Row) -> Note {
    Note {
        id: row.get("id"),
        content: row.get("content"),
        created_at: row.get("created_at"),
    }
}

#[async_trait]
impl NoteStore for Repository {
    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        let rows = self
            .client
            .query(
                "SELECT id::text AS id, content, created_at FROM notes ORDER BY created_at DESC",
                &[],
            )
            .await?;

        Ok(rows.iter().map(note_from_row).collect())
    }

    async fn create(&self, content: String) -> Result<Note, StoreError> {
        let row = self
            .client
            .query_one(
                "INSERT INTO notes (content) VALUES ($1) RETURNING id::text AS id, content, created_at",
                &[&content],
            )
            .await?;

        Ok(note_from_row(&row))
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        // Textual comparison so malformed ids match nothing instead of failing
        let rows = self
            .client
            .execute("DELETE FROM notes WHERE id::text = $1", &[&id])
            .await?;

        tracing::debug!("Deleted {} row(s) for note id {}", rows, id);

        Ok(())
    }
}
