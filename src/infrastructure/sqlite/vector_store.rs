use crate::domain::entities::vector_record::VectorRecord;
use crate::domain::error::DomainError;
use crate::domain::ports::vector_store::VectorStore;
use crate::infrastructure::sqlite::migrations::run_migrations;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::BTreeMap;
use std::sync::Mutex;

const DIMENSION_KEY: &str = "dimension";

/// Vector store persisted in SQLite. Vectors are little-endian f32 blobs,
/// metadata is a JSON object, and the store dimension lives in `store_meta`.
pub struct SqliteVectorStore {
    conn: Mutex<Connection>,
    dimension: usize,
}

impl SqliteVectorStore {
    pub fn open_path(db_path: &str, dimension: usize) -> Result<Self, DomainError> {
        let conn = Connection::open(db_path).map_err(|e| DomainError::Storage(format!("DB error: {e}")))?;
        conn.pragma_update(None, "journal_mode", "WAL")
            .map_err(|e| DomainError::Storage(format!("WAL error: {e}")))?;
        Self::open(conn, dimension)
    }

    /// Fails with `DimensionMismatch` when the database already holds a
    /// store of another dimension.
    pub fn open(conn: Connection, dimension: usize) -> Result<Self, DomainError> {
        if dimension == 0 {
            return Err(DomainError::InvalidInput("Store dimension must be positive".into()));
        }
        run_migrations(&conn)?;

        match Self::stored_dimension(&conn)? {
            Some(stored) => DomainError::check_dimension(stored, dimension)?,
            None => {
                conn.execute(
                    "INSERT INTO store_meta (key, value) VALUES (?1, ?2)",
                    params![DIMENSION_KEY, dimension.to_string()],
                )?;
            }
        }

        Ok(Self { conn: Mutex::new(conn), dimension })
    }

    fn stored_dimension(conn: &Connection) -> Result<Option<usize>, DomainError> {
        let value: Option<String> = conn
            .query_row(
                "SELECT value FROM store_meta WHERE key = ?1",
                params![DIMENSION_KEY],
                |r| r.get(0),
            )
            .optional()?;
        value
            .map(|v| v.parse::<usize>().map_err(|e| DomainError::Parse(format!("Stored dimension '{v}': {e}"))))
            .transpose()
    }

    fn serialize_vector(v: &[f32]) -> Vec<u8> {
        v.iter().flat_map(|f| f.to_le_bytes()).collect()
    }

    fn deserialize_vector(bytes: &[u8]) -> Vec<f32> {
        bytes.chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect()
    }

    fn row_to_record(&self, id: String, blob: &[u8], metadata: &str) -> Result<VectorRecord, DomainError> {
        if blob.len() != 4 * self.dimension {
            return Err(DomainError::Parse(format!(
                "Vector blob of {id} has {} bytes, expected {}",
                blob.len(),
                4 * self.dimension
            )));
        }
        let metadata: BTreeMap<String, String> = serde_json::from_str(metadata)
            .map_err(|e| DomainError::Parse(format!("Metadata of {id}: {e}")))?;
        Ok(VectorRecord {
            vector: Self::deserialize_vector(blob),
            id,
            metadata,
        })
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Connection>, DomainError> {
        self.conn.lock().map_err(|e| DomainError::Storage(e.to_string()))
    }
}

impl VectorStore for SqliteVectorStore {
    fn upsert(&self, records: Vec<VectorRecord>) -> Result<(), DomainError> {
        for record in &records {
            DomainError::check_vector(self.dimension, &record.vector)?;
        }
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO vectors (id, vector, metadata) VALUES (?1, ?2, ?3)",
            )?;
            for record in &records {
                let metadata = serde_json::to_string(&record.metadata)
                    .map_err(|e| DomainError::Parse(e.to_string()))?;
                stmt.execute(params![record.id, Self::serialize_vector(&record.vector), metadata])
                    .map_err(|e| DomainError::Storage(format!("Failed to store vector: {e}")))?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<bool, DomainError> {
        let conn = self.lock()?;
        let removed = conn.execute("DELETE FROM vectors WHERE id = ?1", params![id])?;
        Ok(removed > 0)
    }

    fn get(&self, id: &str) -> Result<VectorRecord, DomainError> {
        let conn = self.lock()?;
        let row: Option<(Vec<u8>, String)> = conn
            .query_row(
                "SELECT vector, metadata FROM vectors WHERE id = ?1",
                params![id],
                |r| Ok((r.get(0)?, r.get(1)?)),
            )
            .optional()?;
        match row {
            Some((blob, metadata)) => self.row_to_record(id.to_string(), &blob, &metadata),
            None => Err(DomainError::NotFound(format!("Record {id}"))),
        }
    }

    fn size(&self) -> Result<usize, DomainError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM vectors", [], |r| r.get(0))?;
        Ok(count as usize)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn scan(&self, visit: &mut dyn FnMut(&VectorRecord)) -> Result<(), DomainError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT id, vector, metadata FROM vectors")?;
        let rows = stmt.query_map([], |row| {
            let id: String = row.get(0)?;
            let blob: Vec<u8> = row.get(1)?;
            let metadata: String = row.get(2)?;
            Ok((id, blob, metadata))
        })?;
        for row in rows {
            let (id, blob, metadata) = row?;
            let record = self.row_to_record(id, &blob, &metadata)?;
            visit(&record);
        }
        Ok(())
    }
}
