use async_trait::async_trait;
use baseline_core::store::Result;
use baseline_core::{ItemKey, ProfileRecord, ProfileStore, StorageError, UserId};
use jiff::Timestamp;
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

/// MySQL implementation of the profile store contract.
///
/// One row per profile, keyed `(pk, sk)`, with the email-index projection
/// held in the `(email_pk, email_sk)` columns of the same row. An upsert
/// rewrites record and projection in one statement, so a concurrent reader
/// never observes a row whose index columns disagree with its attributes.
///
/// The table name comes from environment configuration and cannot be bound
/// as a statement parameter, so it is validated once at construction.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
    table: String,
}

impl MySqlStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool, table: impl Into<String>) -> Result<Self> {
        let table = table.into();
        validate_table_name(&table)?;
        Ok(Self { pool, table })
    }

    /// Creates a store by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str, table: impl Into<String>) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Self::new(pool, table)
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

fn validate_table_name(table: &str) -> Result<()> {
    let valid = !table.is_empty()
        && table
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid {
        return Err(StorageError::InvalidData(format!(
            "invalid table name '{table}'"
        )));
    }
    Ok(())
}

fn parse_timestamp(millis: i64, column: &str) -> Result<Timestamp> {
    Timestamp::from_millisecond(millis).map_err(|e| {
        StorageError::InvalidData(format!("invalid {column} timestamp '{millis}': {e}"))
    })
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

fn record_from_row(row: &MySqlRow) -> Result<ProfileRecord> {
    let user_id: String = row.try_get("user_id").map_err(map_sqlx_error)?;
    let email: String = row.try_get("email").map_err(map_sqlx_error)?;
    let given_name: String = row.try_get("given_name").map_err(map_sqlx_error)?;
    let family_name: String = row.try_get("family_name").map_err(map_sqlx_error)?;
    let bio: String = row.try_get("bio").map_err(map_sqlx_error)?;
    let avatar_url: String = row.try_get("avatar_url").map_err(map_sqlx_error)?;
    let created_at: i64 = row.try_get("created_at").map_err(map_sqlx_error)?;
    let updated_at: i64 = row.try_get("updated_at").map_err(map_sqlx_error)?;

    Ok(ProfileRecord {
        user_id: UserId::new(user_id),
        email,
        given_name,
        family_name,
        bio,
        avatar_url,
        created_at: parse_timestamp(created_at, "created_at")?,
        updated_at: parse_timestamp(updated_at, "updated_at")?,
    })
}

const RECORD_COLUMNS: &str =
    "user_id, email, given_name, family_name, bio, avatar_url, created_at, updated_at";

#[async_trait]
impl ProfileStore for MySqlStore {
    async fn get(&self, user_id: &UserId) -> Result<Option<ProfileRecord>> {
        let key = ItemKey::profile(user_id);

        let row = sqlx::query(&format!(
            "SELECT {RECORD_COLUMNS} FROM `{}` WHERE pk = ? AND sk = ? LIMIT 1",
            self.table
        ))
        .bind(&key.partition)
        .bind(&key.sort)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(record_from_row).transpose()
    }

    async fn put(&self, record: &ProfileRecord) -> Result<()> {
        let key = record.primary_key();
        let index_key = record.email_index_key();

        // user_id is fixed by pk, so it is absent from the update list.
        sqlx::query(&format!(
            r#"
            INSERT INTO `{}`
                (pk, sk, email_pk, email_sk, {RECORD_COLUMNS})
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) AS new
            ON DUPLICATE KEY UPDATE
                email_pk = new.email_pk,
                email_sk = new.email_sk,
                email = new.email,
                given_name = new.given_name,
                family_name = new.family_name,
                bio = new.bio,
                avatar_url = new.avatar_url,
                created_at = new.created_at,
                updated_at = new.updated_at
            "#,
            self.table
        ))
        .bind(&key.partition)
        .bind(&key.sort)
        .bind(&index_key.partition)
        .bind(&index_key.sort)
        .bind(record.user_id.as_str())
        .bind(&record.email)
        .bind(&record.given_name)
        .bind(&record.family_name)
        .bind(&record.bio)
        .bind(&record.avatar_url)
        .bind(record.created_at.as_millisecond())
        .bind(record.updated_at.as_millisecond())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<ProfileRecord>> {
        let partition = ItemKey::email_partition(email);

        let row = sqlx::query(&format!(
            "SELECT {RECORD_COLUMNS} FROM `{}` WHERE email_pk = ? ORDER BY email_sk LIMIT 1",
            self.table
        ))
        .bind(&partition)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(record_from_row).transpose()
    }
}
