use crate::DbError;
use sqlx::{FromRow, SqlitePool};

/// One persisted opinion from the `opiniao` table.
///
/// The primary key is assigned by the store and never changes afterwards.
/// It stays internal to the service; responses are shaped by the web layer.
#[derive(Debug, Clone, FromRow)]
pub struct Opiniao {
    #[sqlx(rename = "pk_opiniao")]
    pub id: i64,
    pub nome: String,
    pub idade: i64,
    pub comentario: String,
}

/// The fields required to store a new opinion.
///
/// All three are mandatory and have no defaults. Nothing is validated here
/// beyond what the column definitions enforce.
#[derive(Debug, Clone)]
pub struct NewOpiniao {
    pub nome: String,
    pub idade: i64,
    pub comentario: String,
}

/// The `OpiniaoRepository` provides a high-level, application-specific
/// interface to the opinion base. It encapsulates all SQL queries and data
/// access logic.
#[derive(Debug, Clone)]
pub struct OpiniaoRepository {
    pool: SqlitePool,
}

impl OpiniaoRepository {
    /// Creates a new `OpiniaoRepository` with a shared database connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts a new opinion and returns the row as stored, id included.
    ///
    /// A repeated `nome` violates the table's UNIQUE constraint and surfaces
    /// as [`DbError::Duplicate`].
    pub async fn insert(&self, nova: &NewOpiniao) -> Result<Opiniao, DbError> {
        let opiniao = sqlx::query_as::<_, Opiniao>(
            "INSERT INTO opiniao (nome, idade, comentario) VALUES (?, ?, ?) \
             RETURNING pk_opiniao, nome, idade, comentario",
        )
        .bind(&nova.nome)
        .bind(nova.idade)
        .bind(&nova.comentario)
        .fetch_one(&self.pool)
        .await
        .map_err(map_unique_violation)?;

        Ok(opiniao)
    }

    /// Fetches every stored opinion, oldest first.
    pub async fn list_all(&self) -> Result<Vec<Opiniao>, DbError> {
        let opinioes = sqlx::query_as::<_, Opiniao>(
            "SELECT pk_opiniao, nome, idade, comentario FROM opiniao ORDER BY pk_opiniao",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(opinioes)
    }

    /// Fetches the opinion stored under exactly this `nome`, if any.
    ///
    /// Matching is byte-exact and case-sensitive.
    pub async fn find_by_nome(&self, nome: &str) -> Result<Option<Opiniao>, DbError> {
        let opiniao = sqlx::query_as::<_, Opiniao>(
            "SELECT pk_opiniao, nome, idade, comentario FROM opiniao WHERE nome = ?",
        )
        .bind(nome)
        .fetch_optional(&self.pool)
        .await?;

        Ok(opiniao)
    }

    /// Deletes every row whose `nome` matches exactly and returns how many
    /// were removed (zero when nothing matched).
    pub async fn delete_by_nome(&self, nome: &str) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM opiniao WHERE nome = ?")
            .bind(nome)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Applies a partial update to one opinion, keyed by primary key, and
    /// returns the row as stored afterwards. Absent fields keep their value.
    pub async fn update(
        &self,
        id: i64,
        nome: Option<&str>,
        idade: Option<i64>,
    ) -> Result<Opiniao, DbError> {
        let opiniao = sqlx::query_as::<_, Opiniao>(
            "UPDATE opiniao SET nome = COALESCE(?, nome), idade = COALESCE(?, idade) \
             WHERE pk_opiniao = ? RETURNING pk_opiniao, nome, idade, comentario",
        )
        .bind(nome)
        .bind(idade)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::RowNotFound => DbError::NotFound,
            other => map_unique_violation(other),
        })?;

        Ok(opiniao)
    }
}

/// Collapses a unique-constraint violation into its dedicated variant so the
/// web layer can answer 409; every other error passes through untouched.
fn map_unique_violation(error: sqlx::Error) -> DbError {
    match error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => DbError::Duplicate,
        other => DbError::QueryError(other),
    }
}
