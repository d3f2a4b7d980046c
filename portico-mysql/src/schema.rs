//! Idempotent database creation.
//!
//! Two-phase check-then-act: look the schema up in
//! `information_schema.SCHEMATA`, and only issue `CREATE DATABASE` when it
//! is absent. Repeated calls are no-ops once the schema exists. The two
//! phases are not transactionally atomic; two concurrent callers racing to
//! create the same schema is an accepted limitation.

use async_trait::async_trait;
use mysql_async::Conn;
use mysql_async::prelude::*;
use tracing::{debug, info};

use crate::error::{MysqlError, MysqlResult};

/// The administrative-statement capability schema creation runs against.
/// Implemented for a bare [`mysql_async::Conn`]; tests substitute a mock.
#[async_trait]
pub trait AdminExec {
    /// Whether the named schema exists.
    async fn schema_exists(&mut self, database: &str) -> MysqlResult<bool>;

    /// Execute one administrative statement.
    async fn execute(&mut self, statement: &str) -> MysqlResult<()>;
}

#[async_trait]
impl AdminExec for Conn {
    async fn schema_exists(&mut self, database: &str) -> MysqlResult<bool> {
        let found: Option<String> = self
            .exec_first(
                "SELECT SCHEMA_NAME FROM information_schema.SCHEMATA WHERE SCHEMA_NAME = ?",
                (database,),
            )
            .await?;
        Ok(found.is_some())
    }

    async fn execute(&mut self, statement: &str) -> MysqlResult<()> {
        self.query_drop(statement).await?;
        Ok(())
    }
}

/// Create `database` with the given character set unless it already exists.
/// Returns whether a creation statement was issued.
pub async fn ensure_database<E>(exec: &mut E, database: &str, charset: &str) -> MysqlResult<bool>
where
    E: AdminExec + Send,
{
    if exec.schema_exists(database).await? {
        debug!(database, "database already exists, skipping creation");
        return Ok(false);
    }

    let statement = format!(
        "CREATE DATABASE `{}` DEFAULT CHARACTER SET {}",
        database.replace('`', "``"),
        charset,
    );
    exec.execute(&statement)
        .await
        .map_err(|e| MysqlError::schema_creation(database, e.to_string()))?;

    info!(database, charset, "database created");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct FakeAdmin {
        exists: bool,
        statements: Vec<String>,
        fail_execute: bool,
    }

    #[async_trait]
    impl AdminExec for FakeAdmin {
        async fn schema_exists(&mut self, _database: &str) -> MysqlResult<bool> {
            Ok(self.exists)
        }

        async fn execute(&mut self, statement: &str) -> MysqlResult<()> {
            if self.fail_execute {
                return Err(MysqlError::config("access denied"));
            }
            self.statements.push(statement.to_string());
            self.exists = true;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_second_call_is_a_no_op() {
        let mut admin = FakeAdmin::default();

        assert!(ensure_database(&mut admin, "app", "utf8mb4").await.unwrap());
        assert!(!ensure_database(&mut admin, "app", "utf8mb4").await.unwrap());

        assert_eq!(admin.statements.len(), 1);
        assert_eq!(
            admin.statements[0],
            "CREATE DATABASE `app` DEFAULT CHARACTER SET utf8mb4"
        );
    }

    #[tokio::test]
    async fn test_existing_database_issues_no_statement() {
        let mut admin = FakeAdmin {
            exists: true,
            ..Default::default()
        };
        assert!(!ensure_database(&mut admin, "app", "utf8mb4").await.unwrap());
        assert!(admin.statements.is_empty());
    }

    #[tokio::test]
    async fn test_backticks_in_name_are_escaped() {
        let mut admin = FakeAdmin::default();
        ensure_database(&mut admin, "we`ird", "utf8mb4").await.unwrap();
        assert_eq!(
            admin.statements[0],
            "CREATE DATABASE `we``ird` DEFAULT CHARACTER SET utf8mb4"
        );
    }

    #[tokio::test]
    async fn test_failed_statement_is_schema_creation_error() {
        let mut admin = FakeAdmin {
            fail_execute: true,
            ..Default::default()
        };
        let err = ensure_database(&mut admin, "app", "utf8mb4").await.unwrap_err();
        assert!(matches!(err, MysqlError::SchemaCreation { .. }));
    }
}
