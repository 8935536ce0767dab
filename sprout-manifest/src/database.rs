use serde::{Deserialize, Serialize};

use crate::closed::closed_set;

closed_set! {
    /// Database engine backing the generated project.
    pub enum DatabaseType {
        Postgresql => "postgresql",
        Mysql => "mysql",
        Mongodb => "mongodb",
        H2 => "h2",
        Oracle => "oracle",
        Mssql => "mssql",
    }
}

impl DatabaseType {
    /// Document stores get Spring Data MongoDB instead of JPA.
    pub fn is_document_store(&self) -> bool {
        matches!(self, DatabaseType::Mongodb)
    }
}

/// Connection settings; interpolated into generated files only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatabaseOptions {
    pub url: String,
    pub name: String,
    pub username: String,
    pub password: String,
    pub generate_ddl: bool,
    pub show_sql: bool,
    pub connection_pool: bool,
}

/// Database choice. A `None` type means no database-specific output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(rename = "type")]
    pub kind: Option<DatabaseType>,
    pub options: DatabaseOptions,
}

impl DatabaseConfig {
    pub fn is_document_store(&self) -> bool {
        self.kind.is_some_and(|k| k.is_document_store())
    }
}
