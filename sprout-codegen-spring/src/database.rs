//! Per-engine facts used by the descriptor, properties and compose templates.

use sprout_manifest::{DatabaseOptions, DatabaseType};

/// Everything the templates need to know about a database engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatabaseProfile {
    pub kind: DatabaseType,
    /// Maven coordinates of the JDBC driver, if a separate one is needed.
    pub driver: Option<(&'static str, &'static str)>,
    pub driver_class: &'static str,
    pub dialect: &'static str,
    pub port: u16,
    /// Container image for the compose file; `None` for embedded engines.
    pub image: Option<&'static str>,
}

const POSTGRESQL: DatabaseProfile = DatabaseProfile {
    kind: DatabaseType::Postgresql,
    driver: Some(("org.postgresql", "postgresql")),
    driver_class: "org.postgresql.Driver",
    dialect: "org.hibernate.dialect.PostgreSQLDialect",
    port: 5432,
    image: Some("postgres:16"),
};

const MYSQL: DatabaseProfile = DatabaseProfile {
    kind: DatabaseType::Mysql,
    driver: Some(("com.mysql", "mysql-connector-j")),
    driver_class: "com.mysql.cj.jdbc.Driver",
    dialect: "org.hibernate.dialect.MySQLDialect",
    port: 3306,
    image: Some("mysql:8.0"),
};

const MONGODB: DatabaseProfile = DatabaseProfile {
    kind: DatabaseType::Mongodb,
    driver: None,
    driver_class: "",
    dialect: "",
    port: 27017,
    image: Some("mongo:7"),
};

const H2: DatabaseProfile = DatabaseProfile {
    kind: DatabaseType::H2,
    driver: Some(("com.h2database", "h2")),
    driver_class: "org.h2.Driver",
    dialect: "org.hibernate.dialect.H2Dialect",
    port: 9092,
    image: None,
};

const ORACLE: DatabaseProfile = DatabaseProfile {
    kind: DatabaseType::Oracle,
    driver: Some(("com.oracle.database.jdbc", "ojdbc11")),
    driver_class: "oracle.jdbc.OracleDriver",
    dialect: "org.hibernate.dialect.OracleDialect",
    port: 1521,
    image: Some("gvenzl/oracle-xe:21-slim"),
};

const MSSQL: DatabaseProfile = DatabaseProfile {
    kind: DatabaseType::Mssql,
    driver: Some(("com.microsoft.sqlserver", "mssql-jdbc")),
    driver_class: "com.microsoft.sqlserver.jdbc.SQLServerDriver",
    dialect: "org.hibernate.dialect.SQLServerDialect",
    port: 1433,
    image: Some("mcr.microsoft.com/mssql/server:2022-latest"),
};

impl DatabaseProfile {
    /// Look up the profile of an engine.
    pub fn of(kind: DatabaseType) -> &'static DatabaseProfile {
        match kind {
            DatabaseType::Postgresql => &POSTGRESQL,
            DatabaseType::Mysql => &MYSQL,
            DatabaseType::Mongodb => &MONGODB,
            DatabaseType::H2 => &H2,
            DatabaseType::Oracle => &ORACLE,
            DatabaseType::Mssql => &MSSQL,
        }
    }

    /// Connection URL for `host`, using the configured name.
    pub fn url(&self, host: &str, database: &str) -> String {
        let port = self.port;
        match self.kind {
            DatabaseType::Postgresql => format!("jdbc:postgresql://{host}:{port}/{database}"),
            DatabaseType::Mysql => format!("jdbc:mysql://{host}:{port}/{database}"),
            DatabaseType::Mongodb => format!("mongodb://{host}:{port}/{database}"),
            DatabaseType::H2 => format!("jdbc:h2:mem:{database}"),
            DatabaseType::Oracle => format!("jdbc:oracle:thin:@{host}:{port}/{database}"),
            DatabaseType::Mssql => {
                format!("jdbc:sqlserver://{host}:{port};databaseName={database};encrypt=false")
            }
        }
    }

    /// Environment of the database container in the compose file.
    pub fn container_env(
        &self,
        database: &str,
        options: &DatabaseOptions,
    ) -> Vec<(&'static str, String)> {
        let user = options.username.clone();
        let password = options.password.clone();
        match self.kind {
            DatabaseType::Postgresql => vec![
                ("POSTGRES_DB", database.to_string()),
                ("POSTGRES_USER", user),
                ("POSTGRES_PASSWORD", password),
            ],
            DatabaseType::Mysql => vec![
                ("MYSQL_DATABASE", database.to_string()),
                ("MYSQL_USER", user),
                ("MYSQL_PASSWORD", password.clone()),
                ("MYSQL_ROOT_PASSWORD", password),
            ],
            DatabaseType::Mongodb => vec![("MONGO_INITDB_DATABASE", database.to_string())],
            DatabaseType::Oracle => vec![
                ("ORACLE_PASSWORD", password.clone()),
                ("APP_USER", user),
                ("APP_USER_PASSWORD", password),
            ],
            DatabaseType::Mssql => vec![
                ("ACCEPT_EULA", "Y".to_string()),
                ("MSSQL_SA_PASSWORD", password),
            ],
            DatabaseType::H2 => Vec::new(),
        }
    }
}

/// Database name from the options, falling back to the artifact id.
pub fn database_name<'a>(options: &'a DatabaseOptions, artifact_id: &'a str) -> &'a str {
    if options.name.trim().is_empty() {
        artifact_id
    } else {
        options.name.trim()
    }
}
