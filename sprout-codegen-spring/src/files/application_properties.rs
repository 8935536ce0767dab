use sprout_core::GeneratedFile;
use sprout_manifest::{DatabaseType, Documentation};

use crate::{
    DatabaseProfile, ProjectContext,
    database::database_name,
};

/// Runtime configuration (`src/main/resources/application.properties`).
///
/// Connection settings are written as plain keys; nothing here is ever
/// used to reach a database during generation.
pub struct ApplicationProperties<'a> {
    project: &'a ProjectContext<'a>,
}

impl<'a> ApplicationProperties<'a> {
    pub fn new(project: &'a ProjectContext<'a>) -> Self {
        Self { project }
    }

    fn push_database(&self, out: &mut Vec<String>, kind: DatabaseType) {
        let config = self.project.config;
        let options = &config.database.options;
        let profile = DatabaseProfile::of(kind);
        let url = if options.url.trim().is_empty() {
            profile.url("localhost", database_name(options, &config.artifact_id))
        } else {
            options.url.trim().to_string()
        };

        out.push(String::new());
        out.push("# Database".to_string());
        if kind.is_document_store() {
            out.push(format!("spring.data.mongodb.uri={url}"));
            out.push(format!(
                "spring.data.mongodb.database={}",
                database_name(options, &config.artifact_id)
            ));
            if !options.username.is_empty() {
                out.push(format!("spring.data.mongodb.username={}", options.username));
                out.push(format!("spring.data.mongodb.password={}", options.password));
            }
            return;
        }

        out.push(format!("spring.datasource.url={url}"));
        out.push(format!("spring.datasource.username={}", options.username));
        out.push(format!("spring.datasource.password={}", options.password));
        out.push(format!("spring.datasource.driver-class-name={}", profile.driver_class));
        out.push(String::new());
        out.push("# JPA".to_string());
        out.push(format!(
            "spring.jpa.hibernate.ddl-auto={}",
            if options.generate_ddl { "update" } else { "none" }
        ));
        out.push(format!("spring.jpa.show-sql={}", options.show_sql));
        out.push(format!(
            "spring.jpa.properties.hibernate.dialect={}",
            profile.dialect
        ));
        if kind == DatabaseType::H2 {
            out.push("spring.h2.console.enabled=true".to_string());
        }

        if options.connection_pool {
            out.push(String::new());
            out.push("# Connection pool".to_string());
            out.push("spring.datasource.hikari.maximum-pool-size=10".to_string());
            out.push("spring.datasource.hikari.minimum-idle=2".to_string());
            out.push("spring.datasource.hikari.connection-timeout=30000".to_string());
            out.push("spring.datasource.hikari.idle-timeout=600000".to_string());
        }
    }
}

impl GeneratedFile for ApplicationProperties<'_> {
    fn path(&self) -> String {
        "src/main/resources/application.properties".to_string()
    }

    fn render(&self) -> String {
        let config = self.project.config;
        let mut out = vec![
            format!("spring.application.name={}", config.artifact_id),
            "server.port=8080".to_string(),
        ];

        if let Some(kind) = config.database.kind {
            self.push_database(&mut out, kind);
        }

        match config.generation_options.documentation {
            Documentation::Springdoc => {
                out.push(String::new());
                out.push("# API documentation".to_string());
                out.push("springdoc.api-docs.path=/api-docs".to_string());
                out.push("springdoc.swagger-ui.path=/swagger-ui.html".to_string());
            }
            Documentation::Swagger => {
                out.push(String::new());
                out.push("# API documentation".to_string());
                out.push("spring.mvc.pathmatch.matching-strategy=ant_path_matcher".to_string());
            }
            Documentation::None => {}
        }

        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}
