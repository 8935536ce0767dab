use sprout_codegen::CodeBuilder;
use sprout_core::GeneratedFile;
use sprout_manifest::DatabaseType;

use crate::{DatabaseProfile, ProjectContext, database::database_name};

/// Local stack with the application and its database (`docker-compose.yml`).
pub struct DockerCompose<'a> {
    project: &'a ProjectContext<'a>,
}

impl<'a> DockerCompose<'a> {
    pub fn new(project: &'a ProjectContext<'a>) -> Self {
        Self { project }
    }

    /// Database engine that runs as its own service, if any.
    fn database_service(&self) -> Option<&'static DatabaseProfile> {
        self.project
            .config
            .database
            .kind
            .map(DatabaseProfile::of)
            .filter(|p| p.image.is_some())
    }

    fn app_environment(
        &self,
        profile: &DatabaseProfile,
        database: &str,
    ) -> Vec<(&'static str, String)> {
        let options = &self.project.config.database.options;
        let url = profile.url("db", database);
        if profile.kind == DatabaseType::Mongodb {
            return vec![("SPRING_DATA_MONGODB_URI", url)];
        }
        vec![
            ("SPRING_DATASOURCE_URL", url),
            ("SPRING_DATASOURCE_USERNAME", options.username.clone()),
            ("SPRING_DATASOURCE_PASSWORD", options.password.clone()),
        ]
    }
}

fn push_environment(builder: &mut CodeBuilder, env: &[(&str, String)]) {
    if env.is_empty() {
        return;
    }
    builder.push_line("environment:");
    builder.push_indent();
    for (key, value) in env {
        builder.push_line(&format!("{key}: \"{}\"", value.replace('"', "\\\"")));
    }
    builder.push_dedent();
}

impl GeneratedFile for DockerCompose<'_> {
    fn path(&self) -> String {
        "docker-compose.yml".to_string()
    }

    fn render(&self) -> String {
        let config = self.project.config;
        let database = database_name(&config.database.options, &config.artifact_id);
        let service = self.database_service();

        let mut builder = CodeBuilder::yaml();
        builder.push_line("services:");
        builder.push_indent();

        builder.push_line("app:");
        builder.push_indent();
        builder.push_line("build: .");
        builder.push_line("ports:");
        builder.push_line("  - \"8080:8080\"");
        if let Some(profile) = service {
            push_environment(&mut builder, &self.app_environment(profile, database));
            builder.push_line("depends_on:");
            builder.push_line("  - db");
        }
        builder.push_dedent();

        if let Some(profile) = service {
            builder.push_blank();
            builder.push_line("db:");
            builder.push_indent();
            builder.push_line(&format!("image: {}", profile.image.unwrap_or_default()));
            push_environment(
                &mut builder,
                &profile.container_env(database, &config.database.options),
            );
            builder.push_line("ports:");
            builder.push_line(&format!("  - \"{0}:{0}\"", profile.port));
            builder.push_dedent();
        }

        builder.push_dedent();
        builder.build()
    }
}
