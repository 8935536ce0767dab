use sprout_codegen::naming::storage_name;
use sprout_core::GeneratedFile;
use sprout_manifest::{ClosedSet, Documentation};

use crate::ProjectContext;

/// Project overview (`README.md`).
pub struct Readme<'a> {
    project: &'a ProjectContext<'a>,
}

impl<'a> Readme<'a> {
    pub fn new(project: &'a ProjectContext<'a>) -> Self {
        Self { project }
    }
}

impl GeneratedFile for Readme<'_> {
    fn path(&self) -> String {
        "README.md".to_string()
    }

    fn render(&self) -> String {
        let config = self.project.config;
        let options = &config.generation_options;
        let mut out = format!("# {}\n\n", config.name);

        if !config.description.trim().is_empty() {
            out.push_str(config.description.trim());
            out.push_str("\n\n");
        }

        out.push_str(&format!(
            "Spring Boot {} application (Java {}, packaged as {}).\n\n",
            config.spring_boot_version,
            config.java_version,
            config.package_type
        ));

        out.push_str("## Requirements\n\n");
        out.push_str(&format!("- Java {}\n", config.java_version));
        out.push_str("- Maven 3.8+\n");
        if options.docker || options.docker_compose {
            out.push_str("- Docker\n");
        }

        out.push_str("\n## Running\n\n```bash\n./mvnw spring-boot:run\n```\n");

        out.push_str("\n## Database\n\n");
        match config.database.kind {
            Some(kind) => out.push_str(&format!("Configured for `{}`.\n", kind.as_str())),
            None => out.push_str("No database configured.\n"),
        }

        if !config.entities.is_empty() {
            out.push_str("\n## Entities\n\n");
            for entity in &config.entities {
                out.push_str(&format!("- **{}**", entity.name));
                if options.controllers {
                    out.push_str(&format!(" (`/api/{}`)", storage_name(entity)));
                }
                if !entity.description.trim().is_empty() {
                    out.push_str(&format!(": {}", entity.description.trim()));
                }
                out.push('\n');
            }
        }

        match options.documentation {
            Documentation::Springdoc => out.push_str(
                "\n## API documentation\n\nSwagger UI: http://localhost:8080/swagger-ui.html\n",
            ),
            Documentation::Swagger => out.push_str(
                "\n## API documentation\n\nSwagger UI: http://localhost:8080/swagger-ui/\n",
            ),
            Documentation::None => {}
        }

        if options.docker {
            out.push_str(&format!(
                "\n## Docker\n\n```bash\ndocker build -t {} .\n```\n",
                config.artifact_id
            ));
        }
        if options.docker_compose {
            out.push_str("\n## Docker Compose\n\n```bash\ndocker compose up\n```\n");
        }

        out
    }
}
