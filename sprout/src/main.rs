mod commands;
mod ops;
mod reports;

use clap::Parser;
use eyre::Result;

use crate::commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    Cli::parse().run()
}

#[cfg(test)]
pub(crate) mod tests {
    use sprout_manifest::ProjectConfig;

    const DEMO: &str = r#"{
        "groupId": "com.example",
        "artifactId": "demo",
        "name": "Demo",
        "javaVersion": "21",
        "springBootVersion": "3.1.5",
        "packageType": "jar",
        "dependencies": [{ "id": "web", "name": "Spring Web", "selected": true }],
        "database": {
            "type": "h2",
            "options": {
                "url": "", "name": "", "username": "sa", "password": "",
                "generateDdl": true, "showSql": true, "connectionPool": false
            }
        },
        "entities": [{
            "id": "e1", "name": "Product",
            "fields": [
                { "id": "f1", "name": "id", "type": "Long", "constraints": ["@Id", "@GeneratedValue"] },
                { "id": "f2", "name": "name", "type": "String", "constraints": ["@NotBlank"] }
            ]
        }],
        "relationships": [],
        "generationOptions": {
            "controllers": true, "services": true, "repositories": true, "dtos": false,
            "docker": true, "dockerCompose": false, "readme": true, "gitignore": true,
            "documentation": "none"
        }
    }"#;

    pub(crate) fn demo() -> ProjectConfig {
        sprout_manifest::parse_str(DEMO).unwrap()
    }
}
