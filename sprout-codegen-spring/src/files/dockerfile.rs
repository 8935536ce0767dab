use sprout_core::GeneratedFile;
use sprout_manifest::ClosedSet;

use crate::ProjectContext;

/// Two-stage container build (`Dockerfile`).
pub struct Dockerfile<'a> {
    project: &'a ProjectContext<'a>,
}

impl<'a> Dockerfile<'a> {
    pub fn new(project: &'a ProjectContext<'a>) -> Self {
        Self { project }
    }
}

impl GeneratedFile for Dockerfile<'_> {
    fn path(&self) -> String {
        "Dockerfile".to_string()
    }

    fn render(&self) -> String {
        let config = self.project.config;
        let java = config.java_version.as_str();
        let packaging = config.package_type.as_str();
        format!(
            r#"FROM maven:3.9-eclipse-temurin-{java} AS build
WORKDIR /app
COPY pom.xml .
RUN mvn -q dependency:go-offline
COPY src src
RUN mvn -q package -DskipTests

FROM eclipse-temurin:{java}-jre
WORKDIR /app
COPY --from=build /app/target/{artifact}-0.0.1-SNAPSHOT.{packaging} app.{packaging}
EXPOSE 8080
ENTRYPOINT ["java", "-jar", "app.{packaging}"]
"#,
            artifact = config.artifact_id,
        )
    }
}
