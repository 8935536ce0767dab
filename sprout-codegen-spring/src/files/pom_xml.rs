use sprout_codegen::{
    CodeBuilder,
    constraints::{TagKind, has_kind},
};
use sprout_core::GeneratedFile;
use sprout_manifest::{ClosedSet, Documentation, PackageType};

use super::xml_escape;
use crate::{DatabaseProfile, ProjectContext};

const SPRING_BOOT_GROUP: &str = "org.springframework.boot";

/// A `<dependency>` entry of the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
struct MavenDependency {
    group: &'static str,
    artifact: String,
    version: Option<&'static str>,
    scope: Option<&'static str>,
    optional: bool,
}

impl MavenDependency {
    fn new(group: &'static str, artifact: impl Into<String>) -> Self {
        Self {
            group,
            artifact: artifact.into(),
            version: None,
            scope: None,
            optional: false,
        }
    }

    fn starter(name: &str) -> Self {
        Self::new(SPRING_BOOT_GROUP, format!("spring-boot-starter-{name}"))
    }

    fn version(mut self, version: &'static str) -> Self {
        self.version = Some(version);
        self
    }

    fn scope(mut self, scope: &'static str) -> Self {
        self.scope = Some(scope);
        self
    }

    fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// The Maven project descriptor (`pom.xml`).
pub struct PomXml<'a> {
    project: &'a ProjectContext<'a>,
}

impl<'a> PomXml<'a> {
    pub fn new(project: &'a ProjectContext<'a>) -> Self {
        Self { project }
    }

    /// Starter for a wizard dependency id; unknown ids map to
    /// `spring-boot-starter-<id>`.
    fn map_dependency(&self, id: &str) -> MavenDependency {
        match id {
            "jpa" | "data-jpa" => self.persistence_starter(),
            "devtools" => MavenDependency::new(SPRING_BOOT_GROUP, "spring-boot-devtools")
                .scope("runtime")
                .optional(),
            "lombok" => MavenDependency::new("org.projectlombok", "lombok").optional(),
            other => MavenDependency::starter(other),
        }
    }

    fn persistence_starter(&self) -> MavenDependency {
        if self.project.document_store {
            MavenDependency::starter("data-mongodb")
        } else {
            MavenDependency::starter("data-jpa")
        }
    }

    fn dependencies(&self) -> Vec<MavenDependency> {
        let config = self.project.config;
        let mut deps: Vec<MavenDependency> = Vec::new();
        let mut push = |dep: MavenDependency| {
            if !deps
                .iter()
                .any(|d| d.group == dep.group && d.artifact == dep.artifact)
            {
                deps.push(dep);
            }
        };

        for dependency in config.selected_dependencies() {
            push(self.map_dependency(&dependency.id));
        }

        // Entity classes always carry persistence annotations.
        push(self.persistence_starter());

        if let Some((group, artifact)) = config
            .database
            .kind
            .and_then(|kind| DatabaseProfile::of(kind).driver)
        {
            push(MavenDependency::new(group, artifact).scope("runtime"));
        }

        let validated = config
            .entities
            .iter()
            .flat_map(|e| &e.fields)
            .any(|f| has_kind(f, TagKind::Validation));
        if validated {
            push(MavenDependency::starter("validation"));
        }

        if self.project.lombok {
            push(MavenDependency::new("org.projectlombok", "lombok").optional());
        }

        match config.generation_options.documentation {
            Documentation::Springdoc if self.project.ee_namespace == "jakarta" => push(
                MavenDependency::new("org.springdoc", "springdoc-openapi-starter-webmvc-ui")
                    .version("2.2.0"),
            ),
            Documentation::Springdoc => push(
                MavenDependency::new("org.springdoc", "springdoc-openapi-ui").version("1.7.0"),
            ),
            Documentation::Swagger => push(
                MavenDependency::new("io.springfox", "springfox-boot-starter").version("3.0.0"),
            ),
            Documentation::None => {}
        }

        if config.package_type == PackageType::War {
            push(MavenDependency::starter("tomcat").scope("provided"));
        }

        push(MavenDependency::starter("test").scope("test"));
        deps
    }
}

fn push_element(builder: &mut CodeBuilder, tag: &str, value: &str) {
    builder.push_line(&format!("<{tag}>{}</{tag}>", xml_escape(value)));
}

impl GeneratedFile for PomXml<'_> {
    fn path(&self) -> String {
        "pom.xml".to_string()
    }

    fn render(&self) -> String {
        let config = self.project.config;
        let mut builder = CodeBuilder::java();

        builder.push_line(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        builder.push_line(r#"<project xmlns="http://maven.apache.org/POM/4.0.0" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#);
        builder.push_line(r#"         xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd">"#);
        builder.push_indent();
        push_element(&mut builder, "modelVersion", "4.0.0");

        builder.push_block("<parent>", "</parent>", |b| {
            push_element(b, "groupId", SPRING_BOOT_GROUP);
            push_element(b, "artifactId", "spring-boot-starter-parent");
            push_element(b, "version", config.spring_boot_version.as_str());
            b.push_line("<relativePath/>");
        });

        push_element(&mut builder, "groupId", &config.group_id);
        push_element(&mut builder, "artifactId", &config.artifact_id);
        push_element(&mut builder, "version", "0.0.1-SNAPSHOT");
        push_element(&mut builder, "packaging", config.package_type.as_str());
        push_element(&mut builder, "name", &config.name);
        push_element(&mut builder, "description", &config.description);

        builder.push_block("<properties>", "</properties>", |b| {
            push_element(b, "java.version", config.java_version.as_str());
        });

        builder.push_block("<dependencies>", "</dependencies>", |b| {
            for dep in self.dependencies() {
                b.push_block("<dependency>", "</dependency>", |b| {
                    push_element(b, "groupId", dep.group);
                    push_element(b, "artifactId", &dep.artifact);
                    if let Some(version) = dep.version {
                        push_element(b, "version", version);
                    }
                    if let Some(scope) = dep.scope {
                        push_element(b, "scope", scope);
                    }
                    if dep.optional {
                        push_element(b, "optional", "true");
                    }
                });
            }
        });

        builder.push_block("<build>", "</build>", |b| {
            b.push_block("<plugins>", "</plugins>", |b| {
                b.push_block("<plugin>", "</plugin>", |b| {
                    push_element(b, "groupId", SPRING_BOOT_GROUP);
                    push_element(b, "artifactId", "spring-boot-maven-plugin");
                    if self.project.lombok {
                        b.push_block("<configuration>", "</configuration>", |b| {
                            b.push_block("<excludes>", "</excludes>", |b| {
                                b.push_block("<exclude>", "</exclude>", |b| {
                                    push_element(b, "groupId", "org.projectlombok");
                                    push_element(b, "artifactId", "lombok");
                                });
                            });
                        });
                    }
                });
            });
        });

        builder.push_dedent();
        builder.push_line("</project>");
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_builder() {
        let dep = MavenDependency::starter("web");
        assert_eq!(dep.artifact, "spring-boot-starter-web");
        assert!(!dep.optional);

        let devtools = MavenDependency::new(SPRING_BOOT_GROUP, "spring-boot-devtools")
            .scope("runtime")
            .optional();
        assert_eq!(devtools.scope, Some("runtime"));
        assert!(devtools.optional);
    }
}
