//! Project identity and the root configuration type.

use serde::{Deserialize, Serialize};

use crate::{
    DatabaseConfig, Entity, GenerationOptions, Relationship,
    closed::closed_set,
};

closed_set! {
    /// Java language level of the generated project.
    pub enum JavaVersion {
        V18 => "18",
        V20 => "20",
        V21 => "21",
    }
}

closed_set! {
    /// Spring Boot parent version of the generated project.
    pub enum SpringBootVersion {
        V2_7_17 => "2.7.17",
        V3_0_12 => "3.0.12",
        V3_1_5 => "3.1.5",
    }
}

impl SpringBootVersion {
    /// Spring Boot 3 moved from `javax.*` to `jakarta.*` packages.
    pub fn uses_jakarta(&self) -> bool {
        !matches!(self, SpringBootVersion::V2_7_17)
    }
}

closed_set! {
    /// Maven packaging of the generated project.
    pub enum PackageType {
        Jar => "jar",
        War => "war",
    }
}

/// A selectable starter dependency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub id: String,
    pub name: String,
    pub selected: bool,
}

/// The full description of one generation request.
///
/// Constructed once from the wizard payload and consumed read-only by the
/// generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub group_id: String,
    pub artifact_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub java_version: JavaVersion,
    pub spring_boot_version: SpringBootVersion,
    pub package_type: PackageType,
    pub dependencies: Vec<Dependency>,
    pub database: DatabaseConfig,
    pub entities: Vec<Entity>,
    pub relationships: Vec<Relationship>,
    pub generation_options: GenerationOptions,
    /// Wizard position; carried along, never used for generation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_step: Option<u32>,
}

impl ProjectConfig {
    /// Find an entity by its id.
    pub fn entity(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    /// Iterate over the selected dependencies, in order.
    pub fn selected_dependencies(&self) -> impl Iterator<Item = &Dependency> {
        self.dependencies.iter().filter(|d| d.selected)
    }

    /// Check whether the dependency with `id` is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_dependencies().any(|d| d.id == id)
    }
}
