//! Derived names shared by the templates.

use sprout_codegen::{
    RelationshipDecl,
    naming::{
        has_audit_timestamps, identifier_type, main_type_name, package_name, package_path,
        storage_name, uses_lombok, variable_name,
    },
    resolve_for_entity,
};
use sprout_manifest::{Entity, FieldType, ProjectConfig};

/// Project-wide values, computed once per generation.
#[derive(Debug, Clone)]
pub struct ProjectContext<'a> {
    pub config: &'a ProjectConfig,
    /// `com.example.demo`
    pub package: String,
    /// `com/example/demo`
    pub package_path: String,
    /// `DemoApplication`
    pub main_type: String,
    pub lombok: bool,
    pub document_store: bool,
    /// `jakarta` or `javax`
    pub ee_namespace: &'static str,
}

impl<'a> ProjectContext<'a> {
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self {
            config,
            package: package_name(config),
            package_path: package_path(config),
            main_type: main_type_name(config),
            lombok: uses_lombok(config),
            document_store: config.database.is_document_store(),
            ee_namespace: if config.spring_boot_version.uses_jakarta() {
                "jakarta"
            } else {
                "javax"
            },
        }
    }

    /// Source root of the main package (`src/main/java/com/example/demo`).
    pub fn main_dir(&self) -> String {
        format!("src/main/java/{}", self.package_path)
    }

    /// Source root of the test package.
    pub fn test_dir(&self) -> String {
        format!("src/test/java/{}", self.package_path)
    }

    /// Directory of a layer package (`entity`, `service`, ...).
    pub fn layer_dir(&self, layer: &str) -> String {
        format!("{}/{}", self.main_dir(), layer)
    }

    /// Fully qualified name of a layer package.
    pub fn layer_package(&self, layer: &str) -> String {
        format!("{}.{}", self.package, layer)
    }

    /// Build per-entity values. Each call starts from scratch.
    pub fn entity(&self, entity: &'a Entity) -> EntityContext<'a> {
        EntityContext {
            entity,
            variable: variable_name(entity),
            storage_name: storage_name(entity),
            id_type: identifier_type(entity),
            audit_timestamps: has_audit_timestamps(entity),
            relationships: resolve_for_entity(
                entity,
                &self.config.relationships,
                &self.config.entities,
            ),
        }
    }
}

/// Values derived for a single entity.
#[derive(Debug, Clone)]
pub struct EntityContext<'a> {
    pub entity: &'a Entity,
    /// `orderItem`
    pub variable: String,
    /// `orderItems`
    pub storage_name: String,
    pub id_type: FieldType,
    pub audit_timestamps: bool,
    pub relationships: Vec<RelationshipDecl>,
}

impl EntityContext<'_> {
    pub fn name(&self) -> &str {
        &self.entity.name
    }

    /// Whether the entity declares an `id` field the controller can set.
    pub fn has_id_field(&self) -> bool {
        self.entity.field(sprout_codegen::naming::IDENTIFIER_FIELD).is_some()
    }
}
