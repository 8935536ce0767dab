use serde::{Deserialize, Serialize};

use crate::closed::closed_set;

closed_set! {
    /// API documentation flavour added to the generated project.
    pub enum Documentation {
        None => "none",
        Swagger => "swagger",
        Springdoc => "springdoc",
    }
}

/// Independent switches selecting which file categories are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    pub controllers: bool,
    pub services: bool,
    pub repositories: bool,
    pub dtos: bool,
    pub docker: bool,
    pub docker_compose: bool,
    pub readme: bool,
    pub gitignore: bool,
    pub documentation: Documentation,
    /// Explicit Lombok opt-in, independent of the dependency list.
    #[serde(default)]
    pub use_lombok: bool,
}

impl GenerationOptions {
    /// Every toggle switched on.
    pub fn all() -> Self {
        Self {
            controllers: true,
            services: true,
            repositories: true,
            dtos: true,
            docker: true,
            docker_compose: true,
            readme: true,
            gitignore: true,
            documentation: Documentation::Springdoc,
            use_lombok: false,
        }
    }

    /// Every toggle switched off.
    pub fn none() -> Self {
        Self {
            controllers: false,
            services: false,
            repositories: false,
            dtos: false,
            docker: false,
            docker_compose: false,
            readme: false,
            gitignore: false,
            documentation: Documentation::None,
            use_lombok: false,
        }
    }
}
