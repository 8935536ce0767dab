use std::path::Path;

use eyre::Result;
use sprout_codegen::{
    Diagnostic, FileCategory, PreviewFile, ProjectTree, WriteStats, lint, pack,
};
use sprout_manifest::ProjectConfig;

use crate::{
    ProjectContext,
    files::{
        ApplicationJava, ApplicationProperties, ControllerJava, DockerCompose, Dockerfile,
        EntityJava, GitIgnore, PomXml, Readme, RepositoryJava, ServiceJava, maven_wrapper,
    },
};

/// Spring Boot project generator.
///
/// The tree is a pure function of the configuration: building it twice
/// yields identical paths and contents.
pub struct Generator<'a> {
    config: &'a ProjectConfig,
}

impl<'a> Generator<'a> {
    pub fn new(config: &'a ProjectConfig) -> Self {
        Self { config }
    }

    /// Build the complete in-memory project tree.
    pub fn build(&self) -> ProjectTree {
        let ctx = ProjectContext::new(self.config);
        let options = &self.config.generation_options;
        let mut tree = ProjectTree::new();

        tree.create_dir(&ctx.main_dir());
        tree.create_dir("src/main/resources");
        tree.create_dir(&ctx.test_dir());
        if options.controllers {
            tree.create_dir(&ctx.layer_dir("controller"));
        }
        if options.services {
            tree.create_dir(&ctx.layer_dir("service"));
        }
        if options.repositories {
            tree.create_dir(&ctx.layer_dir("repository"));
        }
        tree.create_dir(&ctx.layer_dir("entity"));
        if options.dtos {
            tree.create_dir(&ctx.layer_dir("dto"));
        }

        tree.add(&PomXml::new(&ctx), FileCategory::Config);
        tree.add(&ApplicationProperties::new(&ctx), FileCategory::Config);
        tree.add(&ApplicationJava::new(&ctx), FileCategory::Source);

        for entity in &self.config.entities {
            let entity = ctx.entity(entity);
            tree.add(&EntityJava::new(&ctx, &entity), FileCategory::Source);
            if options.repositories {
                tree.add(&RepositoryJava::new(&ctx, &entity), FileCategory::Source);
            }
            if options.services {
                tree.add(&ServiceJava::new(&ctx, &entity), FileCategory::Source);
            }
            if options.controllers {
                tree.add(&ControllerJava::new(&ctx, &entity), FileCategory::Source);
            }
        }

        if options.readme {
            tree.add(&Readme::new(&ctx), FileCategory::Support);
        }
        if options.gitignore {
            tree.add(&GitIgnore, FileCategory::Support);
        }
        if options.docker {
            tree.add(&Dockerfile::new(&ctx), FileCategory::Support);
        }
        if options.docker_compose {
            tree.add(&DockerCompose::new(&ctx), FileCategory::Support);
        }

        for file in maven_wrapper() {
            tree.add(&file, FileCategory::Wrapper);
        }

        tracing::debug!(
            artifact_id = %self.config.artifact_id,
            entities = self.config.entities.len(),
            files = tree.len(),
            "built project tree"
        );
        tree
    }

    /// Lint diagnostics for the configuration. Never blocks generation.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        lint(self.config)
    }

    /// Preview generated files without writing anything.
    pub fn preview(&self) -> Vec<PreviewFile> {
        self.build().preview()
    }

    /// Write the project below `output_dir`.
    pub fn generate(&self, output_dir: &Path) -> Result<WriteStats> {
        self.build().write_all(output_dir)
    }

    /// Build the project and pack it into zip bytes.
    pub fn archive(&self) -> Result<Vec<u8>> {
        pack(&self.build())
    }
}
