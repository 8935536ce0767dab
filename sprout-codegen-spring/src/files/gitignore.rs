use sprout_core::GeneratedFile;

/// The `.gitignore` file.
pub struct GitIgnore;

impl GeneratedFile for GitIgnore {
    fn path(&self) -> String {
        ".gitignore".to_string()
    }

    fn render(&self) -> String {
        r#"HELP.md
target/
!.mvn/wrapper/maven-wrapper.jar
!**/src/main/**/target/
!**/src/test/**/target/

### STS ###
.apt_generated
.classpath
.factorypath
.project
.settings
.springBeans
.sts4-cache

### IntelliJ IDEA ###
.idea
*.iws
*.iml
*.ipr

### NetBeans ###
/nbproject/private/
/nbbuild/
/dist/
/nbdist/
/.nb-gradle/
build/

### VS Code ###
.vscode/

### OS ###
.DS_Store
"#
        .to_string()
    }
}
