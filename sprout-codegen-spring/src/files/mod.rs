//! One struct per generated file.

mod application_java;
mod application_properties;
mod controller_java;
mod docker_compose;
mod dockerfile;
mod entity_java;
mod gitignore;
mod maven_wrapper;
mod pom_xml;
mod readme;
mod repository_java;
mod service_java;

pub use application_java::ApplicationJava;
pub use application_properties::ApplicationProperties;
pub use controller_java::ControllerJava;
pub use docker_compose::DockerCompose;
pub use dockerfile::Dockerfile;
pub use entity_java::EntityJava;
pub use gitignore::GitIgnore;
pub use maven_wrapper::maven_wrapper;
pub use pom_xml::PomXml;
pub use readme::Readme;
pub use repository_java::RepositoryJava;
pub use service_java::ServiceJava;

use sprout_codegen::CodeBuilder;

use crate::JavaImports;

/// Uppercase the first character (`createdAt` -> `CreatedAt`).
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Escape text for use in XML element content.
pub(crate) fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Emit the package declaration and import block of a Java file.
pub(crate) fn push_header(builder: &mut CodeBuilder, package: &str, imports: &JavaImports) {
    builder.push_line(&format!("package {package};"));
    builder.push_blank();
    if !imports.is_empty() {
        builder.push_lines(imports.render().lines());
        builder.push_blank();
    }
}

/// Emit a getter/setter pair, each preceded by a blank line.
pub(crate) fn push_accessors(builder: &mut CodeBuilder, java_type: &str, name: &str) {
    let suffix = capitalize(name);
    builder.push_blank();
    builder.push_block(&format!("public {java_type} get{suffix}() {{"), "}", |b| {
        b.push_line(&format!("return {name};"));
    });
    builder.push_blank();
    builder.push_block(
        &format!("public void set{suffix}({java_type} {name}) {{"),
        "}",
        |b| {
            b.push_line(&format!("this.{name} = {name};"));
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("createdAt"), "CreatedAt");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("R&D <beta>"), "R&amp;D &lt;beta&gt;");
    }

    #[test]
    fn test_accessors() {
        let mut b = CodeBuilder::java();
        b.push_indent();
        push_accessors(&mut b, "String", "name");
        assert_eq!(
            b.build(),
            "\n    public String getName() {\n        return name;\n    }\n\n    public void setName(String name) {\n        this.name = name;\n    }\n"
        );
    }
}
