use sprout_core::File;

/// Build-wrapper placeholders, identical for every project.
///
/// `mvnw` is marked executable so the archive keeps it runnable.
pub fn maven_wrapper() -> [File; 4] {
    [
        File::new("mvnw", "#!/bin/sh\n# Maven wrapper script").executable(),
        File::new("mvnw.cmd", "@REM Maven wrapper script for Windows"),
        File::new(
            ".mvn/wrapper/maven-wrapper.jar",
            "Binary JAR content placeholder",
        ),
        File::new(
            ".mvn/wrapper/maven-wrapper.properties",
            "distributionUrl=https://repo.maven.apache.org/maven2/org/apache/maven/apache-maven/3.8.6/apache-maven-3.8.6-bin.zip",
        ),
    ]
}
