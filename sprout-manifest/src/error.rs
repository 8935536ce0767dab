use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::{Issue, IssueCode};

/// Result type for sprout-manifest operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the path of a project configuration exported from the wizard"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse project configuration")]
    #[diagnostic(code(sprout::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid project configuration ({})", count_issues(.issues))]
    #[diagnostic(
        code(sprout::invalid_config),
        help("fix the listed fields and submit the configuration again")
    )]
    Invalid {
        #[related]
        issues: Vec<Issue>,
    },
}

impl Error {
    /// Create a parse error from a JSON syntax error
    pub fn json(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span =
            offset_of(src, source.line(), source.column()).map(|at| SourceSpan::from((at, 0)));
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: source.to_string(),
        })
    }

    /// Create a parse error from a TOML syntax error
    pub fn toml(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: source.message().to_string(),
        })
    }

    /// Create a validation error from collected issues
    pub fn invalid(issues: Vec<Issue>) -> Box<Self> {
        Box::new(Error::Invalid { issues })
    }

    /// The error as a list of issues, for structured reporting.
    ///
    /// Syntax errors become a single issue at the document root.
    pub fn issues(&self) -> Vec<Issue> {
        match self {
            Error::Invalid { issues } => issues.clone(),
            Error::Parse { message, .. } => {
                vec![Issue::new("", IssueCode::InvalidSyntax, message.clone())]
            }
            Error::Io { .. } => vec![Issue::new("", IssueCode::InvalidSyntax, self.to_string())],
        }
    }
}

fn count_issues(issues: &[Issue]) -> String {
    match issues.len() {
        1 => "1 issue".to_string(),
        n => format!("{} issues", n),
    }
}

/// Convert a 1-based line/column pair into a byte offset in `src`.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let mut offset = 0;
    for (i, text) in src.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            return Some((offset + column.saturating_sub(1)).min(offset + text.len()));
        }
        offset += text.len();
    }
    Some(src.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let src = "{\n  \"a\": 1,\n}";
        assert_eq!(offset_of(src, 1, 1), Some(0));
        assert_eq!(offset_of(src, 2, 3), Some(4));
        assert_eq!(offset_of(src, 0, 0), None);
        assert_eq!(offset_of(src, 9, 1), Some(src.len()));
    }

    #[test]
    fn test_json_error_has_span() {
        let src = "{\n  \"a\": ,\n}";
        let err = serde_json::from_str::<serde_json::Value>(src).unwrap_err();
        let err = Error::json(err, src, "config.json");

        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_as_issue() {
        let err = Error::json(
            serde_json::from_str::<serde_json::Value>("nope").unwrap_err(),
            "nope",
            "config.json",
        );
        let issues = err.issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, IssueCode::InvalidSyntax);
        assert_eq!(issues[0].path, "");
    }
}
