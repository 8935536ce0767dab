//! Indentation configuration for code generation.

/// Space indentation of a fixed width per level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(pub u8);

impl Indent {
    /// 4-space indentation (Java, XML).
    pub const JAVA: Self = Self(4);

    /// 2-space indentation (YAML).
    pub const YAML: Self = Self(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self.0 {
            2 => "  ",
            8 => "        ",
            // Fallback to 4 whitespaces
            _ => "    ",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::YAML.as_str(), "  ");
        assert_eq!(Indent::JAVA.as_str(), "    ");
        assert_eq!(Indent(3).as_str(), "    ");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::JAVA);
    }
}
