//! The matching grammar: which characters may form a value after a key prefix.

/// What: Character classes a value may consist of, decided per call site.
///
/// Details:
/// - Letters and digits (any script) are always allowed; punctuation is
///   opted into per target format, since JSON-like editor settings need a
///   broader set than INI-like files.
/// - The value ends at the first character outside the shape, so newlines,
///   semicolons, and closing braces terminate a match without ever being
///   consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueShape {
    extra: Vec<char>,
}

impl ValueShape {
    /// Build a shape from an explicit set of permitted punctuation.
    pub fn new(extra: &[char]) -> Self {
        Self {
            extra: extra.to_vec(),
        }
    }

    /// Shape for INI-like files (`kdeglobals`, `konsolerc`, GTK `settings.ini`).
    ///
    /// Theme names and profile filenames use spaces, dots, hyphens, commas,
    /// colons, and underscores on top of alphanumerics.
    pub fn ini() -> Self {
        Self::new(&[' ', '.', ',', '-', ':', '_'])
    }

    /// Shape for JSON-like files (VS Code `settings.json`).
    ///
    /// Adds quotation marks and parentheses so a quoted value with its
    /// trailing comma is captured as one span.
    pub fn json() -> Self {
        Self::new(&[' ', '.', ',', '-', ':', '_', '(', ')', '"'])
    }

    /// Whether `c` may appear inside a value of this shape.
    pub fn allows(&self, c: char) -> bool {
        c.is_alphanumeric() || self.extra.contains(&c)
    }
}

/// What: Identify where a setting lives in a file: a literal key prefix
/// (including its trailing separator) plus the shape of the value behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPattern {
    /// Literal prefix up to and including the assignment separator,
    /// e.g. `LookAndFeelPackage=` or `"workbench.colorTheme":`.
    pub prefix: String,
    /// Permitted value characters for this call site.
    pub shape: ValueShape,
}

impl KeyPattern {
    /// Build a pattern from a prefix literal and a value shape.
    pub fn new(prefix: impl Into<String>, shape: ValueShape) -> Self {
        Self {
            prefix: prefix.into(),
            shape,
        }
    }
}
