use std::fmt;

use compact_str::CompactString;

use crate::value::ParamValue;

/// Various styles of SQL parameter placeholders.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaceholderStyle {
    /// Colon style placeholders (:param)
    Colon,
    /// At-sign style placeholders (@param)
    #[default]
    AtSign,
    /// Dollar style placeholders ($param)
    Dollar,
}

/// A named SQL parameter placeholder.
///
/// Placeholder names are derived from (column, operator suffix) at build
/// time, so they are owned strings rather than static text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder {
    /// The name of the parameter.
    pub name: CompactString,
    /// The style of the placeholder.
    pub style: PlaceholderStyle,
}

impl Placeholder {
    /// Creates a new placeholder with the given name and style.
    pub fn with_style(name: impl Into<CompactString>, style: PlaceholderStyle) -> Self {
        Placeholder {
            name: name.into(),
            style,
        }
    }

    /// Creates a new colon-style placeholder.
    pub fn colon(name: impl Into<CompactString>) -> Self {
        Self::with_style(name, PlaceholderStyle::Colon)
    }

    /// Creates a new at-sign-style placeholder.
    pub fn at(name: impl Into<CompactString>) -> Self {
        Self::with_style(name, PlaceholderStyle::AtSign)
    }

    /// Creates a new dollar-style placeholder.
    pub fn dollar(name: impl Into<CompactString>) -> Self {
        Self::with_style(name, PlaceholderStyle::Dollar)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.style {
            PlaceholderStyle::Colon => write!(f, ":{}", self.name),
            PlaceholderStyle::AtSign => write!(f, "@{}", self.name),
            PlaceholderStyle::Dollar => write!(f, "${}", self.name),
        }
    }
}

/// A SQL parameter that associates a value with a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// The placeholder used in the SQL text
    pub placeholder: Placeholder,
    /// The value to bind
    pub value: ParamValue,
}

impl Param {
    pub fn new(placeholder: Placeholder, value: impl Into<ParamValue>) -> Self {
        Self {
            placeholder,
            value: value.into(),
        }
    }

    /// The placeholder name as it appears in the SQL text (including the
    /// style sigil), e.g. `@Name_IN`.
    pub fn name(&self) -> String {
        self.placeholder.to_string()
    }
}
