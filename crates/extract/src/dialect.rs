use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// A source dialect: the extension set, import grammar, and sibling
/// resolution rule for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Python,
    Cpp,
}

impl Dialect {
    /// Detect dialect from a file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" | "pyw" => Some(Self::Python),
            "cpp" | "cc" | "cxx" | "hpp" | "hh" | "hxx" | "h" => Some(Self::Cpp),
            _ => None,
        }
    }

    /// Detect dialect from a file path
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    /// File extensions cataloged as source units.
    ///
    /// For C++ only translation units become units; headers are include
    /// targets, and cataloging them would collide with their same-stem
    /// sources.
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Python => &["py", "pyw"],
            Self::Cpp => &["cpp", "cc", "cxx"],
        }
    }

    /// File extensions that make an import token a sibling reference
    pub const fn sibling_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Python => &["py", "pyw"],
            Self::Cpp => &["hpp", "hh", "hxx", "h", "cpp", "cc", "cxx"],
        }
    }

    /// File names excluded from scanning regardless of extension
    pub const fn excluded_file_names(self) -> &'static [&'static str] {
        match self {
            // Sphinx configuration is not part of the module graph.
            Self::Python => &["conf.py"],
            Self::Cpp => &[],
        }
    }

    /// Get dialect name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::Cpp => "cpp",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "python" | "py" => Ok(Self::Python),
            "cpp" | "c++" => Ok(Self::Cpp),
            other => Err(format!("unknown dialect: {other} (expected python or cpp)")),
        }
    }
}
