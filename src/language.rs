//! Static file-name to language lookup.

use std::path::Path;

/// Label given to every file the table does not know.
pub const UNKNOWN: &str = "Unknown";

/// Groups of languages that share declaration syntax, used by the metrics heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageFamily {
    Python,
    JavaScript,
    TypeScript,
    /// Java, C#, Kotlin, Scala, Swift, Dart.
    Jvm,
    CLike,
    Rust,
    Go,
    Ruby,
    Php,
    Shell,
    /// Data and config formats: no functions, no classes.
    Data,
    Other,
}

/// Returns the language label for a file, or [`UNKNOWN`].
///
/// Exact file names (`Makefile`, `Dockerfile`, ...) win over extensions;
/// extensions are matched case-insensitively.
pub fn classify(path: &Path) -> &'static str {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return UNKNOWN;
    };
    if let Some(label) = language_from_file_name(name) {
        return label;
    }
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| language_from_extension(&ext.to_lowercase()))
        .unwrap_or(UNKNOWN)
}

fn language_from_file_name(name: &str) -> Option<&'static str> {
    match name {
        "Makefile" | "makefile" | "GNUmakefile" => Some("Makefile"),
        "Dockerfile" => Some("Dockerfile"),
        "CMakeLists.txt" => Some("CMake"),
        "Gemfile" | "Rakefile" => Some("Ruby"),
        _ => None,
    }
}

fn language_from_extension(ext: &str) -> &'static str {
    match ext {
        "py" => "Python", "js" => "JavaScript", "ts" => "TypeScript",
        "tsx" => "TypeScript React", "jsx" => "JavaScript React",
        "java" => "Java", "cpp" | "cc" | "cxx" => "C++", "c" => "C",
        "h" => "C/C++ Header", "hpp" => "C++ Header", "cs" => "C#",
        "php" => "PHP", "rb" => "Ruby", "go" => "Go", "rs" => "Rust",
        "kt" => "Kotlin", "swift" => "Swift", "m" => "Objective-C",
        "mm" => "Objective-C++", "scala" => "Scala", "clj" => "Clojure",
        "hs" => "Haskell", "ml" => "OCaml", "fs" => "F#", "dart" => "Dart",
        "lua" => "Lua", "r" => "R", "pl" => "Perl", "sh" => "Shell",
        "bash" => "Bash", "zsh" => "Zsh", "fish" => "Fish", "sql" => "SQL",
        "json" => "JSON", "xml" => "XML", "yaml" | "yml" => "YAML",
        "toml" => "TOML", "ini" => "INI", "cfg" => "Config",
        _ => UNKNOWN,
    }
}

impl LanguageFamily {
    pub fn of(label: &str) -> Self {
        match label {
            "Python" => Self::Python,
            "JavaScript" | "JavaScript React" => Self::JavaScript,
            "TypeScript" | "TypeScript React" => Self::TypeScript,
            "Java" | "C#" | "Kotlin" | "Scala" | "Swift" | "Dart" => Self::Jvm,
            "C" | "C++" | "C/C++ Header" | "C++ Header" | "Objective-C" | "Objective-C++" => {
                Self::CLike
            }
            "Rust" => Self::Rust,
            "Go" => Self::Go,
            "Ruby" => Self::Ruby,
            "PHP" => Self::Php,
            "Shell" | "Bash" | "Zsh" | "Fish" | "Makefile" | "Dockerfile" => Self::Shell,
            "JSON" | "XML" | "YAML" | "TOML" | "INI" | "Config" => Self::Data,
            _ => Self::Other,
        }
    }
}
