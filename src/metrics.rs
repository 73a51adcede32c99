//! Heuristic line, function and class counting.
//!
//! Nothing here parses code. Each language family has a handful of
//! line-anchored patterns; a line counts as a declaration when one matches.
//! Counts are approximate and never an error.

use crate::language::LanguageFamily;
use crate::types::Metrics;
use regex::RegexSet;
use std::sync::LazyLock;

const C_COMMENTS: &[&str] = &[r"^\s*//", r"^\s*/\*", r"^\s*\*"];
const HASH_COMMENTS: &[&str] = &[r"^\s*#"];

/// Leading words that look like `type name(` but start a statement.
const STATEMENT_KEYWORDS: &[&str] = &[
    "return", "else", "if", "while", "for", "switch", "case", "do", "sizeof", "new",
    "delete", "throw", "goto", "await", "yield",
];

struct Patterns {
    comment: RegexSet,
    function: RegexSet,
    class: RegexSet,
    /// Reject function matches whose first word is a statement keyword.
    skip_statements: bool,
}
impl Patterns {
    fn new(comment: &[&str], function: &[&str], class: &[&str], skip_statements: bool) -> Self {
        let set = |patterns: &[&str]| RegexSet::new(patterns).expect("built-in metric pattern");
        Self {
            comment: set(comment),
            function: set(function),
            class: set(class),
            skip_statements,
        }
    }
}

static PYTHON: LazyLock<Patterns> = LazyLock::new(|| {
    Patterns::new(
        &[r"^\s*#", r#"^\s*""""#, r"^\s*'''"],
        &[r"^\s*(async\s+)?def\s+\w+"],
        &[r"^\s*class\s+\w+"],
        false,
    )
});
static JAVASCRIPT: LazyLock<Patterns> = LazyLock::new(|| {
    Patterns::new(
        C_COMMENTS,
        &[
            r"^\s*(export\s+)?(default\s+)?(async\s+)?function\*?\s+\w+",
            r"^\s*(export\s+)?(const|let|var)\s+\w+\s*=\s*(async\s+)?(\([^)]*\)|\w+)\s*=>",
            r"^\s*\w+\s*:\s*(async\s+)?function",
        ],
        &[r"^\s*(export\s+)?(default\s+)?class\s+\w+"],
        false,
    )
});
static TYPESCRIPT: LazyLock<Patterns> = LazyLock::new(|| {
    Patterns::new(
        C_COMMENTS,
        &[
            r"^\s*(export\s+)?(default\s+)?(async\s+)?function\*?\s+\w+",
            r"^\s*(export\s+)?(const|let|var)\s+\w+\s*(:[^=]+)?=\s*(async\s+)?(\([^)]*\)|\w+)\s*(:[^=]+)?=>",
            r"^\s*((public|private|protected|static|async|readonly)\s+)*\w+\s*\([^)]*\)\s*:\s*[^=;]+\{\s*$",
        ],
        &[
            r"^\s*(export\s+)?(default\s+)?(abstract\s+)?class\s+\w+",
            r"^\s*(export\s+)?interface\s+\w+",
            r"^\s*(export\s+)?type\s+\w+(<[^>]*>)?\s*=",
        ],
        true,
    )
});
static JVM: LazyLock<Patterns> = LazyLock::new(|| {
    Patterns::new(
        C_COMMENTS,
        &[
            r"^\s*((public|private|protected|internal|static|final|abstract|synchronized|override|open|suspend|virtual|async|mutating)\s+)*(fun|func|def)\s+\w+",
            r"^\s*((public|private|protected|internal|static|final|abstract|synchronized|override|virtual|async)\s+)+[\w<>\[\],.?]+\s+\w+\s*\(",
        ],
        &[r"^\s*((public|private|protected|internal|static|final|abstract|sealed|open|data|partial)\s+)*(class|interface|enum|struct|record|object|trait)\s+\w+"],
        true,
    )
});
static C_LIKE: LazyLock<Patterns> = LazyLock::new(|| {
    Patterns::new(
        C_COMMENTS,
        &[r"^\s*([\w:<>,*&]+[\s*&]+)+[\w:~]+\s*\([^;]*$"],
        &[r"^\s*(class|struct)\s+\w+", r"^\s*typedef\s+struct", r"^\s*@interface\s+\w+"],
        true,
    )
});
static RUST: LazyLock<Patterns> = LazyLock::new(|| {
    Patterns::new(
        C_COMMENTS,
        &[r#"^\s*(pub(\([^)]*\))?\s+)?(const\s+)?(async\s+)?(unsafe\s+)?(extern\s+"[^"]*"\s+)?fn\s+\w+"#],
        &[r"^\s*(pub(\([^)]*\))?\s+)?(struct|enum|trait|union)\s+\w+"],
        false,
    )
});
static GO: LazyLock<Patterns> = LazyLock::new(|| {
    Patterns::new(
        &[r"^\s*//", r"^\s*/\*"],
        &[r"^\s*func\s+(\([^)]*\)\s*)?\w+"],
        &[r"^\s*type\s+\w+\s+(struct|interface)\b"],
        false,
    )
});
static RUBY: LazyLock<Patterns> = LazyLock::new(|| {
    Patterns::new(
        &[r"^\s*#", r"^=begin"],
        &[r"^\s*def\s+"],
        &[r"^\s*(class|module)\s+[A-Z]"],
        false,
    )
});
static PHP: LazyLock<Patterns> = LazyLock::new(|| {
    Patterns::new(
        &[r"^\s*//", r"^\s*#", r"^\s*/\*", r"^\s*\*"],
        &[r"^\s*((public|private|protected|static|abstract|final)\s+)*function\s+&?\w+"],
        &[r"^\s*((abstract|final)\s+)?(class|interface|trait)\s+\w+"],
        false,
    )
});
static SHELL: LazyLock<Patterns> = LazyLock::new(|| {
    Patterns::new(
        HASH_COMMENTS,
        &[r"^\s*function\s+[\w-]+", r"^\s*[\w-]+\s*\(\)"],
        &[],
        false,
    )
});
static DATA: LazyLock<Patterns> =
    LazyLock::new(|| Patterns::new(&[r"^\s*#", r"^\s*;", r"^\s*<!--"], &[], &[], false));
static OTHER: LazyLock<Patterns> = LazyLock::new(|| {
    Patterns::new(&[r"^\s*//", r"^\s*#", r"^\s*--", r"^\s*;", r"^\s*/\*"], &[], &[], false)
});

fn patterns_for(family: LanguageFamily) -> &'static Patterns {
    match family {
        LanguageFamily::Python => &PYTHON,
        LanguageFamily::JavaScript => &JAVASCRIPT,
        LanguageFamily::TypeScript => &TYPESCRIPT,
        LanguageFamily::Jvm => &JVM,
        LanguageFamily::CLike => &C_LIKE,
        LanguageFamily::Rust => &RUST,
        LanguageFamily::Go => &GO,
        LanguageFamily::Ruby => &RUBY,
        LanguageFamily::Php => &PHP,
        LanguageFamily::Shell => &SHELL,
        LanguageFamily::Data => &DATA,
        LanguageFamily::Other => &OTHER,
    }
}

/// Number of line terminators plus one.
pub fn line_count(text: &str) -> usize {
    text.bytes().filter(|b| *b == b'\n').count() + 1
}

/// Counts lines, declarations and classes in `text` using the patterns of
/// `language`'s family. `blank + comment + code == line_count` always holds.
pub fn analyze(text: &str, language: &str) -> Metrics {
    let patterns = patterns_for(LanguageFamily::of(language));
    let mut metrics = Metrics {
        line_count: line_count(text),
        ..Default::default()
    };
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            metrics.blank_lines += 1;
            continue;
        }
        if patterns.comment.is_match(line) {
            metrics.comment_lines += 1;
            continue;
        }
        metrics.code_lines += 1;
        if patterns.function.is_match(line) && !(patterns.skip_statements && starts_with_statement(line)) {
            metrics.function_count += 1;
        }
        if patterns.class.is_match(line) {
            metrics.class_count += 1;
        }
    }
    metrics
}

fn starts_with_statement(line: &str) -> bool {
    let first = line
        .trim_start()
        .split(|c: char| !c.is_alphanumeric() && c != '_')
        .next()
        .unwrap_or("");
    STATEMENT_KEYWORDS.contains(&first)
}
