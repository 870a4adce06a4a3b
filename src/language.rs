//! The closed language vocabulary and its strategy table.
//!
//! Every language identifier recognized anywhere in the system lives here,
//! together with the single strategy that handles it. Adding a language means
//! adding one enum variant and one row in each match; the compiler enforces
//! that no language is left without a strategy.

/// A language identifier recognized by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
    Python,
    Html,
    Css,
    Json,
    Xml,
    Yaml,
    Markdown,
    Java,
    Cpp,
    C,
    CSharp,
    Php,
    Ruby,
    Go,
    Rust,
    Swift,
    Kotlin,
    Scala,
    Sql,
    Shell,
    PowerShell,
}

/// Which backend executes a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// In-process sandboxed JavaScript evaluation.
    Evaluate,
    /// Embedded Python interpreter bridge.
    Python,
    /// Structural validation (markup/data formats).
    Validate,
    /// Heuristic source analysis for languages with no local runtime.
    Analyze,
}

/// All recognized languages, in listing order.
pub const ALL: &[Language] = &[
    Language::JavaScript,
    Language::TypeScript,
    Language::Python,
    Language::Html,
    Language::Css,
    Language::Json,
    Language::Xml,
    Language::Yaml,
    Language::Markdown,
    Language::Java,
    Language::Cpp,
    Language::C,
    Language::CSharp,
    Language::Php,
    Language::Ruby,
    Language::Go,
    Language::Rust,
    Language::Swift,
    Language::Kotlin,
    Language::Scala,
    Language::Sql,
    Language::Shell,
    Language::PowerShell,
];

impl Language {
    /// The wire identifier used by callers (`execute(code, "javascript")`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Xml => "xml",
            Language::Yaml => "yaml",
            Language::Markdown => "markdown",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::C => "c",
            Language::CSharp => "csharp",
            Language::Php => "php",
            Language::Ruby => "ruby",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Swift => "swift",
            Language::Kotlin => "kotlin",
            Language::Scala => "scala",
            Language::Sql => "sql",
            Language::Shell => "shell",
            Language::PowerShell => "powershell",
        }
    }

    /// Parse a wire identifier. Unknown identifiers return `None`; the
    /// dispatcher turns that into its unsupported-language message.
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "javascript" => Some(Language::JavaScript),
            "typescript" => Some(Language::TypeScript),
            "python" => Some(Language::Python),
            "html" => Some(Language::Html),
            "css" => Some(Language::Css),
            "json" => Some(Language::Json),
            "xml" => Some(Language::Xml),
            "yaml" => Some(Language::Yaml),
            "markdown" => Some(Language::Markdown),
            "java" => Some(Language::Java),
            "cpp" => Some(Language::Cpp),
            "c" => Some(Language::C),
            "csharp" => Some(Language::CSharp),
            "php" => Some(Language::Php),
            "ruby" => Some(Language::Ruby),
            "go" => Some(Language::Go),
            "rust" => Some(Language::Rust),
            "swift" => Some(Language::Swift),
            "kotlin" => Some(Language::Kotlin),
            "scala" => Some(Language::Scala),
            "sql" => Some(Language::Sql),
            "shell" => Some(Language::Shell),
            "powershell" => Some(Language::PowerShell),
            _ => None,
        }
    }

    /// Human-readable name for listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Json => "JSON",
            Language::Xml => "XML",
            Language::Yaml => "YAML",
            Language::Markdown => "Markdown",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::CSharp => "C#",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Swift => "Swift",
            Language::Kotlin => "Kotlin",
            Language::Scala => "Scala",
            Language::Sql => "SQL",
            Language::Shell => "Shell",
            Language::PowerShell => "PowerShell",
        }
    }

    /// Infer a language from a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "js" | "mjs" | "cjs" | "jsx" => Some(Language::JavaScript),
            "ts" | "tsx" => Some(Language::TypeScript),
            "py" => Some(Language::Python),
            "html" | "htm" => Some(Language::Html),
            "css" => Some(Language::Css),
            "json" => Some(Language::Json),
            "xml" => Some(Language::Xml),
            "yaml" | "yml" => Some(Language::Yaml),
            "md" | "markdown" => Some(Language::Markdown),
            "java" => Some(Language::Java),
            "cpp" | "cc" | "cxx" | "hpp" => Some(Language::Cpp),
            "c" | "h" => Some(Language::C),
            "cs" => Some(Language::CSharp),
            "php" => Some(Language::Php),
            "rb" => Some(Language::Ruby),
            "go" => Some(Language::Go),
            "rs" => Some(Language::Rust),
            "swift" => Some(Language::Swift),
            "kt" | "kts" => Some(Language::Kotlin),
            "scala" => Some(Language::Scala),
            "sql" => Some(Language::Sql),
            "sh" | "bash" => Some(Language::Shell),
            "ps1" => Some(Language::PowerShell),
            _ => None,
        }
    }

    /// The one strategy that handles this language.
    pub fn strategy(&self) -> Strategy {
        match self {
            Language::JavaScript | Language::TypeScript => Strategy::Evaluate,
            Language::Python => Strategy::Python,
            Language::Html
            | Language::Css
            | Language::Json
            | Language::Xml
            | Language::Yaml
            | Language::Markdown => Strategy::Validate,
            Language::Java
            | Language::Cpp
            | Language::C
            | Language::CSharp
            | Language::Php
            | Language::Ruby
            | Language::Go
            | Language::Rust
            | Language::Swift
            | Language::Kotlin
            | Language::Scala
            | Language::Sql
            | Language::Shell
            | Language::PowerShell => Strategy::Analyze,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Evaluate => "evaluate",
            Strategy::Python => "python",
            Strategy::Validate => "validate",
            Strategy::Analyze => "analyze",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for lang in ALL {
            let parsed = Language::parse(lang.as_str());
            assert_eq!(parsed, Some(*lang), "round trip failed for {}", lang);
        }
    }

    #[test]
    fn test_unknown_id() {
        assert_eq!(Language::parse("brainfuck"), None);
        assert_eq!(Language::parse(""), None);
        assert_eq!(Language::parse("JavaScript"), None, "ids are lowercase");
    }

    #[test]
    fn test_every_language_has_one_strategy() {
        // The match in strategy() is total; this checks the listing side:
        // all 23 ids appear exactly once.
        assert_eq!(ALL.len(), 23);
        let mut seen = std::collections::HashSet::new();
        for lang in ALL {
            assert!(seen.insert(lang.as_str()), "duplicate id {}", lang);
            let _ = lang.strategy();
        }
    }

    #[test]
    fn test_strategy_tiers() {
        assert_eq!(Language::JavaScript.strategy(), Strategy::Evaluate);
        assert_eq!(Language::TypeScript.strategy(), Strategy::Evaluate);
        assert_eq!(Language::Python.strategy(), Strategy::Python);
        assert_eq!(Language::Html.strategy(), Strategy::Validate);
        assert_eq!(Language::Markdown.strategy(), Strategy::Validate);
        assert_eq!(Language::Java.strategy(), Strategy::Analyze);
        assert_eq!(Language::PowerShell.strategy(), Strategy::Analyze);
    }

    #[test]
    fn test_extension_inference() {
        assert_eq!(Language::from_extension("py"), Some(Language::Python));
        assert_eq!(Language::from_extension("rs"), Some(Language::Rust));
        assert_eq!(Language::from_extension("yml"), Some(Language::Yaml));
        assert_eq!(Language::from_extension("exe"), None);
    }
}
