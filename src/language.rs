//! Filename-based language detection
//!
//! Maps file names to editor language identifiers. `TabManager` calls
//! [`detect_language`] when a tab is opened with a name but no explicit
//! language; [`display_name`] turns a language id into the human-readable
//! label shown in the status bar and language menu.

/// Detect the language id for a file name.
///
/// Well-known extensionless names (Dockerfile, Makefile, CMakeLists.txt) are
/// checked first, then the extension map. Unknown names fall back to
/// `"plaintext"`. Matching is case-insensitive.
pub fn detect_language(name: &str) -> &'static str {
    if name.is_empty() {
        return "plaintext";
    }
    let lower = name.to_lowercase();

    match lower.as_str() {
        "dockerfile" => return "dockerfile",
        "makefile" => return "makefile",
        "cmakelists.txt" => return "cmake",
        _ => {}
    }

    let Some(dot) = lower.rfind('.') else {
        return "plaintext";
    };

    match &lower[dot..] {
        ".js" | ".jsx" => "javascript",
        ".ts" | ".tsx" => "typescript",
        ".py" => "python",
        ".rb" => "ruby",
        ".go" => "go",
        ".rs" => "rust",
        ".c" | ".h" => "c",
        ".cpp" | ".cc" | ".cxx" | ".hpp" => "cpp",
        ".cs" => "csharp",
        ".java" => "java",
        ".swift" => "swift",
        ".kt" => "kotlin",
        ".php" => "php",
        ".html" | ".htm" | ".vue" | ".svelte" => "html",
        ".css" => "css",
        ".scss" => "scss",
        ".less" => "less",
        ".json" => "json",
        ".xml" => "xml",
        ".yaml" | ".yml" => "yaml",
        ".md" => "markdown",
        ".sql" => "sql",
        ".sh" | ".bash" | ".zsh" => "shell",
        ".ps1" => "powershell",
        ".r" => "r",
        ".lua" => "lua",
        ".pl" | ".pm" => "perl",
        ".dart" => "dart",
        ".ex" | ".exs" => "elixir",
        ".erl" => "erlang",
        ".hs" => "haskell",
        ".scala" => "scala",
        ".clj" => "clojure",
        ".coffee" => "coffeescript",
        ".bat" | ".cmd" => "bat",
        ".ini" | ".toml" => "ini",
        ".dockerfile" => "dockerfile",
        ".graphql" | ".gql" => "graphql",
        ".log" | ".txt" | ".env" | ".gitignore" | ".makefile" => "plaintext",
        _ => "plaintext",
    }
}

/// Human-readable display name for a language id.
///
/// Unknown ids are returned verbatim so freshly added languages still render
/// something sensible in the UI.
pub fn display_name(language: &str) -> &str {
    match language {
        "plaintext" => "Plain Text",
        "javascript" => "JavaScript",
        "typescript" => "TypeScript",
        "python" => "Python",
        "ruby" => "Ruby",
        "go" => "Go",
        "rust" => "Rust",
        "c" => "C",
        "cpp" => "C++",
        "csharp" => "C#",
        "java" => "Java",
        "swift" => "Swift",
        "kotlin" => "Kotlin",
        "php" => "PHP",
        "html" => "HTML",
        "css" => "CSS",
        "scss" => "SCSS",
        "less" => "LESS",
        "json" => "JSON",
        "xml" => "XML",
        "yaml" => "YAML",
        "markdown" => "Markdown",
        "sql" => "SQL",
        "shell" => "Shell",
        "powershell" => "PowerShell",
        "r" => "R",
        "lua" => "Lua",
        "perl" => "Perl",
        "dart" => "Dart",
        "elixir" => "Elixir",
        "erlang" => "Erlang",
        "haskell" => "Haskell",
        "scala" => "Scala",
        "clojure" => "Clojure",
        "coffeescript" => "CoffeeScript",
        "bat" => "Batch",
        "ini" => "INI",
        "dockerfile" => "Dockerfile",
        "graphql" => "GraphQL",
        other => other,
    }
}
