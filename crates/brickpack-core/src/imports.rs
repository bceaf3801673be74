//! Import statement scanning and rewriting.
//!
//! Python modules inside a subpackage reference their siblings with
//! `from <package>.<subpackage>.<module> import …` statements. This module
//! extracts those sibling names for dependency ordering, and comments the
//! statements out when the sources are flattened into one notebook (each
//! cell shares the notebook's global namespace, so the imports must not
//! run there).

/// Comment prefix applied to each line of a disabled import statement.
pub const DISABLING_MARKER: &str = "#~DB~# ";

/// Extract sibling-module dependency names from a module's source.
///
/// Only top-level `from … import …` statements are considered, matching
/// what a syntax-tree walk over the module body would visit. A statement
/// contributes a dependency when `subpackage` appears as a segment of the
/// dotted path; the dependency name is the path's final segment.
pub fn scan_dependencies(source: &str, subpackage: &str) -> Vec<String> {
    let mut dependencies = Vec::new();

    for line in source.lines() {
        // Top-level statements only: imports inside functions or classes
        // are indented and do not order the modules.
        if !line.starts_with("from ") {
            continue;
        }

        let Some(dotted_path) = parse_import_path(line) else {
            continue;
        };

        if dotted_path.split('.').any(|s| s == subpackage)
            && let Some(last) = dotted_path.split('.').next_back()
        {
            dependencies.push(last.to_string());
        }
    }

    dependencies
}

/// Extract the dotted module path from a `from … import …` line.
fn parse_import_path(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("from ")?;
    let (path, _) = rest.split_once(" import ")?;
    let path = path.trim();
    if path.is_empty() { None } else { Some(path) }
}

/// Comment out every import statement that references the subpackage by its
/// fully qualified prefix (`from <package>.<subpackage>.`).
///
/// Each line of a matched statement is prefixed with [`DISABLING_MARKER`]:
/// the opening line at the position where `from` begins (leading
/// indentation stays in front of the marker), continuation lines of a
/// parenthesized import list at column zero. Line count and all other
/// lines are preserved byte for byte.
pub fn disable_qualified_imports(source: &str, qualified_prefix: &str) -> String {
    // split('\n') keeps the empty trailing piece, so join reproduces the
    // original trailing newline.
    let lines: Vec<&str> = source.split('\n').collect();
    let mut out = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let Some(pos) = line.find(qualified_prefix) else {
            out.push(line.to_string());
            i += 1;
            continue;
        };

        let multi_line = line.trim_end().ends_with('(');
        out.push(format!(
            "{}{}{}",
            &line[..pos],
            DISABLING_MARKER,
            &line[pos..]
        ));
        i += 1;

        if multi_line {
            // The statement spans up to the matching closing parenthesis.
            while i < lines.len() {
                let continuation = lines[i];
                out.push(format!("{}{}", DISABLING_MARKER, continuation));
                i += 1;
                if continuation.contains(')') {
                    break;
                }
            }
        }
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_single_import() {
        let source = "from pkg.features.cleaning import scrub\n\nx = 1\n";
        let deps = scan_dependencies(source, "features");
        assert_eq!(deps, vec!["cleaning"]);
    }

    #[test]
    fn test_scan_ignores_foreign_packages() {
        let source = "from pandas.io import parsers\nfrom pkg.features.base import Base\n";
        let deps = scan_dependencies(source, "features");
        assert_eq!(deps, vec!["base"]);
    }

    #[test]
    fn test_scan_ignores_indented_imports() {
        let source = "def load():\n    from pkg.features.base import Base\n    return Base\n";
        let deps = scan_dependencies(source, "features");
        assert!(deps.is_empty());
    }

    #[test]
    fn test_scan_ignores_plain_imports() {
        let source = "import pkg.features.base\n";
        let deps = scan_dependencies(source, "features");
        assert!(deps.is_empty());
    }

    #[test]
    fn test_scan_parenthesized_import() {
        let source = "from pkg.features.base import (\n    Base,\n    Other,\n)\n";
        let deps = scan_dependencies(source, "features");
        assert_eq!(deps, vec!["base"]);
    }

    #[test]
    fn test_scan_subpackage_must_match_a_segment() {
        // "feat" is a prefix of "features" but not a segment of the path.
        let source = "from pkg.features.base import Base\n";
        assert!(scan_dependencies(source, "feat").is_empty());
    }

    #[test]
    fn test_disable_single_line() {
        let source = "from pkg.features.base import Base\n\nprint(Base)\n";
        let out = disable_qualified_imports(source, "from pkg.features.");
        assert_eq!(
            out,
            "#~DB~# from pkg.features.base import Base\n\nprint(Base)\n"
        );
    }

    #[test]
    fn test_disable_keeps_indentation_in_front() {
        let source = "def load():\n    from pkg.features.base import Base\n";
        let out = disable_qualified_imports(source, "from pkg.features.");
        assert_eq!(
            out,
            "def load():\n    #~DB~# from pkg.features.base import Base\n"
        );
    }

    #[test]
    fn test_disable_multi_line_import() {
        let source = "from pkg.features.base import (\n    Base,\n    Other,\n)\nx = 1\n";
        let out = disable_qualified_imports(source, "from pkg.features.");
        assert_eq!(
            out,
            "#~DB~# from pkg.features.base import (\n#~DB~#     Base,\n#~DB~#     Other,\n#~DB~# )\nx = 1\n"
        );
    }

    #[test]
    fn test_disable_preserves_line_count() {
        let source = "from pkg.features.base import (\n    Base,\n)\n\ny = 2\n";
        let out = disable_qualified_imports(source, "from pkg.features.");
        assert_eq!(source.lines().count(), out.lines().count());
    }

    #[test]
    fn test_disable_leaves_unqualified_imports_alone() {
        let source = "from pkg.other.base import Base\nfrom numpy import array\n";
        let out = disable_qualified_imports(source, "from pkg.features.");
        assert_eq!(out, source);
    }
}
