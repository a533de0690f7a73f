use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use proclang_core::lang::{categories, keywords, operators, punctuation};

/// Guardrail against reintroducing string-literal vocabulary in the grammar.
///
/// This is a **coarse** safety net. It looks for quoted token spellings like `"begin"` or `":="` in
/// non-test Rust sources where callers are expected to go through the `proclang_core::lang` registries.
///
/// Notes:
/// - We allow occurrences in `crates/proclang_core/src/lang/**` (registries themselves) and in tests/.
/// - Everything from the first `#[cfg(test)]` in a file onward is treated as test code.
/// - This is not meant to be perfect; it's meant to catch "oops I hard-coded a keyword".
#[test]
fn no_stringly_vocab_in_rust_sources() {
    let root = repo_root();
    let spellings = token_spellings();
    let mut offenders: Vec<(PathBuf, usize, String)> = Vec::new();

    let targets = [root.join("src"), root.join("crates")];
    for dir in targets {
        if dir.exists() {
            scan_dir(&root, &dir, &spellings, &mut offenders);
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::new();
        msg.push_str("Found string-literal token spellings. Prefer proclang_core registries.\n\n");
        for (path, line_no, line) in offenders.into_iter().take(80) {
            msg.push_str(&format!(
                "- {}:{}: {}\n",
                path.strip_prefix(&root).unwrap_or(&path).display(),
                line_no,
                line.trim()
            ));
        }
        panic!("{msg}");
    }
}

#[test]
fn registries_have_no_duplicate_spellings() {
    let all: Vec<&str> = keywords::KEYWORDS
        .iter()
        .map(|k| k.canonical)
        .chain(punctuation::PUNCTUATION.iter().map(|p| p.canonical))
        .chain(operators::OPERATORS.iter().map(|o| o.canonical))
        .collect();
    let unique: BTreeSet<&str> = all.iter().copied().collect();
    assert_eq!(all.len(), unique.len(), "duplicate spelling in {all:?}");
}

#[test]
fn registry_lookups_round_trip() {
    for k in keywords::KEYWORDS {
        assert_eq!(keywords::from_str(k.canonical), Some(k.id));
        assert_eq!(keywords::as_str(k.id), k.canonical);
    }
    for p in punctuation::PUNCTUATION {
        assert_eq!(punctuation::from_str(p.canonical), Some(p.id));
    }
    for o in operators::OPERATORS {
        assert_eq!(operators::from_str(o.canonical), Some(o.id));
    }
    for &c in categories::CATEGORIES {
        assert_eq!(categories::Category::from_str(c.as_str()), Some(c));
    }
}

#[test]
fn type_names_are_keywords() {
    for &id in keywords::TYPE_NAMES {
        assert_eq!(keywords::category(id), keywords::KeywordCategory::TypeName);
    }
}

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn token_spellings() -> Vec<&'static str> {
    let mut set: BTreeSet<&'static str> = BTreeSet::new();
    for k in keywords::KEYWORDS {
        set.insert(k.canonical);
    }
    for p in punctuation::PUNCTUATION {
        set.insert(p.canonical);
    }
    for o in operators::OPERATORS {
        set.insert(o.canonical);
    }
    set.into_iter().collect()
}

fn is_allowed_file(root: &Path, path: &Path) -> bool {
    let rel = path.strip_prefix(root).unwrap_or(path).to_string_lossy();
    if !rel.ends_with(".rs") {
        return true;
    }
    // Registries define the spellings; allow them.
    if rel.starts_with("crates/proclang_core/src/lang/") {
        return true;
    }
    // Tests can mention spellings directly.
    if rel.starts_with("tests/") || rel.ends_with("/tests.rs") {
        return true;
    }
    false
}

fn scan_dir(root: &Path, dir: &Path, spellings: &[&'static str], offenders: &mut Vec<(PathBuf, usize, String)>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            scan_dir(root, &path, spellings, offenders);
            continue;
        }
        if is_allowed_file(root, &path) {
            continue;
        }
        let Ok(contents) = fs::read_to_string(&path) else {
            continue;
        };
        for (idx, line) in contents.lines().enumerate() {
            if line.trim_start().starts_with("#[cfg(test)]") {
                break;
            }
            if is_suspicious_line(line, spellings) {
                offenders.push((path.clone(), idx + 1, line.to_string()));
            }
        }
    }
}

fn is_suspicious_line(line: &str, spellings: &[&'static str]) -> bool {
    // Avoid false positives in comments/docstrings.
    let trimmed = line.trim_start();
    if trimmed.starts_with("//") {
        return false;
    }

    spellings.iter().any(|s| line.contains(&format!("\"{s}\"")))
}
