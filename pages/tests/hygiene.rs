//! Hygiene: source-level budgets for the pages library.
//!
//! Each pattern below has a budget, ideally zero. The budget never grows: to
//! add an occurrence, remove another one first. Sibling `*_test.rs` files are
//! not scanned.

use std::fs;
use std::path::{Path, PathBuf};

struct Budget {
    pattern: &'static str,
    max: usize,
    why: &'static str,
}

// Panics.
const UNWRAP: Budget = Budget { pattern: ".unwrap()", max: 0, why: "propagate the error instead" };
const EXPECT: Budget = Budget { pattern: ".expect(", max: 0, why: "propagate the error instead" };
const PANIC: Budget = Budget { pattern: "panic!(", max: 0, why: "return an error" };
const UNREACHABLE: Budget = Budget { pattern: "unreachable!(", max: 0, why: "make the state unrepresentable" };
const TODO: Budget = Budget { pattern: "todo!(", max: 0, why: "finish the stub" };
const UNIMPLEMENTED: Budget = Budget { pattern: "unimplemented!(", max: 0, why: "finish the stub" };

// Silent loss.
const SILENT_DISCARD: Budget = Budget { pattern: "let _ =", max: 0, why: "inspect or log the result" };
const DOT_OK: Budget = Budget { pattern: ".ok()", max: 0, why: "inspect or log the error" };

// Structure.
const ALLOW_DEAD_CODE: Budget = Budget { pattern: "#[allow(dead_code)]", max: 0, why: "delete the dead code" };
const PRINTLN: Budget = Budget { pattern: "println!(", max: 0, why: "log through tracing" };
const EPRINTLN: Budget = Budget { pattern: "eprintln!(", max: 0, why: "log through tracing" };

fn production_files() -> Vec<(PathBuf, String)> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    files
}

fn walk(dir: &Path, out: &mut Vec<(PathBuf, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push((path, content));
            }
        }
    }
}

fn check(budget: &Budget) {
    let files = production_files();
    assert!(!files.is_empty(), "no source files found; run from the crate root");

    let hits: Vec<(String, usize)> = files
        .iter()
        .map(|(path, content)| {
            let count = content.lines().filter(|line| line.contains(budget.pattern)).count();
            (path.display().to_string(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();
    let found: usize = hits.iter().map(|(_, count)| count).sum();

    assert!(
        found <= budget.max,
        "`{}` budget exceeded: found {found}, max {} ({}).\n{}",
        budget.pattern,
        budget.max,
        budget.why,
        hits.iter()
            .map(|(path, count)| format!("  {path}: {count}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

#[test]
fn unwrap_budget() {
    check(&UNWRAP);
}

#[test]
fn expect_budget() {
    check(&EXPECT);
}

#[test]
fn panic_budget() {
    check(&PANIC);
}

#[test]
fn unreachable_budget() {
    check(&UNREACHABLE);
}

#[test]
fn todo_budget() {
    check(&TODO);
}

#[test]
fn unimplemented_budget() {
    check(&UNIMPLEMENTED);
}

#[test]
fn silent_discard_budget() {
    check(&SILENT_DISCARD);
}

#[test]
fn dot_ok_budget() {
    check(&DOT_OK);
}

#[test]
fn allow_dead_code_budget() {
    check(&ALLOW_DEAD_CODE);
}

#[test]
fn println_budget() {
    check(&PRINTLN);
}

#[test]
fn eprintln_budget() {
    check(&EPRINTLN);
}
