//! Checks that unit tests mirror `src/` and that every test file is compiled

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";
    const TESTS_ROOT: &str = "tests";

    // Roots of the `unit` and `meta` test targets; they only declare modules
    const UNIT_TARGET: &str = "unit.rs";
    const TARGET_ROOTS: [&str; 2] = [UNIT_TARGET, "meta.rs"];

    /// Rust files under `root`, relative to it
    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    if let Ok(relative) = path.strip_prefix(root) {
                        files.insert(relative.to_path_buf());
                    }
                }
            }
        }

        Ok(files)
    }

    /// Source files that own behaviour, as opposed to module wiring
    fn is_behaviour_file(path: &Path) -> bool {
        !matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("lib.rs" | "main.rs" | "mod.rs")
        )
    }

    fn listing(paths: &BTreeSet<PathBuf>) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests every source file has a unit test file at the same path and
    // every unit test file still has a source file
    // Verified by adding an untested module to src/io
    #[test]
    fn test_unit_tests_mirror_src() -> io::Result<()> {
        let sources: BTreeSet<_> = rust_files(Path::new(SRC_ROOT))?
            .into_iter()
            .filter(|path| is_behaviour_file(path))
            .collect();
        let unit_tests: BTreeSet<_> = rust_files(Path::new(UNIT_ROOT))?
            .into_iter()
            .filter(|path| is_behaviour_file(path))
            .collect();

        let untested: BTreeSet<_> = sources.difference(&unit_tests).cloned().collect();
        let orphaned: BTreeSet<_> = unit_tests.difference(&sources).cloned().collect();

        assert!(
            untested.is_empty(),
            "src files without tests/unit counterpart:\n{}",
            listing(&untested)
        );
        assert!(
            orphaned.is_empty(),
            "tests/unit files without src counterpart:\n{}",
            listing(&orphaned)
        );
        Ok(())
    }

    // Tests each unit test file is declared by its module root, so none is
    // silently left out of the `unit` target
    // Verified by deleting a `pub mod` line from tests/unit/io/mod.rs
    #[test]
    fn test_unit_test_files_are_declared() -> io::Result<()> {
        let unit_root = Path::new(UNIT_ROOT);
        let target_root = Path::new(TESTS_ROOT).join(UNIT_TARGET);
        let mut undeclared = BTreeSet::new();

        for file in rust_files(unit_root)? {
            let Some(stem) = file.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            if stem == "mod" {
                continue;
            }

            let parent = file.parent().unwrap_or_else(|| Path::new(""));
            let declaring = if parent.as_os_str().is_empty() {
                target_root.clone()
            } else {
                unit_root.join(parent).join("mod.rs")
            };

            let declarations = fs::read_to_string(&declaring)?;
            if !declarations.contains(&format!("mod {stem};")) {
                undeclared.insert(file);
            }
        }

        let root = fs::read_to_string(&target_root)?;
        for area in fs::read_dir(unit_root)? {
            let path = area?.path();
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if path.is_dir() && !root.contains(&format!("mod {name};")) {
                undeclared.insert(PathBuf::from(name));
            }
        }

        assert!(
            undeclared.is_empty(),
            "unit test modules not declared by their parent:\n{}",
            listing(&undeclared)
        );
        Ok(())
    }

    // Tests every test file other than module wiring holds a test
    // Verified by emptying the body of tests/unit/io/progress.rs
    #[test]
    fn test_test_files_contain_tests() -> io::Result<()> {
        let without_tests: BTreeSet<_> = rust_files(Path::new(TESTS_ROOT))?
            .into_iter()
            .filter(|path| {
                path.file_name().is_some_and(|name| name != "mod.rs")
                    && !TARGET_ROOTS.iter().any(|root| path == Path::new(root))
            })
            .filter(|path| {
                !fs::read_to_string(Path::new(TESTS_ROOT).join(path))
                    .is_ok_and(|content| content.contains("#[test]"))
            })
            .collect();

        assert!(
            without_tests.is_empty(),
            "test files without any #[test] function:\n{}",
            listing(&without_tests)
        );
        Ok(())
    }
}
