//! Checks that `tests/unit` mirrors `src` file for file

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::path::Path;
    use walkdir::WalkDir;

    // Entry points and module organization files don't require separate test files
    fn is_exempt(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn relative_rust_paths(base: &Path) -> BTreeSet<String> {
        WalkDir::new(base)
            .min_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| {
                entry.file_type().is_dir()
                    || entry.path().extension().and_then(|ext| ext.to_str()) == Some("rs")
            })
            .filter_map(|entry| {
                entry
                    .path()
                    .strip_prefix(base)
                    .ok()
                    .map(|relative| relative.to_string_lossy().to_string())
            })
            .collect()
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_paths = relative_rust_paths(Path::new("src"));
        let test_paths = relative_rust_paths(Path::new("tests/unit"));

        assert!(!src_paths.is_empty(), "Failed to read src directory");

        let missing: Vec<_> = src_paths
            .iter()
            .filter(|path| !is_exempt(path) && !test_paths.contains(*path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = relative_rust_paths(Path::new("src"));
        let test_paths = relative_rust_paths(Path::new("tests/unit"));

        let orphaned: Vec<_> = test_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let without_tests: Vec<_> = WalkDir::new("tests")
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| {
                entry.file_type().is_file()
                    && entry.path().extension().and_then(|ext| ext.to_str()) == Some("rs")
                    && entry.file_name() != "mod.rs"
            })
            .filter(|entry| {
                fs::read_to_string(entry.path())
                    .map(|content| !content.contains("#[test]"))
                    .unwrap_or(true)
            })
            .map(|entry| format!("  - {}", entry.path().display()))
            .collect();

        assert!(
            without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            without_tests.join("\n")
        );
    }
}
