//! Checks that every source file has a mirrored unit test file

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Entry points and module organization files don't require separate test files
    fn is_structural(path: &str) -> bool {
        path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs")
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_dir = Path::new("src");
        let tests_dir = Path::new("tests/unit");

        let src_paths = collect_relative_paths(src_dir, src_dir).unwrap_or_else(|error| {
            assert!(src_dir.exists(), "Failed to read src directory: {error}");
            HashSet::new()
        });
        let test_paths = collect_relative_paths(tests_dir, tests_dir).unwrap_or_default();

        let mut missing_tests: Vec<&String> = src_paths
            .iter()
            .filter(|path| !is_structural(path) && !test_paths.contains(*path))
            .collect();
        missing_tests.sort();

        assert!(
            missing_tests.is_empty(),
            "The following src files are missing unit test counterparts:\n{}",
            missing_tests
                .iter()
                .map(|src_path| format!("  - src/{src_path} -> tests/unit/{src_path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_dir = Path::new("src");
        let tests_dir = Path::new("tests/unit");

        let src_paths = collect_relative_paths(src_dir, src_dir).unwrap_or_default();
        let test_paths = collect_relative_paths(tests_dir, tests_dir).unwrap_or_default();

        let mut orphaned_tests: Vec<&String> = test_paths
            .iter()
            .filter(|path| !is_structural(path) && !src_paths.contains(*path))
            .collect();
        orphaned_tests.sort();

        assert!(
            orphaned_tests.is_empty(),
            "The following unit test files have no corresponding src files:\n{}",
            orphaned_tests
                .iter()
                .map(|test_path| format!("  - tests/unit/{test_path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> io::Result<HashSet<String>> {
        let mut paths = HashSet::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                paths.extend(collect_relative_paths(&path, base)?);
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                if let Ok(relative) = path.strip_prefix(base) {
                    paths.insert(relative.to_string_lossy().replace('\\', "/"));
                }
            }
        }
        Ok(paths)
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut files_without_tests = Vec::new();

        if let Err(error) = check_test_files(tests_dir, &mut files_without_tests) {
            assert!(tests_dir.exists(), "Failed to scan tests directory: {error}");
        }
        files_without_tests.sort();

        assert!(
            files_without_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            files_without_tests.join("\n")
        );
    }

    fn check_test_files(dir: &Path, files_without_tests: &mut Vec<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                check_test_files(&path, files_without_tests)?;
                continue;
            }
            if path.extension().is_none_or(|ext| ext != "rs") {
                continue;
            }

            let content = fs::read_to_string(&path)?;
            // Module trees only declare submodules
            let declares_only = content
                .lines()
                .filter(|line| !line.trim().is_empty() && !line.starts_with("//"))
                .all(|line| line.contains("mod "));
            if !declares_only && !content.contains("#[test]") {
                files_without_tests.push(format!("  - {}", path.display()));
            }
        }
        Ok(())
    }
}
