//! Module location: tree walk, index shortcut and filtering.
//!
//! This module provides the main entry points for turning a directory tree
//! into the ordered list of modules to document or build.

use std::path::Path;

use crate::filter::Filters;
use crate::module::is_source_module;
use crate::options::Options;
use crate::tree::{Directory, Location};
use crate::Result;

/// Locate the modules of a directory tree.
///
/// The tree is walked in pre-order. A directory with an index is represented
/// by that index alone and its subdirectories are not visited. Only files
/// whose name passes [`is_source_module`] are kept, which applies to the
/// index too: an index with a non-module name hides its whole subtree.
///
/// The collected modules are then narrowed by the include/exclude lists of
/// `options`, preserving order.
///
/// # Errors
///
/// Returns [`LocateError::PatternCompilation`](crate::LocateError::PatternCompilation)
/// if an include or exclude pattern is not a valid regular expression.
///
/// # Example
///
/// ```rust
/// use modlocatelib::{load_directory_modules, Directory, Options};
///
/// let tree = Directory::new("/src")
///     .with_file("a.ts")
///     .with_file("b.d.ts")
///     .with_directory(Directory::new("/src/sub").with_file("c.ts"));
///
/// let modules = load_directory_modules(&tree, &Options::silent()).unwrap();
/// let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
/// assert_eq!(names, vec!["a.ts", "c.ts"]);
/// ```
pub fn load_directory_modules(directory: &Directory, options: &Options) -> Result<Vec<Location>> {
    let modules = collect_modules(directory, options);

    let filters = Filters::from_options(options)?;

    if filters.is_active() {
        Ok(filters.apply(modules, options))
    } else {
        Ok(modules)
    }
}

/// Scan `root` from disk and locate its modules.
///
/// # Example
///
/// ```rust,ignore
/// use modlocatelib::{locate_modules, Options};
///
/// let modules = locate_modules("src", &Options::new().exclude("/legacy/"))?;
/// ```
pub fn locate_modules(root: impl AsRef<Path>, options: &Options) -> Result<Vec<Location>> {
    let tree = Directory::scan(root)?;
    load_directory_modules(&tree, options)
}

/// Collect the source modules of a subtree, honouring index shortcuts.
fn collect_modules(directory: &Directory, options: &Options) -> Vec<Location> {
    options.log(&format!("Getting modules @ {}", directory.path.display()));

    let candidates = match &directory.index {
        Some(index) => {
            options.log(&format!("Found existing index @ {}", index.path.display()));
            vec![index.clone()]
        }
        None => {
            let mut files = directory.files.clone();
            for child in &directory.directories {
                files.extend(collect_modules(child, options));
            }
            files
        }
    };

    candidates
        .into_iter()
        .filter(|file| is_source_module(&file.name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocateError;
    use std::fs;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    fn names(modules: &[Location]) -> Vec<&str> {
        modules.iter().map(|m| m.name.as_str()).collect()
    }

    fn paths(modules: &[Location]) -> Vec<String> {
        modules.iter().map(|m| m.path_str().into_owned()).collect()
    }

    fn sample_tree() -> Directory {
        Directory::new("/src")
            .with_file("a.ts")
            .with_file("b.d.ts")
            .with_directory(Directory::new("/src/sub").with_file("c.ts"))
    }

    #[test]
    fn test_include_keeps_matching_modules_in_order() {
        let options = Options::silent().include_many(&["a\\.ts$", "c\\.ts$"]);

        let modules = load_directory_modules(&sample_tree(), &options).unwrap();
        assert_eq!(paths(&modules), vec!["/src/a.ts", "/src/sub/c.ts"]);
    }

    #[test]
    fn test_index_shortcut() {
        let tree = Directory::new("/src")
            .with_index("index.ts")
            .with_file("index.ts")
            .with_file("z.ts")
            .with_directory(Directory::new("/src/sub").with_file("c.ts"));

        let modules = load_directory_modules(&tree, &Options::silent()).unwrap();
        assert_eq!(modules, vec![Location::new("/src/index.ts")]);
    }

    #[test]
    fn test_index_with_non_module_name_hides_subtree() {
        let tree = Directory::new("/src")
            .with_file("a.ts")
            .with_directory(
                Directory::new("/src/lib")
                    .with_index("index.js")
                    .with_file("inner.ts"),
            );

        let modules = load_directory_modules(&tree, &Options::silent()).unwrap();
        assert_eq!(names(&modules), vec!["a.ts"]);
    }

    #[test]
    fn test_nested_index_stops_descent() {
        let tree = Directory::new("/src")
            .with_file("main.ts")
            .with_directory(
                Directory::new("/src/widgets")
                    .with_index("index.tsx")
                    .with_file("button.tsx")
                    .with_directory(Directory::new("/src/widgets/deep").with_file("x.ts")),
            )
            .with_directory(Directory::new("/src/util").with_file("strings.ts"));

        let modules = load_directory_modules(&tree, &Options::silent()).unwrap();
        assert_eq!(
            paths(&modules),
            vec!["/src/main.ts", "/src/widgets/index.tsx", "/src/util/strings.ts"]
        );
    }

    #[test]
    fn test_pre_order_traversal() {
        let tree = Directory::new("/r")
            .with_directory(
                Directory::new("/r/a")
                    .with_directory(Directory::new("/r/a/b").with_file("ab.ts"))
                    .with_file("a.ts"),
            )
            .with_file("r.ts")
            .with_directory(Directory::new("/r/c").with_file("c.ts"));

        let modules = load_directory_modules(&tree, &Options::silent()).unwrap();
        // own files first, then each child in listed order
        assert_eq!(names(&modules), vec!["r.ts", "a.ts", "ab.ts", "c.ts"]);
    }

    #[test]
    fn test_exclude_drops_matching_paths() {
        let tree = Directory::new("/src")
            .with_file("new.ts")
            .with_directory(Directory::new("/src/legacy").with_file("old.ts"));
        let options = Options::silent().exclude("/legacy/");

        let modules = load_directory_modules(&tree, &options).unwrap();
        assert_eq!(paths(&modules), vec!["/src/new.ts"]);
    }

    #[test]
    fn test_exclude_wins_over_include() {
        let options = Options::silent().include("\\.ts$").exclude("sub");

        let modules = load_directory_modules(&sample_tree(), &options).unwrap();
        assert_eq!(paths(&modules), vec!["/src/a.ts"]);
    }

    #[test]
    fn test_empty_include_keeps_nothing() {
        let options = Options::silent().include_many(&[]);

        let modules = load_directory_modules(&sample_tree(), &options).unwrap();
        assert!(modules.is_empty());
    }

    #[test]
    fn test_empty_directory() {
        let modules = load_directory_modules(&Directory::new("/empty"), &Options::silent()).unwrap();
        assert!(modules.is_empty());
    }

    #[test]
    fn test_filtering_is_an_ordered_subsequence() {
        let tree = sample_tree()
            .with_directory(Directory::new("/src/z").with_file("y.ts").with_file("x.tsx"));
        let all = load_directory_modules(&tree, &Options::silent()).unwrap();
        let some = load_directory_modules(&tree, &Options::silent().exclude("c\\.ts|y")).unwrap();

        let mut remaining = all.iter();
        for module in &some {
            assert!(remaining.any(|m| m == module));
        }
        assert_eq!(names(&some), vec!["a.ts", "x.tsx"]);
    }

    #[test]
    fn test_idempotent() {
        let tree = sample_tree();
        let options = Options::silent().exclude("nothing-matches");

        let first = load_directory_modules(&tree, &options).unwrap();
        let second = load_directory_modules(&tree, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_pattern_propagates() {
        let options = Options::silent().include("(");

        let result = load_directory_modules(&sample_tree(), &options);
        assert!(matches!(
            result,
            Err(LocateError::PatternCompilation { ref pattern, .. }) if pattern == "("
        ));
    }

    #[test]
    fn test_lookahead_pattern_propagates_as_error() {
        let options = Options::silent().include("^(?!.*spec).*\\.ts$");

        let result = load_directory_modules(&sample_tree(), &options);
        assert!(matches!(result, Err(LocateError::PatternCompilation { .. })));
    }

    #[test]
    fn test_diagnostics() {
        let messages = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&messages);
        let options = Options::new()
            .with_logger(move |m| sink.lock().unwrap().push(m.to_string()))
            .include("a\\.ts$");
        let tree = Directory::new("/src")
            .with_file("a.ts")
            .with_directory(Directory::new("/src/w").with_index("index.ts"));

        load_directory_modules(&tree, &options).unwrap();

        assert_eq!(
            *messages.lock().unwrap(),
            vec![
                "Getting modules @ /src",
                "Getting modules @ /src/w",
                "Found existing index @ /src/w/index.ts",
                "/src/a.ts is included by /a\\.ts$/",
            ]
        );
    }

    #[test]
    fn test_locate_modules_from_disk() {
        let temp = tempdir().unwrap();
        let root = temp.path();
        fs::create_dir_all(root.join("legacy")).unwrap();
        fs::create_dir_all(root.join("widgets/deep")).unwrap();
        fs::write(root.join("new.ts"), "").unwrap();
        fs::write(root.join("types.d.ts"), "").unwrap();
        fs::write(root.join("legacy/old.ts"), "").unwrap();
        fs::write(root.join("widgets/index.ts"), "").unwrap();
        fs::write(root.join("widgets/deep/hidden.ts"), "").unwrap();

        let modules = locate_modules(root, &Options::silent().exclude("/legacy/")).unwrap();

        assert_eq!(
            modules,
            vec![
                Location::new(root.join("new.ts")),
                Location::new(root.join("widgets/index.ts")),
            ]
        );
    }

    #[test]
    fn test_locate_modules_missing_root() {
        let result = locate_modules("/nonexistent/path", &Options::silent());
        assert!(matches!(result, Err(LocateError::PathNotFound(_))));
    }
}
