//! # modlocatelib
//!
//! Locate the source modules of a directory tree that make up a
//! documentation or build target.
//!
//! ## Overview
//!
//! Given a directory tree, the library collects every source module in
//! pre-order and narrows the result with include/exclude rules:
//!
//! - **Index shortcut**: a directory with an index module (`index.ts`,
//!   `index.tsx`) is represented by that index alone, since it re-exports its
//!   descendants
//! - **Module names**: only `.ts`/`.tsx` files count, declaration files
//!   (`.d.ts`) never do
//! - **Include/exclude**: regular expressions searched in each module's full
//!   path; exclusions always win
//!
//! The tree itself is a plain data structure. It can be built in memory or
//! scanned from disk with [`Directory::scan`].
//!
//! ## Example
//!
//! ```rust
//! use modlocatelib::{locate_modules, Options};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // Set up a temporary project
//! let dir = tempdir().unwrap();
//! fs::create_dir_all(dir.path().join("legacy")).unwrap();
//! fs::write(dir.path().join("new.ts"), "export const a = 1;\n").unwrap();
//! fs::write(dir.path().join("types.d.ts"), "declare const b: number;\n").unwrap();
//! fs::write(dir.path().join("legacy/old.ts"), "export const c = 1;\n").unwrap();
//!
//! // Locate everything
//! let modules = locate_modules(dir.path(), &Options::silent()).unwrap();
//! assert_eq!(modules.len(), 2);
//!
//! // Locate with an exclusion
//! let options = Options::silent().exclude("/legacy/");
//! let modules = locate_modules(dir.path(), &options).unwrap();
//! assert_eq!(modules[0].name, "new.ts");
//! ```

pub mod error;
pub mod filter;
pub mod locator;
pub mod module;
pub mod options;
pub mod tree;

pub use error::LocateError;
pub use filter::Filters;
pub use locator::{load_directory_modules, locate_modules};
pub use module::{is_source_module, INDEX_FILE_NAMES};
pub use options::{Logger, Options, OptionsFile};
pub use tree::{Directory, Location};

/// Result type for modlocatelib operations
pub type Result<T> = std::result::Result<T, LocateError>;
