//! Module-name classification.
//!
//! Decides from a bare file name whether a file is a source module the
//! locator should hand on, and which file names mark a directory index.

/// File names that designate a directory's index module, in lookup order.
pub const INDEX_FILE_NAMES: &[&str] = &["index.ts", "index.tsx"];

const SOURCE_EXTENSIONS: &[&str] = &[".ts", ".tsx"];
const DECLARATION_SUFFIXES: &[&str] = &[".d.ts", ".d.tsx"];

/// Check whether a file name looks like a source module.
///
/// A source module ends in `.ts` or `.tsx` and is not a declaration-only
/// file (`.d.ts`).
pub fn is_source_module(name: &str) -> bool {
    if DECLARATION_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        return false;
    }
    SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}
