//! Output rendering for located modules

use std::path::Path;

use console::Style;
use modlocatelib::Location;

/// How module lists are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One path per line, relative to the scanned root
    Text,
    /// JSON array of `{ "path", "name" }` objects
    Json,
}

impl OutputMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" => Some(OutputMode::Text),
            "json" => Some(OutputMode::Json),
            _ => None,
        }
    }
}

/// Convert a path to a relative path from the base directory
fn make_relative(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| path.to_string_lossy().to_string())
}

/// Render the module list for stdout.
pub fn render_modules(
    modules: &[Location],
    base: &Path,
    mode: OutputMode,
) -> Result<String, serde_json::Error> {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(modules),
        OutputMode::Text => Ok(modules
            .iter()
            .map(|m| make_relative(&m.path, base))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

/// Render the summary line printed to stderr after text output.
pub fn render_summary(count: usize) -> String {
    let noun = if count == 1 { "module" } else { "modules" };
    Style::new()
        .dim()
        .apply_to(format!("{} {}", count, noun))
        .to_string()
}
