//! Directory traversal.
//!
//! A recursive depth-first walker with a directory-name exclusion set.
//! Directory entries are visited in name-sorted order so findings come out
//! deterministic across platforms. Classification of the visited files is
//! left to the linters; the walker only hands over paths.

use std::path::Path;

use crate::report::RunReport;

/// Recursive depth-first directory walker.
pub struct Walker {
    excluded_dirs: &'static [&'static str],
}

impl Walker {
    /// Create a walker that descends into every subdirectory.
    pub fn new() -> Self {
        Self { excluded_dirs: &[] }
    }

    /// Create a walker that skips directories whose name is in `excluded_dirs`.
    pub fn with_excluded_dirs(excluded_dirs: &'static [&'static str]) -> Self {
        Self { excluded_dirs }
    }

    /// Walk `root` depth-first, handing every file to `visit`.
    ///
    /// A missing root records a single warning and visits nothing; this is
    /// not a fatal condition.
    pub fn walk(
        &self,
        root: &Path,
        report: &mut RunReport,
        visit: &mut dyn FnMut(&Path, &mut RunReport),
    ) {
        if !root.exists() {
            report.warning(root, "Directory not found");
            return;
        }
        self.walk_dir(root, report, visit);
    }

    fn walk_dir(
        &self,
        dir: &Path,
        report: &mut RunReport,
        visit: &mut dyn FnMut(&Path, &mut RunReport),
    ) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                report.warning(dir, format!("Cannot read directory: {e}"));
                return;
            }
        };

        let mut paths: Vec<_> = entries.filter_map(|e| e.ok().map(|e| e.path())).collect();
        paths.sort();

        for path in paths {
            if path.is_dir() {
                let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
                if self.excluded_dirs.contains(&name) {
                    tracing::debug!("skipping excluded directory: {}", path.display());
                    continue;
                }
                self.walk_dir(&path, report, visit);
            } else {
                visit(&path, report);
            }
        }
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::new()
    }
}
