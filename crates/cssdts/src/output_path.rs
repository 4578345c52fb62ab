//! Where the declaration file for a given stylesheet lives.

use path_clean::PathClean;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

/// Compute the declaration path for `file`.
///
/// - default: `<file>.d.ts`
/// - arbitrary extensions: `<dir>/<stem>.d.<ext>.ts`
/// - with `output_folder`: the above, re-rooted at
///   `<cwd>/<output_folder>/<file relative to cwd>`
pub fn type_definition_path(
    file: &Path,
    output_folder: Option<&Path>,
    allow_arbitrary_extensions: bool,
    cwd: &Path,
) -> PathBuf {
    let resolved = match output_folder {
        Some(folder) => {
            let absolute = cwd.join(file).clean();
            cwd.join(folder).join(relative_to(&absolute, cwd)).clean()
        }
        None => file.to_path_buf(),
    };

    if allow_arbitrary_extensions {
        if let (Some(stem), Some(ext)) = (resolved.file_stem(), resolved.extension()) {
            let mut name = OsString::from(stem);
            name.push(".d.");
            name.push(ext);
            name.push(".ts");
            return resolved.with_file_name(name);
        }
    }

    let mut out = resolved.into_os_string();
    out.push(".d.ts");
    PathBuf::from(out)
}

/// `path` expressed relative to `base`. Both are expected to be absolute.
fn relative_to(path: &Path, base: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix(base) {
        return stripped.to_path_buf();
    }

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();
    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = PathBuf::new();
    for _ in common..base_parts.len() {
        out.push("..");
    }
    for part in &path_parts[common..] {
        out.push(part.as_os_str());
    }
    out
}
