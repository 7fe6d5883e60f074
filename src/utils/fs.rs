use std::path::{Component, Path, PathBuf};

pub const MANIFEST_FILE: &str = "package.json";

pub fn path_exists(base: &Path, relative: &str) -> bool {
    base.join(relative).exists()
}

/// `package.json` directly inside `dir`, if present.
pub fn find_manifest(dir: &Path) -> Option<PathBuf> {
    if path_exists(dir, MANIFEST_FILE) {
        Some(dir.join(MANIFEST_FILE))
    } else {
        None
    }
}

/// Join `path` onto `base` and fold `.` and `..` components without
/// touching the filesystem.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_path_exists() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("test.txt"), "hello").unwrap();
        assert!(path_exists(tmp.path(), "test.txt"));
        assert!(!path_exists(tmp.path(), "missing.txt"));
    }

    #[test]
    fn test_find_manifest() {
        let tmp = TempDir::new().unwrap();
        assert!(find_manifest(tmp.path()).is_none());
        fs::write(tmp.path().join("package.json"), "{}").unwrap();
        assert_eq!(
            find_manifest(tmp.path()),
            Some(tmp.path().join("package.json"))
        );
    }

    #[test]
    fn test_find_manifest_is_not_recursive() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("app")).unwrap();
        fs::write(tmp.path().join("app/package.json"), "{}").unwrap();
        assert!(find_manifest(tmp.path()).is_none());
    }

    #[test]
    fn test_resolve_relative() {
        let base = Path::new("/work/project");
        assert_eq!(
            resolve(base, Path::new("./my-app/package.json")),
            PathBuf::from("/work/project/my-app/package.json")
        );
        assert_eq!(
            resolve(base, Path::new("../other")),
            PathBuf::from("/work/other")
        );
    }

    #[test]
    fn test_resolve_absolute_ignores_base() {
        assert_eq!(
            resolve(Path::new("/work"), Path::new("/srv/app/./package.json")),
            PathBuf::from("/srv/app/package.json")
        );
    }
}
