use std::path::Path;

pub fn relative_path(base: &Path, path: &Path) -> String {
    match path.strip_prefix(base) {
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_path_nested() {
        let base = PathBuf::from("/project");
        let path = PathBuf::from("/project/src/graph/axes.cpp");
        assert_eq!(relative_path(&base, &path), "src/graph/axes.cpp");
    }

    #[test]
    fn test_relative_path_outside_base_falls_back_to_full() {
        let base = PathBuf::from("/project");
        let path = PathBuf::from("/elsewhere/file.txt");
        assert_eq!(relative_path(&base, &path), "/elsewhere/file.txt");
    }
}
