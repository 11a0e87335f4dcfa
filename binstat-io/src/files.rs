use std::path::PathBuf;

use anyhow::Result;
use glob::glob;

///
/// An ordered list of log files to process, resolved from a glob pattern.
///
/// A bare directory is accepted as shorthand for `<dir>/*.csv`, matching the
/// folder-scan workflow this tool is usually run with.
///
pub struct LogFileGlob {
    curr: usize,
    files: Vec<PathBuf>,
}

impl LogFileGlob {
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = if std::path::Path::new(pattern).is_dir() {
            format!("{}/*.csv", pattern.trim_end_matches('/'))
        } else {
            pattern.to_string()
        };

        let files = glob(&pattern)?;
        let mut files = files
            .map(|f| match f {
                Ok(path) => Ok(path),
                Err(_) => anyhow::bail!(format!("Error reading file entry: {:?}", f)),
            })
            .collect::<Result<Vec<_>>>()?;
        // glob order is filesystem dependent; sources must be processed in a
        // stable order so first-seen test names are reproducible
        files.sort();
        let curr = 0_usize;
        Ok(LogFileGlob { files, curr })
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Iterator for LogFileGlob {
    type Item = PathBuf;
    fn next(&mut self) -> Option<Self::Item> {
        let result = self.files.get(self.curr).cloned();
        self.curr += 1;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs::File;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_directory_expands_to_csv_glob() {
        let tempdir = tempfile::tempdir().unwrap();
        File::create(tempdir.path().join("b.csv")).unwrap();
        File::create(tempdir.path().join("a.csv")).unwrap();
        File::create(tempdir.path().join("notes.txt")).unwrap();

        let files = LogFileGlob::new(tempdir.path().to_str().unwrap()).unwrap();
        let names: Vec<String> = files
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.csv", "b.csv"]);
    }

    #[rstest]
    fn test_empty_match_is_ok_but_empty() {
        let tempdir = tempfile::tempdir().unwrap();
        let pattern = format!("{}/*.csv", tempdir.path().display());
        let files = LogFileGlob::new(&pattern).unwrap();
        assert!(files.is_empty());
    }
}
