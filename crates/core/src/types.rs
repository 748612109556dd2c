use std::path::PathBuf;

/// One generated mind-map page, as listed in the table of contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Output file name relative to the output directory (e.g. "intro.html")
    pub filename: String,
    /// Display title taken from the first line of the source
    pub title: String,
}

impl PageInfo {
    pub fn new(filename: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            title: title.into(),
        }
    }
}

/// Result of a full build run
#[derive(Debug, Clone)]
pub struct BuildSummary {
    /// Pages in source-file order
    pub pages: Vec<PageInfo>,
    pub index_path: PathBuf,
}
