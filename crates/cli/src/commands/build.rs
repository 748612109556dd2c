use anyhow::{Context, Result};
use markmap_kit_core::{BuildPaths, BuildSummary, Error, PageInfo};
use markmap_kit_generator::{
    INDEX_FILE_NAME, extract_title, html_filename, render_index, render_page,
};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MARKDOWN_EXTENSION: &str = "md";

/// Build every mind-map page and the index.
///
/// Pages are generated in source-file order first, then `index.html` is
/// written from the collected page list. Any I/O failure aborts the run.
///
/// # Arguments
///
/// * `paths` - Source and output directories; the output directory must exist
pub fn run(paths: &BuildPaths) -> Result<BuildSummary> {
    println!("🗺️  Generating markmap HTML files...");
    println!("   Source: {}", paths.source_dir.display());
    println!("   Output: {}", paths.output_dir.display());
    println!();

    let pages = generate_pages(&paths.source_dir, &paths.output_dir)?;

    println!();
    let index_path = generate_index(&pages, &paths.output_dir)?;

    println!();
    println!("✅ All done! {} markmap files created.", pages.len());
    println!("📂 Output directory: {}", paths.output_dir.display());
    println!("🌐 Open: {}", index_path.display());

    Ok(BuildSummary { pages, index_path })
}

/// Find `.md` files directly inside `dir`, sorted by file name
pub fn scan_markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    require_dir(dir)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry =
            entry.with_context(|| format!("Failed to read directory {}", dir.display()))?;

        if !entry.file_type().is_file() {
            continue;
        }

        if entry.path().extension().is_some_and(|ext| ext == MARKDOWN_EXTENSION) {
            files.push(entry.into_path());
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    Ok(files)
}

/// Convert every Markdown file in `source_dir`, returning page info in source order
pub fn generate_pages(source_dir: &Path, output_dir: &Path) -> Result<Vec<PageInfo>> {
    require_dir(output_dir)?;

    scan_markdown_files(source_dir)?
        .iter()
        .map(|source| generate_page(source, output_dir))
        .collect()
}

/// Convert one Markdown file into `<output_dir>/<stem>.html`
pub fn generate_page(source: &Path, output_dir: &Path) -> Result<PageInfo> {
    let markdown = fs::read_to_string(source)
        .with_context(|| format!("Failed to read {}", source.display()))?;

    let title = extract_title(&markdown);
    let filename = html_filename(source)?;
    let html = render_page(&title, &markdown);

    let output_path = output_dir.join(&filename);
    fs::write(&output_path, html)
        .with_context(|| format!("Failed to write {}", output_path.display()))?;

    println!("Created: {}", filename);

    Ok(PageInfo::new(filename, title))
}

/// Write `index.html` linking every page, returning its path
pub fn generate_index(pages: &[PageInfo], output_dir: &Path) -> Result<PathBuf> {
    require_dir(output_dir)?;

    let index_path = output_dir.join(INDEX_FILE_NAME);
    fs::write(&index_path, render_index(pages))
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    println!("Created: {}", INDEX_FILE_NAME);

    Ok(index_path)
}

pub(crate) fn require_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(Error::MissingDirectory(path.to_path_buf()).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    /// Source and output directories side by side in one temp dir
    fn setup(sources: &[(&str, &str)]) -> (TempDir, BuildPaths) {
        let dir = TempDir::new().unwrap();
        let paths = BuildPaths {
            source_dir: dir.path().join("md"),
            output_dir: dir.path().join("markmap"),
        };
        fs::create_dir(&paths.source_dir).unwrap();
        fs::create_dir(&paths.output_dir).unwrap();

        for (name, content) in sources {
            fs::write(paths.source_dir.join(name), content).unwrap();
        }

        (dir, paths)
    }

    fn output_names(paths: &BuildPaths) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&paths.output_dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_build_two_pages() {
        let (_dir, paths) = setup(&[("b.md", "# Beta\n- two\n"), ("a.md", "# Alpha\n- one\n")]);

        let summary = run(&paths).unwrap();

        assert_eq!(
            summary.pages,
            vec![PageInfo::new("a.html", "Alpha"), PageInfo::new("b.html", "Beta")]
        );
        assert_eq!(summary.index_path, paths.output_dir.join("index.html"));
        assert_eq!(output_names(&paths), vec!["a.html", "b.html", "index.html"]);

        let index = fs::read_to_string(&summary.index_path).unwrap();
        assert_eq!(index.matches(r#"class="toc-link""#).count(), 2);
        let alpha = index
            .find(r#"<a href="a.html" class="toc-link">Alpha</a>"#)
            .unwrap();
        let beta = index
            .find(r#"<a href="b.html" class="toc-link">Beta</a>"#)
            .unwrap();
        assert!(alpha < beta);
    }

    #[test]
    fn test_build_empty_source_dir() {
        let (_dir, paths) = setup(&[]);

        let summary = run(&paths).unwrap();

        assert!(summary.pages.is_empty());
        assert_eq!(output_names(&paths), vec!["index.html"]);
        let index = fs::read_to_string(&summary.index_path).unwrap();
        assert_eq!(index.matches(r#"class="toc-link""#).count(), 0);
    }

    #[test]
    fn test_build_page_contains_raw_markdown() {
        let markdown = "# Tools\n\n## Editors & <IDEs>\n- vim\n";
        let (_dir, paths) = setup(&[("tools.md", markdown)]);

        run(&paths).unwrap();

        let page = fs::read_to_string(paths.output_dir.join("tools.html")).unwrap();
        assert!(page.contains(markdown));
        assert!(page.contains("<h1>Tools</h1>"));
    }

    #[test]
    fn test_build_is_byte_identical_on_rerun() {
        let (_dir, paths) = setup(&[("a.md", "# Alpha\n"), ("b.md", "Beta without marker\n")]);

        run(&paths).unwrap();
        let first_page = fs::read(paths.output_dir.join("b.html")).unwrap();
        let first_index = fs::read(paths.output_dir.join("index.html")).unwrap();

        run(&paths).unwrap();
        assert_eq!(fs::read(paths.output_dir.join("b.html")).unwrap(), first_page);
        assert_eq!(fs::read(paths.output_dir.join("index.html")).unwrap(), first_index);
    }

    #[test]
    fn test_scan_ignores_non_markdown_and_directories() {
        let (_dir, paths) = setup(&[
            ("notes.md", "# Notes"),
            ("readme.txt", "text"),
            ("draft.markdown", "# Draft"),
            ("upper.MD", "# Upper"),
        ]);
        fs::create_dir(paths.source_dir.join("folder.md")).unwrap();
        fs::create_dir(paths.source_dir.join("nested")).unwrap();
        fs::write(paths.source_dir.join("nested").join("deep.md"), "# Deep").unwrap();

        let files = scan_markdown_files(&paths.source_dir).unwrap();

        assert_eq!(files, vec![paths.source_dir.join("notes.md")]);
    }

    #[test]
    fn test_scan_sorts_lexicographically() {
        let (_dir, paths) = setup(&[
            ("10-late.md", ""),
            ("02-early.md", ""),
            ("B.md", ""),
            ("a.md", ""),
        ]);

        let names: Vec<String> = scan_markdown_files(&paths.source_dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["02-early.md", "10-late.md", "B.md", "a.md"]);
    }

    #[test]
    fn test_page_count_matches_source_count() {
        let sources: Vec<(String, String)> = (0..5)
            .map(|i| (format!("page{}.md", i), format!("# Page {}\n", i)))
            .collect();
        let borrowed: Vec<(&str, &str)> = sources
            .iter()
            .map(|(n, c)| (n.as_str(), c.as_str()))
            .collect();
        let (_dir, paths) = setup(&borrowed);

        let summary = run(&paths).unwrap();

        assert_eq!(summary.pages.len(), 5);
        assert_eq!(output_names(&paths).len(), 6);
        assert_eq!(summary.pages[3], PageInfo::new("page3.html", "Page 3"));
    }

    #[test]
    fn test_missing_source_dir_fails() {
        let (_dir, paths) = setup(&[]);
        fs::remove_dir(&paths.source_dir).unwrap();

        let err = run(&paths).unwrap_err();
        assert!(err.to_string().contains("Directory does not exist"));
    }

    #[test]
    fn test_missing_output_dir_fails_before_writing() {
        let (_dir, paths) = setup(&[("a.md", "# Alpha")]);
        fs::remove_dir(&paths.output_dir).unwrap();

        let err = run(&paths).unwrap_err();
        assert!(err.to_string().contains("Directory does not exist"));
        assert!(!paths.output_dir.exists());
    }

    #[test]
    fn test_unreadable_file_fails_run() {
        // Invalid UTF-8 cannot be read as text
        let (_dir, paths) = setup(&[]);
        fs::write(paths.source_dir.join("bad.md"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let err = run(&paths).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read"));
        assert!(!paths.output_dir.join("index.html").exists());
    }

    #[test]
    fn test_write_failure_fails_run() {
        let (_dir, paths) = setup(&[("a.md", "# Alpha")]);
        // A directory occupying the page's output name makes the write fail
        fs::create_dir(paths.output_dir.join("a.html")).unwrap();

        let err = run(&paths).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to write"));
        assert!(!paths.output_dir.join("index.html").exists());
    }

    #[test]
    fn test_generate_index_standalone() {
        let (_dir, paths) = setup(&[]);
        let pages = vec![PageInfo::new("x.html", "X")];

        let index_path = generate_index(&pages, &paths.output_dir).unwrap();

        let html = fs::read_to_string(index_path).unwrap();
        assert!(html.contains(r#"<a href="x.html" class="toc-link">X</a>"#));
    }
}
