use crate::escape::html_escape;
use crate::{INDEX_FILE_NAME, MARKMAP_AUTOLOADER_URL};
use markmap_kit_core::{Error, Result};
use std::path::Path;

const HEADING_MARKER: &str = "# ";

/// Derive the display title from a Markdown document.
///
/// The title is the first line with a leading `# ` removed. Lines without the
/// marker are returned verbatim and an empty document yields an empty title.
pub fn extract_title(markdown: &str) -> String {
    let first_line = markdown
        .trim_start_matches('\u{feff}')
        .lines()
        .next()
        .unwrap_or("");

    first_line
        .strip_prefix(HEADING_MARKER)
        .unwrap_or(first_line)
        .to_string()
}

/// Output file name for a Markdown source: `notes/intro.md` -> `intro.html`
pub fn html_filename(source: &Path) -> Result<String> {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| {
            Error::InvalidSource(format!(
                "cannot derive an output name from {}",
                source.display()
            ))
        })?;

    Ok(format!("{}.html", stem))
}

/// Render one mind-map page.
///
/// `markdown` is embedded byte-for-byte in a `text/template` script block; the
/// autoloader parses and draws it in the browser.
///
/// A body containing `</script>` closes the template block early and breaks
/// the rest of the page. Such sources are not rewritten.
pub fn render_page(title: &str, markdown: &str) -> String {
    let escaped_title = html_escape(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title} - Markmap</title>
  <style>
    body {{
      margin: 0;
      padding: 0;
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
    }}
    .header {{
      background: #2c3e50;
      color: white;
      padding: 1rem 2rem;
      box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }}
    .header h1 {{
      margin: 0;
      font-size: 1.5rem;
    }}
    .header a {{
      color: #3498db;
      text-decoration: none;
      font-size: 0.9rem;
    }}
    .header a:hover {{
      text-decoration: underline;
    }}
    .markmap {{
      position: relative;
      width: 100%;
      height: calc(100vh - 80px);
    }}
    .markmap > svg {{
      width: 100%;
      height: 100%;
    }}
  </style>
</head>
<body>
  <div class="header">
    <h1>{title}</h1>
    <a href="{index}">← Back to contents</a>
  </div>

  <div class="markmap">
    <script type="text/template">
{content}
    </script>
  </div>

  <script src="{autoloader}"></script>
</body>
</html>
"#,
        title = escaped_title,
        index = INDEX_FILE_NAME,
        content = markdown,
        autoloader = MARKMAP_AUTOLOADER_URL,
    )
}
