use crate::escape::html_escape;
use markmap_kit_core::PageInfo;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that would change the meaning of a relative link path
const HREF_PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`');

/// Relative link to a generated page, safe to place in an `href` attribute
pub fn page_href(filename: &str) -> String {
    html_escape(&utf8_percent_encode(filename, HREF_PATH).to_string())
}

/// Render the table of contents linking every generated page, in the given order
pub fn render_index(pages: &[PageInfo]) -> String {
    let toc_items = pages
        .iter()
        .map(|page| {
            format!(
                r#"        <li class="toc-item">
          <a href="{}" class="toc-link">{}</a>
        </li>"#,
                page_href(&page.filename),
                html_escape(&page.title)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Markmap - Contents</title>
  <style>
    body {{
      margin: 0;
      padding: 0;
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif;
      background: #f5f6fa;
    }}
    .container {{
      max-width: 900px;
      margin: 0 auto;
      padding: 2rem;
    }}
    .header {{
      background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
      color: white;
      padding: 3rem 2rem;
      border-radius: 10px;
      margin-bottom: 2rem;
      box-shadow: 0 10px 30px rgba(0,0,0,0.1);
    }}
    .header h1 {{
      margin: 0 0 0.5rem 0;
      font-size: 2rem;
    }}
    .header p {{
      margin: 0;
      opacity: 0.9;
      font-size: 1.1rem;
    }}
    .toc {{
      background: white;
      border-radius: 10px;
      padding: 2rem;
      box-shadow: 0 2px 10px rgba(0,0,0,0.05);
    }}
    .toc h2 {{
      margin-top: 0;
      color: #2c3e50;
      font-size: 1.5rem;
      border-bottom: 2px solid #667eea;
      padding-bottom: 0.5rem;
    }}
    .toc-list {{
      list-style: none;
      padding: 0;
      margin: 1rem 0 0 0;
    }}
    .toc-item {{
      margin-bottom: 0.5rem;
    }}
    .toc-link {{
      display: block;
      padding: 1rem 1.5rem;
      background: #f8f9fa;
      border-radius: 8px;
      text-decoration: none;
      color: #2c3e50;
      transition: all 0.3s ease;
      border-left: 4px solid transparent;
    }}
    .toc-link:hover {{
      background: #667eea;
      color: white;
      border-left-color: #764ba2;
      transform: translateX(5px);
    }}
    .footer {{
      text-align: center;
      margin-top: 2rem;
      color: #7f8c8d;
      font-size: 0.9rem;
    }}
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <h1>🗺️ Mind Maps</h1>
      <p>Each page renders a Markdown outline as an interactive mind map</p>
    </div>

    <div class="toc">
      <h2>📚 Contents</h2>
      <ul class="toc-list">
{}
      </ul>
    </div>

    <div class="footer">
      <p>Generated by markmap-kit</p>
    </div>
  </div>
</body>
</html>
"#,
        toc_items
    )
}
