// Pure HTML rendering for markmap pages and the table of contents.
// File-system access lives in the CLI crate.

mod escape;
pub mod index;
pub mod page;

pub use escape::html_escape;
pub use index::{page_href, render_index};
pub use page::{extract_title, html_filename, render_page};

/// Script tag source for the client-side mind-map renderer
pub const MARKMAP_AUTOLOADER_URL: &str = "https://cdn.jsdelivr.net/npm/markmap-autoloader@latest";

/// File name of the generated table of contents
pub const INDEX_FILE_NAME: &str = "index.html";
