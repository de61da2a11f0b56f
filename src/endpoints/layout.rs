use crate::utils::html::html_escape;

pub(super) const LEAFLET_HEAD: &str = r#"<link
      rel="stylesheet"
      href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css"
      integrity="sha256-p4NxAoJBhIIN+hmNHrzRCf9tD/miZyoHS5obTRR9BMY="
      crossorigin=""
    />
    <script
      src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"
      integrity="sha256-20nQCchB9co0qIjJZRGuk2/Z9VM+kNiyxNV1lvTlZBo="
      crossorigin=""
    ></script>"#;

pub(super) const PAGE_CSS: &str = r#"
      html, body { margin: 0; padding: 0; font-family: sans-serif; }
      .layout { display: flex; min-height: 100vh; }
      .sidebar {
        width: 22rem;
        flex-shrink: 0;
        background-color: #D0EFFF;
        padding: 1rem;
        font-size: 1.1em;
      }
      .sidebar select { width: 100%; font-size: 1em; margin: 0.25rem 0 0.5rem 0; }
      .sidebar form.inline { display: inline; }
      .sidebar ul { padding-left: 1.2rem; }
      .sidebar ul button {
        background: none;
        border: none;
        padding: 0;
        color: #0b5394;
        text-decoration: underline;
        cursor: pointer;
        font-size: 1em;
      }
      .filter-title { font-size: 2.5em; padding: 10px 0; }
      .main { flex-grow: 1; max-width: 80%; padding: 1rem; }
      h1 { margin-top: 0; }
      #map { height: 450px; width: 80%; margin: 0 auto 1cm auto; }
      .narrative {
        width: 80%;
        font-size: 1.2em;
        text-align: justify;
        padding: 10px;
        border: none;
      }
      .gap { margin-top: 1cm; }
      figure { margin: 1.5cm 0 1cm 0; }
      figure img { max-width: 70%; height: auto; }
      .dataframe th, .dataframe td {
        text-align: left;
        padding: 10px;
        font-size: 1.25em;
        font-weight: bold;
      }
      .dataframe.table-no-border th, .dataframe.table-no-border td { border: none; }
      .dataframe th { width: 30%; }
      .dataframe td { width: 70%; }
      .triangle { width: 80%; text-align: center; padding: 10px; }
      .triangle img { max-width: 70%; height: auto; }
      .error { padding: 2rem; color: #8b0000; font-size: 1.2em; }
"#;

/// Wrap sidebar and main content in the full HTML document.
pub(super) fn page_shell(title: &str, extra_css: Option<&str>, sidebar: &str, main: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
  <html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0"/>
    <title>{title}</title>
    {leaflet}
    <style>{css}</style>
    <style>{extra}</style>
  </head>
  <body>
    <div class="layout">
      <aside class="sidebar">{sidebar}</aside>
      <main class="main">{main}</main>
    </div>
  </body>
  </html>
"#,
        title = html_escape(title),
        leaflet = LEAFLET_HEAD,
        css = PAGE_CSS,
        extra = extra_css.unwrap_or_default(),
    )
}
