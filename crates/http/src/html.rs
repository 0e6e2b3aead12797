//! Minimal HTML document shell shared by every page.

use axum::response::Html;

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:0;background:#f7f7f9}\
.header{background:#2d3748;color:#fff;padding:1rem 0}\
.header nav a{color:#fff;margin-right:1rem}\
.container{max-width:960px;margin:0 auto;padding:0 1rem}\
.book-grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(260px,1fr));gap:1rem}\
.book-card{background:#fff;border-radius:6px;padding:1rem}\
.error{color:#c53030;background:#fff5f5;padding:1rem;border-radius:6px}\
.btn{display:inline-block;padding:.4rem .8rem;border-radius:4px;text-decoration:none}";

/// Escape text for inclusion in HTML content or a quoted attribute.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Wrap already-rendered body markup in the catalog layout.
pub fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<title>{title} - Book Catalog</title><style>{STYLE}</style></head><body>\
<header class=\"header\"><div class=\"container\"><h1>📚 Book Catalog</h1>\
<nav><a href=\"/\">🏠 Home</a><a href=\"/add\">➕ Add Book</a></nav></div></header>\
<main class=\"main\"><div class=\"container\">{body}</div></main></body></html>",
        title = escape(title),
    ))
}
