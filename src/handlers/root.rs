use axum::http::{Method, StatusCode};

use crate::{
    error::{AppError, AppResult},
    models::{EndpointDescriptor, ENDPOINTS},
    response::Reply,
};

pub fn handle(method: &Method) -> AppResult<Reply> {
    match *method {
        Method::GET => Ok(Reply::html(StatusCode::OK, landing_page(&ENDPOINTS))),
        _ => Err(AppError::MethodNotAllowed),
    }
}

/// Escapes `& < > " '` for embedding in element content or attributes.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

fn table_row(ep: &EndpointDescriptor) -> String {
    format!(
        "<tr><td><code>{}</code></td><td><code>{}</code></td><td>{}</td></tr>",
        escape_html(ep.method),
        escape_html(ep.path),
        escape_html(ep.description),
    )
}

pub fn landing_page(endpoints: &[EndpointDescriptor]) -> String {
    let rows: String = endpoints.iter().map(table_row).collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Sample API</title>
  <style>
    body {{ font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif; margin: 32px; color: #1f2933; }}
    h1 {{ margin-bottom: 4px; }}
    p  {{ margin-top: 4px; color: #52606d; }}
    table {{ border-collapse: collapse; margin-top: 16px; width: 100%; max-width: 720px; }}
    th, td {{ border: 1px solid #e0e7ef; padding: 10px; text-align: left; }}
    th {{ background: #f7f9fc; }}
    code {{ background: #f1f5f9; padding: 2px 4px; border-radius: 4px; }}
  </style>
</head>
<body>
  <h1>Sample API</h1>
  <p>Available endpoints and methods:</p>
  <table>
    <thead>
      <tr><th>Method</th><th>Path</th><th>Description</th></tr>
    </thead>
    <tbody>
      {rows}
    </tbody>
  </table>
</body>
</html>
"#
    )
}
