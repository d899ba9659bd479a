use axum::response::Html;

/// Creation page, compiled into the binary. Served at the root path
/// and for unresolved keys.
pub(crate) const CREATE_PAGE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>burrow</title>
  </head>
  <body>
    <h1>burrow</h1>
    <p>Register a short link, then follow it at /&lt;link&gt;.</p>
    <form method="post" action="/">
      <label>link <input type="text" name="link" placeholder="go"></label>
      <label>dest <input type="text" name="dest" placeholder="golang.org"></label>
      <button type="submit">save</button>
    </form>
  </body>
</html>
"#;

pub async fn create_page_handler() -> Html<&'static str> {
    Html(CREATE_PAGE)
}
