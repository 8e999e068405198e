use axum::Json;
use axum::response::Html;

use crate::types::api::AboutResponse;

// Static stand-in for the original template-rendered landing page.
const INDEX_PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Quill</title></head>
  <body>
    <h1>Quill blog API</h1>
    <ul>
      <li>POST /create — create a post</li>
      <li>GET /posts — list posts</li>
      <li>GET | PUT | DELETE /post/&lt;id&gt;</li>
      <li>POST /newuser — register</li>
      <li>POST /login — obtain an access token</li>
    </ul>
  </body>
</html>
"#;

pub async fn index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

pub async fn about() -> Json<AboutResponse> {
    Json(AboutResponse {
        about: "this is an API for a blog. Get / to read more.".to_string(),
    })
}
