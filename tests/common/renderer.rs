use async_trait::async_trait;
use inertia_pages::{BoxError, InertiaSession, Renderer, PAGE_VIEW_DATA_KEY};
use serde_json::{Map, Value};
use std::path::Path;

pub const LAYOUT_PATH: &str = "tests/common/root_layout.html";

/// Reads the root layout from `tests/common/<view>.html` and injects the page object in it.
pub struct LayoutRenderer;

#[async_trait]
impl Renderer for LayoutRenderer {
    async fn render(
        &self,
        view: &str,
        data: Map<String, Value>,
        session: &InertiaSession,
    ) -> Result<Vec<u8>, BoxError> {
        let path = Path::new("tests/common").join(format!("{view}.html"));
        let html = tokio::fs::read_to_string(&path).await?;

        let page = serde_json::to_string(&data[PAGE_VIEW_DATA_KEY])?;
        let title = data.get("title").and_then(Value::as_str).unwrap_or("Inertia");

        let head = if session.is_ssr_enabled() {
            "<meta name=\"ssr\" content=\"true\">"
        } else {
            ""
        };

        let html = html
            .replace("%-title-%", title)
            .replace("%-inertia_head-%", head)
            .replace(
                "%-inertia_body-%",
                &format!("<div id=\"app\" data-page='{page}'></div>"),
            );

        Ok(html.into_bytes())
    }
}

pub fn expected_render(title: &str, page: &Value) -> String {
    let layout = std::fs::read_to_string(LAYOUT_PATH).unwrap();

    layout
        .replace("%-title-%", title)
        .replace("%-inertia_head-%", "")
        .replace(
            "%-inertia_body-%",
            &format!(
                "<div id=\"app\" data-page='{}'></div>",
                serde_json::to_string(page).unwrap()
            ),
        )
}
