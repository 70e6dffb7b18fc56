use poem::{handler, IntoResponse};

const CACHE_CONTROL: &str = "no-cache";

#[handler]
pub async fn get_submit_js() -> impl IntoResponse {
    include_str!("static/submit.js")
        .with_content_type("application/javascript")
        .with_header("Cache-Control", CACHE_CONTROL)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::predictor::testing::FakePredictor;
    use crate::prelude::*;
    use crate::web::test::create_test_client;

    #[tokio::test]
    async fn get_submit_js_ok() -> Result {
        let client = create_test_client(Arc::new(FakePredictor::failing()));
        let response = client.get("/static/submit.js").send().await;
        response.assert_status_is_ok();
        response.assert_content_type("application/javascript");
        let script = response.0.into_body().into_string().await?;
        assert!(script.contains("event.preventDefault()"));
        assert!(script.contains(r#"getElementById("result")"#));
        Ok(())
    }
}
