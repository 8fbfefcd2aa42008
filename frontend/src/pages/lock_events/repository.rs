use super::utils::PAGE_SIZE;
use crate::api::{ApiClient, ApiError, LockEvent, Page};

pub async fn fetch_events(api: &ApiClient, page: u32) -> Result<Page<LockEvent>, ApiError> {
    api.list_lock_events(page, PAGE_SIZE, None).await
}

#[cfg(all(test, not(coverage)))]
mod tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use serde_json::json;

    #[tokio::test]
    async fn fetches_requested_page() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/lock-events").query_param("page", "2");
            then.status(200)
                .json_body(json!({ "content": [], "totalElements": 100, "totalPages": 2 }));
        });
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let page = fetch_events(&api, 2).await.unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, 100);
    }

    #[tokio::test]
    async fn surfaces_load_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/lock-events");
            then.status(502).json_body(json!({
                "error": "Failed to load lock events",
                "code": "UPSTREAM_ERROR"
            }));
        });
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let err = fetch_events(&api, 0).await.unwrap_err();
        assert_eq!(err.error, "Failed to load lock events");
    }
}
