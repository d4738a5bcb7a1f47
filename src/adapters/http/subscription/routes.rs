//! Axum router configuration for subscription endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    calculate_cost, create_subscription, delete_subscription, get_subscription, health,
    list_subscriptions, update_subscription, SubscriptionAppState,
};

/// Create the subscription API router.
///
/// # Routes
///
/// - `POST /subscription` - Create a subscription
/// - `GET /subscription?limit=&offset=` - List a page of subscriptions
/// - `PATCH /subscription` - Replace a subscription
/// - `GET /subscription/:id` - Load a subscription
/// - `DELETE /subscription/:id` - Delete a subscription
/// - `POST /subscription/cost` - Cost over a window of months
/// - `GET /health` - Liveness probe
pub fn subscription_router() -> Router<SubscriptionAppState> {
    Router::new()
        .route(
            "/subscription",
            post(create_subscription)
                .get(list_subscriptions)
                .patch(update_subscription),
        )
        .route("/subscription/cost", post(calculate_cost))
        .route(
            "/subscription/:id",
            get(get_subscription).delete(delete_subscription),
        )
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemorySubscriptionRepository;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let repository = Arc::new(InMemorySubscriptionRepository::new());
        subscription_router().with_state(SubscriptionAppState::new(repository))
    }

    fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn cost_path_is_not_captured_as_id() {
        let response = app()
            .oneshot(json_request(
                Method::POST,
                "/subscription/cost",
                r#"{"service_name":"Yandex Plus","user_id":"dceb1963-e152-47ff-a562-81a360627309","start_date":"01-2025","end_date":"03-2025"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/subscription/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INCORRECT_VALUE");
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let response = app()
            .oneshot(json_request(Method::POST, "/subscription", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    }

    #[tokio::test]
    async fn missing_required_field_is_bad_request() {
        let response = app()
            .oneshot(json_request(
                Method::POST,
                "/subscription",
                r#"{"service_name":"Yandex Plus","price":400}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_user_id_is_incorrect_value() {
        let response = app()
            .oneshot(json_request(
                Method::POST,
                "/subscription",
                r#"{"service_name":"Yandex Plus","price":400,"user_id":"nope","start_date":"01-2025"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INCORRECT_VALUE");
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method(Method::DELETE)
                    .uri("/subscription/7")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn non_positive_ids_are_not_found() {
        for (method, uri) in [
            (Method::GET, "/subscription/0"),
            (Method::GET, "/subscription/-3"),
            (Method::DELETE, "/subscription/0"),
        ] {
            let response = app()
                .oneshot(
                    Request::builder()
                        .method(method.clone())
                        .uri(uri)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{} {}", method, uri);
            assert_eq!(body_json(response).await["code"], "NOT_FOUND");
        }
    }

    #[tokio::test]
    async fn update_with_zero_id_is_not_found() {
        let response = app()
            .oneshot(json_request(
                Method::PATCH,
                "/subscription",
                r#"{"id":0,"service_name":"Yandex Plus","price":400,"user_id":"dceb1963-e152-47ff-a562-81a360627309","start_date":"01-2025"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn update_with_zero_id_and_bad_date_is_incorrect_date() {
        let response = app()
            .oneshot(json_request(
                Method::PATCH,
                "/subscription",
                r#"{"id":0,"service_name":"Yandex Plus","price":400,"user_id":"dceb1963-e152-47ff-a562-81a360627309","start_date":"13-2025"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "INCORRECT_DATE");
    }
}
