// SPDX-License-Identifier: AGPL-3.0-or-later

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::Result;
use axum::extract::Extension;
use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use http::header::CONTENT_TYPE;
use log::{debug, info};
use tower_http::cors::{Any, CorsLayer};

use crate::bus::ServiceSender;
use crate::context::Context;
use crate::http::api::{handle_graphql_playground, handle_graphql_query, handle_ingest_log};
use crate::http::context::HttpServiceContext;
use crate::manager::Shutdown;

/// Route to the GraphQL playground and API.
const GRAPHQL_ROUTE: &str = "/graphql";

/// Route receiving raw logs.
pub const LOGS_ROUTE: &str = "/logs";

/// Build HTTP server with log ingest route and GraphQL API.
pub fn build_server(http_context: HttpServiceContext) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .allow_credentials(false)
        .allow_origin(Any);

    Router::new()
        .route(LOGS_ROUTE, post(handle_ingest_log))
        .route(
            GRAPHQL_ROUTE,
            get(|| handle_graphql_playground(GRAPHQL_ROUTE)).post(handle_graphql_query),
        )
        .layer(cors)
        .layer(Extension(http_context))
}

/// Start HTTP server.
pub async fn http_service(context: Context, signal: Shutdown, _tx: ServiceSender) -> Result<()> {
    let http_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), context.config.http_port);

    let http_context = HttpServiceContext::new(context.schema.clone(), context.indexer.clone());

    let server = axum::Server::try_bind(&http_address)?
        .serve(build_server(http_context).into_make_service());
    info!("HTTP service listening on {}", server.local_addr());

    server
        .with_graceful_shutdown(async {
            debug!("HTTP service is ready");
            signal.await.ok();
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use http::header::HeaderValue;
    use http::StatusCode;
    use serde_json::{json, Value};

    use crate::bus::create_service_sender;
    use crate::events::{ParamKind, RawParam};
    use crate::http::HttpServiceContext;
    use crate::indexer::{EntityKind, EventHandler, Indexer};
    use crate::test_utils::{
        http_test_client, notarized_log, retrieved_log, test_runner, TestClient, TestNode,
        TRANSACTION_HASH,
    };

    use super::build_server;

    #[test]
    fn graphql_endpoint() {
        test_runner(|node: TestNode| async move {
            let client = http_test_client(&node);

            let response = client
                .post("/graphql")
                .json(&json!({
                    "query": "{ __schema { __typename } }",
                }))
                .send()
                .await;

            assert_eq!(
                response.text().await,
                json!({
                    "data": {
                        "__schema": {
                            "__typename": "__Schema"
                        }
                    }
                })
                .to_string()
            );
        })
    }

    #[test]
    fn graphql_playground() {
        test_runner(|node: TestNode| async move {
            let client = http_test_client(&node);
            let response = client.get("/graphql").send().await;

            assert_eq!(response.status(), StatusCode::OK);
            assert!(response.text().await.contains("GraphQL Playground"));
        })
    }

    #[test]
    fn cors_allows_any_origin() {
        test_runner(|node: TestNode| async move {
            let client = http_test_client(&node);
            let response = client
                .get("/graphql")
                .header("Origin", "http://notary.example")
                .send()
                .await;

            assert_eq!(
                response.headers()["access-control-allow-origin"],
                HeaderValue::from_static("*")
            );
        })
    }

    #[test]
    fn ingest_log() {
        test_runner(|node: TestNode| async move {
            let client = http_test_client(&node);
            let log = notarized_log(TRANSACTION_HASH, 1, "0xdeadbeef", "u", "d");

            let response = client.post("/logs").json(&log).send().await;
            assert_eq!(response.status(), StatusCode::OK);

            let body: Value = response.json().await;
            assert_eq!(
                body,
                json!({
                    "id": format!("{}00000001", TRANSACTION_HASH),
                    "kind": "DocumentNotarized",
                })
            );

            let count = node
                .context
                .store
                .count(EntityKind::DocumentNotarized)
                .await
                .unwrap();
            assert_eq!(count, 1);
        })
    }

    #[test]
    fn ignore_logs_of_other_contracts() {
        test_runner(|node: TestNode| async move {
            let contract = "0x00000000000000000000000000000000000000cc".parse().unwrap();
            let indexer = Indexer::new(
                EventHandler::new(node.context.store.clone(), Some(contract)),
                create_service_sender(16),
            );
            let context = HttpServiceContext::new(node.context.schema.clone(), indexer);
            let client = TestClient::new(build_server(context));

            let log = retrieved_log(TRANSACTION_HASH, 0, "0x01");
            let response = client.post("/logs").json(&log).send().await;
            assert_eq!(response.status(), StatusCode::OK);

            let body: Value = response.json().await;
            assert_eq!(body, json!({ "id": null }));
        })
    }

    #[test]
    fn reject_malformed_log() {
        test_runner(|node: TestNode| async move {
            let client = http_test_client(&node);

            let mut log = retrieved_log(TRANSACTION_HASH, 0, "0x01");
            log.params.push(RawParam::new(ParamKind::String, "extra"));

            let response = client.post("/logs").json(&log).send().await;
            assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

            let body: Value = response.json().await;
            assert_eq!(body["retryable"], json!(false));
        })
    }

    #[test]
    fn store_failure_is_retryable() {
        test_runner(|node: TestNode| async move {
            let client = http_test_client(&node);

            // Closing the pool makes every following write fail
            node.context.store.pool.close().await;

            let log = retrieved_log(TRANSACTION_HASH, 0, "0x01");
            let response = client.post("/logs").json(&log).send().await;
            assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        })
    }
}
