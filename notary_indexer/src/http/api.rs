// SPDX-License-Identifier: AGPL-3.0-or-later

use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::{Extension, Json};
use axum::http::StatusCode;
use axum::response::{self, IntoResponse, Response};
use log::{error, warn};
use serde::Serialize;
use serde_json::json;

use crate::events::RawLog;
use crate::http::context::HttpServiceContext;
use crate::indexer::{EntityKind, IndexerError};
use crate::types::EntityId;

/// Handle GraphQL playground requests at the given path.
pub async fn handle_graphql_playground(path: &str) -> impl IntoResponse {
    response::Html(playground_source(GraphQLPlaygroundConfig::new(path)))
}

/// Handle GraphQL requests.
pub async fn handle_graphql_query(
    Extension(context): Extension<HttpServiceContext>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    context.schema.execute(req.into_inner()).await.into()
}

/// Response body of the log ingest route.
#[derive(Debug, Serialize)]
pub struct IngestResponse {
    /// Id of the stored record, `null` when the log was ignored.
    pub id: Option<EntityId>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<EntityKind>,
}

/// Handle one raw log delivered by the chain follower.
pub async fn handle_ingest_log(
    Extension(context): Extension<HttpServiceContext>,
    Json(log): Json<RawLog>,
) -> Result<Json<IngestResponse>, IngestHttpError> {
    let entity = context.indexer.ingest(&log).await?;

    Ok(Json(IngestResponse {
        id: entity.as_ref().map(|entity| *entity.id()),
        kind: entity.as_ref().map(|entity| entity.kind()),
    }))
}

#[derive(Debug)]
pub struct IngestHttpError(IndexerError);

impl From<IndexerError> for IngestHttpError {
    fn from(err: IndexerError) -> Self {
        Self(err)
    }
}

impl IntoResponse for IngestHttpError {
    fn into_response(self) -> Response {
        let status = if self.0.is_retryable() {
            error!("{}", self.0);
            StatusCode::SERVICE_UNAVAILABLE
        } else {
            warn!("Rejected log: {}", self.0);
            StatusCode::UNPROCESSABLE_ENTITY
        };

        let body = json!({
            "error": self.0.to_string(),
            "retryable": self.0.is_retryable(),
        });

        (status, Json(body)).into_response()
    }
}
