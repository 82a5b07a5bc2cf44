// SPDX-License-Identifier: AGPL-3.0-or-later

//! Lookups and filtered listings of all record types.
use std::convert::TryFrom;

use async_graphql::{Context, Error, Object, Result};

use crate::db::query::{DocumentFilter, Filter, Pagination};
use crate::db::SqlStore;
use crate::graphql::input_values::{
    DocumentNotarizedFilter, DocumentRetrievedFilter, DocumentRevokedFilter, OrderDirection,
};
use crate::graphql::objects::{
    DocumentNotarizedObject, DocumentRetrievedObject, DocumentRevokedObject,
};
use crate::graphql::scalars::Bytes;
use crate::indexer::EntityKind;
use crate::types::EntityId;

fn parse_id(id: &Bytes) -> Result<EntityId> {
    let id = id.as_str().parse::<EntityId>()?;
    Ok(id)
}

fn to_u64(name: &str, value: Option<i32>) -> Result<Option<u64>> {
    value
        .map(|value| {
            u64::try_from(value)
                .map_err(|_| Error::new(format!("'{name}' can't be negative, found: {value}")))
        })
        .transpose()
}

/// Arguments shared by all listing queries.
fn listing_args(
    kind: EntityKind,
    first: Option<i32>,
    skip: Option<i32>,
    filter: DocumentFilter,
) -> Result<(Filter, Pagination)> {
    let pagination = Pagination::new(to_u64("first", first)?, to_u64("skip", skip)?)?;
    let filter = Filter::for_kind(kind, &filter)?;
    Ok((filter, pagination))
}

/// Read-only queries over indexed records.
#[derive(Default, Debug, Copy, Clone)]
pub struct DocumentsRoot;

#[Object]
impl DocumentsRoot {
    /// Notarization with this id.
    async fn document_notarized(
        &self,
        ctx: &Context<'_>,
        id: Bytes,
    ) -> Result<Option<DocumentNotarizedObject>> {
        let store = ctx.data::<SqlStore>()?;
        let record = store.get_notarized(&parse_id(&id)?).await?;
        Ok(record.map(DocumentNotarizedObject::from))
    }

    /// Retrieval with this id.
    async fn document_retrieved(
        &self,
        ctx: &Context<'_>,
        id: Bytes,
    ) -> Result<Option<DocumentRetrievedObject>> {
        let store = ctx.data::<SqlStore>()?;
        let record = store.get_retrieved(&parse_id(&id)?).await?;
        Ok(record.map(DocumentRetrievedObject::from))
    }

    /// Revocation with this id.
    async fn document_revoked(
        &self,
        ctx: &Context<'_>,
        id: Bytes,
    ) -> Result<Option<DocumentRevokedObject>> {
        let store = ctx.data::<SqlStore>()?;
        let record = store.get_revoked(&parse_id(&id)?).await?;
        Ok(record.map(DocumentRevokedObject::from))
    }

    /// Notarizations in chain order.
    async fn document_notarizeds(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Maximum number of records, defaults to 100")] first: Option<i32>,
        #[graphql(desc = "Number of records to skip")] skip: Option<i32>,
        #[graphql(default)] order_direction: OrderDirection,
        #[graphql(name = "where")] filter: Option<DocumentNotarizedFilter>,
    ) -> Result<Vec<DocumentNotarizedObject>> {
        let store = ctx.data::<SqlStore>()?;
        let (filter, pagination) = listing_args(
            EntityKind::DocumentNotarized,
            first,
            skip,
            filter.unwrap_or_default().into(),
        )?;

        let records = store
            .list_notarized(&filter, order_direction.into(), &pagination)
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Revocations in chain order.
    async fn document_revokeds(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        skip: Option<i32>,
        #[graphql(default)] order_direction: OrderDirection,
        #[graphql(name = "where")] filter: Option<DocumentRevokedFilter>,
    ) -> Result<Vec<DocumentRevokedObject>> {
        let store = ctx.data::<SqlStore>()?;
        let (filter, pagination) = listing_args(
            EntityKind::DocumentRevoked,
            first,
            skip,
            filter.unwrap_or_default().into(),
        )?;

        let records = store
            .list_revoked(&filter, order_direction.into(), &pagination)
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Retrievals in chain order.
    async fn document_retrieveds(
        &self,
        ctx: &Context<'_>,
        first: Option<i32>,
        skip: Option<i32>,
        #[graphql(default)] order_direction: OrderDirection,
        #[graphql(name = "where")] filter: Option<DocumentRetrievedFilter>,
    ) -> Result<Vec<DocumentRetrievedObject>> {
        let store = ctx.data::<SqlStore>()?;
        let (filter, pagination) = listing_args(
            EntityKind::DocumentRetrieved,
            first,
            skip,
            filter.unwrap_or_default().into(),
        )?;

        let records = store
            .list_retrieved(&filter, order_direction.into(), &pagination)
            .await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
