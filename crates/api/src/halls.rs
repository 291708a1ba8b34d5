//! Hall search and CRUD calls

use hallbook_core::{FilterCriteria, Hall, SortMode};
use reqwest::Method;
use tracing::{info, instrument};

use crate::client::ApiClient;
use crate::error::{Error, Result};
use crate::query::hall_search_params;
use crate::wire::{reshape_hall, HallPage, HallRecord, HallUpdate, Page};

pub struct HallsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> HallsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Search halls with the screen's filter and free-text query.
    ///
    /// Proximity sort resolves device coordinates through the location
    /// provider before anything touches the network; a denied permission
    /// fails the call with [`Error::PermissionDenied`] and no request is
    /// issued. `user_id` matters only for recommendation sort.
    #[instrument(skip(self, filter, token), fields(sort = ?filter.sort))]
    pub async fn fetch_halls(
        &self,
        page: u32,
        size: u32,
        filter: &FilterCriteria,
        search: &str,
        user_id: Option<i64>,
        token: &str,
    ) -> Result<HallPage> {
        let mut params = hall_search_params(page, size, filter, search, user_id);

        if filter.sort == Some(SortMode::Proximity) {
            let provider = self.client.location().ok_or(Error::PermissionDenied)?;
            let coords = provider.current_location().await?;
            params.push(("latitude".into(), coords.latitude.to_string()));
            params.push(("longitude".into(), coords.longitude.to_string()));
        }

        let wire: Page<HallRecord> = self
            .client
            .get_json("/halls", &params, Some(token))
            .await?;
        info!(
            halls = wire.content.len(),
            total_pages = wire.total_pages,
            "Fetched hall page"
        );
        Ok(wire.into())
    }

    /// Halls listed by a hall owner.
    pub async fn fetch_owner_halls(
        &self,
        owner_id: i64,
        page: u32,
        size: u32,
        token: &str,
    ) -> Result<HallPage> {
        let params = paging(page, size);
        let wire: Page<HallRecord> = self
            .client
            .get_json(&format!("/halls/owner/{owner_id}"), &params, Some(token))
            .await?;
        Ok(wire.into())
    }

    /// Owner's halls that currently hold reservations.
    pub async fn fetch_owner_reserved_halls(
        &self,
        owner_id: i64,
        page: u32,
        size: u32,
        token: &str,
    ) -> Result<HallPage> {
        let params = paging(page, size);
        let wire: Page<HallRecord> = self
            .client
            .get_json(
                &format!("/halls/owner/{owner_id}/reserved"),
                &params,
                Some(token),
            )
            .await?;
        Ok(wire.into())
    }

    /// Halls the customer has favorited.
    pub async fn fetch_favorite_halls(
        &self,
        user_id: i64,
        page: u32,
        size: u32,
        token: &str,
    ) -> Result<HallPage> {
        let params = paging(page, size);
        let wire: Page<HallRecord> = self
            .client
            .get_json(&format!("/favorites/{user_id}"), &params, Some(token))
            .await?;
        Ok(wire.into())
    }

    /// Fetch one hall by id.
    pub async fn get_hall(&self, id: i64, token: &str) -> Result<Hall> {
        let builder = self
            .client
            .request(Method::GET, &format!("/halls/{id}"), Some(token));
        let response = self.client.send(builder).await?;
        let record: HallRecord = response.json().await?;
        Ok(reshape_hall(record))
    }

    /// Update a hall (owner only); returns the server's view of the record.
    pub async fn update_hall(&self, id: i64, update: &HallUpdate, token: &str) -> Result<Hall> {
        let builder = self
            .client
            .request(Method::PUT, &format!("/halls/{id}"), Some(token))
            .json(update);
        let response = self.client.send(builder).await?;
        let record: HallRecord = response.json().await?;
        Ok(reshape_hall(record))
    }

    /// Delete a hall listing (owner only).
    pub async fn delete_hall(&self, id: i64, token: &str) -> Result<()> {
        let builder = self
            .client
            .request(Method::DELETE, &format!("/halls/{id}"), Some(token));
        self.client.send(builder).await?;
        Ok(())
    }
}

pub(crate) fn paging(page: u32, size: u32) -> Vec<(String, String)> {
    vec![
        ("page".into(), page.to_string()),
        ("size".into(), size.to_string()),
    ]
}
