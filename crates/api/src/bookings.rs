//! Reservation calls

use chrono::{DateTime, Utc};
use hallbook_core::BookedHall;
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::error::{Error, Result};
use crate::halls::paging;
use crate::wire::{reshape_booked, BookedPage, BookedRecord, Page};

/// Payload for creating a reservation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    pub hall_id: i64,
    pub category: String,
    /// Selected service names; the server prices them.
    pub services: Vec<String>,
    pub time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}

/// Payload for rating a past reservation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct RatingRequest<'a> {
    reservation_id: i64,
    rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<&'a str>,
}

pub struct BookingsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> BookingsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// The customer's reservations, newest first.
    ///
    /// A 403 means "nothing booked / no access yet" on this backend and maps
    /// to the empty page; every other non-2xx propagates.
    #[instrument(skip(self, token))]
    pub async fn fetch_booked_halls(
        &self,
        user_id: i64,
        page: u32,
        size: u32,
        token: &str,
    ) -> Result<BookedPage> {
        let params = paging(page, size);
        let result: Result<Page<BookedRecord>> = self
            .client
            .get_json(&format!("/bookings/user/{user_id}"), &params, Some(token))
            .await;

        match result {
            Ok(wire) => Ok(wire.into()),
            Err(Error::Status { status: 403, .. }) => {
                debug!("Booked-hall fetch returned 403, treating as empty");
                Ok(BookedPage::empty())
            }
            Err(e) => Err(e),
        }
    }

    /// Reserve a hall; returns the created reservation.
    pub async fn reserve(&self, request: &ReservationRequest, token: &str) -> Result<BookedHall> {
        let builder = self
            .client
            .request(Method::POST, "/bookings", Some(token))
            .json(request);
        let response = self.client.send(builder).await?;
        let record: BookedRecord = response.json().await?;
        Ok(reshape_booked(record))
    }

    /// Rate a hall for a past reservation.
    ///
    /// On success the caller flips `rated` on its local record
    /// ([`BookedHall::mark_rated`]).
    pub async fn rate(
        &self,
        reservation_id: i64,
        hall_id: i64,
        rate: f64,
        comment: Option<&str>,
        token: &str,
    ) -> Result<()> {
        let payload = RatingRequest {
            reservation_id,
            rate,
            comment,
        };
        let builder = self
            .client
            .request(Method::POST, &format!("/halls/{hall_id}/ratings"), Some(token))
            .json(&payload);
        self.client.send(builder).await?;
        Ok(())
    }

    /// Owner reservation report for a date range; opaque bytes passthrough
    /// (the server renders the document).
    pub async fn reservation_report(
        &self,
        hall_id: i64,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        token: &str,
    ) -> Result<Vec<u8>> {
        let params: Vec<(String, String)> = vec![
            ("from".into(), from.to_rfc3339()),
            ("to".into(), to.to_rfc3339()),
        ];
        let builder = self
            .client
            .request(
                Method::GET,
                &format!("/halls/{hall_id}/reservations/report"),
                Some(token),
            )
            .query(&params);
        let response = self.client.send(builder).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
