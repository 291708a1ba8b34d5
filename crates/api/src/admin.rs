//! Admin moderation calls
//!
//! Listing approval and user management. All calls require an admin bearer;
//! authorization is enforced server-side and surfaces here as a 403 status
//! error.

use hallbook_core::UserProfile;
use reqwest::Method;
use serde::Serialize;

use crate::client::ApiClient;
use crate::error::Result;
use crate::halls::paging;
use crate::wire::{HallPage, HallRecord, Page};

/// One page of user accounts
#[derive(Debug)]
pub struct UserPage {
    pub users: Vec<UserProfile>,
    pub total_pages: u32,
    pub total_elements: u64,
}

#[derive(Debug, Serialize)]
struct RejectRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Hall listings awaiting approval.
    pub async fn list_pending_halls(&self, page: u32, size: u32, token: &str) -> Result<HallPage> {
        let params = paging(page, size);
        let wire: Page<HallRecord> = self
            .client
            .get_json("/admin/halls/pending", &params, Some(token))
            .await?;
        Ok(wire.into())
    }

    pub async fn approve_hall(&self, hall_id: i64, token: &str) -> Result<()> {
        let builder = self.client.request(
            Method::PUT,
            &format!("/admin/halls/{hall_id}/approve"),
            Some(token),
        );
        self.client.send(builder).await?;
        Ok(())
    }

    pub async fn reject_hall(&self, hall_id: i64, reason: Option<&str>, token: &str) -> Result<()> {
        let builder = self
            .client
            .request(
                Method::PUT,
                &format!("/admin/halls/{hall_id}/reject"),
                Some(token),
            )
            .json(&RejectRequest { reason });
        self.client.send(builder).await?;
        Ok(())
    }

    pub async fn delete_hall(&self, hall_id: i64, token: &str) -> Result<()> {
        let builder = self.client.request(
            Method::DELETE,
            &format!("/admin/halls/{hall_id}"),
            Some(token),
        );
        self.client.send(builder).await?;
        Ok(())
    }

    /// Undo a hall deletion.
    pub async fn restore_hall(&self, hall_id: i64, token: &str) -> Result<()> {
        let builder = self.client.request(
            Method::PUT,
            &format!("/admin/halls/{hall_id}/restore"),
            Some(token),
        );
        self.client.send(builder).await?;
        Ok(())
    }

    /// All user accounts, paginated.
    pub async fn list_users(&self, page: u32, size: u32, token: &str) -> Result<UserPage> {
        let params = paging(page, size);
        let wire: Page<UserProfile> = self
            .client
            .get_json("/admin/users", &params, Some(token))
            .await?;
        Ok(UserPage {
            users: wire.content,
            total_pages: wire.total_pages,
            total_elements: wire.total_elements,
        })
    }

    pub async fn delete_user(&self, user_id: i64, token: &str) -> Result<()> {
        let builder = self.client.request(
            Method::DELETE,
            &format!("/admin/users/{user_id}"),
            Some(token),
        );
        self.client.send(builder).await?;
        Ok(())
    }

    /// Undo a user deletion.
    pub async fn restore_user(&self, user_id: i64, token: &str) -> Result<()> {
        let builder = self.client.request(
            Method::PUT,
            &format!("/admin/users/{user_id}/restore"),
            Some(token),
        );
        self.client.send(builder).await?;
        Ok(())
    }
}
