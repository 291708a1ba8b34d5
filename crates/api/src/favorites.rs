//! Favorite/unfavorite flow
//!
//! The in-memory map is never mutated optimistically: only a 2xx from the
//! server produces the flipped map, which is then persisted through the local
//! store's swallowing save. On failure the caller's map is untouched and the
//! error propagates for UI display.

use hallbook_core::{FavoriteStore, Favorites};
use reqwest::Method;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FavoriteRequest {
    user_id: i64,
    hall_id: i64,
}

pub struct FavoritesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> FavoritesApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Toggle the favorite state of one hall.
    ///
    /// Direction comes from `current`: not favorited -> POST, favorited ->
    /// DELETE. Returns the updated map after the server acknowledged and the
    /// local store was asked to persist it.
    ///
    /// Two overlapping toggles on the same hall are not synchronized; the last
    /// response to resolve wins. Fine for a single-user client with serialized
    /// UI interaction.
    #[instrument(skip(self, current, store, token))]
    pub async fn toggle(
        &self,
        hall_id: i64,
        current: &Favorites,
        store: &FavoriteStore<'_>,
        user_id: i64,
        token: &str,
    ) -> Result<Favorites> {
        let favorited = current.is_favorite(hall_id);
        let payload = FavoriteRequest { user_id, hall_id };

        let builder = if favorited {
            self.client
                .request(Method::DELETE, &format!("/favorites/{hall_id}"), Some(token))
                .query(&[("userId", user_id.to_string())])
        } else {
            self.client
                .request(Method::POST, "/favorites", Some(token))
                .json(&payload)
        };

        self.client.send(builder).await?;
        debug!(hall_id, now_favorited = !favorited, "Favorite toggle acknowledged");

        let updated = current.toggled(hall_id);
        store.save(&updated);
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hallbook_core::LocalStore;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn toggle_twice_restores_and_persists_the_original_map() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/favorites"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/favorites/5"))
            .and(query_param("userId", "7"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let local = LocalStore::open_in_memory().unwrap();
        let favorites = Favorites::new();

        let after_add = client
            .favorites()
            .toggle(5, &favorites, &local.favorites(), 7, "tok")
            .await
            .unwrap();
        assert!(after_add.is_favorite(5));
        assert!(local.favorites().load().is_favorite(5));

        let after_remove = client
            .favorites()
            .toggle(5, &after_add, &local.favorites(), 7, "tok")
            .await
            .unwrap();
        assert!(!after_remove.is_favorite(5));
        assert!(!local.favorites().load().is_favorite(5));
    }

    #[tokio::test]
    async fn failed_toggle_leaves_map_and_store_untouched() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/favorites"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let local = LocalStore::open_in_memory().unwrap();
        let mut favorites = Favorites::new();
        favorites.set(3, true);
        let before = favorites.clone();

        let err = client
            .favorites()
            .toggle(9, &favorites, &local.favorites(), 7, "tok")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(500));
        assert_eq!(favorites, before);
        assert!(local.favorites().load().is_empty());
    }
}
