//! Multipart file uploads
//!
//! Images and proof documents are opaque payloads passed through to the
//! backend; the server stores them and answers with the public URL.

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

#[derive(Debug, Deserialize)]
struct MultiUploadResponse {
    urls: Vec<String>,
}

pub struct UploadsApi<'a> {
    client: &'a ApiClient,
}

impl<'a> UploadsApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Upload the user's profile image; returns its public URL.
    pub async fn upload_profile_image(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        token: &str,
    ) -> Result<String> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_string()));
        let builder = self
            .client
            .request(Method::POST, "/users/image", Some(token))
            .multipart(form);
        let response = self.client.send(builder).await?;
        let upload: UploadResponse = response.json().await?;
        Ok(upload.url)
    }

    /// Upload gallery images for a hall; returns the public URLs, server
    /// order (the first one becomes the hall's cover image).
    pub async fn upload_hall_images(
        &self,
        hall_id: i64,
        files: Vec<(String, Vec<u8>)>,
        token: &str,
    ) -> Result<Vec<String>> {
        let mut form = Form::new();
        for (file_name, bytes) in files {
            form = form.part("files", Part::bytes(bytes).file_name(file_name));
        }
        let builder = self
            .client
            .request(Method::POST, &format!("/halls/{hall_id}/images"), Some(token))
            .multipart(form);
        let response = self.client.send(builder).await?;
        let upload: MultiUploadResponse = response.json().await?;
        Ok(upload.urls)
    }

    /// Upload an ownership proof document during owner registration.
    pub async fn upload_owner_proof(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        token: &str,
    ) -> Result<String> {
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.to_string()));
        let builder = self
            .client
            .request(Method::POST, "/owners/proof", Some(token))
            .multipart(form);
        let response = self.client.send(builder).await?;
        let upload: UploadResponse = response.json().await?;
        Ok(upload.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn profile_image_upload_returns_url() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/image"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"url": "http://cdn/p.png"})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let url = client
            .uploads()
            .upload_profile_image(vec![1, 2, 3], "p.png", "tok")
            .await
            .unwrap();
        assert_eq!(url, "http://cdn/p.png");
    }

    #[tokio::test]
    async fn hall_images_upload_preserves_server_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/halls/5/images"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "urls": ["http://cdn/a.png", "http://cdn/b.png"]
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let urls = client
            .uploads()
            .upload_hall_images(
                5,
                vec![("a.png".into(), vec![1]), ("b.png".into(), vec![2])],
                "tok",
            )
            .await
            .unwrap();
        assert_eq!(urls, vec!["http://cdn/a.png", "http://cdn/b.png"]);
    }
}
