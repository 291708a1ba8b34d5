//! Chatbot query call

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Result;

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

#[derive(Debug, Deserialize)]
struct AskResponse {
    answer: String,
}

pub struct AssistantApi<'a> {
    client: &'a ApiClient,
}

impl<'a> AssistantApi<'a> {
    pub fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Forward one question to the backend's chatbot and return its answer.
    pub async fn ask(&self, question: &str, token: &str) -> Result<String> {
        let builder = self
            .client
            .request(Method::POST, "/assistant/ask", Some(token))
            .json(&AskRequest { question });
        let response = self.client.send(builder).await?;
        let answer: AskResponse = response.json().await?;
        Ok(answer.answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn ask_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/assistant/ask"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"answer": "Halls seat up to 300 guests."})),
            )
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri());
        let answer = client
            .assistant()
            .ask("How many guests fit?", "tok")
            .await
            .unwrap();
        assert_eq!(answer, "Halls seat up to 300 guests.");
    }
}
