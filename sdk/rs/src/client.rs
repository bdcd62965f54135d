use log::debug;
use reqwest::{
    blocking::{Client, RequestBuilder, Response},
    header::ACCEPT,
};
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::{errors::ApiError, esperclient::EsperClient};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Blocking HTTP implementation of [`EsperClient`]. Every call is tried once.
pub struct EsperHttpClient {
    host: Url,
    api_key: String,
    http: Client,
}

impl EsperHttpClient {
    pub fn new(host: &str, api_key: &str) -> eyre::Result<EsperHttpClient> {
        // Url::join drops the last path segment unless the base ends with '/'.
        let mut host = Url::parse(host.trim())
            .map_err(|err| eyre::eyre!("Invalid API host {host}: {err}"))?;
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        let http = Client::builder()
            .user_agent(concat!("esper-cli/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(EsperHttpClient {
            host,
            api_key: api_key.to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.host.join(path.trim_start_matches('/'))?)
    }

    fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()?;

        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        Err(ApiError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            body,
        })
    }

    fn decode(response: Response) -> Result<Value, ApiError> {
        let text = response.text()?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

impl EsperClient for EsperHttpClient {
    fn get_host(&self) -> String {
        self.host.to_string()
    }

    fn get(&self, path: String, query: Vec<(String, String)>) -> Result<Value, ApiError> {
        let url = self.url(&path)?;
        let response = self.send(self.http.get(url).query(&query))?;
        Self::decode(response)
    }

    fn post(&self, path: String, body: Value) -> Result<Value, ApiError> {
        let url = self.url(&path)?;
        let response = self.send(self.http.post(url).json(&body))?;
        Self::decode(response)
    }

    fn patch(&self, path: String, body: Value) -> Result<Value, ApiError> {
        let url = self.url(&path)?;
        let response = self.send(self.http.patch(url).json(&body))?;
        Self::decode(response)
    }

    fn delete(&self, path: String) -> Result<(), ApiError> {
        let url = self.url(&path)?;
        self.send(self.http.delete(url))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn create_client(server: &mockito::ServerGuard) -> EsperHttpClient {
        EsperHttpClient::new(&format!("{}/api", server.url()), "secret-key").unwrap()
    }

    #[test]
    fn test_new_appends_trailing_slash() {
        let client = EsperHttpClient::new("https://acme-api.esper.cloud/api", "key").unwrap();
        assert_eq!(client.get_host(), "https://acme-api.esper.cloud/api/");

        let url = client.url("/v0/enterprise/e1/devicegroup/").unwrap();
        assert_eq!(
            url.as_str(),
            "https://acme-api.esper.cloud/api/v0/enterprise/e1/devicegroup/"
        );
    }

    #[test]
    fn test_new_rejects_invalid_host() {
        assert!(EsperHttpClient::new("not a url", "key").is_err());
    }

    #[test]
    fn test_get_sends_bearer_token_and_query() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v0/enterprise/e1/devicegroup/")
            .match_header("authorization", "Bearer secret-key")
            .match_header("accept", "application/json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("limit".into(), "20".into()),
                Matcher::UrlEncoded("name".into(), "Front Desk".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"count": 0, "results": []}"#)
            .create();

        let client = create_client(&server);
        let value = client
            .get(
                "v0/enterprise/e1/devicegroup/".to_string(),
                vec![
                    ("limit".to_string(), "20".to_string()),
                    ("name".to_string(), "Front Desk".to_string()),
                ],
            )
            .unwrap();

        mock.assert();
        assert_eq!(value, json!({"count": 0, "results": []}));
    }

    #[test]
    fn test_error_status_keeps_canonical_reason() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v0/enterprise/e1/devicegroup/missing/")
            .with_status(404)
            .with_body(r#"{"errors": ["Group does not exist"]}"#)
            .create();

        let client = create_client(&server);
        let err = client
            .get(
                "v0/enterprise/e1/devicegroup/missing/".to_string(),
                vec![],
            )
            .unwrap_err();

        mock.assert();
        match err {
            ApiError::Status {
                status,
                reason,
                body,
            } => {
                assert_eq!(status, 404);
                assert_eq!(reason, "Not Found");
                assert!(body.contains("Group does not exist"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_body_decodes_as_null() {
        let mut server = mockito::Server::new();
        let get_mock = server
            .mock("GET", "/api/v0/enterprise/e1/devicegroup/g1/")
            .with_status(200)
            .create();
        let delete_mock = server
            .mock("DELETE", "/api/v0/enterprise/e1/devicegroup/g1/")
            .match_header("authorization", "Bearer secret-key")
            .with_status(204)
            .create();

        let client = create_client(&server);
        let value = client
            .get("v0/enterprise/e1/devicegroup/g1/".to_string(), vec![])
            .unwrap();
        assert_eq!(value, Value::Null);

        assert!(client
            .delete("v0/enterprise/e1/devicegroup/g1/".to_string())
            .is_ok());

        get_mock.assert();
        delete_mock.assert();
    }

    #[test]
    fn test_post_sends_json_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/api/v0/enterprise/e1/devicegroup/")
            .match_body(Matcher::Json(json!({"name": "Lobby"})))
            .with_status(201)
            .with_body(r#"{"id": "g1", "name": "Lobby"}"#)
            .create();

        let client = create_client(&server);
        let value = client
            .post(
                "v0/enterprise/e1/devicegroup/".to_string(),
                json!({"name": "Lobby"}),
            )
            .unwrap();

        mock.assert();
        assert_eq!(value, json!({"id": "g1", "name": "Lobby"}));
    }

    #[test]
    fn test_undecodable_body_is_decode_error() {
        let mut server = mockito::Server::new();
        server
            .mock("PATCH", "/api/v0/enterprise/e1/devicegroup/g1/")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create();

        let client = create_client(&server);
        let err = client
            .patch(
                "v0/enterprise/e1/devicegroup/g1/".to_string(),
                json!({"name": "Kiosks"}),
            )
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
