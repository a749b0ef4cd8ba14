use crate::error::Result;
use crate::model::{Lwm2m, ObjectDefinition};
use crate::output;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde_json::Value;

/// The registry rejects requests from unknown clients, so every request
/// identifies itself as curl.
const SPOOFED_USER_AGENT: &str = "curl/7.76.1";

/// Only 1.0 definitions are requested from the registry.
const OBJECT_VERSION: &str = "1.0";

pub struct RegistryClient {
    http: reqwest::Client,
    pub base_url: String,
}

impl RegistryClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(SPOOFED_USER_AGENT));
        headers
    }

    /// Looks up the registry metadata for an object id and returns the link
    /// to its XML definition. `None` means the registry has nothing usable
    /// for this id; the reason is printed as a warning.
    pub async fn object_metadata(&self, object_id: u16) -> Result<Option<String>> {
        let url = format!("{}/lwm2m/v1/Object", self.base_url);
        let object_id = object_id.to_string();
        let params = [
            ("ObjectID", object_id.as_str()),
            ("ObjectVersion", OBJECT_VERSION),
        ];

        let resp = self
            .http
            .get(&url)
            .headers(self.headers())
            .query(&params)
            .send()
            .await?;
        let body = resp.text().await?;
        let entries: Value = serde_json::from_str(&body)?;

        let first = match entries.as_array().and_then(|a| a.first()) {
            Some(first) => first,
            None => {
                output::print_warning("No definition was received from the registry");
                return Ok(None);
            }
        };

        match first.get("ObjectLink").and_then(Value::as_str) {
            Some(link) => Ok(Some(link.to_string())),
            None => {
                output::print_warning("No object definition provided for the object");
                Ok(None)
            }
        }
    }

    /// Fetches and parses the XML definition of an object. Transport and
    /// parse failures propagate; a registry without a definition for the id
    /// yields `None` after a warning.
    pub async fn object_definition(&self, object_id: u16) -> Result<Option<ObjectDefinition>> {
        let link = match self.object_metadata(object_id).await? {
            Some(link) => link,
            None => {
                output::print_warning("No object metadata has been retrieved");
                return Ok(None);
            }
        };

        let resp = self.http.get(&link).headers(self.headers()).send().await?;
        let body = resp.text().await?;

        let envelope: Lwm2m = quick_xml::de::from_str(&body)?;
        match envelope.object {
            Some(object) => Ok(Some(object)),
            None => {
                output::print_warning("Received response is not valid");
                Ok(None)
            }
        }
    }
}
