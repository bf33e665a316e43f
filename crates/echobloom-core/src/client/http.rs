use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

use super::{ActivityPayload, ActivitySink};
use crate::config::Config;
use crate::error::ClientError;

/// `reqwest`-backed sink that POSTs to `{base_url}{activity path}`.
#[derive(Debug, Clone)]
pub struct HttpActivityClient {
    base_url: Url,
    http: Client,
}

impl HttpActivityClient {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|source| ClientError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        Ok(Self {
            base_url,
            http: Client::new(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        Self::new(&config.api.base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url
            .join(path)
            .map_err(|source| ClientError::InvalidUrl {
                url: format!("{}{}", self.base_url, path),
                source,
            })
    }
}

impl ActivitySink for HttpActivityClient {
    async fn submit(&self, payload: &ActivityPayload) -> Result<(), ClientError> {
        let path = payload.kind().path();
        let url = self.endpoint(path)?;
        tracing::debug!(%url, activity = %payload.kind(), "submitting activity");

        let resp = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|source| ClientError::Transport {
                path: path.to_string(),
                source,
            })?;

        if !resp.status().is_success() {
            return Err(ClientError::Status {
                path: path.to_string(),
                status: resp.status().as_u16(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityKind;

    #[test]
    fn rejects_unparseable_base_url() {
        let err = HttpActivityClient::new("not a url").unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }

    #[test]
    fn endpoint_joins_absolute_activity_path() {
        let client = HttpActivityClient::new("http://localhost:8000/ignored/").unwrap();
        let url = client.endpoint(ActivityKind::Grounding.path()).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/activities/grounding");
    }
}
