use bytes::Bytes;
use hyper::client::HttpConnector;
use hyper::header::USER_AGENT;
use hyper::{Body, Client as HyperClient, Request};
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use log::debug;
use url::Url;

use std::fmt;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::team::{parse_snapshot, TeamId, TeamSnapshot};

pub const DEFAULT_BASE_URL: &str = "https://wakatime.com/api/v1/";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const CLIENT_NAME: &str = "iscoding.live";
const API_KEY: &str = "api_key";

/// A WakaTime API key, sent as a query parameter.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new<S: Into<String>>(key: S) -> Self {
        ApiKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ApiKey(..)")
    }
}

struct HttpClient {
    base_url: Url,
    timeout: Duration,
    hyper: HyperClient<HttpsConnector<HttpConnector>, Body>,
}

pub struct Client {
    http: HttpClient,
    api_key: ApiKey,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "WakaTimeClient({})", self.http.base_url)
    }
}

impl HttpClient {
    async fn get(&self, url: Url) -> Result<Bytes> {
        let request = Request::get(url.as_str())
            .header(USER_AGENT, CLIENT_NAME)
            .body(Body::empty())?;

        let exchange = async {
            let response = self.hyper.request(request).await?;
            let status = response.status();
            debug!("Status: {}", status);
            if !status.is_success() {
                return Err(Error::Status(status));
            }

            let body = hyper::body::to_bytes(response.into_body()).await?;
            Ok::<_, Error>(body)
        };

        match tokio::time::timeout(self.timeout, exchange).await {
            Ok(result) => result,
            Err(_elapsed) => Err(Error::Timeout(self.timeout)),
        }
    }
}

impl Client {
    pub fn new(url: Url, api_key: ApiKey) -> Result<Self> {
        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(Error::InvalidUrl);
        }

        // Relative joins replace the last path segment unless it ends in '/'
        let url = if url.path().ends_with('/') {
            url
        } else {
            let path = format!("{}/", url.path());
            url.join(&path)?
        };

        let https = HttpsConnectorBuilder::new()
            .with_webpki_roots()
            .https_or_http()
            .enable_http1()
            .build();
        let client: HyperClient<_, Body> = HyperClient::builder().build(https);

        Ok(Client {
            http: HttpClient {
                base_url: url,
                timeout: DEFAULT_TIMEOUT,
                hyper: client,
            },
            api_key,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.http.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.http.base_url
    }

    /// Fetch the raw members listing of a team.
    pub async fn fetch_team_members(&self, team: &TeamId) -> Result<Bytes> {
        let path = format!("users/current/teams/{}/members", team.as_str());
        let mut url = self.http.base_url.join(&path)?;
        debug!("GET {}", url);

        url.query_pairs_mut()
            .append_pair(API_KEY, self.api_key.as_str());
        self.http.get(url).await
    }

    pub async fn team_members(&self, team: &TeamId) -> Result<TeamSnapshot> {
        let body = self.fetch_team_members(team).await?;
        parse_snapshot(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        s.parse().unwrap()
    }

    #[test]
    fn rejects_other_schemes() {
        let result = Client::new(url("ftp://wakatime.com/api/v1/"), ApiKey::new("key"));
        assert!(matches!(result, Err(Error::InvalidUrl)));
    }

    #[test]
    fn base_url_gains_trailing_slash() {
        let client = Client::new(url("https://wakatime.com/api/v1"), ApiKey::new("key")).unwrap();
        assert_eq!(client.base_url().as_str(), "https://wakatime.com/api/v1/");
    }

    #[test]
    fn debug_output_hides_api_key() {
        let client = Client::new(url(DEFAULT_BASE_URL), ApiKey::new("waka_secret")).unwrap();
        let debug = format!("{:?} {:?}", client, client.api_key);
        assert!(!debug.contains("waka_secret"));
    }
}
