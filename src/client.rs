use crate::ApiResponse;
use crate::Error;
use crate::Mapping;
use crate::NameMap;
use crate::ALL_ENDPOINT;
use crate::DEFAULT_BASE_URL;
use crate::NAMES_ENDPOINT;
use url::Url;

/// The xem api client
#[derive(Debug, Clone)]
pub struct Client {
    /// The inner http client
    pub client: reqwest::Client,

    /// The base url of the api
    pub base_url: Url,

    /// The resource path of the mappings endpoint, resolved against the base url per request
    pub all_endpoint: String,

    /// The resource path of the names endpoint, resolved against the base url per request
    pub names_endpoint: String,

    /// The user agent header value, the header is omitted while this is unset or empty
    pub user_agent: Option<String>,
}

impl Client {
    /// Make a new client with a default http client.
    pub fn new() -> Self {
        Self::with_http_client(reqwest::Client::new())
    }

    /// Make a new client that sends its requests with the given http client.
    ///
    /// Timeouts and connection behavior belong to the given client.
    pub fn with_http_client(client: reqwest::Client) -> Self {
        Client {
            client,
            base_url: DEFAULT_BASE_URL.clone(),
            all_endpoint: ALL_ENDPOINT.to_string(),
            names_endpoint: NAMES_ENDPOINT.to_string(),
            user_agent: None,
        }
    }

    /// Get all episode mappings for the show with the given id, numbered as the given origin.
    ///
    /// `origin` is passed through to the api unvalidated,
    /// use [`crate::Origin::as_str`] for the known values.
    pub async fn get_all_mappings(&self, origin: &str, id: &str) -> Result<Vec<Mapping>, Error> {
        let url = self.request_url(&self.all_endpoint, &[("origin", origin), ("id", id)])?;
        let response: ApiResponse<Vec<Mapping>> = self.get_api_response(url).await?;
        response.into_data()
    }

    /// Get all show names known to the given origin, in the given language.
    ///
    /// Season numbers are always requested along with the names.
    pub async fn get_all_names(&self, origin: &str, language: &str) -> Result<NameMap, Error> {
        let url = self.request_url(
            &self.names_endpoint,
            &[
                ("origin", origin),
                ("seasonNumbers", "1"),
                ("language", language),
            ],
        )?;
        let response: ApiResponse<NameMap> = self.get_api_response(url).await?;
        response.into_data()
    }

    /// Build an absolute request url from an endpoint path and query parameters.
    fn request_url(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, Error> {
        let mut url = self.base_url.join(endpoint)?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    /// Perform a GET request against the given url and decode the response envelope.
    async fn get_api_response<T>(&self, url: Url) -> Result<ApiResponse<T>, Error>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut request = self.client.get(url.as_str());
        if let Some(user_agent) = self.user_agent.as_deref().filter(|value| !value.is_empty()) {
            request = request.header("User-Agent", user_agent);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await.map_err(Error::ReadBody)?;

        if !status.is_success() {
            return Err(Error::InvalidStatus { url, status, body });
        }

        serde_json::from_str(&body).map_err(|error| Error::Json { error, body })
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
