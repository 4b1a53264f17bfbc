//! HTTP client for the Tropicos name service.

use std::future::{Future, IntoFuture};
use std::marker::PhantomData;
use std::pin::Pin;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};
use url::Url;

use crate::{
    endpoint::Endpoint,
    query::{ListNamesQuery, Query, SearchQuery},
    response::ApiResponse,
    types::{
        ChromosomeCount, Distribution, Image, Name, NameId, NameReference, NameSummary,
        SearchResult, Specimen, Synonym,
    },
    Error, Format,
};

const DEFAULT_USER_AGENT: &str = concat!("tropicos_api/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Tropicos name service.
///
/// Holds the API key and output format for its whole lifetime. Every request
/// carries both as the `apiKey` and `format` query parameters, replacing any
/// caller-supplied values of the same name. Cloning is cheap and clones share
/// one connection pool.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// Service root without a trailing slash. Defaults to `http://services.tropicos.org`.
    base_api_url: String,
    api_key: String,
    format: Format,
}

impl Client {
    pub const DEFAULT_BASE_URL: &'static str = "http://services.tropicos.org";

    /// Creates a client for the production service using the default format.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// The format sent with every request.
    pub fn format(&self) -> Format {
        self.format
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, endpoint: &Endpoint, query: Option<&(dyn Query + Sync)>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, endpoint.path()).as_str())
            .map_err(|e| Error::Config(format!("invalid request URL: {}", e)))?;
        let url = match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        };
        Ok(merge_access_params(&url, &self.api_key, self.format))
    }

    fn request<'a, T>(
        &'a self,
        endpoint: Endpoint,
        query: Option<&'a (dyn Query + Sync)>,
    ) -> PendingRequest<'a, T> {
        PendingRequest {
            client: self,
            endpoint,
            query,
            options: RequestOptions::default(),
            _shape: PhantomData,
        }
    }

    /// Searches for names (`/Name/Search`).
    pub fn search<'a>(&'a self, query: &'a SearchQuery) -> PendingRequest<'a, Vec<SearchResult>> {
        self.request(Endpoint::Search, Some(query))
    }

    /// Fetches the summary record for a name (`/Name/{id}`).
    pub fn summary(&self, id: NameId) -> PendingRequest<'_, NameSummary> {
        self.request(Endpoint::Summary(id), None)
    }

    /// Fetches the synonyms of a name.
    pub fn synonyms(&self, id: NameId) -> PendingRequest<'_, Vec<Synonym>> {
        self.request(Endpoint::Synonyms(id), None)
    }

    /// Fetches the accepted names for a name.
    pub fn accepted_names(&self, id: NameId) -> PendingRequest<'_, Vec<Synonym>> {
        self.request(Endpoint::AcceptedNames(id), None)
    }

    pub fn distributions(&self, id: NameId) -> PendingRequest<'_, Vec<Distribution>> {
        self.request(Endpoint::Distributions(id), None)
    }

    pub fn references(&self, id: NameId) -> PendingRequest<'_, Vec<NameReference>> {
        self.request(Endpoint::References(id), None)
    }

    pub fn images(&self, id: NameId) -> PendingRequest<'_, Vec<Image>> {
        self.request(Endpoint::Images(id), None)
    }

    pub fn chromosome_counts(&self, id: NameId) -> PendingRequest<'_, Vec<ChromosomeCount>> {
        self.request(Endpoint::ChromosomeCounts(id), None)
    }

    /// Fetches the classification above a name, as a list of names.
    pub fn higher_taxa(&self, id: NameId) -> PendingRequest<'_, Vec<Name>> {
        self.request(Endpoint::HigherTaxa(id), None)
    }

    pub fn specimens(&self, id: NameId) -> PendingRequest<'_, Vec<Specimen>> {
        self.request(Endpoint::Specimens(id), None)
    }

    /// Lists names starting from `query.start_id` (`/Name/List`).
    pub fn list_names<'a>(&'a self, query: &'a ListNamesQuery) -> PendingRequest<'a, Vec<Name>> {
        self.request(Endpoint::ListNames, Some(query))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_api_url", &self.base_api_url)
            .field("api_key", &"<redacted>")
            .field("format", &self.format)
            .finish()
    }
}

/// Builder for [`Client`]. Building never performs I/O.
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    format: Format,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Sets the API key. Required.
    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = format;
        self
    }

    /// Points the client at a different service root. Used for testing with wiremock.
    pub fn base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.to_string());
        self
    }

    /// Default timeout for every request. Unset means the transport's default.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("an API key is required".to_string()))?
            .to_string();

        let base_api_url = self
            .base_url
            .as_deref()
            .unwrap_or(Client::DEFAULT_BASE_URL)
            .trim_end_matches('/')
            .to_string();
        Url::parse(&base_api_url)
            .map_err(|e| Error::Config(format!("invalid base URL {:?}: {}", base_api_url, e)))?;

        let mut http = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT));
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(Client {
            http: http.build()?,
            base_api_url,
            api_key,
            format: self.format,
        })
    }
}

/// Per-call transport overrides. They only add headers or bound the request
/// time; the query string is not reachable from here.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub headers: HeaderMap,
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// An operation waiting to be sent. Returned by every [`Client`] method;
/// call [`send`](PendingRequest::send) or `.await` it directly.
#[must_use = "requests do nothing until sent or awaited"]
pub struct PendingRequest<'a, T> {
    client: &'a Client,
    endpoint: Endpoint,
    query: Option<&'a (dyn Query + Sync)>,
    options: RequestOptions,
    _shape: PhantomData<fn() -> T>,
}

impl<'a, T> PendingRequest<'a, T> {
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// The fully qualified URL this request will be sent to.
    pub fn url(&self) -> Result<Url, Error> {
        self.client.get_url(&self.endpoint, self.query)
    }

    /// Adds a header to this request only.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.options.headers.insert(name, value);
        self
    }

    /// Bounds this request only, overriding the client's default timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    /// Merges a full set of per-call overrides. Headers already set on this
    /// request are replaced by same-named ones in `options`.
    pub fn options(mut self, options: RequestOptions) -> Self {
        self.options.headers.extend(options.headers);
        if options.timeout.is_some() {
            self.options.timeout = options.timeout;
        }
        self
    }

    /// Issues the GET request.
    ///
    /// Non-success statuses are returned as [`Error::HttpStatus`] with the full
    /// body. Transport failures are returned as [`Error::Transport`]. Nothing
    /// is retried.
    pub async fn send(self) -> Result<ApiResponse<T>, Error> {
        let url = self.url()?;
        let format = self.client.format;
        let operation = self.endpoint.operation();
        tracing::debug!(operation, path = url.path(), "dispatching request");

        let accept = match format {
            Format::Json => "application/json",
            Format::Xml => "application/xml",
        };
        let mut builder = self
            .client
            .http
            .get(url)
            .header(ACCEPT, accept)
            .headers(self.options.headers);
        if let Some(timeout) = self.options.timeout {
            builder = builder.timeout(timeout);
        }

        let resp = builder.send().await?;
        let status = resp.status();
        tracing::debug!(operation, status = status.as_u16(), "response received");

        if !status.is_success() {
            // A body that fails to read must not mask the status.
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        let headers = resp.headers().clone();
        let body = resp.text().await?;
        Ok(ApiResponse::new(status, headers, body, format))
    }
}

impl<'a, T: 'a> IntoFuture for PendingRequest<'a, T> {
    type Output = Result<ApiResponse<T>, Error>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send + 'a>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.send())
    }
}

/// Sets `apiKey` and `format` on `url`, dropping any existing pairs with
/// those names (ASCII case-insensitive). Other pairs keep their order.
pub fn merge_access_params(url: &Url, api_key: &str, format: Format) -> Url {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(key, _)| !is_access_param(key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut url = url.clone();
    url.set_query(None);
    url.query_pairs_mut()
        .extend_pairs(retained)
        .append_pair("apiKey", api_key)
        .append_pair("format", format.as_str());
    url
}

fn is_access_param(key: &str) -> bool {
    key.eq_ignore_ascii_case("apiKey") || key.eq_ignore_ascii_case("format")
}
