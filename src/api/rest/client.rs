use std::time::Duration;

use chrono::Utc;
use lazy_static::lazy_static;
use reqwest::{
    Method, StatusCode,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{
    RetryTransientMiddleware, Retryable, RetryableStrategy, default_on_request_failure,
    policies::ExponentialBackoff,
};
use serde::{Serialize, de::DeserializeOwned, ser::Error as _};
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;
use uuid::Uuid;

use super::{Credentials, Error, QueueStatus, RequestError, Result, Stream};

lazy_static! {
    /// The default server that hosts the Ticketmatic API.
    pub static ref TICKETMATIC_SERVER: Url = {
        Url::parse("https://apps.ticketmatic.com/").unwrap()
    };
}

/// Version of the API all URL templates are relative to.
pub const API_VERSION: &str = "1";

/// Number of times transient failures are retried unless configured otherwise.
pub const DEFAULT_RETRIES: u32 = 3;

/// How long a call may take, or for streamed calls how long to wait for the response
/// headers, unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Makes network calls to the Ticketmatic API for a single account.
///
/// The client itself only knows how to build, sign and execute requests (see
/// [`Client::new_request`]). The typed operations live on the endpoints returned by
/// [`Client::contacts`], [`Client::orders`] and friends.
pub struct Client {
    http: ClientWithMiddleware,
    credentials: Credentials,
    server: Url,
    version: String,
    timeout: Duration,
}

impl Client {
    /// Create a new [`Client`] that talks to the default server.
    ///
    /// * `account_code` - short name of the account.
    /// * `access_key` - public part of the API key.
    /// * `secret_key` - private part of the API key, used to sign requests.
    pub fn new(account_code: &str, access_key: &str, secret_key: &str) -> Client {
        Client::builder(Credentials::new(account_code, access_key, secret_key)).build()
    }

    /// Starts building a [`Client`] with non-default settings.
    pub fn builder(credentials: Credentials) -> Builder {
        Builder {
            credentials,
            server: TICKETMATIC_SERVER.clone(),
            retries: DEFAULT_RETRIES,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// The account code used for `{accountname}`.
    pub fn account_code(&self) -> &str {
        &self.credentials.account_code
    }

    /// The server all requests are sent to.
    pub fn server(&self) -> &Url {
        &self.server
    }

    /// Starts a new request.
    ///
    /// * `method` - HTTP method to use.
    /// * `template` - path relative to the API root, e.g. `/{accountname}/contacts/{id}`.
    ///   `{accountname}` is always filled in, other placeholders are given with
    ///   [`Request::url_parameters`].
    /// * `format` - the format of the request and response payloads.
    pub fn new_request(&self, method: Method, template: &str, format: Format) -> Request<'_> {
        Request {
            client: self,
            method,
            template: template.to_string(),
            url_parameters: Vec::new(),
            query: Vec::new(),
            body: None,
            format,
            error: None,
        }
    }
}

/// Builder for a [`Client`], see [`Client::builder`].
pub struct Builder {
    credentials: Credentials,
    server: Url,
    retries: u32,
    timeout: Duration,
}

impl Builder {
    /// Sends requests to another server, e.g. a staging environment or a mock.
    pub fn server(mut self, server: &Url) -> Builder {
        self.server = server.clone();
        self
    }

    /// Sets how many times transient errors are retried with exponential backoff.
    pub fn retries(mut self, retries: u32) -> Builder {
        self.retries = retries;
        self
    }

    /// Sets the time limit of a call. Streamed calls are only limited until the response
    /// headers arrive.
    pub fn timeout(mut self, timeout: Duration) -> Builder {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Client {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.retries);
        let http = ClientBuilder::new(reqwest::Client::new())
            .with(RetryTransientMiddleware::new_with_policy_and_strategy(
                retry_policy,
                TransportFailures,
            ))
            .build();
        Client {
            http,
            credentials: self.credentials,
            server: self.server,
            version: API_VERSION.to_string(),
            timeout: self.timeout,
        }
    }
}

/// Only retries requests that never got a response.
///
/// Error statuses are never retried: calls such as adding payments are not idempotent,
/// and a 429 carries its own backoff.
struct TransportFailures;

impl RetryableStrategy for TransportFailures {
    fn handle(
        &self,
        res: &std::result::Result<reqwest::Response, reqwest_middleware::Error>,
    ) -> Option<Retryable> {
        match res {
            Ok(_) => None,
            Err(err) => default_on_request_failure(err),
        }
    }
}

/// Format of request and response payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// JSON documents, used by nearly every call.
    #[default]
    Json,
    /// Raw SVG text, used for seating plan drawings.
    Svg,
}

impl Format {
    fn mime(&self) -> &'static str {
        match self {
            Format::Json => "application/json",
            Format::Svg => "image/svg+xml",
        }
    }
}

#[derive(Debug)]
enum Body {
    Json(Vec<u8>),
    Svg(String),
}

/// A single call to the API, built up with the methods below and executed with one of
/// [`Request::run`], [`Request::run_empty`], [`Request::run_svg`] or [`Request::stream`].
///
/// Builder methods never fail: an error while encoding a parameter or body is kept and
/// returned when the request is executed.
#[must_use = "a request does nothing until it is run"]
pub struct Request<'a> {
    client: &'a Client,
    method: Method,
    template: String,
    url_parameters: Vec<(String, String)>,
    query: Vec<(String, String)>,
    body: Option<Body>,
    format: Format,
    error: Option<Error>,
}

impl<'a> Request<'a> {
    /// Adds a query parameter.
    ///
    /// Values that are null, empty strings or `false` are left out. Strings are sent as
    /// is, numbers and booleans in their textual form, and lists or objects as JSON.
    /// Setting the same key twice replaces the earlier value.
    pub fn add_parameter<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => {
                if let Some(value) = query_value(value) {
                    self.query.retain(|(k, _)| k != key);
                    self.query.push((key.to_string(), value));
                }
            }
            Err(err) => self.fail(err.into()),
        }
        self
    }

    /// Adds every field of a query struct as a parameter, see [`Request::add_parameter`].
    pub fn add_query<T: Serialize + ?Sized>(mut self, query: &T) -> Self {
        match serde_json::to_value(query) {
            Ok(Value::Object(fields)) => {
                for (key, value) in fields {
                    self = self.add_parameter(&key, &value);
                }
            }
            Ok(Value::Null) => {}
            Ok(other) => self.fail(Error::Json(serde_json::Error::custom(format!(
                "query parameters must be an object, got {other}"
            )))),
            Err(err) => self.fail(err.into()),
        }
        self
    }

    /// Supplies values for `{name}` placeholders in the URL template.
    pub fn url_parameters<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        for (key, value) in parameters {
            let key = key.into();
            self.url_parameters.retain(|(k, _)| *k != key);
            self.url_parameters.push((key, value.to_string()));
        }
        self
    }

    /// Sets a JSON body.
    pub fn body<T: Serialize + ?Sized>(mut self, data: &T) -> Self {
        match serde_json::to_vec(data) {
            Ok(bytes) => self.body = Some(Body::Json(bytes)),
            Err(err) => self.fail(err.into()),
        }
        self
    }

    /// Sets a raw SVG body.
    pub fn svg_body(mut self, data: &str) -> Self {
        self.body = Some(Body::Svg(data.to_string()));
        self
    }

    /// Executes the request and decodes the JSON response.
    pub async fn run<R: DeserializeOwned>(self) -> Result<R> {
        let resp = self.send().await?;
        let bytes = resp.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(Error::EmptyResponse);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Executes the request and ignores whatever the API answers with.
    pub async fn run_empty(self) -> Result<()> {
        self.send().await?;
        Ok(())
    }

    /// Executes the request and returns the raw response body.
    pub async fn run_svg(self) -> Result<String> {
        let resp = self.send().await?;
        Ok(resp.text().await?)
    }

    /// Executes the request and returns a [`Stream`] over the JSON lines in the response.
    ///
    /// The body may take arbitrarily long to arrive, only the wait for the response
    /// headers is limited.
    pub async fn stream(self) -> Result<Stream> {
        let resp = self.send_streamed().await?;
        Ok(Stream::new(resp))
    }

    /// Resolves the URL template and query parameters into a full URL.
    pub fn url(&self) -> Result<Url> {
        let client = self.client;
        let mut url = client.server.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| Error::Url(client.server.to_string()))?;
            segments.pop_if_empty().push("api").push(&client.version);
            for segment in self.template.split('/').filter(|s| !s.is_empty()) {
                match placeholder(segment) {
                    Some("accountname") => {
                        segments.push(&client.credentials.account_code);
                    }
                    Some(name) => {
                        let value = self
                            .url_parameters
                            .iter()
                            .find(|(k, _)| k == name)
                            .map(|(_, v)| v)
                            .ok_or_else(|| Error::MissingUrlParameter(name.to_string()))?;
                        segments.push(value);
                    }
                    None => {
                        segments.push(segment);
                    }
                }
            }
        }
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }

    fn fail(&mut self, err: Error) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }

    async fn send(self) -> Result<reqwest::Response> {
        let timeout = self.client.timeout;
        self.execute(Some(timeout)).await
    }

    async fn send_streamed(self) -> Result<reqwest::Response> {
        let timeout = self.client.timeout;
        tokio::time::timeout(timeout, self.execute(None))
            .await
            .map_err(|_| Error::Timeout(timeout))?
    }

    /// Does the actual call to the API and handles error handling.
    ///
    /// `timeout` bounds the whole exchange, body included.
    async fn execute(mut self, timeout: Option<Duration>) -> Result<reqwest::Response> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        let url = self.url()?;
        let request_id = Uuid::new_v4();
        let client = self.client;
        let mut req = client
            .http
            .request(self.method.clone(), url)
            .header(
                AUTHORIZATION,
                client.credentials.authorization(Utc::now()),
            )
            .header(ACCEPT, self.format.mime())
            .header(
                USER_AGENT,
                concat!("ticketmatic/rust (", env!("CARGO_PKG_VERSION"), ")"),
            )
            .header("X-Request-Id", request_id.to_string());
        if let Some(timeout) = timeout {
            req = req.timeout(timeout);
        }
        req = match self.body.take() {
            Some(Body::Json(bytes)) => req
                .header(CONTENT_TYPE, Format::Json.mime())
                .body(bytes),
            Some(Body::Svg(text)) => req.header(CONTENT_TYPE, Format::Svg.mime()).body(text),
            None => req,
        };

        debug!(method = %self.method, path = %self.template, %request_id, "sending request");
        let resp = req.send().await?;
        let status = resp.status();
        debug!(%status, %request_id, "received response");
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await?;
        if status == StatusCode::TOO_MANY_REQUESTS {
            let queue = serde_json::from_str::<QueueStatus>(&body).unwrap_or_default();
            warn!(backoff = queue.backoff, %request_id, "rate limited");
            return Err(Error::RateLimit(queue));
        }
        Err(RequestError::from_response(status.as_u16(), body).into())
    }
}

/// Returns the name of a `{name}` path segment.
fn placeholder(segment: &str) -> Option<&str> {
    segment.strip_prefix('{')?.strip_suffix('}')
}

/// Turns a JSON value into the textual form used in query strings.
fn query_value(value: Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s),
        Value::Bool(true) => Some("true".to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod test {
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{
            body_json, body_string, header, header_exists, header_regex, method, path,
            query_param, query_param_is_missing,
        },
    };

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Thing {
        id: i64,
        name: String,
    }

    fn client(ms: &MockServer) -> Client {
        Client::builder(Credentials::new("qa", "accesskey", "secretkey"))
            .server(&ms.uri().parse().unwrap())
            .retries(0)
            .build()
    }

    #[test]
    fn builds_url_from_template() {
        let client = Client::new("myaccount", "a", "s");
        let url = client
            .new_request(
                Method::GET,
                "/{accountname}/settings/seatingplans/seatingplans/{id}/svg/{zoneid}",
                Format::Svg,
            )
            .url_parameters([("id", "12"), ("zoneid", "z 1/2")])
            .url()
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://apps.ticketmatic.com/api/1/myaccount/settings/seatingplans/seatingplans/12/svg/z%201%2F2"
        );
    }

    #[test]
    fn keeps_server_path_prefix() {
        let client = Client::builder(Credentials::new("qa", "a", "s"))
            .server(&"http://localhost:8080/proxy/".parse().unwrap())
            .build();
        let url = client
            .new_request(Method::GET, "/{accountname}/contacts", Format::Json)
            .url()
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/proxy/api/1/qa/contacts");
    }

    #[test]
    fn missing_url_parameter() {
        let client = Client::new("qa", "a", "s");
        let err = client
            .new_request(Method::GET, "/{accountname}/contacts/{id}", Format::Json)
            .url()
            .unwrap_err();
        assert!(matches!(err, Error::MissingUrlParameter(name) if name == "id"));
    }

    #[test]
    fn query_parameters_skip_empty_values() {
        let client = Client::new("qa", "a", "s");
        let url = client
            .new_request(Method::GET, "/{accountname}/contacts", Format::Json)
            .add_parameter("filter", "select id from tm.contact")
            .add_parameter("searchterm", "")
            .add_parameter("includearchived", &false)
            .add_parameter("limit", &25)
            .add_parameter("offset", &None::<i64>)
            .add_parameter("simplefilter", &json!({"productionid": 4}))
            .add_parameter("limit", &50)
            .url()
            .unwrap();
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                (
                    "filter".to_string(),
                    "select id from tm.contact".to_string()
                ),
                (
                    "simplefilter".to_string(),
                    r#"{"productionid":4}"#.to_string()
                ),
                ("limit".to_string(), "50".to_string()),
            ]
        );
    }

    #[test]
    fn add_query_expands_struct() {
        #[derive(Serialize)]
        struct Query {
            includearchived: Option<bool>,
            filter: Option<String>,
            lastupdatesince: Option<String>,
        }
        let client = Client::new("qa", "a", "s");
        let url = client
            .new_request(Method::GET, "/{accountname}/events", Format::Json)
            .add_query(&Query {
                includearchived: Some(true),
                filter: None,
                lastupdatesince: Some("2024-01-01 00:00:00".to_string()),
            })
            .url()
            .unwrap();
        let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("includearchived".to_string(), "true".to_string()),
                (
                    "lastupdatesince".to_string(),
                    "2024-01-01 00:00:00".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn has_authentication() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/1/qa/things/1"))
            .and(header_regex(
                "Authorization",
                r"^TM-HMAC-SHA256 key=accesskey ts=\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2} sign=[0-9a-f]{64}$",
            ))
            .and(header("Accept", "application/json"))
            .and(header_exists("X-Request-Id"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "one"})))
            .expect(1)
            .mount(&mock_server)
            .await;
        let thing: Thing = client(&mock_server)
            .new_request(Method::GET, "/{accountname}/things/{id}", Format::Json)
            .url_parameters([("id", 1)])
            .run()
            .await
            .unwrap();
        mock_server.verify().await;
        assert_eq!(
            thing,
            Thing {
                id: 1,
                name: "one".to_string()
            }
        );
    }

    #[tokio::test]
    async fn sends_json_body_and_query() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/1/qa/things"))
            .and(header("Content-Type", "application/json"))
            .and(query_param("output", "ids"))
            .and(query_param_is_missing("includearchived"))
            .and(body_json(json!({"name": "new"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 5, "name": "new"})))
            .expect(1)
            .mount(&mock_server)
            .await;
        let thing: Thing = client(&mock_server)
            .new_request(Method::POST, "/{accountname}/things", Format::Json)
            .add_parameter("output", "ids")
            .add_parameter("includearchived", &false)
            .body(&json!({"name": "new"}))
            .run()
            .await
            .unwrap();
        mock_server.verify().await;
        assert_eq!(thing.id, 5);
    }

    #[tokio::test]
    async fn svg_round_trip() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/1/qa/plans/3/svg/zone1"))
            .and(header("Content-Type", "image/svg+xml"))
            .and(body_string("<svg/>"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<svg>saved</svg>"))
            .expect(1)
            .mount(&mock_server)
            .await;
        let svg = client(&mock_server)
            .new_request(Method::POST, "/{accountname}/plans/{id}/svg/{zoneid}", Format::Svg)
            .url_parameters([("id", "3"), ("zoneid", "zone1")])
            .svg_body("<svg/>")
            .run_svg()
            .await
            .unwrap();
        mock_server.verify().await;
        assert_eq!(svg, "<svg>saved</svg>");
    }

    #[tokio::test]
    async fn run_empty_accepts_no_content() {
        let mock_server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/api/1/qa/things/9"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;
        let deleted = client(&mock_server)
            .new_request(Method::DELETE, "/{accountname}/things/{id}", Format::Json)
            .url_parameters([("id", 9)])
            .run_empty()
            .await;
        mock_server.verify().await;
        assert!(deleted.is_ok());
    }

    #[tokio::test]
    async fn empty_body_is_an_error_when_value_expected() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
        let result = client(&mock_server)
            .new_request(Method::GET, "/{accountname}/things", Format::Json)
            .run::<Thing>()
            .await;
        assert!(matches!(result, Err(Error::EmptyResponse)));
    }

    #[tokio::test]
    async fn bad_status_is_request_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({"code": 404, "message": "Not found"})),
            )
            .mount(&mock_server)
            .await;
        let result = client(&mock_server)
            .new_request(Method::GET, "/{accountname}/things/{id}", Format::Json)
            .url_parameters([("id", 1234)])
            .run::<Thing>()
            .await;
        match result {
            Err(Error::Request(err)) => {
                assert_eq!(err.status, 404);
                assert_eq!(err.message.as_deref(), Some("Not found"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limit() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(429)
                    .set_body_json(json!({"id": "q-1", "backoff": 4, "started": false})),
            )
            .mount(&mock_server)
            .await;
        let result = client(&mock_server)
            .new_request(Method::GET, "/{accountname}/things", Format::Json)
            .run::<Vec<Thing>>()
            .await;
        match result {
            Err(Error::RateLimit(queue)) => {
                assert_eq!(queue.id.as_deref(), Some("q-1"));
                assert_eq!(queue.backoff, 4);
                assert!(!queue.started);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn invalid_json_is_reported() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{not json"))
            .mount(&mock_server)
            .await;
        let result = client(&mock_server)
            .new_request(Method::GET, "/{accountname}/things", Format::Json)
            .run::<Thing>()
            .await;
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[tokio::test]
    async fn unresolved_placeholder_never_hits_network() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;
        let result = client(&mock_server)
            .new_request(Method::GET, "/{accountname}/things/{id}", Format::Json)
            .run_empty()
            .await;
        mock_server.verify().await;
        assert!(matches!(result, Err(Error::MissingUrlParameter(_))));
    }

    #[tokio::test]
    async fn error_statuses_are_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/1/qa/orders/7/payments"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/1/qa/orders/7/logs"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({"backoff": 1})))
            .expect(1)
            .mount(&mock_server)
            .await;
        let client = Client::builder(Credentials::new("qa", "accesskey", "secretkey"))
            .server(&mock_server.uri().parse().unwrap())
            .retries(2)
            .build();
        let payment = client
            .new_request(Method::POST, "/{accountname}/orders/7/payments", Format::Json)
            .body(&json!({"payments": [{"amount": 10}]}))
            .run_empty()
            .await;
        assert!(matches!(payment, Err(Error::Request(err)) if err.status == 500));
        let logs = client
            .new_request(Method::GET, "/{accountname}/orders/7/logs", Format::Json)
            .run::<Vec<Value>>()
            .await;
        assert!(matches!(logs, Err(Error::RateLimit(_))));
        mock_server.verify().await;
    }

    #[tokio::test]
    async fn slow_calls_time_out() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"id": 1, "name": "late"}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&mock_server)
            .await;
        let client = Client::builder(Credentials::new("qa", "accesskey", "secretkey"))
            .server(&mock_server.uri().parse().unwrap())
            .retries(0)
            .timeout(Duration::from_millis(200))
            .build();
        let result = client
            .new_request(Method::GET, "/{accountname}/things/1", Format::Json)
            .run::<Thing>()
            .await;
        assert!(matches!(result, Err(Error::Http(_))));
        let result = client
            .new_request(Method::GET, "/{accountname}/things", Format::Json)
            .stream()
            .await;
        assert!(matches!(result, Err(Error::Timeout(_))));
    }

    #[tokio::test]
    async fn streamed_body_outlives_timeout() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    return;
                }
                request.extend_from_slice(&buf[..n]);
            }
            socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nTransfer-Encoding: chunked\r\n\r\n9\r\n{\"id\":1}\n\r\n",
                )
                .await
                .unwrap();
            tokio::time::sleep(Duration::from_secs(1)).await;
            socket
                .write_all(b"9\r\n{\"id\":2}\n\r\n0\r\n\r\n")
                .await
                .unwrap();
        });

        let client = Client::builder(Credentials::new("qa", "accesskey", "secretkey"))
            .server(&format!("http://{addr}").parse().unwrap())
            .retries(0)
            .timeout(Duration::from_millis(300))
            .build();
        let mut rows = client
            .new_request(Method::GET, "/{accountname}/tools/queries/export", Format::Json)
            .stream()
            .await
            .unwrap();
        assert_eq!(rows.next::<Value>().await.unwrap(), Some(json!({"id": 1})));
        assert_eq!(rows.next::<Value>().await.unwrap(), Some(json!({"id": 2})));
        assert_eq!(rows.next::<Value>().await.unwrap(), None);
    }

    #[tokio::test]
    async fn query_must_be_an_object() {
        let result = Client::new("qa", "a", "s")
            .new_request(Method::GET, "/{accountname}/things", Format::Json)
            .add_query(&[1, 2])
            .run_empty()
            .await;
        match result {
            Err(err @ Error::Json(_)) => {
                assert!(err.to_string().contains("query parameters must be an object"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
