use reqwest::Client as HttpClient;
use reqwest::header::CONTENT_TYPE;

/// Status and body returned by the graph store, passed back verbatim.
#[derive(Debug, Clone)]
pub struct SparqlResponse {
    pub status: u16,
    pub body: String,
}

impl SparqlResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Client for the graph-query endpoint (Neptune or any SPARQL-over-HTTP
/// store). The statement is forwarded as an opaque string; nothing here
/// inspects the query language.
pub struct SparqlClient {
    http: HttpClient,
    endpoint: String,
}

impl SparqlClient {
    #[must_use]
    pub fn new(endpoint: &str) -> Self {
        Self {
            http: HttpClient::new(),
            endpoint: endpoint.to_string(),
        }
    }

    /// POST the raw statement to the endpoint, forwarding the caller's
    /// `Content-Type` when present.
    ///
    /// # Errors
    ///
    /// Returns a [`reqwest::Error`] when the request cannot be sent or the
    /// response body cannot be read. Non-2xx statuses are not errors; the
    /// store's status code is part of the response.
    pub async fn post(
        &self,
        statement: &str,
        content_type: Option<&str>,
    ) -> Result<SparqlResponse, reqwest::Error> {
        let mut request = self.http.post(&self.endpoint).body(statement.to_string());
        if let Some(ct) = content_type {
            request = request.header(CONTENT_TYPE, ct);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(SparqlResponse { status, body })
    }
}
