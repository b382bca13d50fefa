use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::api::serialize::Time;

use super::{Client, Format, Result, Stream};

/// A query on the public data model.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueryRequest {
    /// SQL query to execute. Read-only.
    pub query: String,
    /// Number of rows to skip. Default 0.
    pub offset: Option<i64>,
    /// Maximum number of rows. Default 100.
    pub limit: Option<i64>,
}

/// Result of a query on the public data model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    /// The number of rows in the result.
    #[serde(default)]
    pub nbrofresults: i64,
    /// The actual rows, keyed by column name.
    #[serde(default)]
    pub results: Vec<Map<String, Value>>,
}

/// Period to group tickets processed statistics by.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Groupby {
    Day,
    Month,
}

/// Parameters for [`Client::tickets_processed_statistics`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
pub struct TicketsProcessedRequest {
    pub startts: Option<Time>,
    pub endts: Option<Time>,
    pub groupby: Option<Groupby>,
}

/// Number of tickets processed in a single period.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketsProcessedStatistics {
    /// Start of the period.
    pub ts: Option<Time>,
    /// Counts per kind of processing.
    #[serde(flatten)]
    pub counts: Map<String, Value>,
}

/// QueryStream reads the rows of an export one by one.
pub struct QueryStream(Stream);

impl QueryStream {
    /// Returns the next row, or `None` once all rows have been read.
    pub async fn next(&mut self) -> Result<Option<Map<String, Value>>> {
        self.0.next().await
    }

    pub fn close(&mut self) {
        self.0.close()
    }

    /// Turns the export into a [`futures::Stream`] of rows.
    pub fn into_stream(self) -> impl futures::Stream<Item = Result<Map<String, Value>>> {
        self.0.into_stream()
    }
}

impl Client {
    /// Executes a read-only query on the public data model.
    ///
    /// Not meant for long-running queries or large results, use [`Client::export`] for
    /// those.
    pub async fn queries(&self, data: &QueryRequest) -> Result<QueryResult> {
        self.new_request(Method::POST, "/{accountname}/tools/queries", Format::Json)
            .body(data)
            .run()
            .await
    }

    /// Executes a query on the public data model and streams back the rows as JSON
    /// lines (<http://jsonlines.org/>).
    pub async fn export(&self, data: &QueryRequest) -> Result<QueryStream> {
        let stream = self
            .new_request(Method::POST, "/{accountname}/tools/queries/export", Format::Json)
            .body(data)
            .stream()
            .await?;
        Ok(QueryStream(stream))
    }

    /// Returns the number of tickets processed and sold online during a period, grouped
    /// by day or month.
    pub async fn tickets_processed_statistics(
        &self,
        params: Option<&TicketsProcessedRequest>,
    ) -> Result<Vec<TicketsProcessedStatistics>> {
        let mut req = self.new_request(
            Method::GET,
            "/{accountname}/tools/ticketsprocessedstatistics",
            Format::Json,
        );
        if let Some(params) = params {
            req = req.add_query(params);
        }
        req.run().await
    }
}
