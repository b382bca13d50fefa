use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::api::serialize::Time;

use super::{Client, Format, Result};

/// Server time, as returned by [`Client::time`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timestamp {
    pub systemtime: Time,
}

impl Client {
    /// Returns the current time on the API server.
    ///
    /// Requests are signed with the local clock, so this is useful to check whether
    /// it drifted.
    pub async fn time(&self) -> Result<Timestamp> {
        self.new_request(Method::GET, "/{accountname}/diagnostics/time", Format::Json)
            .run()
            .await
    }
}
