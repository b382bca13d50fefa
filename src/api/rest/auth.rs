//! Request signing.
//!
//! Every call carries an `Authorization` header of the form
//! `TM-HMAC-SHA256 key=<access key> ts=<timestamp> sign=<signature>`, where the signature
//! is the hex encoded HMAC-SHA256 of access key, account code and timestamp, keyed with
//! the secret key.
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Layout of the `ts` part of the header. Always UTC.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// API credentials for a single account.
#[derive(Clone)]
pub struct Credentials {
    /// Short code of the account, substituted for `{accountname}` in every URL.
    pub account_code: String,
    /// Public part of the API key.
    pub access_key: String,
    /// Private part of the API key. Never sent over the wire.
    pub secret_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account_code", &self.account_code)
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

impl Credentials {
    pub fn new(account_code: &str, access_key: &str, secret_key: &str) -> Credentials {
        Credentials {
            account_code: account_code.to_string(),
            access_key: access_key.to_string(),
            secret_key: secret_key.to_string(),
        }
    }

    /// Builds the value of the `Authorization` header for a request made at `now`.
    pub fn authorization(&self, now: DateTime<Utc>) -> String {
        let ts = now.format(TIMESTAMP_FORMAT).to_string();
        format!(
            "TM-HMAC-SHA256 key={} ts={} sign={}",
            self.access_key,
            ts,
            sign(&self.access_key, &self.secret_key, &self.account_code, &ts)
        )
    }
}

/// Computes the request signature.
pub fn sign(access_key: &str, secret_key: &str, account_code: &str, ts: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret_key.as_bytes()).expect("HMAC can take key of any size");
    mac.update(access_key.as_bytes());
    mac.update(account_code.as_bytes());
    mac.update(ts.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
