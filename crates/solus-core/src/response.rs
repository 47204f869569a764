//! Response decoding and error normalization.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Error, HttpError, Result};

/// Single-resource envelope: `{"data": T}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Wrapped payload
    pub data: T,
}

/// A fully read response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// Status code
    pub status: u16,
    /// Body bytes
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Check the status code against `expected` and decode the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any other status code and [`Error::Decode`]
    /// when the body does not parse.
    pub fn decode<T>(&self, method: &str, path: &str, expected: u16) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.expect_status(method, path, expected)?;
        serde_json::from_slice(&self.body).map_err(|e| Error::Decode {
            body: String::from_utf8_lossy(&self.body).into_owned(),
            message: e.to_string(),
        })
    }

    /// Check the status code only, ignoring the body.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any other status code.
    pub fn expect_status(&self, method: &str, path: &str, expected: u16) -> Result<()> {
        if self.status == expected {
            Ok(())
        } else {
            Err(HttpError::new(method, path, self.status, &self.body).into())
        }
    }
}
