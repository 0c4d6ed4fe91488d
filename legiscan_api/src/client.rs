//! HTTP client for the LegiScan legislative data API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

use crate::{
    types::{Bill, Person, RollCall, Session, SponsoredBill},
    Error,
};

/// HTTP client for the LegiScan API.
///
/// Every operation is a GET against the API root with `key` and `op`
/// query parameters. Responses arrive inside a `{"status": ...}` envelope;
/// the client unwraps it and returns the typed payload. Each request builds
/// a fresh `reqwest::Client` with a 30-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://api.legiscan.com`.
    base_api_url: String,
    api_key: String,
}

impl Client {
    /// Creates a new client pointing at the production LegiScan API.
    pub fn new(api_key: &str) -> Self {
        Self {
            base_api_url: "https://api.legiscan.com".to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn get_url(&self, op: &str, params: &[(&str, String)]) -> Result<Url, Error> {
        let mut url = Url::parse(format!("{}/", &self.base_api_url).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("op", op);
        for (name, value) in params {
            url.query_pairs_mut().append_pair(name, value);
        }
        Ok(url)
    }

    async fn get_operation<T>(
        &self,
        op: &str,
        params: &[(&str, String)],
        payload_key: &str,
    ) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let url = self.get_url(op, params)?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("{} request failed: {}", op, e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read {} response body: {}", op, e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("{} failed with status {}: {}", op, status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let mut envelope = serde_json::from_str::<serde_json::Value>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse {} response: {} | body: {}", op, e, snippet);
            Error::Decode {
                operation: op.to_string(),
                message: e.to_string(),
            }
        })?;

        match envelope.get("status").and_then(|s| s.as_str()) {
            Some("OK") => {}
            Some("ERROR") => {
                let message = envelope
                    .get("alert")
                    .and_then(|a| a.get("message"))
                    .and_then(|m| m.as_str())
                    .unwrap_or("unspecified upstream error")
                    .to_string();
                tracing::error!("{} returned API error: {}", op, message);
                return Err(Error::Api { message });
            }
            other => {
                tracing::error!("{} returned unexpected status field: {:?}", op, other);
                return Err(Error::Decode {
                    operation: op.to_string(),
                    message: "missing or unrecognized status field".to_string(),
                });
            }
        }

        let payload = match envelope.get_mut(payload_key) {
            Some(payload) => payload.take(),
            None => {
                tracing::error!("{} response missing '{}' payload", op, payload_key);
                return Err(Error::Decode {
                    operation: op.to_string(),
                    message: format!("missing '{}' payload", payload_key),
                });
            }
        };

        serde_json::from_value::<T>(payload).map_err(|e| {
            tracing::error!("Failed to decode {} payload: {}", op, e);
            Error::Decode {
                operation: op.to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Fetches the full session list for a state, newest first as the
    /// upstream orders it.
    pub async fn get_session_list(&self, state: &str) -> Result<Vec<Session>, Error> {
        self.get_operation("getSessionList", &[("state", state.to_string())], "sessions")
            .await
    }

    /// Fetches a single bill with sponsors, vote references, and texts.
    pub async fn get_bill(&self, bill_id: i64) -> Result<Bill, Error> {
        self.get_operation("getBill", &[("id", bill_id.to_string())], "bill")
            .await
    }

    /// Fetches a single roll call with its individual votes.
    pub async fn get_roll_call(&self, roll_call_id: i64) -> Result<RollCall, Error> {
        self.get_operation("getRollCall", &[("id", roll_call_id.to_string())], "roll_call")
            .await
    }

    /// Fetches a single legislator record.
    pub async fn get_person(&self, people_id: i64) -> Result<Person, Error> {
        self.get_operation("getPerson", &[("id", people_id.to_string())], "person")
            .await
    }

    /// Fetches the roster of legislators active in a session.
    pub async fn get_session_people(&self, session_id: i64) -> Result<Vec<Person>, Error> {
        let payload: SessionPeoplePayload = self
            .get_operation(
                "getSessionPeople",
                &[("id", session_id.to_string())],
                "sessionpeople",
            )
            .await?;
        Ok(payload.people)
    }

    /// Fetches the summaries of every bill a legislator has sponsored.
    pub async fn get_sponsored_list(&self, people_id: i64) -> Result<Vec<SponsoredBill>, Error> {
        let payload: SponsoredListPayload = self
            .get_operation(
                "getSponsoredList",
                &[("id", people_id.to_string())],
                "sponsoredbills",
            )
            .await?;
        Ok(payload.bills)
    }
}

#[derive(Deserialize)]
struct SessionPeoplePayload {
    people: Vec<Person>,
}

#[derive(Deserialize)]
struct SponsoredListPayload {
    bills: Vec<SponsoredBill>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
