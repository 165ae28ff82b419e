use crate::models::Booking;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Map, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the document store
#[derive(Debug, Error)]
pub enum FirestoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key or rules denied access")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Source of a user's booking records
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Bookings made under `user_email`, newest booking date first
    async fn bookings_for(&self, user_email: &str) -> Result<Vec<Booking>, FirestoreError>;
}

/// Firestore REST client
///
/// Only runs structured queries; documents are decoded from Firestore's typed
/// value encoding into plain JSON before deserializing.
pub struct FirestoreClient {
    base_url: String,
    api_key: String,
    project_id: String,
    database_id: String,
    bookings_collection: String,
    client: Client,
}

impl FirestoreClient {
    /// Create a new Firestore client
    pub fn new(
        base_url: String,
        api_key: String,
        project_id: String,
        database_id: String,
        bookings_collection: String,
        timeout: Duration,
    ) -> Result<Self, FirestoreError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key,
            project_id,
            database_id,
            bookings_collection,
            client,
        })
    }

    fn run_query_url(&self) -> String {
        let mut url = format!(
            "{}/projects/{}/databases/{}/documents:runQuery",
            self.base_url.trim_end_matches('/'),
            self.project_id,
            self.database_id,
        );

        if !self.api_key.is_empty() {
            url.push_str("?key=");
            url.push_str(&urlencoding::encode(&self.api_key));
        }

        url
    }

    /// Run a structured query and return the decoded documents
    ///
    /// Each returned object carries the document id under `id`.
    pub async fn run_query(&self, structured_query: Value) -> Result<Vec<Value>, FirestoreError> {
        let response = self
            .client
            .post(self.run_query_url())
            .json(&json!({ "structuredQuery": structured_query }))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(FirestoreError::Unauthorized);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unable to read body".to_string());
            tracing::error!("Firestore query failed: {} - {}", status, body);
            return Err(FirestoreError::ApiError(format!("Query failed: {}", status)));
        }

        let json: Value = response.json().await?;

        let results = json
            .as_array()
            .ok_or_else(|| FirestoreError::InvalidResponse("Expected an array of query results".into()))?;

        // Results without a `document` only carry a read time (e.g. no matches)
        let documents = results
            .iter()
            .filter_map(|result| result.get("document"))
            .map(decode_document)
            .collect();

        Ok(documents)
    }
}

#[async_trait]
impl BookingStore for FirestoreClient {
    async fn bookings_for(&self, user_email: &str) -> Result<Vec<Booking>, FirestoreError> {
        let query = json!({
            "from": [{ "collectionId": self.bookings_collection }],
            "where": {
                "fieldFilter": {
                    "field": { "fieldPath": "userEmail" },
                    "op": "EQUAL",
                    "value": { "stringValue": user_email }
                }
            },
            "orderBy": [{
                "field": { "fieldPath": "bookingDate" },
                "direction": "DESCENDING"
            }]
        });

        tracing::debug!("Querying bookings for {}", user_email);

        let documents = self.run_query(query).await?;
        let total = documents.len();

        let bookings: Vec<Booking> = documents
            .into_iter()
            .filter_map(|doc| match serde_json::from_value(doc) {
                Ok(booking) => Some(booking),
                Err(e) => {
                    tracing::warn!("Skipping malformed booking document for {}: {}", user_email, e);
                    None
                }
            })
            .collect();

        tracing::debug!("Loaded {} bookings for {} ({} documents)", bookings.len(), user_email, total);

        Ok(bookings)
    }
}

/// Flatten a Firestore document into `{ "id": ..., <fields> }`
fn decode_document(document: &Value) -> Value {
    let mut object = match document.get("fields") {
        Some(Value::Object(fields)) => decode_fields(fields),
        _ => Map::new(),
    };

    if let Some(id) = document
        .get("name")
        .and_then(Value::as_str)
        .and_then(|name| name.rsplit('/').next())
    {
        object.insert("id".to_string(), Value::String(id.to_string()));
    }

    Value::Object(object)
}

fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), decode_value(value)))
        .collect()
}

/// Convert one typed Firestore value (`{"stringValue": "x"}`) to plain JSON
fn decode_value(value: &Value) -> Value {
    let Some((kind, inner)) = value.as_object().and_then(|o| o.iter().next()) else {
        return Value::Null;
    };

    match kind.as_str() {
        "stringValue" | "timestampValue" | "referenceValue" | "booleanValue" | "doubleValue" => inner.clone(),
        // 64-bit integers travel as strings
        "integerValue" => inner
            .as_str()
            .and_then(|s| s.parse::<i64>().ok())
            .map(Value::from)
            .unwrap_or_else(|| inner.clone()),
        "mapValue" => match inner.get("fields") {
            Some(Value::Object(fields)) => Value::Object(decode_fields(fields)),
            _ => Value::Object(Map::new()),
        },
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;

    fn client(base_url: &str) -> FirestoreClient {
        FirestoreClient::new(
            base_url.to_string(),
            "test_key".to_string(),
            "tripcraft-demo".to_string(),
            "(default)".to_string(),
            "bookings".to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_run_query_url() {
        let client = client("https://firestore.test/v1/");
        assert_eq!(
            client.run_query_url(),
            "https://firestore.test/v1/projects/tripcraft-demo/databases/(default)/documents:runQuery?key=test_key"
        );
    }

    #[test]
    fn test_decode_document() {
        let doc = json!({
            "name": "projects/p/databases/(default)/documents/bookings/abc123",
            "fields": {
                "destination": { "stringValue": "Kerala Backwaters" },
                "numberOfPeople": { "integerValue": "3" },
                "tags": { "arrayValue": { "values": [{ "stringValue": "family" }] } },
                "meta": { "mapValue": { "fields": { "paid": { "booleanValue": true } } } },
                "note": { "nullValue": null }
            }
        });

        let decoded = decode_document(&doc);
        assert_eq!(decoded["id"], "abc123");
        assert_eq!(decoded["destination"], "Kerala Backwaters");
        assert_eq!(decoded["numberOfPeople"], 3);
        assert_eq!(decoded["tags"][0], "family");
        assert_eq!(decoded["meta"]["paid"], true);
        assert!(decoded["note"].is_null());
    }

    #[tokio::test]
    async fn test_bookings_for_parses_results() {
        let mut server = mockito::Server::new_async().await;
        let body = json!([
            {
                "document": {
                    "name": "projects/p/databases/(default)/documents/bookings/b1",
                    "fields": {
                        "destination": { "stringValue": "Paris Romance" },
                        "bookingDate": { "stringValue": "2025-01-10" },
                        "travelDate": { "stringValue": "2025-05-01" },
                        "status": { "stringValue": "pending" },
                        "price": { "stringValue": "₹1,50,000" },
                        "numberOfPeople": { "integerValue": "2" },
                        "userEmail": { "stringValue": "asha@example.com" },
                        "userName": { "stringValue": "Asha" }
                    }
                },
                "readTime": "2025-01-11T00:00:00Z"
            },
            {
                "document": {
                    "name": "projects/p/databases/(default)/documents/bookings/broken",
                    "fields": { "destination": { "stringValue": "No dates" } }
                }
            }
        ]);
        let mock = server
            .mock("POST", mockito::Matcher::Regex("documents:runQuery".to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await;

        let bookings = client(&server.url()).bookings_for("asha@example.com").await.unwrap();

        mock.assert_async().await;
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].id, "b1");
        assert_eq!(bookings[0].status, BookingStatus::Pending);
    }

    #[derive(Clone, Default)]
    struct CapturedLogs(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_unknown_status_is_skipped_with_warning() {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let mut server = mockito::Server::new_async().await;
        let body = json!([
            {
                "document": {
                    "name": "projects/p/databases/(default)/documents/bookings/ok",
                    "fields": {
                        "destination": { "stringValue": "Goa Beach Paradise" },
                        "bookingDate": { "stringValue": "2025-01-10" },
                        "travelDate": { "stringValue": "2025-02-01" },
                        "status": { "stringValue": "confirmed" },
                        "price": { "stringValue": "₹15,000" },
                        "numberOfPeople": { "integerValue": "2" },
                        "userEmail": { "stringValue": "asha@example.com" }
                    }
                }
            },
            {
                "document": {
                    "name": "projects/p/databases/(default)/documents/bookings/odd",
                    "fields": {
                        "destination": { "stringValue": "Bali Island Escape" },
                        "bookingDate": { "stringValue": "2025-01-09" },
                        "travelDate": { "stringValue": "2025-06-01" },
                        "status": { "stringValue": "refunded" },
                        "price": { "stringValue": "₹60,000" },
                        "numberOfPeople": { "integerValue": "2" },
                        "userEmail": { "stringValue": "asha@example.com" }
                    }
                }
            }
        ]);
        let _mock = server
            .mock("POST", mockito::Matcher::Any)
            .with_status(200)
            .with_body(body.to_string())
            .create_async()
            .await;

        let bookings = client(&server.url()).bookings_for("asha@example.com").await.unwrap();

        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].id, "ok");

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("WARN"), "expected a warning, got: {}", output);
        assert!(output.contains("Skipping malformed booking document for asha@example.com"));
    }

    #[tokio::test]
    async fn test_no_matches_is_empty() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"[{"readTime":"2025-01-11T00:00:00Z"}]"#)
            .create_async()
            .await;

        let bookings = client(&server.url()).bookings_for("nobody@example.com").await.unwrap();
        assert!(bookings.is_empty());
    }

    #[tokio::test]
    async fn test_permission_denied() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", mockito::Matcher::Any)
            .with_status(403)
            .create_async()
            .await;

        let result = client(&server.url()).bookings_for("asha@example.com").await;
        assert!(matches!(result, Err(FirestoreError::Unauthorized)));
    }
}
