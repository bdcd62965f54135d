use mockall::automock;
use serde_json::Value;

use crate::errors::ApiError;

/// Raw access to the Esper REST API. Paths are relative to the API base URL.
#[automock]
pub trait EsperClient {
    fn get_host(&self) -> String;

    fn get(&self, path: String, query: Vec<(String, String)>) -> Result<Value, ApiError>;
    fn post(&self, path: String, body: Value) -> Result<Value, ApiError>;
    fn patch(&self, path: String, body: Value) -> Result<Value, ApiError>;
    fn delete(&self, path: String) -> Result<(), ApiError>;
}
