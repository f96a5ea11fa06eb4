use contracts::domain::a001_employee::{Employee, EmployeeUpsert};
use contracts::domain::common::AggregateRoot;
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, item_path, read_json, send, ApiError};

/// REST client for the `employee` collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeesApi {
    base_url: String,
}

impl EmployeesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn collection_url(&self) -> String {
        api_url(&self.base_url, Employee::collection_name())
    }

    pub fn item_url(&self, id: &str) -> String {
        api_url(&self.base_url, &item_path(Employee::collection_name(), id))
    }

    /// Fetch all employees
    pub async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        let url = self.collection_url();
        log::debug!("GET {}", url);
        let response = send(Request::get(&url).build().map_err(request_error)?).await?;
        read_json(response).await
    }

    pub async fn get(&self, id: &str) -> Result<Employee, ApiError> {
        let url = self.item_url(id);
        log::debug!("GET {}", url);
        let response = send(Request::get(&url).build().map_err(request_error)?).await?;
        read_json(response).await
    }

    /// Create an employee; the backend assigns the id
    pub async fn create(&self, payload: &EmployeeUpsert) -> Result<Employee, ApiError> {
        let url = self.collection_url();
        log::debug!("POST {}", url);
        let request = Request::post(&url)
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        read_json(send(request).await?).await
    }

    /// Replace every field of employee `id`
    pub async fn update(&self, id: &str, payload: &EmployeeUpsert) -> Result<Employee, ApiError> {
        let url = self.item_url(id);
        log::debug!("PUT {}", url);
        let request = Request::put(&url)
            .json(payload)
            .map_err(|e| ApiError::Encode(e.to_string()))?;
        read_json(send(request).await?).await
    }

    /// Delete employee `id`. The response body is ignored.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);
        send(Request::delete(&url).build().map_err(request_error)?).await?;
        Ok(())
    }
}

fn request_error(e: gloo_net::Error) -> ApiError {
    ApiError::Request(e.to_string())
}
