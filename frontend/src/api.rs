#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use js_sys::Date;

use crate::models::{Category, CategoryPayload};
#[cfg(feature = "mock")]
use crate::models;

// API base URL - resolved at compile time, defaults to local dev address.
// Deployments set the BACKOFFICE_API_BASE environment variable.
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("BACKOFFICE_API_BASE") {
    Some(url) => url,
    None => "http://localhost:8080/api",
};

/// Fetch the complete category list.
///
/// The catalog service returns the full, unpaginated set as a JSON array,
/// in its own order; no client-side sorting is applied.
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_categories());
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/categories?_ts={}", API_BASE, Date::now() as u64);

        let response = Request::get(&url)
            .header("Cache-Control", "no-cache, no-store, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        let categories: Vec<Category> = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))?;

        Ok(categories)
    }
}

/// Create a category and return the record the service persisted.
pub async fn create_category(payload: &CategoryPayload) -> Result<Category, String> {
    if payload.name.trim().is_empty() {
        return Err("category name is empty".to_string());
    }

    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_create_category(payload));
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}/categories", API_BASE);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .json(payload)
            .map_err(|e| format!("Serialize error: {:?}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {:?}", e))?;

        if !response.ok() {
            return Err(format!("HTTP error: {}", response.status()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {:?}", e))
    }
}
