//! Typed client for the inventory REST API.
//!
//! One method per (resource, operation) pair, mirroring the endpoint table
//! the backend exposes under `/api`. Category payloads travel as multipart
//! form data so the optional image file can ride along; product payloads are
//! plain JSON. That asymmetry is the backend's contract, not an accident.
//!
//! No call is retried, cancelled, or timed out here; the UI stays
//! responsive because every call runs on the worker runtime.

mod error;
mod types;

pub use error::ApiError;
pub use types::{Category, CategoryDraft, ImageAttachment, Product, ProductDraft};

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

/// Resolve a category image reference into a displayable URL.
///
/// The API returns either an absolute URL or a host-relative path depending
/// on how the image was stored; relative paths are prefixed with the API
/// host (without the `/api` segment).
pub fn resolve_image_url(host: &str, reference: &str) -> String {
    if reference.starts_with("http") {
        reference.to_string()
    } else {
        format!("{}{}", host.trim_end_matches('/'), reference)
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    host: String,
}

impl ApiClient {
    pub fn new(host: &str) -> Self {
        Self {
            http: Client::new(),
            host: host.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api{}", self.host, path)
    }

    // -- Categories ----------------------------------------------------------

    pub async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let url = self.endpoint("/categorias/");
        let resp = self.send_get(&url).await?;
        decode(checked(resp, &url).await?, &url).await
    }

    pub async fn get_category(&self, id: i64) -> Result<Category, ApiError> {
        let url = self.endpoint(&format!("/categorias/{id}/"));
        let resp = self.send_get(&url).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                resource: "categoría",
                id,
            });
        }
        decode(checked(resp, &url).await?, &url).await
    }

    pub async fn create_category(&self, draft: &CategoryDraft) -> Result<Category, ApiError> {
        let url = self.endpoint("/categorias/");
        let resp = self
            .http
            .post(&url)
            .multipart(category_form(draft))
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        decode(checked(resp, &url).await?, &url).await
    }

    /// Full replace of all editable fields. When `draft.image` is `None`
    /// the `imagen` part is omitted from the form; the server decides
    /// whether that keeps or clears a stored image.
    pub async fn update_category(
        &self,
        id: i64,
        draft: &CategoryDraft,
    ) -> Result<Category, ApiError> {
        let url = self.endpoint(&format!("/categorias/{id}/"));
        let resp = self
            .http
            .put(&url)
            .multipart(category_form(draft))
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                resource: "categoría",
                id,
            });
        }
        decode(checked(resp, &url).await?, &url).await
    }

    /// Fails with [`ApiError::Conflict`] when products still reference the
    /// category; the API signals that case with a 400.
    pub async fn delete_category(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/categorias/{id}/"));
        let resp = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        match resp.status() {
            StatusCode::BAD_REQUEST => Err(ApiError::Conflict {
                message: body_text(resp).await,
            }),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound {
                resource: "categoría",
                id,
            }),
            status if status.is_success() => Ok(()),
            status => Err(ApiError::Status {
                status: status.as_u16(),
                body: body_text(resp).await,
            }),
        }
    }

    // -- Products ------------------------------------------------------------

    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = self.endpoint("/productos/");
        let resp = self.send_get(&url).await?;
        decode(checked(resp, &url).await?, &url).await
    }

    pub async fn get_product(&self, id: i64) -> Result<Product, ApiError> {
        let url = self.endpoint(&format!("/productos/{id}/"));
        let resp = self.send_get(&url).await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                resource: "producto",
                id,
            });
        }
        decode(checked(resp, &url).await?, &url).await
    }

    pub async fn create_product(&self, draft: &ProductDraft) -> Result<Product, ApiError> {
        let url = self.endpoint("/productos/");
        let resp = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        decode(checked(resp, &url).await?, &url).await
    }

    pub async fn update_product(&self, id: i64, draft: &ProductDraft) -> Result<Product, ApiError> {
        let url = self.endpoint(&format!("/productos/{id}/"));
        let resp = self
            .http
            .put(&url)
            .json(draft)
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound {
                resource: "producto",
                id,
            });
        }
        decode(checked(resp, &url).await?, &url).await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("/productos/{id}/"));
        let resp = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(|source| transport(&url, source))?;
        match resp.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound {
                resource: "producto",
                id,
            }),
            status if status.is_success() => Ok(()),
            status => Err(ApiError::Status {
                status: status.as_u16(),
                body: body_text(resp).await,
            }),
        }
    }

    async fn send_get(&self, url: &str) -> Result<Response, ApiError> {
        self.http
            .get(url)
            .send()
            .await
            .map_err(|source| transport(url, source))
    }
}

fn transport(url: &str, source: reqwest::Error) -> ApiError {
    ApiError::Transport {
        url: url.to_string(),
        source,
    }
}

/// Map a non-success response to [`ApiError::Status`], passing success through.
async fn checked(resp: Response, url: &str) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        tracing::debug!(%url, status = status.as_u16(), "request rejected");
        Err(ApiError::Status {
            status: status.as_u16(),
            body: body_text(resp).await,
        })
    }
}

async fn decode<T: DeserializeOwned>(resp: Response, url: &str) -> Result<T, ApiError> {
    resp.json().await.map_err(|source| ApiError::Decode {
        url: url.to_string(),
        source,
    })
}

async fn body_text(resp: Response) -> String {
    resp.text().await.unwrap_or_default()
}

fn category_form(draft: &CategoryDraft) -> Form {
    let mut form = Form::new()
        .text("nombre", draft.name.clone())
        .text("descripcion", draft.description.clone());
    if let Some(image) = &draft.image {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(image_mime(&image.file_name))
            .expect("static mime literal");
        form = form.part("imagen", part);
    }
    form
}

fn image_mime(file_name: &str) -> &'static str {
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".png") {
        "image/png"
    } else if lower.ends_with(".jpg") || lower.ends_with(".jpeg") {
        "image/jpeg"
    } else if lower.ends_with(".gif") {
        "image/gif"
    } else if lower.ends_with(".webp") {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}
