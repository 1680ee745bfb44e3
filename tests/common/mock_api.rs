//! In-process stand-in for the deployed inventory API.
//!
//! Implements the same routes and payload conventions: category writes
//! are multipart form data, product writes are JSON, and deleting a
//! category that products still reference fails with a 400.

#![allow(dead_code)]

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use inventario::api::{Category, Product};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Default)]
struct Store {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Store {
    fn next_category_id(&self) -> i64 {
        self.categories.iter().map(|c| c.id).max().unwrap_or(0) + 1
    }

    fn next_product_id(&self) -> i64 {
        self.products.iter().map(|p| p.id).max().unwrap_or(0) + 1
    }
}

type Shared = Arc<Mutex<Store>>;

pub struct MockApi {
    pub host: String,
}

pub async fn spawn() -> MockApi {
    let store: Shared = Arc::new(Mutex::new(Store::default()));
    let router = Router::new()
        .route(
            "/api/categorias/",
            get(list_categories).post(create_category),
        )
        .route(
            "/api/categorias/{id}/",
            get(get_category)
                .put(update_category)
                .delete(delete_category),
        )
        .route("/api/productos/", get(list_products).post(create_product))
        .route(
            "/api/productos/{id}/",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(store);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    MockApi {
        host: format!("http://{addr}"),
    }
}

// -- Categories ---------------------------------------------------------------

struct CategoryForm {
    name: Option<String>,
    description: Option<String>,
    image: Option<String>,
}

/// Drain the multipart body. Files are not persisted; the stored image
/// reference mirrors the deployed API's media path shape.
async fn read_category_form(mut multipart: Multipart) -> CategoryForm {
    let mut form = CategoryForm {
        name: None,
        description: None,
        image: None,
    };
    while let Some(field) = multipart.next_field().await.unwrap() {
        match field.name() {
            Some("nombre") => form.name = Some(field.text().await.unwrap()),
            Some("descripcion") => form.description = Some(field.text().await.unwrap()),
            Some("imagen") => {
                let file_name = field.file_name().unwrap_or("imagen").to_string();
                let _ = field.bytes().await.unwrap();
                form.image = Some(format!("/media/categorias/{file_name}"));
            }
            _ => {}
        }
    }
    form
}

async fn list_categories(State(store): State<Shared>) -> Json<Vec<Category>> {
    Json(store.lock().unwrap().categories.clone())
}

async fn create_category(State(store): State<Shared>, multipart: Multipart) -> Response {
    let form = read_category_form(multipart).await;
    let (Some(name), Some(description)) = (form.name, form.description) else {
        return StatusCode::BAD_REQUEST.into_response();
    };
    let mut store = store.lock().unwrap();
    let category = Category {
        id: store.next_category_id(),
        name,
        description,
        image: form.image,
    };
    store.categories.push(category.clone());
    (StatusCode::CREATED, Json(category)).into_response()
}

async fn get_category(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    let store = store.lock().unwrap();
    match store.categories.iter().find(|c| c.id == id) {
        Some(category) => Json(category.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn update_category(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Response {
    let form = read_category_form(multipart).await;
    let mut store = store.lock().unwrap();
    let Some(category) = store.categories.iter_mut().find(|c| c.id == id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if let Some(name) = form.name {
        category.name = name;
    }
    if let Some(description) = form.description {
        category.description = description;
    }
    // An omitted imagen part keeps the stored reference.
    if let Some(image) = form.image {
        category.image = Some(image);
    }
    Json(category.clone()).into_response()
}

async fn delete_category(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut store = store.lock().unwrap();
    if store.categories.iter().all(|c| c.id != id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    if store.products.iter().any(|p| p.category == id) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "detail": "No se puede eliminar la categoría porque tiene productos asociados"
            })),
        )
            .into_response();
    }
    store.categories.retain(|c| c.id != id);
    StatusCode::NO_CONTENT.into_response()
}

// -- Products -----------------------------------------------------------------

#[derive(Deserialize)]
struct ProductInput {
    nombre: String,
    marca: String,
    categoria: i64,
    precio: Decimal,
    stock: i64,
}

async fn list_products(State(store): State<Shared>) -> Json<Vec<Product>> {
    Json(store.lock().unwrap().products.clone())
}

async fn create_product(State(store): State<Shared>, Json(input): Json<ProductInput>) -> Response {
    let mut store = store.lock().unwrap();
    if store.categories.iter().all(|c| c.id != input.categoria) {
        return StatusCode::BAD_REQUEST.into_response();
    }
    let product = Product {
        id: store.next_product_id(),
        name: input.nombre,
        brand: input.marca,
        category: input.categoria,
        price: input.precio,
        stock: input.stock,
    };
    store.products.push(product.clone());
    (StatusCode::CREATED, Json(product)).into_response()
}

async fn get_product(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    let store = store.lock().unwrap();
    match store.products.iter().find(|p| p.id == id) {
        Some(product) => Json(product.clone()).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn update_product(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    Json(input): Json<ProductInput>,
) -> Response {
    let mut store = store.lock().unwrap();
    if store.categories.iter().all(|c| c.id != input.categoria) {
        return StatusCode::BAD_REQUEST.into_response();
    }
    let Some(product) = store.products.iter_mut().find(|p| p.id == id) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    product.name = input.nombre;
    product.brand = input.marca;
    product.category = input.categoria;
    product.price = input.precio;
    product.stock = input.stock;
    Json(product.clone()).into_response()
}

async fn delete_product(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut store = store.lock().unwrap();
    if store.products.iter().all(|p| p.id != id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    store.products.retain(|p| p.id != id);
    StatusCode::NO_CONTENT.into_response()
}
