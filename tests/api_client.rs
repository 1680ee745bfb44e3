//! End-to-end client behavior against the in-process API.

mod common;

use common::mock_api;
use inventario::api::{
    resolve_image_url, ApiClient, ApiError, CategoryDraft, ImageAttachment, ProductDraft,
};
use inventario::ui::products::{stock_band, StockBand};
use rust_decimal_macros::dec;

fn electronics_draft() -> CategoryDraft {
    CategoryDraft {
        name: "Electrónicos".to_string(),
        description: "Dispositivos electrónicos".to_string(),
        image: None,
    }
}

#[tokio::test]
async fn category_create_appears_exactly_once() {
    let api = mock_api::spawn().await;
    let client = ApiClient::new(&api.host);

    let created = client.create_category(&electronics_draft()).await.unwrap();
    assert_eq!(created.name, "Electrónicos");
    assert_eq!(created.image, None);

    let listed = client.list_categories().await.unwrap();
    let matching: Vec<_> = listed
        .iter()
        .filter(|c| c.name == "Electrónicos" && c.description == "Dispositivos electrónicos")
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].id, created.id);
}

#[tokio::test]
async fn category_image_upload_yields_relative_reference() {
    let api = mock_api::spawn().await;
    let client = ApiClient::new(&api.host);

    let draft = CategoryDraft {
        name: "Ropa".to_string(),
        description: "Prendas de vestir".to_string(),
        image: Some(ImageAttachment {
            file_name: "ropa.png".to_string(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }),
    };
    let created = client.create_category(&draft).await.unwrap();

    let reference = created.image.unwrap();
    assert_eq!(reference, "/media/categorias/ropa.png");
    assert_eq!(
        resolve_image_url(&api.host, &reference),
        format!("{}{}", api.host, reference)
    );
}

#[tokio::test]
async fn category_update_without_new_image_keeps_stored_reference() {
    let api = mock_api::spawn().await;
    let client = ApiClient::new(&api.host);

    let draft = CategoryDraft {
        name: "Hogar".to_string(),
        description: "Artículos para el hogar".to_string(),
        image: Some(ImageAttachment {
            file_name: "hogar.png".to_string(),
            bytes: vec![1, 2, 3],
        }),
    };
    let created = client.create_category(&draft).await.unwrap();

    let updated = client
        .update_category(
            created.id,
            &CategoryDraft {
                name: "Hogar y Jardín".to_string(),
                description: draft.description.clone(),
                image: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Hogar y Jardín");
    assert_eq!(updated.image.as_deref(), Some("/media/categorias/hogar.png"));
}

#[tokio::test]
async fn product_create_round_trips_all_fields() {
    let api = mock_api::spawn().await;
    let client = ApiClient::new(&api.host);

    let category = client.create_category(&electronics_draft()).await.unwrap();
    let draft = ProductDraft {
        name: "Mouse".to_string(),
        brand: "Logitech".to_string(),
        category: category.id,
        price: dec!(25.50),
        stock: 3,
    };
    let created = client.create_product(&draft).await.unwrap();

    let fetched = client.get_product(created.id).await.unwrap();
    assert_eq!(fetched.name, "Mouse");
    assert_eq!(fetched.brand, "Logitech");
    assert_eq!(fetched.category, category.id);
    assert_eq!(fetched.price, dec!(25.50));
    assert_eq!(fetched.stock, 3);
    assert_eq!(stock_band(fetched.stock), StockBand::Low);
}

#[tokio::test]
async fn product_update_fully_replaces() {
    let api = mock_api::spawn().await;
    let client = ApiClient::new(&api.host);

    let category = client.create_category(&electronics_draft()).await.unwrap();
    let created = client
        .create_product(&ProductDraft {
            name: "Teclado".to_string(),
            brand: "Genérica".to_string(),
            category: category.id,
            price: dec!(80),
            stock: 0,
        })
        .await
        .unwrap();

    let replacement = ProductDraft {
        name: "Teclado mecánico".to_string(),
        brand: "Keychron".to_string(),
        category: category.id,
        price: dec!(99.90),
        stock: 12,
    };
    client
        .update_product(created.id, &replacement)
        .await
        .unwrap();

    let fetched = client.get_product(created.id).await.unwrap();
    assert_eq!(fetched.name, replacement.name);
    assert_eq!(fetched.brand, replacement.brand);
    assert_eq!(fetched.price, replacement.price);
    assert_eq!(fetched.stock, 12);
}

#[tokio::test]
async fn product_update_with_unknown_category_is_rejected() {
    let api = mock_api::spawn().await;
    let client = ApiClient::new(&api.host);

    let category = client.create_category(&electronics_draft()).await.unwrap();
    let created = client
        .create_product(&ProductDraft {
            name: "Mouse".to_string(),
            brand: "Logitech".to_string(),
            category: category.id,
            price: dec!(25.50),
            stock: 3,
        })
        .await
        .unwrap();

    let err = client
        .update_product(
            created.id,
            &ProductDraft {
                name: "Mouse".to_string(),
                brand: "Logitech".to_string(),
                category: category.id + 99,
                price: dec!(25.50),
                stock: 3,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 400, .. }));

    let fetched = client.get_product(created.id).await.unwrap();
    assert_eq!(fetched.category, category.id);
}

#[tokio::test]
async fn referenced_category_delete_conflicts_and_changes_nothing() {
    let api = mock_api::spawn().await;
    let client = ApiClient::new(&api.host);

    let category = client.create_category(&electronics_draft()).await.unwrap();
    let product = client
        .create_product(&ProductDraft {
            name: "Mouse".to_string(),
            brand: "Logitech".to_string(),
            category: category.id,
            price: dec!(25.50),
            stock: 3,
        })
        .await
        .unwrap();

    let err = client.delete_category(category.id).await.unwrap_err();
    assert!(err.is_conflict());

    let categories = client.list_categories().await.unwrap();
    assert!(categories.iter().any(|c| c.id == category.id));
    let products = client.list_products().await.unwrap();
    assert!(products.iter().any(|p| p.id == product.id));
}

#[tokio::test]
async fn unreferenced_category_delete_removes_it() {
    let api = mock_api::spawn().await;
    let client = ApiClient::new(&api.host);

    let category = client.create_category(&electronics_draft()).await.unwrap();
    client.delete_category(category.id).await.unwrap();

    let categories = client.list_categories().await.unwrap();
    assert!(categories.iter().all(|c| c.id != category.id));
}

#[tokio::test]
async fn missing_entities_map_to_not_found() {
    let api = mock_api::spawn().await;
    let client = ApiClient::new(&api.host);

    let err = client.get_product(999).await.unwrap_err();
    assert!(err.is_not_found());
    let err = client.get_category(999).await.unwrap_err();
    assert!(err.is_not_found());
    let err = client.delete_category(999).await.unwrap_err();
    assert!(err.is_not_found());
}
