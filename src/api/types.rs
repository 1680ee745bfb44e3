//! Entities and drafts exchanged with the inventory API.
//!
//! Field names on the wire are Spanish (the deployed API speaks
//! `nombre`/`marca`/... ); struct fields stay English via serde renames.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A persisted category as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    /// Either an absolute URL or a host-relative path such as
    /// `/media/categorias/foo.png`. See [`resolve_image_url`].
    ///
    /// [`resolve_image_url`]: crate::api::resolve_image_url
    #[serde(rename = "imagen", default)]
    pub image: Option<String>,
}

/// A persisted product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "marca")]
    pub brand: String,
    /// Foreign key to an existing [`Category`].
    #[serde(rename = "categoria")]
    pub category: i64,
    #[serde(rename = "precio")]
    pub price: Decimal,
    #[serde(rename = "stock")]
    pub stock: i64,
}

/// Raw image file chosen for upload alongside a category draft.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Not-yet-persisted category fields. Sent as multipart form data because
/// the image field may carry binary content.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
    /// `None` means no file was chosen; the `imagen` part is then omitted
    /// from the form entirely. Whether the server keeps or clears a stored
    /// image in that case is the server's contract.
    pub image: Option<ImageAttachment>,
}

/// Not-yet-persisted product fields. Sent as JSON; products carry no
/// binary content.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDraft {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "marca")]
    pub brand: String,
    #[serde(rename = "categoria")]
    pub category: i64,
    #[serde(rename = "precio")]
    pub price: Decimal,
    #[serde(rename = "stock")]
    pub stock: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_names_are_spanish() {
        let json =
            r#"{"id": 7, "nombre": "Electrónicos", "descripcion": "Dispositivos", "imagen": null}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.name, "Electrónicos");
        assert_eq!(category.description, "Dispositivos");
        assert_eq!(category.image, None);
    }

    #[test]
    fn category_image_field_may_be_absent() {
        let json = r#"{"id": 1, "nombre": "Ropa", "descripcion": "Prendas"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.image, None);
    }

    #[test]
    fn product_draft_serializes_wire_names() {
        let draft = ProductDraft {
            name: "Mouse".to_string(),
            brand: "Logi".to_string(),
            category: 3,
            price: "25.50".parse().unwrap(),
            stock: 3,
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value["nombre"], "Mouse");
        assert_eq!(value["marca"], "Logi");
        assert_eq!(value["categoria"], 3);
        assert_eq!(value["stock"], 3);
        // rust_decimal serializes as a string, which the API accepts
        assert_eq!(value["precio"], "25.50");
    }
}
