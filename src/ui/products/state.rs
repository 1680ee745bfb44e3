use crate::api::{Category, Product, ProductDraft};
use crate::ui::mvi::UiState;
use rust_decimal::Decimal;

/// Product list screen: starts loading, lands on a plain collection.
///
/// There is no error variant on purpose; a failed fetch logs and lands in
/// `Loaded` with an empty collection, the same silently-empty behavior the
/// backend's other clients show.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProductListState {
    #[default]
    Loading,
    Loaded {
        rows: Vec<Product>,
        selected: usize,
        /// Id awaiting delete confirmation, if any.
        pending_delete: Option<i64>,
    },
}

impl UiState for ProductListState {}

impl ProductListState {
    pub fn selected_product(&self) -> Option<&Product> {
        match self {
            Self::Loading => None,
            Self::Loaded { rows, selected, .. } => rows.get(*selected),
        }
    }

    pub fn is_confirming(&self) -> bool {
        matches!(
            self,
            Self::Loaded {
                pending_delete: Some(_),
                ..
            }
        )
    }
}

/// Display bands for the stock column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockBand {
    /// More than 10 units.
    Healthy,
    /// 1 to 10 units.
    Low,
    /// Nothing left.
    Out,
}

pub fn stock_band(stock: i64) -> StockBand {
    if stock > 10 {
        StockBand::Healthy
    } else if stock > 0 {
        StockBand::Low
    } else {
        StockBand::Out
    }
}

/// Fields of the product form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProductField {
    #[default]
    Name,
    Brand,
    Category,
    Price,
    Stock,
}

impl ProductField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Brand,
            Self::Brand => Self::Category,
            Self::Category => Self::Price,
            Self::Price => Self::Stock,
            Self::Stock => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Stock,
            Self::Brand => Self::Name,
            Self::Category => Self::Brand,
            Self::Price => Self::Category,
            Self::Stock => Self::Price,
        }
    }
}

/// Draft state for the create/edit product form.
///
/// Buffers hold raw text exactly as typed; parsing into a typed draft
/// happens on submit. The category control picks from a read-only
/// collection fetched once when the form opens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProductFormState {
    /// `Some(id)` in edit mode.
    pub editing: Option<i64>,
    /// Edit mode fetch gate; render shows a spinner while true.
    pub loading: bool,
    pub categories: Vec<Category>,
    pub name: String,
    pub brand: String,
    /// Selected category id, if any.
    pub category: Option<i64>,
    pub price: String,
    pub stock: String,
    pub focus: ProductField,
    pub submitting: bool,
    /// One-line status shown under the form (validation or save failure).
    pub notice: Option<String>,
}

impl UiState for ProductFormState {}

impl ProductFormState {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn edit(id: i64) -> Self {
        Self {
            editing: Some(id),
            loading: true,
            ..Self::default()
        }
    }

    pub fn selected_category_name(&self) -> Option<&str> {
        let id = self.category?;
        self.categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.name.as_str())
    }

    /// Parse the buffers into a typed draft. All five fields are required;
    /// price and stock must be non-negative.
    pub fn draft(&self) -> Result<ProductDraft, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("el nombre es obligatorio".to_string());
        }
        let brand = self.brand.trim();
        if brand.is_empty() {
            return Err("la marca es obligatoria".to_string());
        }
        let category = self
            .category
            .ok_or_else(|| "selecciona una categoría".to_string())?;
        let price: Decimal = self
            .price
            .trim()
            .parse()
            .map_err(|_| "precio inválido".to_string())?;
        if price.is_sign_negative() {
            return Err("el precio no puede ser negativo".to_string());
        }
        let stock: i64 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| "stock inválido".to_string())?;
        if stock < 0 {
            return Err("el stock no puede ser negativo".to_string());
        }
        Ok(ProductDraft {
            name: name.to_string(),
            brand: brand.to_string(),
            category,
            price,
            stock,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ProductFormState {
        ProductFormState {
            name: "Mouse".to_string(),
            brand: "Logi".to_string(),
            category: Some(3),
            price: "25.50".to_string(),
            stock: "3".to_string(),
            ..ProductFormState::default()
        }
    }

    #[test]
    fn stock_bands_match_display_policy() {
        assert_eq!(stock_band(11), StockBand::Healthy);
        assert_eq!(stock_band(10), StockBand::Low);
        assert_eq!(stock_band(3), StockBand::Low);
        assert_eq!(stock_band(1), StockBand::Low);
        assert_eq!(stock_band(0), StockBand::Out);
    }

    #[test]
    fn draft_round_trips_valid_buffers() {
        let draft = filled_form().draft().unwrap();
        assert_eq!(draft.name, "Mouse");
        assert_eq!(draft.brand, "Logi");
        assert_eq!(draft.category, 3);
        assert_eq!(draft.price, "25.50".parse().unwrap());
        assert_eq!(draft.stock, 3);
    }

    #[test]
    fn draft_requires_every_field() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        assert!(form.draft().is_err());

        let mut form = filled_form();
        form.category = None;
        assert!(form.draft().is_err());

        let mut form = filled_form();
        form.price = "gratis".to_string();
        assert!(form.draft().is_err());
    }

    #[test]
    fn draft_rejects_negative_numbers() {
        let mut form = filled_form();
        form.price = "-1".to_string();
        assert!(form.draft().is_err());

        let mut form = filled_form();
        form.stock = "-4".to_string();
        assert!(form.draft().is_err());
    }

    #[test]
    fn field_order_cycles() {
        let mut field = ProductField::Name;
        for _ in 0..5 {
            field = field.next();
        }
        assert_eq!(field, ProductField::Name);
        assert_eq!(ProductField::Name.prev(), ProductField::Stock);
    }

    #[test]
    fn list_default_is_loading() {
        assert_eq!(ProductListState::default(), ProductListState::Loading);
        assert!(ProductListState::Loading.selected_product().is_none());
    }
}
