//! Product list and form screens.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::{ProductFormIntent, ProductListIntent};
pub use reducer::{ProductFormReducer, ProductListReducer};
pub use state::{stock_band, ProductField, ProductFormState, ProductListState, StockBand};
pub use view::{render_product_form, render_product_list};
