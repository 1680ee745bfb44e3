//! Category list and form screens.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::{CategoryFormIntent, CategoryListIntent};
pub use reducer::{CategoryFormReducer, CategoryListReducer};
pub use state::{CategoryField, CategoryFormState, CategoryListState, PreviewState};
pub use view::{render_category_form, render_category_list};
