use crate::api::{Category, Product};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ProductListIntent {
    /// Fetch finished; replace the collection.
    Loaded(Vec<Product>),
    /// Fetch failed; land on an empty collection (logged elsewhere).
    LoadFailed,
    /// Re-fetch triggered (e.g. after a delete); back to Loading.
    Reload,
    MoveUp,
    MoveDown,
    /// Ask for confirmation before deleting the selected row.
    RequestDelete,
    CancelDelete,
    /// Confirmed; the delete command is in flight.
    DeleteDispatched,
}

impl Intent for ProductListIntent {}

#[derive(Debug, Clone)]
pub enum ProductFormIntent {
    /// Category collection for the selection control arrived.
    CategoriesLoaded(Vec<Category>),
    CategoriesFailed,
    /// Edit mode: the entity being edited arrived; pre-populate the draft.
    EntityLoaded(Product),
    EntityFailed,
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    CategoryNext,
    CategoryPrev,
    SubmitStarted,
    /// Client-side validation refused the draft.
    SubmitRejected(String),
    /// The API refused the draft.
    SubmitFailed(String),
}

impl Intent for ProductFormIntent {}
