use crate::ui::mvi::Reducer;
use crate::ui::products::intent::{ProductFormIntent, ProductListIntent};
use crate::ui::products::state::{ProductField, ProductFormState, ProductListState};

pub struct ProductListReducer;

impl Reducer for ProductListReducer {
    type State = ProductListState;
    type Intent = ProductListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductListIntent::Loaded(rows) => {
                // Keep the cursor near where it was across re-fetches.
                let prior = match &state {
                    ProductListState::Loaded { selected, .. } => *selected,
                    ProductListState::Loading => 0,
                };
                let selected = prior.min(rows.len().saturating_sub(1));
                ProductListState::Loaded {
                    rows,
                    selected,
                    pending_delete: None,
                }
            }
            ProductListIntent::LoadFailed => ProductListState::Loaded {
                rows: Vec::new(),
                selected: 0,
                pending_delete: None,
            },
            ProductListIntent::Reload => ProductListState::Loading,
            ProductListIntent::MoveUp => match state {
                ProductListState::Loaded { rows, selected, .. } => {
                    let selected = selected.saturating_sub(1);
                    ProductListState::Loaded {
                        rows,
                        selected,
                        pending_delete: None,
                    }
                }
                other => other,
            },
            ProductListIntent::MoveDown => match state {
                ProductListState::Loaded { rows, selected, .. } => {
                    let selected = (selected + 1).min(rows.len().saturating_sub(1));
                    ProductListState::Loaded {
                        rows,
                        selected,
                        pending_delete: None,
                    }
                }
                other => other,
            },
            ProductListIntent::RequestDelete => match state {
                ProductListState::Loaded { rows, selected, .. } => {
                    let pending_delete = rows.get(selected).map(|p| p.id);
                    ProductListState::Loaded {
                        rows,
                        selected,
                        pending_delete,
                    }
                }
                other => other,
            },
            ProductListIntent::CancelDelete | ProductListIntent::DeleteDispatched => match state {
                ProductListState::Loaded { rows, selected, .. } => ProductListState::Loaded {
                    rows,
                    selected,
                    pending_delete: None,
                },
                other => other,
            },
        }
    }
}

pub struct ProductFormReducer;

impl Reducer for ProductFormReducer {
    type State = ProductFormState;
    type Intent = ProductFormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ProductFormIntent::CategoriesLoaded(categories) => {
                state.categories = categories;
                state
            }
            ProductFormIntent::CategoriesFailed => {
                // Selection control stays empty; submit will reject.
                state
            }
            ProductFormIntent::EntityLoaded(product) => {
                state.name = product.name;
                state.brand = product.brand;
                state.category = Some(product.category);
                state.price = product.price.to_string();
                state.stock = product.stock.to_string();
                state.loading = false;
                state
            }
            ProductFormIntent::EntityFailed => {
                state.loading = false;
                state.notice = Some("no se pudo cargar el producto".to_string());
                state
            }
            ProductFormIntent::FocusNext => {
                state.focus = state.focus.next();
                state
            }
            ProductFormIntent::FocusPrev => {
                state.focus = state.focus.prev();
                state
            }
            ProductFormIntent::Input(ch) => {
                match state.focus {
                    ProductField::Name => push_text(&mut state.name, ch),
                    ProductField::Brand => push_text(&mut state.brand, ch),
                    // The category control is driven by Left/Right only.
                    ProductField::Category => {}
                    ProductField::Price => {
                        if ch.is_ascii_digit() || ch == '.' {
                            state.price.push(ch);
                        }
                    }
                    ProductField::Stock => {
                        if ch.is_ascii_digit() {
                            state.stock.push(ch);
                        }
                    }
                }
                state
            }
            ProductFormIntent::Backspace => {
                match state.focus {
                    ProductField::Name => {
                        state.name.pop();
                    }
                    ProductField::Brand => {
                        state.brand.pop();
                    }
                    ProductField::Category => {
                        state.category = None;
                    }
                    ProductField::Price => {
                        state.price.pop();
                    }
                    ProductField::Stock => {
                        state.stock.pop();
                    }
                }
                state
            }
            ProductFormIntent::CategoryNext => {
                state.category = cycle(&state, 1);
                state
            }
            ProductFormIntent::CategoryPrev => {
                state.category = cycle(&state, -1);
                state
            }
            ProductFormIntent::SubmitStarted => {
                state.submitting = true;
                state.notice = None;
                state
            }
            ProductFormIntent::SubmitRejected(message) => {
                state.notice = Some(message);
                state
            }
            ProductFormIntent::SubmitFailed(message) => {
                state.submitting = false;
                state.notice = Some(message);
                state
            }
        }
    }
}

fn push_text(buffer: &mut String, ch: char) {
    if !ch.is_control() {
        buffer.push(ch);
    }
}

/// Step the category selection through the loaded collection, wrapping.
fn cycle(state: &ProductFormState, step: i64) -> Option<i64> {
    if state.categories.is_empty() {
        return None;
    }
    let len = state.categories.len() as i64;
    let current = state
        .category
        .and_then(|id| state.categories.iter().position(|c| c.id == id))
        .map(|idx| idx as i64);
    let next = match current {
        Some(idx) => (idx + step).rem_euclid(len),
        None if step >= 0 => 0,
        None => len - 1,
    };
    state.categories.get(next as usize).map(|c| c.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Category, Product};

    fn product(id: i64, stock: i64) -> Product {
        Product {
            id,
            name: format!("p{id}"),
            brand: "marca".to_string(),
            category: 1,
            price: "9.99".parse().unwrap(),
            stock,
        }
    }

    fn category(id: i64, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            description: String::new(),
            image: None,
        }
    }

    #[test]
    fn loading_to_loaded_replaces_rows() {
        let state = ProductListReducer::reduce(
            ProductListState::Loading,
            ProductListIntent::Loaded(vec![product(1, 5), product(2, 0)]),
        );
        match state {
            ProductListState::Loaded { rows, selected, .. } => {
                assert_eq!(rows.len(), 2);
                assert_eq!(selected, 0);
            }
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn load_failure_lands_silently_empty() {
        let state =
            ProductListReducer::reduce(ProductListState::Loading, ProductListIntent::LoadFailed);
        assert_eq!(
            state,
            ProductListState::Loaded {
                rows: vec![],
                selected: 0,
                pending_delete: None
            }
        );
    }

    #[test]
    fn selection_survives_refetch_with_fewer_rows() {
        let state = ProductListState::Loaded {
            rows: vec![product(1, 1), product(2, 1), product(3, 1)],
            selected: 2,
            pending_delete: None,
        };
        let state =
            ProductListReducer::reduce(state, ProductListIntent::Loaded(vec![product(1, 1)]));
        match state {
            ProductListState::Loaded { selected, .. } => assert_eq!(selected, 0),
            other => panic!("expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn delete_needs_confirmation_and_can_be_cancelled() {
        let state = ProductListState::Loaded {
            rows: vec![product(7, 1)],
            selected: 0,
            pending_delete: None,
        };
        let state = ProductListReducer::reduce(state, ProductListIntent::RequestDelete);
        assert!(state.is_confirming());
        let state = ProductListReducer::reduce(state, ProductListIntent::CancelDelete);
        assert!(!state.is_confirming());
    }

    #[test]
    fn moving_selection_clears_pending_delete() {
        let state = ProductListState::Loaded {
            rows: vec![product(1, 1), product(2, 1)],
            selected: 0,
            pending_delete: Some(1),
        };
        let state = ProductListReducer::reduce(state, ProductListIntent::MoveDown);
        assert!(!state.is_confirming());
    }

    #[test]
    fn typing_respects_per_field_filters() {
        let mut state = ProductFormState::create();
        state.focus = ProductField::Price;
        let state = ProductFormReducer::reduce(state, ProductFormIntent::Input('2'));
        let state = ProductFormReducer::reduce(state, ProductFormIntent::Input('x'));
        let state = ProductFormReducer::reduce(state, ProductFormIntent::Input('.'));
        assert_eq!(state.price, "2.");

        let mut state = state;
        state.focus = ProductField::Stock;
        let state = ProductFormReducer::reduce(state, ProductFormIntent::Input('3'));
        let state = ProductFormReducer::reduce(state, ProductFormIntent::Input('.'));
        assert_eq!(state.stock, "3");
    }

    #[test]
    fn category_cycles_through_loaded_collection() {
        let state = ProductFormReducer::reduce(
            ProductFormState::create(),
            ProductFormIntent::CategoriesLoaded(vec![category(10, "a"), category(20, "b")]),
        );
        let state = ProductFormReducer::reduce(state, ProductFormIntent::CategoryNext);
        assert_eq!(state.category, Some(10));
        let state = ProductFormReducer::reduce(state, ProductFormIntent::CategoryNext);
        assert_eq!(state.category, Some(20));
        let state = ProductFormReducer::reduce(state, ProductFormIntent::CategoryNext);
        assert_eq!(state.category, Some(10));
        let state = ProductFormReducer::reduce(state, ProductFormIntent::CategoryPrev);
        assert_eq!(state.category, Some(20));
    }

    #[test]
    fn entity_load_prepopulates_draft_and_clears_gate() {
        let state = ProductFormState::edit(5);
        assert!(state.loading);
        let state =
            ProductFormReducer::reduce(state, ProductFormIntent::EntityLoaded(product(5, 3)));
        assert!(!state.loading);
        assert_eq!(state.name, "p5");
        assert_eq!(state.stock, "3");
        assert_eq!(state.category, Some(1));
    }

    #[test]
    fn submit_failure_reenables_form() {
        let state =
            ProductFormReducer::reduce(ProductFormState::create(), ProductFormIntent::SubmitStarted);
        assert!(state.submitting);
        let state = ProductFormReducer::reduce(
            state,
            ProductFormIntent::SubmitFailed("rechazado".to_string()),
        );
        assert!(!state.submitting);
        assert_eq!(state.notice.as_deref(), Some("rechazado"));
    }
}
