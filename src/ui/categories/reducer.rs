use crate::ui::categories::intent::{CategoryFormIntent, CategoryListIntent};
use crate::ui::categories::state::{
    CategoryField, CategoryFormState, CategoryListState, PreviewState,
};
use crate::ui::mvi::Reducer;

pub struct CategoryListReducer;

impl Reducer for CategoryListReducer {
    type State = CategoryListState;
    type Intent = CategoryListIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CategoryListIntent::Loaded(rows) => {
                let prior = match &state {
                    CategoryListState::Loaded { selected, .. } => *selected,
                    CategoryListState::Loading => 0,
                };
                let selected = prior.min(rows.len().saturating_sub(1));
                CategoryListState::Loaded {
                    rows,
                    selected,
                    pending_delete: None,
                }
            }
            CategoryListIntent::LoadFailed => CategoryListState::Loaded {
                rows: Vec::new(),
                selected: 0,
                pending_delete: None,
            },
            CategoryListIntent::Reload => CategoryListState::Loading,
            CategoryListIntent::MoveUp => match state {
                CategoryListState::Loaded { rows, selected, .. } => {
                    let selected = selected.saturating_sub(1);
                    CategoryListState::Loaded {
                        rows,
                        selected,
                        pending_delete: None,
                    }
                }
                other => other,
            },
            CategoryListIntent::MoveDown => match state {
                CategoryListState::Loaded { rows, selected, .. } => {
                    let selected = (selected + 1).min(rows.len().saturating_sub(1));
                    CategoryListState::Loaded {
                        rows,
                        selected,
                        pending_delete: None,
                    }
                }
                other => other,
            },
            CategoryListIntent::RequestDelete => match state {
                CategoryListState::Loaded { rows, selected, .. } => {
                    let pending_delete = rows.get(selected).map(|c| c.id);
                    CategoryListState::Loaded {
                        rows,
                        selected,
                        pending_delete,
                    }
                }
                other => other,
            },
            CategoryListIntent::CancelDelete | CategoryListIntent::DeleteDispatched => match state {
                CategoryListState::Loaded { rows, selected, .. } => CategoryListState::Loaded {
                    rows,
                    selected,
                    pending_delete: None,
                },
                other => other,
            },
        }
    }
}

pub struct CategoryFormReducer;

impl Reducer for CategoryFormReducer {
    type State = CategoryFormState;
    type Intent = CategoryFormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CategoryFormIntent::EntityLoaded(category) => {
                state.name = category.name;
                state.description = category.description;
                state.current_image = category.image;
                state.loading = false;
                state
            }
            CategoryFormIntent::EntityFailed => {
                state.loading = false;
                state.notice = Some("no se pudo cargar la categoría".to_string());
                state
            }
            CategoryFormIntent::FocusNext => {
                state.focus = state.focus.next();
                state
            }
            CategoryFormIntent::FocusPrev => {
                state.focus = state.focus.prev();
                state
            }
            CategoryFormIntent::Input(ch) => {
                if !ch.is_control() {
                    match state.focus {
                        CategoryField::Name => state.name.push(ch),
                        CategoryField::Description => state.description.push(ch),
                        CategoryField::ImagePath => state.image_path.push(ch),
                    }
                }
                state
            }
            CategoryFormIntent::Backspace => {
                match state.focus {
                    CategoryField::Name => {
                        state.name.pop();
                    }
                    CategoryField::Description => {
                        state.description.pop();
                    }
                    CategoryField::ImagePath => {
                        state.image_path.pop();
                    }
                }
                state
            }
            CategoryFormIntent::ImageRequested => {
                state.preview = PreviewState::Loading;
                state
            }
            CategoryFormIntent::ImageAttached(attachment) => {
                state.image = Some(attachment);
                state
            }
            CategoryFormIntent::ImageFailed(message) => {
                state.preview = PreviewState::Failed(message);
                state
            }
            CategoryFormIntent::PreviewReady(preview) => {
                state.preview = PreviewState::Ready(preview);
                state
            }
            CategoryFormIntent::PreviewFailed(message) => {
                state.preview = PreviewState::Failed(message);
                state
            }
            CategoryFormIntent::SubmitStarted => {
                state.submitting = true;
                state.notice = None;
                state
            }
            CategoryFormIntent::SubmitRejected(message) => {
                state.notice = Some(message);
                state
            }
            CategoryFormIntent::SubmitFailed(message) => {
                state.submitting = false;
                state.notice = Some(message);
                state
            }
        }
    }
}
