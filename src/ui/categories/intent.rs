use crate::api::{Category, ImageAttachment};
use crate::media::ImagePreview;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CategoryListIntent {
    Loaded(Vec<Category>),
    LoadFailed,
    Reload,
    MoveUp,
    MoveDown,
    RequestDelete,
    CancelDelete,
    DeleteDispatched,
}

impl Intent for CategoryListIntent {}

#[derive(Debug, Clone)]
pub enum CategoryFormIntent {
    /// Edit mode: the entity being edited arrived; pre-populate the draft
    /// and retain its server-side image reference for display.
    EntityLoaded(Category),
    EntityFailed,
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    /// The typed path was submitted for loading; preview starts decoding.
    ImageRequested,
    /// Raw file bytes landed in the draft. Independent of the preview.
    ImageAttached(ImageAttachment),
    /// The file could not be read; nothing was attached.
    ImageFailed(String),
    PreviewReady(ImagePreview),
    PreviewFailed(String),
    SubmitStarted,
    SubmitRejected(String),
    SubmitFailed(String),
}

impl Intent for CategoryFormIntent {}
