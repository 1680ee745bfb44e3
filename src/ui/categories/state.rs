use crate::api::{Category, CategoryDraft, ImageAttachment};
use crate::media::ImagePreview;
use crate::ui::mvi::UiState;

/// Category list screen. Same shape as the product list: a failed fetch
/// logs and lands on an empty collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CategoryListState {
    #[default]
    Loading,
    Loaded {
        rows: Vec<Category>,
        selected: usize,
        pending_delete: Option<i64>,
    },
}

impl UiState for CategoryListState {}

impl CategoryListState {
    pub fn selected_category(&self) -> Option<&Category> {
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

/// Fields of the category form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryField {
    #[default]
    Name,
    Description,
    /// Path of the image file to attach; Enter loads it.
    ImagePath,
}

impl CategoryField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Description,
            Self::Description => Self::ImagePath,
            Self::ImagePath => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::ImagePath,
            Self::Description => Self::Name,
            Self::ImagePath => Self::Description,
        }
    }
}

/// Preview of the chosen image, tracked independently of the draft: the
/// attachment is submittable while the preview is still decoding or even
/// after it failed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PreviewState {
    #[default]
    Empty,
    Loading,
    Ready(ImagePreview),
    Failed(String),
}

/// Draft state for the create/edit category form.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CategoryFormState {
    /// `Some(id)` in edit mode.
    pub editing: Option<i64>,
    /// Edit mode fetch gate; render shows a spinner while true.
    pub loading: bool,
    pub name: String,
    pub description: String,
    /// Text buffer for the file path, as typed.
    pub image_path: String,
    /// Raw file stored in the draft once loaded.
    pub image: Option<ImageAttachment>,
    pub preview: PreviewState,
    /// Edit mode: the server-side image reference, shown until a new file
    /// is chosen. Either an absolute URL or a host-relative path.
    pub current_image: Option<String>,
    pub focus: CategoryField,
    pub submitting: bool,
    pub notice: Option<String>,
}

impl UiState for CategoryFormState {}

impl CategoryFormState {
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

    /// Parse the buffers into a typed draft. Name and description are
    /// required; the image is optional.
    pub fn draft(&self) -> Result<CategoryDraft, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("el nombre es obligatorio".to_string());
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err("la descripción es obligatoria".to_string());
        }
        Ok(CategoryDraft {
            name: name.to_string(),
            description: description.to_string(),
            image: self.image.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_requires_name_and_description() {
        let mut form = CategoryFormState::create();
        assert!(form.draft().is_err());
        form.name = "Electrónicos".to_string();
        assert!(form.draft().is_err());
        form.description = "Dispositivos".to_string();
        let draft = form.draft().unwrap();
        assert_eq!(draft.name, "Electrónicos");
        assert!(draft.image.is_none());
    }

    #[test]
    fn draft_carries_attachment_regardless_of_preview() {
        let form = CategoryFormState {
            name: "Ropa".to_string(),
            description: "Prendas".to_string(),
            image: Some(ImageAttachment {
                file_name: "ropa.png".to_string(),
                bytes: vec![1, 2, 3],
            }),
            // Preview still decoding must not block submission.
            preview: PreviewState::Loading,
            ..CategoryFormState::create()
        };
        let draft = form.draft().unwrap();
        assert_eq!(draft.image.unwrap().file_name, "ropa.png");
    }

    #[test]
    fn edit_mode_starts_gated() {
        let form = CategoryFormState::edit(4);
        assert_eq!(form.editing, Some(4));
        assert!(form.loading);
    }

    #[test]
    fn field_order_cycles() {
        assert_eq!(CategoryField::Name.next(), CategoryField::Description);
        assert_eq!(CategoryField::ImagePath.next(), CategoryField::Name);
        assert_eq!(CategoryField::Name.prev(), CategoryField::ImagePath);
    }
}
