use crate::ui::categories::{
    CategoryField, CategoryFormIntent, CategoryFormReducer, CategoryFormState, CategoryListIntent,
    CategoryListReducer, CategoryListState,
};
use crate::ui::mvi::Reducer;
use crate::ui::products::{
    ProductField, ProductFormIntent, ProductFormReducer, ProductFormState, ProductListIntent,
    ProductListReducer, ProductListState,
};
use crate::ui::worker::{ApiCommand, ApiOutcome, ApiWorker};
use std::path::PathBuf;

/// Which view owns the body region. Edit screens carry the entity id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Products,
    ProductCreate,
    ProductEdit(i64),
    Categories,
    CategoryCreate,
    CategoryEdit(i64),
}

impl Screen {
    pub fn is_list(self) -> bool {
        matches!(self, Self::Products | Self::Categories)
    }

    fn is_product_form(self) -> bool {
        matches!(self, Self::ProductCreate | Self::ProductEdit(_))
    }

    fn is_category_form(self) -> bool {
        matches!(self, Self::CategoryCreate | Self::CategoryEdit(_))
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The navigation shell. Holds one state machine per view, routes key
/// intents into reducers, and owns every side effect: worker commands,
/// screen changes, the blocking alert, and the footer notice.
pub struct App {
    should_quit: bool,
    screen: Screen,
    host: String,
    worker: ApiWorker,
    product_list: ProductListState,
    product_form: ProductFormState,
    category_list: CategoryListState,
    category_form: CategoryFormState,
    /// Modal message; blocks all input until dismissed by any key.
    alert: Option<String>,
    /// Last background failure, shown in the footer.
    last_notice: Option<String>,
}

impl App {
    pub fn new(host: String, worker: ApiWorker) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Products,
            host,
            worker,
            product_list: ProductListState::default(),
            product_form: ProductFormState::default(),
            category_list: CategoryListState::default(),
            category_form: CategoryFormState::default(),
            alert: None,
            last_notice: None,
        }
    }

    /// Kick off the initial fetch for the boot screen.
    pub fn boot(&mut self) {
        self.worker.submit(ApiCommand::LoadProducts);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn product_list(&self) -> &ProductListState {
        &self.product_list
    }

    pub fn product_form(&self) -> &ProductFormState {
        &self.product_form
    }

    pub fn category_list(&self) -> &CategoryListState {
        &self.category_list
    }

    pub fn category_form(&self) -> &CategoryFormState {
        &self.category_form
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn last_notice(&self) -> Option<&str> {
        self.last_notice.as_deref()
    }

    // Navigation.

    pub fn open_products(&mut self) {
        self.screen = Screen::Products;
        self.last_notice = None;
        dispatch_mvi!(self, product_list, ProductListReducer, ProductListIntent::Reload);
        self.worker.submit(ApiCommand::LoadProducts);
    }

    pub fn open_categories(&mut self) {
        self.screen = Screen::Categories;
        self.last_notice = None;
        dispatch_mvi!(self, category_list, CategoryListReducer, CategoryListIntent::Reload);
        self.worker.submit(ApiCommand::LoadCategories);
    }

    pub fn open_product_create(&mut self) {
        self.screen = Screen::ProductCreate;
        self.product_form = ProductFormState::create();
        self.worker.submit(ApiCommand::LoadCategories);
    }

    pub fn open_product_edit(&mut self, id: i64) {
        self.screen = Screen::ProductEdit(id);
        self.product_form = ProductFormState::edit(id);
        self.worker.submit(ApiCommand::LoadCategories);
        self.worker.submit(ApiCommand::LoadProduct(id));
    }

    pub fn open_category_create(&mut self) {
        self.screen = Screen::CategoryCreate;
        self.category_form = CategoryFormState::create();
    }

    pub fn open_category_edit(&mut self, id: i64) {
        self.screen = Screen::CategoryEdit(id);
        self.category_form = CategoryFormState::edit(id);
        self.worker.submit(ApiCommand::LoadCategory(id));
    }

    /// Esc from a form returns to its list; lists ignore it.
    pub fn back(&mut self) {
        if self.screen.is_product_form() {
            self.open_products();
        } else if self.screen.is_category_form() {
            self.open_categories();
        }
    }

    /// Open the edit form for the selected row.
    pub fn edit_selected(&mut self) {
        match self.screen {
            Screen::Products => {
                if let Some(id) = self.product_list.selected_product().map(|p| p.id) {
                    self.open_product_edit(id);
                }
            }
            Screen::Categories => {
                if let Some(id) = self.category_list.selected_category().map(|c| c.id) {
                    self.open_category_edit(id);
                }
            }
            _ => {}
        }
    }

    // List interactions.

    pub fn move_up(&mut self) {
        match self.screen {
            Screen::Products => {
                dispatch_mvi!(self, product_list, ProductListReducer, ProductListIntent::MoveUp);
            }
            Screen::Categories => {
                dispatch_mvi!(self, category_list, CategoryListReducer, CategoryListIntent::MoveUp);
            }
            _ => {}
        }
    }

    pub fn move_down(&mut self) {
        match self.screen {
            Screen::Products => {
                dispatch_mvi!(self, product_list, ProductListReducer, ProductListIntent::MoveDown);
            }
            Screen::Categories => {
                dispatch_mvi!(
                    self,
                    category_list,
                    CategoryListReducer,
                    CategoryListIntent::MoveDown
                );
            }
            _ => {}
        }
    }

    pub fn request_delete(&mut self) {
        match self.screen {
            Screen::Products => {
                dispatch_mvi!(
                    self,
                    product_list,
                    ProductListReducer,
                    ProductListIntent::RequestDelete
                );
            }
            Screen::Categories => {
                dispatch_mvi!(
                    self,
                    category_list,
                    CategoryListReducer,
                    CategoryListIntent::RequestDelete
                );
            }
            _ => {}
        }
    }

    pub fn cancel_delete(&mut self) {
        match self.screen {
            Screen::Products => {
                dispatch_mvi!(
                    self,
                    product_list,
                    ProductListReducer,
                    ProductListIntent::CancelDelete
                );
            }
            Screen::Categories => {
                dispatch_mvi!(
                    self,
                    category_list,
                    CategoryListReducer,
                    CategoryListIntent::CancelDelete
                );
            }
            _ => {}
        }
    }

    /// Confirmed delete: dispatch the command for the pending id.
    pub fn confirm_delete(&mut self) {
        match self.screen {
            Screen::Products => {
                if let ProductListState::Loaded {
                    pending_delete: Some(id),
                    ..
                } = self.product_list
                {
                    dispatch_mvi!(
                        self,
                        product_list,
                        ProductListReducer,
                        ProductListIntent::DeleteDispatched
                    );
                    self.worker.submit(ApiCommand::DeleteProduct(id));
                }
            }
            Screen::Categories => {
                if let CategoryListState::Loaded {
                    pending_delete: Some(id),
                    ..
                } = self.category_list
                {
                    dispatch_mvi!(
                        self,
                        category_list,
                        CategoryListReducer,
                        CategoryListIntent::DeleteDispatched
                    );
                    self.worker.submit(ApiCommand::DeleteCategory(id));
                }
            }
            _ => {}
        }
    }

    pub fn is_confirming_delete(&self) -> bool {
        match self.screen {
            Screen::Products => self.product_list.is_confirming(),
            Screen::Categories => self.category_list.is_confirming(),
            _ => false,
        }
    }

    // Form interactions.

    pub fn focus_next(&mut self) {
        if self.screen.is_product_form() {
            dispatch_mvi!(self, product_form, ProductFormReducer, ProductFormIntent::FocusNext);
        } else if self.screen.is_category_form() {
            dispatch_mvi!(
                self,
                category_form,
                CategoryFormReducer,
                CategoryFormIntent::FocusNext
            );
        }
    }

    pub fn focus_prev(&mut self) {
        if self.screen.is_product_form() {
            dispatch_mvi!(self, product_form, ProductFormReducer, ProductFormIntent::FocusPrev);
        } else if self.screen.is_category_form() {
            dispatch_mvi!(
                self,
                category_form,
                CategoryFormReducer,
                CategoryFormIntent::FocusPrev
            );
        }
    }

    pub fn input_char(&mut self, ch: char) {
        if self.screen.is_product_form() {
            dispatch_mvi!(self, product_form, ProductFormReducer, ProductFormIntent::Input(ch));
        } else if self.screen.is_category_form() {
            dispatch_mvi!(
                self,
                category_form,
                CategoryFormReducer,
                CategoryFormIntent::Input(ch)
            );
        }
    }

    pub fn backspace(&mut self) {
        if self.screen.is_product_form() {
            dispatch_mvi!(self, product_form, ProductFormReducer, ProductFormIntent::Backspace);
        } else if self.screen.is_category_form() {
            dispatch_mvi!(
                self,
                category_form,
                CategoryFormReducer,
                CategoryFormIntent::Backspace
            );
        }
    }

    /// Cycle the category picker on the product form. Only reacts while
    /// the picker has focus.
    pub fn category_next(&mut self) {
        if self.screen.is_product_form() && self.product_form.focus == ProductField::Category {
            dispatch_mvi!(
                self,
                product_form,
                ProductFormReducer,
                ProductFormIntent::CategoryNext
            );
        }
    }

    pub fn category_prev(&mut self) {
        if self.screen.is_product_form() && self.product_form.focus == ProductField::Category {
            dispatch_mvi!(
                self,
                product_form,
                ProductFormReducer,
                ProductFormIntent::CategoryPrev
            );
        }
    }

    /// Enter on a form. On the category image field this attaches the
    /// typed file instead of submitting; everywhere else it submits.
    pub fn submit(&mut self) {
        if self.screen.is_category_form() && self.category_form.focus == CategoryField::ImagePath {
            self.attach_image();
            return;
        }

        if self.screen.is_product_form() {
            if self.product_form.submitting {
                return;
            }
            match self.product_form.draft() {
                Ok(draft) => {
                    dispatch_mvi!(
                        self,
                        product_form,
                        ProductFormReducer,
                        ProductFormIntent::SubmitStarted
                    );
                    let command = match self.product_form.editing {
                        Some(id) => ApiCommand::UpdateProduct(id, draft),
                        None => ApiCommand::CreateProduct(draft),
                    };
                    self.worker.submit(command);
                }
                Err(message) => {
                    dispatch_mvi!(
                        self,
                        product_form,
                        ProductFormReducer,
                        ProductFormIntent::SubmitRejected(message)
                    );
                }
            }
        } else if self.screen.is_category_form() {
            if self.category_form.submitting {
                return;
            }
            match self.category_form.draft() {
                Ok(draft) => {
                    dispatch_mvi!(
                        self,
                        category_form,
                        CategoryFormReducer,
                        CategoryFormIntent::SubmitStarted
                    );
                    let command = match self.category_form.editing {
                        Some(id) => ApiCommand::UpdateCategory(id, draft),
                        None => ApiCommand::CreateCategory(draft),
                    };
                    self.worker.submit(command);
                }
                Err(message) => {
                    dispatch_mvi!(
                        self,
                        category_form,
                        CategoryFormReducer,
                        CategoryFormIntent::SubmitRejected(message)
                    );
                }
            }
        }
    }

    fn attach_image(&mut self) {
        let path = self.category_form.image_path.trim();
        if path.is_empty() {
            dispatch_mvi!(
                self,
                category_form,
                CategoryFormReducer,
                CategoryFormIntent::SubmitRejected("escribe la ruta de la imagen".to_string())
            );
            return;
        }
        let path = PathBuf::from(path);
        dispatch_mvi!(
            self,
            category_form,
            CategoryFormReducer,
            CategoryFormIntent::ImageRequested
        );
        self.worker.submit(ApiCommand::LoadImage(path));
    }

    // Worker outcomes. Stale results for a screen the user already left
    // are dropped.

    pub fn on_api(&mut self, outcome: ApiOutcome) {
        match outcome {
            ApiOutcome::Products(Ok(rows)) => {
                if self.screen == Screen::Products {
                    dispatch_mvi!(
                        self,
                        product_list,
                        ProductListReducer,
                        ProductListIntent::Loaded(rows)
                    );
                }
            }
            ApiOutcome::Products(Err(err)) => {
                tracing::error!(error = %err, "product list fetch failed");
                if self.screen == Screen::Products {
                    self.last_notice = Some("No se pudieron cargar los productos".to_string());
                    dispatch_mvi!(
                        self,
                        product_list,
                        ProductListReducer,
                        ProductListIntent::LoadFailed
                    );
                }
            }
            ApiOutcome::ProductLoaded(Ok(product)) => {
                if matches!(self.screen, Screen::ProductEdit(id) if id == product.id) {
                    dispatch_mvi!(
                        self,
                        product_form,
                        ProductFormReducer,
                        ProductFormIntent::EntityLoaded(product)
                    );
                }
            }
            ApiOutcome::ProductLoaded(Err(err)) => {
                tracing::error!(error = %err, "product fetch failed");
                if matches!(self.screen, Screen::ProductEdit(_)) {
                    dispatch_mvi!(
                        self,
                        product_form,
                        ProductFormReducer,
                        ProductFormIntent::EntityFailed
                    );
                }
            }
            ApiOutcome::ProductSaved(Ok(_)) => {
                if self.screen.is_product_form() {
                    self.open_products();
                }
            }
            ApiOutcome::ProductSaved(Err(err)) => {
                tracing::error!(error = %err, "product save failed");
                if self.screen.is_product_form() {
                    dispatch_mvi!(
                        self,
                        product_form,
                        ProductFormReducer,
                        ProductFormIntent::SubmitFailed("no se pudo guardar el producto".to_string())
                    );
                }
            }
            ApiOutcome::ProductDeleted(Ok(())) => {
                if self.screen == Screen::Products {
                    dispatch_mvi!(
                        self,
                        product_list,
                        ProductListReducer,
                        ProductListIntent::Reload
                    );
                    self.worker.submit(ApiCommand::LoadProducts);
                }
            }
            ApiOutcome::ProductDeleted(Err(err)) => {
                tracing::error!(error = %err, "product delete failed");
                self.last_notice = Some("No se pudo eliminar el producto".to_string());
            }
            ApiOutcome::Categories(Ok(rows)) => {
                if self.screen == Screen::Categories {
                    dispatch_mvi!(
                        self,
                        category_list,
                        CategoryListReducer,
                        CategoryListIntent::Loaded(rows)
                    );
                } else if self.screen.is_product_form() {
                    dispatch_mvi!(
                        self,
                        product_form,
                        ProductFormReducer,
                        ProductFormIntent::CategoriesLoaded(rows)
                    );
                }
            }
            ApiOutcome::Categories(Err(err)) => {
                tracing::error!(error = %err, "category list fetch failed");
                if self.screen == Screen::Categories {
                    self.last_notice = Some("No se pudieron cargar las categorías".to_string());
                    dispatch_mvi!(
                        self,
                        category_list,
                        CategoryListReducer,
                        CategoryListIntent::LoadFailed
                    );
                } else if self.screen.is_product_form() {
                    dispatch_mvi!(
                        self,
                        product_form,
                        ProductFormReducer,
                        ProductFormIntent::CategoriesFailed
                    );
                }
            }
            ApiOutcome::CategoryLoaded(Ok(category)) => {
                if matches!(self.screen, Screen::CategoryEdit(id) if id == category.id) {
                    dispatch_mvi!(
                        self,
                        category_form,
                        CategoryFormReducer,
                        CategoryFormIntent::EntityLoaded(category)
                    );
                }
            }
            ApiOutcome::CategoryLoaded(Err(err)) => {
                tracing::error!(error = %err, "category fetch failed");
                if matches!(self.screen, Screen::CategoryEdit(_)) {
                    dispatch_mvi!(
                        self,
                        category_form,
                        CategoryFormReducer,
                        CategoryFormIntent::EntityFailed
                    );
                }
            }
            ApiOutcome::CategorySaved(Ok(_)) => {
                if self.screen.is_category_form() {
                    self.open_categories();
                }
            }
            ApiOutcome::CategorySaved(Err(err)) => {
                tracing::error!(error = %err, "category save failed");
                if self.screen.is_category_form() {
                    dispatch_mvi!(
                        self,
                        category_form,
                        CategoryFormReducer,
                        CategoryFormIntent::SubmitFailed(
                            "no se pudo guardar la categoría".to_string()
                        )
                    );
                }
            }
            ApiOutcome::CategoryDeleted(Ok(())) => {
                if self.screen == Screen::Categories {
                    dispatch_mvi!(
                        self,
                        category_list,
                        CategoryListReducer,
                        CategoryListIntent::Reload
                    );
                    self.worker.submit(ApiCommand::LoadCategories);
                }
            }
            ApiOutcome::CategoryDeleted(Err(err)) if err.is_conflict() => {
                tracing::warn!(error = %err, "category delete blocked by references");
                self.alert = Some(
                    "No se puede eliminar la categoría: tiene productos asociados".to_string(),
                );
            }
            ApiOutcome::CategoryDeleted(Err(err)) => {
                tracing::error!(error = %err, "category delete failed");
                self.last_notice = Some("No se pudo eliminar la categoría".to_string());
            }
            ApiOutcome::ImageLoaded(attachment) => {
                if self.screen.is_category_form() {
                    dispatch_mvi!(
                        self,
                        category_form,
                        CategoryFormReducer,
                        CategoryFormIntent::ImageAttached(attachment)
                    );
                }
            }
            ApiOutcome::ImageFailed(message) => {
                if self.screen.is_category_form() {
                    dispatch_mvi!(
                        self,
                        category_form,
                        CategoryFormReducer,
                        CategoryFormIntent::ImageFailed(message)
                    );
                }
            }
            ApiOutcome::PreviewReady(preview) => {
                if self.screen.is_category_form() {
                    dispatch_mvi!(
                        self,
                        category_form,
                        CategoryFormReducer,
                        CategoryFormIntent::PreviewReady(preview)
                    );
                }
            }
            ApiOutcome::PreviewFailed(message) => {
                if self.screen.is_category_form() {
                    dispatch_mvi!(
                        self,
                        category_form,
                        CategoryFormReducer,
                        CategoryFormIntent::PreviewFailed(message)
                    );
                }
            }
        }
    }
}
