use std::path::PathBuf;
use std::sync::mpsc::Sender;
use std::thread;

use crate::api::{ApiClient, ApiError, Category, CategoryDraft, ImageAttachment, Product, ProductDraft};
use crate::media::{decode_preview, ImagePreview};
use crate::ui::events::AppEvent;

/// Requests the UI thread hands to the API worker. One task per command;
/// nothing is cancelled or retried.
#[derive(Debug)]
pub enum ApiCommand {
    LoadProducts,
    LoadProduct(i64),
    CreateProduct(ProductDraft),
    UpdateProduct(i64, ProductDraft),
    DeleteProduct(i64),
    LoadCategories,
    LoadCategory(i64),
    CreateCategory(CategoryDraft),
    UpdateCategory(i64, CategoryDraft),
    DeleteCategory(i64),
    /// Read an image file from disk for the category form.
    LoadImage(PathBuf),
}

/// Results the worker sends back through the event channel.
pub enum ApiOutcome {
    Products(Result<Vec<Product>, ApiError>),
    ProductLoaded(Result<Product, ApiError>),
    ProductSaved(Result<Product, ApiError>),
    ProductDeleted(Result<(), ApiError>),
    Categories(Result<Vec<Category>, ApiError>),
    CategoryLoaded(Result<Category, ApiError>),
    CategorySaved(Result<Category, ApiError>),
    CategoryDeleted(Result<(), ApiError>),
    /// Raw bytes landed; attachment goes into the draft.
    ImageLoaded(ImageAttachment),
    ImageFailed(String),
    /// Decoding finished for the last attached image.
    PreviewReady(ImagePreview),
    PreviewFailed(String),
}

const COMMAND_QUEUE_DEPTH: usize = 32;

/// Bridge between the synchronous UI loop and the async `ApiClient`.
///
/// Commands cross a bounded channel into a tokio runtime owned by a
/// dedicated thread; each command runs as its own task and reports back
/// through the event channel.
pub struct ApiWorker {
    tx: tokio::sync::mpsc::Sender<ApiCommand>,
}

impl ApiWorker {
    pub fn spawn(client: ApiClient, events: Sender<AppEvent>) -> Self {
        let (tx, mut rx) = tokio::sync::mpsc::channel::<ApiCommand>(COMMAND_QUEUE_DEPTH);

        thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    tracing::error!(error = %err, "failed to start api runtime");
                    return;
                }
            };

            runtime.block_on(async move {
                while let Some(command) = rx.recv().await {
                    let client = client.clone();
                    let events = events.clone();
                    tokio::spawn(async move {
                        execute(&client, command, &events).await;
                    });
                }
            });
        });

        Self { tx }
    }

    /// Channel-only construction; the receiving end is the caller's to
    /// drain. Used by tests that assert on the commands a flow produces.
    pub fn detached() -> (Self, tokio::sync::mpsc::Receiver<ApiCommand>) {
        let (tx, rx) = tokio::sync::mpsc::channel(COMMAND_QUEUE_DEPTH);
        (Self { tx }, rx)
    }

    pub fn submit(&self, command: ApiCommand) {
        if let Err(err) = self.tx.try_send(command) {
            tracing::warn!(error = %err, "api command dropped");
        }
    }
}

async fn execute(client: &ApiClient, command: ApiCommand, events: &Sender<AppEvent>) {
    let outcome = match command {
        ApiCommand::LoadProducts => ApiOutcome::Products(client.list_products().await),
        ApiCommand::LoadProduct(id) => ApiOutcome::ProductLoaded(client.get_product(id).await),
        ApiCommand::CreateProduct(draft) => {
            ApiOutcome::ProductSaved(client.create_product(&draft).await)
        }
        ApiCommand::UpdateProduct(id, draft) => {
            ApiOutcome::ProductSaved(client.update_product(id, &draft).await)
        }
        ApiCommand::DeleteProduct(id) => ApiOutcome::ProductDeleted(client.delete_product(id).await),
        ApiCommand::LoadCategories => ApiOutcome::Categories(client.list_categories().await),
        ApiCommand::LoadCategory(id) => ApiOutcome::CategoryLoaded(client.get_category(id).await),
        ApiCommand::CreateCategory(draft) => {
            ApiOutcome::CategorySaved(client.create_category(&draft).await)
        }
        ApiCommand::UpdateCategory(id, draft) => {
            ApiOutcome::CategorySaved(client.update_category(id, &draft).await)
        }
        ApiCommand::DeleteCategory(id) => {
            ApiOutcome::CategoryDeleted(client.delete_category(id).await)
        }
        ApiCommand::LoadImage(path) => {
            load_image(path, events).await;
            return;
        }
    };
    let _ = events.send(AppEvent::Api(outcome));
}

/// Reads the file and reports twice: first the raw attachment for the
/// draft, then the preview outcome once decoding settles.
async fn load_image(path: PathBuf, events: &Sender<AppEvent>) {
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::error!(path = %path.display(), error = %err, "image read failed");
            let _ = events.send(AppEvent::Api(ApiOutcome::ImageFailed(
                "no se pudo leer el archivo".to_string(),
            )));
            return;
        }
    };

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "imagen".to_string());
    let _ = events.send(AppEvent::Api(ApiOutcome::ImageLoaded(ImageAttachment {
        file_name,
        bytes: bytes.clone(),
    })));

    let preview = tokio::task::spawn_blocking(move || decode_preview(&bytes)).await;
    let outcome = match preview {
        Ok(Ok(preview)) => ApiOutcome::PreviewReady(preview),
        Ok(Err(err)) => {
            tracing::warn!(path = %path.display(), error = %err, "preview decode failed");
            ApiOutcome::PreviewFailed("formato de imagen no reconocido".to_string())
        }
        Err(err) => {
            tracing::error!(error = %err, "preview task failed");
            ApiOutcome::PreviewFailed("formato de imagen no reconocido".to_string())
        }
    };
    let _ = events.send(AppEvent::Api(outcome));
}
