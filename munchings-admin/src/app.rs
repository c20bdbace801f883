use std::sync::Arc;

use munchings_admin::Notice;
use munchings_common::sync::MemoryBackend;
use munchings_menu_service::MenuService;

pub mod book;
pub mod dashboard;
pub mod menu;
pub mod order;

/// Wraps an error with the message shown to the user.
pub fn noticed<E>(err: E) -> anyhow::Error
where
    E: std::error::Error + Send + Sync + 'static,
    for<'a> Notice: From<&'a E>,
{
    let notice = Notice::from(&err);
    anyhow::Error::new(err).context(notice.message)
}

/// An in-process backend holding the house menu.
pub async fn backend_with_menu() -> anyhow::Result<Arc<MemoryBackend>> {
    let backend = Arc::new(MemoryBackend::new());
    MenuService::new(backend.clone())
        .seed()
        .await
        .map_err(noticed)?;
    Ok(backend)
}
