use std::sync::Arc;

use munchings_common::sync::record::to_document;
use munchings_common::sync::{Collection, SyncAdapter};
use munchings_common::{PersistenceError, ValidationError};
use thiserror::Error;
use tracing::info;

use crate::menu_data::seed_menu;
use crate::models::NewMenuItem;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to save menu item")]
    Persistence(#[from] PersistenceError),
}

#[derive(Clone)]
pub struct MenuService {
    adapter: Arc<dyn SyncAdapter>,
}

impl MenuService {
    pub fn new(adapter: Arc<dyn SyncAdapter>) -> Self {
        Self { adapter }
    }

    pub async fn add(&self, item: &NewMenuItem) -> Result<String, MenuError> {
        item.validate()?;
        let id = self
            .adapter
            .create(Collection::MenuItems, to_document(item)?)
            .await?;
        info!(%id, name = %item.name, "menu item added");
        Ok(id)
    }

    /// Replaces every editable field of an existing item.
    pub async fn update(&self, id: &str, item: &NewMenuItem) -> Result<(), MenuError> {
        item.validate()?;
        self.adapter
            .update(Collection::MenuItems, id, to_document(item)?)
            .await?;
        info!(%id, name = %item.name, "menu item updated");
        Ok(())
    }

    pub async fn delete(&self, id: &str) -> Result<(), PersistenceError> {
        self.adapter.delete(Collection::MenuItems, id).await?;
        info!(%id, "menu item deleted");
        Ok(())
    }

    /// Loads the house menu, returning the new document ids in menu order.
    pub async fn seed(&self) -> Result<Vec<String>, PersistenceError> {
        let mut ids = Vec::new();
        for item in seed_menu() {
            ids.push(
                self.adapter
                    .create(Collection::MenuItems, to_document(&item)?)
                    .await?,
            );
        }
        info!(count = ids.len(), "menu seeded");
        Ok(ids)
    }
}
