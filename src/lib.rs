//! Book catalog front-end.
//!
//! Controllers hold the state of each screen and talk to the remote book store;
//! the web pages and the terminal commands are thin drivers over them.

use std::sync::Arc;

use anyhow::Context;
use catalog_kernel::{settings::Settings, InitCtx, ModuleRegistry};
use catalog_store::{BookStore, HttpBookStore};

pub mod modules;

pub use modules::books::controllers;

/// Build the store client described by `settings`.
pub fn store_from_settings(settings: &Settings) -> Arc<dyn BookStore> {
    Arc::new(HttpBookStore::from_settings(&settings.api))
}

/// Run the web front-end until shutdown.
pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let mut registry = ModuleRegistry::new();
    modules::register_all(&mut registry, store_from_settings(settings));

    let ctx = InitCtx { settings };
    registry
        .init_modules(&ctx)
        .await
        .context("failed to initialize modules")?;
    registry
        .start_modules(&ctx)
        .await
        .context("failed to start modules")?;

    let served = catalog_http::start_server(&registry, settings).await;

    registry
        .stop_modules()
        .await
        .context("failed to stop modules")?;
    served
}
