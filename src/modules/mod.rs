pub mod books;

use std::sync::Arc;

use catalog_kernel::ModuleRegistry;
use catalog_store::BookStore;

/// Register all application modules with the registry
pub fn register_all(registry: &mut ModuleRegistry, store: Arc<dyn BookStore>) {
    registry.register(books::create_module(store));
}
