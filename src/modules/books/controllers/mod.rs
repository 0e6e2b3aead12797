//! Per-screen state holders. Each controller owns its state and changes it only
//! through its own operations; store failures stop here and become a message.

pub mod create;
pub mod edit;
pub mod form;
pub mod list;

pub use create::CreateController;
pub use edit::{EditController, EditView};
pub use form::{BookDraft, Field, ValidationError};
pub use list::{ListController, ListView};

/// Where the front-end should go after a form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Remain on the form; the controller holds an error to show.
    Stay,
    /// Go back to the collection view.
    Collection,
}
