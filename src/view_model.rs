//! The [`ViewModel`] trait for the MVVM architecture.

use crate::app::Message;

/// Trait containing methods for `ViewModel` modules in the MVVM architecture.
pub trait ViewModel {
    /// Updates the model behind a [`crate::view::View`]. May hand back a
    /// follow-up message.
    fn update(&mut self, message: Message) -> Option<Message>;
}
