//! Popup windows editing records related to the opener form, and the message
//! they post back when done.

mod field;
mod geometry;
mod message;

pub use field::*;
pub use geometry::*;
pub use message::*;

use mealplanner_shared::Result;

/// Applies a popup message to the opener field.
///
/// Returns whether the field changed; a print popup closing leaves it as is.
pub fn on_popup_complete(field: &mut FormField, message: &PopupMessage) -> Result<bool> {
    match message {
        PopupMessage::Created(result) => {
            field.apply(result)?;
            tracing::debug!(field = field.id(), new_id = result.new_id, "popup record added");

            Ok(true)
        }
        PopupMessage::PrintClosed => Ok(false),
    }
}
