//! Error types for baking

use thiserror::Error;

/// Errors from the bake/atlas boundary.
#[derive(Debug, Error)]
pub enum BakeError {
    /// The requested sprite slot does not exist in the atlas layout.
    #[error("atlas slot {slot} out of range (atlas holds {capacity} tiles)")]
    SlotOutOfRange { slot: usize, capacity: usize },
}
