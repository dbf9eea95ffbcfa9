//! User state persisted between runs.

use serde::{Deserialize, Serialize};

use crate::domain::entities::FavoriteFolder;

/// Persisted user state.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    /// Favorite folders, in insertion order.
    #[serde(default)]
    pub favorite_folders: Vec<FavoriteFolder>,
}
