//! Application layer with use cases and DTOs.

/// Data transfer objects.
pub mod dto;
/// Shared application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{AckResponse, AddFavoriteRequest, ResourceResponse, ResourceView, RetryImageResponse};
pub use use_cases::{LoadResourcesUseCase, ManageFavoritesUseCase, RetryImageUseCase};
