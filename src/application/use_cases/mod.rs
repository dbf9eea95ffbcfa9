//! Use case implementations.

mod load_resources_use_case;
mod manage_favorites_use_case;
mod retry_image_use_case;

pub use load_resources_use_case::LoadResourcesUseCase;
pub use manage_favorites_use_case::ManageFavoritesUseCase;
pub use retry_image_use_case::RetryImageUseCase;
