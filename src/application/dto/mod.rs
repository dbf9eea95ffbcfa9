//! Data transfer objects for the application layer.

mod favorite_dto;
mod resource_dto;

pub use favorite_dto::{AckResponse, AddFavoriteRequest};
pub use resource_dto::{ResourceResponse, ResourceView, RetryImageResponse};
