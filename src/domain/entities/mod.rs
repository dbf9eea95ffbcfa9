//! Domain entity definitions.

mod favorite;
mod listing;
mod resource;
mod source;

pub use favorite::FavoriteFolder;
pub use listing::{
    DirEntry, DirectoryListing, Drive, FILE_ROUTE, FontEntry, ImageEntry, file_url,
};
pub use resource::ResourceItem;
pub use source::{SourceDescriptor, SourceKey, SourceShape};
