//! Turns a snapshot into the page-facing item list.

use crate::application::dto::{ResourceResponse, ResourceView};
use crate::domain::entities::{ResourceItem, SourceKey, file_url};
use crate::domain::ports::ImageCachePort;

/// Builds the response for `source`, pointing cached items at their local file.
pub async fn build_response(
    images: &dyn ImageCachePort,
    source: SourceKey,
    items: &[ResourceItem],
) -> ResourceResponse {
    let mut views = Vec::with_capacity(items.len());
    for item in items {
        let cached = images.is_cached(source, item).await;
        let url = if cached {
            file_url(&images.image_path(source, item))
        } else {
            item.icon_url.clone()
        };

        views.push(ResourceView {
            id: item.id.clone(),
            name: item.name.clone(),
            rarity: item.rarity,
            element: item.element.clone(),
            url,
            cached,
        });
    }

    let descriptor = source.descriptor();
    ResourceResponse {
        source,
        game: descriptor.game,
        category: descriptor.category,
        items: views,
    }
}
