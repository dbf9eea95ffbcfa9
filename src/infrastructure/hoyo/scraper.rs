//! Boss list scraper for the Genshin wiki.
//!
//! Best effort: depends on the page markup of a third-party wiki and returns
//! whatever still matches when that markup changes.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::domain::entities::ResourceItem;

const BOSS_ANCHOR: &str = r#"id="BOSS"#;
const BOSS_RARITY: u8 = 5;
const THUMB_SIZE: &str = "/180px-";

/// Link titles that are wiki navigation, not bosses.
const SKIPPED_NAMES: [&str; 6] = [
    "元素反应",
    "分类",
    "感电",
    "绽放",
    "需要帮助",
    "特殊:页面分类",
];

fn boss_link_regex() -> &'static Regex {
    static BOSS_LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    BOSS_LINK_REGEX.get_or_init(|| {
        Regex::new(
            r#"<a[^>]*href="/ys/[^"]*"[^>]*title="([^"]+)"[^>]*>\s*<img[^>]*src="(https://patchwiki\.biligame\.com/images/[^"]+)""#,
        )
        .expect("Invalid regex")
    })
}

fn thumb_size_regex() -> &'static Regex {
    static THUMB_SIZE_REGEX: OnceLock<Regex> = OnceLock::new();
    THUMB_SIZE_REGEX.get_or_init(|| Regex::new(r"/\d+px-").expect("Invalid regex"))
}

fn unsafe_char_regex() -> &'static Regex {
    static UNSAFE_CHAR_REGEX: OnceLock<Regex> = OnceLock::new();
    UNSAFE_CHAR_REGEX
        .get_or_init(|| Regex::new(r"[^\w\x{4e00}-\x{9fff}]").expect("Invalid regex"))
}

/// Replaces every char that is not a word char or CJK ideograph with `_`.
fn safe_id(name: &str) -> String {
    unsafe_char_regex().replace_all(name, "_").into_owned()
}

/// Rewrites the thumbnail size token so the wiki serves a larger variant.
fn upscale_thumbnail(url: &str) -> String {
    thumb_size_regex().replace_all(url, THUMB_SIZE).into_owned()
}

/// Extracts bosses from the wiki page, in document order.
///
/// Only content after the boss section anchor is considered; when the anchor
/// is missing the whole page is scanned.
#[must_use]
pub fn extract_bosses(html: &str) -> Vec<ResourceItem> {
    let section = html.find(BOSS_ANCHOR).map_or(html, |start| &html[start..]);

    let mut seen = HashSet::new();
    let mut items = Vec::new();

    for caps in boss_link_regex().captures_iter(section) {
        let (Some(name), Some(img_url)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        let name = name.as_str();

        if seen.contains(name) || SKIPPED_NAMES.iter().any(|skip| name.contains(skip)) {
            continue;
        }
        seen.insert(name.to_string());

        let id = safe_id(name);
        items.push(ResourceItem {
            filename: format!("mon_{id}.png"),
            id,
            name: name.to_string(),
            rarity: BOSS_RARITY,
            element: String::new(),
            icon_url: upscale_thumbnail(img_url.as_str()),
        });
    }

    debug!(count = items.len(), "Scraped boss list");
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <div id="toc"><a href="/ys/%E5%85%83" title="目录里的怪"><img src="https://patchwiki.biligame.com/images/ys/thumb/a/ab/toc.png/80px-toc.png"></a></div>
        <h2><span class="mw-headline" id="BOSS介绍">BOSS介绍</span></h2>
        <a href="/ys/%E5%85%83%E7%B4%A0" title="元素反应"><img src="https://patchwiki.biligame.com/images/ys/thumb/1/11/x.png/80px-x.png"></a>
        <a href="/ys/Boss1" title="吞星之鲸"><img alt="" src="https://patchwiki.biligame.com/images/ys/thumb/2/22/whale.png/80px-whale.png" width="80"></a>
        <a href="/ys/Boss2" class="x" title="「僭主」 阿佩普">
            <img src="https://patchwiki.biligame.com/images/ys/thumb/3/33/apep.png/80px-apep.png">
        </a>
        <a href="/ys/Boss1" title="吞星之鲸"><img src="https://patchwiki.biligame.com/images/ys/thumb/2/22/whale.png/80px-whale.png"></a>
        <a href="/ys/Other" title="外链图"><img src="https://example.com/images/other.png"></a>
        <a href="/ys/Cat" title="分类:怪物"><img src="https://patchwiki.biligame.com/images/ys/thumb/4/44/cat.png/80px-cat.png"></a>
    "#;

    #[test]
    fn test_extract_bosses_after_anchor_in_document_order() {
        let items = extract_bosses(PAGE);
        let names: Vec<_> = items.iter().map(|i| i.name.as_str()).collect();

        assert_eq!(names, vec!["吞星之鲸", "「僭主」 阿佩普"]);
    }

    #[test]
    fn test_extract_bosses_upscales_thumbnail() {
        let items = extract_bosses(PAGE);

        assert_eq!(
            items[0].icon_url,
            "https://patchwiki.biligame.com/images/ys/thumb/2/22/whale.png/180px-whale.png"
        );
        assert_eq!(items[0].rarity, 5);
        assert!(items[0].element.is_empty());
    }

    #[test]
    fn test_extract_bosses_sanitizes_id() {
        let items = extract_bosses(PAGE);

        assert_eq!(items[1].id, "_僭主__阿佩普");
        assert_eq!(items[1].filename, "mon__僭主__阿佩普.png");
    }

    #[test]
    fn test_missing_anchor_scans_whole_page() {
        let html = r#"<a href="/ys/B" title="若陀龙王"><img src="https://patchwiki.biligame.com/images/ys/thumb/5/55/r.png/60px-r.png"></a>"#;

        let items = extract_bosses(html);

        assert_eq!(items.len(), 1);
        assert!(items[0].icon_url.ends_with("/180px-r.png"));
    }

    #[test]
    fn test_no_matches_is_empty() {
        assert!(extract_bosses("<html><body>nothing</body></html>").is_empty());
    }
}
