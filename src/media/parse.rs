use super::types::{MediaDescriptor, MediaKind, SearchPage};
use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{debug, warn};

const THUMBNAIL_RENDITION: &str = "image460";

/// Renditions tried in order; the first one with a string `url` decides the
/// kind. A video rendition without a usable `url` falls back to the image.
const RENDITION_PROBES: [(&str, MediaKind); 2] = [
    ("image460sv", MediaKind::Video),
    (THUMBNAIL_RENDITION, MediaKind::Image),
];

/// Parses a search response body into a page of descriptors.
///
/// A body without `data.nextCursor` is how the upstream reports an empty or
/// rejected query, so it yields an empty page rather than an error.
pub fn parse_page(body: &str) -> Result<SearchPage> {
    let json: Value = serde_json::from_str(body).context("Failed to parse search response")?;

    let Some(next_cursor) = json["data"]["nextCursor"].as_str() else {
        debug!("Search response has no next cursor, treating as exhausted");
        return Ok(SearchPage::empty());
    };

    let posts = json["data"]["posts"]
        .as_array()
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut descriptors = Vec::with_capacity(posts.len());
    for (index, post) in posts.iter().enumerate() {
        match parse_post(post) {
            Some(descriptor) => descriptors.push(descriptor),
            None => warn!(
                "Skipping post {} ({}): no usable media rendition",
                index,
                post["id"].as_str().unwrap_or("unknown id")
            ),
        }
    }

    Ok(SearchPage {
        descriptors,
        next_cursor: next_cursor.to_string(),
    })
}

/// Maps a single post record to a descriptor, or `None` if the post carries
/// neither rendition or lacks a thumbnail.
pub fn parse_post(post: &Value) -> Option<MediaDescriptor> {
    let images = &post["images"];

    let (kind, media) = RENDITION_PROBES.iter().find_map(|(field, kind)| {
        let rendition = &images[*field];
        rendition["url"].as_str().map(|_| (*kind, rendition))
    })?;

    let thumbnail_url = images[THUMBNAIL_RENDITION]["url"].as_str()?;

    Some(MediaDescriptor {
        title: post["title"].as_str().unwrap_or_default().to_string(),
        kind,
        url: media["url"].as_str()?.to_string(),
        width: dimension(&media["width"]),
        height: dimension(&media["height"]),
        thumbnail_url: thumbnail_url.to_string(),
    })
}

fn dimension(value: &Value) -> Option<u32> {
    value.as_u64().and_then(|v| u32::try_from(v).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn image_post(title: &str, url: &str) -> Value {
        json!({
            "id": title,
            "title": title,
            "images": {
                "image460": {"url": url, "width": 460, "height": 300}
            }
        })
    }

    fn video_post(title: &str, image_url: &str, video_url: &str) -> Value {
        json!({
            "id": title,
            "title": title,
            "images": {
                "image460": {"url": image_url, "width": 460, "height": 300},
                "image460sv": {"url": video_url, "width": 460, "height": 258, "hasAudio": 0}
            }
        })
    }

    fn page(posts: Vec<Value>) -> String {
        json!({"data": {"nextCursor": "query=cat&c=10", "posts": posts}}).to_string()
    }

    #[test]
    fn test_missing_next_cursor_is_empty_page() {
        let body = json!({"meta": {"status": "Failure"}, "data": {"posts": [
            image_post("a", "https://img/a.jpg")
        ]}})
        .to_string();
        assert_eq!(parse_page(&body).unwrap(), SearchPage::empty());
        assert_eq!(parse_page("{}").unwrap(), SearchPage::empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        assert!(parse_page("<html>nope</html>").is_err());
    }

    #[test]
    fn test_image_post() {
        let descriptor = parse_post(&image_post("Cat", "https://img/cat.jpg")).unwrap();
        assert_eq!(descriptor.kind, MediaKind::Image);
        assert_eq!(descriptor.url, "https://img/cat.jpg");
        assert_eq!(descriptor.thumbnail_url, descriptor.url);
        assert_eq!(descriptor.width, Some(460));
        assert_eq!(descriptor.height, Some(300));
        assert_eq!(descriptor.title, "Cat");
    }

    #[test]
    fn test_video_post() {
        let descriptor = parse_post(&video_post(
            "Dog",
            "https://img/dog.jpg",
            "https://img/dog.mp4",
        ))
        .unwrap();
        assert_eq!(descriptor.kind, MediaKind::Video);
        assert_eq!(descriptor.url, "https://img/dog.mp4");
        assert_eq!(descriptor.thumbnail_url, "https://img/dog.jpg");
        assert_ne!(descriptor.url, descriptor.thumbnail_url);
        assert_eq!(descriptor.height, Some(258));
    }

    #[test]
    fn test_dimensions_are_optional() {
        let post = json!({"title": "x", "images": {"image460": {"url": "https://img/x.jpg"}}});
        let descriptor = parse_post(&post).unwrap();
        assert_eq!(descriptor.width, None);
        assert_eq!(descriptor.height, None);
    }

    #[test]
    fn test_title_is_kept_as_is() {
        let post = image_post("  Tom &amp; Jerry ", "https://img/t.jpg");
        assert_eq!(parse_post(&post).unwrap().title, "  Tom &amp; Jerry ");
    }

    #[test]
    fn test_video_rendition_without_url_falls_back_to_image() {
        let post = json!({
            "title": "x",
            "images": {
                "image460": {"url": "https://img/x.jpg", "width": 460, "height": 300},
                "image460sv": {"url": null, "width": 460, "height": 258}
            }
        });
        let descriptor = parse_post(&post).unwrap();
        assert_eq!(descriptor.kind, MediaKind::Image);
        assert_eq!(descriptor.url, "https://img/x.jpg");
        assert_eq!(descriptor.height, Some(300));
    }

    #[test]
    fn test_video_without_thumbnail_is_skipped() {
        let post = json!({"title": "x", "images": {"image460sv": {"url": "https://img/x.mp4"}}});
        assert!(parse_post(&post).is_none());
    }

    #[test]
    fn test_order_is_preserved() {
        let body = page(vec![
            image_post("first", "https://img/1.jpg"),
            video_post("second", "https://img/2.jpg", "https://img/2.mp4"),
            image_post("third", "https://img/3.jpg"),
        ]);
        let result = parse_page(&body).unwrap();
        let titles: Vec<_> = result.descriptors.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
        assert_eq!(result.next_cursor, "query=cat&c=10");
    }

    #[test]
    fn test_post_without_renditions_is_skipped() {
        let body = page(vec![
            image_post("first", "https://img/1.jpg"),
            json!({"id": "broken", "title": "broken", "images": {"image700": {"url": "https://img/b.jpg"}}}),
            json!({"id": "bare", "title": "bare"}),
            image_post("last", "https://img/4.jpg"),
        ]);
        let result = parse_page(&body).unwrap();
        let titles: Vec<_> = result.descriptors.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["first", "last"]);
    }

    #[test]
    fn test_missing_posts_array_is_empty_list() {
        let body = json!({"data": {"nextCursor": "c=1"}}).to_string();
        let result = parse_page(&body).unwrap();
        assert!(result.descriptors.is_empty());
        assert_eq!(result.next_cursor, "c=1");
    }
}
