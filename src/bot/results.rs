use crate::media::{MediaDescriptor, MediaKind, MediaSource, SearchPage};
use teloxide::types::{InlineQueryResult, InlineQueryResultMpeg4Gif, InlineQueryResultPhoto};
use tracing::{error, warn};
use url::Url;

/// Telegram rejects answers whose `next_offset` is longer than this.
const MAX_NEXT_OFFSET_BYTES: usize = 64;

/// What the bot answers an inline query with.
#[derive(Debug)]
pub struct InlineAnswer {
    pub results: Vec<InlineQueryResult>,
    /// Cursor for the next page, empty when there is none.
    pub next_offset: String,
}

/// Searches `source` and converts the page into inline results.
///
/// A failed search is logged and answered with no results, so the client
/// stops waiting instead of timing out. A cursor too long to be an offset
/// keeps the results and drops pagination.
pub async fn resolve_inline_answer(
    source: &dyn MediaSource,
    keywords: &str,
    offset: &str,
) -> InlineAnswer {
    match source.search(keywords, offset).await {
        Ok(SearchPage {
            descriptors,
            next_cursor,
        }) => {
            let next_offset = if next_cursor.len() > MAX_NEXT_OFFSET_BYTES {
                warn!(
                    "Next cursor for {:?} is {} bytes, over the {} byte offset limit; dropping pagination",
                    keywords,
                    next_cursor.len(),
                    MAX_NEXT_OFFSET_BYTES
                );
                String::new()
            } else {
                next_cursor
            };

            InlineAnswer {
                results: descriptors.iter().filter_map(to_inline_result).collect(),
                next_offset,
            }
        }
        Err(e) => {
            error!("{} search failed for {:?}: {:#}", source.name(), keywords, e);
            InlineAnswer {
                results: Vec::new(),
                next_offset: String::new(),
            }
        }
    }
}

/// Videos are sent as MPEG4 GIFs (silent, autoplaying), images as photos.
pub fn to_inline_result(descriptor: &MediaDescriptor) -> Option<InlineQueryResult> {
    let media_url = parse_url(&descriptor.url)?;
    let thumbnail_url = parse_url(&descriptor.thumbnail_url)?;
    let id = uuid::Uuid::new_v4().to_string();

    let result = match descriptor.kind {
        MediaKind::Video => {
            let mut result = InlineQueryResultMpeg4Gif::new(id, media_url, thumbnail_url);
            result.mpeg4_width = descriptor.width;
            result.mpeg4_height = descriptor.height;
            result.title = Some(descriptor.title.clone());
            InlineQueryResult::Mpeg4Gif(result)
        }
        MediaKind::Image => {
            let mut result = InlineQueryResultPhoto::new(id, media_url, thumbnail_url);
            result.photo_width = descriptor.width;
            result.photo_height = descriptor.height;
            result.title = Some(descriptor.title.clone());
            InlineQueryResult::Photo(result)
        }
    };

    Some(result)
}

fn parse_url(raw: &str) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!("Invalid media URL '{}': {}", raw, e);
            None
        }
    }
}
