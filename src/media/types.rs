#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescriptor {
    pub title: String,
    pub kind: MediaKind,
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Always the base image rendition, even for videos.
    pub thumbnail_url: String,
}

/// One page of search results plus the cursor for the page after it.
/// An empty `next_cursor` means the query is exhausted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPage {
    pub descriptors: Vec<MediaDescriptor>,
    pub next_cursor: String,
}

impl SearchPage {
    pub fn empty() -> Self {
        Self::default()
    }
}
