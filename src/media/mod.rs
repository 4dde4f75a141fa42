mod parse;
mod query;
mod resolver;
mod source;
mod types;

pub use resolver::MediaResolver;
pub use source::MediaSource;
pub use types::{MediaDescriptor, MediaKind, SearchPage};
