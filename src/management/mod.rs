mod cache;
mod session;

pub use cache::ArtistCache;
pub use cache::CacheError;
pub use cache::CacheState;
pub use session::Session;
