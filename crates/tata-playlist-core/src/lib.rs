pub mod catalogue;
pub mod channel;
pub mod config;
pub mod error;
pub mod m3u;
pub mod output;
pub mod summary;

pub use catalogue::{BuiltinChannel, Catalogue, LintWarning, BUILTIN_CHANNELS};
pub use channel::ChannelRecord;
pub use config::Config;
pub use error::{PlaylistError, Result};
pub use m3u::{Playlist, PlaylistSettings};
pub use output::{save_playlist, Generator, OutputKind, WrittenFile};
pub use summary::Summary;
