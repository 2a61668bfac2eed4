// Embedded default assets.

use crate::error::TrackError;
use rust_embed::RustEmbed;
use std::borrow::Cow;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

pub const DEFAULT_TRACK: &str = "track.png";

pub fn track_bytes(name: &str) -> Result<Cow<'static, [u8]>, TrackError> {
    Asset::get(name)
        .map(|f| f.data)
        .ok_or_else(|| TrackError::MissingAsset(name.to_string()))
}
