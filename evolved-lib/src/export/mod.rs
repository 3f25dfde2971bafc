//! Export to Huetone
//!
//! Huetone opens a palette passed as lz-string compressed JSON in the `palette`
//! query parameter.

use log::debug;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ExportError;

/// Base URL of the Huetone editor.
pub const HUETONE_URL: &str = "https://huetone.ardov.me/";

/// Query parameter carrying the palette.
pub const HUETONE_PARAM: &str = "palette";

/// A palette in Huetone's import format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HuetoneJson {
    pub name: String,
    pub hues: Vec<HuetoneHue>,
    /// Stop names, shared by every hue.
    pub tones: Vec<String>,
}

/// One ramp of a Huetone palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HuetoneHue {
    pub name: String,
    /// sRGB hex colors, one per tone.
    pub colors: Vec<String>,
}

/// Packs a palette into the URI-safe lz-string form Huetone reads.
pub fn encode_palette(palette: &HuetoneJson) -> Result<String, ExportError> {
    let json = serde_json::to_string(palette)?;
    let packed = lz_str::compress_to_encoded_uri_component(json.as_str());
    debug!("huetone payload: {} bytes json, {} packed", json.len(), packed.len());
    Ok(packed)
}

/// Unpacks [`encode_palette`] output. `None` if it isn't a valid payload.
pub fn decode_palette(packed: &str) -> Option<HuetoneJson> {
    let units = lz_str::decompress_from_encoded_uri_component(packed)?;
    let json = String::from_utf16(&units).ok()?;
    serde_json::from_str(&json).ok()
}

/// The Huetone link opening `palette`.
pub fn huetone_url(palette: &HuetoneJson) -> Result<Url, ExportError> {
    let packed = encode_palette(palette)?;
    let mut url = Url::parse(HUETONE_URL)?;
    url.query_pairs_mut().append_pair(HUETONE_PARAM, &packed);
    Ok(url)
}

/// Reads a palette back out of a Huetone link.
pub fn palette_from_url(url: &Url) -> Option<HuetoneJson> {
    let (_, packed) = url.query_pairs().find(|(key, _)| key == HUETONE_PARAM)?;
    decode_palette(&packed)
}
