/**
 * Embedded Static Assets
 *
 * The demo page and its client script are compiled into the binary, so the
 * gateway ships as a single file with no asset directory to deploy. Lookup
 * goes through a name table so a handler asking for an unknown asset gets
 * a typed error instead of a compile-time coupling to each file.
 */

use crate::error::GatewayError;

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const APP_JS: &str = include_str!("../../assets/app.js");

/// Resolve an embedded asset by file name.
pub fn read_asset(path: &str) -> Result<&'static str, GatewayError> {
    match path {
        "index.html" => Ok(INDEX_HTML),
        "app.js" => Ok(APP_JS),
        _ => Err(GatewayError::AssetRead {
            path: path.to_string(),
        }),
    }
}
