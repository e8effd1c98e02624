// Small helpers shared across components.

use wasm_bindgen::JsValue;

/// Base path the site is served under, baked in at compile time so a
/// sub-path deploy (e.g. a GitHub Pages project page) just works:
/// `PORTFOLIO_BASE_PATH=/zedo-world trunk build --release`. Empty for a
/// root deploy.
pub fn base_path() -> &'static str {
    option_env!("PORTFOLIO_BASE_PATH").unwrap_or("")
}

/// URL of a static file under the assets directory, base path included.
pub fn asset_url(file: &str) -> String {
    format!("{}/assets/{}", base_path(), file)
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_urls_are_rooted() {
        assert_eq!(asset_url("character.png"), "/assets/character.png");
        assert_eq!(asset_url("building1.png"), "/assets/building1.png");
    }
}
