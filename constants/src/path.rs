/// Points-of-interest endpoint. Served next to the wasm bundle, so the asset
/// server's HTTP reader issues a plain GET for it.
pub const POINTS_ENDPOINT: &str = "api/points.json";

/// Directory holding marker icons.
pub const ICON_BASE_PATH: &str = "icons";
