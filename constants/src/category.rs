use bevy::color::Color;

pub struct CategoryInfo {
    /// Tag used by the points endpoint (`type` field).
    pub tag: &'static str,
    pub label: &'static str,
    /// Icon file name under [`crate::path::ICON_BASE_PATH`].
    pub icon: &'static str,
    pub accent: Color,
}

pub const CATEGORY_MAP: &[CategoryInfo] = &[
    CategoryInfo {
        tag: "CAFE",
        label: "Cafe",
        icon: "cafe.png",
        accent: Color::srgb(0.55, 0.36, 0.22),
    },
    CategoryInfo {
        tag: "FOOD",
        label: "Food",
        icon: "food.png",
        accent: Color::srgb(0.85, 0.33, 0.18),
    },
    CategoryInfo {
        tag: "MART",
        label: "Mart",
        icon: "mart.png",
        accent: Color::srgb(0.20, 0.55, 0.80),
    },
    CategoryInfo {
        tag: "PHARMACY",
        label: "Pharmacy",
        icon: "pharmacy.png",
        accent: Color::srgb(0.16, 0.65, 0.35),
    },
];

/// Icon for the fixed centre marker, which sits outside the category table.
pub const PIN_ICON: &str = "pin.png";

pub fn get_category_info(tag: &str) -> Option<&'static CategoryInfo> {
    CATEGORY_MAP.iter().find(|c| c.tag == tag)
}

pub fn get_category_label(tag: &str) -> String {
    get_category_info(tag)
        .map_or("unknown", |c| c.label)
        .to_string()
}
