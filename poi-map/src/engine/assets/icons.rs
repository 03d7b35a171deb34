use crate::config::MapConfig;
use crate::filter::category::CategoryTag;
use bevy::prelude::*;
use constants::category::PIN_ICON;
use std::collections::HashMap;

/// Asset path of the icon for `category`; unknown categories have none.
pub fn icon_path(base: &str, category: &CategoryTag) -> Option<String> {
    category.info().map(|info| join_asset_path(base, info.icon))
}

pub fn pin_icon_path(base: &str) -> String {
    join_asset_path(base, PIN_ICON)
}

fn join_asset_path(base: &str, file: &str) -> String {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", base, file)
    }
}

/// Loaded icon handles, one per known category plus the centre pin.
#[derive(Resource, Default, Clone)]
pub struct MarkerIcons {
    pub pin: Handle<Image>,
    categories: HashMap<CategoryTag, Handle<Image>>,
}

impl MarkerIcons {
    pub fn load(asset_server: &AssetServer, config: &MapConfig) -> Self {
        let categories = CategoryTag::KNOWN
            .into_iter()
            .filter_map(|category| {
                let path = icon_path(&config.icon_base_path, &category)?;
                Some((category, asset_server.load(path)))
            })
            .collect();

        Self {
            pin: asset_server.load(pin_icon_path(&config.icon_base_path)),
            categories,
        }
    }

    /// Icon for `category`, or `None` when it has no icon.
    pub fn for_category(&self, category: &CategoryTag) -> Option<Handle<Image>> {
        self.categories.get(category).cloned()
    }
}

pub fn load_marker_icons(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<MapConfig>,
) {
    commands.insert_resource(MarkerIcons::load(&asset_server, &config));
}
