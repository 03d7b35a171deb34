use crate::filter::controller::FilterController;
use crate::rpc::web_rpc::WebRpcInterface;
use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    /// Waiting for the points endpoint.
    #[default]
    Loading,
    /// Fetch settled (successfully or not); the map runs for the rest of
    /// the session.
    Running,
}

pub fn announce_running(controller: Res<FilterController>, mut rpc: ResMut<WebRpcInterface>) {
    info!("→ Map running");
    if controller.markers().is_empty() {
        warn!("No point markers on the map; category filters are inactive");
    }
    rpc.send_notification(
        "app_ready",
        serde_json::json!({
            "filtering": controller.is_populated(),
            "markers": controller.markers().len(),
        }),
    );
}
