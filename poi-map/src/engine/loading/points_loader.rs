use crate::config::MapConfig;
use crate::engine::assets::point_list::PointList;
use crate::engine::core::app_state::AppState;
use crate::filter::point_store::Point;
use bevy::asset::LoadState;
use bevy::prelude::*;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("failed to load points from {path}: {reason}")]
    Load { path: String, reason: String },
}

/// Points were fetched and decoded.
#[derive(Event, Debug, Clone)]
pub struct PointsFetched {
    pub points: Vec<Point>,
}

/// The fetch failed; the map continues without categorized markers.
#[derive(Event, Debug, Clone)]
pub struct PointsFetchFailed {
    pub error: FetchError,
}

#[derive(Resource, Default)]
pub struct PointsLoader {
    handle: Option<Handle<PointList>>,
    path: String,
}

/// Where a fetch stands after one poll.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchProgress {
    Pending,
    Loaded(Vec<Point>),
    Failed(FetchError),
}

/// Decide the fetch outcome from the decoded list and any load failure.
pub fn fetch_progress(
    path: &str,
    list: Option<&PointList>,
    failure: Option<String>,
) -> FetchProgress {
    match (list, failure) {
        (Some(list), _) => FetchProgress::Loaded(list.points.clone()),
        (None, Some(reason)) => FetchProgress::Failed(FetchError::Load {
            path: path.to_string(),
            reason,
        }),
        (None, None) => FetchProgress::Pending,
    }
}

// Issue the single request for the points endpoint.
pub fn start_fetch(
    mut loader: ResMut<PointsLoader>,
    asset_server: Res<AssetServer>,
    config: Res<MapConfig>,
) {
    info!("Fetching points from {}", config.points_endpoint);
    loader.path = config.points_endpoint.clone();
    loader.handle = Some(asset_server.load(config.points_endpoint.clone()));
}

// Watch the request; runs only while loading, so it reports once. No retry.
pub fn poll_fetch(
    loader: Res<PointsLoader>,
    asset_server: Res<AssetServer>,
    lists: Res<Assets<PointList>>,
    mut fetched: EventWriter<PointsFetched>,
    mut failed: EventWriter<PointsFetchFailed>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(ref handle) = loader.handle else {
        return;
    };

    let failure = match asset_server.get_load_state(handle) {
        Some(LoadState::Failed(err)) => Some(err.to_string()),
        _ => None,
    };

    match fetch_progress(&loader.path, lists.get(handle), failure) {
        FetchProgress::Pending => {}
        FetchProgress::Loaded(points) => {
            info!("✓ Fetched {} points", points.len());
            fetched.write(PointsFetched { points });
            next_state.set(AppState::Running);
        }
        FetchProgress::Failed(error) => {
            error!("Point fetch failed, continuing without markers: {}", error);
            failed.write(PointsFetchFailed { error });
            next_state.set(AppState::Running);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::point_store::point;

    #[test]
    fn pending_until_list_or_failure() {
        assert_eq!(fetch_progress("api/points.json", None, None), FetchProgress::Pending);
    }

    #[test]
    fn decoded_list_wins() {
        let list = PointList {
            points: vec![point("A", "CAFE", 1.0, 1.0)],
        };
        assert_eq!(
            fetch_progress("api/points.json", Some(&list), None),
            FetchProgress::Loaded(list.points.clone())
        );
    }

    #[test]
    fn failure_carries_path_and_reason() {
        let progress = fetch_progress("api/points.json", None, Some("404".to_string()));
        let FetchProgress::Failed(error) = progress else {
            panic!("expected failure, got {progress:?}");
        };
        assert_eq!(
            error.to_string(),
            "failed to load points from api/points.json: 404"
        );
    }
}
