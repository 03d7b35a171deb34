use crate::filter::point_store::Point;
use bevy::prelude::*;
use serde::Deserialize;

/// Body of the points endpoint: a bare JSON array of points.
#[derive(Asset, TypePath, Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct PointList {
    pub points: Vec<Point>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::category::CategoryTag;

    #[test]
    fn decodes_the_endpoint_array() {
        let json = r#"[
            {"name": "A", "type": "CAFE", "lat": 1, "lng": 1},
            {"name": "B", "type": "FOOD", "lat": 2, "lng": 2}
        ]"#;
        let list: PointList = serde_json::from_str(json).unwrap();
        assert_eq!(list.points.len(), 2);
        assert_eq!(list.points[1].category, CategoryTag::Food);
    }

    #[test]
    fn empty_array_is_a_valid_list() {
        let list: PointList = serde_json::from_str("[]").unwrap();
        assert!(list.points.is_empty());
    }

    #[test]
    fn missing_fields_are_rejected() {
        assert!(serde_json::from_str::<PointList>(r#"[{"name": "A"}]"#).is_err());
    }
}
