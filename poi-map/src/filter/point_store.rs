use super::category::CategoryTag;
use serde::{Deserialize, Serialize};

/// Position of a point in the fetched list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PointId(pub usize);

/// A point of interest as served by the points endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub name: String,
    #[serde(rename = "type")]
    pub category: CategoryTag,
    pub lat: f64,
    pub lng: f64,
}

/// Raw list of fetched points, in source order.
#[derive(Debug, Default)]
pub struct PointStore {
    points: Vec<Point>,
}

impl PointStore {
    /// Replace any prior contents. Unknown categories are kept as-is.
    pub fn load(&mut self, points: Vec<Point>) {
        self.points = points;
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, point)| (PointId(index), point))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<CategoryTag> {
        let mut seen = Vec::new();
        for point in &self.points {
            if !seen.contains(&point.category) {
                seen.push(point.category.clone());
            }
        }
        seen
    }
}

#[cfg(test)]
pub(crate) fn point(name: &str, tag: &str, lat: f64, lng: f64) -> Point {
    Point {
        name: name.to_string(),
        category: CategoryTag::from_tag(tag),
        lat,
        lng,
    }
}
