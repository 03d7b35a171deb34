//! Asset types loaded by the map.

/// Marker icon paths and loaded icon handles.
pub mod icons;

/// JSON payload of the points endpoint.
pub mod point_list;
