//! The feature accessor interface consumed by the evaluator. The core
//! never constructs feature data; a feature is supplied per evaluation
//! call alongside the zoom level.

use serde_json::{Map, Value as Json};

/// Geometry kind of a tile feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureType {
    #[default]
    Unknown,
    Point,
    LineString,
    Polygon,
}

impl FeatureType {
    pub fn name(&self) -> &'static str {
        match self {
            FeatureType::Unknown => "Unknown",
            FeatureType::Point => "Point",
            FeatureType::LineString => "LineString",
            FeatureType::Polygon => "Polygon",
        }
    }
}

/// A feature identifier: either a string or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureId {
    String(String),
    Number(f64),
}

/// Read-only view of one tile feature. Property values use the
/// external JSON value model and are converted on access.
pub trait Feature {
    fn get_value(&self, key: &str) -> Option<Json>;
    fn properties(&self) -> Map<String, Json>;
    fn id(&self) -> Option<FeatureId>;
    fn geometry_type(&self) -> FeatureType;
}

/// Property-map backed feature, for tests and for evaluating
/// expressions against plain (non-tiled) feature data.
#[derive(Debug, Clone, Default)]
pub struct SimpleFeature {
    pub properties: Map<String, Json>,
    pub id: Option<FeatureId>,
    pub geometry: FeatureType,
}

impl SimpleFeature {
    pub fn new(properties: Map<String, Json>) -> Self {
        SimpleFeature {
            properties,
            id: None,
            geometry: FeatureType::Unknown,
        }
    }

    pub fn with_id(mut self, id: FeatureId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_geometry(mut self, geometry: FeatureType) -> Self {
        self.geometry = geometry;
        self
    }
}

impl Feature for SimpleFeature {
    fn get_value(&self, key: &str) -> Option<Json> {
        self.properties.get(key).cloned()
    }

    fn properties(&self) -> Map<String, Json> {
        self.properties.clone()
    }

    fn id(&self) -> Option<FeatureId> {
        self.id.clone()
    }

    fn geometry_type(&self) -> FeatureType {
        self.geometry
    }
}
