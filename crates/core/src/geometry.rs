//! Polygon geometry for AOIs, labels and feedback.
//!
//! A [`Polygon`] can be built from WKT (`POLYGON((0 0, 0 1, 1 1, 1 0, 0 0))`,
//! optionally prefixed with `SRID=4326;`) or from GeoJSON-style rings. Any
//! other SRID is rejected; coordinates are never reprojected. It is
//! exchanged with PostGIS as WKT and with API clients as a GeoJSON-style
//! object, but JSON input accepts either form.

use std::fmt;
use std::str::FromStr;

use geo_types::{Coord, LineString};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use wkt::{ToWkt, TryFromWkt};

/// Spatial reference of every geometry column (WGS 84).
pub const SRID: i32 = 4326;

/// A closed ring needs at least three distinct positions plus the closing one.
pub const MIN_RING_POSITIONS: usize = 4;

const POLYGON_TAG: &str = "POLYGON";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("Invalid WKT: {0}")]
    InvalidWkt(String),

    #[error("Expected a Polygon geometry, got {0}")]
    NotAPolygon(String),

    #[error("Polygon ring {ring} has {found} positions, at least {MIN_RING_POSITIONS} are required")]
    TooFewPositions { ring: usize, found: usize },

    #[error("Unsupported SRID {0}, only {SRID} is accepted")]
    UnsupportedSrid(i32),

    #[error("Polygon ring {ring} has a position with {ordinates} ordinate(s), at least 2 are required")]
    InvalidPosition { ring: usize, ordinates: usize },
}

/// A polygon with one exterior ring and zero or more interior rings (holes).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon(geo_types::Polygon<f64>);

impl Polygon {
    /// Parse a WKT `POLYGON`. Any other geometry type is rejected.
    pub fn from_wkt(input: &str) -> Result<Self, GeometryError> {
        let body = strip_srid(input.trim())?;
        let tag: String = body
            .chars()
            .take_while(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_ascii_uppercase();

        if tag.is_empty() {
            return Err(GeometryError::InvalidWkt(input.to_string()));
        }
        if tag != POLYGON_TAG {
            return Err(GeometryError::NotAPolygon(tag));
        }

        let normalized = format!("{POLYGON_TAG}{}", &body[tag.len()..]);
        let polygon = <geo_types::Polygon<f64> as TryFromWkt<f64>>::try_from_wkt_str(&normalized)
            .map_err(|e| GeometryError::InvalidWkt(e.to_string()))?;
        Self::checked(polygon)
    }

    /// Build a polygon from GeoJSON-style rings: the first ring is the
    /// exterior, the rest are holes. Open rings are closed automatically.
    pub fn from_rings(rings: Vec<Vec<[f64; 2]>>) -> Result<Self, GeometryError> {
        let mut rings = rings.into_iter().map(|ring| {
            LineString::new(ring.into_iter().map(|[x, y]| Coord { x, y }).collect())
        });
        let exterior = rings.next().unwrap_or_else(|| LineString::new(Vec::new()));
        Self::checked(geo_types::Polygon::new(exterior, rings.collect()))
    }

    fn checked(polygon: geo_types::Polygon<f64>) -> Result<Self, GeometryError> {
        let rings = std::iter::once(polygon.exterior()).chain(polygon.interiors());
        for (ring, line) in rings.enumerate() {
            let found = line.0.len();
            if found < MIN_RING_POSITIONS {
                return Err(GeometryError::TooFewPositions { ring, found });
            }
        }
        Ok(Self(polygon))
    }

    /// Render as WKT, the form PostGIS accepts in `ST_GeomFromText`.
    pub fn to_wkt(&self) -> String {
        self.0.wkt_string()
    }

    /// All rings as coordinate pairs, exterior first.
    pub fn rings(&self) -> Vec<Vec<[f64; 2]>> {
        std::iter::once(self.0.exterior())
            .chain(self.0.interiors())
            .map(|ring| ring.coords().map(|c| [c.x, c.y]).collect())
            .collect()
    }

    /// Number of holes.
    pub fn interior_count(&self) -> usize {
        self.0.interiors().len()
    }

    pub fn as_geo(&self) -> &geo_types::Polygon<f64> {
        &self.0
    }
}

/// Drop an EWKT `SRID=n;` prefix after checking `n` is [`SRID`].
fn strip_srid(input: &str) -> Result<&str, GeometryError> {
    let Some((prefix, rest)) = input.split_once(';') else {
        return Ok(input);
    };
    let prefix = prefix.trim();
    if !prefix.to_ascii_uppercase().starts_with("SRID=") {
        return Ok(input);
    }
    let srid: i32 = prefix["SRID=".len()..]
        .trim()
        .parse()
        .map_err(|_| GeometryError::InvalidWkt(input.to_string()))?;
    if srid != SRID {
        return Err(GeometryError::UnsupportedSrid(srid));
    }
    Ok(rest.trim())
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wkt())
    }
}

impl FromStr for Polygon {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_wkt(s)
    }
}

/// Lets sqlx decode `ST_AsText(geom)` columns via `#[sqlx(try_from = "String")]`.
impl TryFrom<String> for Polygon {
    type Error = GeometryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_wkt(&value)
    }
}

impl From<Polygon> for geo_types::Polygon<f64> {
    fn from(value: Polygon) -> Self {
        value.0
    }
}

// ---------------------------------------------------------------------------
// JSON representation
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct GeoJsonPolygon {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: Vec<Vec<[f64; 2]>>,
}

/// Incoming GeoJSON positions may carry an altitude, which is dropped.
#[derive(Deserialize)]
struct GeoJsonPolygonInput {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Vec<Vec<Vec<f64>>>,
}

impl GeoJsonPolygonInput {
    fn into_polygon(self) -> Result<Polygon, GeometryError> {
        if !self.kind.eq_ignore_ascii_case(POLYGON_TAG) {
            return Err(GeometryError::NotAPolygon(self.kind));
        }
        let rings = self
            .coordinates
            .into_iter()
            .enumerate()
            .map(|(ring, positions)| {
                positions
                    .into_iter()
                    .map(|position| match position[..] {
                        [x, y, ..] => Ok([x, y]),
                        _ => Err(GeometryError::InvalidPosition {
                            ring,
                            ordinates: position.len(),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Polygon::from_rings(rings)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PolygonInput {
    Wkt(String),
    GeoJson(GeoJsonPolygonInput),
}

impl Serialize for Polygon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GeoJsonPolygon {
            kind: POLYGON_TAG,
            coordinates: self.rings(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Polygon {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match PolygonInput::deserialize(deserializer)? {
            PolygonInput::Wkt(text) => Polygon::from_wkt(&text).map_err(D::Error::custom),
            PolygonInput::GeoJson(geojson) => geojson.into_polygon().map_err(D::Error::custom),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
