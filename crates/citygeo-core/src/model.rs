// crates/citygeo-core/src/model.rs
use crate::geo::{BoundingBox, GeoPoint};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A city with its derived geometry.
///
/// Field names are the on-disk contract consumed by renderers:
/// `name`, `population`, `center.{latitude,longitude}`,
/// `bounding_box.{min_lat,max_lat,min_lon,max_lon}`, `estimated_radius_km`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    pub name: String,
    /// 0 means unknown.
    pub population: u64,
    pub center: GeoPoint,
    pub bounding_box: BoundingBox,
    pub estimated_radius_km: f64,
}

impl CityRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `None` when the source carried no usable population.
    pub fn population(&self) -> Option<u64> {
        (self.population > 0).then_some(self.population)
    }
}

/// Shape of a place as delivered by the source.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceGeometry {
    /// Single node; extent has to be estimated.
    Point(GeoPoint),
    /// Closed way outline.
    Way(Vec<GeoPoint>),
    /// Multipolygon relation: one vertex list per member with geometry.
    Relation(Vec<Vec<GeoPoint>>),
}

impl PlaceGeometry {
    /// All vertices, flattened across relation members.
    pub fn vertices(&self) -> Box<dyn Iterator<Item = GeoPoint> + '_> {
        match self {
            PlaceGeometry::Point(p) => Box::new(std::iter::once(*p)),
            PlaceGeometry::Way(pts) => Box::new(pts.iter().copied()),
            PlaceGeometry::Relation(rings) => Box::new(rings.iter().flatten().copied()),
        }
    }

    /// Enclosing box of the outline. `None` for a point or an empty outline.
    pub fn outline_bbox(&self) -> Option<BoundingBox> {
        match self {
            PlaceGeometry::Point(_) => None,
            _ => BoundingBox::from_points(self.vertices()),
        }
    }
}

/// All cities collected for one country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryCities {
    /// ISO 3166-1 alpha-2 code as queried, e.g. `"EG"`.
    pub country_code: String,
    pub cities: Vec<CityRecord>,
}

/// The persisted result of a collection run.
///
/// Serialized as a JSON object keyed by country code. Key order follows
/// insertion order, both when writing and when reading back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityDataset {
    pub countries: Vec<CountryCities>,
}

impl CityDataset {
    pub fn new(countries: Vec<CountryCities>) -> Self {
        Self { countries }
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn city_count(&self) -> usize {
        self.countries.iter().map(|c| c.cities.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

impl Serialize for CityDataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.countries.len()))?;
        for entry in &self.countries {
            map.serialize_entry(&entry.country_code, &entry.cities)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CityDataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DatasetVisitor;

        impl<'de> Visitor<'de> for DatasetVisitor {
            type Value = CityDataset;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of country code to city records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut countries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((country_code, cities)) =
                    access.next_entry::<String, Vec<CityRecord>>()?
                {
                    countries.push(CountryCities {
                        country_code,
                        cities,
                    });
                }
                Ok(CityDataset { countries })
            }
        }

        deserializer.deserialize_map(DatasetVisitor)
    }
}
