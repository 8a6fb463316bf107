// crates/citygeo-core/src/geo.rs

//! # Geo-Estimator
//!
//! Pure functions for great-circle distances and bounding geometry.
//!
//! Everything in here is total over valid latitude/longitude ranges.
//! Out-of-range coordinates are a caller precondition and are not checked.

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by [`haversine_distance`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Kilometers per degree of latitude (and of longitude at the equator).
pub const KM_PER_DEGREE: f64 = 111.32;

/// Radius assumed for point-only places whose population is unknown.
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

/// A WGS84 coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Great-circle distance to `other` in kilometers.
    #[inline]
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        haversine_distance(*self, *other)
    }
}

/// Axis-aligned lat/lon rectangle in degrees.
///
/// Invariant: `min_lat <= max_lat` and `min_lon <= max_lon`. Boxes are
/// recomputed, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Smallest box enclosing all `points`. Returns `None` for an empty input.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let seed = BoundingBox {
            min_lat: first.latitude,
            max_lat: first.latitude,
            min_lon: first.longitude,
            max_lon: first.longitude,
        };

        Some(iter.fold(seed, |b, p| BoundingBox {
            min_lat: b.min_lat.min(p.latitude),
            max_lat: b.max_lat.max(p.latitude),
            min_lon: b.min_lon.min(p.longitude),
            max_lon: b.max_lon.max(p.longitude),
        }))
    }

    /// Midpoint of the box in degrees.
    #[inline]
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    /// Corners in the order SW, SE, NW, NE.
    pub fn corners(&self) -> [GeoPoint; 4] {
        [
            GeoPoint::new(self.min_lat, self.min_lon),
            GeoPoint::new(self.min_lat, self.max_lon),
            GeoPoint::new(self.max_lat, self.min_lon),
            GeoPoint::new(self.max_lat, self.max_lon),
        ]
    }

    pub fn contains(&self, p: &GeoPoint) -> bool {
        p.latitude >= self.min_lat
            && p.latitude <= self.max_lat
            && p.longitude >= self.min_lon
            && p.longitude <= self.max_lon
    }

    /// Height in degrees of latitude.
    #[inline]
    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Width in degrees of longitude.
    #[inline]
    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }
}

/// Great-circle distance between two points in kilometers.
///
/// Haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
///
/// # Examples
/// ```rust
/// use citygeo_core::geo::{haversine_distance, GeoPoint};
///
/// let d = haversine_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 90.0));
/// assert!((d - 10007.5).abs() < 1.0);
/// ```
pub fn haversine_distance(p1: GeoPoint, p2: GeoPoint) -> f64 {
    let lat1 = p1.latitude.to_radians();
    let lat2 = p2.latitude.to_radians();
    let dlat = lat2 - lat1;
    let dlon = (p2.longitude - p1.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Covering radius of a box: the farthest corner from its center, in km.
///
/// Half the diagonal in degrees would misstate distances away from the
/// equator, so every corner is measured on the sphere.
pub fn estimate_radius(bbox: &BoundingBox) -> f64 {
    let center = bbox.center();
    bbox.corners()
        .iter()
        .map(|corner| haversine_distance(center, *corner))
        .fold(0.0, f64::max)
}

/// Nominal settlement radius for a population band.
///
/// | population        | radius |
/// |-------------------|--------|
/// | < 10 000          | 2 km   |
/// | < 100 000         | 5 km   |
/// | < 1 000 000       | 10 km  |
/// | otherwise         | 20 km  |
///
/// Only meaningful for point-only places without polygon geometry.
pub fn population_to_radius(population: u64) -> f64 {
    match population {
        0..=9_999 => 2.0,
        10_000..=99_999 => 5.0,
        100_000..=999_999 => 10.0,
        _ => 20.0,
    }
}

/// Box of half-extent `radius_km` around `center`, in degrees.
///
/// Latitude uses a constant [`KM_PER_DEGREE`]; longitude scales it by
/// `cos(latitude)` for meridian convergence. A zero radius gives a
/// degenerate box, so callers treat `radius_km <= 0` as unknown upstream.
pub fn approximate_bbox(center: GeoPoint, radius_km: f64) -> BoundingBox {
    let lat_km = KM_PER_DEGREE;
    let lon_km = KM_PER_DEGREE * center.latitude.to_radians().cos();

    let lat_delta = radius_km / lat_km;
    let lon_delta = radius_km / lon_km;

    BoundingBox {
        min_lat: center.latitude - lat_delta,
        max_lat: center.latitude + lat_delta,
        min_lon: center.longitude - lon_delta,
        max_lon: center.longitude + lon_delta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64, tol: f64) {
        assert!((a - b).abs() <= tol, "expected {a} ≈ {b} (±{tol})");
    }

    #[test]
    fn distance_to_self_is_zero() {
        for p in [
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(30.0, 31.0),
            GeoPoint::new(-89.9, 179.9),
            GeoPoint::new(90.0, -180.0),
        ] {
            assert_eq!(haversine_distance(p, p), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let cairo = GeoPoint::new(30.0444, 31.2357);
        let riyadh = GeoPoint::new(24.7136, 46.6753);
        assert_eq!(
            haversine_distance(cairo, riyadh),
            haversine_distance(riyadh, cairo)
        );
    }

    #[test]
    fn quarter_great_circle() {
        let d = haversine_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 90.0));
        assert_close(d, 10007.5, 0.1);
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = haversine_distance(GeoPoint::new(0.0, 0.0), GeoPoint::new(0.0, 180.0));
        assert_close(d, std::f64::consts::PI * EARTH_RADIUS_KM, 1e-6);
    }

    #[test]
    fn radius_is_farthest_corner() {
        let bbox = BoundingBox {
            min_lat: 29.9,
            max_lat: 30.2,
            min_lon: 31.0,
            max_lon: 31.5,
        };
        let r = estimate_radius(&bbox);
        let center = bbox.center();
        let max_corner = bbox
            .corners()
            .iter()
            .map(|c| haversine_distance(center, *c))
            .fold(0.0, f64::max);

        assert_eq!(r, max_corner);
        for c in bbox.corners() {
            assert!(haversine_distance(center, c) <= r);
        }
        let diagonal = haversine_distance(bbox.corners()[0], bbox.corners()[3]);
        assert!(r >= diagonal / 2.0 - 1e-9);
    }

    #[test]
    fn degenerate_box_has_zero_radius() {
        let bbox = approximate_bbox(GeoPoint::new(12.0, 45.0), 0.0);
        assert_eq!(bbox.lat_span(), 0.0);
        assert_eq!(bbox.lon_span(), 0.0);
        assert_eq!(estimate_radius(&bbox), 0.0);
    }

    #[test]
    fn population_bands() {
        assert_eq!(population_to_radius(0), 2.0);
        assert_eq!(population_to_radius(9_999), 2.0);
        assert_eq!(population_to_radius(10_000), 5.0);
        assert_eq!(population_to_radius(99_999), 5.0);
        assert_eq!(population_to_radius(100_000), 10.0);
        assert_eq!(population_to_radius(999_999), 10.0);
        assert_eq!(population_to_radius(1_000_000), 20.0);
        assert_eq!(population_to_radius(u64::MAX), 20.0);
    }

    #[test]
    fn longitude_widens_away_from_equator() {
        let equator = approximate_bbox(GeoPoint::new(0.0, 10.0), 10.0);
        let north = approximate_bbox(GeoPoint::new(60.0, 10.0), 10.0);

        assert_close(equator.lat_span(), north.lat_span(), 1e-12);
        // cos(60°) = 0.5
        assert_close(north.lon_span(), 2.0 * equator.lon_span(), 1e-9);
    }

    #[test]
    fn from_points_encloses_all() {
        let pts = [
            GeoPoint::new(1.0, 5.0),
            GeoPoint::new(-2.0, 7.0),
            GeoPoint::new(0.5, 4.0),
        ];
        let bbox = BoundingBox::from_points(pts).unwrap();
        assert_eq!(bbox.min_lat, -2.0);
        assert_eq!(bbox.max_lat, 1.0);
        assert_eq!(bbox.min_lon, 4.0);
        assert_eq!(bbox.max_lon, 7.0);
        assert!(pts.iter().all(|p| bbox.contains(p)));

        assert!(BoundingBox::from_points(std::iter::empty()).is_none());
    }
}
