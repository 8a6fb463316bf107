// crates/citygeo-core/src/search.rs
use crate::common::DatasetStats;
use crate::geo::GeoPoint;
use crate::model::{CityDataset, CountryCities};
use crate::text::fold_key;
use crate::traits::{CitiesIter, CityContext, CitySearch};

impl CitySearch for CityDataset {
    fn stats(&self) -> DatasetStats {
        DatasetStats {
            countries: self.countries.len(),
            cities: self.city_count(),
            with_population: self.cities().filter(|(c, _)| c.population > 0).count(),
        }
    }

    fn countries(&self) -> &[CountryCities] {
        &self.countries
    }

    fn cities<'a>(&'a self) -> CitiesIter<'a> {
        Box::new(self.countries.iter().flat_map(|country| {
            country
                .cities
                .iter()
                .map(move |city| (city, country.country_code.as_str()))
        }))
    }

    fn find_country(&self, code: &str) -> Option<&CountryCities> {
        let code = code.trim();
        self.countries
            .iter()
            .find(|c| c.country_code.eq_ignore_ascii_case(code))
    }

    fn find_cities_by_substring(&self, substr: &str) -> Vec<CityContext<'_>> {
        let q = fold_key(substr.trim());
        if q.is_empty() {
            return Vec::new();
        }
        self.cities()
            .filter(|(city, _)| fold_key(&city.name).contains(&q))
            .collect()
    }

    fn cities_within(&self, point: GeoPoint, radius_km: f64) -> Vec<(CityContext<'_>, f64)> {
        let mut out: Vec<_> = self
            .cities()
            .map(|ctx| (ctx, point.distance_km(&ctx.0.center)))
            .filter(|(_, d)| *d <= radius_km)
            .collect();
        out.sort_by(|a, b| a.1.total_cmp(&b.1));
        out
    }

    fn nearest_city(&self, point: GeoPoint) -> Option<(CityContext<'_>, f64)> {
        self.cities()
            .map(|ctx| (ctx, point.distance_km(&ctx.0.center)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::CityCollector;
    use crate::convert::city_from_geometry;
    use crate::model::PlaceGeometry;

    fn dataset() -> CityDataset {
        let city = |name: &str, pop: u64, lat: f64, lon: f64| {
            city_from_geometry(name, pop, &PlaceGeometry::Point(GeoPoint::new(lat, lon))).unwrap()
        };
        let mut col = CityCollector::new();
        col.add_country(
            "DZ",
            vec![
                city("Sétif", 288_461, 36.19, 5.41),
                city("Algiers", 2_364_230, 36.75, 3.06),
            ],
        );
        col.add_country("TN", vec![city("Sfax", 0, 34.74, 10.76)]);
        col.finish()
    }

    #[test]
    fn stats_counts() {
        let s = dataset().stats();
        assert_eq!(
            s,
            DatasetStats {
                countries: 2,
                cities: 3,
                with_population: 2
            }
        );
    }

    #[test]
    fn country_lookup_is_case_insensitive() {
        let ds = dataset();
        assert_eq!(ds.find_country("tn").unwrap().cities.len(), 1);
        assert!(ds.find_country("EG").is_none());
    }

    #[test]
    fn substring_search_folds_accents() {
        let ds = dataset();
        let hits = ds.find_cities_by_substring("SETI");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].0.name, "Sétif");
        assert_eq!(hits[0].1, "DZ");

        assert_eq!(ds.find_cities_by_substring("s").len(), 3);
        assert!(ds.find_cities_by_substring("  ").is_empty());
    }

    #[test]
    fn proximity_is_sorted() {
        let ds = dataset();
        let origin = GeoPoint::new(36.5, 4.0);

        let near = ds.cities_within(origin, 300.0);
        let names: Vec<_> = near.iter().map(|((c, _), _)| c.name.as_str()).collect();
        assert_eq!(names, ["Algiers", "Sétif"]);
        assert!(near[0].1 <= near[1].1);

        let ((nearest, code), _) = ds.nearest_city(GeoPoint::new(34.0, 11.0)).unwrap();
        assert_eq!(nearest.name, "Sfax");
        assert_eq!(code, "TN");

        assert!(CityDataset::default().nearest_city(origin).is_none());
    }
}
