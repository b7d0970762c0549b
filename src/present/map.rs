use serde::Serialize;

use crate::data::{Dataset, Earthquake, Shelter};
use crate::engine::{
    filter_earthquakes_by_city_and_magnitude, filter_earthquakes_by_magnitude, resolve_map_center,
    shelters_for_city, Selection, MAX_EARTHQUAKES,
};
use crate::io::ser_point;

/// Metro Manila, shown before any place is chosen on the shelter map.
pub const SHELTER_MAP_DEFAULT_CENTER: (f64, f64) = (14.566439, 120.9902773);
pub const SHELTER_MAP_DEFAULT_ZOOM: u8 = 13;
pub const SHELTER_MAP_FOCUSED_ZOOM: u8 = 15;

/// Geographic center of the Philippines, shown before any place is chosen on the earthquake map.
pub const EARTHQUAKE_MAP_DEFAULT_CENTER: (f64, f64) = (12.8797, 121.7740);
pub const EARTHQUAKE_MAP_DEFAULT_ZOOM: u8 = 6;
pub const EARTHQUAKE_MAP_FOCUSED_ZOOM: u8 = 13;

/// Circle radius in meters per unit of magnitude.
pub const METERS_PER_MAGNITUDE: f64 = 5000.0;

#[inline]
fn point((lat, lon): (f64, f64)) -> geo::Point<f64> { geo::Point::new(lon, lat) }

/// Index of a point within its layer; returned by the map widget on click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PointId(pub usize);

/// One marker (no radius) or circle (radius in meters) on the map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub id: PointId,
    #[serde(serialize_with = "ser_point")]
    pub position: geo::Point<f64>,
    pub radius_m: Option<f64>,
}

/// Where the map widget is centered and how far it is zoomed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapView {
    #[serde(serialize_with = "ser_point")]
    pub center: geo::Point<f64>,
    pub zoom: u8,
}

impl MapView {
    fn focused_or(center: Option<geo::Point<f64>>, default: (f64, f64), default_zoom: u8, focused_zoom: u8) -> Self {
        match center {
            Some(center) => Self { center, zoom: focused_zoom },
            None => Self { center: point(default), zoom: default_zoom },
        }
    }
}

/// Shelter markers for the shelter finder.
/// Without a city every shelter is shown; with one, only the shelters serving it.
#[derive(Debug, Clone)]
pub struct ShelterLayer<'a> {
    shelters: Vec<&'a Shelter>,
    view: MapView,
}

impl<'a> ShelterLayer<'a> {
    pub fn new(dataset: &'a Dataset, selection: &Selection) -> Self {
        let shelters = match selection.city() {
            "" => dataset.shelters().iter().collect(),
            city => shelters_for_city(dataset.shelters(), city).collect(),
        };
        let center = resolve_map_center(dataset.locations(), selection.province(), selection.city());
        Self {
            shelters,
            view: MapView::focused_or(center, SHELTER_MAP_DEFAULT_CENTER, SHELTER_MAP_DEFAULT_ZOOM, SHELTER_MAP_FOCUSED_ZOOM),
        }
    }

    #[inline] pub fn view(&self) -> MapView { self.view }
    #[inline] pub fn len(&self) -> usize { self.shelters.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.shelters.is_empty() }
    #[inline] pub fn shelters(&self) -> &[&'a Shelter] { &self.shelters }

    pub fn points(&self) -> Vec<MapPoint> {
        self.shelters.iter().enumerate()
            .map(|(i, shelter)| MapPoint { id: PointId(i), position: shelter.point(), radius_m: None })
            .collect()
    }

    /// The shelter behind a clicked marker.
    pub fn select(&self, id: PointId) -> Option<&'a Shelter> { self.shelters.get(id.0).copied() }
}

/// Earthquake circles for the earthquake monitor.
/// Without a city every event above the threshold is shown; with one, the
/// same capped, newest-first subset the trend chart uses.
#[derive(Debug, Clone)]
pub struct EarthquakeLayer<'a> {
    earthquakes: Vec<&'a Earthquake>,
    view: MapView,
}

impl<'a> EarthquakeLayer<'a> {
    pub fn new(dataset: &'a Dataset, selection: &Selection) -> Self {
        let earthquakes = match selection.city() {
            "" => filter_earthquakes_by_magnitude(dataset.earthquakes(), selection.magnitude()),
            city => filter_earthquakes_by_city_and_magnitude(
                dataset.earthquakes(), city, selection.magnitude(), MAX_EARTHQUAKES,
            ),
        };
        let center = resolve_map_center(dataset.locations(), selection.province(), selection.city());
        Self {
            earthquakes,
            view: MapView::focused_or(center, EARTHQUAKE_MAP_DEFAULT_CENTER, EARTHQUAKE_MAP_DEFAULT_ZOOM, EARTHQUAKE_MAP_FOCUSED_ZOOM),
        }
    }

    #[inline] pub fn view(&self) -> MapView { self.view }
    #[inline] pub fn len(&self) -> usize { self.earthquakes.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.earthquakes.is_empty() }
    #[inline] pub fn earthquakes(&self) -> &[&'a Earthquake] { &self.earthquakes }

    pub fn points(&self) -> Vec<MapPoint> {
        self.earthquakes.iter().enumerate()
            .map(|(i, eq)| MapPoint {
                id: PointId(i),
                position: eq.point(),
                radius_m: Some(eq.magnitude * METERS_PER_MAGNITUDE),
            })
            .collect()
    }

    /// The earthquake behind a clicked circle.
    pub fn select(&self, id: PointId) -> Option<&'a Earthquake> { self.earthquakes.get(id.0).copied() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Location;

    fn dataset() -> Dataset {
        let quake = |datetime, magnitude, location: &str| Earthquake {
            datetime,
            depth: 12.0,
            magnitude,
            location: location.into(),
            latitude: 10.0 + magnitude,
            longitude: 122.0,
        };
        let shelter = |name: &str, city: &str| Shelter {
            name: Some(name.into()),
            latitude: 10.3,
            longitude: 123.9,
            capacity: None,
            city: Some(city.into()),
            kind: None,
        };
        Dataset::new(
            vec![Location::new("Cebu", "Cebu City", 10.3157, 123.8854)],
            vec![shelter("A", "Cebu City"), shelter("B", "Mandaue City"), shelter("C", "cebu city")],
            vec![quake(1, 2.0, "Cebu City"), quake(2, 4.0, "Bohol"), quake(3, 5.0, "Cebu City")],
        )
    }

    #[test]
    fn shelter_layer_defaults_without_selection() {
        let dataset = dataset();
        let layer = ShelterLayer::new(&dataset, &Selection::new());
        assert_eq!(layer.len(), 3);
        assert_eq!(layer.view().zoom, SHELTER_MAP_DEFAULT_ZOOM);
        assert_eq!(layer.view().center, geo::Point::new(120.9902773, 14.566439));
    }

    #[test]
    fn shelter_layer_focuses_on_city() {
        let dataset = dataset();
        let mut selection = Selection::new();
        selection.set_province("Cebu");
        selection.set_city("Cebu City");

        let layer = ShelterLayer::new(&dataset, &selection);
        assert_eq!(layer.len(), 2);
        assert_eq!(layer.view(), MapView { center: geo::Point::new(123.8854, 10.3157), zoom: SHELTER_MAP_FOCUSED_ZOOM });
        assert!(layer.points().iter().all(|p| p.radius_m.is_none()));
        assert_eq!(layer.select(PointId(1)).and_then(|s| s.name.as_deref()), Some("C"));
        assert_eq!(layer.select(PointId(2)), None);
    }

    #[test]
    fn earthquake_layer_without_city_filters_by_threshold() {
        let dataset = dataset();
        let mut selection = Selection::new();
        selection.set_magnitude(4.0);

        let layer = EarthquakeLayer::new(&dataset, &selection);
        assert_eq!(layer.earthquakes().iter().map(|eq| eq.datetime).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(layer.view().zoom, EARTHQUAKE_MAP_DEFAULT_ZOOM);
        assert_eq!(layer.points()[1].radius_m, Some(25_000.0));
    }

    #[test]
    fn earthquake_layer_with_city_uses_city_subset() {
        let dataset = dataset();
        let mut selection = Selection::new();
        selection.set_province("Cebu");
        selection.set_city("Cebu City");

        let layer = EarthquakeLayer::new(&dataset, &selection);
        assert_eq!(layer.earthquakes().iter().map(|eq| eq.datetime).collect::<Vec<_>>(), vec![3, 1]);
        assert_eq!(layer.view().zoom, EARTHQUAKE_MAP_FOCUSED_ZOOM);
        assert_eq!(layer.select(PointId(0)).map(|eq| eq.magnitude), Some(5.0));
    }
}
