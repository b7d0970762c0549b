mod map;
mod trend;

pub use map::{
    EarthquakeLayer, MapPoint, MapView, PointId, ShelterLayer, EARTHQUAKE_MAP_DEFAULT_CENTER,
    EARTHQUAKE_MAP_DEFAULT_ZOOM, EARTHQUAKE_MAP_FOCUSED_ZOOM, METERS_PER_MAGNITUDE,
    SHELTER_MAP_DEFAULT_CENTER, SHELTER_MAP_DEFAULT_ZOOM, SHELTER_MAP_FOCUSED_ZOOM,
};
pub use trend::{trend_csv, trend_points, write_trend_csv, TrendPoint};
