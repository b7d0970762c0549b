mod filter;
mod lookup;
mod selection;
mod view;

pub use filter::{filter_earthquakes_by_city_and_magnitude, filter_earthquakes_by_magnitude, MAX_EARTHQUAKES};
pub use lookup::{
    cities_in_province, count_shelters_for_city, population_per_shelter, provinces,
    resolve_map_center, shelters_for_city,
};
pub use selection::{RequestTag, Selection};
pub use view::{derive_view, DerivedView, EnrichmentRequest, Explorer};

pub(crate) use filter::contains_ignore_case;
