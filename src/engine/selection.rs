use serde::{Deserialize, Serialize};

/// Identifies the place selection a request was issued for.
/// A response is only applied if its tag still matches the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestTag {
    generation: u64,
}

/// The user's current filter choices.
///
/// Every province selection and city change bumps `generation`, so responses to requests
/// issued for an earlier place can be recognised and dropped. The magnitude
/// threshold does not affect place lookups and leaves the generation alone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Selection {
    province: String,
    city: String,
    magnitude: f64,
    generation: u64,
}

impl Selection {
    pub fn new() -> Self { Self::default() }

    #[inline] pub fn province(&self) -> &str { &self.province }
    #[inline] pub fn city(&self) -> &str { &self.city }
    #[inline] pub fn magnitude(&self) -> f64 { self.magnitude }

    /// True once both a province and a city are chosen.
    #[inline] pub fn is_place_selected(&self) -> bool { !self.province.is_empty() && !self.city.is_empty() }

    /// Tag for requests issued under the current place selection.
    #[inline] pub fn tag(&self) -> RequestTag { RequestTag { generation: self.generation } }

    /// Choose a province. Always clears the city, even if the province is unchanged.
    pub fn set_province(&mut self, province: impl Into<String>) {
        self.province = province.into();
        self.city.clear();
        self.generation += 1;
    }

    /// Choose a city. Re-selecting the current city keeps outstanding requests valid.
    pub fn set_city(&mut self, city: impl Into<String>) {
        let city = city.into();
        if city == self.city { return }
        self.city = city;
        self.generation += 1;
    }

    pub fn set_magnitude(&mut self, magnitude: f64) {
        self.magnitude = magnitude;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn province_change_resets_city() {
        let mut selection = Selection::new();
        selection.set_province("Metro Manila");
        selection.set_city("Manila City");
        assert!(selection.is_place_selected());

        selection.set_province("Cebu");
        assert_eq!(selection.province(), "Cebu");
        assert_eq!(selection.city(), "");
        assert!(!selection.is_place_selected());
    }

    #[test]
    fn place_changes_invalidate_tags() {
        let mut selection = Selection::new();
        selection.set_province("Cebu");
        selection.set_city("Cebu City");
        let tag = selection.tag();

        selection.set_magnitude(4.0);
        assert_eq!(selection.tag(), tag);

        selection.set_city("Lapu-Lapu City");
        assert_ne!(selection.tag(), tag);
    }

    #[test]
    fn reselecting_same_city_keeps_tag() {
        let mut selection = Selection::new();
        selection.set_province("Cebu");
        selection.set_city("Cebu City");
        let tag = selection.tag();

        selection.set_city("Cebu City");
        assert_eq!(selection.tag(), tag);

        // Re-selecting the province still starts over.
        selection.set_province("Cebu");
        assert_ne!(selection.tag(), tag);
        assert_eq!(selection.city(), "");
    }
}
