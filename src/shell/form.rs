use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::data::Dataset;
use crate::engine::cities_in_province;

/// The "list a place as shelter" form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShelterSubmission {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub province: String,
    pub city: String,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedShelter {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub province: String,
    pub city: String,
}

/// A problem with one form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn parse_coordinate(field: &'static str, text: &str, limit: f64, errors: &mut Vec<FieldError>) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        errors.push(FieldError::new(field, "is required"));
        return None;
    }
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() && value.abs() <= limit => Some(value),
        Ok(_) => { errors.push(FieldError::new(field, format!("must be between -{limit} and {limit}"))); None }
        Err(_) => { errors.push(FieldError::new(field, format!("{text:?} is not a number"))); None }
    }
}

impl ShelterSubmission {
    /// Check every field against the reference data; all problems are reported at once.
    pub fn validate(&self, dataset: &Dataset) -> Result<ValidatedShelter, Vec<FieldError>> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() { errors.push(FieldError::new("name", "is required")) }

        let latitude = parse_coordinate("latitude", &self.latitude, 90.0, &mut errors);
        let longitude = parse_coordinate("longitude", &self.longitude, 180.0, &mut errors);

        if self.province.is_empty() {
            errors.push(FieldError::new("province", "is required"));
        }
        if self.city.is_empty() {
            errors.push(FieldError::new("city", "is required"));
        } else if !self.province.is_empty()
            && !cities_in_province(dataset.locations(), &self.province).contains(&self.city.as_str())
        {
            errors.push(FieldError::new("city", format!("{:?} is not a city of {:?}", self.city, self.province)));
        }

        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) if errors.is_empty() => Ok(ValidatedShelter {
                name: name.to_string(),
                latitude,
                longitude,
                province: self.province.clone(),
                city: self.city.clone(),
            }),
            _ => Err(errors),
        }
    }

    /// Validate and record the submission. Nothing is persisted or sent anywhere;
    /// the accepted shelter is only logged.
    pub fn submit(&self, dataset: &Dataset) -> Result<ValidatedShelter, Vec<FieldError>> {
        let shelter = self.validate(dataset)?;
        info!(
            name = %shelter.name,
            latitude = shelter.latitude,
            longitude = shelter.longitude,
            province = %shelter.province,
            city = %shelter.city,
            "[shell::form] shelter submitted"
        );
        Ok(shelter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Location;

    fn dataset() -> Dataset {
        Dataset::new(
            vec![
                Location::new("Cebu", "Cebu City", 10.3157, 123.8854),
                Location::new("Cebu", "Mandaue City", 10.3236, 123.9223),
                Location::new("Metro Manila", "Manila City", 14.5995, 120.9842),
            ],
            Vec::new(),
            Vec::new(),
        )
    }

    fn form() -> ShelterSubmission {
        ShelterSubmission {
            name: " Mandaue Sports Complex ".into(),
            latitude: "10.33".into(),
            longitude: "123.93".into(),
            province: "Cebu".into(),
            city: "Mandaue City".into(),
        }
    }

    #[test]
    fn valid_submission() {
        let shelter = form().submit(&dataset()).unwrap();
        assert_eq!(shelter.name, "Mandaue Sports Complex");
        assert_eq!((shelter.latitude, shelter.longitude), (10.33, 123.93));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = ShelterSubmission::default().validate(&dataset()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "latitude", "longitude", "province", "city"]);
    }

    #[test]
    fn rejects_bad_coordinates() {
        let mut bad = form();
        bad.latitude = "91".into();
        bad.longitude = "east".into();
        let errors = bad.validate(&dataset()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].to_string(), "latitude: must be between -90 and 90");
        assert_eq!(errors[1].field, "longitude");
    }

    #[test]
    fn rejects_city_outside_province() {
        let mut bad = form();
        bad.city = "Manila City".into();
        let errors = bad.validate(&dataset()).unwrap_err();
        assert_eq!(errors, vec![FieldError::new("city", "\"Manila City\" is not a city of \"Cebu\"")]);
    }
}
