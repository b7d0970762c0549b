mod form;
mod sections;

pub use form::{FieldError, ShelterSubmission, ValidatedShelter};
pub use sections::{active_section, FrameThrottle, NavState, Section, SectionBounds};
