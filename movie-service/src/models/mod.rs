//! Movie data model and schema validation

mod movie;
mod validation;

pub use movie::{
    validate, validate_patch, Movie, MovieDocument, MovieInput, EARLIEST_RELEASE_YEAR,
    MAX_RATING, MIN_RATING,
};
pub use validation::{FieldError, ValidationError};
