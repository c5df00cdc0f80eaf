//! Movie record and its schema rules
//!
//! Validation is a plain function over [`MovieInput`] and does not depend on
//! the storage engine. The persistence gateway calls it on every insert and
//! update before anything is written.

use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Earliest accepted release year
pub const EARLIEST_RELEASE_YEAR: i64 = 1888;

/// Lowest accepted rating (inclusive)
pub const MIN_RATING: f64 = 1.0;

/// Highest accepted rating (inclusive)
pub const MAX_RATING: f64 = 10.0;

const ENTITY: &str = "Movie";

/// A persisted movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Identifier assigned by the store at creation
    pub id: String,
    pub title: String,
    pub director: String,
    pub release_year: i64,
    pub genre: String,
    pub rating: f64,
}

impl Movie {
    /// Attach an identifier to a validated document
    pub fn new(id: impl Into<String>, document: MovieDocument) -> Self {
        Self {
            id: id.into(),
            title: document.title,
            director: document.director,
            release_year: document.release_year,
            genre: document.genre,
            rating: document.rating,
        }
    }

    /// The stored content of this record, without its identifier
    #[must_use]
    pub fn document(&self) -> MovieDocument {
        MovieDocument {
            title: self.title.clone(),
            director: self.director.clone(),
            release_year: self.release_year,
            genre: self.genre.clone(),
            rating: self.rating,
        }
    }
}

/// Validated movie content as written to the store
///
/// Only [`validate`] and [`validate_patch`] produce values of this type from
/// client input, so every document reaching the store satisfies the schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDocument {
    pub title: String,
    pub director: String,
    pub release_year: i64,
    pub genre: String,
    pub rating: f64,
}

/// Client-supplied movie fields
///
/// Every field is optional so that missing fields surface as validation
/// failures instead of deserialization errors. The same shape is used for
/// partial updates, where absent fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub release_year: Option<i64>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
}

impl MovieInput {
    /// Whether the input carries no fields at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.director.is_none()
            && self.release_year.is_none()
            && self.genre.is_none()
            && self.rating.is_none()
    }

    /// Fill every absent field from `base`
    #[must_use]
    pub fn merged_over(self, base: &MovieDocument) -> Self {
        Self {
            title: self.title.or_else(|| Some(base.title.clone())),
            director: self.director.or_else(|| Some(base.director.clone())),
            release_year: self.release_year.or(Some(base.release_year)),
            genre: self.genre.or_else(|| Some(base.genre.clone())),
            rating: self.rating.or(Some(base.rating)),
        }
    }
}

impl From<MovieDocument> for MovieInput {
    fn from(document: MovieDocument) -> Self {
        Self {
            title: Some(document.title),
            director: Some(document.director),
            release_year: Some(document.release_year),
            genre: Some(document.genre),
            rating: Some(document.rating),
        }
    }
}

/// Validate a complete candidate record
///
/// Trims the text fields and checks every constraint, reporting all failing
/// fields at once.
///
/// # Example
///
/// ```rust
/// use movie_service::models::{validate, MovieInput};
///
/// let input = MovieInput {
///     title: Some("  Inception ".to_string()),
///     director: Some("Nolan".to_string()),
///     release_year: Some(2010),
///     genre: Some("Sci-Fi".to_string()),
///     rating: Some(9.0),
/// };
/// let document = validate(input).unwrap();
/// assert_eq!(document.title, "Inception");
/// ```
pub fn validate(candidate: MovieInput) -> Result<MovieDocument, ValidationError> {
    let mut errors = ValidationError::new(ENTITY);

    let title = required_text(&mut errors, "title", candidate.title);
    let director = required_text(&mut errors, "director", candidate.director);
    let release_year = release_year(&mut errors, candidate.release_year);
    let genre = required_text(&mut errors, "genre", candidate.genre);
    let rating = rating(&mut errors, candidate.rating);

    match (title, director, release_year, genre, rating) {
        (Some(title), Some(director), Some(release_year), Some(genre), Some(rating)) => {
            errors.into_result(MovieDocument {
                title,
                director,
                release_year,
                genre,
                rating,
            })
        }
        _ => Err(errors),
    }
}

/// Apply a partial update over a stored document and validate the result
pub fn validate_patch(
    base: &MovieDocument,
    patch: MovieInput,
) -> Result<MovieDocument, ValidationError> {
    validate(patch.merged_over(base))
}

fn required_text(
    errors: &mut ValidationError,
    field: &'static str,
    value: Option<String>,
) -> Option<String> {
    match value.map(|v| v.trim().to_string()) {
        None => {
            errors.add_field_error(field, "REQUIRED", format!("Path `{field}` is required."));
            None
        }
        Some(v) if v.is_empty() => {
            errors.add_field_error(field, "EMPTY", format!("Path `{field}` is required."));
            None
        }
        Some(v) => Some(v),
    }
}

fn release_year(errors: &mut ValidationError, value: Option<i64>) -> Option<i64> {
    match value {
        None => {
            errors.add_field_error("releaseYear", "REQUIRED", "Path `releaseYear` is required.");
            None
        }
        Some(year) if year < EARLIEST_RELEASE_YEAR => {
            errors.add_field_error(
                "releaseYear",
                "MIN",
                format!(
                    "Path `releaseYear` ({year}) is less than minimum allowed value ({EARLIEST_RELEASE_YEAR})."
                ),
            );
            None
        }
        Some(year) => Some(year),
    }
}

fn rating(errors: &mut ValidationError, value: Option<f64>) -> Option<f64> {
    match value {
        None => {
            errors.add_field_error("rating", "REQUIRED", "Path `rating` is required.");
            None
        }
        Some(r) if !r.is_finite() => {
            errors.add_field_error(
                "rating",
                "INVALID",
                format!("Path `rating` ({r}) is not a valid number."),
            );
            None
        }
        Some(r) if r < MIN_RATING => {
            errors.add_field_error(
                "rating",
                "MIN",
                format!("Path `rating` ({r}) is less than minimum allowed value ({MIN_RATING})."),
            );
            None
        }
        Some(r) if r > MAX_RATING => {
            errors.add_field_error(
                "rating",
                "MAX",
                format!("Path `rating` ({r}) is more than maximum allowed value ({MAX_RATING})."),
            );
            None
        }
        Some(r) => Some(r),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inception() -> MovieInput {
        MovieInput {
            title: Some("Inception".to_string()),
            director: Some("Nolan".to_string()),
            release_year: Some(2010),
            genre: Some("Sci-Fi".to_string()),
            rating: Some(9.0),
        }
    }

    #[test]
    fn test_valid_input_is_trimmed() {
        let input = MovieInput {
            title: Some("  Inception  ".to_string()),
            director: Some("\tNolan\n".to_string()),
            genre: Some(" Sci-Fi".to_string()),
            ..inception()
        };

        let document = validate(input).unwrap();
        assert_eq!(document.title, "Inception");
        assert_eq!(document.director, "Nolan");
        assert_eq!(document.genre, "Sci-Fi");
        assert_eq!(document.release_year, 2010);
        assert_eq!(document.rating, 9.0);
    }

    #[test]
    fn test_empty_input_reports_every_field() {
        let err = validate(MovieInput::default()).unwrap_err();
        assert_eq!(err.errors.len(), 5);
        for field in ["title", "director", "releaseYear", "genre", "rating"] {
            assert!(err.has_field(field), "missing error for {field}");
        }
    }

    #[test]
    fn test_whitespace_only_text_is_rejected() {
        let input = MovieInput {
            director: Some("   ".to_string()),
            ..inception()
        };
        let err = validate(input).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "director");
        assert_eq!(err.errors[0].code, "EMPTY");
    }

    #[test]
    fn test_release_year_lower_bound() {
        let ok = MovieInput {
            release_year: Some(EARLIEST_RELEASE_YEAR),
            ..inception()
        };
        assert!(validate(ok).is_ok());

        let too_early = MovieInput {
            release_year: Some(1887),
            ..inception()
        };
        let err = validate(too_early).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Movie validation failed: releaseYear: Path `releaseYear` (1887) is less than \
             minimum allowed value (1888)."
        );
    }

    #[test]
    fn test_rating_bounds_are_inclusive() {
        for r in [1.0, 5.5, 10.0] {
            let input = MovieInput {
                rating: Some(r),
                ..inception()
            };
            assert!(validate(input).is_ok(), "rating {r} should be accepted");
        }

        for r in [0.0, 0.99, 10.01, 15.0, -3.0] {
            let input = MovieInput {
                rating: Some(r),
                ..inception()
            };
            assert!(validate(input).is_err(), "rating {r} should be rejected");
        }
    }

    #[test]
    fn test_rating_above_max_message() {
        let input = MovieInput {
            rating: Some(15.0),
            ..inception()
        };
        let err = validate(input).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Movie validation failed: rating: Path `rating` (15) is more than maximum allowed value (10)."
        );
    }

    #[test]
    fn test_non_finite_rating_is_rejected() {
        let input = MovieInput {
            rating: Some(f64::NAN),
            ..inception()
        };
        let err = validate(input).unwrap_err();
        assert_eq!(err.errors[0].code, "INVALID");
    }

    #[test]
    fn test_patch_keeps_absent_fields() {
        let base = validate(inception()).unwrap();
        let patch = MovieInput {
            rating: Some(8.5),
            ..MovieInput::default()
        };

        let updated = validate_patch(&base, patch).unwrap();
        assert_eq!(updated.rating, 8.5);
        assert_eq!(updated.title, base.title);
        assert_eq!(updated.director, base.director);
        assert_eq!(updated.release_year, base.release_year);
        assert_eq!(updated.genre, base.genre);
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let base = validate(inception()).unwrap();
        assert!(MovieInput::default().is_empty());
        assert_eq!(validate_patch(&base, MovieInput::default()).unwrap(), base);
    }

    #[test]
    fn test_patch_cannot_break_schema() {
        let base = validate(inception()).unwrap();
        let patch = MovieInput {
            title: Some("  ".to_string()),
            release_year: Some(1700),
            ..MovieInput::default()
        };
        let err = validate_patch(&base, patch).unwrap_err();
        assert!(err.has_field("title"));
        assert!(err.has_field("releaseYear"));
        assert!(!err.has_field("rating"));
    }

    #[test]
    fn test_movie_serializes_camel_case() {
        let movie = Movie::new("movie_1", validate(inception()).unwrap());
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["id"], "movie_1");
        assert_eq!(json["releaseYear"], 2010);
        assert!(json.get("release_year").is_none());
        assert_eq!(movie.document().title, "Inception");
    }

    #[test]
    fn test_input_deserializes_partial_body() {
        let input: MovieInput = serde_json::from_str(r#"{"releaseYear": 1999}"#).unwrap();
        assert_eq!(input.release_year, Some(1999));
        assert!(input.title.is_none());
        assert!(!input.is_empty());
    }
}
