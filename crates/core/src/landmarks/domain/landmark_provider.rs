use std::path::Path;

use crate::shared::point::Point;

/// Domain interface for an external 68-point landmark localizer.
///
/// `Ok(None)` is the "no face found" signal and is distinct from a
/// malformed point list, which callers reject during validation.
/// Implementations may hold detector state, hence `&mut self`.
pub trait LandmarkProvider: Send {
    fn locate(&mut self, source: &Path) -> Result<Option<Vec<Point>>, Box<dyn std::error::Error>>;
}
