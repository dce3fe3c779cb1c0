//! Location type.

/// Global location identifier. Index into the location list and the distance matrix.
pub type LocationId = usize;

/// A depot or customer position in the plane.
///
/// Identifiers run 0..N-1 in list order; the depot is conventionally 0.
///
/// # Examples
///
/// ```
/// use cheapest_arc::models::Location;
///
/// let locations = Location::from_coords(&[(0, 0), (3, 4)]);
/// assert_eq!(locations[1].id(), 1);
/// assert_eq!(locations[0].distance_to(&locations[1]), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    id: LocationId,
    x: f64,
    y: f64,
}

impl Location {
    /// Creates a location.
    pub fn new(id: LocationId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Numbers integer coordinate pairs 0..N-1 in order. Entry 0 is the depot.
    pub fn from_coords(coords: &[(i32, i32)]) -> Vec<Self> {
        coords
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Self::new(id, f64::from(x), f64::from(y)))
            .collect()
    }

    /// Location ID.
    pub fn id(&self) -> LocationId {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another location.
    pub fn distance_to(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
