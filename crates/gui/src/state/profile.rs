//! Profile store: the ordered control points and the selected-point cursor

use shared::{Point2D, MIN_PROFILE_POINTS};
use thiserror::Error;

/// Rejected profile store mutations. The store is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    /// Removing a point would leave fewer than two.
    #[error("profile must keep at least {min} points", min = MIN_PROFILE_POINTS)]
    MinimumPoints,

    #[error("point index {index} out of range for {len} points")]
    IndexOutOfRange { index: usize, len: usize },

    /// A replacement profile is too short.
    #[error("profile needs at least {min} points, got {0}", min = MIN_PROFILE_POINTS)]
    TooFewPoints(usize),
}

/// Ordered profile points plus the current selection.
///
/// Invariants: at least `MIN_PROFILE_POINTS` points; a selection, when set,
/// always indexes a point.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    points: Vec<Point2D>,
    selected: Option<usize>,
    /// Monotonically increasing version counter for cache invalidation
    version: u64,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self {
            points: shared::default_profile(),
            selected: None,
            version: 0,
        }
    }
}

impl ProfileStore {
    /// Create a store seeded with the given points
    pub fn from_points(points: Vec<Point2D>) -> Result<Self, ProfileError> {
        if points.len() < MIN_PROFILE_POINTS {
            return Err(ProfileError::TooFewPoints(points.len()));
        }
        Ok(Self {
            points,
            selected: None,
            version: 0,
        })
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<&Point2D> {
        self.points.get(index)
    }

    /// Owned copy of the points, for consumers outside the input handler
    pub fn snapshot(&self) -> Vec<Point2D> {
        self.points.clone()
    }

    /// Current profile version (increments on every geometric mutation)
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_point(&self) -> Option<&Point2D> {
        self.selected.and_then(|i| self.points.get(i))
    }

    /// Set or clear the selection. Out-of-range indices are refused and the
    /// previous selection is kept.
    pub fn select(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(i) if i >= self.points.len() => false,
            _ => {
                self.selected = index;
                true
            }
        }
    }

    /// Replace the whole profile (reset / import). Clears the selection.
    pub fn replace(&mut self, points: Vec<Point2D>) -> Result<(), ProfileError> {
        if points.len() < MIN_PROFILE_POINTS {
            return Err(ProfileError::TooFewPoints(points.len()));
        }
        self.points = points;
        self.selected = None;
        self.bump();
        Ok(())
    }

    /// Overwrite a point in place
    pub fn set_point(&mut self, index: usize, point: Point2D) -> Result<(), ProfileError> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(ProfileError::IndexOutOfRange { index, len })?;
        *slot = point;
        self.bump();
        Ok(())
    }

    /// Insert a point before `index` (`index == len` appends).
    /// A selection at or after `index` shifts with its point.
    pub fn insert_point(&mut self, index: usize, point: Point2D) -> Result<(), ProfileError> {
        let len = self.points.len();
        if index > len {
            return Err(ProfileError::IndexOutOfRange { index, len });
        }
        self.points.insert(index, point);
        if let Some(sel) = self.selected {
            if sel >= index {
                self.selected = Some(sel + 1);
            }
        }
        self.bump();
        Ok(())
    }

    /// Remove a point, refusing to go below the minimum point count.
    /// A selection on the removed point is cleared; a later one shifts down.
    pub fn remove_point(&mut self, index: usize) -> Result<Point2D, ProfileError> {
        let len = self.points.len();
        if len <= MIN_PROFILE_POINTS {
            return Err(ProfileError::MinimumPoints);
        }
        if index >= len {
            return Err(ProfileError::IndexOutOfRange { index, len });
        }
        let removed = self.points.remove(index);
        self.selected = match self.selected {
            Some(sel) if sel == index => None,
            Some(sel) if sel > index => Some(sel - 1),
            other => other,
        };
        self.bump();
        Ok(removed)
    }

    /// Drop the selection if it no longer indexes a point
    pub(crate) fn validate_selection(&mut self) {
        if matches!(self.selected, Some(i) if i >= self.points.len()) {
            self.selected = None;
        }
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ProfileStore {
        ProfileStore::default()
    }

    #[test]
    fn test_default_store() {
        let s = store();
        assert_eq!(s.len(), 4);
        assert_eq!(s.selected(), None);
        assert_eq!(s.version(), 0);
    }

    #[test]
    fn test_from_points_rejects_short_profile() {
        let err = ProfileStore::from_points(vec![Point2D::new(1.0, 1.0)]).unwrap_err();
        assert_eq!(err, ProfileError::TooFewPoints(1));
    }

    #[test]
    fn test_select_out_of_range_refused() {
        let mut s = store();
        assert!(s.select(Some(1)));
        assert!(!s.select(Some(4)));
        assert_eq!(s.selected(), Some(1));
        assert!(s.select(None));
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_set_point_bumps_version() {
        let mut s = store();
        s.set_point(1, Point2D::new(2.0, 1.0)).unwrap();
        assert_eq!(s.points()[1], Point2D::new(2.0, 1.0));
        assert_eq!(s.version(), 1);
        assert!(matches!(
            s.set_point(9, Point2D::new(0.0, 0.0)),
            Err(ProfileError::IndexOutOfRange { index: 9, len: 4 })
        ));
        assert_eq!(s.version(), 1);
    }

    #[test]
    fn test_insert_shifts_selection() {
        let mut s = store();
        s.select(Some(2));
        s.insert_point(1, Point2D::new(1.0, 1.5)).unwrap();
        assert_eq!(s.len(), 5);
        assert_eq!(s.selected(), Some(3));

        s.insert_point(5, Point2D::new(0.2, -3.0)).unwrap();
        assert_eq!(s.selected(), Some(3));
        assert!(s.insert_point(9, Point2D::new(0.0, 0.0)).is_err());
    }

    #[test]
    fn test_remove_updates_selection() {
        let mut s = store();
        s.select(Some(3));
        s.remove_point(1).unwrap();
        assert_eq!(s.selected(), Some(2));

        s.remove_point(2).unwrap();
        assert_eq!(s.selected(), None);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_remove_refuses_below_minimum() {
        let mut s = store();
        s.remove_point(0).unwrap();
        s.remove_point(0).unwrap();
        assert_eq!(s.len(), 2);
        let version = s.version();

        assert_eq!(s.remove_point(0), Err(ProfileError::MinimumPoints));
        assert_eq!(s.len(), 2);
        assert_eq!(s.version(), version);
    }

    #[test]
    fn test_replace_clears_selection() {
        let mut s = store();
        s.select(Some(3));
        s.replace(vec![Point2D::new(0.0, 1.0), Point2D::new(1.0, 0.0)])
            .unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.selected(), None);
    }

    #[test]
    fn test_replace_rejects_short_profile() {
        let mut s = store();
        assert!(s.replace(vec![]).is_err());
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ProfileError::MinimumPoints.to_string(),
            "profile must keep at least 2 points"
        );
        assert_eq!(
            ProfileError::TooFewPoints(0).to_string(),
            "profile needs at least 2 points, got 0"
        );
    }
}
