use serde::{Deserialize, Serialize};

mod interchange;

pub use interchange::{parse_profile_json, profile_to_json, ImportError};

/// Минимальное число точек профиля
pub const MIN_PROFILE_POINTS: usize = 2;

/// 2D-точка профиля (модельные единицы, 1 = 1 мм).
/// `x`: радиус относительно оси вращения, `y`: высота.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Та же точка с радиусом, ограниченным снизу нулём
    pub fn with_non_negative_x(self) -> Self {
        Self {
            x: self.x.max(0.0),
            y: self.y,
        }
    }

    /// Евклидово расстояние до другой точки
    pub fn distance(&self, other: &Point2D) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Профиль по умолчанию: четыре точки сверху вниз
pub fn default_profile() -> Vec<Point2D> {
    vec![
        Point2D::new(0.5, 2.0),
        Point2D::new(1.5, 1.0),
        Point2D::new(1.5, -1.0),
        Point2D::new(0.5, -2.0),
    ]
}

/// Флаги отображения, сохраняемые вместе с профилем
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPrefs {
    /// Сетка на 2D-холсте и в 3D-виде
    #[serde(default = "default_true")]
    pub show_grid: bool,
    /// Оси координат в 3D-виде
    #[serde(default = "default_true")]
    pub show_axes: bool,
}

impl Default for DisplayPrefs {
    fn default() -> Self {
        Self {
            show_grid: true,
            show_axes: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Снимок состояния редактора для автосохранения
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub points: Vec<Point2D>,
    #[serde(default)]
    pub prefs: DisplayPrefs,
}

impl Default for ProfileSnapshot {
    fn default() -> Self {
        Self {
            points: default_profile(),
            prefs: DisplayPrefs::default(),
        }
    }
}

impl ProfileSnapshot {
    /// Разобрать снимок из JSON; профиль короче двух точек отвергается
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        let snapshot: ProfileSnapshot = serde_json::from_str(json)?;
        if snapshot.points.len() < MIN_PROFILE_POINTS {
            return Err(ImportError::TooFewPoints(snapshot.points.len()));
        }
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_shape() {
        let pts = default_profile();
        assert_eq!(pts.len(), 4);
        assert!(pts.iter().all(|p| p.x > 0.0));
        assert!(pts[0].y > pts[3].y);
    }

    #[test]
    fn test_non_negative_x() {
        assert_eq!(
            Point2D::new(-3.0, 1.0).with_non_negative_x(),
            Point2D::new(0.0, 1.0)
        );
        assert_eq!(
            Point2D::new(2.0, 1.0).with_non_negative_x(),
            Point2D::new(2.0, 1.0)
        );
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let snapshot = ProfileSnapshot {
            points: vec![Point2D::new(0.0, 1.0), Point2D::new(2.0, -1.0)],
            prefs: DisplayPrefs {
                show_grid: false,
                show_axes: true,
            },
        };
        let json = snapshot.to_json().unwrap();
        let back = ProfileSnapshot::from_json(&json).unwrap();
        assert_eq!(back, snapshot);
    }

    #[test]
    fn test_snapshot_missing_prefs_uses_defaults() {
        let json = r#"{"points": [{"x": 1, "y": 2}, {"x": 1, "y": -2}]}"#;
        let snapshot = ProfileSnapshot::from_json(json).unwrap();
        assert_eq!(snapshot.prefs, DisplayPrefs::default());
        assert_eq!(snapshot.points.len(), 2);
    }

    #[test]
    fn test_snapshot_too_few_points_rejected() {
        let json = r#"{"points": [{"x": 1, "y": 2}]}"#;
        assert!(matches!(
            ProfileSnapshot::from_json(json),
            Err(ImportError::TooFewPoints(1))
        ));
    }
}
