//! Pointer position relative to the hero canvas.

use kurbo::Point;

/// Last known pointer position in canvas space.
///
/// `Away` replaces a far-off sentinel coordinate: while the pointer is
/// outside the canvas container, no particle feels any force.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PointerState {
    #[default]
    Away,
    At(Point),
}

impl PointerState {
    /// Pointer at client coordinates, made relative to the canvas's
    /// top-left corner (also in client coordinates).
    pub fn from_client(client_x: f64, client_y: f64, origin_x: f64, origin_y: f64) -> Self {
        Self::At(Point::new(client_x - origin_x, client_y - origin_y))
    }

    pub fn position(&self) -> Option<Point> {
        match self {
            Self::At(p) => Some(*p),
            Self::Away => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_coordinates_are_made_relative() {
        let p = PointerState::from_client(150.0, 90.0, 100.0, 40.0);
        assert_eq!(p.position(), Some(Point::new(50.0, 50.0)));
    }

    #[test]
    fn default_is_away() {
        assert_eq!(PointerState::default().position(), None);
    }
}
