use crate::model::PopupId;

/// An ephemeral, dismissible on-screen element.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    id: PopupId,
    x: f64,
    y: f64,
    floating: bool,
}

impl Popup {
    #[must_use]
    pub fn new(id: PopupId, x: f64, y: f64, floating: bool) -> Self {
        Self { id, x, y, floating }
    }

    #[must_use]
    pub fn id(&self) -> PopupId {
        self.id
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Whether the popup drifts around instead of staying put.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        self.floating
    }
}

/// Size of the host rendering surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    /// Negative or non-finite dimensions are treated as zero.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: sanitize(width),
            height: sanitize(height),
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Upper (exclusive) bounds for a popup's top-left corner so that a popup
    /// of `popup_size` stays fully on screen.
    #[must_use]
    pub fn placement_bounds(&self, popup_size: f64) -> (f64, f64) {
        (
            (self.width - popup_size).max(0.0),
            (self.height - popup_size).max(0.0),
        )
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_bounds_reserve_popup_size() {
        let viewport = Viewport::new(1280.0, 720.0);
        assert_eq!(viewport.placement_bounds(200.0), (1080.0, 520.0));
    }

    #[test]
    fn placement_bounds_never_negative() {
        let viewport = Viewport::new(150.0, f64::NAN);
        assert_eq!(viewport.height(), 0.0);
        assert_eq!(viewport.placement_bounds(200.0), (0.0, 0.0));
    }
}
