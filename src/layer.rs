//! Zoom-driven visibility of the POI layer
//!
//! POIs are only shown once the map is zoomed in far enough to keep the
//! markers readable. The shell re-applies the decision on every zoom-change
//! and filter-change event; transitions are idempotent.

/// Minimum zoom level at which the POI layer is shown
pub const POI_ZOOM_THRESHOLD: f64 = 13.0;

/// True when the POI layer should be visible at the given zoom level
#[inline]
pub fn should_show_poi_layer(zoom: f64, threshold: f64) -> bool {
    zoom >= threshold
}

/// Rendering decision handed to the map shell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerTransition {
    Attach,
    Detach,
}

/// Tracks whether the POI layer is currently attached to the map
///
/// Starts detached. [`apply_zoom`](Self::apply_zoom) recomputes visibility and
/// reports a transition only when the state actually changes, so the shell
/// never re-adds an attached layer or re-removes a detached one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoiLayerState {
    attached: bool,
}

impl PoiLayerState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Recompute visibility for the given zoom level
    ///
    /// Returns `Some(Attach)` or `Some(Detach)` when the shell must act, and
    /// `None` when the layer is already in the target state.
    pub fn apply_zoom(&mut self, zoom: f64, threshold: f64) -> Option<LayerTransition> {
        match (should_show_poi_layer(zoom, threshold), self.attached) {
            (true, false) => {
                self.attached = true;
                Some(LayerTransition::Attach)
            }
            (false, true) => {
                self.attached = false;
                Some(LayerTransition::Detach)
            }
            _ => None,
        }
    }
}
