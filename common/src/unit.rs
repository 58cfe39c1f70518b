//! Marker types.

/// Marker type describing a day of travel.
#[derive(Clone, Copy, Debug)]
pub struct Travel;
