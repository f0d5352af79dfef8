//! Marker types.

/// Marker type describing the start of a period.
#[derive(Clone, Copy, Debug)]
pub struct Start;

/// Marker type describing the end of a period.
#[derive(Clone, Copy, Debug)]
pub struct End;
