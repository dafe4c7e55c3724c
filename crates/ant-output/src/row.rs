//! Plain data rows written by output backends.

/// One ant at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntSnapshotRow {
    pub tick:     u64,
    /// Index in the world's collection order.
    pub ant_id:   u32,
    pub x:        f32,
    pub y:        f32,
    /// Radians in `[0, 2π)`.
    pub heading:  f32,
    pub carrying: bool,
}

/// Colony-wide counters after one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:           u64,
    pub score:          u64,
    pub pickups:        u32,
    pub deliveries:     u32,
    pub bounces:        u32,
    /// Ants returning with food at the end of the tick.
    pub carrying:       u64,
    /// Sum of every scent cell after the field advance.
    pub field_total:    f64,
    pub food_remaining: u64,
    /// Strongest single scent cell after the field advance.
    pub field_peak:     f32,
}
