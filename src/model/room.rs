use super::SeatingMode;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub desk_count: u32,
    pub rows: u32,
    pub columns: u32,
}

impl Room {
    /// A desk count larger than the grid is clamped, not rejected.
    pub fn usable_desks(&self) -> u32 {
        self.desk_count.min(self.rows * self.columns)
    }

    /// Desks are numbered row-major over the grid.
    pub fn desk_position(&self, desk: u32) -> (u32, u32) {
        debug_assert!(desk < self.usable_desks());
        (desk / self.columns, desk % self.columns)
    }

    /// Number of students this room can hold in the given mode. The
    /// room capacity caps total occupants even when the desks could
    /// hold more.
    pub fn seats(&self, mode: SeatingMode) -> u32 {
        (self.usable_desks() * mode.seats_per_desk()).min(self.capacity)
    }
}
