//! Tests for chart rendering

use crate::app::services::session_loader::LapTimeSet;


/// Build a small two-driver set for chart tests
pub fn chart_set() -> LapTimeSet {
    let mut set = LapTimeSet::new();
    set.record("HAM", 91.234);
    set.record("VER", 90.876);
    set.record("HAM", 92.001);
    set
}
