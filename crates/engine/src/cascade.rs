//! Cascade resolution: remove matches, collapse, refill, rescan.

use tracing::{debug, trace};

use crate::event::{BoardEvent, Listeners};
use crate::grid::Grid;
use crate::matcher::find_matches;
use crate::supply::TileSupply;

/// What one remove/collapse/refill pass did.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct PassReport {
    pub matches: usize,
    pub cleared: usize,
    pub refilled: usize,
}

/// Totals for a whole cascade.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CascadeReport {
    pub passes: usize,
    pub matches: usize,
    pub cleared: usize,
    pub refilled: usize,
}

impl CascadeReport {
    fn absorb(&mut self, pass: PassReport) {
        self.passes += 1;
        self.matches += pass.matches;
        self.cleared += pass.cleared;
        self.refilled += pass.refilled;
    }
}

/// Run a single pass. Returns `None`, leaving the grid untouched, when the
/// grid holds no matches.
///
/// Every match found by the scan is removed before gravity runs. Cells
/// shared by two matches are cleared once.
pub fn resolve_pass<T, S>(
    grid: &mut Grid<T>,
    supply: &mut S,
    listeners: &mut Listeners<T>,
) -> Option<PassReport>
where
    T: PartialEq + Clone,
    S: TileSupply<T> + ?Sized,
{
    let matches = find_matches(grid);
    if matches.is_empty() {
        return None;
    }

    let mut report = PassReport {
        matches: matches.len(),
        ..PassReport::default()
    };
    for m in matches {
        for &p in &m.positions {
            if grid.clear(p) {
                report.cleared += 1;
            }
        }
        trace!(len = m.len(), orientation = ?m.orientation, "match removed");
        listeners.emit(&BoardEvent::Match(m));
    }

    grid.collapse();
    report.refilled = grid.refill(supply);
    assert_eq!(grid.empty_count(), 0, "grid still has empty cells after refill");

    listeners.emit(&BoardEvent::Refill);
    Some(report)
}

/// Run passes until a scan finds nothing.
pub fn resolve<T, S>(grid: &mut Grid<T>, supply: &mut S, listeners: &mut Listeners<T>) -> CascadeReport
where
    T: PartialEq + Clone,
    S: TileSupply<T> + ?Sized,
{
    let mut report = CascadeReport::default();
    while let Some(pass) = resolve_pass(grid, supply, listeners) {
        debug!(
            pass = report.passes + 1,
            matches = pass.matches,
            cleared = pass.cleared,
            "cascade pass"
        );
        report.absorb(pass);
    }
    report
}
