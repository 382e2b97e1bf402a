//! Running score, carried between sectors through `SectorSummary`.

use negspace_core::state::{ScoreView, SectorSummary};

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub score: u64,
    pub enemies_destroyed: u32,
    pub sectors_cleared: u32,
}

impl ScoreState {
    pub fn from_summary(summary: &SectorSummary) -> Self {
        Self {
            score: summary.score,
            enemies_destroyed: summary.enemies_destroyed,
            sectors_cleared: summary.sectors_cleared,
        }
    }

    pub fn award(&mut self, points: u64) {
        self.score = self.score.saturating_add(points);
    }

    pub fn summary(&self) -> SectorSummary {
        SectorSummary {
            score: self.score,
            enemies_destroyed: self.enemies_destroyed,
            sectors_cleared: self.sectors_cleared,
        }
    }

    pub fn view(&self, sector_time_secs: f64) -> ScoreView {
        ScoreView {
            score: self.score,
            enemies_destroyed: self.enemies_destroyed,
            sectors_cleared: self.sectors_cleared,
            sector_time_secs,
        }
    }
}
