//! `SearchStats` counts the work done by a search. The plain search
//! functions discard it; the CLI prints it with `--stats`.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Values tried as the first element of a subset.
    pub candidates: u64,
    /// Membership lookups against a value set.
    pub probes: u64,
    /// Pair searches started, including those nested in a triple search.
    pub pair_scans: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick_candidate(&mut self) {
        self.candidates += 1;
    }

    pub fn tick_probe(&mut self) {
        self.probes += 1;
    }

    pub fn tick_pair_scan(&mut self) {
        self.pair_scans += 1;
    }

    pub fn report(&self) {
        eprintln!(
            "Searched {} candidates: {} probes across {} pair scans",
            self.candidates, self.probes, self.pair_scans
        );
    }
}
