//! Relocation report type and terminal formatting.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// How many files were moved into each class folder.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RelocateReport {
    pub moved: BTreeMap<String, usize>,
}

impl RelocateReport {
    pub(crate) fn record(&mut self, class: &str) {
        *self.moved.entry(class.to_string()).or_insert(0) += 1;
    }

    pub fn total_moved(&self) -> usize {
        self.moved.values().sum()
    }
}

impl fmt::Display for RelocateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Moved {} image(s) into {} class folder(s)",
            self.total_moved(),
            self.moved.len()
        )
    }
}
