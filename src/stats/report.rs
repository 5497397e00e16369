//! Stats report types and terminal formatting.

use serde::Serialize;
use std::fmt;

/// Per-class file counts for an output directory.
#[derive(Clone, Debug, Default, Serialize)]
pub struct StatsReport {
    /// Grand total across all class folders.
    pub total: usize,
    /// One entry per immediate subdirectory, sorted by class name.
    pub classes: Vec<ClassCount>,
}

/// A single class folder with its file count.
#[derive(Clone, Debug, Serialize)]
pub struct ClassCount {
    pub name: String,
    pub count: usize,
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "Total images: {}", self.total)?;
        for class in &self.classes {
            writeln!(f, "  {}: {}", class.name, class.count)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_total_and_per_class_counts() {
        let report = StatsReport {
            total: 2,
            classes: vec![
                ClassCount {
                    name: "cat".to_string(),
                    count: 1,
                },
                ClassCount {
                    name: "dog".to_string(),
                    count: 1,
                },
                ClassCount {
                    name: "not_usable".to_string(),
                    count: 0,
                },
            ],
        };

        let out = format!("{report}");
        assert!(out.contains("Total images: 2"));
        assert!(out.contains("cat: 1"));
        assert!(out.contains("dog: 1"));
        assert!(out.contains("not_usable: 0"));
    }
}
