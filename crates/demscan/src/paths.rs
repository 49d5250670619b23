//! Run-file naming of the EBTEL-2fluid output tree.
//!
//! The configuration generator lays runs out as
//! `{root}/{species}_heating_runs/alpha{α}/data/` with one DEM table per
//! wait time named `ebtel2fl_L{L}_tn{tn}_tpulse{tp}_{solver}_dem.txt`.

use std::path::{Path, PathBuf};

use demscan_core::heating::Species;

/// Identifies one sweep family on disk.
#[derive(Debug, Clone)]
pub struct RunLocator {
    pub species: Species,
    /// Power-law index magnitude for the `alpha{..}` directory; `None` for
    /// uniform-amplitude runs, which live under `alphauniform`.
    pub alpha: Option<f64>,
    /// Loop half-length (Mm).
    pub loop_length: f64,
    /// Full pulse duration (s).
    pub t_pulse: f64,
    /// Solver tag embedded in the run file names.
    pub solver: String,
}

impl RunLocator {
    /// Directory containing the per-wait-time DEM tables.
    #[must_use]
    pub fn data_dir(&self, root: &Path) -> PathBuf {
        let alpha_dir = match self.alpha {
            Some(alpha) => format!("alpha{}", fmt_num(alpha.abs())),
            None => "alphauniform".to_string(),
        };
        root.join(format!("{}_heating_runs", self.species))
            .join(alpha_dir)
            .join("data")
    }

    /// DEM table for one wait time.
    #[must_use]
    pub fn dem_file(&self, root: &Path, t_wait: f64) -> PathBuf {
        self.data_dir(root).join(format!(
            "ebtel2fl_L{}_tn{}_tpulse{}_{}_dem.txt",
            fmt_num(self.loop_length),
            t_wait as i64,
            fmt_num(self.t_pulse),
            self.solver
        ))
    }
}

/// The config writer names files with Python `str()` float formatting; Debug
/// formatting matches it (keeps the trailing `.0` on whole numbers).
fn fmt_num(value: f64) -> String {
    format!("{value:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dem_file_naming() {
        let locator = RunLocator {
            species: Species::Electron,
            alpha: Some(-2.5),
            loop_length: 40.0,
            t_pulse: 500.0,
            solver: "rka4".to_string(),
        };

        let path = locator.dem_file(Path::new("/data"), 250.0);
        assert_eq!(
            path,
            Path::new(
                "/data/electron_heating_runs/alpha2.5/data/ebtel2fl_L40.0_tn250_tpulse500.0_rka4_dem.txt"
            )
        );
    }

    #[test]
    fn test_uniform_alpha_dir() {
        let locator = RunLocator {
            species: Species::Ion,
            alpha: None,
            loop_length: 20.0,
            t_pulse: 200.0,
            solver: "euler".to_string(),
        };

        let dir = locator.data_dir(Path::new("/data"));
        assert_eq!(dir, Path::new("/data/ion_heating_runs/alphauniform/data"));
    }
}
