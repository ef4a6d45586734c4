//! Persistence for the fitted scaler parameters.
//!
//! The artifact is plain JSON so the inference side can reconstruct the
//! exact same linear mapping without refitting.

use std::{fs::File, io::BufWriter, path::Path};

use crate::{errors::Error, preprocess::scaler::FittedMinMax};

pub fn save_scaler(path: &Path, fitted: &FittedMinMax) -> Result<(), Error> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), fitted)?;
    Ok(())
}

pub fn load_scaler(path: &Path) -> Result<FittedMinMax, Error> {
    let file = File::open(path)?;
    let fitted = serde_json::from_reader(file)?;
    Ok(fitted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaler_artifact_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("AAPL_scaler.json");

        let fitted = FittedMinMax {
            feature_range: (0.0, 1.0),
            data_min: vec![10.0],
            data_max: vec![30.0],
        };

        save_scaler(&path, &fitted).unwrap();
        let loaded = load_scaler(&path).unwrap();
        assert_eq!(loaded, fitted);
    }
}
