use std::path::{Path, PathBuf};

use crate::schema::{Field, Schema};

pub const DEFAULT_PREFIX: &str = "plasticc";

/// Record counts for the four PLAsTiCC tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlasticcRecords {
    pub training_set: usize,
    pub test_set: usize,
    pub training_set_metadata: usize,
    pub test_set_metadata: usize,
}

impl Default for PlasticcRecords {
    fn default() -> Self {
        Self {
            training_set: 1_421_705,
            test_set: 4_536_531,
            training_set_metadata: 7_848,
            test_set_metadata: 3_492_890,
        }
    }
}

/// The four related CSV files, derived from a common prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlasticcFiles {
    pub training_set: PathBuf,
    pub test_set: PathBuf,
    pub training_set_metadata: PathBuf,
    pub test_set_metadata: PathBuf,
}

impl PlasticcFiles {
    pub fn with_prefix(prefix: &Path) -> Self {
        let base = prefix.display().to_string();
        Self {
            training_set: PathBuf::from(format!("{base}_training_set.csv")),
            test_set: PathBuf::from(format!("{base}_test_set.csv")),
            training_set_metadata: PathBuf::from(format!("{base}_training_set_metadata.csv")),
            test_set_metadata: PathBuf::from(format!("{base}_test_set_metadata.csv")),
        }
    }
}

/// Per-observation light-curve table (training split).
pub fn training_set_schema() -> Schema {
    Schema::new(vec![
        Field::int("object_id", 615, 130_779_836),
        Field::float("mjd", 59_580.03515625, 60_674.36328125),
        Field::int("passband", 0, 5),
        Field::float("flux", -1_149_388.375, 2_432_808.75),
        Field::float("flux_err", 0.46375301480293274, 2_234_069.25),
        Field::int("detected", 0, 1),
    ])
}

/// Per-observation light-curve table (test split).
pub fn test_set_schema() -> Schema {
    Schema::new(vec![
        Field::int("object_id", 13, 130_788_054),
        Field::float("mjd", 59_580.03515625, 60_674.36328125),
        Field::int("passband", 0, 5),
        Field::float("flux", -8_935_484.0, 13_675_792.0),
        Field::float("flux_err", 0.46375301480293274, 13_791_667.0),
        Field::int("detected", 0, 1),
    ])
}

/// Per-object metadata (training split, carries the class target).
pub fn training_set_metadata_schema() -> Schema {
    Schema::new(vec![
        Field::int("object_id", 615, 130_779_836),
        Field::float("ra", 0.1757809966802597, 359.82421875),
        Field::float("decl", -64.76085662841797, 4.181528091430664),
        Field::float("gal_l", 0.10768099874258041, 359.9438171386719),
        Field::float("gal_b", -89.61557006835938, 65.93132019042969),
        Field::int("ddf", 0, 1),
        Field::float("hostgal_specz", 0.0, 3.4451000690460205),
        Field::float("hostgal_photoz", 0.0, 2.9993999004364014),
        Field::float("hostgal_photoz_err", 0.0, 1.7347999811172485),
        Field::float("distmod", 31.9960994720459, 47.02560043334961),
        Field::float("mwebv", 0.003000000026077032, 2.746999979019165),
        Field::int("target", 6, 19),
    ])
}

/// Per-object metadata (test split, no target column).
pub fn test_set_metadata_schema() -> Schema {
    Schema::new(vec![
        Field::int("object_id", 13, 130_788_054),
        Field::float("ra", 0.0, 359.82421875),
        Field::float("decl", -64.76085662841797, 4.181528091430664),
        Field::float("gal_l", 0.010369000025093555, 359.99554443359375),
        Field::float("gal_b", -89.6744155883789, 66.06869506835938),
        Field::int("ddf", 0, 1),
        Field::float("hostgal_specz", 0.007699999958276749, 1.2014000415802002),
        Field::float("hostgal_photoz", 0.0, 3.0),
        Field::float("hostgal_photoz_err", 0.0, 1.871399998664856),
        Field::float("distmod", 27.64620018005371, 47.026100158691406),
        Field::float("mwebv", 0.0020000000949949026, 2.99399995803833),
    ])
}
