use serde::{Deserialize, Serialize};

/// Literal stand-in for any source field that is missing or unusable.
pub const MISSING: &str = "No existe";

/// Flat canonical form of one raw country entry. Every field is always
/// populated: either real data or the sentinel (numerics degrade to zero).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    pub population: u64,
    pub area: f64,
    pub region: String,
    pub subregion: String,
    pub capital: String,
    pub languages: String,
    pub currencies: String,
}

impl CountryRecord {
    /// Record emitted for an entry that could not be read at all.
    pub fn sentinel() -> Self {
        Self {
            name: MISSING.to_string(),
            population: 0,
            area: 0.0,
            region: MISSING.to_string(),
            subregion: MISSING.to_string(),
            capital: MISSING.to_string(),
            languages: MISSING.to_string(),
            currencies: MISSING.to_string(),
        }
    }
}

/// Numeric columns the aggregation operations can project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericField {
    Population,
    Area,
}

impl NumericField {
    pub fn value(&self, record: &CountryRecord) -> f64 {
        match self {
            NumericField::Population => record.population as f64,
            NumericField::Area => record.area,
        }
    }
}

/// String columns usable for grouping and counting. The sentinel is an
/// ordinary category here, not missing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoricalField {
    Name,
    Region,
    Subregion,
    Capital,
}

impl CategoricalField {
    pub fn value<'a>(&self, record: &'a CountryRecord) -> &'a str {
        match self {
            CategoricalField::Name => &record.name,
            CategoricalField::Region => &record.region,
            CategoricalField::Subregion => &record.subregion,
            CategoricalField::Capital => &record.capital,
        }
    }
}

/// One equal-width bin of a histogram over a numeric column.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// One projected point for an x/y comparison, optionally tagged with the
/// category it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub group: Option<String>,
}

/// Product of the transform stage: the canonical record set plus its CSV
/// projection.
#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<CountryRecord>,
    pub csv_output: String,
}

/// What a full pipeline run hands back to the caller.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub output_path: String,
    pub records: Vec<CountryRecord>,
}
