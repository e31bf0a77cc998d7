//! Pure queries over an immutable canonical record set. Every operation
//! returns a new derived collection and leaves its input untouched; the
//! sentinel value is treated as an ordinary category throughout.

use crate::domain::model::{
    CategoricalField, CountryRecord, HistogramBin, NumericField, ScatterPoint,
};
use crate::utils::error::{AtlasError, Result};
use std::collections::HashSet;

/// Exact match on the region column. `None` means no filter.
pub fn filter_by_region(records: &[CountryRecord], region: Option<&str>) -> Vec<CountryRecord> {
    match region {
        Some(region) => records
            .iter()
            .filter(|record| record.region == region)
            .cloned()
            .collect(),
        None => records.to_vec(),
    }
}

/// Membership filter on the subregion column. An empty set retains all.
pub fn filter_by_subregions(
    records: &[CountryRecord],
    subregions: &HashSet<String>,
) -> Vec<CountryRecord> {
    if subregions.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| subregions.contains(&record.subregion))
        .cloned()
        .collect()
}

/// Inclusive population range filter. An inverted range is rejected, never
/// clamped.
pub fn filter_by_population_range(
    records: &[CountryRecord],
    min: u64,
    max: u64,
) -> Result<Vec<CountryRecord>> {
    if min > max {
        return Err(AtlasError::InvalidRange {
            message: format!("population range is inverted: {min} > {max}"),
        });
    }
    Ok(records
        .iter()
        .filter(|record| record.population >= min && record.population <= max)
        .cloned()
        .collect())
}

/// The `n` most populous records, descending. Ties keep input order (the
/// sort is stable).
pub fn top_n_by_population(records: &[CountryRecord], n: usize) -> Vec<CountryRecord> {
    let mut ranked = records.to_vec();
    ranked.sort_by(|a, b| b.population.cmp(&a.population));
    ranked.truncate(n);
    ranked
}

/// Equal-width binned counts over `[min, max]` of the selected column.
///
/// A subset where all values are equal collapses to a single bin holding
/// every record; an empty subset yields no bins. A zero bin count is an
/// invalid query.
pub fn histogram(
    records: &[CountryRecord],
    field: NumericField,
    bins: usize,
) -> Result<Vec<HistogramBin>> {
    if bins == 0 {
        return Err(AtlasError::InvalidRange {
            message: "bin count must be positive".to_string(),
        });
    }
    if records.is_empty() {
        return Ok(Vec::new());
    }

    let values: Vec<f64> = records.iter().map(|record| field.value(record)).collect();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Ok(vec![HistogramBin {
            lower: min,
            upper: max,
            count: values.len(),
        }]);
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for value in &values {
        let mut index = ((value - min) / width) as usize;
        if index >= bins {
            index = bins - 1; // max falls into the last bin
        }
        counts[index] += 1;
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            lower: min + width * i as f64,
            upper: if i + 1 == bins {
                max
            } else {
                min + width * (i + 1) as f64
            },
            count,
        })
        .collect())
}

/// Occurrence counts per distinct value of the selected column, in order of
/// first occurrence.
pub fn categorical_counts(
    records: &[CountryRecord],
    field: CategoricalField,
) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        let value = field.value(record);
        match counts.iter_mut().find(|entry| entry.0 == value) {
            Some(entry) => entry.1 += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts
}

/// First record whose name matches exactly. Duplicate names are tolerated;
/// a miss is an explicit error, distinct from an empty subset.
pub fn lookup_by_name<'a>(records: &'a [CountryRecord], name: &str) -> Result<&'a CountryRecord> {
    records
        .iter()
        .find(|record| record.name == name)
        .ok_or_else(|| AtlasError::NotFound {
            name: name.to_string(),
        })
}

/// Projects two numeric columns per record, optionally tagged with a
/// category label, preserving input order.
pub fn scatter_pairs(
    records: &[CountryRecord],
    x: NumericField,
    y: NumericField,
    group_by: Option<CategoricalField>,
) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|record| ScatterPoint {
            x: x.value(record),
            y: y.value(record),
            group: group_by.map(|field| field.value(record).to_string()),
        })
        .collect()
}
