use clap::Parser;
use country_atlas::core::query;
use country_atlas::domain::model::{CategoricalField, CountryRecord, NumericField};
use country_atlas::utils::{labels, logger, validation::Validate};
use country_atlas::{AtlasEngine, CliConfig, CountryPipeline, DatasetCache, LocalStorage};
use std::collections::HashSet;
use std::fmt::Write as _;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting country-atlas");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = CountryPipeline::new(storage, config.clone());
    let engine = AtlasEngine::new(pipeline);

    let outcome = match engine.run().await {
        Ok(outcome) => outcome,
        Err(e) => {
            // A fetch failure is terminal for the session: no normalized
            // set, no report.
            tracing::error!("{}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    println!("✅ Dataset exported to {}", outcome.output_path);

    let mut cache = DatasetCache::new(None);
    cache.store(outcome.records);
    if let Some(fetched_at) = cache.fetched_at() {
        println!(
            "   Last refresh: {}",
            fetched_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    let Some(records) = cache.get() else {
        anyhow::bail!("dataset cache expired before the report could run");
    };

    if records.is_empty() {
        println!("No hay datos disponibles.");
        return Ok(());
    }

    print!("{}", build_report(&records, &config)?);
    Ok(())
}

/// Renders the dashboard's derived views as a terminal report over the
/// filtered subset.
fn build_report(records: &[CountryRecord], config: &CliConfig) -> anyhow::Result<String> {
    let mut subset = query::filter_by_region(records, config.region.as_deref());

    let subregions: HashSet<String> = config.subregions.iter().cloned().collect();
    subset = query::filter_by_subregions(&subset, &subregions);

    if config.min_population.is_some() || config.max_population.is_some() {
        subset = query::filter_by_population_range(
            &subset,
            config.min_population.unwrap_or(0),
            config.max_population.unwrap_or(u64::MAX),
        )?;
    }

    let mut out = String::new();
    writeln!(out)?;
    writeln!(
        out,
        "Se muestran {} países tras aplicar los filtros",
        subset.len()
    )?;

    if subset.is_empty() {
        writeln!(
            out,
            "No hay países que cumplan con los filtros seleccionados."
        )?;
        return Ok(out);
    }

    writeln!(out)?;
    writeln!(out, "Población por país (Top {})", config.top)?;
    for record in query::top_n_by_population(&subset, config.top) {
        writeln!(out, "  {:<32} {:>12}", record.name, record.population)?;
    }

    writeln!(out)?;
    writeln!(out, "Distribución de área (km²), {} tramos", config.bins)?;
    for bin in query::histogram(&subset, NumericField::Area, config.bins)? {
        writeln!(
            out,
            "  {:>12.0} .. {:>12.0} | {:>4} {}",
            bin.lower,
            bin.upper,
            bin.count,
            "#".repeat(bin.count.min(50))
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Distribución por región")?;
    for (region, count) in query::categorical_counts(&subset, CategoricalField::Region) {
        let share = count as f64 / subset.len() as f64 * 100.0;
        writeln!(
            out,
            "  {:<20} {:>4} ({:.1}%)",
            labels::region_label_es(&region),
            count,
            share
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Relación entre área y población")?;
    let points = query::scatter_pairs(
        &subset,
        NumericField::Area,
        NumericField::Population,
        Some(CategoricalField::Region),
    );
    let groups: HashSet<&str> = points.iter().filter_map(|p| p.group.as_deref()).collect();
    let max_area = points.iter().map(|p| p.x).fold(0.0_f64, f64::max);
    let max_population = points.iter().map(|p| p.y).fold(0.0_f64, f64::max);
    writeln!(
        out,
        "  {} puntos en {} regiones; área hasta {:.0} km², población hasta {:.0}",
        points.len(),
        groups.len(),
        max_area,
        max_population
    )?;

    if let Some(name) = &config.country {
        writeln!(out)?;
        match query::lookup_by_name(&subset, name) {
            Ok(record) => {
                writeln!(out, "Detalle de {}", record.name)?;
                writeln!(out, "  Capital: {}", record.capital)?;
                writeln!(
                    out,
                    "  Región / Subregión: {} / {}",
                    record.region, record.subregion
                )?;
                writeln!(out, "  Población: {}", record.population)?;
                writeln!(out, "  Área (km²): {}", record.area)?;
                writeln!(out, "  Idiomas: {}", record.languages)?;
                writeln!(out, "  Monedas: {}", record.currencies)?;
            }
            // A miss is a user-facing message, not a crash.
            Err(e) => writeln!(out, "{}", e)?,
        }
    }

    Ok(out)
}
