pub mod cli;

#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

/// The field projection keeps the payload at exactly the shape the
/// normalizer consumes.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,capital,region,subregion,population,area,languages,currencies";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "country-atlas")]
#[command(about = "Fetches, normalizes and summarizes the REST Countries dataset")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub api_endpoint: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Restrict the report to one region; omit for all regions
    #[arg(long)]
    pub region: Option<String>,

    /// Restrict the report to these subregions
    #[arg(long, value_delimiter = ',')]
    pub subregions: Vec<String>,

    /// Lower population bound for the report (inclusive)
    #[arg(long)]
    pub min_population: Option<u64>,

    /// Upper population bound for the report (inclusive)
    #[arg(long)]
    pub max_population: Option<u64>,

    /// Ranking size for the population table
    #[arg(long, default_value = "10")]
    pub top: usize,

    /// Bin count for the area histogram
    #[arg(long, default_value = "20")]
    pub bins: usize,

    /// Show the detail block for one country
    #[arg(long)]
    pub country: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn top_n(&self) -> usize {
        self.top
    }

    fn histogram_bins(&self) -> usize {
        self.bins
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api_endpoint", &self.api_endpoint)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_positive_number("top", self.top, 1)?;
        validation::validate_positive_number("bins", self.bins, 1)?;
        Ok(())
    }
}
