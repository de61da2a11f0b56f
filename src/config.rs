use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_DATA_URL: &str = "https://raw.githubusercontent.com/zulianizulkoffli/Soil_Studies_Peninsular_Malaysia/main/Data_For_Viz.csv";

/// Where the survey CSV is read from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Remote(String),
    Local(PathBuf),
}

impl Source {
    /// Name used for logs and as the cache key.
    pub fn name(&self) -> String {
        match self {
            Source::Remote(url) => url.clone(),
            Source::Local(path) => path.display().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub source: Source,
    pub port: u16,
    /// 0 disables caching and re-fetches the dataset on every view.
    pub cache_ttl_secs: u64,
    pub default_location: String,
    pub map_center: (f64, f64),
    pub map_zoom: u8,
    pub stylesheet: Option<PathBuf>,
}

impl Config {
    pub fn cache_ttl(&self) -> Option<Duration> {
        match self.cache_ttl_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source: Source::Remote(DEFAULT_DATA_URL.to_string()),
            port: 8000,
            cache_ttl_secs: 3600,
            default_location: "UTP Perak".to_string(),
            map_center: (4.3828345, 100.97182),
            map_zoom: 6,
            stylesheet: None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Soil survey dashboard for Peninsular Malaysia")]
pub struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = 8000)]
    pub port: u16,

    /// URL of the survey CSV
    #[arg(long, conflicts_with = "data_file")]
    pub data_url: Option<String>,

    /// Read the survey CSV from a local file instead of the network
    #[arg(long)]
    pub data_file: Option<PathBuf>,

    /// Seconds a loaded dataset is reused before re-fetching (0 = never cache)
    #[arg(long, default_value_t = 3600)]
    pub cache_ttl: u64,

    /// Location listed first in the location dropdown
    #[arg(long)]
    pub default_location: Option<String>,

    /// Extra CSS appended to the built-in stylesheet
    #[arg(long)]
    pub stylesheet: Option<PathBuf>,
}

impl Cli {
    pub fn into_config(self) -> Config {
        let mut config = Config::default();
        if let Some(url) = self.data_url {
            config.source = Source::Remote(url);
        }
        if let Some(path) = self.data_file {
            config.source = Source::Local(path);
        }
        if let Some(location) = self.default_location {
            config.default_location = location;
        }
        config.port = self.port;
        config.cache_ttl_secs = self.cache_ttl;
        config.stylesheet = self.stylesheet;
        config
    }
}
