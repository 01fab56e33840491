use std::env;

use anyhow::{Context, Result};

use crate::similarity::SimilarityOptions;

/// Default address the web form binds to.
pub const DEFAULT_BIND: &str = "127.0.0.1";
/// Default web form port.
pub const DEFAULT_PORT: u16 = 5000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, and CLI flags override whatever is loaded here.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Scoring options: longest n-gram counted and rounding precision
    /// (DOCSIM_MAX_NGRAM, DOCSIM_PRECISION)
    pub options: SimilarityOptions,
    /// Address for `docsim serve` (DOCSIM_BIND)
    pub bind: String,
    /// Port for `docsim serve` (DOCSIM_PORT)
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: SimilarityOptions::default(),
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    ///
    /// Split out from `load` so tests can supply variables without touching
    /// the process environment. Values are parsed here but range-checked in
    /// [`Config::with_overrides`], once CLI flags have had their say.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_ngram = match lookup("DOCSIM_MAX_NGRAM") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("DOCSIM_MAX_NGRAM must be a positive integer, got {raw:?}"))?,
            None => defaults.options.max_ngram,
        };

        let precision = match lookup("DOCSIM_PRECISION") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("DOCSIM_PRECISION must be a non-negative integer, got {raw:?}"))?,
            None => defaults.options.precision,
        };

        let port = match lookup("DOCSIM_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("DOCSIM_PORT must be a valid port number, got {raw:?}"))?,
            None => defaults.port,
        };

        Ok(Self {
            options: SimilarityOptions {
                max_ngram,
                precision,
            },
            bind: lookup("DOCSIM_BIND").unwrap_or(defaults.bind),
            port,
        })
    }

    /// Apply command-line overrides, then check the merged scoring options.
    ///
    /// A flag replaces the environment value outright, so an out-of-range
    /// DOCSIM_MAX_NGRAM does not matter when `--ngram` is given.
    pub fn with_overrides(mut self, max_ngram: Option<usize>, precision: Option<u32>) -> Result<Self> {
        if let Some(n) = max_ngram {
            self.options.max_ngram = n;
        }
        if let Some(p) = precision {
            self.options.precision = p;
        }
        self.options.validate()?;
        Ok(self)
    }
}
