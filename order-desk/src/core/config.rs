use crate::orders::PageSize;
use crate::pricing::{TaxCalculator, TaxPolicy};

/// Order desk configuration
///
/// # Environment variables
///
/// Every option can be overridden from the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | ENVIRONMENT | development | runtime environment |
/// | LOG_LEVEL | info | tracing max level |
/// | LOG_DIR | (unset) | directory for daily rolling log files |
/// | TAX_RATE_PERCENT | 10 | consumption tax rate |
/// | TAX_POLICY | aggregate | `aggregate` or `per_line` |
/// | PAGE_SIZE | 50 | header rows per page (50 / 100) |
///
/// # Example
///
/// ```ignore
/// TAX_POLICY=per_line PAGE_SIZE=100 cargo run -p order-desk
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Max tracing level
    pub log_level: String,
    /// Log file directory; stdout when unset
    pub log_dir: Option<String>,
    /// Consumption tax rate in percent
    pub tax_rate_percent: u32,
    /// Where tax rounding is applied
    pub tax_policy: TaxPolicy,
    /// Header rows per page
    pub page_size: PageSize,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Used by tests to avoid touching the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::defaults();

        let tax_rate_percent = match lookup("TAX_RATE_PERCENT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid TAX_RATE_PERCENT '{}', using {}", raw, defaults.tax_rate_percent);
                defaults.tax_rate_percent
            }),
            None => defaults.tax_rate_percent,
        };

        let tax_policy = match lookup("TAX_POLICY") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Invalid TAX_POLICY '{}', using aggregate", raw);
                defaults.tax_policy
            }),
            None => defaults.tax_policy,
        };

        let page_size = match lookup("PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .and_then(PageSize::from_rows)
                .unwrap_or_else(|| {
                    tracing::warn!("Invalid PAGE_SIZE '{}', using {}", raw, defaults.page_size.rows());
                    defaults.page_size
                }),
            None => defaults.page_size,
        };

        Self {
            environment: lookup("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            tax_rate_percent,
            tax_policy,
            page_size,
        }
    }

    fn defaults() -> Self {
        Self {
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            tax_rate_percent: 10,
            tax_policy: TaxPolicy::default(),
            page_size: PageSize::default(),
        }
    }

    /// Tax calculator for the configured rate and policy
    pub fn tax_calculator(&self) -> TaxCalculator {
        TaxCalculator::new(self.tax_rate_percent, self.tax_policy)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}
