use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::bands::ExperienceBand;
use super::domain::Industry;
use super::role::RoleCategory;
use crate::config::BenchmarkConfig;

const BUNDLED_GENERAL: &str = include_str!("../../data/general_benchmarks.csv");
const BUNDLED_PLATFORM: &str = include_str!("../../data/platform_benchmarks.csv");

/// Industry substituted by the generic-industry fallback.
pub const GENERIC_INDUSTRY: Industry = Industry::Other;
/// Tier substituted by the mid-tier fallback.
pub const MID_TIER: u8 = 3;

/// One compensation benchmark, keyed by role, industry, tier and experience band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRow {
    pub role_category: RoleCategory,
    pub industry: Industry,
    pub tier: u8,
    pub exp_band: ExperienceBand,
    pub annual_usd_p50: u32,
    pub annual_usd_p75: u32,
}

impl BenchmarkRow {
    fn key(&self) -> BenchmarkKey {
        BenchmarkKey {
            role_category: self.role_category,
            industry: self.industry,
            tier: self.tier,
            exp_band: self.exp_band,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct BenchmarkKey {
    role_category: RoleCategory,
    industry: Industry,
    tier: u8,
    exp_band: ExperienceBand,
}

/// Which rung of the fallback ladder produced a lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStep {
    Exact,
    GenericIndustry,
    MidTier,
    RoleOnly,
    TableDefault,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkMatch<'a> {
    pub row: &'a BenchmarkRow,
    pub step: LookupStep,
}

#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error("benchmark table '{table}' contains no rows")]
    Empty { table: String },
    #[error("benchmark table '{table}' row {row}: {reason}")]
    InvalidRow {
        table: String,
        row: usize,
        reason: String,
    },
    #[error("benchmark table '{table}' could not be parsed: {source}")]
    Csv {
        table: String,
        #[source]
        source: csv::Error,
    },
    #[error("failed to open benchmark file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read-only benchmark table with precomputed indices.
///
/// Rows keep their file order. Both indices record the first occurrence of a
/// key, so indexed lookups return the same row a linear scan would.
#[derive(Debug, Clone)]
pub struct BenchmarkTable {
    name: String,
    rows: Vec<BenchmarkRow>,
    exact: HashMap<BenchmarkKey, usize>,
    first_by_role: HashMap<RoleCategory, usize>,
}

impl BenchmarkTable {
    pub fn from_rows(
        name: impl Into<String>,
        rows: Vec<BenchmarkRow>,
    ) -> Result<Self, BenchmarkError> {
        let name = name.into();
        if rows.is_empty() {
            return Err(BenchmarkError::Empty { table: name });
        }

        let mut exact = HashMap::new();
        let mut first_by_role = HashMap::new();
        for (index, row) in rows.iter().enumerate() {
            validate_row(&name, index, row)?;
            exact.entry(row.key()).or_insert(index);
            first_by_role.entry(row.role_category).or_insert(index);
        }

        Ok(Self {
            name,
            rows,
            exact,
            first_by_role,
        })
    }

    pub fn from_reader<R: Read>(name: impl Into<String>, reader: R) -> Result<Self, BenchmarkError> {
        let name = name.into();
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut rows = Vec::new();
        for record in csv_reader.deserialize::<BenchmarkRow>() {
            let row = record.map_err(|source| BenchmarkError::Csv {
                table: name.clone(),
                source,
            })?;
            rows.push(row);
        }

        Self::from_rows(name, rows)
    }

    pub fn from_path(name: impl Into<String>, path: &Path) -> Result<Self, BenchmarkError> {
        let file = File::open(path).map_err(|source| BenchmarkError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(name, file)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> &[BenchmarkRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Find the best benchmark row, widening the match until one is found.
    ///
    /// Precedence: exact key, generic industry, mid tier, first row for the
    /// role, first row of the table. The order is part of the contract.
    pub fn lookup(
        &self,
        role_category: RoleCategory,
        industry: Industry,
        tier: u8,
        exp_band: ExperienceBand,
    ) -> BenchmarkMatch<'_> {
        let candidates = [
            (
                LookupStep::Exact,
                BenchmarkKey {
                    role_category,
                    industry,
                    tier,
                    exp_band,
                },
            ),
            (
                LookupStep::GenericIndustry,
                BenchmarkKey {
                    role_category,
                    industry: GENERIC_INDUSTRY,
                    tier,
                    exp_band,
                },
            ),
            (
                LookupStep::MidTier,
                BenchmarkKey {
                    role_category,
                    industry,
                    tier: MID_TIER,
                    exp_band,
                },
            ),
        ];

        for (step, key) in candidates {
            if let Some(&index) = self.exact.get(&key) {
                return self.matched(index, step);
            }
        }

        if let Some(&index) = self.first_by_role.get(&role_category) {
            return self.matched(index, LookupStep::RoleOnly);
        }

        self.matched(0, LookupStep::TableDefault)
    }

    fn matched(&self, index: usize, step: LookupStep) -> BenchmarkMatch<'_> {
        if step != LookupStep::Exact {
            debug!(table = %self.name, ?step, row = index, "benchmark lookup fell back");
        }
        BenchmarkMatch {
            row: &self.rows[index],
            step,
        }
    }
}

fn validate_row(table: &str, index: usize, row: &BenchmarkRow) -> Result<(), BenchmarkError> {
    let invalid = |reason: String| BenchmarkError::InvalidRow {
        table: table.to_string(),
        row: index + 1,
        reason,
    };

    if row.annual_usd_p50 == 0 {
        return Err(invalid("annual_usd_p50 must be positive".to_string()));
    }
    if row.annual_usd_p75 < row.annual_usd_p50 {
        return Err(invalid(format!(
            "annual_usd_p75 {} is below annual_usd_p50 {}",
            row.annual_usd_p75, row.annual_usd_p50
        )));
    }
    Ok(())
}

fn table_or_bundled(
    name: &str,
    path: Option<&Path>,
    bundled: &str,
) -> Result<BenchmarkTable, BenchmarkError> {
    match path {
        Some(path) => BenchmarkTable::from_path(name, path),
        None => BenchmarkTable::from_reader(name, bundled.as_bytes()),
    }
}

/// The two reference tables blended by the engine.
#[derive(Debug, Clone)]
pub struct BenchmarkSet {
    pub general: BenchmarkTable,
    pub platform: BenchmarkTable,
}

impl BenchmarkSet {
    pub fn new(general: BenchmarkTable, platform: BenchmarkTable) -> Self {
        Self { general, platform }
    }

    /// Tables compiled into the crate.
    pub fn bundled() -> Result<Self, BenchmarkError> {
        Self::load(&BenchmarkConfig::default())
    }

    /// Load each table from its configured path, or the bundled copy when unset.
    pub fn load(config: &BenchmarkConfig) -> Result<Self, BenchmarkError> {
        let general = table_or_bundled("general", config.general_path.as_deref(), BUNDLED_GENERAL)?;
        let platform =
            table_or_bundled("platform", config.platform_path.as_deref(), BUNDLED_PLATFORM)?;

        info!(
            general_rows = general.len(),
            platform_rows = platform.len(),
            "benchmark tables loaded"
        );

        Ok(Self { general, platform })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        role_category: RoleCategory,
        industry: Industry,
        tier: u8,
        exp_band: ExperienceBand,
        p50: u32,
    ) -> BenchmarkRow {
        BenchmarkRow {
            role_category,
            industry,
            tier,
            exp_band,
            annual_usd_p50: p50,
            annual_usd_p75: p50 + 10_000,
        }
    }

    fn fixture() -> BenchmarkTable {
        BenchmarkTable::from_rows(
            "fixture",
            vec![
                row(RoleCategory::Design, Industry::Creative, 2, ExperienceBand::Entry, 40_000),
                row(RoleCategory::Software, Industry::Tech, 1, ExperienceBand::Experienced, 150_000),
                row(RoleCategory::Software, Industry::Tech, 1, ExperienceBand::Experienced, 999_000),
                row(RoleCategory::Software, Industry::Other, 4, ExperienceBand::Experienced, 60_000),
                row(RoleCategory::Software, Industry::Creative, 3, ExperienceBand::Veteran, 90_000),
                row(RoleCategory::Data, Industry::Other, 2, ExperienceBand::Entry, 55_000),
                row(RoleCategory::Data, Industry::Tech, 3, ExperienceBand::Entry, 65_000),
            ],
        )
        .expect("fixture table is valid")
    }

    #[test]
    fn exact_match_returns_first_row_in_table_order() {
        let table = fixture();
        let found = table.lookup(
            RoleCategory::Software,
            Industry::Tech,
            1,
            ExperienceBand::Experienced,
        );
        assert_eq!(found.step, LookupStep::Exact);
        assert_eq!(found.row.annual_usd_p50, 150_000);
    }

    #[test]
    fn generic_industry_is_tried_before_mid_tier() {
        let table = fixture();
        let found = table.lookup(RoleCategory::Data, Industry::Tech, 2, ExperienceBand::Entry);
        assert_eq!(found.step, LookupStep::GenericIndustry);
        assert_eq!(found.row.annual_usd_p50, 55_000);
    }

    #[test]
    fn mid_tier_fallback_keeps_industry() {
        let table = fixture();
        let found = table.lookup(RoleCategory::Data, Industry::Tech, 5, ExperienceBand::Entry);
        assert_eq!(found.step, LookupStep::MidTier);
        assert_eq!(found.row.annual_usd_p50, 65_000);

        let found = table.lookup(
            RoleCategory::Software,
            Industry::Creative,
            5,
            ExperienceBand::Veteran,
        );
        assert_eq!(found.step, LookupStep::MidTier);
        assert_eq!(found.row.annual_usd_p50, 90_000);
    }

    #[test]
    fn role_only_fallback_ignores_other_keys() {
        let table = fixture();
        let found = table.lookup(
            RoleCategory::Software,
            Industry::Industrial,
            5,
            ExperienceBand::Entry,
        );
        assert_eq!(found.step, LookupStep::RoleOnly);
        assert_eq!(found.row.annual_usd_p50, 150_000);
    }

    #[test]
    fn unknown_role_falls_back_to_first_row() {
        let table = fixture();
        let found = table.lookup(
            RoleCategory::Finance,
            Industry::Tech,
            1,
            ExperienceBand::Entry,
        );
        assert_eq!(found.step, LookupStep::TableDefault);
        assert_eq!(found.row.role_category, RoleCategory::Design);
    }

    #[test]
    fn rejects_empty_tables() {
        let err = BenchmarkTable::from_rows("empty", Vec::new()).expect_err("empty table rejected");
        assert!(matches!(err, BenchmarkError::Empty { .. }));

        let header_only = "role_category,industry,tier,exp_band,annual_usd_p50,annual_usd_p75\n";
        let err = BenchmarkTable::from_reader("header", header_only.as_bytes())
            .expect_err("header-only csv rejected");
        assert!(matches!(err, BenchmarkError::Empty { .. }));
    }

    #[test]
    fn rejects_inverted_percentiles() {
        let mut bad = row(RoleCategory::Sales, Industry::Tech, 1, ExperienceBand::Entry, 50_000);
        bad.annual_usd_p75 = 40_000;
        let err = BenchmarkTable::from_rows("bad", vec![bad]).expect_err("inverted row rejected");
        match err {
            BenchmarkError::InvalidRow { row, .. } => assert_eq!(row, 1),
            other => panic!("expected invalid row, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_categories_in_csv() {
        let csv = "role_category,industry,tier,exp_band,annual_usd_p50,annual_usd_p75\n\
                   astronaut,tech,1,0-2,100000,120000\n";
        let err = BenchmarkTable::from_reader("csv", csv.as_bytes()).expect_err("bad role rejected");
        assert!(matches!(err, BenchmarkError::Csv { .. }));
    }

    #[test]
    fn parses_trimmed_csv_rows() {
        let csv = "role_category, industry, tier, exp_band, annual_usd_p50, annual_usd_p75\n\
                   finance, industrial, 2, 10+, 88000, 101000\n";
        let table = BenchmarkTable::from_reader("csv", csv.as_bytes()).expect("csv parses");
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].exp_band, ExperienceBand::Veteran);
        assert_eq!(table.rows()[0].industry, Industry::Industrial);
    }

    #[test]
    fn bundled_tables_cover_every_role() {
        let set = BenchmarkSet::bundled().expect("bundled tables load");
        for table in [&set.general, &set.platform] {
            for (category, _) in crate::scoring::role::ROLE_KEYWORDS {
                assert!(
                    table.rows().iter().any(|row| row.role_category == category),
                    "{} table missing {category}",
                    table.name()
                );
            }
        }
    }

    #[test]
    fn bundled_matches_default_config_load() {
        let bundled = BenchmarkSet::bundled().expect("bundled tables load");
        let loaded = BenchmarkSet::load(&BenchmarkConfig::default()).expect("default config loads");
        assert_eq!(bundled.general.rows(), loaded.general.rows());
        assert_eq!(bundled.platform.rows(), loaded.platform.rows());
    }
}
