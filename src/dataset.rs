//! Flat-file data provider
//!
//! Loads the two weekly price tables and the IBGE municipal table once into an
//! immutable [`Dataset`] handle that every analysis receives explicitly.
//!
//! Prices are taken literally: a `0.00` observation is a zero price, not a
//! missing value, and flows into every downstream statistic unchanged.

use crate::error::{CestaError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

/// Number of weekly collection periods per item
pub const WEEKS: usize = 4;

/// Column labels of the weekly price columns, in collection order
pub const WEEK_LABELS: [&str; WEEKS] = ["Semana 1", "Semana 2", "Semana 3", "Semana 4"];

/// File name of the Igor price table
pub const IGOR_FILE: &str = "tabela_igor.csv";

/// File name of the Gladson price table
pub const GLADSON_FILE: &str = "tabela_gladson.csv";

/// File name of the IBGE municipal indicator table
pub const IBGE_FILE: &str = "tabela_ibge.csv";

/// Origin of a weekly price list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PriceSource {
    Igor,
    Gladson,
}

impl PriceSource {
    /// Both sources, in display order
    pub const ALL: [PriceSource; 2] = [PriceSource::Igor, PriceSource::Gladson];

    /// CSV file backing this source
    pub fn file_name(self) -> &'static str {
        match self {
            PriceSource::Igor => IGOR_FILE,
            PriceSource::Gladson => GLADSON_FILE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PriceSource::Igor => "Igor",
            PriceSource::Gladson => "Gladson",
        }
    }
}

impl fmt::Display for PriceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// On-disk row of a price table
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PriceRecord {
    #[serde(rename = "Item")]
    item: String,
    #[serde(rename = "Semana 1")]
    week1: f64,
    #[serde(rename = "Semana 2")]
    week2: f64,
    #[serde(rename = "Semana 3")]
    week3: f64,
    #[serde(rename = "Semana 4")]
    week4: f64,
}

/// One item with its four weekly prices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRow {
    pub item: String,
    pub prices: [f64; WEEKS],
}

impl PriceRow {
    pub fn new(item: impl Into<String>, prices: [f64; WEEKS]) -> Self {
        Self {
            item: item.into(),
            prices,
        }
    }
}

/// Observed prices of one item from one source, in week order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSample {
    pub item: String,
    pub source: PriceSource,
    pub prices: [f64; WEEKS],
}

impl PriceSample {
    /// Observations as a slice for the statistics engine
    pub fn values(&self) -> &[f64] {
        &self.prices
    }

    /// True if any week recorded a literal zero price
    pub fn has_zero(&self) -> bool {
        self.prices.iter().any(|&p| p == 0.0)
    }
}

/// Weekly price table of one source
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable {
    source: PriceSource,
    rows: Vec<PriceRow>,
}

impl PriceTable {
    /// Build a table from rows, validating prices and item uniqueness
    pub fn new(source: PriceSource, rows: Vec<PriceRow>) -> Result<Self> {
        let mut seen = HashSet::new();
        for row in &rows {
            if !seen.insert(row.item.as_str()) {
                return Err(CestaError::Schema {
                    table: source.to_string(),
                    reason: format!("duplicate item '{}'", row.item),
                });
            }
            if let Some(bad) = row.prices.iter().find(|p| !p.is_finite() || **p < 0.0) {
                return Err(CestaError::Schema {
                    table: source.to_string(),
                    reason: format!("invalid price {} for item '{}'", bad, row.item),
                });
            }
        }
        Ok(Self { source, rows })
    }

    /// Parse a table from CSV content with an `Item,Semana 1..Semana 4` header
    pub fn from_reader<R: io::Read>(source: PriceSource, reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut rows = Vec::new();
        for record in csv_reader.deserialize() {
            let record: PriceRecord = record?;
            rows.push(PriceRow::new(
                record.item,
                [record.week1, record.week2, record.week3, record.week4],
            ));
        }
        Self::new(source, rows)
    }

    /// Load a table from a CSV file, failing with `MissingFile` if it is absent
    pub fn load<P: AsRef<Path>>(source: PriceSource, path: P) -> Result<Self> {
        let file = open_table(path.as_ref())?;
        let table = Self::from_reader(source, file)?;
        tracing::debug!(
            "Loaded {} price table from {} ({} items)",
            source,
            path.as_ref().display(),
            table.rows.len()
        );
        Ok(table)
    }

    /// Write the table as CSV
    pub fn to_writer<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in &self.rows {
            csv_writer.serialize(PriceRecord {
                item: row.item.clone(),
                week1: row.prices[0],
                week2: row.prices[1],
                week3: row.prices[2],
                week4: row.prices[3],
            })?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn source(&self) -> PriceSource {
        self.source
    }

    pub fn rows(&self) -> &[PriceRow] {
        &self.rows
    }

    /// Item names in file order; the only valid selection set for this table
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.item.as_str())
    }

    /// Extract the weekly prices of `item`
    pub fn sample(&self, item: &str) -> Result<PriceSample> {
        let row = self
            .rows
            .iter()
            .find(|r| r.item == item)
            .ok_or_else(|| CestaError::not_found(self.source.name(), item))?;

        let sample = PriceSample {
            item: row.item.clone(),
            source: self.source,
            prices: row.prices,
        };
        if sample.has_zero() {
            tracing::debug!(
                "{} sample for '{}' contains a zero price; kept as a literal observation",
                self.source,
                item
            );
        }
        Ok(sample)
    }

    /// Sum of all item prices for each week (basket total)
    pub fn weekly_totals(&self) -> [f64; WEEKS] {
        let mut totals = [0.0; WEEKS];
        for row in &self.rows {
            for (total, price) in totals.iter_mut().zip(row.prices.iter()) {
                *total += price;
            }
        }
        totals
    }
}

/// Socioeconomic indicators of one municipality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MunicipalRecord {
    #[serde(rename = "Municipio")]
    pub name: String,
    /// PIB per capita (R$)
    #[serde(rename = "PIB_Per_Capita")]
    pub pib_per_capita: f64,
    /// Average wage in minimum-wage multiples
    #[serde(rename = "Salario_Medio")]
    pub average_wage: f64,
    /// Share of the monthly income consumed by the basket (%)
    #[serde(rename = "Comprometimento_Renda")]
    pub income_commitment: f64,
    /// Basket cost (R$), identical for every municipality
    #[serde(rename = "Custo_Cesta")]
    pub basket_cost: f64,
}

/// IBGE municipal indicator table
#[derive(Debug, Clone, PartialEq)]
pub struct MunicipalTable {
    records: Vec<MunicipalRecord>,
}

impl MunicipalTable {
    pub const NAME: &'static str = "IBGE";

    pub fn new(records: Vec<MunicipalRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.name.as_str()) {
                return Err(CestaError::Schema {
                    table: Self::NAME.to_string(),
                    reason: format!("duplicate municipality '{}'", record.name),
                });
            }
        }
        Ok(Self { records })
    }

    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let records = csv_reader
            .deserialize()
            .collect::<std::result::Result<Vec<MunicipalRecord>, _>>()?;
        Self::new(records)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = open_table(path.as_ref())?;
        let table = Self::from_reader(file)?;
        tracing::debug!(
            "Loaded IBGE table from {} ({} municipalities)",
            path.as_ref().display(),
            table.records.len()
        );
        Ok(table)
    }

    pub fn to_writer<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for record in &self.records {
            csv_writer.serialize(record)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    pub fn records(&self) -> &[MunicipalRecord] {
        &self.records
    }

    /// Municipality names in alphabetical order
    pub fn names_sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.records.iter().map(|r| r.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Look up a municipality by exact name
    pub fn lookup(&self, name: &str) -> Result<&MunicipalRecord> {
        self.records
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| CestaError::not_found(Self::NAME, name))
    }
}

/// The three source tables, loaded once and read-only afterwards
#[derive(Debug, Clone)]
pub struct Dataset {
    pub igor: PriceTable,
    pub gladson: PriceTable,
    pub ibge: MunicipalTable,
}

impl Dataset {
    /// Load all three tables from `dir`
    ///
    /// Any absent file aborts the load with `MissingFile` before anything is
    /// parsed, so no partial dataset is ever returned.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let paths = table_paths(dir);
        if let Some(missing) = paths.iter().find(|p| !p.exists()) {
            return Err(CestaError::MissingFile {
                path: missing.clone(),
            });
        }

        let [igor_path, gladson_path, ibge_path] = paths;
        let dataset = Self {
            igor: PriceTable::load(PriceSource::Igor, igor_path)?,
            gladson: PriceTable::load(PriceSource::Gladson, gladson_path)?,
            ibge: MunicipalTable::load(ibge_path)?,
        };
        tracing::info!("Dataset loaded from {}", dir.display());
        Ok(dataset)
    }

    /// Write all three tables into `dir`, creating it if needed
    pub fn save<P: AsRef<Path>>(&self, dir: P) -> Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let [igor_path, gladson_path, ibge_path] = table_paths(dir);
        self.igor.to_writer(File::create(igor_path)?)?;
        self.gladson.to_writer(File::create(gladson_path)?)?;
        self.ibge.to_writer(File::create(ibge_path)?)?;
        tracing::info!("Dataset written to {}", dir.display());
        Ok(())
    }

    pub fn price_table(&self, source: PriceSource) -> &PriceTable {
        match source {
            PriceSource::Igor => &self.igor,
            PriceSource::Gladson => &self.gladson,
        }
    }

    /// Extract the sample of `item` from the table of `source`
    pub fn sample(&self, source: PriceSource, item: &str) -> Result<PriceSample> {
        self.price_table(source).sample(item)
    }
}

fn table_paths(dir: &Path) -> [PathBuf; 3] {
    [dir.join(IGOR_FILE), dir.join(GLADSON_FILE), dir.join(IBGE_FILE)]
}

fn open_table(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CestaError::MissingFile {
            path: path.to_path_buf(),
        },
        _ => CestaError::Io(e),
    })
}
