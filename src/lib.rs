//! Cesta - statistical analysis of basic food basket prices
//!
//! This library loads two weekly grocery price lists and the IBGE municipal
//! indicators for Rio Grande do Norte, and provides the price-trend
//! comparison, the inferential statistics lab (descriptive statistics,
//! Student-t confidence interval, two-sample t-test) and the socioeconomic
//! lookup panel, with text, JSON, CSV and HTML renderers.

pub mod analysis;
pub mod cli;
pub mod csv_output;
pub mod dataset;
pub mod error;
pub mod histogram;
pub mod html_output;
pub mod inference;
pub mod json_output;
pub mod seed;
pub mod socioeconomic;
pub mod trend;

pub use error::{CestaError, Result};
