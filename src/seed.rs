//! Data-preparation step
//!
//! Builds the collected price lists and the IBGE indicators for Rio Grande do
//! Norte and writes them as the three CSV tables the analysis step reads.

use crate::dataset::{
    Dataset, MunicipalRecord, MunicipalTable, PriceRow, PriceSource, PriceTable, WEEKS,
};
use crate::error::Result;
use std::path::Path;

/// Basket cost used for every municipality (R$)
pub const BASKET_COST: f64 = 165.83;

const ITEMS: [&str; 17] = [
    "Arroz", "Feijão", "Carne", "Leite", "Farinha", "Açúcar", "Oleo", "Pão", "Café", "Ovo",
    "Frango", "Bolacha", "Vitamilho", "Banana", "Maça", "Tomate", "Cebola",
];

#[rustfmt::skip]
const IGOR_PRICES: [[f64; WEEKS]; 17] = [
    [4.99, 5.10, 5.15, 4.15],
    [2.19, 7.29, 7.45, 7.59],
    [39.90, 41.50, 44.90, 39.90],
    [5.98, 5.90, 5.85, 5.80],
    [5.00, 5.00, 4.95, 4.24],
    [4.49, 4.49, 4.59, 3.99],
    [9.08, 8.80, 8.20, 2.79],
    [6.19, 5.99, 6.29, 5.55],
    [16.63, 16.00, 15.00, 14.29],
    [19.11, 18.50, 18.00, 17.73],
    [16.90, 17.50, 18.00, 18.50],
    [3.99, 3.99, 4.19, 4.19],
    [2.19, 2.19, 2.29, 2.29],
    [5.50, 5.80, 6.00, 6.40],
    [8.99, 9.50, 9.50, 9.80],
    [4.50, 4.80, 5.50, 6.00],
    [4.00, 4.50, 5.00, 5.50],
];

#[rustfmt::skip]
const GLADSON_PRICES: [[f64; WEEKS]; 17] = [
    [3.99, 4.79, 2.99, 4.35],
    [6.39, 6.39, 4.69, 6.99],
    [42.90, 37.90, 42.89, 42.99],
    [3.99, 5.29, 4.05, 5.20],
    [4.59, 4.79, 4.59, 4.89],
    [4.49, 4.89, 4.49, 4.89],
    [8.99, 8.25, 7.99, 9.25],
    [8.99, 4.99, 8.99, 7.99],
    [15.39, 16.49, 14.99, 15.89],
    [18.00, 13.99, 17.99, 19.90],
    [19.90, 18.99, 18.99, 21.99],
    [3.99, 4.39, 3.99, 5.25],
    [1.39, 1.89, 1.29, 2.39],
    [4.00, 3.99, 4.00, 5.09],
    [8.00, 9.70, 11.25, 0.00],
    [4.59, 3.99, 4.29, 5.29],
    [3.89, 3.85, 3.79, 4.99],
];

/// (name, PIB per capita, average wage in minimum wages, income commitment %)
#[rustfmt::skip]
const MUNICIPALITIES: [(&str, f64, f64, f64); 17] = [
    ("Acari", 12785.32, 1.4, 7.85),
    ("Açu", 24982.91, 1.8, 6.11),
    ("Afonso Bezerra", 12542.16, 1.7, 6.46),
    ("Alexandria", 11145.72, 1.4, 7.85),
    ("Alto do Rodrigues", 41300.47, 2.1, 5.23),
    ("Caicó", 20295.80, 1.7, 8.46),
    ("Currais Novos", 17863.07, 1.7, 6.46),
    ("Guamaré", 125585.40, 3.0, 3.66),
    ("Mossoró", 26570.03, 2.2, 5.00),
    ("Natal", 26972.28, 3.0, 3.66),
    ("Parnamirim", 25121.67, 1.7, 6.46),
    ("Pau dos Ferros", 23028.80, 1.7, 6.46),
    ("Santa Cruz", 15382.76, 1.7, 6.46),
    ("São Gonçalo do Amarante", 18157.09, 1.8, 6.11),
    ("São José de Mipibu", 23357.80, 1.7, 6.46),
    ("Tangará", 12505.26, 1.9, 5.78),
    ("Touros", 24167.89, 1.9, 5.78),
];

fn price_table(source: PriceSource, prices: &[[f64; WEEKS]; 17]) -> Result<PriceTable> {
    let rows = ITEMS
        .iter()
        .zip(prices.iter())
        .map(|(item, weeks)| PriceRow::new(*item, *weeks))
        .collect();
    PriceTable::new(source, rows)
}

fn municipal_table() -> Result<MunicipalTable> {
    let records = MUNICIPALITIES
        .iter()
        .map(|&(name, pib, wage, commitment)| MunicipalRecord {
            name: name.to_string(),
            pib_per_capita: pib,
            average_wage: wage,
            income_commitment: commitment,
            basket_cost: BASKET_COST,
        })
        .collect();
    MunicipalTable::new(records)
}

/// Collected dataset, built in memory
pub fn seed_dataset() -> Result<Dataset> {
    Ok(Dataset {
        igor: price_table(PriceSource::Igor, &IGOR_PRICES)?,
        gladson: price_table(PriceSource::Gladson, &GLADSON_PRICES)?,
        ibge: municipal_table()?,
    })
}

/// Write the three seed tables into `dir`
pub fn write_seed_files<P: AsRef<Path>>(dir: P) -> Result<Dataset> {
    let dataset = seed_dataset()?;
    dataset.save(dir.as_ref())?;
    Ok(dataset)
}
