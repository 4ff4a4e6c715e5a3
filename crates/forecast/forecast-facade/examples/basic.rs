//! Basic example: upload-style CSV to SARIMA forecast
//!
//! Run with: cargo run --example basic -p forecast-facade

use forecast_facade::prelude::*;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== forecast-facade Basic Example ===\n");

    // Four years of quarterly sales with a trend and a fixed seasonal shape
    let mut csv = String::from("quarter,value\n");
    for t in 0..16 {
        let value = 200.0 + 2.5 * t as f64 + [12.0, -4.0, -15.0, 7.0][t % 4];
        csv.push_str(&format!("{t},{value}\n"));
    }

    // 1. Ingestion
    let table = ingest(csv.as_bytes())?;
    println!("1. Ingested {} rows, columns {:?}", table.num_rows(), table.columns());

    // 2. Records to series
    let records: Vec<_> = table
        .rows()
        .iter()
        .map(|row| {
            let mut record = serde_json::Map::new();
            for (name, cell) in table.columns().iter().zip(row) {
                record.insert(name.clone(), cell.to_json());
            }
            record
        })
        .collect();
    let decoded = series_from_records(&records, "value")?;
    println!("2. Series of {} observations ({} dropped)", decoded.series.len(), decoded.dropped);

    // 3. Validation
    let params = ParameterValidator::new().validate(&json!({
        "order": [0, 1, 0],
        "seasonal_order": [0, 1, 0, 4],
        "steps": 4
    }))?;
    println!("3. Parameters: {:?}", params);

    // 4. Forecast
    let forecast = SarimaForecaster::new().forecast(&decoded.series, &params)?;
    println!(
        "4. Forecast: {:?}",
        forecast.predictions().iter().map(|x| format!("{:.1}", x)).collect::<Vec<_>>()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
