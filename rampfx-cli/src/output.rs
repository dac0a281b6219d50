use std::io::Write;

use rampfx::Rgba;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Hex,
    Csv,
    Json,
}

#[derive(Serialize)]
struct CsvRow {
    index: usize,
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

pub fn write_colors<W: Write>(
    mut writer: W,
    format: OutputFormat,
    colors: &[Rgba],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Hex => {
            for color in colors {
                writeln!(writer, "{}", color.to_hex_string())?;
            }
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(&mut writer);
            for (index, color) in colors.iter().enumerate() {
                wtr.serialize(CsvRow {
                    index,
                    red: color.r,
                    green: color.g,
                    blue: color.b,
                    alpha: color.a,
                })?;
            }
            wtr.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, colors)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
