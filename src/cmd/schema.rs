//! Schema command - print expected input formats

use crate::tax::TaxResult;
use clap::Args;
use schemars::schema_for;

#[derive(Args, Debug)]
pub struct SchemaCommand {
    /// Output format: json-schema or csv-header
    #[arg(value_enum, default_value = "json-schema")]
    format: SchemaFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum SchemaFormat {
    /// JSON Schema for the tax result read by `report --file`
    JsonSchema,
    /// CSV header row for the deductions file read by `report --deductions`
    CsvHeader,
}

impl SchemaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        match self.format {
            SchemaFormat::JsonSchema => {
                let schema = schema_for!(TaxResult);
                println!("{}", serde_json::to_string_pretty(&schema)?);
            }
            SchemaFormat::CsvHeader => println!("{}", DEDUCTION_COLUMNS.join(",")),
        }
        Ok(())
    }
}

const DEDUCTION_COLUMNS: &[&str] = &["name", "value"];
