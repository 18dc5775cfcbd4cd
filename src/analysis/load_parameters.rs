// src/analysis/load_parameters.rs

use std::error::Error;
use std::fs::File;

use serde_yaml::from_reader;

use crate::config::{parameters::IntegrationParameters, records::RecordSet};

/// 解析パラメータの読み込み
pub fn load_integration_parameters(path: &str) -> Result<IntegrationParameters, Box<dyn Error>> {
    let file = File::open(path)?;
    let params: IntegrationParameters = from_reader(file)?;
    Ok(params)
}

/// レコード一覧の読み込み
pub fn load_records(path: &str) -> Result<RecordSet, Box<dyn Error>> {
    let file = File::open(path)?;
    let record_set: RecordSet = from_reader(file)?;
    Ok(record_set)
}
