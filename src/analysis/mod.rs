// src/analysis/mod.rs

pub mod accelerogram;
pub mod csv;
pub mod error;
pub mod framework;
pub mod load_parameters;

/// 1レコード分の解析結果を表す構造体
pub struct TimeHistories {
    pub time: Vec<f64>,         // 一様グリッド上の時刻 (s)
    pub acceleration: Vec<f64>, // 再サンプリング後の加速度 (m/s²)
    pub velocity: Vec<f64>,     // ベースライン補正済みの速度 (m/s)
    pub displacement: Vec<f64>, // ベースライン補正済みの変位 (m)
}
