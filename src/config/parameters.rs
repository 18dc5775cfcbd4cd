// src/config/parameters.rs

use serde::Deserialize;

use crate::math::IntegrationMethod;

#[derive(Debug, Deserialize, Clone)]
pub struct IntegrationParameters {
    pub dt: f64, // 出力時間刻み (s)
    pub method: IntegrationMethod, // 積分手法 (linear_acceleration / runge_kutta4)
}
