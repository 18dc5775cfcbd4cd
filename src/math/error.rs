// src/math/error.rs

use thiserror::Error;

/// 数値計算コアのエラー型
/// いずれも前提条件の検証で前倒しに検出し、部分的な計算結果は返さない
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("時間刻み dt は正の値でなければなりません: {0}")]
    NonPositiveStep(f64),
    #[error("系列の長さが一致しません: {left} と {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("サンプル数が不足しています（最低 {required} 点必要、{actual} 点しかありません）")]
    TooFewSamples { required: usize, actual: usize },
    #[error("時刻グリッドが退化しています（始点と終点が一致）。")]
    DegenerateTimeGrid,
    #[error("時刻系列が index {0} 付近で増加していません。")]
    NonMonotonicTime(usize),
    #[error("補間点 {0} が記録の時刻範囲外です。")]
    OutOfRange(f64),
}
