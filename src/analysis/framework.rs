// src/analysis/framework.rs

use std::error::Error;

use crate::analysis::accelerogram::read_accelerogram;
use crate::analysis::TimeHistories;
use crate::config::parameters::IntegrationParameters;
use crate::config::records::RecordInstance;
use crate::math::{
    baseline_correct, build_uniform_grid, contains_non_finite, integrate, resample_linear,
};

/// 1レコード分の積分処理の実行
/// 記録の読み込み → 一様グリッドへの再サンプリング → 積分 → ベースライン補正の順に行う
/// 速度と変位の補正はそれぞれの初期条件を基準に独立に実施する
///
/// # 引数
/// - `params`: 共通の解析パラメータ（時間刻み・積分手法）
/// - `record`: 対象レコード（入出力パスと初期条件）
///
/// # 戻り値
/// - 補正済みの時刻歴一式
pub fn integrate_record(
    params: &IntegrationParameters,
    record: &RecordInstance,
) -> Result<TimeHistories, Box<dyn Error>> {
    // 記録の読み込み
    let (raw_t, raw_a) = read_accelerogram(&record.input_path)?;

    // 一様時間グリッドへの再サンプリング
    let time = build_uniform_grid(raw_t[0], raw_t[raw_t.len() - 1], params.dt)?;
    let acceleration = resample_linear(&raw_t, &raw_a, &time)?;

    // 積分
    let (raw_y, raw_v) = integrate(
        params.method,
        &acceleration,
        &time,
        params.dt,
        record.initial_displacement,
        record.initial_velocity,
    )?;

    // ベースライン補正
    let velocity = baseline_correct(&raw_v, &time, record.initial_velocity)?;
    let displacement = baseline_correct(&raw_y, &time, record.initial_displacement)?;

    // 非有限値の検出（致命的エラーとはせず警告に留める）
    if contains_non_finite(&velocity) || contains_non_finite(&displacement) {
        eprintln!(
            "警告: レコード {} の積分結果に非有限値が含まれています。",
            record.id
        );
    }

    Ok(TimeHistories {
        time,
        acceleration,
        velocity,
        displacement,
    })
}
