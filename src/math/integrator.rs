// src/math/integrator.rs

use serde::Deserialize;

use crate::math::error::MathError;

/// 積分手法の選択肢
/// 呼び出し側が明示的に手法を選択する（YAML設定からも指定できる）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationMethod {
    /// 区分線形加速度を仮定した閉形式の漸化式
    LinearAcceleration,
    /// 4次ルンゲ・クッタ法
    RungeKutta4,
}

/// 積分の前提条件（時間刻みと系列長）の検証
fn validate_inputs(a: &[f64], t: &[f64], dt: f64) -> Result<(), MathError> {
    if dt <= 0.0 {
        return Err(MathError::NonPositiveStep(dt));
    }
    if a.len() != t.len() {
        return Err(MathError::LengthMismatch {
            left: a.len(),
            right: t.len(),
        });
    }
    if a.is_empty() {
        return Err(MathError::TooFewSamples {
            required: 1,
            actual: 0,
        });
    }
    Ok(())
}

/// 区分線形加速度法による加速度記録の積分
/// 加速度が隣接サンプル間で線形に変化すると仮定すると、
/// 1ステップ分の速度と変位はランプ入力の閉形式積分として厳密に求められる
///
/// # 引数
/// - `a`: 加速度系列 (m/s²)
/// - `t`: 時刻系列 (s)。一様間隔であることを前提とする
/// - `dt`: 時間刻み (s)。呼び出し側が与え、`t` から再導出はしない
/// - `y0`: 初期変位 (m)
/// - `v0`: 初期速度 (m/s)
///
/// # 戻り値
/// - 変位履歴と速度履歴 `(y, v)`。いずれも入力と同じ長さの新規バッファ
pub fn integrate_linear(
    a: &[f64],
    t: &[f64],
    dt: f64,
    y0: f64,
    v0: f64,
) -> Result<(Vec<f64>, Vec<f64>), MathError> {
    validate_inputs(a, t, dt)?;

    let n = t.len();
    let mut y = vec![0.0; n];
    let mut v = vec![0.0; n];

    // 初期条件の設定
    y[0] = y0;
    v[0] = v0;

    for i in 0..n - 1 {
        // 区間内の加速度勾配
        let a1 = (a[i + 1] - a[i]) / dt;

        // 線形ランプの厳密積分による速度更新
        v[i + 1] = v[i] + dt * a[i] + (dt * dt / 2.0) * a1;

        // 線形ランプの厳密二重積分による変位更新
        y[i + 1] = y[i] + dt * v[i] + (dt * dt / 2.0) * a[i] + (dt * dt * dt / 6.0) * a1;
    }

    Ok((y, v))
}

/// 4次ルンゲ・クッタ法による加速度記録の積分
/// 速度は加速度を強制項とする RK4 ステージで更新する
/// （k1〜k3 は区間前のサンプル、k4 は区間のサンプルを参照し、
/// 先頭ステップのみ区間前サンプルが存在しないため `a[0]` にクランプする）
/// 変位は区間両端の速度を線形補間した強制項による RK4 で更新する
///
/// # 引数
/// - `a`: 加速度系列 (m/s²)
/// - `t`: 時刻系列 (s)。一様間隔であることを前提とする
/// - `dt`: 時間刻み (s)
/// - `y0`: 初期変位 (m)
/// - `v0`: 初期速度 (m/s)
///
/// # 戻り値
/// - 変位履歴と速度履歴 `(y, v)`
pub fn integrate_rk4(
    a: &[f64],
    t: &[f64],
    dt: f64,
    y0: f64,
    v0: f64,
) -> Result<(Vec<f64>, Vec<f64>), MathError> {
    validate_inputs(a, t, dt)?;

    let n = t.len();
    let mut y = vec![0.0; n];
    let mut v = vec![0.0; n];

    // 初期条件の設定
    y[0] = y0;
    v[0] = v0;

    for i in 0..n - 1 {
        // 先頭ステップは区間前のサンプルを持たない
        let a_prev = if i == 0 { a[0] } else { a[i - 1] };

        // 速度の RK4 ステージ
        let k1 = a_prev;
        let k2 = a_prev + 0.5 * k1 * dt;
        let k3 = a_prev + 0.5 * k2 * dt;
        let k4 = a[i] + k3 * dt;
        v[i + 1] = v[i] + (dt / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4);

        // 変位の RK4 ステージ（区間両端の速度を線形補間した強制項）
        let k1 = v[i];
        let k2 = 0.5 * (v[i] + v[i + 1]);
        let k3 = k2;
        let k4 = v[i + 1];
        y[i + 1] = y[i] + (dt / 6.0) * (k1 + 2.0 * k2 + 2.0 * k3 + k4);
    }

    Ok((y, v))
}

/// 指定した手法による加速度記録の積分
///
/// # 引数
/// - `method`: 積分手法
/// - `a`, `t`, `dt`, `y0`, `v0`: 各積分関数と同じ
///
/// # 戻り値
/// - 変位履歴と速度履歴 `(y, v)`
pub fn integrate(
    method: IntegrationMethod,
    a: &[f64],
    t: &[f64],
    dt: f64,
    y0: f64,
    v0: f64,
) -> Result<(Vec<f64>, Vec<f64>), MathError> {
    match method {
        IntegrationMethod::LinearAcceleration => integrate_linear(a, t, dt, y0, v0),
        IntegrationMethod::RungeKutta4 => integrate_rk4(a, t, dt, y0, v0),
    }
}
