// src/math/interpolate.rs

use crate::math::error::MathError;

/// 一様時間グリッドの生成
/// `t_start` から `dt` 刻みで、`t_end` を超えない最後の点までを生成する
/// 終端は記録範囲内に収め、後段の補間が範囲外参照にならないようにする
///
/// # 引数
/// - `t_start`: 開始時刻 (s)
/// - `t_end`: 終了時刻 (s)。`t_start` より大きいこと
/// - `dt`: 時間刻み (s)
///
/// # 戻り値
/// - 一様間隔の時刻系列
pub fn build_uniform_grid(t_start: f64, t_end: f64, dt: f64) -> Result<Vec<f64>, MathError> {
    if dt <= 0.0 {
        return Err(MathError::NonPositiveStep(dt));
    }
    if t_end <= t_start {
        return Err(MathError::DegenerateTimeGrid);
    }

    // 丸め誤差で終端の1点を取りこぼさないよう、わずかな許容を加えてから切り捨てる
    let steps = ((t_end - t_start) / dt + 1e-9).floor() as usize;
    let grid = (0..=steps).map(|k| t_start + k as f64 * dt).collect();
    Ok(grid)
}

/// 区分線形補間による再サンプリング
/// 元の記録 `(t, x)` の値を、指定グリッド上へ線形補間で写し取る
///
/// # 引数
/// - `t`: 元の時刻系列 (s)。狭義単調増加であること
/// - `x`: 元の値系列。`t` と同じ長さ
/// - `grid`: 補間先の時刻系列。`[t[0], t[N-1]]` の範囲内であること（端点は丸め誤差を許容）
///
/// # 戻り値
/// - グリッドと同じ長さの補間値系列
pub fn resample_linear(t: &[f64], x: &[f64], grid: &[f64]) -> Result<Vec<f64>, MathError> {
    if t.len() != x.len() {
        return Err(MathError::LengthMismatch {
            left: t.len(),
            right: x.len(),
        });
    }
    if t.len() < 2 {
        return Err(MathError::TooFewSamples {
            required: 2,
            actual: t.len(),
        });
    }
    for i in 0..t.len() - 1 {
        if t[i + 1] <= t[i] {
            return Err(MathError::NonMonotonicTime(i + 1));
        }
    }

    let last = t.len() - 1;
    let t_first = t[0];
    let t_last = t[last];

    // 端点の丸め誤差はグリッド生成由来のものだけを許容する
    let tol = (t_last - t_first) * 1e-9;

    let mut out = Vec::with_capacity(grid.len());
    for &gi in grid {
        if gi < t_first - tol || gi > t_last + tol {
            return Err(MathError::OutOfRange(gi));
        }
        let ti = gi.clamp(t_first, t_last);

        // ti を含む区間 [t[j], t[j+1]] を二分探索で特定する
        let j = match t.partition_point(|&tk| tk <= ti) {
            0 => 0,
            p if p > last => last - 1,
            p => p - 1,
        };
        let w = (ti - t[j]) / (t[j + 1] - t[j]);
        out.push(x[j] + w * (x[j + 1] - x[j]));
    }
    Ok(out)
}
