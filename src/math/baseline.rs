// src/math/baseline.rs

use crate::math::error::MathError;

/// ベースライン補正
/// 数値積分で混入した線形ドリフトを、最初と最後のサンプルを通る直線として
/// 推定して全サンプルから差し引き、先頭値を与えられた初期条件に引き戻す
/// 直線は両端点を厳密に通るため、補正後の先頭値と末尾値はともに `s0` になる
///
/// # 引数
/// - `s`: 補正対象の時刻歴
/// - `t`: 時刻系列 (s)。始点と終点が異なること
/// - `s0`: 先頭サンプルに課す初期条件
///
/// # 戻り値
/// - 補正後の時刻歴。入力と同じ長さの新規バッファ
pub fn baseline_correct(s: &[f64], t: &[f64], s0: f64) -> Result<Vec<f64>, MathError> {
    if s.len() != t.len() {
        return Err(MathError::LengthMismatch {
            left: s.len(),
            right: t.len(),
        });
    }
    if s.len() < 2 {
        return Err(MathError::TooFewSamples {
            required: 2,
            actual: s.len(),
        });
    }

    let last = s.len() - 1;
    let span = t[last] - t[0];
    if span == 0.0 {
        return Err(MathError::DegenerateTimeGrid);
    }

    // 最初と最後の点を通る直線 s_fit(x) = m*x + q
    let m = (s[last] - s[0]) / span;
    let q = s[0] - m * t[0];

    let corrected = s
        .iter()
        .zip(t.iter())
        .map(|(&si, &ti)| si - (m * ti + q) + s0)
        .collect();

    Ok(corrected)
}
