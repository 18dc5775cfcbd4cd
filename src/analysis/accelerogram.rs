// src/analysis/accelerogram.rs

use std::fs::File;
use std::io::{BufRead, BufReader};

use crate::analysis::error::AnalysisError;

/// 加速度記録ファイルの読み込み
/// 1列目に時刻 (s)、2列目に加速度 (m/s²) を持つセミコロン区切りテキストを読む
pub fn read_accelerogram(path: &str) -> Result<(Vec<f64>, Vec<f64>), AnalysisError> {
    let file = File::open(path)?;
    parse_accelerogram(BufReader::new(file))
}

/// 加速度記録のパース
/// 空行は読み飛ばし、数値2列として解釈できない行は行番号つきで報告する
///
/// # 引数
/// - `reader`: セミコロン区切り2列（時刻; 加速度）のテキスト
///
/// # 戻り値
/// - 時刻系列と加速度系列 `(t, a)`
pub fn parse_accelerogram<R: BufRead>(reader: R) -> Result<(Vec<f64>, Vec<f64>), AnalysisError> {
    let mut t = Vec::new();
    let mut a = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let line_no = index + 1;
        let mut fields = trimmed.split(';');
        let parsed = match (fields.next(), fields.next()) {
            (Some(c0), Some(c1)) => match (c0.trim().parse::<f64>(), c1.trim().parse::<f64>()) {
                (Ok(time), Ok(accel)) => Some((time, accel)),
                _ => None,
            },
            _ => None,
        };
        let (time, accel) = parsed.ok_or_else(|| AnalysisError::MalformedLine {
            line: line_no,
            content: trimmed.to_string(),
        })?;

        if let Some(&prev) = t.last() {
            if time <= prev {
                return Err(AnalysisError::NonIncreasingTime { line: line_no });
            }
        }

        t.push(time);
        a.push(accel);
    }

    if t.is_empty() {
        return Err(AnalysisError::EmptyRecord);
    }

    Ok((t, a))
}
