// src/analysis/error.rs

use thiserror::Error;

/// 加速度記録の読み込みに関するエラー型
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("記録ファイルの読み込みに失敗しました: {0}")]
    Io(#[from] std::io::Error),
    #[error("{line} 行目を数値2列として解釈できません: {content}")]
    MalformedLine { line: usize, content: String },
    #[error("記録にデータ行が含まれていません。")]
    EmptyRecord,
    #[error("記録の時刻が {line} 行目で増加していません。")]
    NonIncreasingTime { line: usize },
}
