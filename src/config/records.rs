// src/config/records.rs

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RecordSet {
    pub records: Vec<RecordInstance>,
}

#[derive(Debug, Deserialize)]
pub struct RecordInstance {
    pub id: String,
    pub input_path: String,  // 加速度記録（セミコロン区切りテキスト）のパス
    pub output_path: String, // 変位履歴CSVの出力先
    pub initial_displacement: f64, // 初期変位 (m)
    pub initial_velocity: f64,     // 初期速度 (m/s)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// test_record_set_from_yaml
    /// レコード一覧の YAML が各フィールドへ読み込まれることを確認します。
    #[test]
    fn test_record_set_from_yaml() {
        let yaml = r#"
records:
  - id: "vessel_sway"
    input_path: "data/vessel_accelerogram.txt"
    output_path: "output/vessel_displacement.csv"
    initial_displacement: 0.021491332862909
    initial_velocity: 0.0176782812923192
"#;
        let set: RecordSet = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(set.records.len(), 1);
        assert_eq!(set.records[0].id, "vessel_sway");
        assert!((set.records[0].initial_displacement - 0.021491332862909).abs() < 1e-15);
        assert!((set.records[0].initial_velocity - 0.0176782812923192).abs() < 1e-15);
    }
}
