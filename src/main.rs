// src/main.rs

use std::error::Error;
use std::io::Write;

use accint::analysis::csv::*;
use accint::analysis::framework::*;
use accint::analysis::load_parameters::*;

fn main() -> Result<(), Box<dyn Error>> {
    // 設定とレコード一覧の読み込み
    let params = load_integration_parameters("config/integration.yaml")?;
    let record_set = load_records("config/records.yaml")?;

    // レコードごとの積分処理
    for record in &record_set.records {
        let histories = integrate_record(&params, record)?;

        // CSV出力の設定
        let mut writer: Box<dyn Write> = setup_csv_output(&record.output_path)?;

        // 補正済み変位のCSV行の作成と書き込み
        for (time, displacement) in histories.time.iter().zip(histories.displacement.iter()) {
            let row = create_csv_row(*time, *displacement);
            writer.write_all(row.as_bytes())?;
        }

        eprintln!(
            "レコード {} を積分しました（{} 点, 出力: {}）",
            record.id,
            histories.time.len(),
            record.output_path
        );
    }

    Ok(())
}
