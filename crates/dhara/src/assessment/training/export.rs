use super::{label_histogram, LabelClass, TrainingSample};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to write dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode dataset rows: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode dataset manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// Summary written next to an exported dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetManifest {
    pub generated_at: DateTime<Utc>,
    pub sample_count: usize,
    pub seed: Option<u64>,
    pub label_counts: Vec<LabelCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCount {
    pub index: usize,
    pub name: String,
    pub count: usize,
}

impl DatasetManifest {
    pub fn new(samples: &[TrainingSample], seed: Option<u64>, generated_at: DateTime<Utc>) -> Self {
        let histogram = label_histogram(samples);
        let label_counts = LabelClass::ALL
            .iter()
            .map(|class| LabelCount {
                index: class.index(),
                name: class.canonical_name().to_string(),
                count: histogram[class.index()],
            })
            .collect();

        Self {
            generated_at,
            sample_count: samples.len(),
            seed,
            label_counts,
        }
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<(), DatasetError> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

/// Write samples as CSV with a `q1..qN,label` header.
pub fn write_samples_csv<W: Write>(
    writer: W,
    samples: &[TrainingSample],
) -> Result<(), DatasetError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let width = samples.first().map(|sample| sample.features.len()).unwrap_or(0);

    let mut header: Vec<String> = (1..=width).map(|column| format!("q{column}")).collect();
    header.push("label".to_string());
    csv_writer.write_record(&header)?;

    for sample in samples {
        let mut row: Vec<String> = sample
            .features
            .iter()
            .map(|value| value.to_string())
            .collect();
        row.push(sample.label.to_string());
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write one `"{index}: {name}"` line per label class.
pub fn write_label_index<W: Write>(mut writer: W) -> Result<(), DatasetError> {
    for class in LabelClass::ALL {
        writeln!(writer, "{}: {}", class.index(), class.canonical_name())?;
    }
    writer.flush()?;
    Ok(())
}
