//! Bulk generation and delimited-text export.
//!
//! The orchestrator keeps only the latest batch; each run replaces it
//! wholesale.

use uuid::Uuid;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::services::credential_generator::CredentialGeneratorTrait;
use crate::types::errors::{ExportError, GeneratorError};
use crate::types::request::GenerationRequest;

/// Header row of the export format.
pub const EXPORT_HEADER: [&str; 2] = ["index", "value"];

/// The result of one bulk run.
///
/// The generated values are wiped when the batch is replaced or cleared.
#[derive(Debug, Clone, PartialEq, Zeroize, ZeroizeOnDrop)]
pub struct BulkBatch {
    #[zeroize(skip)]
    pub id: Uuid,
    #[zeroize(skip)]
    pub request: GenerationRequest,
    pub items: Vec<String>,
}

/// Composes repeated generator calls into a batch.
#[derive(Debug, Default)]
pub struct BulkOrchestrator {
    last_batch: Option<BulkBatch>,
}

impl BulkOrchestrator {
    pub fn new() -> Self {
        Self { last_batch: None }
    }

    /// Generates exactly `count` independent credentials for `request`.
    ///
    /// On failure the previous batch is left untouched.
    pub fn generate_bulk(
        &mut self,
        generator: &dyn CredentialGeneratorTrait,
        request: &GenerationRequest,
        count: usize,
    ) -> Result<&BulkBatch, GeneratorError> {
        let mut items: Zeroizing<Vec<String>> = Zeroizing::new(Vec::with_capacity(count));
        for _ in 0..count {
            items.push(generator.generate(request)?.value().to_string());
        }
        let batch = BulkBatch {
            id: Uuid::new_v4(),
            request: request.clone(),
            items: std::mem::take(&mut *items),
        };
        tracing::info!(batch = %batch.id, kind = request.kind_name(), count, "bulk batch generated");
        Ok(self.last_batch.insert(batch))
    }

    pub fn last_batch(&self) -> Option<&BulkBatch> {
        self.last_batch.as_ref()
    }

    /// Forgets the stored batch.
    pub fn clear(&mut self) {
        self.last_batch = None;
    }
}

/// Renders values as CSV: an `index,value` header, then one row per value
/// with a 1-based index. Every field is quoted.
pub fn to_delimited_text(items: &[String]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());
    writer.write_record(EXPORT_HEADER)?;
    for (i, item) in items.iter().enumerate() {
        writer.write_record([(i + 1).to_string().as_str(), item.as_str()])?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| ExportError::Csv(e.to_string()))
}

/// Parses text produced by [`to_delimited_text`] back into values, in order.
pub fn parse_delimited_text(text: &str) -> Result<Vec<String>, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().collect::<Vec<_>>() != EXPORT_HEADER {
        return Err(ExportError::Malformed(format!("unexpected header {:?}", headers)));
    }

    let mut items = Vec::new();
    for (row, record) in reader.records().enumerate() {
        let record = record?;
        if record.len() != 2 {
            return Err(ExportError::Malformed(format!("row {} has {} fields", row + 1, record.len())));
        }
        let index: usize = record[0]
            .parse()
            .map_err(|_| ExportError::Malformed(format!("row {} has a bad index", row + 1)))?;
        if index != row + 1 {
            return Err(ExportError::Malformed(format!("row {} is out of order", row + 1)));
        }
        items.push(record[1].to_string());
    }
    Ok(items)
}
