//! Import and export of the whole ledger document.

use thiserror::Error;

use crate::domain::{LedgerDocument, MonthKey, CURRENT_SCHEMA_VERSION};
use crate::errors::LedgerError;

/// Serialized document plus a filename hint for the download.
#[derive(Debug, Clone)]
pub struct ExportArtifact {
    pub file_name: String,
    pub contents: String,
}

/// Reasons an import payload is refused. State is never touched on failure.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("import payload is not a valid ledger document: {0}")]
    Parse(String),
    #[error("import payload has no `months` mapping")]
    MissingMonths,
    #[error("import schema v{0} is newer than supported")]
    UnsupportedSchema(u8),
    #[error(transparent)]
    Storage(#[from] LedgerError),
}

/// Serializes the full document for download. `current` stamps the file
/// name with the calendar month the export was taken in.
pub fn export(
    document: &LedgerDocument,
    current: MonthKey,
) -> Result<ExportArtifact, LedgerError> {
    let contents = serde_json::to_string_pretty(document)?;
    Ok(ExportArtifact {
        file_name: format!("budget-backup-{current}.json"),
        contents,
    })
}

/// Parses and validates an externally supplied document.
pub fn parse_import(payload: &str) -> Result<LedgerDocument, ImportError> {
    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|err| ImportError::Parse(err.to_string()))?;
    if value
        .get("months")
        .map_or(true, |months| !months.is_object())
    {
        return Err(ImportError::MissingMonths);
    }
    let document: LedgerDocument =
        serde_json::from_value(value).map_err(|err| ImportError::Parse(err.to_string()))?;
    if document.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(ImportError::UnsupportedSchema(document.schema_version));
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_document() -> LedgerDocument {
        LedgerDocument::bootstrap(MonthKey::new(2026, 2).unwrap())
    }

    #[test]
    fn export_embeds_the_month_key_in_the_file_name() {
        let artifact = export(&sample_document(), MonthKey::new(2026, 2).unwrap()).unwrap();
        assert_eq!(artifact.file_name, "budget-backup-2026-02.json");
    }

    #[test]
    fn import_of_export_reproduces_the_document() {
        let document = sample_document();
        let artifact = export(&document, MonthKey::new(2026, 2).unwrap()).unwrap();
        let imported = parse_import(&artifact.contents).unwrap();
        assert_eq!(imported, document);
    }

    #[test]
    fn import_rejects_payloads_without_months() {
        let err = parse_import("{\"activePotId\":\"potA\"}").expect_err("must reject");
        assert!(matches!(err, ImportError::MissingMonths));
        let err = parse_import("[1, 2, 3]").expect_err("must reject");
        assert!(matches!(err, ImportError::MissingMonths));
    }

    #[test]
    fn import_rejects_non_json_payloads() {
        let err = parse_import("not json at all").expect_err("must reject");
        assert!(matches!(err, ImportError::Parse(_)));
    }

    #[test]
    fn import_rejects_newer_schema_versions() {
        let mut document = sample_document();
        document.schema_version = CURRENT_SCHEMA_VERSION + 1;
        let payload = serde_json::to_string(&document).unwrap();
        let err = parse_import(&payload).expect_err("must reject");
        assert!(matches!(err, ImportError::UnsupportedSchema(_)));
    }
}
