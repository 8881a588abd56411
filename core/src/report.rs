/// Warning taxonomy for an overlay pass.
///
/// Nothing here is fatal: the overlay is best-effort per document, and every
/// failure either passes the original value through or leaves the document
/// untouched. The caller owns the report; each warning is also mirrored to
/// the `log` facade as it is recorded.
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum OverlayWarning {
    /// No fragment found for a document's id or name.
    MissingTranslation { id: String, name: String },
    /// A term was absent from a substitution table that is expected closed.
    MissingDictionaryEntry { domain: String, term: String },
    /// A unit-bearing field held a non-numeric value; the original is kept.
    Conversion { field: String, detail: String },
    /// The dispatch table has no mapping for the declared document type.
    UnrecognizedDocumentType { raw: String },
    /// An advancement title had no dictionary entry.
    MissingAdvancementTitle { title: String },
    /// An advancement hint had no dictionary entry.
    MissingAdvancementHint { hint: String },
}

impl fmt::Display for OverlayWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTranslation { id, name } => {
                write!(f, "missing translation: {id} {name}")
            }
            Self::MissingDictionaryEntry { domain, term } => {
                write!(f, "no {domain} entry for {term:?}")
            }
            Self::Conversion { field, detail } => {
                write!(f, "cannot convert {field}: {detail}")
            }
            Self::UnrecognizedDocumentType { raw } => {
                write!(f, "no mapping for document type {raw:?}")
            }
            Self::MissingAdvancementTitle { title } => {
                write!(f, "can't find {title:?} advancement title translation")
            }
            Self::MissingAdvancementHint { hint } => {
                write!(f, "can't find hint {hint:?} translation")
            }
        }
    }
}

/// Accumulated outcome of one overlay pass.
#[derive(Debug, Default)]
pub struct OverlayReport {
    warnings: Vec<OverlayWarning>,
    translated: usize,
}

impl OverlayReport {
    pub fn warn(&mut self, warning: OverlayWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn mark_translated(&mut self) {
        self.translated += 1;
    }

    pub fn warnings(&self) -> &[OverlayWarning] {
        &self.warnings
    }

    /// Documents flagged `translated: true` during the pass.
    pub fn translated_count(&self) -> usize {
        self.translated
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn missing_translations(&self) -> usize {
        self.warnings
            .iter()
            .filter(|w| matches!(w, OverlayWarning::MissingTranslation { .. }))
            .count()
    }

    pub fn merge(&mut self, other: OverlayReport) {
        self.warnings.extend(other.warnings);
        self.translated += other.translated;
    }
}
