use codespan_reporting::diagnostic::{Diagnostic, Label};
use errors::{ScanError, TemplateError};
use line_col::LineColLookup;
use serde::{Deserialize, Serialize};
use span::{Span, Spanned};

/// Get a list of diagnoses from a list of tokenizer warnings
///
/// Warnings in this grammar are never fatal, so every diagnosis carries
/// WARNING severity.
pub fn get_diagnoses(warnings: &[Spanned<TemplateError>], source: &str) -> Vec<Diagnosis> {
    warnings
        .iter()
        .map(|(warning, span)| Diagnosis {
            range: get_range(source, span),
            severity: Some(DiagnosisSeverity::WARNING),
            message: warning.to_string(),
        })
        .collect()
}

fn get_range(source: &str, span: &Span) -> DiagnosisRange {
    DiagnosisRange {
        start: get_position(source, span.start),
        end: get_position(source, span.end),
    }
}

/// Map a byte index to a zero based (line, character) position
fn get_position(source: &str, idx: usize) -> DiagnosisPosition {
    let (line, character) = LineColLookup::new(source).get(idx);

    DiagnosisPosition {
        line: (line - 1) as u32,
        character: (character - 1) as u32,
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub range: DiagnosisRange,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<DiagnosisSeverity>,

    pub message: String,
}

#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Deserialize, Serialize)]
#[serde(transparent)]
pub struct DiagnosisSeverity(i32);
impl DiagnosisSeverity {
    pub const ERROR: DiagnosisSeverity = DiagnosisSeverity(1);
    pub const WARNING: DiagnosisSeverity = DiagnosisSeverity(2);
    pub const INFORMATION: DiagnosisSeverity = DiagnosisSeverity(3);
    pub const HINT: DiagnosisSeverity = DiagnosisSeverity(4);
}

#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Copy, Clone, Default, Deserialize, Serialize)]
pub struct DiagnosisPosition {
    pub line: u32,
    pub character: u32,
}

impl DiagnosisPosition {
    pub fn new(line: u32, character: u32) -> DiagnosisPosition {
        DiagnosisPosition { line, character }
    }
}

#[derive(Debug, Eq, PartialEq, Copy, Clone, Default, Deserialize, Serialize)]
pub struct DiagnosisRange {
    /// The range's start position (inclusive)
    pub start: DiagnosisPosition,
    /// The range's end position (exclusive)
    pub end: DiagnosisPosition,
}

impl DiagnosisRange {
    pub fn new(start: DiagnosisPosition, end: DiagnosisPosition) -> DiagnosisRange {
        DiagnosisRange { start, end }
    }
}

pub trait AsDiagnostic {
    fn as_diagnostic(&self, span: &Span) -> Diagnostic<()>;
}

macro_rules! impl_as_dianostic {
    ($($error:tt),+) => {$(
        impl AsDiagnostic for $error {
            fn as_diagnostic(&self, span: &Span) -> Diagnostic<()> {
                Diagnostic::warning()
                    .with_code(stringify!($error))
                    .with_message(self.to_string())
                    .with_labels(vec![Label::primary((), span.clone())])
            }
        }
    )+};
}

impl_as_dianostic!(ScanError);

impl AsDiagnostic for TemplateError {
    fn as_diagnostic(&self, span: &Span) -> Diagnostic<()> {
        match self {
            TemplateError::ScanError(e) => e.as_diagnostic(span),
        }
    }
}
