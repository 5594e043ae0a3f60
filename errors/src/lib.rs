use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("ScanError: {0}")]
    ScanError(ScanError),
}

/// Non-fatal scan outcomes
///
/// These never abort tokenization. The affected span is reclassified as plain
/// text and the warning is carried alongside the tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    #[error("Echo statement opened with `{start_tag}` but `{expected_closing}` was not found before end of input")]
    UnterminatedStatement {
        start_tag: String,
        expected_closing: String,
    },
}

macro_rules! impl_from_error {
    ($($error:tt),+) => {$(
        impl From<$error> for TemplateError {
            fn from(e: $error) -> Self {
                TemplateError::$error(e)
            }
        }
    )+};
}

impl_from_error!(ScanError);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_converts_to_template_error() {
        let err: TemplateError = ScanError::UnterminatedStatement {
            start_tag: "{{".to_string(),
            expected_closing: "}}".to_string(),
        }
        .into();

        assert_eq!(
            "ScanError: Echo statement opened with `{{` but `}}` was not found before end of input",
            err.to_string()
        );
    }
}
