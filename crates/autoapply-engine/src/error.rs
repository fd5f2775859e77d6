//! Engine errors.

use thiserror::Error;

use autoapply_dom::PageError;

/// Errors that abort a whole fill/detect pipeline.
///
/// Per-field problems never surface here: a canonical field without a
/// fillable match, or a control that rejects its value, is silently
/// skipped and only lowers the reported fill count.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Not a Workday page")]
    NotTargetPage,

    #[error(transparent)]
    Page(#[from] PageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_target_page_message() {
        assert_eq!(EngineError::NotTargetPage.to_string(), "Not a Workday page");
    }

    #[test]
    fn test_page_error_passthrough() {
        let err: EngineError = PageError::NodeNotFound("n1".to_string()).into();
        assert!(err.to_string().contains("n1"));
    }
}
