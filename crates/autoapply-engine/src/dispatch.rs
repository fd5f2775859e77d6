//! Request dispatch: one inbound message, one outcome.

use std::sync::Arc;

use tracing::warn;

use autoapply_dom::Page;
use autoapply_protocols::{FillOutcome, Request};

use crate::config::EngineConfig;
use crate::engine::FillEngine;
use crate::status::{StatusKind, StatusWidget};

/// Handle one request against a page. Engine errors surface as a failure
/// outcome and an error notification rather than propagating; the calling
/// surface only ever sees an outcome.
pub async fn handle_request(page: Arc<Page>, config: EngineConfig, request: Request) -> FillOutcome {
    match request {
        Request::FillForm { user_data } => {
            let engine = FillEngine::new(Arc::clone(&page), config.clone());
            engine
                .fill(&user_data)
                .await
                .unwrap_or_else(|error| report_error(&page, &config, error))
        }
        Request::DetectFields => {
            let engine = FillEngine::new(Arc::clone(&page), config.clone());
            engine
                .detect()
                .await
                .unwrap_or_else(|error| report_error(&page, &config, error))
        }
        Request::ShowNotification { message } => {
            StatusWidget::new(page, &config).show(StatusKind::Info, &message);
            FillOutcome::ok(message)
        }
    }
}

fn report_error(page: &Arc<Page>, config: &EngineConfig, error: crate::EngineError) -> FillOutcome {
    warn!(%error, "request failed");
    StatusWidget::new(Arc::clone(page), config).show(StatusKind::Error, &error.to_string());
    FillOutcome::failure(error.to_string())
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
