use crate::domain::AppError;
use crate::ports::{Summarizer, SummaryRequest};
use std::sync::{Arc, Mutex};

/// Deterministic summarizer that records every request.
#[derive(Clone, Default)]
pub struct FakeSummarizer {
    pub requests: Arc<Mutex<Vec<SummaryRequest>>>,
    pub fail_on_call: Option<usize>,
}

impl FakeSummarizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the `call`-th request (1-based).
    pub fn failing_on(call: usize) -> Self {
        Self { fail_on_call: Some(call), ..Self::default() }
    }

    pub fn get_requests(&self) -> Vec<SummaryRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Summarizer for FakeSummarizer {
    fn backend(&self) -> &'static str {
        "fake"
    }

    fn summarize(&self, request: &SummaryRequest) -> Result<String, AppError> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(request.clone());
        let call = requests.len();

        if self.fail_on_call == Some(call) {
            return Err(AppError::summarizer("fake", format!("call {} failed", call)));
        }
        Ok(format!("summary {} ({} prompt lines)", call, request.prompt.lines().count()))
    }
}
