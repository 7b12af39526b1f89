use super::ImageGenerationService;
use crate::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// Recorded arguments of one `redesign` call.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub init_image_b64: String,
    pub prompt: String,
}

#[derive(Clone)]
pub struct MockGenerationClient {
    responses: Arc<Mutex<Vec<String>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockGenerationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(self, response: String) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    pub fn get_call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Default for MockGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockGenerationClient {
    async fn redesign(&self, init_image_b64: &str, prompt: &str) -> Result<String> {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            init_image_b64: init_image_b64.to_string(),
            prompt: prompt.to_string(),
        });
        let count = requests.len();
        drop(requests);

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response: a base64-encoded PNG signature.
            Ok("iVBORw0KGg==".to_string())
        } else {
            let index = (count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}
