use serde_json::json;
use url::Url;

use crate::event::EngineRequest;
use crate::snapshot::Snapshot;


pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";


#[derive(Debug)]
pub enum CommunicationError {
    Http(reqwest::Error),
    Serde(serde_json::Error),
}

pub struct EngineApi {
    http: reqwest::blocking::Client,
    base_url: Url,
}

impl EngineApi {
    pub fn new(base_url: Url) -> Self {
        EngineApi { http: reqwest::blocking::Client::new(), base_url }
    }

    pub fn fetch_state(&self) -> Result<Snapshot, CommunicationError> {
        let body = self
            .http
            .get(self.endpoint("state"))
            .send()
            .and_then(|response| response.text())
            .map_err(CommunicationError::Http)?;
        serde_json::from_str(&body).map_err(CommunicationError::Serde)
    }

    // One full round trip: send the request, discard the response body and
    // re-read the authoritative state. Every mutation goes through here, so
    // the re-fetch can never be forgotten at a call site.
    pub fn perform(&self, request: &EngineRequest) -> Result<Snapshot, CommunicationError> {
        match request {
            EngineRequest::FetchState => {}
            EngineRequest::Move { mv } => {
                self.post("move", Some(json!({ "move": mv })))?;
            }
            EngineRequest::Merge { pos1, pos2 } => {
                self.post("merge", Some(json!({ "pos1": pos1, "pos2": pos2 })))?;
            }
            EngineRequest::Disintegrate { pos, target_pos } => {
                self.post("disintegrate", Some(json!({ "pos": pos, "target_pos": target_pos })))?;
            }
            EngineRequest::Reset => {
                self.post("reset", None)?;
            }
        }
        self.fetch_state()
    }

    fn post(&self, path: &str, body: Option<serde_json::Value>) -> Result<(), CommunicationError> {
        let mut request = self.http.post(self.endpoint(path));
        if let Some(body) = body {
            request = request.json(&body);
        }
        request.send().map(|_| ()).map_err(CommunicationError::Http)
    }

    fn endpoint(&self, path: &str) -> Url {
        // Static path segments; join only fails on a malformed base URL,
        // which `new` callers rule out by construction.
        self.base_url.join(path).expect("endpoint path")
    }
}
