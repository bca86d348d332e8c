use serde::{Deserialize, Serialize};

use crate::core::count::ParamEntry;
use crate::core::form::FormSnapshot;
use crate::core::guard::{GuardOptions, Verdict};

pub const PROTOCOL_VERSION: u32 = 1;

#[derive(Debug, Deserialize)]
pub struct BridgeRequest {
    pub v: u32,
    pub id: String,
    pub cmd: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct BridgeResponse<T> {
    pub v: u32,
    pub id: String,
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
}

impl<T> BridgeResponse<T> {
    pub fn ok(v: u32, id: String, data: T) -> Self {
        Self {
            v,
            id,
            status: "ok",
            data: Some(data),
            error: None,
            code: None,
        }
    }

    pub fn err(v: u32, id: String, code: &'static str, error: String) -> Self {
        Self {
            v,
            id,
            status: "error",
            data: None,
            error: Some(error),
            code: Some(code),
        }
    }
}

// Payloads

#[derive(Debug, Deserialize)]
pub struct LimitPayload {
    /// Explicit candidates; when absent the process environment is consulted.
    #[serde(default)]
    pub candidates: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub default: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CountPayload {
    pub form: FormSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct InspectPayload {
    pub form: FormSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct CheckPayload {
    pub form: FormSnapshot,
    #[serde(flatten)]
    pub options: GuardOptions,
}

// Response data (keeps the protocol explicit)

#[derive(Debug, Serialize)]
pub struct LimitResult {
    pub limit: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct CountResult {
    pub count: usize,
}

pub type InspectResult = Vec<ParamEntry>;

/// Verdict as reported to the host. `max_count` is null when no limit is
/// known; the guard is disabled then and `exceeded` stays false.
#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub count: usize,
    pub max_count: Option<u64>,
    pub exceeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CheckResult {
    pub fn unguarded(count: usize) -> Self {
        Self {
            count,
            max_count: None,
            exceeded: false,
            message: None,
        }
    }
}

impl From<Verdict> for CheckResult {
    fn from(v: Verdict) -> Self {
        Self {
            count: v.count,
            max_count: Some(v.max_count),
            exceeded: v.exceeded,
            message: v.message,
        }
    }
}
