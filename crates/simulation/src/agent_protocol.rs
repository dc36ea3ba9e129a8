//! Agent text protocol types for headless estimator sessions.
//!
//! Defines the JSON command/response envelope that scripts and test harnesses
//! use to query the estimator over newline-delimited JSON. The line loop
//! lives in [`crate::agent_session`].

use serde::{Deserialize, Serialize};

use crate::lagoon_methane::{Climate, EstimateResult, Horizon, Location, Preset};

// ---------------------------------------------------------------------------
// Commands (session input → simulation)
// ---------------------------------------------------------------------------

/// A single command sent by the external agent.
///
/// Each input line is parsed as one `AgentCommand`. The `cmd` field acts as
/// the discriminator tag. Unknown sites, horizons and presets fail at parse
/// time; the herd size is range-checked when the command is processed so the
/// error can name the allowed range.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum AgentCommand {
    /// Estimate one request.
    #[serde(rename = "estimate")]
    Estimate {
        herd_size: u32,
        location: Location,
        horizon: Horizon,
    },

    /// Estimate a quick preset, at a daily horizon unless one is given.
    #[serde(rename = "preset")]
    Preset {
        preset: Preset,
        #[serde(default)]
        horizon: Horizon,
    },

    /// List the three sites with their climate class and emission rate.
    #[serde(rename = "list_locations")]
    ListLocations,

    /// Gracefully shut down the agent session.
    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (simulation → session output)
// ---------------------------------------------------------------------------

/// Every response includes the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    /// Monotonically increasing protocol version (currently 1).
    pub protocol_version: u32,
    /// The response payload, flattened into this object.
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

/// Site description returned by `list_locations`.
#[derive(Debug, Clone, Serialize)]
pub struct LocationInfo {
    pub name: Location,
    pub climate: Climate,
    pub ft3_per_cow_day: f64,
}

impl LocationInfo {
    pub fn all() -> Vec<LocationInfo> {
        Location::ALL
            .into_iter()
            .map(|loc| LocationInfo {
                name: loc,
                climate: loc.climate(),
                ft3_per_cow_day: loc.ft3_per_cow_day(),
            })
            .collect()
    }
}

/// Tagged payload variants for agent responses.
#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    /// The estimator is ready to accept commands.
    #[serde(rename = "ready")]
    Ready,

    /// Result of an `estimate` or `preset` command.
    #[serde(rename = "estimate")]
    Estimate { result: EstimateResult },

    /// Result of `list_locations`.
    #[serde(rename = "locations")]
    Locations { locations: Vec<LocationInfo> },

    /// An error occurred while processing the command.
    #[serde(rename = "error")]
    Error { message: String },

    /// The session is ending (response to `quit`).
    #[serde(rename = "goodbye")]
    Goodbye,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

/// Convenience constructor that wraps a payload with the current protocol version.
pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}

/// Serialize a response as one protocol line.
///
/// Serialization of these types cannot fail for finite numbers; if it ever
/// does, an `error` line is returned so the stream stays parseable.
pub fn encode_response(response: &AgentResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| encode_failure(&e.to_string()))
}

fn encode_failure(reason: &str) -> String {
    serde_json::json!({
        "protocol_version": PROTOCOL_VERSION,
        "type": "error",
        "message": format!("encode failed: {reason}"),
    })
    .to_string()
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
