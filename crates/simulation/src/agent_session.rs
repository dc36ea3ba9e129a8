//! Headless estimator session driven by the JSON line protocol in
//! [`crate::agent_protocol`].
//!
//! [`AgentSession`] owns a `MinimalPlugins` app with [`SimulationPlugin`], so
//! every command goes through the same `EstimateInputs` → recompute path the
//! poster uses. [`AgentSession::run`] reads one command per line from any
//! `BufRead` and writes one response per line to any `Write`:
//!
//! ```text
//! > {"cmd":"estimate","herd_size":2000,"location":"Lynden","horizon":"month"}
//! < {"protocol_version":1,"type":"estimate","result":{...}}
//! ```

use std::io::{BufRead, Write};

use bevy::prelude::*;

use crate::agent_protocol::{
    encode_response, make_response, AgentCommand, AgentResponse, LocationInfo, ResponsePayload,
};
use crate::lagoon_methane::{CurrentEstimate, EstimateInputs, EstimateRequest, HerdSize, Preset};
use crate::SimulationPlugin;

/// A headless estimator app answering protocol commands.
pub struct AgentSession {
    app: App,
}

impl Default for AgentSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AgentSession {
    pub fn new() -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(SimulationPlugin);

        // Initial update so the startup estimate is computed.
        app.update();
        Self { app }
    }

    /// The inputs the last command left behind.
    pub fn inputs(&self) -> &EstimateInputs {
        self.app.world().resource::<EstimateInputs>()
    }

    /// Run the line loop until `quit` or end of input.
    ///
    /// A `ready` line is written first. Blank lines are skipped, and a line
    /// that does not parse gets an `error` response without ending the loop.
    /// Only I/O failures are returned as errors.
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> std::io::Result<()> {
        write_line(&mut writer, &make_response(ResponsePayload::Ready))?;

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<AgentCommand>(&line) {
                Ok(cmd) => self.process_command(cmd),
                Err(e) => {
                    debug!("Rejected protocol line: {e}");
                    make_response(ResponsePayload::Error {
                        message: format!("Parse error: {e}"),
                    })
                }
            };
            let is_goodbye = matches!(response.payload, ResponsePayload::Goodbye);
            write_line(&mut writer, &response)?;

            if is_goodbye {
                break;
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Command dispatch
    // -----------------------------------------------------------------------

    pub fn process_command(&mut self, cmd: AgentCommand) -> AgentResponse {
        match cmd {
            AgentCommand::Estimate {
                herd_size,
                location,
                horizon,
            } => match HerdSize::new(herd_size) {
                Ok(herd_size) => self.run_estimate(EstimateInputs {
                    preset: Preset::Custom,
                    request: EstimateRequest::new(herd_size, location, horizon),
                }),
                Err(e) => make_response(ResponsePayload::Error {
                    message: e.to_string(),
                }),
            },

            AgentCommand::Preset { preset, horizon } => self.run_estimate(EstimateInputs {
                preset,
                request: preset.request(horizon),
            }),

            AgentCommand::ListLocations => make_response(ResponsePayload::Locations {
                locations: LocationInfo::all(),
            }),

            AgentCommand::Quit => make_response(ResponsePayload::Goodbye),
        }
    }

    fn run_estimate(&mut self, inputs: EstimateInputs) -> AgentResponse {
        *self.app.world_mut().resource_mut::<EstimateInputs>() = inputs;
        self.app.update();

        match self.app.world().get_resource::<CurrentEstimate>() {
            Some(current) => make_response(ResponsePayload::Estimate {
                result: current.result.clone(),
            }),
            None => make_response(ResponsePayload::Error {
                message: "estimator is not initialized".to_string(),
            }),
        }
    }
}

fn write_line<W: Write>(writer: &mut W, response: &AgentResponse) -> std::io::Result<()> {
    writeln!(writer, "{}", encode_response(response))?;
    writer.flush()
}
