//! Fire-and-forget usage events.
//!
//! Commands report a named event and, where it applies, the option that
//! selected their behaviour. The option is passed explicitly on every call.

#[cfg(test)]
use std::cell::RefCell;

/// Event name for the metadata cleanup.
pub const CLEANUP_COMMAND: &str = "applyCleanup";

/// Event name for TOC insertions.
pub const TOC_COMMAND: &str = "updateTOC";

/// Collaborator that records named events. Nothing is read back.
pub trait Telemetry {
    fn send_event(&self, command: &str, option: Option<&str>);
}

/// Emits events as `tracing` records on the `telemetry` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingTelemetry;

impl Telemetry for TracingTelemetry {
    fn send_event(&self, command: &str, option: Option<&str>) {
        tracing::debug!(target: "telemetry", command, option = option.unwrap_or(""), "command event");
    }
}

/// Keeps every event in memory.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingTelemetry {
    events: RefCell<Vec<(String, Option<String>)>>,
}

#[cfg(test)]
impl RecordingTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(String, Option<String>)> {
        self.events.borrow().clone()
    }
}

#[cfg(test)]
impl Telemetry for RecordingTelemetry {
    fn send_event(&self, command: &str, option: Option<&str>) {
        self.events
            .borrow_mut()
            .push((command.to_string(), option.map(str::to_string)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_telemetry_keeps_order() {
        let telemetry = RecordingTelemetry::new();
        telemetry.send_event(CLEANUP_COMMAND, None);
        telemetry.send_event(TOC_COMMAND, Some("tocEntry"));

        assert_eq!(
            telemetry.events(),
            vec![
                (CLEANUP_COMMAND.to_string(), None),
                (TOC_COMMAND.to_string(), Some("tocEntry".to_string())),
            ]
        );
    }
}
