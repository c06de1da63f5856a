/// Target-independent adapters.

pub mod recording_host;

pub use recording_host::{HostCall, RecordingHost, RecordingNotification, RecordingWindow};
