//! Shared constants used across the application

/// First transcript entry of every new session.
pub const GREETING: &str =
    "Hello! I'm Insight Scout. What would you like to know about your product performance?";

/// Assistant reply used when the webhook answers successfully without a usable `output`.
pub const MALFORMED_REPLY: &str = "I'm sorry, possibly the response format is unexpected.";

/// Assistant reply used when the webhook cannot be reached or answers with a failure status.
pub const CONNECTION_FAILURE_REPLY: &str =
    "Sorry, I'm having trouble connecting to the server for insights right now. Please try again later.";

/// Opening prompt of the onboarding (source selection) screen.
pub const ONBOARDING_PROMPT: &str =
    "Hi! I'm Insight Scout, your AI assistant. To get started, select the data sources you'd like me to analyze:";

/// Shown while a reply is pending.
pub const THINKING_INDICATOR: &str = "Analyzing data sources...";

/// Default pause before the simulator answers, in milliseconds.
pub const DEFAULT_SIMULATED_DELAY_MS: u64 = 1500;

/// Shortest simulated pause that still reads as "thinking", in milliseconds.
pub const MIN_SIMULATED_DELAY_MS: u64 = 500;

/// Environment variable consulted for the webhook URL when no flag is given.
pub const ENDPOINT_ENV_VAR: &str = "INSIGHT_SCOUT_ENDPOINT";
