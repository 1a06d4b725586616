use serde::{Deserialize, Serialize};

/// Application configuration for the group calling client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Query parameter carrying the group call identifier
    pub group_id_param: String,
    /// Message shown on the end-call screen
    pub end_call_message: String,
    /// Document title while the unsupported screen is showing
    pub unsupported_title: String,
    /// Document title while the call error screen is showing
    pub error_title: String,
    /// Where to learn about supported browsers and platforms
    pub browser_support_url: String,
    /// Where to learn about call end codes
    pub troubleshooting_url: String,
    /// Version string of the calling SDK reported in the startup banner
    pub sdk_version: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            group_id_param: "groupId".to_string(),
            end_call_message: "You left the call".to_string(),
            unsupported_title: "Unsupported browser".to_string(),
            error_title: "Call Ended".to_string(),
            browser_support_url: "https://docs.microsoft.com/en-us/azure/communication-services/concepts/voice-video-calling/calling-sdk-features#calling-client-library-browser-support".to_string(),
            troubleshooting_url: "https://docs.microsoft.com/en-us/azure/communication-services/concepts/troubleshooting-info?tabs=csharp%2Cjavascript%2Cdotnet".to_string(),
            sdk_version: option_env!("CALLING_SDK_VERSION").unwrap_or("unknown").to_string(),
        }
    }
}

impl AppConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query parameter used for the group call identifier
    pub fn with_group_id_param(mut self, param: impl Into<String>) -> Self {
        self.group_id_param = param.into();
        self
    }

    /// Set the message shown after leaving a call
    pub fn with_end_call_message(mut self, message: impl Into<String>) -> Self {
        self.end_call_message = message.into();
        self
    }

    /// Set the calling SDK version shown in the startup banner
    pub fn with_sdk_version(mut self, version: impl Into<String>) -> Self {
        self.sdk_version = version.into();
        self
    }

    /// Startup banner line logged once after launch
    pub fn banner(&self) -> String {
        let built = option_env!("BUILD_TIME").unwrap_or("at an unknown time");
        format!(
            "Group calling sample app: Last Updated {} with calling sdk:{}",
            built, self.sdk_version
        )
    }
}
