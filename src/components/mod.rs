pub mod app;
pub mod title_banner;
pub mod home_screen;
pub mod configuration_screen;
pub mod group_call_screen;
pub mod end_call_screen;
pub mod unsupported_screen;
pub mod call_error_screen;

pub use app::App;
pub use title_banner::TitleBanner;
pub use home_screen::HomeScreen;
pub use configuration_screen::ConfigurationScreen;
pub use group_call_screen::GroupCallScreen;
pub use end_call_screen::EndCallScreen;
pub use unsupported_screen::UnsupportedScreen;
pub use call_error_screen::CallErrorScreen;
