/// Requests the UI hands back to the app loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    TogglePause,
    RequestReset,
}
