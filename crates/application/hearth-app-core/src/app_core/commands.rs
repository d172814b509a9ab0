/// Toolbar buttons as a dispatchable command set. The UI layer forwards a
/// command per click instead of calling the handlers directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarCommand {
    Back,
    Forward,
    Reload,
    TogglePin,
    ToggleTurbo,
    ToggleDesktopMode,
}
