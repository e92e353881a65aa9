//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Section focus
    /// Focus the next section. Default: Tab
    NextSection,
    /// Focus the previous section. Default: Shift+Tab
    PrevSection,

    // Contextual navigation
    /// Previous item in the focused section (carousel slide, experience tab,
    /// gallery image). Default: h/←
    NavigatePrev,
    /// Next item in the focused section. Default: l/→
    NavigateNext,
    /// Jump to an item by 1-indexed number (carousel dot, experience tab,
    /// gallery image). Default: 1-9
    SelectIndex(usize),

    // Toggles
    /// Switch between light and dark mode. Default: d
    ToggleDarkMode,
    /// Start or pause background music. Default: m
    ToggleMusic,
    /// Open or close the cat gallery. Default: c
    ToggleGallery,

    // Misc
    /// Copy the resume into the download directory. Default: r
    ExportResume,
    /// Close the topmost overlay. Default: Esc
    Close,
    /// Toggle the help overlay. Default: ?
    Help,
    /// Quit the application. Default: q
    Quit,
}

impl KeyAction {
    /// Whether this action only moves within the focused section.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            Self::NavigatePrev | Self::NavigateNext | Self::SelectIndex(_)
        )
    }
}
