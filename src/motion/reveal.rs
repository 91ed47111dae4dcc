use std::time::Duration;

/// One-shot visibility trigger. `Visible` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    pub const DURATION: Duration = Duration::from_millis(600);
    /// Downward offset in px while hidden
    pub const OFFSET_Y: i32 = 20;

    pub fn observe(self, intersecting: bool) -> Self {
        match self {
            RevealState::Hidden if intersecting => RevealState::Visible,
            state => state,
        }
    }

    pub fn is_visible(self) -> bool {
        self == RevealState::Visible
    }

    pub fn style(self) -> String {
        let (opacity, y) = match self {
            RevealState::Hidden => (0, Self::OFFSET_Y),
            RevealState::Visible => (1, 0),
        };
        format!(
            "opacity: {opacity}; transform: translateY({y}px); transition: opacity {ms}ms ease-out, transform {ms}ms ease-out",
            ms = Self::DURATION.as_millis()
        )
    }
}
