use crate::ui::mvi::UiState;
use std::time::{Duration, Instant};

/// How long a validation error stays visible.
pub const ERROR_DISPLAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Default)]
pub enum BannerState {
    #[default]
    Hidden,
    Shown {
        message: String,
        expires_at: Instant,
    },
}

impl UiState for BannerState {}

impl BannerState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Current text, empty when hidden.
    pub fn message(&self) -> &str {
        match self {
            Self::Hidden => "",
            Self::Shown { message, .. } => message.as_str(),
        }
    }
}
