use crate::ui::mvi::Intent;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum BannerIntent {
    /// Show `message` until `expires_at`. Replaces any message already shown
    /// and restarts its deadline.
    Show { message: String, expires_at: Instant },
    /// Timer tick. Hides the banner once its deadline has passed.
    Tick { now: Instant },
    Clear,
}

impl Intent for BannerIntent {}
