//! Simulated network latency.
//!
//! The storefront has no backend to wait on, so a few operations pause to
//! feel like they do. Tests turn the pauses off.

use std::time::Duration;

/// Operations that pause before completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pause {
    Login,
    Register,
    Checkout,
    Newsletter,
    ProductListing,
    ProductDetail,
    AddToCart,
}

impl Pause {
    /// How long the operation takes.
    #[must_use]
    pub const fn duration(self) -> Duration {
        match self {
            Self::Login | Self::Register | Self::Newsletter => Duration::from_millis(1000),
            Self::Checkout => Duration::from_millis(2000),
            Self::ProductListing | Self::AddToCart => Duration::from_millis(500),
            Self::ProductDetail => Duration::from_millis(800),
        }
    }
}

/// Switch for simulated delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    enabled: bool,
}

impl Latency {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// No pauses at all.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Sleep for the duration of `pause`, if enabled.
    pub async fn pause(self, pause: Pause) {
        if self.enabled {
            tokio::time::sleep(pause.duration()).await;
        }
    }
}
