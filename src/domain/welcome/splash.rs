//! Welcome splash timeline.
//!
//! ```text
//! Visible --[visible_for elapsed]--> FadingOut --[fade_out elapsed]--> Dismissed
//! ```

use std::fmt;
use std::time::Duration;

use crate::domain::foundation::StateMachine;

/// Phase of the welcome splash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplashPhase {
    #[default]
    Visible,
    FadingOut,
    Dismissed,
}

impl StateMachine for SplashPhase {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SplashPhase::*;
        matches!((self, target), (Visible, FadingOut) | (FadingOut, Dismissed))
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SplashPhase::*;
        match self {
            Visible => vec![FadingOut],
            FadingOut => vec![Dismissed],
            Dismissed => vec![],
        }
    }
}

impl fmt::Display for SplashPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SplashPhase::Visible => "Visible",
            SplashPhase::FadingOut => "FadingOut",
            SplashPhase::Dismissed => "Dismissed",
        };
        write!(f, "{}", s)
    }
}

/// Durations that drive the splash, all measured from mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplashTimeline {
    pub visible_for: Duration,
    pub fade_out: Duration,
    /// Reveal delay of each header icon, in order.
    pub icon_delays: Vec<Duration>,
}

impl Default for SplashTimeline {
    fn default() -> Self {
        Self {
            visible_for: Duration::from_millis(3500),
            fade_out: Duration::from_millis(700),
            icon_delays: vec![
                Duration::from_millis(200),
                Duration::from_millis(400),
                Duration::from_millis(600),
            ],
        }
    }
}

impl SplashTimeline {
    /// Phase after `elapsed` time since mount.
    pub fn phase_at(&self, elapsed: Duration) -> SplashPhase {
        if elapsed < self.visible_for {
            SplashPhase::Visible
        } else if elapsed < self.total() {
            SplashPhase::FadingOut
        } else {
            SplashPhase::Dismissed
        }
    }

    /// Time from mount until the splash is gone.
    pub fn total(&self) -> Duration {
        self.visible_for + self.fade_out
    }

    /// Whether icon `index` has appeared. Unknown icons never appear.
    pub fn icon_visible(&self, index: usize, elapsed: Duration) -> bool {
        self.icon_delays
            .get(index)
            .is_some_and(|delay| elapsed >= *delay)
    }

    /// Number of icons shown after `elapsed`.
    pub fn visible_icons(&self, elapsed: Duration) -> usize {
        self.icon_delays
            .iter()
            .filter(|delay| elapsed >= **delay)
            .count()
    }
}
