//! Input capability detection, evaluated once when the overlay mounts.
//!
//! Touch-capable devices get no custom cursor at all: no listeners, no
//! overlay elements. Missing environment flags count as "not touch".

/// Touch capability flags exposed by the host environment.
pub trait TouchEnvironment {
    /// A touch-start handler slot exists (`'ontouchstart' in window`).
    fn has_touch_start(&self) -> bool;

    /// `navigator.maxTouchPoints`, if reported.
    fn max_touch_points(&self) -> Option<i32>;

    /// Legacy `navigator.msMaxTouchPoints`, if reported.
    fn ms_max_touch_points(&self) -> Option<i32>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputCapability {
    Touch,
    Pointer,
}

impl InputCapability {
    pub fn detect<E: TouchEnvironment + ?Sized>(env: &E) -> Self {
        let touch = env.has_touch_start()
            || env.max_touch_points().is_some_and(|n| n > 0)
            || env.ms_max_touch_points().is_some_and(|n| n > 0);

        if touch {
            InputCapability::Touch
        } else {
            InputCapability::Pointer
        }
    }

    /// Whether the custom cursor should be shown for this session.
    pub fn shows_cursor(self) -> bool {
        matches!(self, InputCapability::Pointer)
    }
}

/// Fixed capability flags, for tests and hosts that know their input up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticEnvironment {
    pub touch_start: bool,
    pub max_touch_points: Option<i32>,
    pub ms_max_touch_points: Option<i32>,
}

impl StaticEnvironment {
    /// Mouse-only desktop.
    pub fn desktop() -> Self {
        Self {
            touch_start: false,
            max_touch_points: Some(0),
            ms_max_touch_points: None,
        }
    }

    /// Phone or tablet.
    pub fn touch() -> Self {
        Self {
            touch_start: true,
            max_touch_points: Some(5),
            ms_max_touch_points: None,
        }
    }
}

impl TouchEnvironment for StaticEnvironment {
    fn has_touch_start(&self) -> bool {
        self.touch_start
    }

    fn max_touch_points(&self) -> Option<i32> {
        self.max_touch_points
    }

    fn ms_max_touch_points(&self) -> Option<i32> {
        self.ms_max_touch_points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_shows_cursor() {
        let capability = InputCapability::detect(&StaticEnvironment::desktop());
        assert_eq!(capability, InputCapability::Pointer);
        assert!(capability.shows_cursor());
    }

    #[test]
    fn test_any_signal_means_touch() {
        let start_only = StaticEnvironment {
            touch_start: true,
            ..Default::default()
        };
        let points_only = StaticEnvironment {
            max_touch_points: Some(1),
            ..Default::default()
        };
        let legacy_only = StaticEnvironment {
            ms_max_touch_points: Some(2),
            ..Default::default()
        };

        for env in [start_only, points_only, legacy_only, StaticEnvironment::touch()] {
            assert_eq!(InputCapability::detect(&env), InputCapability::Touch);
        }
    }

    #[test]
    fn test_missing_flags_default_to_pointer() {
        let env = StaticEnvironment::default();
        assert_eq!(InputCapability::detect(&env), InputCapability::Pointer);

        let negative = StaticEnvironment {
            max_touch_points: Some(-1),
            ..Default::default()
        };
        assert!(InputCapability::detect(&negative).shows_cursor());
    }
}
