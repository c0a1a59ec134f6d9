// Configuration type definitions

use serde::Deserialize;

use crate::alert::{BannerAnimation, Placement};
use crate::presentation::ToastOptions;

fn default_duration() -> f64 {
    2.0
}

fn default_tap_to_dismiss() -> bool {
    true
}

/// Placement selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PlacementSetting {
    #[default]
    Centered,
    TopBanner,
    BottomBanner,
}

/// Bottom banner entrance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BannerAnimationSetting {
    #[default]
    Slide,
    Pop,
}

impl From<BannerAnimationSetting> for BannerAnimation {
    fn from(setting: BannerAnimationSetting) -> Self {
        match setting {
            BannerAnimationSetting::Slide => BannerAnimation::Slide,
            BannerAnimationSetting::Pop => BannerAnimation::Pop,
        }
    }
}

/// Toast configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ToastConfig {
    /// Seconds before auto-dismiss; zero or negative disables it
    #[serde(default = "default_duration")]
    pub duration: f64,
    #[serde(default = "default_tap_to_dismiss")]
    pub tap_to_dismiss: bool,
    #[serde(default)]
    pub placement: PlacementSetting,
    #[serde(default)]
    pub banner_animation: BannerAnimationSetting,
    /// Vertical shift applied by the renderer, in rows
    #[serde(default)]
    pub offset_y: i16,
}

impl ToastConfig {
    pub fn options(&self) -> ToastOptions {
        ToastOptions::from_secs(self.duration, self.tap_to_dismiss)
    }

    pub fn placement(&self) -> Placement {
        match self.placement {
            PlacementSetting::Centered => Placement::Centered,
            PlacementSetting::TopBanner => Placement::TopBanner,
            PlacementSetting::BottomBanner => Placement::BottomBanner(self.banner_animation.into()),
        }
    }
}

impl Default for ToastConfig {
    fn default() -> Self {
        ToastConfig {
            duration: default_duration(),
            tap_to_dismiss: default_tap_to_dismiss(),
            placement: PlacementSetting::default(),
            banner_animation: BannerAnimationSetting::default(),
            offset_y: 0,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::time::Duration;

    // Feature: config-system, Property 1: Valid placement parsing
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_placement_parsing(placement in prop::sample::select(vec!["centered", "top_banner", "bottom_banner"])) {
            let toml_content = format!(r#"
[toast]
placement = "{}"
"#, placement);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid placement: {}", placement);

            let expected = match placement {
                "centered" => PlacementSetting::Centered,
                "top_banner" => PlacementSetting::TopBanner,
                "bottom_banner" => PlacementSetting::BottomBanner,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().toast.placement, expected);
        }
    }

    // Feature: config-system, Property 2: Any duration yields usable options
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_duration_never_negative(duration in -1000.0f64..1000.0) {
            let toml_content = format!("[toast]\nduration = {:?}\n", duration);
            let config: Config = toml::from_str(&toml_content).unwrap();

            let options = config.toast.options();
            if duration <= 0.0 {
                prop_assert_eq!(options.duration, Duration::ZERO);
            } else if duration >= 0.001 {
                prop_assert!(options.duration > Duration::ZERO);
            }
        }
    }

    #[test]
    fn test_bottom_banner_uses_animation() {
        let toml = r#"
[toast]
placement = "bottom_banner"
banner_animation = "pop"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(
            config.toast.placement(),
            Placement::BottomBanner(BannerAnimation::Pop)
        );
    }

    #[test]
    fn test_animation_ignored_for_other_placements() {
        let toml = r#"
[toast]
placement = "top_banner"
banner_animation = "pop"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.toast.placement(), Placement::TopBanner);
    }
}
