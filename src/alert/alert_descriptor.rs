//! Alert descriptor types
//!
//! Pure data: variant, placement, optional text and cosmetic overrides.

use ratatui::style::{Color, Modifier};

/// What the alert displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertVariant {
    /// Check mark in the given tint
    Success(Color),
    /// Cross mark in the given tint
    Failure(Color),
    /// Named icon from the built-in glyph table
    SystemIcon(String, Color),
    /// Host-supplied glyph, drawn as-is
    CustomImage(String, Color),
    /// Spinner - never auto-dismisses and ignores taps
    Loading,
    /// Text only
    PlainText,
}

impl AlertVariant {
    /// Whether this variant draws an icon next to the text
    pub fn has_icon(&self) -> bool {
        !matches!(self, AlertVariant::PlainText)
    }
}

/// How a bottom banner enters the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerAnimation {
    #[default]
    Slide,
    Pop,
}

/// Where the overlay is drawn. Has no effect on lifecycle timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Modal box in the middle of the screen
    #[default]
    Centered,
    /// Compact box dropping from the top edge
    TopBanner,
    /// Left-aligned box along the bottom edge
    BottomBanner(BannerAnimation),
}

/// Optional cosmetic overrides. `None` fields fall back to the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AlertStyle {
    pub background: Option<Color>,
    pub title_color: Option<Color>,
    pub subtitle_color: Option<Color>,
    pub title_modifier: Option<Modifier>,
    pub subtitle_modifier: Option<Modifier>,
}

impl AlertStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn title_color(mut self, color: Color) -> Self {
        self.title_color = Some(color);
        self
    }

    pub fn subtitle_color(mut self, color: Color) -> Self {
        self.subtitle_color = Some(color);
        self
    }

    pub fn title_modifier(mut self, modifier: Modifier) -> Self {
        self.title_modifier = Some(modifier);
        self
    }

    pub fn subtitle_modifier(mut self, modifier: Modifier) -> Self {
        self.subtitle_modifier = Some(modifier);
        self
    }
}

/// Immutable description of a toast
///
/// Changing what is shown means building a new descriptor and handing it to
/// the controller's provider; the descriptor itself never starts or stops a
/// presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertDescriptor {
    variant: AlertVariant,
    placement: Placement,
    title: Option<String>,
    subtitle: Option<String>,
    style: Option<AlertStyle>,
}

impl AlertDescriptor {
    /// Create a centered alert with no text
    pub fn new(variant: AlertVariant) -> Self {
        Self {
            variant,
            placement: Placement::default(),
            title: None,
            subtitle: None,
            style: None,
        }
    }

    /// Text-only alert with a title
    pub fn text(title: &str) -> Self {
        Self::new(AlertVariant::PlainText).with_title(title)
    }

    /// Check mark alert with a title
    pub fn success(title: &str, tint: Color) -> Self {
        Self::new(AlertVariant::Success(tint)).with_title(title)
    }

    /// Cross mark alert with a title
    pub fn failure(title: &str, tint: Color) -> Self {
        Self::new(AlertVariant::Failure(tint)).with_title(title)
    }

    /// Spinner with no text
    pub fn loading() -> Self {
        Self::new(AlertVariant::Loading)
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_style(mut self, style: AlertStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn variant(&self) -> &AlertVariant {
        &self.variant
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.subtitle.as_deref()
    }

    pub fn style(&self) -> Option<&AlertStyle> {
        self.style.as_ref()
    }

    /// Loading alerts are shown until the host clears them
    pub fn is_loading(&self) -> bool {
        self.variant == AlertVariant::Loading
    }
}

#[cfg(test)]
#[path = "alert_descriptor_tests.rs"]
mod alert_descriptor_tests;
