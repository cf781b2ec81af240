// File: crates/chart-compose/src/hints.rs
// Summary: Process-wide rendering hints resolved from configuration names at startup.
// Notes:
// - Key and value names form a closed enumeration; anything else is a
//   ConfigError so a misconfigured engine never starts.
// - The resolved set is plain Copy data, shared read-only by every render.

use skia_safe as skia;

use crate::error::{ConfigError, ConfigResult};

/// Configuration keys understood by [`RenderingHintSet::from_names`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HintKey {
    Antialiasing,
    TextAntialiasing,
    FontHinting,
    FractionalMetrics,
}

impl HintKey {
    pub const ALL: [HintKey; 4] = [
        HintKey::Antialiasing,
        HintKey::TextAntialiasing,
        HintKey::FontHinting,
        HintKey::FractionalMetrics,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            HintKey::Antialiasing => "antialiasing",
            HintKey::TextAntialiasing => "text-antialiasing",
            HintKey::FontHinting => "font-hinting",
            HintKey::FractionalMetrics => "fractional-metrics",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL.into_iter().find(|k| k.name().eq_ignore_ascii_case(name))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAntialias {
    Off,
    On,
    Subpixel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hinting {
    None,
    Slight,
    Normal,
    Full,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderingHintSet {
    pub antialias: bool,
    pub text_antialias: TextAntialias,
    pub hinting: Hinting,
    pub fractional_metrics: bool,
}

impl Default for RenderingHintSet {
    fn default() -> Self {
        Self {
            antialias: true,
            text_antialias: TextAntialias::On,
            hinting: Hinting::Slight,
            fractional_metrics: false,
        }
    }
}

impl RenderingHintSet {
    /// Resolve `(key, value)` name pairs on top of the defaults. Later pairs win.
    pub fn from_names<'a, I>(pairs: I) -> ConfigResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut set = Self::default();
        for (key_name, value_name) in pairs {
            let key = HintKey::from_name(key_name)
                .ok_or_else(|| ConfigError::UnknownHintKey(key_name.to_string()))?;
            set.assign(key, value_name)?;
        }
        Ok(set)
    }

    fn assign(&mut self, key: HintKey, value: &str) -> ConfigResult<()> {
        let v = value.trim().to_ascii_lowercase();
        let unknown = || ConfigError::UnknownHintValue {
            key: key.name().to_string(),
            value: value.to_string(),
        };
        match key {
            HintKey::Antialiasing => self.antialias = parse_switch(&v).ok_or_else(unknown)?,
            HintKey::FractionalMetrics => {
                self.fractional_metrics = parse_switch(&v).ok_or_else(unknown)?
            }
            HintKey::TextAntialiasing => {
                self.text_antialias = match v.as_str() {
                    "off" => TextAntialias::Off,
                    "on" => TextAntialias::On,
                    "subpixel" => TextAntialias::Subpixel,
                    _ => return Err(unknown()),
                }
            }
            HintKey::FontHinting => {
                self.hinting = match v.as_str() {
                    "none" => Hinting::None,
                    "slight" => Hinting::Slight,
                    "normal" => Hinting::Normal,
                    "full" => Hinting::Full,
                    _ => return Err(unknown()),
                }
            }
        }
        Ok(())
    }

    /// Paint for shapes (frames, grid, series strokes, fills).
    pub fn shape_paint(&self, color: skia::Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(color);
        paint.set_anti_alias(self.antialias);
        paint
    }

    /// Paint used as the foreground of shaped text.
    pub fn text_paint(&self, color: skia::Color) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_color(color);
        paint.set_anti_alias(self.text_antialias != TextAntialias::Off);
        paint
    }

    /// Configure a raw font used for `draw_str` labels.
    pub fn apply_to_font(&self, font: &mut skia::Font) {
        font.set_edging(match self.text_antialias {
            TextAntialias::Off => skia::font::Edging::Alias,
            TextAntialias::On => skia::font::Edging::AntiAlias,
            TextAntialias::Subpixel => skia::font::Edging::SubpixelAntiAlias,
        });
        font.set_hinting(match self.hinting {
            Hinting::None => skia::FontHinting::None,
            Hinting::Slight => skia::FontHinting::Slight,
            Hinting::Normal => skia::FontHinting::Normal,
            Hinting::Full => skia::FontHinting::Full,
        });
        font.set_subpixel(self.fractional_metrics);
        font.set_linear_metrics(self.fractional_metrics);
    }

    pub fn paragraph_hinting(&self) -> bool {
        self.hinting != Hinting::None
    }
}

fn parse_switch(v: &str) -> Option<bool> {
    match v {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_names_case_insensitively() {
        let set = RenderingHintSet::from_names([
            ("Antialiasing", "OFF"),
            ("text-antialiasing", "subpixel"),
            ("font-hinting", "full"),
            ("fractional-metrics", "on"),
        ])
        .expect("valid hints");
        assert!(!set.antialias);
        assert_eq!(set.text_antialias, TextAntialias::Subpixel);
        assert_eq!(set.hinting, Hinting::Full);
        assert!(set.fractional_metrics);
    }

    #[test]
    fn empty_mapping_keeps_defaults() {
        let set = RenderingHintSet::from_names(std::iter::empty()).unwrap();
        assert_eq!(set, RenderingHintSet::default());
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = RenderingHintSet::from_names([("dithering", "on")]).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownHintKey(k) if k == "dithering"));
    }

    #[test]
    fn unknown_value_names_the_key() {
        let err = RenderingHintSet::from_names([("font-hinting", "extreme")]).unwrap_err();
        match err {
            ConfigError::UnknownHintValue { key, value } => {
                assert_eq!(key, "font-hinting");
                assert_eq!(value, "extreme");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn shape_paint_follows_antialias_switch() {
        let off = RenderingHintSet { antialias: false, ..Default::default() };
        assert!(!off.shape_paint(skia::Color::BLACK).is_anti_alias());
        assert!(RenderingHintSet::default().shape_paint(skia::Color::BLACK).is_anti_alias());
    }
}
