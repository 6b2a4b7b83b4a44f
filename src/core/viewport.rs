use crate::constants::rgb_hex;
use crate::core::config::LookConfig;

/// Drawing surface size in device pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Device-pixel size of a CSS box at `dpr`. A collapsed box stays empty.
    pub fn from_css(css_width: f64, css_height: f64, dpr: f64) -> Self {
        let px = |v: f64| (v * dpr).max(0.0) as u32;
        Self::new(px(css_width), px(css_height))
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn aspect(&self) -> f32 {
        self.width.max(1) as f32 / self.height.max(1) as f32
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Background colour for this theme.
    pub fn clear_color(self, look: &LookConfig) -> [f32; 4] {
        match self {
            Theme::Dark => rgb_hex(look.clear_dark),
            Theme::Light => rgb_hex(look.clear_light),
        }
    }
}
