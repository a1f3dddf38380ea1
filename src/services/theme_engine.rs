//! Theme Engine: turns the host's day/night flag into the rendering hints the
//! web view understands.

use crate::types::settings::ForceDark;

/// Trait defining the theme engine interface.
pub trait ThemeEngineTrait {
    fn is_dark(&self) -> bool;
    fn force_dark(&self) -> ForceDark;
    fn color_scheme_css(&self) -> String;
    fn color_scheme_script(&self) -> String;
}

/// Theme state sampled once at startup. There is no live theme listener.
#[derive(Debug, Clone, Copy)]
pub struct ThemeEngine {
    dark_mode: bool,
}

impl ThemeEngine {
    /// Samples the host flag.
    pub fn detect(host_is_dark: bool) -> Self {
        Self {
            dark_mode: host_is_dark,
        }
    }
}

/// Maps the dark-mode flag to the surface hint.
pub fn force_dark_for(dark_mode: bool) -> ForceDark {
    if dark_mode {
        ForceDark::On
    } else {
        ForceDark::Off
    }
}

impl ThemeEngineTrait for ThemeEngine {
    fn is_dark(&self) -> bool {
        self.dark_mode
    }

    fn force_dark(&self) -> ForceDark {
        force_dark_for(self.dark_mode)
    }

    fn color_scheme_css(&self) -> String {
        match self.force_dark() {
            ForceDark::On => ":root{color-scheme:dark}".to_string(),
            ForceDark::Off => ":root{color-scheme:light}".to_string(),
        }
    }

    /// Script that installs [`Self::color_scheme_css`] as early as possible on
    /// every document.
    fn color_scheme_script(&self) -> String {
        format!(
            "(function(){{var add=function(){{var s=document.createElement('style');s.id='__shell_color_scheme';s.textContent={};(document.head||document.documentElement).appendChild(s);}};if(document.documentElement)add();else document.addEventListener('DOMContentLoaded',add);}})();",
            serde_json::Value::String(self.color_scheme_css())
        )
    }
}
