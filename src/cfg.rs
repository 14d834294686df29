//! cfg structs from which [`crate::window::Window`]s are constructed,
//! so the window choice can live in a YAML file next to the data

use serde::{Deserialize, Serialize};

use crate::{
    error::WindowError,
    window::{Window, WindowKind},
};

/// cfg to generate a window
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub struct WindowCfg {
    /// window name, e.g. `hann` or `blackman_harris`
    pub window: WindowKind,
    /// shape parameter, the window's own default is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,
}

impl WindowCfg {
    pub fn from_yaml(s: &str) -> Result<Self, WindowError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn to_yaml(&self) -> Result<String, WindowError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// construct a window from [`WindowCfg`]
pub fn cfg2window(cfg: &WindowCfg) -> Window<f64> {
    Window {
        kind: cfg.window,
        alpha: cfg.alpha,
    }
}
