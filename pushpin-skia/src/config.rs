use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    pub fps: u32,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// 按钮图片，读取失败时按钮退回纯色背景
    pub image_path: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Pushpin Universal Button Example".to_string(),
            width: 800,
            height: 600,
            resizable: false,
            fps: 60,
            assets: AssetsConfig::default(),
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            image_path: "example_image.png".to_string(),
        }
    }
}
