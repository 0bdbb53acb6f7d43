use log::warn;
use macroquad::prelude::*;

pub const CONFIG_PATH: &str = "assets/nemo.ron";

#[derive(Debug, Clone, Copy, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct FishCfg {
    pub speed: f32,
    pub size: f32,
}

impl Default for FishCfg {
    fn default() -> Self {
        Self {
            speed: lib_session::TARGET_SPEED,
            size: lib_session::TARGET_SIZE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct GameCfg {
    pub fish: FishCfg,
    pub seed: Option<u64>,
}

/// A missing or broken config is not fatal, the game falls back to
/// the built-in tuning.
pub async fn load() -> GameCfg {
    match try_load().await {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!("Falling back to the default config: {:?}", e);
            GameCfg::default()
        }
    }
}

async fn try_load() -> anyhow::Result<GameCfg> {
    let raw = load_string(CONFIG_PATH).await?;

    Ok(ron::from_str(&raw)?)
}
