use std::{ops::Range, time::Duration};

use serde::Deserialize;

/// Timing and tuning constants for every animation the page runs.
///
/// All delays should be multiples of `heartbeat`, since the browser shell only
/// advances time in heartbeat-sized steps.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    #[serde(with = "millis")]
    pub heartbeat: Duration,
    #[serde(with = "millis")]
    pub progress_tick: Duration,
    pub progress_step: Range<f64>,
    #[serde(with = "millis")]
    pub finish_delay: Duration,
    #[serde(with = "millis")]
    pub typing_tick: Duration,
    #[serde(with = "millis")]
    pub skill_pause: Duration,
    pub reveal_threshold: f64,
    pub particle_count: usize,
    pub particle_seed: u64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            heartbeat: Duration::from_millis(50),
            progress_tick: Duration::from_millis(150),
            progress_step: 5.0..20.0,
            finish_delay: Duration::from_millis(500),
            typing_tick: Duration::from_millis(100),
            skill_pause: Duration::from_millis(2000),
            reveal_threshold: 0.1,
            particle_count: 30,
            particle_seed: 0x5eed_cafe,
        }
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_align_with_heartbeat() {
        let cfg = MotionConfig::default();
        let beat = cfg.heartbeat.as_millis();
        for d in [
            cfg.progress_tick,
            cfg.finish_delay,
            cfg.typing_tick,
            cfg.skill_pause,
        ] {
            assert_eq!(d.as_millis() % beat, 0, "{d:?} is not a heartbeat multiple");
        }
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let cfg: MotionConfig =
            serde_json::from_str(r#"{ "typing_tick": 200, "reveal_threshold": 0.25 }"#)
                .expect("config should parse");
        assert_eq!(cfg.typing_tick, Duration::from_millis(200));
        assert_eq!(cfg.reveal_threshold, 0.25);
        assert_eq!(cfg.progress_tick, Duration::from_millis(150));
        assert_eq!(cfg.particle_count, 30);
    }
}
