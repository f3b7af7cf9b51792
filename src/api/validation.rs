use crate::core::{RadialFrame, RingSizeMode};
use crate::error::{ChartError, ChartResult};

use super::SunburstConfig;

pub(super) fn validate_min_angle_for_label(min_angle: f64) -> ChartResult<f64> {
    if !min_angle.is_finite() || min_angle < 0.0 {
        return Err(ChartError::InvalidConfiguration(
            "min angle for label must be finite and >= 0".to_owned(),
        ));
    }
    Ok(min_angle)
}

pub(super) fn validate_config(config: &SunburstConfig) -> ChartResult<RadialFrame> {
    let frame = RadialFrame::new(config.radius, config.inner_radius)?;
    validate_min_angle_for_label(config.min_angle_for_label)?;
    if config.ring_size_mode == RingSizeMode::Custom {
        return Err(ChartError::InvalidConfiguration(
            "custom ring sizes must be installed with `set_ring_size_policy`".to_owned(),
        ));
    }
    config.cap.validate()?;
    Ok(frame)
}
