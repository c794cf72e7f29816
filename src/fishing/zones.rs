//! Zone table: lays a zone pattern out on the field and resolves the reel
//! speed under the cursor.

use super::error::SkillCheckError;
use super::types::{DifficultyConfig, FieldGeometry, ZoneSpan};
use crate::core::constants::WIDTH_TOLERANCE;

/// Validated zone layout for one attempt.
#[derive(Debug, Clone)]
pub struct ZoneTable {
    spans: Vec<ZoneSpan>,
    /// Speed returned by the last successful lookup.
    last_speed: Option<f64>,
}

impl ZoneTable {
    /// Validate `config` against `field` and compute absolute boundaries by
    /// walking the zones left to right from the field's left edge.
    pub fn new(config: &DifficultyConfig, field: &FieldGeometry) -> Result<Self, SkillCheckError> {
        if config.zones.is_empty() {
            return Err(SkillCheckError::EmptyPattern);
        }

        for (&kind, &speed) in &config.speeds {
            if !speed.is_finite() {
                return Err(SkillCheckError::InvalidSpeed { kind, speed });
            }
        }

        let mut spans = Vec::with_capacity(config.zones.len());
        let mut xmin = field.min;
        for (index, zone) in config.zones.iter().enumerate() {
            if !zone.width_units.is_finite() || zone.width_units <= 0.0 {
                return Err(SkillCheckError::InvalidZoneWidth {
                    index,
                    width: zone.width_units,
                });
            }
            let speed = *config
                .speeds
                .get(&zone.label)
                .ok_or(SkillCheckError::UnmappedZone(zone.label))?;
            let xmax = xmin + zone.width_units * field.unit_size;
            spans.push(ZoneSpan {
                label: zone.label,
                xmin,
                xmax,
                speed,
            });
            xmin = xmax;
        }

        let actual = config.total_units() * field.unit_size;
        if (actual - field.width).abs() > WIDTH_TOLERANCE {
            return Err(SkillCheckError::WidthMismatch {
                expected: field.width,
                actual,
            });
        }

        Ok(Self {
            spans,
            last_speed: None,
        })
    }

    /// Zone boundaries, left to right.
    pub fn layout(&self) -> &[ZoneSpan] {
        &self.spans
    }

    /// The zone whose `[xmin, xmax)` contains `x`, if any.
    pub fn zone_at(&self, x: f64) -> Option<&ZoneSpan> {
        self.spans.iter().find(|span| span.contains(x))
    }

    /// Reel speed at `center_x`.
    ///
    /// Outside every zone (the right edge is exclusive) the previous speed is
    /// kept so progress never stalls at the boundary. Before any successful
    /// lookup the nearest edge zone is used instead.
    pub fn speed_at(&mut self, center_x: f64) -> f64 {
        if let Some(span) = self.zone_at(center_x) {
            let speed = span.speed;
            self.last_speed = Some(speed);
            return speed;
        }

        match self.last_speed {
            Some(speed) => speed,
            None => self.nearest_edge_speed(center_x),
        }
    }

    fn nearest_edge_speed(&self, x: f64) -> f64 {
        // Construction guarantees at least one span.
        let first = &self.spans[0];
        let last = &self.spans[self.spans.len() - 1];
        if x < first.xmin {
            first.speed
        } else {
            last.speed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fishing::types::{Zone, ZoneKind};
    use std::collections::BTreeMap;

    fn sample_config() -> DifficultyConfig {
        DifficultyConfig::new(
            vec![
                Zone::new(ZoneKind::Slow, 1.0),
                Zone::new(ZoneKind::Medium, 2.0),
                Zone::new(ZoneKind::Fast, 6.0),
                Zone::new(ZoneKind::Medium, 2.0),
                Zone::new(ZoneKind::Slow, 1.0),
            ],
            BTreeMap::from([
                (ZoneKind::Slow, 1.0),
                (ZoneKind::Medium, 2.0),
                (ZoneKind::Fast, 3.0),
            ]),
        )
    }

    fn small_field() -> FieldGeometry {
        FieldGeometry {
            min: 24.0,
            width: 96.0,
            unit_size: 8.0,
        }
    }

    #[test]
    fn test_layout_is_contiguous() {
        let table = ZoneTable::new(&sample_config(), &small_field()).unwrap();
        let layout = table.layout();
        assert_eq!(layout.len(), 5);
        assert_eq!(layout[0].xmin, 24.0);
        assert_eq!(layout[0].xmax, 32.0);
        assert_eq!(layout[2].xmin, 48.0);
        assert_eq!(layout[2].xmax, 96.0);
        assert_eq!(layout[4].xmax, 120.0);
        for pair in layout.windows(2) {
            assert_eq!(pair[0].xmax, pair[1].xmin);
        }
    }

    #[test]
    fn test_lookup_resolves_first_matching_zone() {
        let mut table = ZoneTable::new(&sample_config(), &small_field()).unwrap();
        // 24 + 8 is the first tile boundary: half-open, so it belongs to medium
        assert_eq!(table.speed_at(24.0), 1.0);
        assert_eq!(table.speed_at(31.9), 1.0);
        assert_eq!(table.speed_at(32.0), 2.0);
        assert_eq!(table.speed_at(24.0 + 8.0 * 4.0), 3.0);
        assert_eq!(table.speed_at(119.0), 1.0);
    }

    #[test]
    fn test_lookup_outside_keeps_previous_speed() {
        let mut table = ZoneTable::new(&sample_config(), &small_field()).unwrap();
        assert_eq!(table.speed_at(60.0), 3.0);
        assert_eq!(table.speed_at(120.0), 3.0);
        assert_eq!(table.speed_at(500.0), 3.0);
        assert_eq!(table.speed_at(40.0), 2.0);
        assert_eq!(table.speed_at(-1.0), 2.0);
    }

    #[test]
    fn test_lookup_outside_before_any_hit_uses_edge_zone() {
        let mut config = sample_config();
        config.zones[4].label = ZoneKind::Fast;
        let mut table = ZoneTable::new(&config, &small_field()).unwrap();
        assert_eq!(table.speed_at(200.0), 3.0);

        let mut table = ZoneTable::new(&config, &small_field()).unwrap();
        assert_eq!(table.speed_at(0.0), 1.0);
    }

    #[test]
    fn test_width_mismatch_rejected() {
        let mut config = sample_config();
        config.zones[2].width_units = 5.25; // 11.25 tiles = 90 units
        let err = ZoneTable::new(&config, &small_field()).unwrap_err();
        match err {
            SkillCheckError::WidthMismatch { expected, actual } => {
                assert_eq!(expected, 96.0);
                assert_eq!(actual, 90.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unmapped_label_rejected() {
        let mut config = sample_config();
        config.speeds.remove(&ZoneKind::Medium);
        let err = ZoneTable::new(&config, &small_field()).unwrap_err();
        assert!(matches!(err, SkillCheckError::UnmappedZone(ZoneKind::Medium)));
    }

    #[test]
    fn test_invalid_widths_and_speeds_rejected() {
        let mut config = sample_config();
        config.zones[0].width_units = 0.0;
        assert!(matches!(
            ZoneTable::new(&config, &small_field()),
            Err(SkillCheckError::InvalidZoneWidth { index: 0, .. })
        ));

        let mut config = sample_config();
        config.speeds.insert(ZoneKind::Fast, f64::NAN);
        assert!(matches!(
            ZoneTable::new(&config, &small_field()),
            Err(SkillCheckError::InvalidSpeed { kind: ZoneKind::Fast, .. })
        ));

        let config = DifficultyConfig::new(Vec::new(), BTreeMap::new());
        assert!(matches!(
            ZoneTable::new(&config, &small_field()),
            Err(SkillCheckError::EmptyPattern)
        ));
    }

    #[test]
    fn test_negative_speeds_are_allowed() {
        let mut config = sample_config();
        config.speeds.insert(ZoneKind::Slow, -1.0);
        let mut table = ZoneTable::new(&config, &small_field()).unwrap();
        assert_eq!(table.speed_at(25.0), -1.0);
    }
}
