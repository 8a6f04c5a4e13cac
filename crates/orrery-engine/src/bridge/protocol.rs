/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Instances: max_instances × 16 floats]
/// [Path vertices: max_path_vertices × 7 floats]
/// [Labels: max_labels × 5 floats]
/// [Lights: max_lights × 8 floats]
/// [Stars: max_stars × 4 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.
use crate::api::game::AppConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_PATH_VERTICES: usize = 4;
pub const HEADER_PATH_VERTEX_COUNT: usize = 5;
pub const HEADER_MAX_LABELS: usize = 6;
pub const HEADER_LABEL_COUNT: usize = 7;
pub const HEADER_MAX_LIGHTS: usize = 8;
pub const HEADER_LIGHT_COUNT: usize = 9;
pub const HEADER_MAX_STARS: usize = 10;
pub const HEADER_STAR_COUNT: usize = 11;
pub const HEADER_MAX_EVENTS: usize = 12;
pub const HEADER_EVENT_COUNT: usize = 13;
pub const HEADER_PROTOCOL_VERSION: usize = 14;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per render instance (wire format — never changes).
pub const INSTANCE_FLOATS: usize = 16;

/// Floats per path vertex: x, y, z, r, g, b, a (wire format — never changes).
pub const PATH_VERTEX_FLOATS: usize = 7;

/// Floats per label: x, y, z, scale, id (wire format — never changes).
pub const LABEL_FLOATS: usize = 5;

/// Floats per point light: x, y, z, r, g, b, intensity, range.
pub const LIGHT_FLOATS: usize = 8;

/// Floats per star point: x, y, z, brightness.
pub const STAR_FLOATS: usize = 4;

/// Floats per game event: kind, a, b, c.
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_path_vertices: usize,
    pub max_labels: usize,
    pub max_lights: usize,
    pub max_stars: usize,
    pub max_events: usize,

    /// Size of each data section in floats.
    pub instance_data_floats: usize,
    pub path_data_floats: usize,
    pub label_data_floats: usize,
    pub light_data_floats: usize,
    pub star_data_floats: usize,
    pub event_data_floats: usize,

    /// Offset (in floats) where each data section begins.
    pub instance_data_offset: usize,
    pub path_data_offset: usize,
    pub label_data_offset: usize,
    pub light_data_offset: usize,
    pub star_data_offset: usize,
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_instances: usize,
        max_path_vertices: usize,
        max_labels: usize,
        max_lights: usize,
        max_stars: usize,
        max_events: usize,
    ) -> Self {
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let path_data_floats = max_path_vertices * PATH_VERTEX_FLOATS;
        let label_data_floats = max_labels * LABEL_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let star_data_floats = max_stars * STAR_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let instance_data_offset = HEADER_FLOATS;
        let path_data_offset = instance_data_offset + instance_data_floats;
        let label_data_offset = path_data_offset + path_data_floats;
        let light_data_offset = label_data_offset + label_data_floats;
        let star_data_offset = light_data_offset + light_data_floats;
        let event_data_offset = star_data_offset + star_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_instances,
            max_path_vertices,
            max_labels,
            max_lights,
            max_stars,
            max_events,
            instance_data_floats,
            path_data_floats,
            label_data_floats,
            light_data_floats,
            star_data_floats,
            event_data_floats,
            instance_data_offset,
            path_data_offset,
            label_data_offset,
            light_data_offset,
            star_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from an AppConfig.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.max_instances,
            config.max_path_vertices,
            config.max_labels,
            config.max_lights,
            config.max_stars,
            config.max_events,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_default_config_matches_expected_sizes() {
        let config = AppConfig::default();
        let layout = ProtocolLayout::from_config(&config);

        assert_eq!(layout.max_instances, config.max_instances);
        assert_eq!(
            layout.instance_data_floats,
            config.max_instances * INSTANCE_FLOATS
        );
        assert_eq!(layout.star_data_floats, config.max_stars * STAR_FLOATS);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn offsets_are_contiguous() {
        let layout = ProtocolLayout::new(64, 4096, 16, 4, 10_000, 16);

        assert_eq!(layout.instance_data_offset, HEADER_FLOATS);
        assert_eq!(
            layout.path_data_offset,
            layout.instance_data_offset + layout.instance_data_floats
        );
        assert_eq!(
            layout.label_data_offset,
            layout.path_data_offset + layout.path_data_floats
        );
        assert_eq!(
            layout.light_data_offset,
            layout.label_data_offset + layout.label_data_floats
        );
        assert_eq!(
            layout.star_data_offset,
            layout.light_data_offset + layout.light_data_floats
        );
        assert_eq!(
            layout.event_data_offset,
            layout.star_data_offset + layout.star_data_floats
        );
        assert_eq!(
            layout.buffer_total_floats,
            layout.event_data_offset + layout.event_data_floats
        );
    }

    #[test]
    fn custom_capacities_compute_correctly() {
        let layout = ProtocolLayout::new(32, 1024, 8, 2, 500, 8);

        assert_eq!(layout.instance_data_floats, 32 * 16);
        assert_eq!(layout.path_data_floats, 1024 * 7);
        assert_eq!(layout.label_data_floats, 8 * 5);
        assert_eq!(layout.light_data_floats, 2 * 8);
        assert_eq!(layout.star_data_floats, 500 * 4);
        assert_eq!(layout.event_data_floats, 8 * 4);

        let expected_total =
            HEADER_FLOATS + 32 * 16 + 1024 * 7 + 8 * 5 + 2 * 8 + 500 * 4 + 8 * 4;
        assert_eq!(layout.buffer_total_floats, expected_total);
    }
}
