use crate::components::entity::Entity;
use crate::components::visual::Material;
use crate::renderer::instance::{LabelInstance, RenderBuffer, RenderInstance};

fn texture_field(material: &Material) -> f32 {
    material
        .texture
        .map(|slot| slot.0 as f32)
        .unwrap_or(RenderInstance::NO_TEXTURE)
}

/// Build the render buffer from a set of entities.
/// Spheres and rings come first, glows last so the additive pass draws on top.
pub fn build_render_buffer<'a>(
    entities: impl Iterator<Item = &'a Entity>,
    buffer: &mut RenderBuffer,
    labels_visible: bool,
) {
    buffer.clear();

    let mut glow_instances: Vec<RenderInstance> = Vec::new();

    for entity in entities {
        if !entity.active {
            continue;
        }

        if let Some(sphere) = &entity.sphere {
            buffer.push(RenderInstance {
                kind: RenderInstance::KIND_SPHERE,
                x: entity.pos.x,
                y: entity.pos.y,
                z: entity.pos.z,
                inner: sphere.radius,
                outer: 0.0,
                spin: entity.spin,
                tilt: entity.tilt,
                texture: texture_field(&sphere.material),
                r: sphere.material.color.r,
                g: sphere.material.color.g,
                b: sphere.material.color.b,
                emissive: sphere.material.emissive,
                shininess: sphere.material.shininess,
                opacity: sphere.material.opacity,
                _pad: 0.0,
            });
        }

        if let Some(ring) = &entity.ring {
            buffer.push(RenderInstance {
                kind: RenderInstance::KIND_RING,
                x: entity.pos.x,
                y: entity.pos.y,
                z: entity.pos.z,
                inner: ring.inner_radius,
                outer: ring.outer_radius,
                spin: entity.spin,
                tilt: entity.tilt + ring.tilt,
                texture: texture_field(&ring.material),
                r: ring.material.color.r,
                g: ring.material.color.g,
                b: ring.material.color.b,
                emissive: ring.material.emissive,
                shininess: ring.material.shininess,
                opacity: ring.material.opacity,
                _pad: 0.0,
            });
        }

        if let Some(glow) = &entity.glow {
            glow_instances.push(RenderInstance {
                kind: RenderInstance::KIND_GLOW,
                x: entity.pos.x,
                y: entity.pos.y,
                z: entity.pos.z,
                inner: glow.radius,
                outer: 0.0,
                spin: 0.0,
                tilt: 0.0,
                texture: RenderInstance::NO_TEXTURE,
                r: glow.color.r,
                g: glow.color.g,
                b: glow.color.b,
                emissive: glow.intensity,
                shininess: 0.0,
                opacity: 1.0,
                _pad: 0.0,
            });
        }

        if labels_visible {
            if let Some(label) = &entity.label {
                buffer.push_label(LabelInstance {
                    x: entity.pos.x,
                    y: entity.pos.y + label.offset,
                    z: entity.pos.z,
                    scale: label.scale,
                    id: entity.id.0 as f32,
                });
            }
        }
    }

    for inst in glow_instances {
        buffer.push(inst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::assets::registry::TextureSlot;
    use crate::components::visual::{GlowVisual, Label, Rgb, RingVisual, SphereVisual};
    use glam::Vec3;

    fn sphere(radius: f32) -> SphereVisual {
        SphereVisual {
            radius,
            material: Material::color(Rgb::new(0.5, 0.5, 0.5)),
        }
    }

    #[test]
    fn sphere_ring_and_glow_each_get_an_instance() {
        let entity = Entity::new(EntityId(1))
            .with_pos(Vec3::new(138.0, 0.0, 0.0))
            .with_sphere(sphere(10.0))
            .with_ring(RingVisual {
                inner_radius: 10.0,
                outer_radius: 20.0,
                material: Material::color(Rgb::new(0.8, 0.7, 0.5)),
                tilt: 0.2,
            })
            .with_glow(GlowVisual {
                radius: 11.0,
                color: Rgb::new(0.4, 0.6, 1.0),
                intensity: 0.5,
            });

        let mut buffer = RenderBuffer::new();
        build_render_buffer([entity].iter(), &mut buffer, true);

        assert_eq!(buffer.instance_count(), 3);
        assert_eq!(buffer.instances[0].kind, RenderInstance::KIND_SPHERE);
        assert_eq!(buffer.instances[1].kind, RenderInstance::KIND_RING);
        assert_eq!(buffer.instances[1].outer, 20.0);
        // Glow sorts to the end of the buffer.
        assert_eq!(buffer.instances[2].kind, RenderInstance::KIND_GLOW);
    }

    #[test]
    fn ring_tilt_adds_to_entity_tilt() {
        let mut entity = Entity::new(EntityId(1)).with_ring(RingVisual {
            inner_radius: 7.0,
            outer_radius: 12.0,
            material: Material::color(Rgb::WHITE),
            tilt: 0.785,
        });
        entity.tilt = 0.1;

        let mut buffer = RenderBuffer::new();
        build_render_buffer([entity].iter(), &mut buffer, false);
        assert!((buffer.instances[0].tilt - 0.885).abs() < 1e-6);
    }

    #[test]
    fn texture_slot_flows_to_the_wire() {
        let entity = Entity::new(EntityId(1)).with_sphere(SphereVisual {
            radius: 6.0,
            material: Material::color(Rgb::WHITE).with_texture(TextureSlot(3)),
        });

        let mut buffer = RenderBuffer::new();
        build_render_buffer([entity].iter(), &mut buffer, false);
        assert_eq!(buffer.instances[0].texture, 3.0);
    }

    #[test]
    fn labels_respect_visibility_flag() {
        let entity = Entity::new(EntityId(9))
            .with_sphere(sphere(6.0))
            .with_label(Label::new("Earth", 8.0));

        let mut buffer = RenderBuffer::new();
        build_render_buffer([entity.clone()].iter(), &mut buffer, true);
        assert_eq!(buffer.label_count(), 1);
        assert_eq!(buffer.labels[0].y, 8.0);
        assert_eq!(buffer.labels[0].id, 9.0);

        build_render_buffer([entity].iter(), &mut buffer, false);
        assert_eq!(buffer.label_count(), 0);
    }

    #[test]
    fn inactive_entities_are_skipped() {
        let mut entity = Entity::new(EntityId(1)).with_sphere(sphere(1.0));
        entity.active = false;

        let mut buffer = RenderBuffer::new();
        build_render_buffer([entity].iter(), &mut buffer, true);
        assert_eq!(buffer.instance_count(), 0);
    }
}
