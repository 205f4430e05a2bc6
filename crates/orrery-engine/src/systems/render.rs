use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities.
/// Background sprites come first, then Bodies sprites; spawn order is kept
/// inside each layer. `layer_split` marks the boundary.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    let mut above: Vec<RenderInstance> = Vec::new();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let sprite = match &entity.sprite {
            Some(s) => s,
            None => continue,
        };

        let (width, height) = sprite.size.map(|s| (s.x, s.y)).unwrap_or((0.0, 0.0));
        let instance = RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            rotation: entity.rotation,
            scale: entity.scale,
            texture: sprite.texture.0 as f32,
            alpha: sprite.alpha,
            width,
            height,
        };

        if entity.layer.below_vectors() {
            buffer.push(instance);
        } else {
            above.push(instance);
        }
    }

    buffer.set_layer_split(buffer.instance_count());
    for inst in above {
        buffer.push(inst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{EntityId, TextureId};
    use crate::components::layer::RenderLayer;
    use crate::components::sprite::SpriteComponent;
    use glam::Vec2;

    fn body(id: u32, x: f32) -> Entity {
        Entity::new(EntityId(id))
            .with_pos(Vec2::new(x, 0.0))
            .with_sprite(SpriteComponent::new(TextureId(id)))
    }

    #[test]
    fn background_is_drawn_before_bodies() {
        let entities = vec![
            body(1, 10.0),
            Entity::new(EntityId(2))
                .with_layer(RenderLayer::Background)
                .with_sprite(
                    SpriteComponent::new(TextureId(0))
                        .with_alpha(0.4)
                        .with_size(Vec2::new(1280.0, 720.0)),
                ),
            body(3, 30.0),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 3);
        assert_eq!(buffer.layer_split, 1);
        assert_eq!(buffer.instances[0].width, 1280.0);
        assert_eq!(buffer.instances[0].alpha, 0.4);
        // Bodies keep spawn order.
        assert_eq!(buffer.instances[1].x, 10.0);
        assert_eq!(buffer.instances[2].x, 30.0);
        assert_eq!(buffer.instances[2].width, 0.0);
    }

    #[test]
    fn inactive_and_invisible_entities_are_skipped() {
        let mut hidden = body(1, 0.0);
        hidden.active = false;
        let entities = vec![hidden, Entity::new(EntityId(2))];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
        assert_eq!(buffer.layer_split, 0);
    }

    #[test]
    fn scale_is_copied() {
        let entities = vec![body(1, 0.0).with_scale(0.075 * 0.5)];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert!((buffer.instances[0].scale - 0.0375).abs() < 1e-7);
    }
}
