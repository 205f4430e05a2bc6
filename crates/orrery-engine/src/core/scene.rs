use crate::api::types::EntityId;
use crate::components::entity::Entity;

/// Entity storage in spawn order.
/// Spawn order is draw order within a render layer.
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(32),
        }
    }

    /// Add an entity to the scene. Returns its ID.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        self.entities.push(entity);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Find the first entity with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.tag == tag)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = scene.spawn(Entity::new(EntityId(1)).with_pos(Vec2::new(640.0, 360.0)));
        assert_eq!(scene.get(id).unwrap().pos, Vec2::new(640.0, 360.0));
    }

    #[test]
    fn iter_follows_spawn_order() {
        let mut scene = Scene::new();
        for i in [3, 1, 4, 2] {
            scene.spawn(Entity::new(EntityId(i)));
        }
        let order: Vec<u32> = scene.iter().map(|e| e.id.0).collect();
        assert_eq!(order, vec![3, 1, 4, 2]);
        assert_eq!(scene.len(), 4);
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1)).with_tag("sun"));
        scene.spawn(Entity::new(EntityId(2)).with_tag("earth"));
        assert_eq!(scene.find_by_tag("earth").unwrap().id, EntityId(2));
        assert!(scene.find_by_tag("vulcan").is_none());
    }
}
