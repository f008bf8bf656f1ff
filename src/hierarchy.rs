use bevy_ecs::prelude::*;
use smallvec::SmallVec;

#[derive(Component, Clone, Copy)]
pub struct Parent(pub Entity);

#[derive(Component, Default)]
pub struct Children(pub Vec<Entity>);

#[derive(Component, Clone)]
pub struct Name(pub String);

/// Marker for entities that systems should skip.
#[derive(Component, Clone, Copy, Default)]
pub struct Disabled;

/// Links `child` under `parent`, creating the `Children` list on demand.
/// A child that already sits under another parent is unlinked from that
/// parent's sibling list first.
pub fn attach_child(world: &mut World, parent: Entity, child: Entity) {
    if let Some(previous) = world.get::<Parent>(child).copied() {
        if previous.0 != parent {
            if let Some(mut siblings) = world.get_mut::<Children>(previous.0) {
                siblings.0.retain(|&entry| entry != child);
            }
        }
    }
    world.entity_mut(child).insert(Parent(parent));
    if let Some(mut children) = world.get_mut::<Children>(parent) {
        if !children.0.contains(&child) {
            children.0.push(child);
        }
    } else {
        world.entity_mut(parent).insert(Children(vec![child]));
    }
}

pub fn children_of(world: &World, parent: Entity) -> Vec<Entity> {
    world.get::<Children>(parent).map(|children| children.0.clone()).unwrap_or_default()
}

/// Runs `action` for each direct child, in reverse order.
pub fn for_each_child(world: &mut World, parent: Entity, mut action: impl FnMut(&mut World, Entity)) {
    let children = children_of(world, parent);
    for &child in children.iter().rev() {
        action(world, child);
    }
}

pub fn enable_children(world: &mut World, parent: Entity) {
    for_each_child(world, parent, |world, child| {
        world.entity_mut(child).remove::<Disabled>();
    });
}

pub fn disable_children(world: &mut World, parent: Entity) {
    for_each_child(world, parent, |world, child| {
        world.entity_mut(child).insert(Disabled);
    });
}

pub fn is_enabled(world: &World, entity: Entity) -> bool {
    world.get::<Disabled>(entity).is_none()
}

/// Despawns the entity and its whole subtree, unlinking it from its parent's
/// sibling list first. Returns true when anything was removed.
pub fn despawn_recursive(world: &mut World, entity: Entity) -> bool {
    if let Some(parent) = world.get::<Parent>(entity).copied() {
        if let Some(mut siblings) = world.get_mut::<Children>(parent.0) {
            siblings.0.retain(|&child| child != entity);
        }
    }
    despawn_subtree(world, entity)
}

/// Despawns every child subtree, leaving the parent itself alive.
pub fn despawn_children(world: &mut World, parent: Entity) {
    let children = children_of(world, parent);
    for child in children.into_iter().rev() {
        despawn_subtree(world, child);
    }
    if let Some(mut children) = world.get_mut::<Children>(parent) {
        children.0.clear();
    }
}

fn despawn_subtree(world: &mut World, entity: Entity) -> bool {
    let mut stack: SmallVec<[Entity; 16]> = SmallVec::new();
    stack.push(entity);
    let mut removed = false;
    while let Some(next) = stack.pop() {
        if let Some(children) = world.get::<Children>(next) {
            stack.extend(children.0.iter().copied());
        }
        removed |= world.despawn(next);
    }
    removed
}

/// Fetches the component, inserting `T::default()` first when absent.
/// `None` only when the entity itself no longer exists.
pub fn get_or_insert_component<T: Component + Default>(
    world: &mut World,
    entity: Entity,
) -> Option<Mut<'_, T>> {
    if world.get_entity(entity).is_err() {
        return None;
    }
    if world.get::<T>(entity).is_none() {
        world.entity_mut(entity).insert(T::default());
    }
    world.get_mut::<T>(entity)
}

/// `/`-separated names from the root down to the entity. Unnamed links fall
/// back to `entity-<index>`.
pub fn entity_path(world: &World, entity: Entity) -> String {
    let mut segments: SmallVec<[String; 16]> = SmallVec::new();
    let mut current = Some(entity);
    while let Some(node) = current {
        let label = world
            .get::<Name>(node)
            .map(|name| name.0.clone())
            .unwrap_or_else(|| format!("entity-{}", node.index()));
        segments.push(label);
        current = world.get::<Parent>(node).map(|parent| parent.0);
    }
    let mut path = String::new();
    for segment in segments.iter().rev() {
        path.push('/');
        path.push_str(segment);
    }
    path
}
