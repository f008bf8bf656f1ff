use bevy_ecs::prelude::*;
use updraft::hierarchy::{
    attach_child, children_of, despawn_children, despawn_recursive, disable_children,
    enable_children, entity_path, get_or_insert_component, is_enabled, Children, Name, Parent,
};

#[derive(Component, Default, PartialEq, Debug)]
struct Score(u32);

fn spawn_named(world: &mut World, name: &str) -> Entity {
    world.spawn(Name(name.to_string())).id()
}

fn family(world: &mut World) -> (Entity, Entity, Entity, Entity) {
    let root = spawn_named(world, "root");
    let left = spawn_named(world, "left");
    let right = spawn_named(world, "right");
    let grandchild = spawn_named(world, "grandchild");
    attach_child(world, root, left);
    attach_child(world, root, right);
    attach_child(world, left, grandchild);
    (root, left, right, grandchild)
}

#[test]
fn attach_child_links_both_directions() {
    let mut world = World::new();
    let (root, left, right, grandchild) = family(&mut world);

    assert_eq!(children_of(&world, root), vec![left, right]);
    assert_eq!(children_of(&world, left), vec![grandchild]);
    assert_eq!(world.get::<Parent>(grandchild).map(|p| p.0), Some(left));
    assert!(world.get::<Parent>(root).is_none());
}

#[test]
fn attach_child_ignores_duplicate_links() {
    let mut world = World::new();
    let (root, left, _, _) = family(&mut world);

    attach_child(&mut world, root, left);
    assert_eq!(children_of(&world, root).len(), 2, "no duplicate sibling entry");
}

#[test]
fn attach_child_reparents_cleanly() {
    let mut world = World::new();
    let (root, left, right, grandchild) = family(&mut world);

    attach_child(&mut world, right, grandchild);

    assert!(children_of(&world, left).is_empty(), "old parent's sibling list is pruned");
    assert_eq!(children_of(&world, right), vec![grandchild]);
    assert_eq!(world.get::<Parent>(grandchild).map(|p| p.0), Some(right));

    despawn_recursive(&mut world, left);
    assert!(world.get_entity(grandchild).is_ok(), "moved child survives the old subtree");
    assert_eq!(children_of(&world, root), vec![right]);
}

#[test]
fn disable_and_enable_touch_direct_children_only() {
    let mut world = World::new();
    let (root, left, right, grandchild) = family(&mut world);

    disable_children(&mut world, root);
    assert!(is_enabled(&world, root));
    assert!(!is_enabled(&world, left));
    assert!(!is_enabled(&world, right));
    assert!(is_enabled(&world, grandchild), "grandchildren are not direct children");

    enable_children(&mut world, root);
    assert!(is_enabled(&world, left));
    assert!(is_enabled(&world, right));
}

#[test]
fn despawn_children_clears_whole_subtrees() {
    let mut world = World::new();
    let (root, left, right, grandchild) = family(&mut world);

    despawn_children(&mut world, root);

    assert!(world.get_entity(root).is_ok());
    assert!(world.get_entity(left).is_err());
    assert!(world.get_entity(right).is_err());
    assert!(world.get_entity(grandchild).is_err(), "teardown recurses past direct children");
    assert!(children_of(&world, root).is_empty());
}

#[test]
fn despawn_recursive_unlinks_the_sibling_list() {
    let mut world = World::new();
    let (root, left, right, grandchild) = family(&mut world);

    assert!(despawn_recursive(&mut world, left));

    assert_eq!(children_of(&world, root), vec![right], "removed child leaves no gap");
    assert!(world.get_entity(grandchild).is_err());
    assert!(!despawn_recursive(&mut world, left), "second removal finds nothing");
}

#[test]
fn get_or_insert_component_is_get_then_add() {
    let mut world = World::new();
    let entity = world.spawn_empty().id();

    {
        let score = get_or_insert_component::<Score>(&mut world, entity).expect("entity alive");
        assert_eq!(*score, Score(0), "absent component comes back defaulted");
    }
    world.entity_mut(entity).insert(Score(7));
    let score = get_or_insert_component::<Score>(&mut world, entity).expect("entity alive");
    assert_eq!(*score, Score(7), "existing component is returned, not replaced");

    world.despawn(entity);
    assert!(get_or_insert_component::<Score>(&mut world, entity).is_none());
}

#[test]
fn entity_path_walks_from_the_root() {
    let mut world = World::new();
    let (_, _, _, grandchild) = family(&mut world);

    assert_eq!(entity_path(&world, grandchild), "/root/left/grandchild");
}

#[test]
fn entity_path_falls_back_for_unnamed_entities() {
    let mut world = World::new();
    let root = spawn_named(&mut world, "root");
    let anon = world.spawn_empty().id();
    attach_child(&mut world, root, anon);

    let path = entity_path(&world, anon);
    assert!(path.starts_with("/root/entity-"), "unexpected path {path}");
}

#[test]
fn children_component_defaults_to_empty() {
    let mut world = World::new();
    let entity = world.spawn(Children::default()).id();
    assert!(children_of(&world, entity).is_empty());
}
