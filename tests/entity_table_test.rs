use lightbox::data_structures::entity::{ENTITY_CAPACITY, Entity, EntityError, EntityTable};

#[test]
fn registered_entity_is_found_by_name() {
    let mut table = EntityTable::new();
    table
        .register(Entity::new("Player", 0).with_position([1.2, 1.2, 0.0]))
        .unwrap();

    let player = table.find("Player").expect("Player was registered");
    assert_eq!(player.index, 0);
    assert_eq!(player.position, cgmath::Vector3::new(1.2, 1.2, 0.0));
}

#[test]
fn unknown_name_is_not_found() {
    let mut table = EntityTable::new();
    table.register(Entity::new("Player", 3)).unwrap();

    assert!(table.find("Enemy").is_none());
    assert!(table.find_mut("Enemy").is_none());
    assert_eq!(
        table.require_mut("Enemy").unwrap_err(),
        EntityError::NotFound("Enemy".to_string())
    );
}

#[test]
fn empty_table_finds_nothing() {
    let table = EntityTable::new();
    assert!(table.is_empty());
    assert_eq!(table.capacity(), ENTITY_CAPACITY);
    assert!(table.find("Player").is_none());
}

#[test]
fn registering_same_index_overwrites_previous_occupant() {
    let mut table = EntityTable::new();
    table.register(Entity::new("First", 7)).unwrap();
    table.register(Entity::new("Second", 7)).unwrap();

    assert!(table.find("First").is_none());
    assert_eq!(table.find("Second").map(|e| e.index), Some(7));
    assert_eq!(table.len(), 1);
}

#[test]
fn lookup_returns_lowest_slot_when_names_repeat() {
    let mut table = EntityTable::new();
    table
        .register(Entity::new("Twin", 40).with_position([4.0, 0.0, 0.0]))
        .unwrap();
    table
        .register(Entity::new("Twin", 2).with_position([2.0, 0.0, 0.0]))
        .unwrap();

    assert_eq!(table.find("Twin").map(|e| e.index), Some(2));
    assert_eq!(table.len(), 2);
}

#[test]
fn last_slot_is_usable_and_beyond_is_rejected() {
    let mut table = EntityTable::new();
    let last = (ENTITY_CAPACITY - 1) as u16;
    table.register(Entity::new("Last", last)).unwrap();
    assert_eq!(table.find("Last").map(|e| e.index), Some(last));

    let err = table
        .register(Entity::new("Outside", ENTITY_CAPACITY as u16))
        .unwrap_err();
    assert_eq!(
        err,
        EntityError::IndexOutOfRange {
            index: ENTITY_CAPACITY,
            capacity: ENTITY_CAPACITY
        }
    );
    assert!(table.find("Outside").is_none());
}

#[test]
fn mutation_through_find_mut_sticks() {
    let mut table = EntityTable::new();
    table.register(Entity::new("Player", 0)).unwrap();

    table.find_mut("Player").unwrap().position.x += 0.5;
    table.require_mut("Player").unwrap().rotation = 1.0;

    let player = table.find("Player").unwrap();
    assert_eq!(player.position.x, 0.5);
    assert_eq!(player.rotation, 1.0);
}

#[test]
fn iter_walks_occupied_slots_in_index_order() {
    let mut table = EntityTable::new();
    table.register(Entity::new("Late", 30)).unwrap();
    table.register(Entity::new("Early", 1)).unwrap();
    table.register(Entity::new("Middle", 9)).unwrap();

    let names: Vec<_> = table.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Early", "Middle", "Late"]);
    assert_eq!(table.iter().count(), table.len());
}
