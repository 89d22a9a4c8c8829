use {
    crate::*,
    bevy::{ecs::system::RunSystemOnce, prelude::*},
    cooking_assets::CookingProfile,
    cooking_components::{CookState, ManualHeat},
    cooking_events::*,
    std::time::Duration,
};

#[derive(Resource, Default)]
struct Notifications(Vec<String>);

fn test_app() -> App {
    let mut app = App::new();
    app.init_resource::<Time>()
        .init_resource::<Assets<CookingProfile>>()
        .init_resource::<Notifications>()
        .add_plugins(CookingPlugin);

    app.add_observer(
        |trigger: On<CookingStarted>, mut log: ResMut<Notifications>| {
            log.0.push(format!("started {:?}", trigger.event().entity));
        },
    )
    .add_observer(
        |trigger: On<CookingCompleted>, mut log: ResMut<Notifications>| {
            log.0.push(format!("completed {:?}", trigger.event().entity));
        },
    )
    .add_observer(|trigger: On<Burnt>, mut log: ResMut<Notifications>| {
        log.0.push(format!("burnt {:?}", trigger.event().entity));
    })
    .add_observer(
        |trigger: On<CookStateChanged>, mut log: ResMut<Notifications>| {
            let event = trigger.event();
            log.0.push(format!("{:?} {:?}", event.state, event.entity));
        },
    );

    app
}

fn tick(app: &mut App, seconds: f32) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_secs_f32(seconds));
    app.update();
}

fn spawn_item(app: &mut App, profile: CookingProfile) -> Entity {
    let handle = app
        .world_mut()
        .resource_mut::<Assets<CookingProfile>>()
        .add(profile);
    app.world_mut().spawn(Cookable::new(handle)).id()
}

fn cookable(app: &App, item: Entity) -> &Cookable {
    app.world().get::<Cookable>(item).unwrap()
}

#[test]
fn test_manual_cooking_runs_the_state_machine() {
    let mut app = test_app();
    let item = spawn_item(&mut app, CookingProfile::new("steak", 5.0, 3.0));

    app.world_mut().trigger(StartCooking {
        entity: item,
        heat_level: 1.0,
    });
    tick(&mut app, 0.0);
    assert!(app.world().get::<ManualHeat>(item).is_some());

    tick(&mut app, 5.0);
    assert_eq!(cookable(&app, item).state(), CookState::Cooked);
    assert!(cookable(&app, item).is_being_heated());

    tick(&mut app, 3.0);
    assert_eq!(cookable(&app, item).state(), CookState::Burnt);

    let log = &app.world().resource::<Notifications>().0;
    assert_eq!(
        log,
        &vec![
            format!("started {item:?}"),
            format!("completed {item:?}"),
            format!("Cooked {item:?}"),
            format!("burnt {item:?}"),
            format!("Burnt {item:?}"),
        ]
    );
}

#[test]
fn test_stop_cooking_keeps_progress() {
    let mut app = test_app();
    let item = spawn_item(&mut app, CookingProfile::new("steak", 4.0, 3.0));

    app.world_mut().trigger(StartCooking {
        entity: item,
        heat_level: 1.0,
    });
    tick(&mut app, 0.0);
    tick(&mut app, 1.0);
    assert_eq!(cookable(&app, item).progress(), 0.25);

    app.world_mut().trigger(StopCooking { entity: item });
    tick(&mut app, 1.0);

    assert!(app.world().get::<ManualHeat>(item).is_none());
    assert!(!cookable(&app, item).is_being_heated());
    assert_eq!(cookable(&app, item).state(), CookState::Cooking);
    assert_eq!(cookable(&app, item).progress(), 0.25);
}

#[test]
fn test_manual_heat_level_is_not_clamped() {
    let mut app = test_app();
    let item = spawn_item(&mut app, CookingProfile::new("steak", 8.0, 3.0));

    app.world_mut().trigger(StartCooking {
        entity: item,
        heat_level: 4.0,
    });
    tick(&mut app, 0.0);
    tick(&mut app, 1.0);

    assert_eq!(cookable(&app, item).progress(), 0.5);
}

#[test]
fn test_negative_manual_heat_is_rejected() {
    let mut app = test_app();
    let item = spawn_item(&mut app, CookingProfile::new("steak", 1.0, 3.0));

    app.world_mut().trigger(StartCooking {
        entity: item,
        heat_level: 0.5,
    });
    tick(&mut app, 0.0);
    tick(&mut app, 0.5);
    assert_eq!(cookable(&app, item).progress(), 0.25);

    app.world_mut().trigger(StartCooking {
        entity: item,
        heat_level: -1.0,
    });
    tick(&mut app, 0.5);

    assert_eq!(app.world().get::<ManualHeat>(item), Some(&ManualHeat(0.5)));
    assert_eq!(cookable(&app, item).state(), CookState::Cooking);
    assert_eq!(cookable(&app, item).progress(), 0.5);
}

#[test]
fn test_heating_flag_is_cleared_without_heat() {
    let mut app = test_app();
    let item = spawn_item(&mut app, CookingProfile::new("steak", 5.0, 3.0));
    let profile = CookingProfile::new("steak", 5.0, 3.0);

    app.world_mut()
        .get_mut::<Cookable>(item)
        .unwrap()
        .apply_heat(Some(&profile), 1.0, 1.0);
    assert!(cookable(&app, item).is_being_heated());

    tick(&mut app, 0.1);

    assert!(!cookable(&app, item).is_being_heated());
}

#[test]
fn test_set_cook_state_only_fires_state_change() {
    let mut app = test_app();
    let item = spawn_item(&mut app, CookingProfile::new("steak", 5.0, 3.0));

    app.world_mut().trigger(SetCookState {
        entity: item,
        state: CookState::Cooked,
    });
    app.world_mut().flush();

    assert_eq!(cookable(&app, item).state(), CookState::Cooked);
    assert_eq!(
        app.world().resource::<Notifications>().0,
        vec![format!("Cooked {item:?}")]
    );
}

#[test]
fn test_reset_cooking() {
    let mut app = test_app();
    let item = spawn_item(&mut app, CookingProfile::new("steak", 5.0, 3.0));
    app.world_mut().trigger(SetCookState {
        entity: item,
        state: CookState::Burnt,
    });

    app.world_mut().trigger(ResetCooking { entity: item });

    assert_eq!(cookable(&app, item).state(), CookState::Raw);
    assert_eq!(cookable(&app, item).progress(), 0.0);
}

#[test]
fn test_requests_for_non_cookables_are_ignored() {
    let mut app = test_app();
    let rock = app.world_mut().spawn(Transform::default()).id();

    app.world_mut().trigger(StartCooking {
        entity: rock,
        heat_level: 1.0,
    });
    app.world_mut().trigger(SetCookState {
        entity: rock,
        state: CookState::Cooked,
    });
    tick(&mut app, 1.0);

    assert!(app.world().get::<ManualHeat>(rock).is_none());
    assert!(app.world().resource::<Notifications>().0.is_empty());
}

#[test]
fn test_spawn_cookable() {
    let mut app = test_app();

    let item = app
        .world_mut()
        .run_system_once(|mut commands: Commands| {
            spawn_cookable(
                &mut commands,
                "cooked_steak",
                Transform::from_xyz(1.0, 2.0, 3.0),
                Cookable::with_state(Handle::default(), CookState::Cooked),
            )
        })
        .unwrap();

    let world = app.world();
    assert_eq!(
        world.get::<PrefabId>(item).map(|id| id.0.as_str()),
        Some("cooked_steak")
    );
    assert_eq!(
        world.get::<Transform>(item).unwrap().translation,
        Vec3::new(1.0, 2.0, 3.0)
    );
    assert_eq!(world.get::<Cookable>(item).unwrap().progress(), 1.0);
}
