mod common;

use common::{approx, Op, RecordingSurface};
use glam::{Vec2, Vec3};
use orbit_core::color::Rgb;
use orbit_core::config::SceneConfig;
use orbit_core::constants::{CENTER_AUTO_ROTATION, USER_PALETTE};
use orbit_core::geometry::Geometry;
use orbit_core::orbit::{orbit_position, sphere_rotation, Orientation};
use orbit_core::protocol::decode_server_event;
use orbit_core::scene::Scene;

// Centre composite: base plus four glow clones.
const CENTER_GRAPHICS: usize = 5;
// User composite: base plus three glow clones.
const USER_GRAPHICS: usize = 4;

fn scene() -> Scene {
    Scene::new(SceneConfig::default(), 800.0, 600.0, 7)
}

#[test]
fn new_scene_owns_only_the_center_visual() {
    let s = scene();
    assert!(s.users().is_empty());
    assert!(s.trails().is_empty());
    assert_eq!(s.stage().live_count(), CENTER_GRAPHICS);
    assert_eq!(s.viewport(), Vec2::new(800.0, 600.0));
}

#[test]
fn users_get_palette_colors_in_join_order() {
    let mut s = scene();
    assert!(s.user_connected("A"));
    assert!(s.user_connected("B"));
    assert_eq!(s.user("A").unwrap().color, Rgb::from_hex(USER_PALETTE[0]));
    assert_eq!(s.user("B").unwrap().color, Rgb::from_hex(USER_PALETTE[1]));
    assert_eq!(s.user("A").unwrap().orientation, Orientation::default());
}

#[test]
fn palette_index_follows_current_user_count() {
    let mut s = scene();
    s.user_connected("A");
    s.user_connected("B");
    s.user_disconnected("A");
    s.user_connected("C");
    assert_eq!(s.user("C").unwrap().color, Rgb::from_hex(USER_PALETTE[1]));
}

#[test]
fn palette_wraps_after_seven_users() {
    let mut s = scene();
    for i in 0..8 {
        s.user_connected(&format!("user-{}", i));
    }
    assert_eq!(s.user("user-7").unwrap().color, Rgb::from_hex(USER_PALETTE[0]));
}

#[test]
fn join_distance_is_jittered_above_minimum() {
    let mut s = scene();
    for i in 0..20 {
        s.user_connected(&i.to_string());
    }
    for u in s.users() {
        assert!(u.distance >= 20.0 && u.distance <= 30.0);
    }
}

#[test]
fn duplicate_connect_is_ignored() {
    let mut s = scene();
    assert!(s.user_connected("A"));
    assert!(!s.user_connected("A"));
    assert_eq!(s.users().len(), 1);
    assert_eq!(s.stage().live_count(), CENTER_GRAPHICS + USER_GRAPHICS);
}

#[test]
fn samples_for_unknown_users_create_no_state() {
    let mut s = scene();
    assert!(!s.apply_orientation("ghost", Orientation::new(10.0, 20.0, 30.0)));
    assert!(s.users().is_empty());
    assert_eq!(s.stage().live_count(), CENTER_GRAPHICS);
}

#[test]
fn orientation_sample_sets_sphere_spin_and_pins_distance() {
    let mut s = scene();
    s.user_connected("A");
    let o = Orientation::new(90.0, 45.0, -30.0);
    assert!(s.apply_orientation("A", o));
    let user = s.user("A").unwrap();
    assert_eq!(user.orientation, o);
    assert_eq!(user.distance, 50.0);
    assert_eq!(user.sphere.rotation, sphere_rotation(o, 0.02));
    assert!(approx(user.sphere.rotation.x, 0.9, 1e-6));
    assert!(approx(user.sphere.rotation.y, -0.6, 1e-6));
    assert!(approx(user.sphere.rotation.z, 1.8, 1e-6));
}

#[test]
fn orbit_position_maps_orientation_onto_shell() {
    let rest = orbit_position(Orientation::default(), 200.0, 0.5);
    assert!((rest - Vec3::new(0.0, 0.0, 200.0)).length() < 1e-3);

    let turned = orbit_position(Orientation::new(90.0, 0.0, 0.0), 200.0, 0.5);
    assert!((turned - Vec3::new(200.0, 0.0, 0.0)).length() < 1e-3);

    // Beta uses a 90° divisor, so 90° of beta tilts a full quarter turn.
    let tilted = orbit_position(Orientation::new(0.0, 90.0, 0.0), 200.0, 0.5);
    assert!((tilted - Vec3::new(0.0, 200.0, 0.0)).length() < 1e-3);

    let half = orbit_position(Orientation::new(0.0, 45.0, 0.0), 200.0, 0.5);
    assert!(approx(half.y, 200.0 * std::f32::consts::FRAC_1_SQRT_2, 1e-3));
    for o in [
        Orientation::new(12.0, -33.0, 5.0),
        Orientation::new(300.0, 170.0, 80.0),
    ] {
        assert!(approx(orbit_position(o, 200.0, 0.5).length(), 200.0, 1e-2));
    }
}

#[test]
fn disconnect_releases_user_graphics() {
    let mut s = scene();
    s.user_connected("A");
    assert_eq!(s.stage().live_count(), CENTER_GRAPHICS + USER_GRAPHICS);
    assert!(s.user_disconnected("A"));
    assert_eq!(s.stage().live_count(), CENTER_GRAPHICS);
    assert!(!s.user_disconnected("A"));
}

#[test]
fn relay_frames_drive_the_scene() {
    let mut s = scene();
    for frame in [
        r#"{"event":"userConnected","data":"phone"}"#,
        r#"{"event":"gyroscopeData","data":{"userId":"phone","alpha":90,"beta":0,"gamma":0}}"#,
    ] {
        s.apply_event(decode_server_event(frame).unwrap());
    }
    assert_eq!(s.user("phone").unwrap().orientation.alpha, 90.0);
    s.apply_event(decode_server_event(r#"{"event":"userDisconnected","data":"phone"}"#).unwrap());
    assert!(s.users().is_empty());
}

#[test]
fn tick_auto_rotates_center_by_frame_delta() {
    let mut s = scene();
    let stats = s.tick(1.0);
    assert_eq!(stats.center_points, 225);
    let r = s.center().rotation;
    assert_eq!(r.x, CENTER_AUTO_ROTATION[0]);
    assert_eq!(r.y, CENTER_AUTO_ROTATION[1]);
    assert_eq!(r.z, CENTER_AUTO_ROTATION[2]);
}

#[test]
fn frame_delta_is_clamped() {
    let mut s = scene();
    s.tick(10.0);
    assert!(approx(s.center().rotation.x, CENTER_AUTO_ROTATION[0] * 2.0, 1e-7));
    s.tick(-3.0);
    assert!(approx(s.center().rotation.x, CENTER_AUTO_ROTATION[0] * 2.0, 1e-7));
    s.tick(f32::NAN);
    assert!(approx(s.center().rotation.x, CENTER_AUTO_ROTATION[0] * 2.0, 1e-7));
}

#[test]
fn dragging_replaces_auto_rotation() {
    let mut s = scene();
    s.begin_drag();
    assert!(s.is_dragging());
    s.tick(1.0);
    assert_eq!(s.center().rotation.x, 0.0);

    s.drag_by(Vec2::new(10.0, 5.0));
    assert!(approx(s.center().rotation.y, 0.1, 1e-6));
    assert!(approx(s.center().rotation.x, 0.05, 1e-6));

    s.end_drag();
    s.drag_by(Vec2::new(100.0, 100.0));
    assert!(approx(s.center().rotation.y, 0.1, 1e-6));
    s.tick(1.0);
    assert!(approx(s.center().rotation.y, 0.1 + CENTER_AUTO_ROTATION[1], 1e-6));
}

#[test]
fn each_visible_user_spawns_trails_every_frame() {
    let mut s = scene();
    s.user_connected("A");
    s.user_connected("B");
    let stats = s.tick(1.0);
    assert_eq!(stats.user_points, 2 * 144);
    assert_eq!(stats.trails_spawned, 4);
    assert_eq!(s.trails().len(), 4);
    for trail in s.trails().iter() {
        assert!(approx(trail.life(), 1.0 - 1.0 / 60.0, 1e-6));
        assert_eq!(trail.end(), Vec2::ZERO);
    }
}

#[test]
fn trail_pool_stays_bounded_over_many_frames() {
    let mut s = scene();
    for id in ["A", "B", "C"] {
        s.user_connected(id);
    }
    for _ in 0..40 {
        s.tick(0.5);
    }
    assert_eq!(s.trails().len(), 100);
    assert_eq!(
        s.stage().live_count(),
        CENTER_GRAPHICS + 3 * USER_GRAPHICS + 100
    );
}

#[test]
fn trails_expire_once_their_life_runs_out() {
    let mut s = scene();
    s.user_connected("A");
    s.tick(1.0);
    s.user_disconnected("A");
    let mut expired = 0;
    for _ in 0..30 {
        expired += s.tick(2.0).trails_expired;
    }
    assert_eq!(expired, 2);
    assert!(s.trails().is_empty());
}

#[test]
fn render_replays_center_and_glow_layers() {
    let mut s = scene();
    s.tick(1.0);
    let mut surface = RecordingSurface::default();
    s.render(&mut surface);
    assert_eq!(surface.ops.first(), Some(&Op::Begin(800.0, 600.0)));
    assert_eq!(surface.layers().len(), CENTER_GRAPHICS);
    assert_eq!(surface.circles(), 225 * CENTER_GRAPHICS);
    assert_eq!(surface.curves(), 0);
    assert!(surface
        .ops
        .iter()
        .all(|op| !matches!(op, Op::Push(origin, _) if *origin != Vec2::new(400.0, 300.0))));
}

#[test]
fn render_includes_trails_and_user_spheres() {
    let mut s = scene();
    s.user_connected("A");
    s.tick(1.0);
    let mut surface = RecordingSurface::default();
    s.render(&mut surface);
    assert_eq!(surface.curves(), 2);
    assert_eq!(
        surface.layers().len(),
        CENTER_GRAPHICS + USER_GRAPHICS + 2
    );
}

#[test]
fn zoom_and_resize_update_camera() {
    let mut s = scene();
    s.zoom(1.0e6);
    assert_eq!(s.camera().position.z, -100.0);
    s.zoom(-1.0e6);
    assert_eq!(s.camera().position.z, -500.0);
    s.resize(1000.0, 500.0);
    assert_eq!(s.viewport(), Vec2::new(1000.0, 500.0));
    assert!(approx(s.camera().aspect, 2.0, 1e-6));
}

#[test]
fn background_brightens_with_audience() {
    let mut s = scene();
    assert!(approx(s.background_opacity(), 0.3, 1e-6));
    s.user_connected("A");
    assert!(approx(s.background_opacity(), 0.3 + 0.2 * 0.7, 1e-6));
    for i in 0..6 {
        s.user_connected(&i.to_string());
    }
    assert!(approx(s.background_opacity(), 1.0, 1e-6));
}

#[test]
fn cube_geometry_can_replace_the_center_sphere() {
    let mut s = scene();
    s.set_center_geometry(Geometry::CubeEdges {
        size: 160.0,
        points_per_edge: 10,
    });
    let stats = s.tick(1.0);
    assert_eq!(stats.center_points, 120);
}

#[test]
fn teardown_releases_every_graphics_object() {
    let mut s = scene();
    s.user_connected("A");
    s.user_connected("B");
    for _ in 0..5 {
        s.tick(1.0);
    }
    assert!(s.stage().live_count() > CENTER_GRAPHICS);
    s.teardown();
    assert_eq!(s.stage().live_count(), 0);
    assert!(s.users().is_empty());
    assert!(s.trails().is_empty());

    // Ticking after teardown draws nothing and allocates nothing.
    let stats = s.tick(1.0);
    assert_eq!(stats.center_points, 0);
    assert_eq!(s.stage().live_count(), 0);
}

#[test]
fn same_seed_gives_same_frames() {
    let run = || {
        let mut s = scene();
        s.user_connected("A");
        s.tick(1.0);
        s.trails()
            .iter()
            .flat_map(|t| t.control_points().to_vec())
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
