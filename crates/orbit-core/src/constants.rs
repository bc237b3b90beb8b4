// Scene tuning constants shared by the display client and its tests.
//
// Angles are radians unless the name says otherwise. Per-frame rates are in
// "frame units": one unit is one frame at 60 fps.

// Camera
pub const CAMERA_INITIAL_Z: f32 = -250.0;
pub const CAMERA_FOV_DEG: f32 = 60.0;
pub const CAMERA_MIN_Z: f32 = -500.0; // farthest dolly position
pub const CAMERA_MAX_Z: f32 = -100.0; // closest dolly position
pub const CAMERA_ZOOM_SENSITIVITY: f32 = 0.1; // world units per wheel delta unit

// Projection: fixed display scale applied after the perspective divide
pub const DISPLAY_SCALE: f32 = 100.0;

// Center sphere
pub const CENTER_RADIUS: f32 = 120.0;
pub const CENTER_SEGMENTS: u32 = 15; // segments² points
pub const CENTER_AUTO_ROTATION: [f32; 3] = [0.005, 0.01, 0.003]; // x, y, z per frame unit
pub const CENTER_DRAG_SENSITIVITY: f32 = 0.01; // radians per dragged pixel
pub const CENTER_POINT_SIZE_BASE: f32 = 5.0;
pub const CENTER_POINT_SIZE_FALLOFF: f32 = 100.0;
pub const CENTER_PALETTE: [u32; 3] = [0x40efef, 0x9b8d7f, 0xdf43d0];

// User spheres
pub const USER_RADIUS: f32 = 25.0;
pub const USER_SEGMENTS: u32 = 12;
pub const USER_ORBIT_RADIUS: f32 = 200.0;
pub const USER_MIN_DISTANCE: f32 = 20.0;
pub const USER_MAX_DISTANCE: f32 = 80.0;
pub const USER_DEFAULT_DISTANCE: f32 = 50.0;
pub const USER_JOIN_DISTANCE_JITTER: f32 = 10.0; // added to the min distance on join
pub const USER_ROTATION_SENSITIVITY: f32 = 0.02; // sphere radians per orientation degree
pub const USER_BETA_MULTIPLIER: f32 = 0.5;
pub const USER_POINT_SIZE_BASE: f32 = 4.0;
pub const USER_POINT_SIZE_FALLOFF: f32 = 100.0;
pub const USER_PALETTE: [u32; 7] = [
    0xFF4500, 0x00BFFF, 0xFF1493, 0xFFD700, 0x32CD32, 0xDA70D6, 0x20B2AA,
];

// Trails
pub const TRAIL_CAPACITY: usize = 100;
pub const TRAIL_LIFESPAN: f32 = 1.0; // seconds at 60 fps
pub const TRAIL_SIZE: f32 = 2.0;
pub const TRAIL_ALPHA: f32 = 0.3;
pub const TRAIL_LINE_WIDTH_MULTIPLIER: f32 = 1.2;
pub const TRAIL_SURFACE_OFFSET: f32 = 10.0; // screen px from the sphere centre
pub const TRAIL_CONTROL_POINTS: usize = 3;
pub const TRAIL_MAX_CONTROL_POINTS: usize = 3;
pub const TRAIL_DEVIATION_FACTOR: f32 = 0.5;
pub const TRAIL_TENSION: f32 = 0.5;
pub const TRAILS_PER_FRAME: usize = 2; // per user
pub const TRAIL_POINT_SPEEDUP: f32 = 0.2; // later control points collapse faster

// Glow layers
pub const USER_GLOW_LAYERS: usize = 3;
pub const USER_GLOW_ALPHA_BASE: f32 = 0.3;
pub const USER_GLOW_ALPHA_STEP: f32 = 0.05;
pub const USER_GLOW_BLUR_BASE: f32 = 3.0;
pub const USER_GLOW_BLUR_STEP: f32 = 3.0;
pub const CENTER_GLOW_LAYERS: usize = 4;
pub const CENTER_GLOW_ALPHA_BASE: f32 = 0.2;
pub const CENTER_GLOW_ALPHA_STEP: f32 = 0.03;
pub const CENTER_GLOW_BLUR_BASE: f32 = 0.0;
pub const CENTER_GLOW_BLUR_STEP: f32 = 2.0;

// Background gradient
pub const BACKGROUND_USERS_FOR_FULL: usize = 5;
pub const BACKGROUND_MIN_OPACITY: f32 = 0.3;

// Frame clock
pub const MAX_FRAME_DELTA: f32 = 2.0; // frame units; longer stalls are clamped
pub const FRAME_UNITS_PER_SECOND: f32 = 60.0;
