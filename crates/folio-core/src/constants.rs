// Shared tuning constants for the two portfolio scenes.

// Responsive layout
pub const COMPACT_WIDTH_PX: f32 = 600.0; // viewports narrower than this use the compact layout
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Camera (both scenes)
pub const CAMERA_FOV_DEG: f32 = 35.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;

// ---------------- Snow + car scene ----------------

pub const SNOW_COUNT: usize = 3000;
pub const SNOW_HALF_EXTENT: f32 = 50.0; // x/z spawn in [-50, 50), floor at y = -50
pub const SNOW_SPAWN_HEIGHT: f32 = 100.0; // initial y in [0, 100)
pub const SNOW_RESPAWN_Y: f32 = 50.0;
pub const SNOW_FLOOR_Y: f32 = -50.0;
pub const SNOW_SPEED_MIN: f32 = 0.5; // fall speed in [0.5, 1.5)
pub const SNOW_SPEED_SPAN: f32 = 1.0;
pub const SNOW_STEP: f32 = 0.1; // y -= speed * SNOW_STEP per tick
pub const SNOW_POINT_SIZE: f32 = 2.0; // size-attenuated point size at unit scale
pub const SNOW_COLOR: [f32; 3] = [0.78, 0.84, 0.95];

pub const SNOW_CAMERA_EYE: [f32; 3] = [0.0, 5.0, 20.0];
pub const SNOW_BACKGROUND: [f64; 3] = [0.941, 0.941, 0.941]; // #f0f0f0
pub const SNOW_AMBIENT: f32 = 1.0;
pub const SNOW_LIGHT_DIR: [f32; 3] = [5.0, 5.0, 5.0];
pub const SNOW_LIGHT_INTENSITY: f32 = 1.0;

// Car patrol
pub const PATROL_STEP: f32 = 0.1; // per-tick translation and rotation step
pub const PATROL_CAMERA_MARGIN: f32 = 5.0; // approach ends at camera z + margin
pub const PATROL_FAR_FACTOR: f32 = 8.0; // far waypoint = home offset * factor
pub const PATROL_HOME_OFFSET: f32 = 5.0;
pub const PATROL_HOME_OFFSET_COMPACT: f32 = 0.5;
pub const PATROL_SCALE: f32 = 0.5;
pub const PATROL_SCALE_COMPACT: f32 = 0.3;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_ZOOM_STEP: f32 = 0.95;
pub const ORBIT_MIN_RADIUS: f32 = 2.0;
pub const ORBIT_MAX_RADIUS: f32 = 80.0;
pub const ORBIT_POLAR_EPSILON: f32 = 1e-3;

// ---------------- Floating objects showcase ----------------

pub const SECTION_COUNT: usize = 3;
pub const OBJECTS_DISTANCE: f32 = 4.0; // vertical spacing between section objects
pub const SECTION_HEIGHT_FACTOR: f32 = 1.2; // section = round(scroll / (height * factor))
pub const OBJECT_BASE_X: [f32; SECTION_COUNT] = [-2.0, 2.0, -2.0];
pub const OBJECT_SCALE: f32 = 1.0;
pub const OBJECT_SCALE_COMPACT: f32 = 0.7;

pub const SPIN_RATE_X: f32 = 0.1; // radians per second
pub const SPIN_RATE_Y: f32 = 0.12;
pub const Y_ONLY_SECTION: usize = 1; // this section's object never spins on x

pub const SECTION_TWEEN_SECS: f32 = 2.0;
pub const SECTION_Y_ONLY_KICK: [f32; 3] = [0.0, 6.0, 0.0];
pub const SECTION_KICK: [f32; 3] = [6.0, 3.0, 6.0];

pub const PARALLAX_RATE: f32 = 5.0; // exponential smoothing rate (1/s)
pub const SHOWCASE_CAMERA_Z: f32 = 6.0;
pub const SHOWCASE_AMBIENT: f32 = 0.1;
pub const SHOWCASE_LIGHT_DIR: [f32; 3] = [1.0, 1.0, 0.0];
pub const SHOWCASE_LIGHT_INTENSITY: f32 = 1.0;

// Flat stand-ins for the lava / stone / water materials
pub const OBJECT_COLORS: [[f32; 3]; SECTION_COUNT] = [
    [0.95, 0.38, 0.16], // lava
    [0.62, 0.60, 0.58], // stone
    [0.26, 0.55, 0.86], // water
];
