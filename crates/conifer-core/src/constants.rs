// Default tuning constants shared by the core and the native front-end.

// Ensemble size
pub const DEFAULT_COUNT: usize = 1500;

// Scene layout (world units)
pub const SCATTER_RADIUS: f32 = 15.0; // max radius of the scattered cloud
pub const SCATTER_CENTER_Y: f32 = 0.0; // cloud center; the cone is centered on y = 0
pub const TREE_HEIGHT: f32 = 12.0; // total cone height
pub const TREE_RADIUS: f32 = 4.5; // cone radius at the base
pub const SPIRAL_INCREMENT: f32 = 2.4; // radians per particle, close to the golden angle

// Apex element
pub const APEX_OFFSET: f32 = 0.6; // gap above the cone tip
pub const APEX_SCATTER_LIFT: f32 = 4.0; // extra height of the scattered apex above the tip
pub const APEX_SCATTER_JITTER: f32 = 0.8; // horizontal/vertical jitter of the scattered apex
pub const APEX_SCALE: f32 = 2.6;
pub const APEX_COLOR: [f32; 3] = [1.0, 0.84, 0.0]; // saturated gold

// Per-particle scale range [min, max)
pub const SCALE_MIN: f32 = 0.6;
pub const SCALE_MAX: f32 = 1.4;

// Progress relaxation rate (1/s)
pub const ANIM_SPEED: f32 = 2.5;
// Distance to the target below which progress snaps onto it
pub const SETTLE_EPSILON: f32 = 1e-4;

// Palette
pub const ACCENT_PROBABILITY: f32 = 0.35;
pub const BASE_COLORS: [[f32; 3]; 3] = [
    [0.05, 0.45, 0.15], // deep green
    [0.10, 0.60, 0.25], // pine
    [0.20, 0.75, 0.35], // light green
];
pub const ACCENT_COLORS: [[f32; 3]; 3] = [
    [0.90, 0.10, 0.15], // red
    [1.00, 0.75, 0.20], // gold
    [0.85, 0.90, 1.00], // silver
];

// Breathing oscillation
pub const FLOAT_FREQUENCY: f32 = 1.2; // rad/s
pub const FLOAT_AMPLITUDE_SCATTERED: f32 = 0.5;
pub const FLOAT_AMPLITUDE_STRUCTURED: f32 = 0.05;
pub const PHASE_SPREAD: f32 = 0.1; // phase step between consecutive particles
pub const APEX_FLOAT_FREQUENCY: f32 = 0.6;
pub const APEX_FLOAT_AMPLITUDE: f32 = 0.03;

// Rotation
pub const TUMBLE_RATE: f32 = 1.0; // rad/s at progress 0
pub const SPIN_RATE: f32 = 0.5; // rad/s, always on
pub const APEX_SPIN_RATE: f32 = 0.4;

// Scale curve at progress 0 (assembled particles reach 1.0)
pub const SCATTERED_SCALE_FACTOR: f32 = 0.4;

// Frame clock: deltas above this are clamped (window drags, breakpoints)
pub const MAX_FRAME_DELTA_SEC: f32 = 0.1;

// Camera
pub const CAMERA_DISTANCE: f32 = 28.0;
pub const CAMERA_HEIGHT: f32 = 3.0;
pub const CAMERA_ORBIT_RATE: f32 = 0.1; // rad/s
