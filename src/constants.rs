use glam::Vec2;

// Shared tuning constants for the canvas effects layer.

// Canvas element ids, one per page section
pub const DRIFT_CANVAS_ID: &str = "fx-drift";
pub const LATTICE_CANVAS_ID: &str = "fx-lattice";
pub const WAVES_CANVAS_ID: &str = "fx-waves";
pub const LINKS_CANVAS_ID: &str = "fx-links";
pub const ORBITS_CANVAS_ID: &str = "fx-orbits";

// Sessions run only while their container is at least this fraction visible
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

// Pointer rests far off-screen until the first pointermove arrives
pub const POINTER_PARKED: Vec2 = Vec2::new(-1000.0, -1000.0);

// Upper bound on one simulation step; keeps resumed sessions from jumping
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Base seed for per-effect RNGs
pub const FX_SEED: u64 = 42;

// Scroll reveal
pub const REVEAL_SELECTOR: &str = "[data-reveal]";
pub const REVEAL_CLASS: &str = "is-revealed";
pub const REVEAL_THRESHOLD: f64 = 0.2;

// Drift (hero): floating motes pulled toward the pointer
pub const DRIFT_COUNT: usize = 90;
pub const DRIFT_SPEED_MAX: f32 = 22.0; // px/sec per axis at spawn
pub const DRIFT_RADIUS_MIN: f32 = 0.8;
pub const DRIFT_RADIUS_MAX: f32 = 2.4;
pub const DRIFT_ALPHA_MIN: f32 = 0.25;
pub const DRIFT_ALPHA_MAX: f32 = 0.8;
pub const DRIFT_PULL_RADIUS: f32 = 160.0;
pub const DRIFT_PULL_GAIN: f32 = 90.0; // px/sec^2 at the pointer
pub const DRIFT_DAMPING_PER_SEC: f32 = 0.6;
pub const DRIFT_WRAP_MARGIN: f32 = 4.0;
pub const DRIFT_FILL: &str = "#9bb4d0";

// Lattice: grid dots pushed away from the pointer, easing back home
pub const LATTICE_SPACING: f32 = 50.0;
pub const LATTICE_PUSH_RADIUS: f32 = 120.0;
pub const LATTICE_PUSH_MAX: f32 = 24.0; // px displacement at the pointer
pub const LATTICE_EASE_TAU_SEC: f32 = 0.18;
pub const LATTICE_DOT_RADIUS: f32 = 1.5;
pub const LATTICE_FILL: &str = "#5c6f8a";

// Waves: layered sine lines, pointer-independent
pub const WAVE_LAYER_AMPLITUDES: [f32; 3] = [26.0, 18.0, 12.0];
pub const WAVE_LAYER_FREQUENCIES: [f32; 3] = [0.008, 0.012, 0.017];
pub const WAVE_LAYER_PHASE_RATES: [f32; 3] = [0.9, 1.3, 1.8];
pub const WAVE_LAYER_ALPHAS: [f32; 3] = [0.5, 0.35, 0.22];
pub const WAVE_SAMPLE_STEP: f32 = 6.0; // px between polyline samples
pub const WAVE_LINE_WIDTH: f64 = 1.5;
pub const WAVE_STROKE: &str = "#38bdf8";

// Links: wandering nodes joined by distance-faded lines, avoiding the pointer
pub const LINK_COUNT: usize = 48;
pub const LINK_SPEED_MIN: f32 = 12.0; // px/sec
pub const LINK_SPEED_MAX: f32 = 34.0;
pub const LINK_AVOID_RADIUS: f32 = 100.0;
pub const LINK_AVOID_GAIN: f32 = 140.0; // px/sec^2 at the pointer
pub const LINK_SPEED_CAP: f32 = 70.0;
pub const LINK_DISTANCE: f32 = 140.0;
pub const LINK_LINE_ALPHA: f32 = 0.5; // at zero separation, fading to 0 at LINK_DISTANCE
pub const LINK_DOT_RADIUS: f32 = 1.8;
pub const LINK_FILL: &str = "#cbd5e1";
pub const LINK_STROKE: &str = "#94a3b8";
pub const LINK_LINE_WIDTH: f64 = 1.0;

// Orbits: spinning polygon outlines with a gentle parallax pull
pub const ORBIT_COUNT: usize = 12;
pub const ORBIT_SIDES_MIN: u32 = 3;
pub const ORBIT_SIDES_MAX: u32 = 6;
pub const ORBIT_SIZE_MIN: f32 = 8.0;
pub const ORBIT_SIZE_MAX: f32 = 26.0;
pub const ORBIT_SPIN_MAX: f32 = 0.6; // rad/sec, either direction
pub const ORBIT_PULL_RADIUS: f32 = 220.0;
pub const ORBIT_PULL_FRACTION: f32 = 0.06;
pub const ORBIT_EASE_TAU_SEC: f32 = 0.35;
pub const ORBIT_ALPHA: f32 = 0.4;
pub const ORBIT_LINE_WIDTH: f64 = 1.2;
pub const ORBIT_STROKE: &str = "#7dd3fc";
