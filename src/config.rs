//! Application-level configuration constants.

// Item list
pub const DEFAULT_ITEMS: &str = "Kimchi stew, Spicy pork, Tonkatsu, Naengmyeon, Kalguksu, Budae jjigae, Bibimbap, Sushi, Pasta, Pho, Cheeseburger, Salad";
pub const ITEMS_QUERY_PARAM: &str = "items";
pub const EDITOR_ID: &str = "items-input";

// Wheel animation
pub const SPIN_TRANSITION: &str = "transform 3.4s cubic-bezier(0.22, 0.61, 0.36, 1)";
pub const SPIN_TRANSITION_PROPERTY: &str = "transform";
pub const DEFAULT_WHEEL_SIZE_PX: u32 = 380;
pub const WHEEL_HALO_PX: u32 = 40;

// Feedback
pub const VIBRATE_MS: u32 = 30;
pub const SPIN_START_TONE_HZ: f32 = 160.0;
pub const SPIN_START_TONE_SEC: f64 = 0.04;
pub const SPIN_END_TONE_HZ: f32 = 440.0;
pub const SPIN_END_TONE_SEC: f64 = 0.08;
pub const TONE_GAIN: f32 = 0.08;
pub const MIN_TONE_MS: u32 = 10;

// Options
pub const DEFAULT_NO_REPEAT: bool = true;
pub const DEFAULT_MUTE: bool = false;
