// DOM contract and asset locations used by the web frontend.

// Intro screen, built at start-up
pub const INTRO_CLASS: &str = "intro";
pub const INTRO_TITLE: &str = "Welcome!";
pub const INTRO_DESCRIPTION: &str = "Hello, I'm Mazen. I'm a front-end developer with a passion for crafting responsive, visually engaging interfaces.";
pub const OPEN_PORTFOLIO_BUTTON_ID: &str = "openPortfolioBtn";
pub const OPEN_PORTFOLIO_LABEL: &str = "Explore My Work";

// Elements expected in index.html
pub const PORTFOLIO_CONTENT_ID: &str = "portfolioContent";
pub const TOGGLE_SCENE_BUTTON_ID: &str = "toggleSceneBtn";
pub const SNOW_CANVAS_ID: &str = "snow-canvas";
pub const SHOWCASE_CANVAS_ID: &str = "showcase-canvas";

// Assets
pub const CAR_MODEL_URL: &str = "models/car.glb";

// Longest frame step fed to time-based animation (tab switches, stalls)
pub const MAX_FRAME_DT_SEC: f32 = 0.1;

// Keyboard
pub const SNOW_TOGGLE_KEYS: [&str; 2] = ["s", "S"];
