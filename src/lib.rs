//! A CPU-based flat-shaded 3D rendering pipeline.
//!
//! Geometry goes in as posed models built from triangle and quad faces;
//! what comes out is a back-to-front ordered stream of clipped,
//! pixel-aligned, color-resolved polygons delivered to a [`Surface`].
//! Hidden surfaces are handled by draw order alone, and lighting is a
//! discretized flat shade blended across any number of point lights.
//! SDL2 is used only to put the finished pixels on screen.
//!
//! # Quick Start
//!
//! ```ignore
//! use flatline::prelude::*;
//!
//! let mut engine = Engine::new(EngineSettings::default())?;
//! engine.add_light(PointLight::new(
//!     Vec4::point(1.0, 1.0, 1.0),
//!     Vec4::point(0.0, -2.0, 3.0),
//! ));
//!
//! let mut canvas = Canvas::new(800, 600);
//! let cube = primitives::cube().with_translation(Vec4::point(0.0, 0.0, 5.0));
//! engine.render_frame(&[cube], &mut canvas);
//! ```

// Public API - exposed to library consumers
pub mod clipping;
pub mod colors;
pub mod engine;
pub mod light;
pub mod math;
pub mod model;
pub mod primitives;
pub mod render;
pub mod settings;
pub mod surface;
pub mod window;

// Re-export commonly needed types at crate root for convenience
pub use engine::{DrawItem, Engine, FrameContext, Primitive};
pub use model::{Face, FaceError, LoadError, Model};
pub use settings::{EngineSettings, SettingsError};
pub use surface::Surface;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use flatline::prelude::*;
/// ```
pub mod prelude {
    // Engine
    pub use crate::engine::{DrawItem, Engine, FrameContext, Primitive};

    // Scene
    pub use crate::light::PointLight;
    pub use crate::model::{Face, Model};
    pub use crate::primitives;
    pub use crate::settings::EngineSettings;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec4::Vec4;

    // Output
    pub use crate::render::Canvas;
    pub use crate::surface::{NullSurface, Surface};
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}
