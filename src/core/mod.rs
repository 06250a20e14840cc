pub mod frame_loop;
pub mod geometry;
pub mod gradient;
pub mod orbit;
pub mod parallax;
pub mod scene;

pub use frame_loop::{FrameEffect, FrameHost, FrameLoop};
pub use geometry::{OrbitCenter, Rect, Viewport};
pub use gradient::{GradientGenerator, GradientState, InputSource};
pub use orbit::{ItemKey, OrbitAnimator, OrbitItem, Placement};
pub use scene::{EffectsConfig, Scene, SceneFrame};
