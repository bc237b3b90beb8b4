//! Platform-free core of the gyro-orbit display: point-cloud projection,
//! droplet trails, orbiting user spheres and the relay event contract.

pub mod cloud;
pub mod color;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod glow;
pub mod graphics;
pub mod orbit;
pub mod projection;
pub mod protocol;
pub mod renderer;
pub mod scene;
pub mod trail;
pub mod transform;

pub use cloud::PointCloud;
pub use color::Rgb;
pub use config::SceneConfig;
pub use geometry::Geometry;
pub use glow::{GlowComposite, GlowStyle};
pub use graphics::{Layer, Stage, Surface};
pub use orbit::{Orientation, RemoteUser};
pub use projection::Camera;
pub use protocol::{ClientEvent, ClientType, ServerEvent};
pub use scene::{FrameStats, Scene};
pub use trail::{TrailPool, TrailSpawn};
