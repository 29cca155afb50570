pub mod canvas;
pub mod renderer;
pub mod surface;

pub use canvas::{CellCanvas, StatusPanel, TuiSurface};
pub use renderer::Renderer;
pub use surface::{Color, Overlay, RenderSurface, StatusSurface};
