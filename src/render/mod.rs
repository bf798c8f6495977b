pub mod svg;
mod traits;

pub use self::traits::{Line, Primitive, Rect, Render};
