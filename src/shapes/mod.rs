mod circle;
mod edge;
mod rectangle;
mod shape;

pub use self::circle::Circle;
pub use self::edge::{Edge, EdgeKind};
pub use self::rectangle::Rectangle;
pub use self::shape::{Shape, ShapeKind};
