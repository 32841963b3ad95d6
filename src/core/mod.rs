pub mod axis;
pub mod element;
pub mod errors;
pub mod meta_data;
pub mod util;

pub use self::axis::Axis;
pub use self::element::Element;
pub use self::errors::DecodeError;
pub use self::meta_data::MonMeta;
