pub mod number_array;
pub mod typed_array;

pub use self::number_array::{ElementType, NumberArray};
pub use self::typed_array::TypedArray;
