pub mod codec;
pub mod package;
pub mod wire;

pub use self::codec::MonObjectCodec;
pub use self::package::HistoPackage;
pub use self::wire::DELTA_SENTINEL;
