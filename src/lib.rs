//! # dqmon
//!
//! Monitoring-object model and binary wire codec for detector data-quality
//! monitoring (DQM).
//!
//! A producer fills [`Histo1`], [`Histo2`], [`Graph1`] and [`TimedGraph1`]
//! instances, registers them in a [`HistoPackage`], sends the package once in
//! full form (config + contents for every member) and thereafter sends
//! contents-only deltas on each refresh tick. A consumer decodes the full
//! form once, learning member count, concrete types and axis layout, then
//! applies successive deltas by wire index, mutating the already-allocated
//! buffers in place.
//!
//! ```
//! use bytes::BytesMut;
//! use dqmon::{Histo1, HistoPackage};
//!
//! let mut pack = HistoPackage::new("beam");
//! let mut h = Histo1::double("rate", "Trigger rate", 10, 0.0, 10.0);
//! h.fill(5.5);
//! pack.add(h.into());
//!
//! let mut buf = BytesMut::new();
//! pack.write_object(&mut buf);
//!
//! let decoded = HistoPackage::read_object(&mut buf.freeze()).unwrap();
//! assert_eq!(decoded.len(), 1);
//! ```
//!
//! Encode and decode are pure transformations over in-memory buffers: no
//! I/O, no locking, no retries. The crate does not defend against concurrent
//! mutation of the same package from two threads; serializing writers and
//! keeping renders from racing a decode is the caller's responsibility. A
//! decode either fully consumes its declared structure or fails with a
//! [`DecodeError`], in which case the caller must discard the package state
//! and request a fresh full transfer.

pub mod core;
pub mod array;
pub mod histo;
pub mod serialization;

pub use crate::core::axis::Axis;
pub use crate::core::element::Element;
pub use crate::core::errors::DecodeError;
pub use crate::core::meta_data::MonMeta;
pub use crate::array::{ElementType, NumberArray, TypedArray};
pub use crate::histo::{factory, Graph1, Histo1, Histo2, MonObject, TimedGraph1};
pub use crate::serialization::codec::MonObjectCodec;
pub use crate::serialization::package::HistoPackage;

#[cfg(test)]
mod tests;
