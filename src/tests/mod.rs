#[macro_use]
mod util;

mod array;
mod axis;
mod graph;
mod serialization;
