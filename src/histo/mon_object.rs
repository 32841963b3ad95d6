use crate::array::ElementType;
use crate::core::meta_data::MonMeta;
use crate::histo::{Graph1, Histo1, Histo2, TimedGraph1};

/// The closed set of monitoring-object shapes.
///
/// The wire type tag is the shape prefix plus the element-width letter
/// (`H1F`, `H2I`, `g1D`, `TGD`, ...), so the tag is a deterministic function
/// of the variant and never stored. Extending the set means adding a variant
/// here and an arm in [`factory::create`].
///
/// [`factory::create`]: crate::histo::factory::create
#[derive(Clone, Debug, PartialEq)]
pub enum MonObject {
    Histo1(Histo1),
    Histo2(Histo2),
    Graph1(Graph1),
    TimedGraph1(TimedGraph1),
}

impl MonObject {
    pub fn meta(&self) -> &MonMeta {
        match self {
            MonObject::Histo1(h) => h.meta(),
            MonObject::Histo2(h) => h.meta(),
            MonObject::Graph1(g) => g.meta(),
            MonObject::TimedGraph1(g) => g.meta(),
        }
    }

    pub fn meta_mut(&mut self) -> &mut MonMeta {
        match self {
            MonObject::Histo1(h) => h.meta_mut(),
            MonObject::Histo2(h) => h.meta_mut(),
            MonObject::Graph1(g) => g.meta_mut(),
            MonObject::TimedGraph1(g) => g.meta_mut(),
        }
    }

    pub fn name(&self) -> &str {
        &self.meta().name
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            MonObject::Histo1(h) => h.data().element_type(),
            MonObject::Histo2(h) => h.data().element_type(),
            MonObject::Graph1(g) => g.data().element_type(),
            MonObject::TimedGraph1(g) => g.data().element_type(),
        }
    }

    /// Wire type tag: shape prefix plus element letter.
    pub fn data_type(&self) -> String {
        match self {
            MonObject::Histo1(h) => h.data_type(),
            MonObject::Histo2(h) => h.data_type(),
            MonObject::Graph1(g) => g.data_type(),
            MonObject::TimedGraph1(g) => g.data_type(),
        }
    }

    /// Zero the variant's content buffers.
    pub fn reset(&mut self) {
        match self {
            MonObject::Histo1(h) => h.reset(),
            MonObject::Histo2(h) => h.reset(),
            MonObject::Graph1(g) => g.reset(),
            MonObject::TimedGraph1(g) => g.reset(),
        }
    }
}

impl From<Histo1> for MonObject {
    fn from(h: Histo1) -> MonObject {
        MonObject::Histo1(h)
    }
}
impl From<Histo2> for MonObject {
    fn from(h: Histo2) -> MonObject {
        MonObject::Histo2(h)
    }
}
impl From<Graph1> for MonObject {
    fn from(g: Graph1) -> MonObject {
        MonObject::Graph1(g)
    }
}
impl From<TimedGraph1> for MonObject {
    fn from(g: TimedGraph1) -> MonObject {
        MonObject::TimedGraph1(g)
    }
}
