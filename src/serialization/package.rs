//! Named, ordered collection of monitoring objects forming one monitoring
//! session's snapshot.

use bytes::{Buf, BufMut};
use tracing::{debug, warn};

use crate::core::errors::DecodeError;
use crate::core::util::now_millis;
use crate::histo::{factory, MonObject};
use crate::serialization::codec::MonObjectCodec;
use crate::serialization::wire::{get_string, put_string, DELTA_SENTINEL};

/// An ordered, named set of monitoring objects with two serialization modes:
/// a full transfer (config + contents for every member, sent once per
/// session) and a delta transfer (contents only, indexed by wire position,
/// sent on every refresh tick).
///
/// Member order is the wire index the delta protocol is keyed on; members
/// must never be reordered without re-sending a full transfer.
#[derive(Clone, Debug, PartialEq)]
pub struct HistoPackage {
    name: String,
    update_id: i32,
    update_time: i64,
    members: Vec<MonObject>,
}

impl HistoPackage {
    pub fn new(name: &str) -> HistoPackage {
        HistoPackage {
            name: name.to_owned(),
            update_id: 0,
            update_time: 0,
            members: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn update_id(&self) -> i32 {
        self.update_id
    }
    /// Milliseconds since the epoch of the last contents transfer.
    pub fn update_time(&self) -> i64 {
        self.update_time
    }
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Register a member, returning its wire index.
    pub fn add(&mut self, object: MonObject) -> usize {
        self.members.push(object);
        self.members.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&MonObject> {
        self.members.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MonObject> {
        self.members.get_mut(index)
    }

    /// Member with the given name, if any.
    pub fn find(&self, name: &str) -> Option<&MonObject> {
        self.members.iter().find(|m| m.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonObject> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, MonObject> {
        self.members.iter_mut()
    }

    /// Zero every member and return the update id to 0, so the next delta
    /// carries the full-resync signal to the receiver.
    pub fn reset(&mut self) {
        for m in self.members.iter_mut() {
            m.reset();
        }
        self.update_id = 0;
    }

    /// Full transfer: name, member count, then per member its wire index,
    /// config and contents.
    pub fn write_object<B: BufMut>(&mut self, buf: &mut B) {
        put_string(buf, &self.name);
        buf.put_i32(self.members.len() as i32);
        for (i, m) in self.members.iter_mut().enumerate() {
            buf.put_i32(i as i32);
            m.write_full(buf);
        }
        debug!(name = %self.name, members = self.members.len(), "wrote full package");
    }

    /// Decode a full transfer, resolving each member's concrete type through
    /// the factory.
    pub fn read_object<B: Buf>(buf: &mut B) -> Result<HistoPackage, DecodeError> {
        let name = get_string(buf)?;
        let count = buf.try_get_i32()?;
        if count < 0 {
            return Err(DecodeError::BadLength(count));
        }
        let mut pack = HistoPackage::new(&name);
        for _ in 0..count {
            let index = buf.try_get_i32()?;
            if index < 0 || index >= count {
                return Err(DecodeError::IndexOutOfBounds {
                    index,
                    len: count as usize,
                });
            }
            let tag = get_string(buf)?;
            let mut object = factory::create(&tag)?;
            object.read_full(buf)?;
            pack.members.push(object);
        }
        debug!(name = %pack.name, members = pack.members.len(), "read full package");
        Ok(pack)
    }

    /// Delta transfer: update id, update time, member count, then per member
    /// a framing sentinel, its wire index and its contents. Stamps the
    /// package update time and advances the update id.
    pub fn write_contents<B: BufMut>(&mut self, buf: &mut B) {
        self.update_time = now_millis();
        buf.put_i32(self.update_id);
        buf.put_i64(self.update_time);
        buf.put_i32(self.members.len() as i32);
        for (i, m) in self.members.iter_mut().enumerate() {
            buf.put_u8(DELTA_SENTINEL);
            buf.put_i32(i as i32);
            m.write_contents(buf);
        }
        self.update_id += 1;
    }

    /// Apply a delta transfer to the already-established members.
    ///
    /// An update id of 0 is the full-resync signal: every member is zeroed
    /// before the new contents land. Applying the same delta twice is
    /// idempotent.
    pub fn read_contents<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        let update_id = buf.try_get_i32()?;
        let update_time = buf.try_get_i64()?;
        let count = buf.try_get_i32()?;
        if count < 0 {
            return Err(DecodeError::BadLength(count));
        }
        if update_id == 0 {
            warn!(name = %self.name, "full-resync signal, zeroing all members");
            for m in self.members.iter_mut() {
                m.reset();
            }
        }
        for _ in 0..count {
            let sentinel = buf.try_get_u8()?;
            if sentinel != DELTA_SENTINEL {
                return Err(DecodeError::Framing {
                    found: sentinel,
                    expected: DELTA_SENTINEL,
                });
            }
            let index = buf.try_get_i32()?;
            let len = self.members.len();
            if index < 0 || index as usize >= len {
                return Err(DecodeError::IndexOutOfBounds { index, len });
            }
            self.members[index as usize].read_contents(buf)?;
        }
        self.update_id = update_id;
        self.update_time = update_time;
        debug!(name = %self.name, update_id, members = count, "applied delta");
        Ok(())
    }
}
