//! Two-phase encode/decode of individual monitoring objects.
//!
//! Every object serializes as `config ++ contents`. The config record is
//! structural (type tag, identity, axis layout) and is sent once per session;
//! the contents record is the data payload and is re-sent on every refresh
//! tick. Keeping the phases as separate trait methods makes the ordering
//! invariant structural: `write_full`/`read_full` are the only compositions.

use bytes::{Buf, BufMut};

use crate::core::errors::DecodeError;
use crate::core::meta_data::MonMeta;
use crate::core::util::now_millis;
use crate::histo::{Graph1, Histo1, Histo2, MonObject, TimedGraph1};
use crate::serialization::wire::{get_axis, get_string, put_axis, put_string};

/// The two-phase serialization contract of the monitoring-object family.
pub trait MonObjectCodec {
    /// Structural record: type tag first, then identity and axis layout.
    fn write_config<B: BufMut>(&self, buf: &mut B);

    /// Decode a config record. The type tag is not part of this read: the
    /// caller consumed it to resolve the concrete variant through the
    /// factory. Re-establishes buffer sizes from the decoded bin counts.
    fn read_config<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError>;

    /// Data payload only. Stamps the dirty flag and update time, which is
    /// what drives display freshness on the consumer side.
    fn write_contents<B: BufMut>(&mut self, buf: &mut B);

    /// Decode a contents record into the already-allocated buffers.
    fn read_contents<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError>;

    fn write_full<B: BufMut>(&mut self, buf: &mut B) {
        self.write_config(buf);
        self.write_contents(buf);
    }

    fn read_full<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        self.read_config(buf)?;
        self.read_contents(buf)
    }
}

fn put_header<B: BufMut>(buf: &mut B, tag: &str, meta: &MonMeta, title: &str) {
    put_string(buf, tag);
    buf.put_u8(meta.tab_id);
    buf.put_u8(meta.position_id);
    put_string(buf, &meta.name);
    put_string(buf, title);
}

fn get_header<B: Buf>(buf: &mut B, meta: &mut MonMeta) -> Result<String, DecodeError> {
    meta.tab_id = buf.try_get_u8()?;
    meta.position_id = buf.try_get_u8()?;
    meta.name = get_string(buf)?;
    get_string(buf)
}

impl MonObjectCodec for Histo1 {
    fn write_config<B: BufMut>(&self, buf: &mut B) {
        put_header(buf, &self.data_type(), &self.meta, &self.title);
        put_axis(buf, &self.axis_x);
        put_string(buf, self.axis_y.title());
    }

    fn read_config<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        self.title = get_header(buf, &mut self.meta)?;
        get_axis(buf, &mut self.axis_x)?;
        let title_y = get_string(buf)?;
        self.axis_y.set_title(&title_y);
        self.data.resize(self.axis_x.nbins() + 2);
        Ok(())
    }

    fn write_contents<B: BufMut>(&mut self, buf: &mut B) {
        self.meta.touch(now_millis());
        self.data.write_to(buf);
    }

    fn read_contents<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        self.data.read_from(buf)?;
        self.meta.updated = true;
        Ok(())
    }
}

impl MonObjectCodec for Histo2 {
    fn write_config<B: BufMut>(&self, buf: &mut B) {
        put_header(buf, &self.data_type(), &self.meta, &self.title);
        put_axis(buf, &self.axis_x);
        put_axis(buf, &self.axis_y);
        put_string(buf, self.axis_z.title());
    }

    fn read_config<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        self.title = get_header(buf, &mut self.meta)?;
        get_axis(buf, &mut self.axis_x)?;
        get_axis(buf, &mut self.axis_y)?;
        let title_z = get_string(buf)?;
        self.axis_z.set_title(&title_z);
        self.data
            .resize((self.axis_x.nbins() + 2) * (self.axis_y.nbins() + 2));
        Ok(())
    }

    fn write_contents<B: BufMut>(&mut self, buf: &mut B) {
        self.meta.touch(now_millis());
        self.data.write_to(buf);
    }

    fn read_contents<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        self.data.read_from(buf)?;
        self.meta.updated = true;
        Ok(())
    }
}

impl MonObjectCodec for Graph1 {
    fn write_config<B: BufMut>(&self, buf: &mut B) {
        put_header(buf, &self.data_type(), &self.meta, &self.title);
        put_axis(buf, &self.axis_x);
        put_axis(buf, &self.axis_y);
    }

    fn read_config<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        self.title = get_header(buf, &mut self.meta)?;
        get_axis(buf, &mut self.axis_x)?;
        get_axis(buf, &mut self.axis_y)?;
        self.data.resize(2 * self.axis_x.nbins());
        Ok(())
    }

    fn write_contents<B: BufMut>(&mut self, buf: &mut B) {
        self.meta.touch(now_millis());
        self.data.write_to(buf);
    }

    fn read_contents<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        self.data.read_from(buf)?;
        self.meta.updated = true;
        Ok(())
    }
}

impl MonObjectCodec for TimedGraph1 {
    fn write_config<B: BufMut>(&self, buf: &mut B) {
        put_header(buf, &self.data_type(), &self.meta, &self.title);
        put_axis(buf, &self.axis_x);
        put_string(buf, self.axis_y.title());
    }

    fn read_config<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        self.title = get_header(buf, &mut self.meta)?;
        get_axis(buf, &mut self.axis_x)?;
        let title_y = get_string(buf)?;
        self.axis_y.set_title(&title_y);
        let nbins = self.axis_x.nbins();
        self.times.resize(nbins);
        self.data.resize(nbins);
        self.iter = -1;
        Ok(())
    }

    fn write_contents<B: BufMut>(&mut self, buf: &mut B) {
        self.meta.touch(now_millis());
        buf.put_i32(self.iter);
        self.times.write_to(buf);
        self.data.write_to(buf);
    }

    fn read_contents<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        self.iter = buf.try_get_i32()?;
        self.times.read_from(buf)?;
        self.data.read_from(buf)?;
        self.meta.updated = true;
        Ok(())
    }
}

impl MonObjectCodec for MonObject {
    fn write_config<B: BufMut>(&self, buf: &mut B) {
        match self {
            MonObject::Histo1(h) => h.write_config(buf),
            MonObject::Histo2(h) => h.write_config(buf),
            MonObject::Graph1(g) => g.write_config(buf),
            MonObject::TimedGraph1(g) => g.write_config(buf),
        }
    }

    fn read_config<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        match self {
            MonObject::Histo1(h) => h.read_config(buf),
            MonObject::Histo2(h) => h.read_config(buf),
            MonObject::Graph1(g) => g.read_config(buf),
            MonObject::TimedGraph1(g) => g.read_config(buf),
        }
    }

    fn write_contents<B: BufMut>(&mut self, buf: &mut B) {
        match self {
            MonObject::Histo1(h) => h.write_contents(buf),
            MonObject::Histo2(h) => h.write_contents(buf),
            MonObject::Graph1(g) => g.write_contents(buf),
            MonObject::TimedGraph1(g) => g.write_contents(buf),
        }
    }

    fn read_contents<B: Buf>(&mut self, buf: &mut B) -> Result<(), DecodeError> {
        match self {
            MonObject::Histo1(h) => h.read_contents(buf),
            MonObject::Histo2(h) => h.read_contents(buf),
            MonObject::Graph1(g) => g.read_contents(buf),
            MonObject::TimedGraph1(g) => g.read_contents(buf),
        }
    }
}
