//! M2's PSB ("Packaged Struct Binary"): a JSON-like binary tree of typed nodes keyed by string.
//!
//! This is deliberately not a general PSB parser: `m2_psb.c`'s tree format supports arbitrarily
//! nested objects/arrays/every integer width, which is mostly irrelevant to audio. This module
//! walks just the fixed shape spec names — `voice → {subsong} → channelList → {channel}.archData`
//! — recovering codec type from the `spec`/`ext`/`fmt` fields and the stream offset/size from
//! the `archData` resource reference. Arbitrary tree traversal for other PSB uses is out of scope.

use gaudio_core::common::{le_u16, le_u32};
use gaudio_core::errors::{bad_magic, bad_params, unsupported_version, Result};

const HEADER_SIZE: usize = 0x2c;
const VERSION2: u16 = 2;
const VERSION3: u16 = 3;

mod itype {
    pub const INTEGER_0: u8 = 0x4;
    pub const INTEGER_8: u8 = 0x5;
    pub const INTEGER_32: u8 = 0x8;
    pub const LIST_8: u8 = 0xd;
    pub const LIST_32: u8 = 0x10;
    pub const STRING_8: u8 = 0x15;
    pub const STRING_32: u8 = 0x18;
    pub const DATA_8: u8 = 0x19;
    pub const DATA_32: u8 = 0x1c;
    pub const ARRAY: u8 = 0x20;
    pub const OBJECT: u8 = 0x21;
}

/// A packed variable-width integer list: `count` entries of `esize` bytes each, LE.
#[derive(Clone, Copy)]
struct List<'a> {
    bytes: usize,
    count: usize,
    esize: usize,
    edata: &'a [u8],
}

fn item_get_int(size: usize, buf: &[u8]) -> Result<u32> {
    if buf.len() < size {
        return bad_params("psb: truncated integer");
    }
    Ok(match size {
        1 => buf[0] as u32,
        2 => le_u16(&buf[0..2]) as u32,
        3 => (le_u16(&buf[1..3]) as u32) << 8 | buf[0] as u32,
        4 => le_u32(&buf[0..4]),
        _ => return bad_params("psb: unsupported int width"),
    })
}

impl<'a> List<'a> {
    fn init(buf: &'a [u8]) -> Result<Self> {
        if buf.is_empty() {
            return bad_params("psb: list header missing");
        }
        let count_itype = buf[0];
        if !(itype::LIST_8..=itype::LIST_32).contains(&count_itype) {
            return bad_params("psb: expected a list header");
        }
        let count_size = (count_itype - itype::LIST_8 + 1) as usize;
        let count = item_get_int(count_size, &buf[1..])? as usize;

        let entry_pos = 1 + count_size;
        let entry_itype = buf.get(entry_pos).copied().unwrap_or(0xff);
        if !(itype::LIST_8..=itype::LIST_32).contains(&entry_itype) {
            return bad_params("psb: expected a list entry-size header");
        }
        let esize = (entry_itype - itype::LIST_8 + 1) as usize;

        let bytes = entry_pos + 1 + esize * count;
        if buf.len() < bytes {
            return bad_params("psb: list body truncated");
        }
        let edata = &buf[entry_pos + 1..];
        Ok(List { bytes, count, esize, edata })
    }

    fn get(&self, index: usize) -> Result<u32> {
        if index >= self.count {
            return bad_params("psb: list index out of range");
        }
        item_get_int(self.esize, &self.edata[index * self.esize..])
    }
}

/// `decode_key` from the teacher's `m2_psb.c`: keys are a reverse-linked, distance-encoded trie
/// (`kidx1` = char/diff table, `kidx2` = next-point table, `kidx3` = entry points), tuned to share
/// common prefixes at the cost of needing a few bytes per character either way.
fn decode_key(kidx1: &List<'_>, kidx2: &List<'_>, kidx3: &List<'_>, index: usize) -> Result<String> {
    let mut chars = Vec::new();
    let entry_point = kidx3.get(index)? as usize;
    let mut point = kidx2.get(entry_point)?;
    loop {
        if chars.len() >= 256 {
            return bad_params("psb: key decode did not terminate");
        }
        let next = kidx2.get(point as usize)?;
        let diff = kidx1.get(next as usize)?;
        let curr = point.wrapping_sub(diff);
        chars.push(curr as u8 as char);
        point = next;
        if point == 0 {
            break;
        }
    }
    chars.reverse();
    Ok(chars.into_iter().collect())
}

fn decode_keys(buf: &[u8]) -> Result<Vec<String>> {
    let kidx1 = List::init(buf)?;
    let kidx2 = List::init(&buf[kidx1.bytes..])?;
    let kidx3 = List::init(&buf[kidx1.bytes + kidx2.bytes..])?;
    (0..kidx3.count).map(|i| decode_key(&kidx1, &kidx2, &kidx3, i)).collect()
}

struct Context<'a> {
    strings_list: List<'a>,
    strings_data: &'a [u8],
    data_offsets: List<'a>,
    data_sizes: List<'a>,
    data_base: u32,
    keys: Vec<String>,
}

/// A reference to a `PSB_TYPE_DATA` resource: a byte range within the file.
#[derive(Debug, Clone, Copy)]
pub struct PsbData {
    pub offset: u32,
    pub size: u32,
}

#[derive(Clone, Copy)]
pub struct PsbNode<'a, 'c> {
    ctx: &'c Context<'a>,
    data: &'a [u8],
}

impl<'a, 'c> PsbNode<'a, 'c> {
    fn itype(&self) -> u8 {
        self.data[0]
    }

    pub fn is_object(&self) -> bool {
        self.itype() == itype::OBJECT
    }

    pub fn is_array(&self) -> bool {
        self.itype() == itype::ARRAY
    }

    fn key_list_and_offsets(&self) -> Result<(List<'a>, List<'a>)> {
        let keys = List::init(&self.data[1..])?;
        let offsets = List::init(&self.data[1 + keys.bytes..])?;
        Ok((keys, offsets))
    }

    pub fn count(&self) -> Result<usize> {
        match self.itype() {
            itype::ARRAY | itype::OBJECT => Ok(List::init(&self.data[1..])?.count),
            _ => bad_params("psb: count() on a non-container node"),
        }
    }

    pub fn index(&self, index: usize) -> Result<PsbNode<'a, 'c>> {
        match self.itype() {
            itype::ARRAY => {
                let offsets = List::init(&self.data[1..])?;
                let skip = offsets.get(index)? as usize;
                Ok(PsbNode { ctx: self.ctx, data: &self.data[1 + offsets.bytes + skip..] })
            }
            itype::OBJECT => {
                let (keys, offsets) = self.key_list_and_offsets()?;
                let skip = offsets.get(index)? as usize;
                Ok(PsbNode { ctx: self.ctx, data: &self.data[1 + keys.bytes + offsets.bytes + skip..] })
            }
            _ => bad_params("psb: index() on a non-container node"),
        }
    }

    pub fn by_key(&self, key: &str) -> Result<PsbNode<'a, 'c>> {
        if self.itype() != itype::OBJECT {
            return bad_params("psb: by_key() on a non-object node");
        }
        let (keys, _) = self.key_list_and_offsets()?;
        for i in 0..keys.count {
            let key_index = keys.get(i)? as usize;
            let name = match self.ctx.keys.get(key_index) {
                Some(n) => n,
                None => return bad_params("psb: key index out of range"),
            };
            if name == key {
                return self.index(i);
            }
        }
        bad_params("psb: key not found")
    }

    pub fn as_str(&self) -> Result<&'a str> {
        let t = self.itype();
        if !(itype::STRING_8..=itype::STRING_32).contains(&t) {
            return bad_params("psb: node is not a string");
        }
        let size = (t - itype::STRING_8 + 1) as usize;
        let index = item_get_int(size, &self.data[1..])? as usize;
        let skip = self.ctx.strings_list.get(index)? as usize;
        if skip >= self.ctx.strings_data.len() {
            return bad_params("psb: string offset out of range");
        }
        let tail = &self.ctx.strings_data[skip..];
        let end = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
        std::str::from_utf8(&tail[..end]).or_else(|_| bad_params("psb: string is not valid utf-8"))
    }

    pub fn as_data(&self) -> Result<PsbData> {
        let t = self.itype();
        if !(itype::DATA_8..=itype::DATA_32).contains(&t) {
            return bad_params("psb: node is not a data reference");
        }
        let size = (t - itype::DATA_8 + 1) as usize;
        let index = item_get_int(size, &self.data[1..])? as usize;
        let offset = self.ctx.data_offsets.get(index)?.wrapping_add(self.ctx.data_base);
        let size = self.ctx.data_sizes.get(index)?;
        Ok(PsbData { offset, size })
    }

    pub fn as_integer(&self) -> Result<i64> {
        let t = self.itype();
        if t == itype::INTEGER_0 {
            return Ok(0);
        }
        if (itype::INTEGER_8..=itype::INTEGER_32).contains(&t) {
            let size = (t - itype::INTEGER_8 + 1) as usize;
            return Ok(item_get_int(size, &self.data[1..])? as i64);
        }
        bad_params("psb: node is not a (small) integer")
    }
}

/// An M2 PSB document: header plus the keys/strings/data tables needed to walk the tree.
pub struct Psb<'a> {
    ctx: Context<'a>,
    root_data: &'a [u8],
}

impl<'a> Psb<'a> {
    pub fn parse(buf: &'a [u8]) -> Result<Self> {
        if buf.len() < HEADER_SIZE || &buf[0..4] != b"PSB\0" {
            return bad_magic("psb: missing PSB magic");
        }

        let version = le_u16(&buf[4..6]);
        if version != VERSION2 && version != VERSION3 {
            return unsupported_version("psb: unsupported version");
        }
        let encrypt_value = le_u16(&buf[6..8]);
        if encrypt_value != 0 {
            return unsupported_version("psb: encrypted PSB not supported");
        }

        let keys_offset = le_u32(&buf[0x0c..0x10]) as usize;
        let strings_list_offset = le_u32(&buf[0x10..0x14]) as usize;
        let strings_data_offset = le_u32(&buf[0x14..0x18]) as usize;
        let data_offsets_offset = le_u32(&buf[0x18..0x1c]) as usize;
        let data_sizes_offset = le_u32(&buf[0x1c..0x20]) as usize;
        let data_base = le_u32(&buf[0x20..0x24]);
        let root_offset = le_u32(&buf[0x24..0x28]) as usize;

        if keys_offset as u32 >= data_base
            || strings_list_offset as u32 >= data_base
            || strings_data_offset as u32 >= data_base
            || data_offsets_offset as u32 >= data_base
            || data_sizes_offset as u32 >= data_base
            || root_offset as u32 >= data_base
            || data_base as usize > buf.len()
        {
            return bad_params("psb: header offset exceeds data section");
        }

        let strings_list = List::init(&buf[strings_list_offset..])?;
        if data_offsets_offset <= strings_data_offset {
            return bad_params("psb: strings data section is empty or inverted");
        }
        let strings_data = &buf[strings_data_offset..data_offsets_offset];

        let data_offsets = List::init(&buf[data_offsets_offset..])?;
        let data_sizes = List::init(&buf[data_sizes_offset..])?;
        let keys = decode_keys(&buf[keys_offset..])?;

        let ctx = Context { strings_list, strings_data, data_offsets, data_sizes, data_base, keys };
        let root_data = &buf[root_offset..];

        Ok(Psb { ctx, root_data })
    }

    pub fn root(&self) -> PsbNode<'a, '_> {
        PsbNode { ctx: &self.ctx, data: self.root_data }
    }
}

/// Inner codec named by a PSB audio asset's `spec`/`ext`/`fmt` fields. Most of these are out of
/// this workspace's decoder set; only `Dsp` has a decoder here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PsbCodec {
    Pcm,
    RiffAt3,
    Xma2,
    MsAdpcm,
    Xwma,
    Dsp,
    OpusNx,
    RiffAt9,
    Vag,
}

impl PsbCodec {
    fn from_spec_ext(spec: &str, ext: &str) -> Option<Self> {
        match (spec, ext) {
            (_, "at3") => Some(PsbCodec::RiffAt3),
            (_, "at9") => Some(PsbCodec::RiffAt9),
            (_, "xma2") => Some(PsbCodec::Xma2),
            (_, "xwma") => Some(PsbCodec::Xwma),
            (_, "dsp") => Some(PsbCodec::Dsp),
            (_, "opus") => Some(PsbCodec::OpusNx),
            (_, "vag") => Some(PsbCodec::Vag),
            ("ps3", _) | ("ps4", _) => Some(PsbCodec::Pcm),
            _ if spec.contains("adpcm") => Some(PsbCodec::MsAdpcm),
            _ => None,
        }
    }
}

/// One `channelList[i]` entry: codec identity plus the `archData` resource reference.
#[derive(Debug, Clone, Copy)]
pub struct PsbChannel {
    pub codec: PsbCodec,
    pub arch_data: PsbData,
}

/// Walks `voice → {subsong_name} → channelList → {channel_index}` and extracts the fields needed
/// to hand off to this channel's inner codec.
pub fn read_channel(psb: &Psb<'_>, subsong_name: &str, channel_index: usize) -> Result<PsbChannel> {
    let root = psb.root();
    let voice = root.by_key("voice")?;
    let subsong = voice.by_key(subsong_name)?;

    let spec = subsong.by_key("spec").and_then(|n| n.as_str().map(str::to_owned)).unwrap_or_default();
    let ext = subsong.by_key("ext").and_then(|n| n.as_str().map(str::to_owned)).unwrap_or_default();

    let channel_list = subsong.by_key("channelList")?;
    let channel = channel_list.index(channel_index)?;
    let arch_data = channel.by_key("archData")?.as_data()?;

    let codec = match PsbCodec::from_spec_ext(&spec, &ext) {
        Some(c) => c,
        None => return bad_params("psb: could not identify channel codec from spec/ext"),
    };

    Ok(PsbChannel { codec, arch_data })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list8(values: &[u32]) -> Vec<u8> {
        let mut v = vec![itype::LIST_8, values.len() as u8, itype::LIST_8, 1];
        v.extend(values.iter().map(|&x| x as u8));
        v
    }

    #[test]
    fn list_init_reads_count_and_entries() {
        let buf = list8(&[5, 6, 7]);
        let list = List::init(&buf).unwrap();
        assert_eq!(list.count, 3);
        assert_eq!(list.get(1).unwrap(), 6);
    }

    #[test]
    fn rejects_non_psb_magic() {
        assert!(Psb::parse(&[0u8; 0x2c]).is_err());
    }

    #[test]
    fn codec_from_ext_recognizes_dsp() {
        assert_eq!(PsbCodec::from_spec_ext("ps4", "dsp"), Some(PsbCodec::Dsp));
    }
}
