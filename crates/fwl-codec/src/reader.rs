use fwl_types::World;
use tracing::debug;

use crate::error::{CodecError, CodecResult};

/// Reads a `.fwl` record from a byte slice.
///
/// Decoding is purely structural: every field is taken verbatim from the
/// buffer and nothing is recomputed or cross-checked, including the length
/// prefix and the seed value. Bytes after the generation version are ignored.
#[derive(Debug)]
pub struct WorldDecoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> WorldDecoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Decode one world record.
    pub fn decode(mut self) -> CodecResult<World> {
        let declared_len = self.read_i32("length prefix")?;
        let world_version = self.read_i32("world version")?;
        let name = self.read_string("name")?;
        let seed = self.read_string("seed")?;
        let seed_value = self.read_i32("seed value")?;
        let uid = self.read_i64("uid")?;
        let world_gen_version = self.read_i32("world generation version")?;

        debug!(
            world = %name,
            uid,
            declared_len,
            consumed = self.pos,
            "decoded world"
        );

        Ok(World {
            name,
            seed,
            seed_value,
            uid,
            world_version,
            world_gen_version,
        })
    }

    fn take(&mut self, field: &'static str, needed: usize) -> CodecResult<&'a [u8]> {
        let available = self.data.len() - self.pos;
        if needed > available {
            return Err(CodecError::Truncated {
                field,
                offset: self.pos,
                needed,
                available,
            });
        }
        let data = self.data;
        let bytes = &data[self.pos..self.pos + needed];
        self.pos += needed;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self, field: &'static str) -> CodecResult<[u8; N]> {
        let mut arr = [0u8; N];
        arr.copy_from_slice(self.take(field, N)?);
        Ok(arr)
    }

    fn read_i8(&mut self, field: &'static str) -> CodecResult<i8> {
        Ok(i8::from_le_bytes(self.take_array(field)?))
    }

    fn read_i32(&mut self, field: &'static str) -> CodecResult<i32> {
        Ok(i32::from_le_bytes(self.take_array(field)?))
    }

    fn read_i64(&mut self, field: &'static str) -> CodecResult<i64> {
        Ok(i64::from_le_bytes(self.take_array(field)?))
    }

    /// A 1-byte signed length followed by that many bytes of text.
    fn read_string(&mut self, field: &'static str) -> CodecResult<String> {
        let offset = self.pos;
        let length = self.read_i8(field)?;
        if length < 0 {
            return Err(CodecError::NegativeLength {
                field,
                offset,
                length,
            });
        }
        let bytes = self.take(field, length as usize)?;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }
}

/// Decode a `.fwl` record from `data`.
pub fn decode(data: &[u8]) -> CodecResult<World> {
    WorldDecoder::new(data).decode()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<u8> {
        let mut data = Vec::new();
        data.extend_from_slice(&25i32.to_le_bytes());
        data.extend_from_slice(&26i32.to_le_bytes());
        data.push(1);
        data.extend_from_slice(b"a");
        data.push(2);
        data.extend_from_slice(b"bc");
        data.extend_from_slice(&7i32.to_le_bytes());
        data.extend_from_slice(&(-9i64).to_le_bytes());
        data.extend_from_slice(&1i32.to_le_bytes());
        data
    }

    #[test]
    fn decodes_fields_verbatim() {
        let w = decode(&sample()).unwrap();
        assert_eq!(w.name, "a");
        assert_eq!(w.seed, "bc");
        // Not re-hashed from the seed.
        assert_eq!(w.seed_value, 7);
        assert_eq!(w.uid, -9);
        assert_eq!(w.world_version, 26);
        assert_eq!(w.world_gen_version, 1);
    }

    #[test]
    fn empty_input_is_truncated() {
        let err = decode(&[]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Truncated { field: "length prefix", offset: 0, needed: 4, available: 0 }
        ));
    }

    #[test]
    fn every_short_prefix_fails() {
        let data = sample();
        for len in 0..data.len() {
            let err = decode(&data[..len]).unwrap_err();
            assert!(err.is_malformed(), "prefix of {len} bytes decoded");
        }
    }

    #[test]
    fn name_past_end_is_truncated() {
        let mut data = Vec::new();
        data.extend_from_slice(&0i32.to_le_bytes());
        data.extend_from_slice(&26i32.to_le_bytes());
        data.push(10);
        data.extend_from_slice(b"abc");
        let err = decode(&data).unwrap_err();
        assert!(matches!(
            err,
            CodecError::Truncated { field: "name", offset: 9, needed: 10, available: 3 }
        ));
    }

    #[test]
    fn negative_length_rejected() {
        let mut data = Vec::new();
        data.extend_from_slice(&0i32.to_le_bytes());
        data.extend_from_slice(&26i32.to_le_bytes());
        data.push(0xFF);
        let err = decode(&data).unwrap_err();
        assert!(matches!(
            err,
            CodecError::NegativeLength { field: "name", offset: 8, length: -1 }
        ));
    }

    #[test]
    fn length_prefix_not_cross_checked() {
        let mut data = sample();
        data[0..4].copy_from_slice(&9999i32.to_le_bytes());
        assert_eq!(decode(&data).unwrap().name, "a");
    }

    #[test]
    fn trailing_bytes_ignored() {
        let mut data = sample();
        data.extend_from_slice(&[0xAA; 8]);
        let decoder = WorldDecoder::new(&data);
        assert_eq!(decoder.position(), 0);
        let w = decoder.decode().unwrap();
        assert_eq!(w.world_gen_version, 1);
    }

    #[test]
    fn non_utf8_text_is_lossy() {
        let mut data = sample();
        data[9] = 0xFF;
        let w = decode(&data).unwrap();
        assert_eq!(w.name, "\u{FFFD}");
    }
}
