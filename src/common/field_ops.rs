use crate::Endian;

/// Left-pad `data` with zero bytes up to `N` and copy it into a fixed array.
///
/// Callers guarantee `data.len() <= N`.
pub fn pad_left<const N: usize>(data: &[u8]) -> [u8; N] {
    let mut buf = [0u8; N];
    buf[N - data.len()..].copy_from_slice(data);
    buf
}

pub fn decode_u16(bytes: [u8; 2], endian: Endian) -> u16 {
    match endian {
        Endian::Little => u16::from_le_bytes(bytes),
        Endian::Big => u16::from_be_bytes(bytes),
    }
}

pub fn decode_u32(bytes: [u8; 4], endian: Endian) -> u32 {
    match endian {
        Endian::Little => u32::from_le_bytes(bytes),
        Endian::Big => u32::from_be_bytes(bytes),
    }
}

pub fn encode_u16(value: u16, endian: Endian) -> [u8; 2] {
    match endian {
        Endian::Little => value.to_le_bytes(),
        Endian::Big => value.to_be_bytes(),
    }
}

pub fn encode_u32(value: u32, endian: Endian) -> [u8; 4] {
    match endian {
        Endian::Little => value.to_le_bytes(),
        Endian::Big => value.to_be_bytes(),
    }
}

/// Generic field codec so the accessor can share one read path per width
pub trait FieldCodec: Sized + Copy {
    const WIDTH: usize;
    fn decode_padded(data: &[u8], endian: Endian) -> Self;
    fn encode(self, endian: Endian) -> Vec<u8>;
}

impl FieldCodec for u16 {
    const WIDTH: usize = 2;

    fn decode_padded(data: &[u8], endian: Endian) -> u16 {
        decode_u16(pad_left::<2>(data), endian)
    }

    fn encode(self, endian: Endian) -> Vec<u8> {
        encode_u16(self, endian).to_vec()
    }
}

impl FieldCodec for u32 {
    const WIDTH: usize = 4;

    fn decode_padded(data: &[u8], endian: Endian) -> u32 {
        decode_u32(pad_left::<4>(data), endian)
    }

    fn encode(self, endian: Endian) -> Vec<u8> {
        encode_u32(self, endian).to_vec()
    }
}
