use std::io::{self, Read, Write};

pub struct BigEndianReader<R> {
    inner: R,
}

impl<R: Read> BigEndianReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn read_u8(&mut self) -> io::Result<u8> {
        let mut buf = [0u8; 1];
        self.inner.read_exact(&mut buf)?;
        Ok(buf[0])
    }

    pub fn read_u16(&mut self) -> io::Result<u16> {
        let mut buf = [0u8; 2];
        self.inner.read_exact(&mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    pub fn read_u32(&mut self) -> io::Result<u32> {
        let mut buf = [0u8; 4];
        self.inner.read_exact(&mut buf)?;
        Ok(u32::from_be_bytes(buf))
    }

    pub fn read_bytes(&mut self, n: usize) -> io::Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.inner.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Length-prefixed UTF-8 string (u8 length).
    pub fn read_string(&mut self) -> io::Result<String> {
        let len = self.read_u8()? as usize;
        let bytes = self.read_bytes(len)?;
        String::from_utf8(bytes)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "string is not valid UTF-8"))
    }
}

pub struct BigEndianWriter<W> {
    inner: W,
}

impl<W: Write> BigEndianWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn write_u8(&mut self, value: u8) -> io::Result<()> {
        self.inner.write_all(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> io::Result<()> {
        self.inner.write_all(&value.to_be_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> io::Result<()> {
        self.inner.write_all(&value.to_be_bytes())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes)
    }

    /// Length-prefixed UTF-8 string (u8 length); longer inputs are rejected.
    pub fn write_string(&mut self, value: &str) -> io::Result<()> {
        let bytes = value.as_bytes();
        let len = u8::try_from(bytes.len()).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("string too long to encode: {} bytes", bytes.len()),
            )
        })?;
        self.write_u8(len)?;
        self.write_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn scalar_roundtrip() {
        let mut out = Vec::new();
        {
            let mut w = BigEndianWriter::new(&mut out);
            w.write_u8(0xAB).unwrap();
            w.write_u16(0x1234).unwrap();
            w.write_u32(0xDEAD_BEEF).unwrap();
            w.write_string("PIKACHU").unwrap();
        }

        let mut r = BigEndianReader::new(Cursor::new(out));
        assert_eq!(r.read_u8().unwrap(), 0xAB);
        assert_eq!(r.read_u16().unwrap(), 0x1234);
        assert_eq!(r.read_u32().unwrap(), 0xDEAD_BEEF);
        assert_eq!(r.read_string().unwrap(), "PIKACHU");
    }

    #[test]
    fn truncated_input_errors() {
        let mut r = BigEndianReader::new(Cursor::new(vec![0u8; 3]));
        assert!(r.read_u32().is_err());
    }
}
