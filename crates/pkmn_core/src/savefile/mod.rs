//! Container codec for the editor's save files: a small header, a
//! zlib-compressed section stream and a CRC32 trailer over the compressed
//! body. Parsing validates the checksum before anything is decoded, so a
//! damaged file never produces a half-built profile.

pub mod sections;

use std::fs;
use std::io::{self, Cursor, Read, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::game::Game;
use crate::reader::{BigEndianReader, BigEndianWriter};
use crate::trainer::TrainerProfile;

pub const MAGIC: &[u8; 4] = b"PKSV";
pub const FORMAT_VERSION: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFile {
    pub trainer: TrainerProfile,
}

impl SaveFile {
    pub fn new(trainer: TrainerProfile) -> Self {
        Self { trainer }
    }

    pub fn game(&self) -> Game {
        self.trainer.game()
    }

    pub fn parse(bytes: &[u8]) -> io::Result<Self> {
        let mut r = BigEndianReader::new(Cursor::new(bytes));

        let magic = r.read_bytes(MAGIC.len())?;
        if magic != MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "not a PKSV save file",
            ));
        }
        let version = r.read_u16()?;
        if version != FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported save format version {version}"),
            ));
        }
        let game = Game::from_raw(r.read_u8()?).ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidData, "unknown game identifier")
        })?;

        let body_len = r.read_u32()? as usize;
        let stored_crc = r.read_u32()?;
        let compressed = r.read_bytes(body_len)?;

        let mut crc = flate2::Crc::new();
        crc.update(&compressed);
        if crc.sum() != stored_crc {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "save checksum mismatch",
            ));
        }

        let mut body = Vec::new();
        ZlibDecoder::new(compressed.as_slice()).read_to_end(&mut body)?;

        let mut body_reader = BigEndianReader::new(Cursor::new(body.as_slice()));
        let trainer = sections::parse_trainer(&mut body_reader, game)?;
        Ok(Self { trainer })
    }

    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut body = Vec::new();
        {
            let mut w = BigEndianWriter::new(&mut body);
            sections::emit_trainer(&mut w, &self.trainer)?;
        }

        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&body)?;
        let compressed = encoder.finish()?;

        let mut crc = flate2::Crc::new();
        crc.update(&compressed);

        let mut out = Vec::with_capacity(compressed.len() + 16);
        let mut w = BigEndianWriter::new(&mut out);
        w.write_bytes(MAGIC)?;
        w.write_u16(FORMAT_VERSION)?;
        w.write_u8(self.game().raw())?;
        w.write_u32(compressed.len() as u32)?;
        w.write_u32(crc.sum())?;
        w.write_bytes(&compressed)?;
        Ok(out)
    }
}

pub fn read_save_file(path: &Path) -> io::Result<SaveFile> {
    let bytes = fs::read(path)?;
    SaveFile::parse(&bytes)
}

/// Write atomically: the new content lands in a sibling temp file first, the
/// previous file is preserved as `<path>.bak` when `backup` is set, and the
/// temp file is renamed into place last. A failure at any step leaves the
/// original file as it was.
pub fn write_save_file(path: &Path, save: &SaveFile, backup: bool) -> io::Result<()> {
    let bytes = save.to_bytes()?;
    let tmp_path = sibling_path(path, ".tmp");

    fs::write(&tmp_path, &bytes)?;

    let result = (|| {
        if backup && path.exists() {
            fs::rename(path, sibling_path(path, ".bak"))?;
        }
        fs::rename(&tmp_path, path)
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
