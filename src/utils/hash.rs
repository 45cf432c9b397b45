//! Hash calculation utilities.

use crate::core::error::{Error, Result};
use crate::core::types::FileHashes;
use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::Sha256;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Buffer size for reading files (64KB).
const BUFFER_SIZE: usize = 64 * 1024;

/// Hash calculator for files.
pub struct HashCalculator;

impl HashCalculator {
    /// Calculate MD5, SHA1, and SHA256 of a file in a single streaming pass.
    ///
    /// Returns the digest triple and the total byte count read.
    pub fn hash_file(path: &Path) -> Result<(FileHashes, u64)> {
        let file = File::open(path).map_err(|e| Error::file_read(path, e))?;
        let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);

        let mut md5_hasher = Md5::new();
        let mut sha1_hasher = Sha1::new();
        let mut sha256_hasher = Sha256::new();
        let mut buffer = [0u8; BUFFER_SIZE];
        let mut size: u64 = 0;

        loop {
            let bytes_read = reader
                .read(&mut buffer)
                .map_err(|e| Error::file_read(path, e))?;
            if bytes_read == 0 {
                break;
            }
            md5_hasher.update(&buffer[..bytes_read]);
            sha1_hasher.update(&buffer[..bytes_read]);
            sha256_hasher.update(&buffer[..bytes_read]);
            size += bytes_read as u64;
        }

        Ok((
            FileHashes {
                md5: hex::encode(md5_hasher.finalize()),
                sha1: hex::encode(sha1_hasher.finalize()),
                sha256: hex::encode(sha256_hasher.finalize()),
            },
            size,
        ))
    }

    /// Calculate MD5, SHA1, and SHA256 of an in-memory buffer.
    pub fn hash_bytes(data: &[u8]) -> FileHashes {
        let mut md5_hasher = Md5::new();
        let mut sha1_hasher = Sha1::new();
        let mut sha256_hasher = Sha256::new();

        md5_hasher.update(data);
        sha1_hasher.update(data);
        sha256_hasher.update(data);

        FileHashes {
            md5: hex::encode(md5_hasher.finalize()),
            sha1: hex::encode(sha1_hasher.finalize()),
            sha256: hex::encode(sha256_hasher.finalize()),
        }
    }
}
