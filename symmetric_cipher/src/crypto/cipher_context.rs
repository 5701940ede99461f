use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::cipher_types::{CipherMode, PaddingMode};
use crate::crypto::error::CipherError;
use crate::crypto::utils::{
    apply_padding, generate_iv, increment_block, remove_padding, xor_blocks,
};
use log::{debug, trace};
use rayon::prelude::*;
use std::ops::ControlFlow;
use std::sync::Arc;

// Inputs at least this large go through rayon when nothing observes progress
const PARALLELISM_THRESHOLD: usize = 64 * 1024;

/// Receives the completed percentage (0-100) and may stop the operation by
/// returning `ControlFlow::Break`.
pub type ProgressCallback<'a> = &'a mut dyn FnMut(u8) -> ControlFlow<()>;

struct ProgressTracker<'a> {
    callback: Option<ProgressCallback<'a>>,
    total_blocks: usize,
    last_reported: Option<u8>,
}

impl<'a> ProgressTracker<'a> {
    fn new(callback: Option<ProgressCallback<'a>>, total_blocks: usize) -> Self {
        Self {
            callback,
            total_blocks,
            last_reported: None,
        }
    }

    fn is_silent(&self) -> bool {
        self.callback.is_none()
    }

    // Reports only when the rounded-down percentage changes
    fn block_done(&mut self, index: usize) -> Result<(), CipherError> {
        let Some(callback) = self.callback.as_mut() else {
            return Ok(());
        };
        let percent = ((index + 1) * 100 / self.total_blocks) as u8;
        if self.last_reported == Some(percent) {
            return Ok(());
        }
        self.last_reported = Some(percent);

        match callback(percent) {
            ControlFlow::Continue(()) => Ok(()),
            ControlFlow::Break(()) => {
                debug!("cipher operation cancelled at {percent}%");
                Err(CipherError::Cancelled)
            }
        }
    }
}

fn check_iv(iv: &[u8], block_size: usize) -> Result<(), CipherError> {
    if iv.len() != block_size {
        return Err(CipherError::InvalidIvLength {
            expected: block_size,
            actual: iv.len(),
        });
    }
    Ok(())
}

fn counter_keystream<C>(
    cipher: &C,
    counter_start: &[u8],
    index: usize,
) -> Result<Vec<u8>, CipherError>
where
    C: SymmetricCipher + ?Sized,
{
    let mut counter = counter_start.to_vec();
    increment_block(&mut counter, index);
    cipher.encrypt_block(&counter)
}

/// Pads `data` and encrypts it under `mode`.
///
/// Without an explicit IV a random one is generated for every mode except
/// ECB and prepended to the output. An explicit IV is used as is and is not
/// part of the result.
pub fn encrypt<C>(
    cipher: &C,
    data: &[u8],
    mode: CipherMode,
    iv: Option<&[u8]>,
    padding: PaddingMode,
    progress: Option<ProgressCallback<'_>>,
) -> Result<Vec<u8>, CipherError>
where
    C: SymmetricCipher + Sync + ?Sized,
{
    let block_size = cipher.block_size();
    let padded = apply_padding(data.to_vec(), block_size, padding);
    let total_blocks = padded.len() / block_size;
    debug!(
        "encrypting {} bytes ({total_blocks} blocks), mode {mode}, padding {padding}",
        data.len()
    );

    let (iv, mut result) = match (mode.requires_iv(), iv) {
        (false, _) => (Vec::new(), Vec::with_capacity(padded.len())),
        (true, Some(iv)) => {
            check_iv(iv, block_size)?;
            (iv.to_vec(), Vec::with_capacity(padded.len()))
        }
        (true, None) => {
            let iv = generate_iv(block_size);
            trace!("generated a {block_size}-byte IV");
            let mut result = Vec::with_capacity(padded.len() + block_size);
            result.extend_from_slice(&iv);
            (iv, result)
        }
    };

    let mut tracker = ProgressTracker::new(progress, total_blocks);
    result.extend(encrypt_blocks(cipher, mode, &iv, &padded, &mut tracker)?);
    Ok(result)
}

/// Decrypts `data` under `mode` and strips `padding`.
///
/// When no IV is supplied for a chaining mode the first block of `data` is
/// taken as the IV.
pub fn decrypt<C>(
    cipher: &C,
    data: &[u8],
    mode: CipherMode,
    iv: Option<&[u8]>,
    padding: PaddingMode,
    progress: Option<ProgressCallback<'_>>,
) -> Result<Vec<u8>, CipherError>
where
    C: SymmetricCipher + Sync + ?Sized,
{
    let block_size = cipher.block_size();
    if data.is_empty() {
        return Ok(Vec::new());
    }
    if data.len() % block_size != 0 {
        return Err(CipherError::DataLength {
            length: data.len(),
            block_size,
        });
    }

    let (iv, body): (&[u8], &[u8]) = match (mode.requires_iv(), iv) {
        (false, _) => (&data[..0], data),
        (true, Some(iv)) => {
            check_iv(iv, block_size)?;
            (iv, data)
        }
        (true, None) => data.split_at(block_size),
    };

    let total_blocks = body.len() / block_size;
    debug!(
        "decrypting {} bytes ({total_blocks} blocks), mode {mode}, padding {padding}",
        body.len()
    );

    let mut tracker = ProgressTracker::new(progress, total_blocks);
    let decrypted = decrypt_blocks(cipher, mode, iv, body, &mut tracker)?;
    remove_padding(decrypted, block_size, padding)
}

/// XORs `data` with the CTR keystream starting at `counter`.
///
/// The final chunk may be shorter than a block; only its own length of
/// keystream is used. The counter is big-endian and wraps at block width.
pub fn apply_ctr<C>(cipher: &C, counter: &[u8], data: &[u8]) -> Result<Vec<u8>, CipherError>
where
    C: SymmetricCipher + Sync + ?Sized,
{
    check_iv(counter, cipher.block_size())?;
    let mut tracker = ProgressTracker::new(None, data.len().div_ceil(cipher.block_size()));
    encrypt_blocks(cipher, CipherMode::CTR, counter, data, &mut tracker)
}

fn encrypt_blocks<C>(
    cipher: &C,
    mode: CipherMode,
    iv: &[u8],
    data: &[u8],
    tracker: &mut ProgressTracker<'_>,
) -> Result<Vec<u8>, CipherError>
where
    C: SymmetricCipher + Sync + ?Sized,
{
    if tracker.is_silent() && data.len() >= PARALLELISM_THRESHOLD {
        match mode {
            CipherMode::ECB => return process_ecb_parallel(cipher, data, true),
            CipherMode::CTR => return process_ctr_parallel(cipher, iv, data),
            _ => {}
        }
    }

    let mut result = Vec::with_capacity(data.len());
    let mut register = iv.to_vec();

    for (index, block) in data.chunks(cipher.block_size()).enumerate() {
        let output = match mode {
            CipherMode::ECB => cipher.encrypt_block(block)?,
            CipherMode::CBC => {
                // XOR with the previous ciphertext block
                let encrypted = cipher.encrypt_block(&xor_blocks(block, &register))?;
                register.clone_from(&encrypted);
                encrypted
            }
            CipherMode::PCBC => {
                let encrypted = cipher.encrypt_block(&xor_blocks(block, &register))?;
                register = xor_blocks(block, &encrypted);
                encrypted
            }
            CipherMode::CFB => {
                let keystream = cipher.encrypt_block(&register)?;
                let encrypted = xor_blocks(block, &keystream);
                register.clone_from(&encrypted);
                encrypted
            }
            CipherMode::OFB => {
                register = cipher.encrypt_block(&register)?;
                xor_blocks(block, &register)
            }
            CipherMode::CTR => xor_blocks(block, &counter_keystream(cipher, iv, index)?),
            CipherMode::RandomDelta => {
                // the delta evolves by encrypting itself
                let encrypted = cipher.encrypt_block(&xor_blocks(block, &register))?;
                register = cipher.encrypt_block(&register)?;
                encrypted
            }
        };

        result.extend_from_slice(&output);
        tracker.block_done(index)?;
    }

    Ok(result)
}

fn decrypt_blocks<C>(
    cipher: &C,
    mode: CipherMode,
    iv: &[u8],
    data: &[u8],
    tracker: &mut ProgressTracker<'_>,
) -> Result<Vec<u8>, CipherError>
where
    C: SymmetricCipher + Sync + ?Sized,
{
    if tracker.is_silent() && data.len() >= PARALLELISM_THRESHOLD {
        match mode {
            CipherMode::ECB => return process_ecb_parallel(cipher, data, false),
            CipherMode::CTR => return process_ctr_parallel(cipher, iv, data),
            _ => {}
        }
    }

    let mut result = Vec::with_capacity(data.len());
    let mut register = iv.to_vec();

    for (index, block) in data.chunks(cipher.block_size()).enumerate() {
        let output = match mode {
            CipherMode::ECB => cipher.decrypt_block(block)?,
            CipherMode::CBC => {
                let decrypted = xor_blocks(&cipher.decrypt_block(block)?, &register);
                register = block.to_vec();
                decrypted
            }
            CipherMode::PCBC => {
                let decrypted = xor_blocks(&cipher.decrypt_block(block)?, &register);
                register = xor_blocks(&decrypted, block);
                decrypted
            }
            CipherMode::CFB => {
                let keystream = cipher.encrypt_block(&register)?;
                register = block.to_vec();
                xor_blocks(block, &keystream)
            }
            CipherMode::OFB => {
                register = cipher.encrypt_block(&register)?;
                xor_blocks(block, &register)
            }
            CipherMode::CTR => xor_blocks(block, &counter_keystream(cipher, iv, index)?),
            CipherMode::RandomDelta => {
                let decrypted = xor_blocks(&cipher.decrypt_block(block)?, &register);
                register = cipher.encrypt_block(&register)?;
                decrypted
            }
        };

        result.extend_from_slice(&output);
        tracker.block_done(index)?;
    }

    Ok(result)
}

fn process_ecb_parallel<C>(cipher: &C, data: &[u8], encrypt: bool) -> Result<Vec<u8>, CipherError>
where
    C: SymmetricCipher + Sync + ?Sized,
{
    let blocks = data
        .par_chunks(cipher.block_size())
        .map(|block| {
            if encrypt {
                cipher.encrypt_block(block)
            } else {
                cipher.decrypt_block(block)
            }
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(blocks.concat())
}

fn process_ctr_parallel<C>(cipher: &C, counter: &[u8], data: &[u8]) -> Result<Vec<u8>, CipherError>
where
    C: SymmetricCipher + Sync + ?Sized,
{
    let blocks = data
        .par_chunks(cipher.block_size())
        .enumerate()
        .map(|(index, block)| Ok(xor_blocks(block, &counter_keystream(cipher, counter, index)?)))
        .collect::<Result<Vec<_>, CipherError>>()?;
    Ok(blocks.concat())
}

/// A cipher bundled with the mode, padding and optional fixed IV a chat
/// agreed on.
#[derive(Clone)]
pub struct CipherContext {
    algorithm: Arc<dyn SymmetricCipher + Send + Sync>,
    mode: CipherMode,
    padding: PaddingMode,
    iv: Option<Vec<u8>>,
}

impl CipherContext {
    pub fn new(
        algorithm: Box<dyn SymmetricCipher + Send + Sync>,
        mode: CipherMode,
        padding: PaddingMode,
        iv: Option<Vec<u8>>,
    ) -> Result<Self, CipherError> {
        if let Some(iv) = &iv {
            if mode.requires_iv() {
                check_iv(iv, algorithm.block_size())?;
            }
        }

        Ok(Self {
            algorithm: Arc::from(algorithm),
            mode,
            padding,
            iv,
        })
    }

    pub fn block_size(&self) -> usize {
        self.algorithm.block_size()
    }

    pub fn mode(&self) -> CipherMode {
        self.mode
    }

    pub fn padding(&self) -> PaddingMode {
        self.padding
    }

    pub fn iv(&self) -> Option<&[u8]> {
        self.iv.as_deref()
    }

    pub fn encrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.encrypt_with_progress(data, None)
    }

    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.decrypt_with_progress(data, None)
    }

    pub fn encrypt_with_progress(
        &self,
        data: &[u8],
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<Vec<u8>, CipherError> {
        encrypt(
            &*self.algorithm,
            data,
            self.mode,
            self.iv.as_deref(),
            self.padding,
            progress,
        )
    }

    pub fn decrypt_with_progress(
        &self,
        data: &[u8],
        progress: Option<ProgressCallback<'_>>,
    ) -> Result<Vec<u8>, CipherError> {
        decrypt(
            &*self.algorithm,
            data,
            self.mode,
            self.iv.as_deref(),
            self.padding,
            progress,
        )
    }
}
