// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Channel stream → text.
//!
//! The decoder pulls one masked channel value at a time, unmasks it, and
//! reads it as a UTF-8 lead byte. The lead byte's value says how many
//! continuation values to pull next. A lead byte of 0 is the end-of-stream
//! sentinel written by the encoder's zero padding.
//!
//! ```text
//! AwaitLead --0 / EOF--> Done
//! AwaitLead --lead--> collect n continuations --> emit char --> AwaitLead
//! collecting --EOF--> Truncated(bytes)
//! ```
//!
//! A group that is not valid UTF-8 (typically a wrong seed) is yielded as an
//! [`InvalidChar`] and decoding carries on with the next value.

use log::{debug, warn};

use crate::codec::error::{CodecError, InvalidChar};
use crate::codec::mask::MaskSource;
use crate::codec::shift::{shift, Direction};

/// Reserved lead byte marking the end of the payload.
pub const SENTINEL: u8 = 0;

/// Number of continuation bytes implied by a lead byte.
///
/// Uses the lead byte's magnitude only, so a stray continuation byte
/// (0x80..=0xBF) or an out-of-range lead (0xF8..) still consumes a fixed
/// count and then fails UTF-8 validation.
pub fn continuation_len(lead: u8) -> usize {
    match lead {
        0..=127 => 0,
        128..=223 => 1,
        224..=239 => 2,
        240..=255 => 3,
    }
}

/// Where the decoder is in its state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeState {
    /// Waiting for the next lead byte.
    AwaitLead,
    /// Stopped at the sentinel or at a clean end of the stream.
    Done,
    /// The stream ended mid-character; holds the bytes collected so far.
    Truncated(Vec<u8>),
}

/// Streaming decoder over a one-shot channel iterator.
///
/// Yields one item per decoded character. Created by
/// [`PixelCodec::decoder`](crate::codec::PixelCodec::decoder), which resets
/// the mask before handing it over.
pub struct Decoder<I, M> {
    channels: I,
    mask: M,
    state: DecodeState,
    position: usize,
}

impl<I, M> Decoder<I, M>
where
    I: Iterator<Item = u8>,
    M: MaskSource,
{
    /// Wrap `channels` with a mask source that is already reset to the seed.
    pub(crate) fn new(channels: I, mask: M) -> Self {
        Self { channels, mask, state: DecodeState::AwaitLead, position: 0 }
    }

    pub fn state(&self) -> &DecodeState {
        &self.state
    }

    /// Channel values consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Bytes of the partial character if the stream was truncated.
    pub fn leftover(&self) -> Option<&[u8]> {
        match &self.state {
            DecodeState::Truncated(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Consume the decoder, returning the truncated tail if there was one.
    pub fn into_leftover(self) -> Option<Vec<u8>> {
        match self.state {
            DecodeState::Truncated(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Pull and unmask the next channel value.
    fn pull(&mut self) -> Option<u8> {
        let raw = self.channels.next()?;
        self.position += 1;
        Some(shift(raw, self.mask.next_mask(), Direction::Backward))
    }
}

impl<I, M> Iterator for Decoder<I, M>
where
    I: Iterator<Item = u8>,
    M: MaskSource,
{
    type Item = Result<char, InvalidChar>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != DecodeState::AwaitLead {
            return None;
        }

        let offset = self.position;
        let Some(lead) = self.pull() else {
            debug!("channel stream exhausted after {offset} values");
            self.state = DecodeState::Done;
            return None;
        };
        if lead == SENTINEL {
            debug!("end-of-stream sentinel at channel {offset}");
            self.state = DecodeState::Done;
            return None;
        }

        let mut bytes = Vec::with_capacity(4);
        bytes.push(lead);
        for _ in 0..continuation_len(lead) {
            match self.pull() {
                Some(b) => bytes.push(b),
                None => {
                    warn!("channel stream truncated mid-character at channel {offset}, leftover {bytes:02X?}");
                    self.state = DecodeState::Truncated(bytes);
                    return None;
                }
            }
        }

        Some(match single_char(&bytes) {
            Some(c) => Ok(c),
            None => {
                debug!("invalid UTF-8 group {bytes:02X?} at channel {offset}");
                Err(InvalidChar { offset, bytes })
            }
        })
    }
}

/// Decode `bytes` as exactly one UTF-8 character.
fn single_char(bytes: &[u8]) -> Option<char> {
    let s = core::str::from_utf8(bytes).ok()?;
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

/// Fully collected decode result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded {
    /// One entry per character group, in stream order.
    pub chars: Vec<Result<char, InvalidChar>>,
    /// Partial character left when the stream ended mid-sequence.
    pub leftover: Option<Vec<u8>>,
}

impl Decoded {
    /// Drain a decoder to completion.
    pub fn collect_from<I, M>(mut decoder: Decoder<I, M>) -> Self
    where
        I: Iterator<Item = u8>,
        M: MaskSource,
    {
        let chars = decoder.by_ref().collect();
        Self { chars, leftover: decoder.into_leftover() }
    }

    /// Concatenation of every successfully decoded character.
    pub fn text(&self) -> String {
        self.chars.iter().filter_map(|c| c.as_ref().ok()).collect()
    }

    /// Groups that failed UTF-8 validation.
    pub fn invalid_chars(&self) -> impl Iterator<Item = &InvalidChar> {
        self.chars.iter().filter_map(|c| c.as_ref().err())
    }

    /// `true` when every group decoded and the stream was not truncated.
    pub fn is_complete(&self) -> bool {
        self.leftover.is_none() && self.chars.iter().all(Result::is_ok)
    }

    /// The decoded text, or the first problem encountered.
    ///
    /// # Errors
    /// - [`CodecError::InvalidSequence`] for the first invalid group.
    /// - [`CodecError::Truncated`] if the stream ended mid-character.
    pub fn into_text(self) -> Result<String, CodecError> {
        let mut text = String::with_capacity(self.chars.len());
        for c in self.chars {
            text.push(c?);
        }
        match self.leftover {
            Some(leftover) => Err(CodecError::Truncated { leftover }),
            None => Ok(text),
        }
    }
}
