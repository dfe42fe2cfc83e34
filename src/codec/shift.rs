// Copyright (c) 2026 The pixstash-core Authors
// SPDX-License-Identifier: GPL-3.0-only

//! Reversible modular shift of a channel value by a mask value.

/// Direction of the shift: `Forward` masks, `Backward` unmasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Compute `(value + direction * mask) mod 256`.
#[inline]
pub fn shift(value: u8, mask: u8, direction: Direction) -> u8 {
    match direction {
        Direction::Forward => value.wrapping_add(mask),
        Direction::Backward => value.wrapping_sub(mask),
    }
}
