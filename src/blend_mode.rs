// Copyright 2020 Yevhenii Reizner
//
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

/// A blending mode.
///
/// Defines how source and destination colors are combined before
/// coverage is applied. Opacity and mask are respected by every mode.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum BlendMode {
    /// Source over destination.
    Normal,
    /// Sum of colors, clamped to 255.
    Additive,
    /// Destination minus source, clamped to 0.
    Subtractive,
    /// Product of colors; darkens destination.
    Multiply,
}

impl Default for BlendMode {
    fn default() -> Self {
        BlendMode::Normal
    }
}

impl BlendMode {
    /// Combines a destination channel with a source channel.
    ///
    /// `Normal` simply returns the source.
    #[inline(always)]
    pub(crate) fn combine(self, dest: u8, src: u8) -> u8 {
        match self {
            BlendMode::Normal => src,
            BlendMode::Additive => dest.saturating_add(src),
            BlendMode::Subtractive => dest.saturating_sub(src),
            BlendMode::Multiply => ((u32::from(dest) * u32::from(src)) >> 8) as u8,
        }
    }
}
