// Copyright 2023 drey7925
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0


use std::fmt::Debug;

/// Index of a sprite in the global sprite table
pub type ImageIndex = u32;

/// A palette colour index, as stored in ride colour schemes
pub type Colour = u8;

/// Palettes that replace a sprite's colours entirely
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum FilterPalette {
    /// Construction preview ("ghost") track
    Ghost,
    /// Track selected in the construction window
    Highlight,
}

/// A sprite reference: an index plus the colour remap to draw it with.
///
/// The session hands painters templates with the colours already applied; a
/// painter only ever changes the index.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ImageId {
    index: ImageIndex,
    primary: Option<Colour>,
    secondary: Option<Colour>,
    palette: Option<FilterPalette>,
}

impl ImageId {
    pub const fn new(index: ImageIndex) -> ImageId {
        ImageId {
            index,
            primary: None,
            secondary: None,
            palette: None,
        }
    }

    pub const fn index(&self) -> ImageIndex {
        self.index
    }
    pub const fn primary(&self) -> Option<Colour> {
        self.primary
    }
    pub const fn secondary(&self) -> Option<Colour> {
        self.secondary
    }
    pub const fn palette(&self) -> Option<FilterPalette> {
        self.palette
    }

    #[inline]
    pub const fn with_index(self, index: ImageIndex) -> ImageId {
        ImageId { index, ..self }
    }

    #[inline]
    pub const fn with_index_offset(self, offset: ImageIndex) -> ImageId {
        ImageId {
            index: self.index + offset,
            ..self
        }
    }

    pub const fn with_primary(self, colour: Colour) -> ImageId {
        ImageId {
            primary: Some(colour),
            ..self
        }
    }

    pub const fn with_secondary(self, colour: Colour) -> ImageId {
        ImageId {
            secondary: Some(colour),
            ..self
        }
    }

    /// Replaces the remap with a filter palette. Remap colours are dropped since
    /// the palette overrides them.
    pub const fn with_transparency(self, palette: FilterPalette) -> ImageId {
        ImageId {
            index: self.index,
            primary: None,
            secondary: None,
            palette: Some(palette),
        }
    }
}

impl Debug for ImageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("img:{}", self.index))?;
        if let Some(palette) = self.palette {
            return f.write_fmt(format_args!("[{:?}]", palette));
        }
        match (self.primary, self.secondary) {
            (Some(p), Some(s)) => f.write_fmt(format_args!("[{}/{}]", p, s)),
            (Some(p), None) => f.write_fmt(format_args!("[{}]", p)),
            (None, Some(s)) => f.write_fmt(format_args!("[-/{}]", s)),
            (None, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_keeps_colours() {
        let template = ImageId::default().with_primary(4).with_secondary(9);
        let image = template.with_index(1200).with_index_offset(3);
        assert_eq!(image.index(), 1203);
        assert_eq!(image.primary(), Some(4));
        assert_eq!(image.secondary(), Some(9));
        assert_eq!(format!("{:?}", image), "img:1203[4/9]");
    }

    #[test]
    fn palette_replaces_remap() {
        let image = ImageId::new(5)
            .with_primary(1)
            .with_transparency(FilterPalette::Ghost);
        assert_eq!(image.primary(), None);
        assert_eq!(image.palette(), Some(FilterPalette::Ghost));
        assert_eq!(image.with_index(7).palette(), Some(FilterPalette::Ghost));
    }
}
