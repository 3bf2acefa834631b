//! Built-in catalog of well-known patterns, stored as pattern text.

use lifepat_model::{AliveSet, GridDims, Result};

use crate::decode::decode;

/// Broad family a preset belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresetCategory {
    StillLife,
    Oscillator,
    Spaceship,
    Methuselah,
    Gun,
}

impl PresetCategory {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::StillLife => "Still life",
            Self::Oscillator => "Oscillator",
            Self::Spaceship => "Spaceship",
            Self::Methuselah => "Methuselah",
            Self::Gun => "Gun",
        }
    }
}

/// A named pattern in plain-text form.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub category: PresetCategory,
    pub text: &'static str,
}

impl Preset {
    /// Lowercase, hyphenated name used on the command line.
    pub fn slug(&self) -> String {
        self.name
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() {
                    ch.to_ascii_lowercase()
                } else {
                    '-'
                }
            })
            .collect()
    }

    /// Decodes the preset onto a grid of the given size.
    pub fn decode(&self, dims: GridDims) -> Result<AliveSet> {
        decode(self.text, dims)
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Block",
        category: PresetCategory::StillLife,
        text: "OO\nOO",
    },
    Preset {
        name: "Beehive",
        category: PresetCategory::StillLife,
        text: ".OO.\nO..O\n.OO.",
    },
    Preset {
        name: "Blinker",
        category: PresetCategory::Oscillator,
        text: "OOO",
    },
    Preset {
        name: "Toad",
        category: PresetCategory::Oscillator,
        text: ".OOO\nOOO.",
    },
    Preset {
        name: "Beacon",
        category: PresetCategory::Oscillator,
        text: "OO..\nOO..\n..OO\n..OO",
    },
    Preset {
        name: "Pulsar",
        category: PresetCategory::Oscillator,
        text: "..OOO...OOO..\n\
               .............\n\
               O....O.O....O\n\
               O....O.O....O\n\
               O....O.O....O\n\
               ..OOO...OOO..\n\
               .............\n\
               ..OOO...OOO..\n\
               O....O.O....O\n\
               O....O.O....O\n\
               O....O.O....O\n\
               .............\n\
               ..OOO...OOO..",
    },
    Preset {
        name: "Glider",
        category: PresetCategory::Spaceship,
        text: ".O.\n..O\nOOO",
    },
    Preset {
        name: "LWSS",
        category: PresetCategory::Spaceship,
        text: ".O..O\nO....\nO...O\nOOOO.",
    },
    Preset {
        name: "R-pentomino",
        category: PresetCategory::Methuselah,
        text: ".OO\nOO.\n.O.",
    },
    Preset {
        name: "Diehard",
        category: PresetCategory::Methuselah,
        text: "......O.\nOO......\n.O...OOO",
    },
    Preset {
        name: "Acorn",
        category: PresetCategory::Methuselah,
        text: ".O.....\n...O...\nOO..OOO",
    },
    Preset {
        name: "Gosper Glider Gun",
        category: PresetCategory::Gun,
        text: "........................O...........\n\
               ......................O.O...........\n\
               ............OO......OO............OO\n\
               ...........O...O....OO............OO\n\
               OO........O.....O...OO..............\n\
               OO........O...O.OO....O.O...........\n\
               ..........O.....O.......O...........\n\
               ...........O...O....................\n\
               ............OO......................",
    },
];

/// Looks up a preset by display name or slug, ignoring case.
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    let wanted = name.trim();
    let slug = wanted.to_ascii_lowercase();
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(wanted) || preset.slug() == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_by_name_and_slug() {
        assert_eq!(find_preset("glider").map(|p| p.name), Some("Glider"));
        assert_eq!(
            find_preset("gosper-glider-gun").map(|p| p.name),
            Some("Gosper Glider Gun")
        );
        assert_eq!(find_preset("R-Pentomino").map(|p| p.name), Some("R-pentomino"));
        assert!(find_preset("nope").is_none());
    }

    #[test]
    fn preset_rows_are_rectangular() {
        for preset in PRESETS {
            let widths: Vec<usize> = preset.text.lines().map(str::len).collect();
            assert!(
                widths.windows(2).all(|pair| pair[0] == pair[1]),
                "{} has ragged rows: {widths:?}",
                preset.name
            );
        }
    }

    #[test]
    fn glider_has_five_cells() {
        let dims = GridDims::new(10, 10).unwrap();
        let cells = find_preset("Glider").unwrap().decode(dims).unwrap();
        assert_eq!(cells.len(), 5);
    }
}
