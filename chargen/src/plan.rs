//! Conversion plans
//!
//! A plan is a TOML file with one `[[convert]]` table per ROM:
//!
//! ```toml
//! [[convert]]
//! rom = "s619.bin"
//! name = "Robotron1715"
//! png = "previews/robotron1715.png"
//! scale = 4
//! ```
//!
//! Every key but `rom` is optional and falls back to the same default as the
//! command line.

use std::path::PathBuf;

use serde::Deserialize;

use crate::convert::Conversion;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plan {
    #[serde(default)]
    pub convert: Vec<Job>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Job {
    pub rom: PathBuf,
    pub name: Option<String>,
    pub bdf: Option<PathBuf>,
    pub png: Option<PathBuf>,
    pub scale: Option<u32>,
}

impl Job {
    pub fn resolve(&self) -> Conversion {
        Conversion::new(
            Some(self.rom.clone()),
            self.name.clone(),
            self.bdf.clone(),
            self.png.clone(),
            self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_plan() {
        let plan: Plan = toml::from_str(
            r#"
            [[convert]]
            rom = "s619.bin"

            [[convert]]
            rom = "roms/k7024.bin"
            name = "K7024"
            png = "previews/k7024.png"
            scale = 4
            "#,
        )
        .unwrap();
        assert_eq!(plan.convert.len(), 2);

        let first = plan.convert[0].resolve();
        assert_eq!(first.rom, PathBuf::from("s619.bin"));
        assert_eq!(first.name, "Robotron1715");
        assert_eq!(first.bdf, PathBuf::from("robotron1715.bdf"));
        assert_eq!(first.png, PathBuf::from("robotron1715.png"));
        assert_eq!(first.scale, 2);

        let second = plan.convert[1].resolve();
        assert_eq!(second.rom, PathBuf::from("roms/k7024.bin"));
        assert_eq!(second.bdf, PathBuf::from("k7024.bdf"));
        assert_eq!(second.png, PathBuf::from("previews/k7024.png"));
        assert_eq!(second.scale, 4);
    }

    #[test]
    fn empty_plan() {
        let plan: Plan = toml::from_str("").unwrap();
        assert!(plan.convert.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = toml::from_str::<Plan>(
            r#"
            [[convert]]
            rom = "s619.bin"
            sacle = 3
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rom_is_required() {
        let result = toml::from_str::<Plan>("[[convert]]\nname = \"K7024\"\n");
        assert!(result.is_err());
    }
}
