use std::fmt;
use std::str::FromStr;

use crate::session::edit_session::EditSession;
use crate::shared::constants::{DEFAULT_BLUR_RADIUS, DEFAULT_CELL_SIZE};
use crate::shared::edit_error::EditError;
use crate::shared::region::Region;

/// One edit in textual form, as accepted on the command line.
///
/// Grammar:
/// - `blur:L,T,R,B[:RADIUS]`
/// - `pixelate:L,T,R,B[:CELL]`
/// - `crop:L,T,R,B`
/// - `reset`
#[derive(Clone, Debug, PartialEq)]
pub enum EditCommand {
    Blur { region: Region, radius: f32 },
    Pixelate { region: Region, cell_size: u32 },
    Crop { region: Region },
    Reset,
}

impl EditCommand {
    pub fn apply(&self, session: &mut EditSession) -> Result<(), EditError> {
        match *self {
            EditCommand::Blur { region, radius } => session.blur(region, radius),
            EditCommand::Pixelate { region, cell_size } => session.pixelate(region, cell_size),
            EditCommand::Crop { region } => session.crop(region),
            EditCommand::Reset => session.reset_to_original(),
        }
    }
}

fn parse_region(text: &str) -> Result<Region, String> {
    let coords: Vec<i32> = text
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| format!("invalid coordinate '{}' in region '{text}'", part.trim()))
        })
        .collect::<Result<_, _>>()?;
    match coords[..] {
        [left, top, right, bottom] => Ok(Region::new(left, top, right, bottom)),
        _ => Err(format!(
            "region must be LEFT,TOP,RIGHT,BOTTOM, got '{text}'"
        )),
    }
}

impl FromStr for EditCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.trim().split(':');
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next();
        let amount = parts.next();
        if parts.next().is_some() {
            return Err(format!("too many ':' separated fields in '{s}'"));
        }

        match (name.as_str(), region, amount) {
            ("blur", Some(region), amount) => Ok(EditCommand::Blur {
                region: parse_region(region)?,
                radius: match amount {
                    Some(r) => r
                        .trim()
                        .parse()
                        .map_err(|_| format!("invalid blur radius '{r}'"))?,
                    None => DEFAULT_BLUR_RADIUS,
                },
            }),
            ("pixelate", Some(region), amount) => Ok(EditCommand::Pixelate {
                region: parse_region(region)?,
                cell_size: match amount {
                    Some(c) => c
                        .trim()
                        .parse()
                        .map_err(|_| format!("invalid pixel size '{c}'"))?,
                    None => DEFAULT_CELL_SIZE,
                },
            }),
            ("crop", Some(region), None) => Ok(EditCommand::Crop {
                region: parse_region(region)?,
            }),
            ("reset", None, None) => Ok(EditCommand::Reset),
            ("blur" | "pixelate" | "crop", None, _) => {
                Err(format!("'{name}' needs a region, e.g. {name}:10,10,50,50"))
            }
            _ => Err(format!(
                "unknown edit '{s}' (expected blur, pixelate, crop or reset)"
            )),
        }
    }
}

impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = |region: &Region| {
            format!(
                "{},{},{},{}",
                region.left, region.top, region.right, region.bottom
            )
        };
        match self {
            EditCommand::Blur { region, radius } => write!(f, "blur:{}:{radius}", r(region)),
            EditCommand::Pixelate { region, cell_size } => {
                write!(f, "pixelate:{}:{cell_size}", r(region))
            }
            EditCommand::Crop { region } => write!(f, "crop:{}", r(region)),
            EditCommand::Reset => write!(f, "reset"),
        }
    }
}
