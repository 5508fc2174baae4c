/// A stage in the processing of programs.
///
/// This is useful to omit certain parts of program processing.
/// Omitting one stage also omits all stages after it,
/// i.e. all stages greater than the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Interning of atoms
    Share,
    /// Rewriting to normal form
    Eval,
}

impl core::str::FromStr for Stage {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "share" => Ok(Self::Share),
            "eval" => Ok(Self::Eval),
            _ => Err("unknown stage: ".to_owned() + s),
        }
    }
}

#[test]
fn parse_stage() {
    assert_eq!("share".parse::<Stage>(), Ok(Stage::Share));
    assert_eq!("eval".parse::<Stage>(), Ok(Stage::Eval));
    assert!("check".parse::<Stage>().is_err());
    assert!(Stage::Share < Stage::Eval);
}
