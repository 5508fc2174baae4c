use crate::Stage;
use clap::Parser;
use std::path::PathBuf;

/// Evaluate Metasulfate programs
#[derive(Clone, Debug, Parser)]
#[command(version)]
pub struct Opt {
    /// Print normal forms as trees
    #[arg(long)]
    pub tree: bool,

    /// Perform only operations until (excluding) the given stage.
    ///
    /// Possible values are: share, eval.
    #[arg(long)]
    pub omit: Option<Stage>,

    /// Evaluate files concurrently
    ///
    /// If this option is given with a number n, then
    /// maximally n files are concurrently evaluated.
    /// If this option is given without an extra argument, then
    /// the number of concurrently evaluated files is
    /// determined automatically from the number of CPUs.
    ///
    /// The normal forms are printed in the order of the files in any case.
    #[arg(long, short = 'j')]
    pub jobs: Option<Option<usize>>,

    /// Files to process
    ///
    /// Every file contains a single program.
    /// To read from standard input, use "-" as file name.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

impl Opt {
    /// Return true if the given stage is omitted.
    pub fn omits(&self, stage: Stage) -> bool {
        self.omit.map_or(false, |omit| omit <= stage)
    }
}

#[test]
fn parse_args() {
    let opt = Opt::parse_from(["meso", "--omit", "eval", "a.meso", "-", "-j"]);
    assert!(opt.omits(Stage::Eval));
    assert!(!opt.omits(Stage::Share));
    assert_eq!(opt.jobs, Some(None));
    assert_eq!(opt.files, [PathBuf::from("a.meso"), PathBuf::from("-")]);

    let opt = Opt::parse_from(["meso", "--omit", "share", "--jobs", "4", "a.meso"]);
    assert!(opt.omits(Stage::Eval));
    assert_eq!(opt.jobs, Some(Some(4)));

    assert!(Opt::try_parse_from(["meso"]).is_err());
    assert!(Opt::try_parse_from(["meso", "--omit", "check", "a.meso"]).is_err());
}
