//! Sequential processing of programs.

use crate::{process, Error, Opt, PathRead};
use metasulfate::Runtime;

/// Process the files one after the other, printing each result as soon as it is available.
pub fn run(opt: &Opt, rt: &Runtime) -> Result<(), Error> {
    for file in opt.files.iter() {
        let out = process(PathRead::try_from(file)?, rt, opt)?;
        print!("{}", out)
    }
    Ok(())
}
