//! Parallel processing of programs.

use crate::{process, Error, Opt, PathRead};
use metasulfate::Runtime;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// Process the files in parallel, sharing atoms and normal forms between them.
///
/// The results are printed in the order of the files.
/// If processing a file fails, the results of all previous files are printed.
pub fn run(opt: &Opt, rt: &Runtime) -> Result<(), Error> {
    let outs: Vec<_> = opt
        .files
        .par_iter()
        .map(|file| process(PathRead::try_from(file)?, rt, opt))
        .collect();
    for out in outs {
        print!("{}", out?)
    }
    Ok(())
}
