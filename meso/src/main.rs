//! Evaluator for Metasulfate programs.

use clap::Parser;
use meso::{par, seq, Error, Opt};
use metasulfate::Runtime;

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env("LOG").init();

    let opt = Opt::parse();

    // if a precise number of parallel jobs has been given
    if let Some(Some(jobs)) = opt.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()?;
    }

    let rt = Runtime::new();
    if opt.jobs.is_some() {
        par::run(&opt, &rt)
    } else {
        seq::run(&opt, &rt)
    }
}
