//! Processing of a single program.

use crate::{Error, Opt, PathRead, Stage};
use metasulfate::{parse, Runtime, Share, Term};

fn render(tm: &Term, opt: &Opt) -> String {
    if opt.tree {
        tm.tree().to_string()
    } else {
        format!("{}\n", tm)
    }
}

/// Parse, share and evaluate a program, as far as the options permit.
///
/// Return the text to print for the program,
/// namely the term obtained by the last performed stage.
pub fn process(pr: PathRead, rt: &Runtime, opt: &Opt) -> Result<String, Error> {
    let path = pr.path.clone();
    let src = pr.read_to_string()?;

    log::info!("Parse {}", path.display());
    let tm = parse::Term::parse_str(&src)?;
    if opt.omits(Stage::Share) {
        return Ok(format!("{}\n", tm));
    }

    let tm: Term = tm.share(rt.atoms());
    if opt.omits(Stage::Eval) {
        return Ok(render(&tm, opt));
    }

    log::info!("Evaluate {}", path.display());
    let nf = rt.evaluate(&tm);
    log::debug!("Cache holds {} normal forms", rt.cache().len());
    Ok(render(&nf, opt))
}
