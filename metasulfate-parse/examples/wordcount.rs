//! For every word appearing in a Metasulfate file, output its number of occurrences.

use metasulfate_parse::Term;
use std::collections::HashMap;

fn words<'a, S>(tm: &'a Term<S>) -> Box<dyn Iterator<Item = &'a S> + 'a> {
    match tm {
        Term::Symb(s) | Term::Var(s) => Box::new(core::iter::once(s)),
        Term::Seq(tms) => Box::new(tms.iter().flat_map(|tm| words(tm))),
    }
}

fn main() -> std::io::Result<()> {
    let path = match std::env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("usage: wordcount FILE");
            std::process::exit(2)
        }
    };
    let src = std::fs::read_to_string(&path)?;

    let mut map: HashMap<&str, usize> = HashMap::new();
    match Term::parse_str(&src) {
        Ok(tm) => words(&tm).for_each(|w| *map.entry(*w).or_default() += 1),
        Err(e) => eprintln!("{path}: {e}"),
    }

    for (word, count) in map {
        println!("{count}\t{word}");
    }
    Ok(())
}
