use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// A readable program source together with its path.
pub struct PathRead {
    pub path: PathBuf,
    pub read: Box<dyn Read>,
}

impl TryFrom<&PathBuf> for PathRead {
    type Error = io::Error;

    /// Open the file at the given path, or standard input if the path is "-".
    fn try_from(path: &PathBuf) -> Result<Self, Self::Error> {
        let read: Box<dyn Read> = if path == Path::new("-") {
            Box::new(io::stdin())
        } else {
            Box::new(std::fs::File::open(path)?)
        };
        let path = path.clone();
        Ok(Self { path, read })
    }
}

impl PathRead {
    pub fn read_to_string(mut self) -> io::Result<String> {
        let mut s = String::new();
        self.read.read_to_string(&mut s)?;
        Ok(s)
    }
}

#[test]
fn read_file() -> io::Result<()> {
    let path = PathBuf::from("../demos/scope.meso");
    let src = PathRead::try_from(&path)?.read_to_string()?;
    assert!(src.contains("[greet 'x]"));

    let missing = PathBuf::from("../demos/missing.meso");
    assert!(PathRead::try_from(&missing).is_err());
    Ok(())
}
