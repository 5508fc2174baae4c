use metasulfate as ms;
use std::io;

/// Central error type.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Ms(ms::Error),
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<ms::Error> for Error {
    fn from(err: ms::Error) -> Self {
        Self::Ms(err)
    }
}

impl From<ms::parse::Error> for Error {
    fn from(err: ms::parse::Error) -> Self {
        Self::Ms(err.into())
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}
