use crate::error::Error;

pub type EResult<T> = Result<T, Error>;
