use crate::impl_err;

#[derive(Debug)]
pub enum PlacesError {
    /// The service credential is absent from the environment. Fatal to
    /// the screen; no search is attempted without it.
    MissingCredential(String),
    Http(reqwest::Error),
    /// The service answered with a non-OK status word.
    Status {
        status: String,
        message: Option<String>,
    },
    /// The directions response carried no usable route leg.
    NoRoute,
}

impl From<reqwest::Error> for PlacesError {
    fn from(value: reqwest::Error) -> Self {
        PlacesError::Http(value)
    }
}

impl_err!(PlacesError, Places);
