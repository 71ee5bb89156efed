use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Unable to reach the server: {}", source))]
    Request { source: gloo_net::Error },

    #[snafu(display("Unable to parse server response: {}", source))]
    ParseResponse { source: gloo_net::Error },

    #[snafu(display("Unable to load entries, server responded with {}", status))]
    Service { status: u16 },

    #[snafu(display("{}", msg))]
    Whatever { msg: String },
}
