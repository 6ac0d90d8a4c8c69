pub use failure::Error;

/// A result using Fail
pub type Res<T> = Result<T, failure::Error>;

/// Join an error and all of its causes into one line.
pub fn describe(error: &Error) -> String {
    error.iter_chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(": ")
}
