pub mod compare;
pub mod max;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Version(#[from] vercmp_version::VersionError),
    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = miette::Result<T, Error>;

fn print_json(record: &impl serde::Serialize) -> Result<()> {
    anstream::println!("{}", serde_json::to_string(record)?);
    Ok(())
}
