/// Ways the user's command line can be turned away. Each carries the usage
/// message to show alongside it.
#[derive(Debug, thiserror::Error)]
pub enum CommandLineError {
    #[error("unrecognized or incomplete arguments\n\n{usage}")]
    Rejected { usage: String },

    #[error("a mandatory parameter was omitted\n\n{usage}")]
    MissingMandatory { usage: String },
}
