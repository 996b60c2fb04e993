#[derive(thiserror::Error, Debug)]
pub enum HookError {
    #[error("Failed to spawn '{program}': {source}")]
    CommandSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' exited with code {code}")]
    CommandFailed { program: String, code: i32 },

    #[error("Invalid hook payload: {0}")]
    InvalidPayload(String),
}
