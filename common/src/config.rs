pub struct Config {
    /// Suppresses headers and progress lines.
    ///
    /// Repeatable; at 2 only result lines are written.
    pub quiet: u8,
    /// Raises the log level (`-v` debug, `-vv` trace).
    pub verbose: u8,
    /// Disables colored terminal output.
    pub no_color: bool,
}

impl Config {
    /// The tracing filter directive matching the verbosity flags.
    pub fn log_directive(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (q, _) if q > 1 => "error",
            (1, _) => "warn",
            (_, 0) => "info",
            (_, 1) => "debug",
            _ => "trace",
        }
    }
}
