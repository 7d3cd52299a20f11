#[derive(Debug, Default, Clone, Copy)]
pub struct Config {
    /// Skips the banner printed before any subcommand runs.
    pub no_banner: bool,
    /// Quiet level. Anything above zero hides the banner and section headers.
    ///
    /// Does not silence the activation line or status output.
    pub quiet: u8,
    /// Validates the endpoint address and port before activating it.
    pub strict: bool,
    /// Disables ANSI colors in terminal output.
    pub no_color: bool,
}
