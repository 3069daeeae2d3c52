/// Everything a run of the VM needs to get started.
///
/// Built by `main` from `clap` matches rather than scanned by hand, since the
/// binary's real argument surface (program path, `--debug`, `--strict`) is wider
/// than a couple of positional strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub filename: String,
    pub debug: bool,
    pub strict: bool,
}

impl Config {
    pub fn new(filename: impl Into<String>, debug: bool, strict: bool) -> Self {
        Self {
            filename: filename.into(),
            debug,
            strict,
        }
    }
}
