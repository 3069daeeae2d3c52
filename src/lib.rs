mod config;
mod debugger;
mod error;
mod loader;
mod sign_extend;
mod vm;

pub use crate::config::Config;
pub use crate::error::VmError;

use log::info;

use crate::loader::load_file;
use crate::vm::Vm;

/// Loads the program named by `config.filename` and runs it, either free-running
/// or under the interactive debugger depending on `config.debug`.
pub fn run(config: Config) -> Result<(), VmError> {
    let mut vm = Vm::new();
    vm.strict = config.strict;

    let origin = load_file(&config.filename, &mut vm)?;
    info!("{} ready to run from origin {:#06x}", config.filename, origin);

    if config.debug {
        debugger::run(vm)
    } else {
        vm.run()
    }
}
