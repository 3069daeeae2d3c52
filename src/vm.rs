pub mod execute;
pub mod instruction;
pub mod memory;
pub mod opcode;
pub mod registers;
pub mod trap_vector;

use log::{debug, info};

use crate::error::VmError;
use instruction::Instruction;
use memory::Memory;
use registers::Registers;

/// The whole machine: memory, registers, and the halt flag, with exclusive
/// interior mutation. No global state: every test gets a fresh, independent
/// `Vm`.
pub struct Vm {
    pub memory: Memory,
    pub registers: Registers,
    pub running: bool,
    pub strict: bool,
}

impl Vm {
    pub fn new() -> Self {
        Self {
            memory: Memory::new(),
            registers: Registers::new(),
            running: false,
            strict: false,
        }
    }

    /// Runs the fetch-decode-execute loop until TRAP HALT clears `running`, or
    /// a fatal error (a strict-mode reserved opcode, or an I/O failure) ends it
    /// early.
    pub fn run(mut self) -> Result<(), VmError> {
        info!("starting execution at pc {:#06x}", self.registers.pc);
        self.running = true;
        while self.running {
            self.step()?;
        }
        debug!("halted at pc {:#06x}", self.registers.pc);
        Ok(())
    }

    /// Fetches, decodes, and executes exactly one instruction.
    pub fn step(&mut self) -> Result<(), VmError> {
        let word = self.memory.read(self.registers.pc);
        self.registers.pc = self.registers.pc.wrapping_add(1);
        let instruction = Instruction::decode(word);
        execute::execute(self, instruction)
    }
}

#[cfg(test)]
mod tests {
    use super::registers::Register;
    use super::*;

    #[test]
    fn new_vm_is_not_running_until_run_or_step_is_called() {
        let vm = Vm::new();
        assert_eq!(vm.running, false);
        assert_eq!(vm.registers.pc, 0x3000);
    }

    #[test]
    fn step_advances_pc_before_executing() {
        let mut vm = Vm::new();
        // LEA R0, #0 at 0x3000: DR should get pc-after-advance + 0.
        vm.memory.write(0x3000, 0xE000);
        vm.step().unwrap();
        assert_eq!(vm.registers.pc, 0x3001);
        assert_eq!(vm.registers.read(Register::R0), 0x3001);
    }

    #[test]
    fn run_executes_end_to_end_scenario_add_immediate() {
        let mut vm = Vm::new();
        vm.memory.write(0x3000, 0x1262); // ADD R1, R1, #2
        vm.memory.write(0x3001, 0xF025); // TRAP HALT
        vm.run().unwrap();
    }

    #[test]
    fn run_halts_on_trap_halt() {
        let mut vm = Vm::new();
        vm.memory.write(0x3000, 0xF025); // TRAP HALT
        vm.run().unwrap();
    }

    #[test]
    fn run_propagates_reserved_opcode_error_in_strict_mode() {
        let mut vm = Vm::new();
        vm.strict = true;
        vm.memory.write(0x3000, 0x8000); // RTI, reserved
        match vm.run() {
            Err(VmError::ReservedOpcode(0x8000)) => {}
            other => panic!("expected ReservedOpcode, got {:?}", other),
        }
    }

    #[test]
    fn run_skips_reserved_opcode_permissively() {
        let mut vm = Vm::new();
        vm.memory.write(0x3000, 0x8000); // RTI, reserved, not strict
        vm.memory.write(0x3001, 0xF025); // TRAP HALT
        vm.run().unwrap();
    }
}
