mod disassemble;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use crate::debugger::disassemble::disassemble;
use crate::error::VmError;
use crate::vm::Vm;

lazy_static! {
    static ref READ_REGEX: Regex = Regex::new(r"^read 0x([a-fA-F0-9]{1,4})$").unwrap();
    static ref BREAK_REGEX: Regex = Regex::new(r"^break 0x([a-fA-F0-9]{1,4})$").unwrap();
}

/// Runs `vm` under an interactive rustyline REPL instead of free-running it.
/// Stepping, continuing, inspecting registers, disassembling, and setting a
/// one-shot breakpoint are all driven from the prompt.
pub fn run(mut vm: Vm) -> Result<(), VmError> {
    let mut rl = Editor::<()>::new();
    let mut break_address: Option<u16> = None;
    vm.running = true;

    while vm.running {
        let prompt = format!("{:#06x}> ", vm.registers.pc);
        match rl.readline(&prompt) {
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                match line.trim() {
                    "c" | "continue" => {
                        while vm.running && break_address != Some(vm.registers.pc) {
                            vm.step()?;
                        }
                        if let Some(address) = break_address.take() {
                            if vm.running {
                                println!("Reached breakpoint at {:#06x}", address);
                            }
                        }
                    }

                    "s" | "step" | "" => {
                        if vm.running {
                            vm.step()?;
                        }
                    }

                    "i" | "inspect" => {
                        println!("pc:    {:#06x}", vm.registers.pc);
                        println!("cond:  {:?}", vm.registers.condition);
                        for (index, value) in vm.registers.general().iter().enumerate() {
                            println!("r{}:    {:#06x}", index, value);
                        }
                    }

                    "d" | "disassemble" => {
                        let instruction = vm.memory.read(vm.registers.pc);
                        println!("{}", disassemble(instruction));
                    }

                    command if READ_REGEX.is_match(command) => {
                        let address = READ_REGEX.captures(command).unwrap()[1]
                            .parse_radix_hex();
                        let value = vm.memory.read(address);
                        println!("{:#06x}", value);
                    }

                    command if BREAK_REGEX.is_match(command) => {
                        let address = BREAK_REGEX.captures(command).unwrap()[1].parse_radix_hex();
                        break_address = Some(address);
                        println!("Break address set to {:#06x}", address);
                    }

                    "h" | "help" => print_help(),

                    "exit" | "q" | "quit" => vm.running = false,

                    other => println!("Unknown command {:?}, try 'help'", other),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                vm.running = false;
            }
            Err(err) => {
                debug!("readline error: {:?}", err);
                vm.running = false;
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!("c, continue       Run until the breakpoint or HALT.");
    println!("s, step           Execute a single instruction (also: empty line).");
    println!("i, inspect        Print PC, COND, and R0..R7.");
    println!("d, disassemble    Disassemble the instruction at PC.");
    println!("   read <addr>    Read a memory cell, e.g. read 0x3000");
    println!("   break <addr>   Run until PC reaches <addr>, e.g. break 0x3010");
    println!("exit, q, quit     Leave the debugger.");
}

trait ParseRadixHex {
    fn parse_radix_hex(&self) -> u16;
}

impl ParseRadixHex for str {
    fn parse_radix_hex(&self) -> u16 {
        u16::from_str_radix(self, 16).expect("regex only matches valid hex digits")
    }
}
