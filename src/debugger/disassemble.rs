use std::convert::TryFrom;

use crate::sign_extend::SignExtend;
use crate::vm::opcode::Opcode;
use crate::vm::trap_vector::TrapVector;

/// Renders a single instruction word as a human-readable mnemonic line, for the
/// debugger's `disassemble` command.
pub fn disassemble(instruction: u16) -> String {
    let opcode = match Opcode::try_from(instruction) {
        Ok(opcode) => opcode,
        Err(()) => return format!("{:#06x} <invalid>", instruction),
    };

    match opcode {
        Opcode::Br => {
            let n = (instruction >> 11) & 1;
            let z = (instruction >> 10) & 1;
            let p = (instruction >> 9) & 1;
            let offset = (instruction & 0x1ff).sign_extend(9) as i16;
            format!("BR n:{} z:{} p:{} #{}", n, z, p, offset)
        }

        Opcode::Add => {
            let dr = (instruction >> 9) & 0x7;
            let sr1 = (instruction >> 6) & 0x7;
            if (instruction >> 5) & 1 == 1 {
                let imm = (instruction & 0x1f).sign_extend(5) as i16;
                format!("ADD R{}, R{}, #{}", dr, sr1, imm)
            } else {
                let sr2 = instruction & 0x7;
                format!("ADD R{}, R{}, R{}", dr, sr1, sr2)
            }
        }

        Opcode::Ld => {
            let dr = (instruction >> 9) & 0x7;
            let offset = (instruction & 0x1ff).sign_extend(9) as i16;
            format!("LD R{}, #{}", dr, offset)
        }

        Opcode::St => {
            let sr = (instruction >> 9) & 0x7;
            let offset = (instruction & 0x1ff).sign_extend(9) as i16;
            format!("ST R{}, #{}", sr, offset)
        }

        Opcode::Jsr => {
            if (instruction >> 11) & 1 == 1 {
                let offset = (instruction & 0x7ff).sign_extend(11) as i16;
                format!("JSR #{}", offset)
            } else {
                let base = (instruction >> 6) & 0x7;
                format!("JSRR R{}", base)
            }
        }

        Opcode::And => {
            let dr = (instruction >> 9) & 0x7;
            let sr1 = (instruction >> 6) & 0x7;
            if (instruction >> 5) & 1 == 1 {
                let imm = (instruction & 0x1f).sign_extend(5) as i16;
                format!("AND R{}, R{}, #{}", dr, sr1, imm)
            } else {
                let sr2 = instruction & 0x7;
                format!("AND R{}, R{}, R{}", dr, sr1, sr2)
            }
        }

        Opcode::Ldr => {
            let dr = (instruction >> 9) & 0x7;
            let base = (instruction >> 6) & 0x7;
            let offset = (instruction & 0x3f).sign_extend(6) as i16;
            format!("LDR R{}, R{}, #{}", dr, base, offset)
        }

        Opcode::Str => {
            let sr = (instruction >> 9) & 0x7;
            let base = (instruction >> 6) & 0x7;
            let offset = (instruction & 0x3f).sign_extend(6) as i16;
            format!("STR R{}, R{}, #{}", sr, base, offset)
        }

        Opcode::Rti => "RTI (reserved)".to_string(),

        Opcode::Not => {
            let dr = (instruction >> 9) & 0x7;
            let sr = (instruction >> 6) & 0x7;
            format!("NOT R{}, R{}", dr, sr)
        }

        Opcode::Ldi => {
            let dr = (instruction >> 9) & 0x7;
            let offset = (instruction & 0x1ff).sign_extend(9) as i16;
            format!("LDI R{}, #{}", dr, offset)
        }

        Opcode::Sti => {
            let sr = (instruction >> 9) & 0x7;
            let offset = (instruction & 0x1ff).sign_extend(9) as i16;
            format!("STI R{}, #{}", sr, offset)
        }

        Opcode::Jmp => {
            let base = (instruction >> 6) & 0x7;
            if base == 7 {
                "RET".to_string()
            } else {
                format!("JMP R{}", base)
            }
        }

        Opcode::Res => "RES (reserved)".to_string(),

        Opcode::Lea => {
            let dr = (instruction >> 9) & 0x7;
            let offset = (instruction & 0x1ff).sign_extend(9) as i16;
            format!("LEA R{}, #{}", dr, offset)
        }

        Opcode::Trap => match TrapVector::decode(instruction) {
            Ok(vector) => format!("TRAP {:?}", vector),
            Err(_) => format!("TRAP {:#04x} <unknown>", instruction & 0xff),
        },
    }
}
