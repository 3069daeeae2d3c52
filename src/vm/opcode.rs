use std::convert::TryFrom;

/// The 4-bit opcode field, used by the debugger to label an instruction without
/// going through the full operand decode in [`super::instruction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opcode {
    Br,
    Add,
    Ld,
    St,
    Jsr,
    And,
    Ldr,
    Str,
    Rti,
    Not,
    Ldi,
    Sti,
    Jmp,
    Res,
    Lea,
    Trap,
}

impl TryFrom<u16> for Opcode {
    type Error = ();

    fn try_from(instruction: u16) -> Result<Self, Self::Error> {
        use Opcode::*;

        let opcode = match instruction >> 12 {
            0x0 => Br,
            0x1 => Add,
            0x2 => Ld,
            0x3 => St,
            0x4 => Jsr,
            0x5 => And,
            0x6 => Ldr,
            0x7 => Str,
            0x8 => Rti,
            0x9 => Not,
            0xa => Ldi,
            0xb => Sti,
            0xc => Jmp,
            0xd => Res,
            0xe => Lea,
            0xf => Trap,
            _ => return Err(()),
        };

        Ok(opcode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_4_bit_field_decodes() {
        for value in 0..16u16 {
            assert!(Opcode::try_from(value << 12).is_ok());
        }
    }

    #[test]
    fn add_opcode_from_an_add_immediate_word() {
        assert_eq!(Opcode::try_from(0x1262).unwrap(), Opcode::Add);
    }
}
