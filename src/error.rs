use thiserror::Error;

/// Everything that can go wrong while loading or running an LC-3 image.
///
/// Every 16-bit word is a syntactically valid instruction and every address is
/// in range, so these are the only failure modes the interpreter has.
#[derive(Debug, Error)]
pub enum VmError {
    #[error("reserved opcode {0:#06x} decoded")]
    ReservedOpcode(u16),

    #[error("unknown trap vector {0:#04x}")]
    UnknownTrap(u8),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_opcode_message_includes_the_word() {
        let err = VmError::ReservedOpcode(0x8000);
        assert_eq!(err.to_string(), "reserved opcode 0x8000 decoded");
    }

    #[test]
    fn unknown_trap_message_includes_the_vector() {
        let err = VmError::UnknownTrap(0x30);
        assert_eq!(err.to_string(), "unknown trap vector 0x30");
    }

    #[test]
    fn io_error_converts_via_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: VmError = io_err.into();
        assert!(matches!(err, VmError::Io(_)));
    }
}
