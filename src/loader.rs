use byteorder::{BigEndian, ReadBytesExt};
use log::info;
use std::fs::File;
use std::io::{BufReader, ErrorKind};

use crate::error::VmError;
use crate::vm::Vm;

/// Reads a big-endian LC-3 program image and writes it into `vm`'s memory
/// starting at the origin given by the image's first word. Returns that
/// origin. Does not touch PC or COND; the reset step owns those.
pub fn load_file(filename: &str, vm: &mut Vm) -> Result<u16, VmError> {
    let mut reader = BufReader::new(File::open(filename)?);
    let origin = reader.read_u16::<BigEndian>()?;

    let mut address = origin;
    let mut word_count = 0u32;
    loop {
        match reader.read_u16::<BigEndian>() {
            Ok(word) => {
                vm.memory.write(address, word);
                address = address.wrapping_add(1);
                word_count += 1;
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
            Err(e) => return Err(e.into()),
        }
    }

    info!(
        "loaded {} words at origin {:#06x} from {}",
        word_count, origin, filename
    );

    Ok(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use byteorder::WriteBytesExt;
    use std::io::Write;

    fn write_image(words: &[u16]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for word in words {
            file.write_u16::<BigEndian>(*word).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn loads_words_at_the_images_origin() {
        let file = write_image(&[0x3000, 0x1262, 0xF025]);
        let mut vm = Vm::new();

        let origin = load_file(file.path().to_str().unwrap(), &mut vm).unwrap();

        assert_eq!(origin, 0x3000);
        assert_eq!(vm.memory.read(0x3000), 0x1262);
        assert_eq!(vm.memory.read(0x3001), 0xF025);
    }

    #[test]
    fn load_does_not_move_pc_off_the_conventional_start() {
        let file = write_image(&[0x4000, 0x1262]);
        let mut vm = Vm::new();

        load_file(file.path().to_str().unwrap(), &mut vm).unwrap();

        assert_eq!(vm.registers.pc, 0x3000);
    }

    #[test]
    fn address_wraps_past_the_top_of_memory() {
        let file = write_image(&[0xFFFF, 0x1111, 0x2222]);
        let mut vm = Vm::new();

        load_file(file.path().to_str().unwrap(), &mut vm).unwrap();

        assert_eq!(vm.memory.read(0xFFFF), 0x1111);
        assert_eq!(vm.memory.read(0x0000), 0x2222);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let mut vm = Vm::new();
        match load_file("/nonexistent/path/to/a/program.obj", &mut vm) {
            Err(VmError::Io(_)) => {}
            other => panic!("expected Io error, got {:?}", other),
        }
    }
}
